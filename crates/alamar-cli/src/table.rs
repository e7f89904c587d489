//! Console table rendering

use alamar_core::ViabilitySummary;

/// Column headers of the results table
pub const HEADERS: [&str; 2] = ["Sample", "Cell Viability %"];

/// Turn a viability summary into table rows, percentages at one decimal
pub fn result_rows(summary: &ViabilitySummary) -> Vec<Vec<String>> {
    summary
        .results
        .iter()
        .map(|r| vec![r.sample.clone(), format!("{:.1}", r.viability_pct)])
        .collect()
}

/// Render a grid table with a ruled header row.
///
/// ```text
/// +-----------+------------------+
/// | Sample    | Cell Viability % |
/// +===========+==================+
/// | untreated | 100.0            |
/// +-----------+------------------+
/// ```
pub fn render_grid(header: &[&str], rows: &[Vec<String>]) -> String {
    let cols = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            for _ in 0..width + 2 {
                line.push(fill);
            }
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {cell:<width$} |"));
        }
        line
    };

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&rule('='));
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row));
        out.push('\n');
        out.push_str(&rule('-'));
    }
    out
}

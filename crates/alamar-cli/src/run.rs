//! The interactive analysis pipeline
//!
//! Sequential, blocking, single pass: sheet choice, positive control,
//! additional samples, aggregation, table, optional export. Everything is
//! parameterized over the console streams and the selection provider so
//! the full flow runs under test with scripted input.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

use alamar_core::{
    collect_replicates, compute_viability, replicate_pairs, Sample, ViabilitySummary, Workbook,
    Worksheet,
};
use alamar_docx::DocxWriter;

use crate::prompt::Console;
use crate::select::SelectionProvider;
use crate::table;

/// Answers supplied up front on the command line; anything left `None`
/// is asked interactively.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Sheet holding the absorbance readings
    pub sheet: Option<String>,
    /// Remove statistical outliers from samples with > 2 replicates
    pub remove_outliers: Option<bool>,
    /// Export target; `Some` skips the export prompt
    pub output: Option<std::path::PathBuf>,
}

/// Run the whole analysis against an already-loaded workbook.
pub fn run<R: BufRead, W: Write, P: SelectionProvider<R, W>>(
    console: &mut Console<R, W>,
    provider: &mut P,
    workbook: &Workbook,
    opts: &RunOptions,
) -> Result<()> {
    let sheet_name = match &opts.sheet {
        Some(name) => name.clone(),
        None => {
            console.say(&format!(
                "Available sheets: {}",
                workbook.sheet_names().join(", ")
            ))?;
            console.ask("Enter the sheet name: ")?
        }
    };

    let Some(sheet) = workbook.worksheet_by_name(&sheet_name) else {
        bail!("Sheet '{sheet_name}' does not exist in the workbook.");
    };

    // Positive control: no baseline without it, so failures here are fatal
    let control_name = console.ask("Enter the positive control sample name: ")?;
    let control_values = collect_sample(console, provider, sheet, &sheet_name, &control_name)
        .with_context(|| format!("Range selection failed for positive control '{control_name}'"))?;

    if control_values.is_empty() {
        bail!("No valid data found for positive control '{control_name}'.");
    }

    let control = Sample::new(control_name, control_values);

    let remove_outliers = match opts.remove_outliers {
        Some(answer) => answer,
        None => console.ask_yes_no("Do you want to remove outliers for the samples?")?,
    };

    let num_samples = console.ask_count("Enter the number of additional samples: ")?;
    let mut samples = Vec::with_capacity(num_samples);

    for _ in 0..num_samples {
        let sample_name = console.ask("Enter the sample name: ")?;

        let values = match collect_sample(console, provider, sheet, &sheet_name, &sample_name) {
            Ok(values) => values,
            Err(e) => {
                warn!(sample = %sample_name, "range selection failed: {e:#}");
                console.say(&format!(
                    "Range selection failed for {sample_name}: {e:#}. Skipping."
                ))?;
                continue;
            }
        };

        if values.is_empty() {
            console.say(&format!("No valid data found for {sample_name}. Skipping."))?;
            continue;
        }

        samples.push(Sample::new(sample_name, values));
    }

    let summary = compute_viability(&control, &samples, remove_outliers)?;
    report_diagnostics(console, &summary)?;

    console.say("\nCell Viability Results:")?;
    let rows = table::result_rows(&summary);
    let grid = table::render_grid(&table::HEADERS, &rows);
    writeln!(console.output(), "{grid}")?;

    export_if_wanted(console, opts, &rows)?;

    Ok(())
}

/// Select a range for one sample and read its replicate values.
///
/// Range validation problems (odd row count, unparseable input) are
/// recoverable: the user is told and asked to select again. Provider
/// failures propagate; the caller decides whether that skips the sample
/// or aborts the run.
pub fn collect_sample<R: BufRead, W: Write, P: SelectionProvider<R, W>>(
    console: &mut Console<R, W>,
    provider: &mut P,
    sheet: &Worksheet,
    sheet_name: &str,
    sample_name: &str,
) -> Result<Vec<f64>> {
    loop {
        let range = provider.select_range(console, sheet_name, sample_name)?;

        match replicate_pairs(&range) {
            Ok(pairs) => return Ok(collect_replicates(sheet, &pairs)),
            Err(e) => {
                console.say(&format!("{e}. Please select the range again."))?;
            }
        }
    }
}

/// Tell the user about discarded outliers and skipped samples
fn report_diagnostics<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summary: &ViabilitySummary,
) -> Result<()> {
    for report in &summary.outliers {
        let values: Vec<String> = report
            .discarded
            .iter()
            .map(|o| format!("{} (replicate {})", o.value, o.index + 1))
            .collect();
        console.say(&format!(
            "Removed outliers for {}: {}",
            report.sample,
            values.join(", ")
        ))?;
    }

    for name in &summary.skipped {
        console.say(&format!("No usable data for {name}; left out of the results."))?;
    }

    Ok(())
}

/// Optionally export the rendered rows to a DOCX table.
///
/// Export failures are reported and swallowed: the results are already on
/// screen.
fn export_if_wanted<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    opts: &RunOptions,
    rows: &[Vec<String>],
) -> Result<()> {
    let output = match &opts.output {
        Some(path) => path.clone(),
        None => {
            if !console.ask_yes_no("Do you want to export the table to a Word document?")? {
                return Ok(());
            }
            let name = console.ask("Enter the output file name (with .docx extension): ")?;
            std::path::PathBuf::from(name)
        }
    };

    let header: Vec<String> = table::HEADERS.iter().map(|h| h.to_string()).collect();
    match DocxWriter::write_table_file(&output, &header, rows) {
        Ok(written) => {
            console.say(&format!(
                "Word document saved successfully as '{}'.",
                written.display()
            ))?;
        }
        Err(e) => {
            warn!("export failed: {e}");
            console.say(&format!(
                "An error occurred while exporting to Word document: {e}"
            ))?;
        }
    }

    Ok(())
}

//! Mapping selected ranges onto replicate readings
//!
//! A replicate occupies two consecutive rows in one column: the 570nm
//! absorbance reading first, the 600nm reading directly below it.

use tracing::warn;

use crate::address::{CellAddress, CellRange};
use crate::assay::adjusted_absorbance;
use crate::error::{Error, Result};
use crate::worksheet::Worksheet;

/// The cell addresses holding one replicate's two readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicatePair {
    /// Cell holding the 570nm reading (odd row of the pair)
    pub cell_570: CellAddress,
    /// Cell holding the 600nm reading (row directly below)
    pub cell_600: CellAddress,
}

/// Split a selected range into ordered replicate pairs.
///
/// Pair `i` covers rows `start + 2i` and `start + 2i + 1` of the range's
/// start column. A range with an odd row count is rejected: the final
/// replicate would be missing its 600nm row. Ranges wider than one column
/// use the start column only.
///
/// # Examples
/// ```
/// use alamar_core::{replicate_pairs, CellRange};
///
/// let pairs = replicate_pairs(&CellRange::parse("A1:A8").unwrap()).unwrap();
/// assert_eq!(pairs.len(), 4);
/// assert_eq!(pairs[0].cell_570.to_string(), "A1");
/// assert_eq!(pairs[0].cell_600.to_string(), "A2");
/// ```
pub fn replicate_pairs(range: &CellRange) -> Result<Vec<ReplicatePair>> {
    let rows = range.row_count();
    if rows % 2 != 0 {
        return Err(Error::OddRowCount(range.to_a1_string(), rows));
    }

    if range.col_count() > 1 {
        warn!(
            range = %range,
            "range spans {} columns; using column {} only",
            range.col_count(),
            CellAddress::column_to_letters(range.start.col)
        );
    }

    let col = range.start.col;
    let mut pairs = Vec::with_capacity((rows / 2) as usize);
    for row in (range.start.row..=range.end.row).step_by(2) {
        pairs.push(ReplicatePair {
            cell_570: CellAddress::new(row, col),
            cell_600: CellAddress::new(row + 1, col),
        });
    }

    Ok(pairs)
}

/// Read replicate pairs off a worksheet and compute adjusted absorbances.
///
/// A pair with a missing or non-numeric reading in either cell is skipped
/// with a warning; it contributes nothing downstream. The caller decides
/// what an empty result means (fatal for the positive control, skip for
/// any other sample).
pub fn collect_replicates(sheet: &Worksheet, pairs: &[ReplicatePair]) -> Vec<f64> {
    let mut values = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let v570 = sheet.value(&pair.cell_570).as_number();
        let v600 = sheet.value(&pair.cell_600).as_number();

        match (v570, v600) {
            (Some(v570), Some(v600)) => values.push(adjusted_absorbance(v570, v600)),
            _ => {
                warn!(
                    "missing data in cells {} or {}; skipping this replicate",
                    pair.cell_570, pair.cell_600
                );
            }
        }
    }

    values
}

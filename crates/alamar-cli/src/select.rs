//! Range selection behind an injectable seam
//!
//! The reference workflow has the user highlight the replicate block in a
//! live spreadsheet application; everything downstream only needs the
//! resulting range. [`SelectionProvider`] is that boundary: the production
//! implementation asks the user to type the selection, and a bridge to a
//! live application would slot in here without touching the pipeline.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use tracing::debug;

use alamar_core::CellRange;

use crate::prompt::Console;

/// Source of user-selected cell ranges
pub trait SelectionProvider<R, W> {
    /// Obtain the selected replicate range for `sample_name` on `sheet_name`.
    ///
    /// Implementations own any external session involved and must release
    /// it before returning, on success and on error alike.
    fn select_range(
        &mut self,
        console: &mut Console<R, W>,
        sheet_name: &str,
        sample_name: &str,
    ) -> Result<CellRange>;
}

/// Holds whatever the selection step has open for one sample.
///
/// For typed-in selections that is nothing but a log marker; a live bridge
/// would keep its workbook handle here. Release happens on drop, so every
/// exit path out of a selection cycle closes the session.
struct SelectionSession<'a> {
    sheet_name: &'a str,
}

impl<'a> SelectionSession<'a> {
    fn open(sheet_name: &'a str) -> Self {
        debug!(sheet = sheet_name, "selection session opened");
        Self { sheet_name }
    }
}

impl Drop for SelectionSession<'_> {
    fn drop(&mut self) {
        debug!(sheet = self.sheet_name, "selection session released");
    }
}

/// Selection provider that asks the user to type the range
pub struct PromptSelection;

impl<R: BufRead, W: Write> SelectionProvider<R, W> for PromptSelection {
    fn select_range(
        &mut self,
        console: &mut Console<R, W>,
        sheet_name: &str,
        sample_name: &str,
    ) -> Result<CellRange> {
        let _session = SelectionSession::open(sheet_name);

        let answer = console.ask(&format!(
            "Enter the cell range for {sample_name} on sheet '{sheet_name}' (e.g. A1:A8): "
        ))?;

        // Live selections arrive as $A$1:$A$8; typed ones usually without $
        let range = CellRange::parse(&answer.replace('$', ""))
            .map_err(|e| anyhow!("invalid range selection '{answer}': {e}"))?;

        Ok(range)
    }
}

/// Test provider yielding pre-queued ranges in order
#[cfg(test)]
pub struct FakeSelection {
    ranges: std::vec::IntoIter<Result<CellRange>>,
}

#[cfg(test)]
impl FakeSelection {
    /// Queue up selection outcomes, consumed one per call
    pub fn new(ranges: Vec<Result<CellRange>>) -> Self {
        Self {
            ranges: ranges.into_iter(),
        }
    }
}

#[cfg(test)]
impl<R, W> SelectionProvider<R, W> for FakeSelection {
    fn select_range(
        &mut self,
        _console: &mut Console<R, W>,
        _sheet_name: &str,
        sample_name: &str,
    ) -> Result<CellRange> {
        self.ranges
            .next()
            .unwrap_or_else(|| Err(anyhow!("no selection queued for {sample_name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alamar_core::CellAddress;

    #[test]
    fn test_prompt_selection_parses_typed_range() {
        let mut console = Console::new("A1:A8\n".as_bytes(), Vec::new());
        let range = PromptSelection
            .select_range(&mut console, "Plate 1", "untreated")
            .unwrap();
        assert_eq!(range, CellAddress::new(0, 0).to(CellAddress::new(7, 0)));
    }

    #[test]
    fn test_prompt_selection_strips_absolute_markers() {
        let mut console = Console::new("$B$3:$B$10\n".as_bytes(), Vec::new());
        let range = PromptSelection
            .select_range(&mut console, "Plate 1", "drug A")
            .unwrap();
        assert_eq!(range.to_a1_string(), "B3:B10");
    }

    #[test]
    fn test_prompt_selection_rejects_garbage() {
        let mut console = Console::new("not-a-range\n".as_bytes(), Vec::new());
        let result = PromptSelection.select_range(&mut console, "Plate 1", "drug A");
        assert!(result.is_err());
    }

    #[test]
    fn test_fake_selection_drains_queue() {
        let mut fake = FakeSelection::new(vec![Ok(CellRange::parse("A1:A4").unwrap())]);
        let mut console = Console::new("".as_bytes(), Vec::new());

        let range: CellRange = fake
            .select_range(&mut console, "Plate 1", "untreated")
            .unwrap();
        assert_eq!(range.to_a1_string(), "A1:A4");

        // Queue exhausted: behaves like a failed external interaction
        assert!(fake.select_range(&mut console, "Plate 1", "drug A").is_err());
    }
}

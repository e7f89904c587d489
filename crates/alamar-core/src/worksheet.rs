//! Worksheet type with sparse cell storage

use std::collections::HashMap;

use crate::address::CellAddress;
use crate::value::CellValue;

/// A single worksheet: a name plus sparse cell storage
///
/// Only cells that were actually present in the source file are stored;
/// everything else reads back as [`CellValue::Empty`].
#[derive(Debug, Default)]
pub struct Worksheet {
    name: String,
    cells: HashMap<(u32, u16), CellValue>,
}

impl Worksheet {
    /// Create a new empty worksheet
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: HashMap::new(),
        }
    }

    /// Get the worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Set a cell value by address
    pub fn set_value(&mut self, addr: CellAddress, value: CellValue) {
        if value.is_empty() {
            self.cells.remove(&(addr.row, addr.col));
        } else {
            self.cells.insert((addr.row, addr.col), value);
        }
    }

    /// Set a cell value by row/column indices (0-based)
    pub fn set_value_at(&mut self, row: u32, col: u16, value: CellValue) {
        self.set_value(CellAddress::new(row, col), value);
    }

    /// Get a cell value by address; empty cells return [`CellValue::Empty`]
    pub fn value(&self, addr: &CellAddress) -> &CellValue {
        self.cells
            .get(&(addr.row, addr.col))
            .unwrap_or(&CellValue::Empty)
    }

    /// Get a cell value by row/column indices (0-based)
    pub fn value_at(&self, row: u32, col: u16) -> &CellValue {
        self.value(&CellAddress::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut sheet = Worksheet::new("Plate 1");
        assert_eq!(sheet.name(), "Plate 1");

        sheet.set_value_at(0, 0, CellValue::Number(0.5));
        sheet.set_value(CellAddress::parse("A2").unwrap(), CellValue::Number(0.2));

        assert_eq!(sheet.value_at(0, 0).as_number(), Some(0.5));
        assert_eq!(
            sheet.value(&CellAddress::parse("A2").unwrap()).as_number(),
            Some(0.2)
        );
        assert!(sheet.value_at(5, 5).is_empty());
    }

    #[test]
    fn test_setting_empty_clears() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_value_at(0, 0, CellValue::Number(1.0));
        sheet.set_value_at(0, 0, CellValue::Empty);
        assert!(sheet.value_at(0, 0).is_empty());
        assert_eq!(sheet.cell_count(), 0);
    }
}

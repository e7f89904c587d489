//! # alamar-xlsx
//!
//! XLSX (Office Open XML) reader for the alamar assay analyzer.
//!
//! Reads cell values only: numbers, strings (shared and inline) and
//! booleans. Styles, comments, formulas and the rest of the format are
//! ignored; absorbance data is plain numbers in plain cells.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;

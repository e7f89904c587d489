//! # alamar-core
//!
//! Core data structures and math for alamarBlue cell-viability analysis:
//! - [`CellAddress`] and [`CellRange`] - A1-style cell addressing
//! - [`Workbook`], [`Worksheet`], [`CellValue`] - the in-memory spreadsheet model
//! - [`ReplicatePair`] and range pairing - mapping a selected range onto
//!   (570nm, 600nm) replicate readings
//! - [`compute_viability`] - replicate averaging, IQR outlier filtering and
//!   viability percentages relative to a positive control
//!
//! This crate is pure computation: no file I/O, no prompting. Reading XLSX
//! files lives in `alamar-xlsx`, the interactive flow in `alamar-cli`.
//!
//! ## Example
//!
//! ```rust
//! use alamar_core::{compute_viability, Sample};
//!
//! let control = Sample::new("untreated", vec![100.0, 110.0, 105.0]);
//! let treated = Sample::new("drug A", vec![90.0, 95.0]);
//!
//! let summary = compute_viability(&control, &[treated], false).unwrap();
//! assert_eq!(summary.results[1].viability_pct, 88.1);
//! ```

pub mod address;
pub mod assay;
pub mod error;
pub mod replicate;
pub mod stats;
pub mod value;
pub mod viability;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use assay::adjusted_absorbance;
pub use error::{Error, Result};
pub use replicate::{collect_replicates, replicate_pairs, ReplicatePair};
pub use stats::Outlier;
pub use value::CellValue;
pub use viability::{
    compute_viability, OutlierReport, Sample, ViabilityResult, ViabilitySummary,
};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

//! # alamar-docx
//!
//! Minimal DOCX (Office Open XML WordprocessingML) writer: a document
//! containing exactly one table, used to export viability results.

pub mod error;
pub mod writer;

pub use error::{DocxError, DocxResult};
pub use writer::DocxWriter;

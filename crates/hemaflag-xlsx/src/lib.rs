//! Spreadsheet file boundary for hemaflag.

pub mod document;
pub mod error;

pub use document::XlsxDocument;
pub use error::{Result, XlsxError};

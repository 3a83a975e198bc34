use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XlsxError {
    #[error("failed to read workbook {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },
    #[error("failed to write workbook {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },
    #[error("sheet {index} ({name}) is no longer present in the workbook")]
    MissingSheet { index: usize, name: String },
}

pub type Result<T> = std::result::Result<T, XlsxError>;

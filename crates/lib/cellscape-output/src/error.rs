use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

pub type OutputResult<T> = Result<T, OutputError>;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("output file error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build record batch: {0}")]
    Arrow(#[from] ArrowError),

    #[error("failed to write parquet file: {0}")]
    Parquet(#[from] ParquetError),

    /// Only `.parquet` and `.csv` files can be written.
    #[error("cannot pick a writer for {}, use a .parquet or .csv file", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed to set up logging: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    fn open_missing(path: &std::path::Path) -> OutputResult<std::fs::File> {
        Ok(std::fs::File::open(path)?)
    }

    #[test]
    fn test_io_error_converts_and_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let error = open_missing(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(error, OutputError::Io(_)));
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("output file error: "));
    }

    #[test]
    fn test_unsupported_extension_message() {
        let error = OutputError::UnsupportedExtension(PathBuf::from("out/sites.json"));
        assert_eq!(
            error.to_string(),
            "cannot pick a writer for out/sites.json, use a .parquet or .csv file"
        );
        assert!(error.source().is_none());
    }
}

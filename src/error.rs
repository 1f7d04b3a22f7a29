use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error on {path}: {message}")]
    Walk { path: PathBuf, message: String },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ccconv-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading logs
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

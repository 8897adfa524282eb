use std::path::PathBuf;
use thiserror::Error;

/// Error type returned by resource listers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to scan classpath root {}: {source}", .root.display())]
    ScanFailure {
        root: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("{} already exists or directory", .0.display())]
    DestinationExists(PathBuf),
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn scan(root: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        GeneratorError::ScanFailure {
            root: root.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

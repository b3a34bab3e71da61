//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the assembly pipeline.
///
/// Every phase returns one of these; the orchestrator stops at the first
/// error and no notebook is written.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid file extension: {0}")]
    InvalidExtension(PathBuf),

    #[error("requirements file is empty: {0}")]
    EmptyRequirements(PathBuf),

    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssemblyError {
    /// Wrap a `std::io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

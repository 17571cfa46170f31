use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Could not determine home directory")]
    HomeDirUnavailable,
    #[error("{source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid exclude pattern: {0}")]
    Pattern(String),
}
impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }
}

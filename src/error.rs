use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coursepatch operations
#[derive(Error, Debug)]
pub enum PatchError {
    /// IO error when reading or writing data files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Data file not found error with specific path
    #[error("Data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Regex compilation error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Walk error when scanning a project directory
    #[error("Directory scan error: {0}")]
    Walk(#[from] ignore::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PatchError>;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell a clean run apart from a run that produced a table
/// but had to skip some SBOM files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every discovered SBOM document was flattened
    Success = 0,
    /// The table was written, but one or more SBOM files were skipped
    DocumentsSkipped = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid root path, config error, output write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DocumentsSkipped => write!(f, "Documents Skipped (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM flattening.
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Invalid root directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory that contains SBOM JSON files")]
    InvalidRootPath { path: PathBuf, reason: String },

    #[error("Failed to read SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomReadError { path: PathBuf, details: String },

    #[error("Failed to scan directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read and execute permissions on the directory")]
    TraversalError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

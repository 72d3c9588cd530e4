use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - a graph was rendered, or the package had no dependencies
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, render error, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Note that extraction failures (missing archive, missing or malformed
/// manifest) are deliberately NOT in this enum: they degrade to an empty
/// listing instead of aborting, and are reported through
/// `ExtractionStatus`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("No target package specified\n\n💡 Hint: Pass --package <ID> or set package_name in the [visualizer] section of nupkg-graph.toml")]
    PackageNotSpecified,

    #[error("Failed to render graph image: {path}\nDetails: {details}\n\n💡 Hint: Check that the Graphviz 'dot' binary is installed and on PATH, or use --format dot to emit the graph source instead")]
    RenderError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

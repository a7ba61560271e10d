//! Error types for cine-tui
//!
//! Wraps library and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (config, catalog)
    #[error("Service error: {0}")]
    Service(#[from] libcinescope::CinescopeError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

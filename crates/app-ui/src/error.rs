//! Style system errors
//!
//! Only the strict parsing entry points return these. The normalizer, the
//! builder's tolerant path and the resolver degrade instead of failing.

use thiserror::Error;

/// Style errors
#[derive(Debug, Error)]
pub enum StyleError {
    /// Declaration input has the wrong shape
    #[error("Invalid style declaration: {0}")]
    InvalidDeclaration(String),

    /// Unknown breakpoint name
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// Unknown theme name
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

//! Platform provider for Vex
//!
//! This crate describes the environment the style layer renders into: which
//! platform is active, the current viewport, the preferred color scheme, and a
//! debounced viewport-resize watcher.
//!
//! # Example
//!
//! ```rust
//! use app_platform::{Platform, PlatformContext, Viewport};
//!
//! let ctx = PlatformContext::new(Platform::Native, Viewport::new(390, 844));
//! assert!(ctx.is_native());
//! assert_eq!(ctx.viewport.width, 390);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod resize;

use thiserror::Error;

pub use context::{ColorScheme, ColorSchemeSource, Platform, PlatformContext, Viewport};
pub use resize::{ViewportWatcher, DEFAULT_RESIZE_DEBOUNCE};

/// Platform errors
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The resize watcher task is no longer running
    #[error("Viewport watcher closed")]
    Closed,

    /// No async runtime is available to drive the watcher
    #[error("No async runtime available: {0}")]
    NoRuntime(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

//! Vex UI style layer
//!
//! Facade over the workspace crates:
//!
//! - [`app_ui`] - declarations, normalization, themes, resolution, interactive state
//! - [`app_platform`] - platform context and viewport resize watching

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_platform;
pub use app_ui;

/// Commonly used types
pub mod prelude {
    pub use app_platform::{ColorScheme, Platform, PlatformContext, Viewport, ViewportWatcher};
    pub use app_ui::{
        style_map, Breakpoint, ColorMode, Interactive, InteractiveStyles, ResolvedStyle, StyleConfig,
        StyleDeclarations, StyleOptions, StyleProxy, StyleValue, Theme, ThemeName, ThemeState, UnifiedStyles,
    };
}

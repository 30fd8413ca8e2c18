//! Style system for Vex
//!
//! This crate turns component style declarations into platform-ready styles.
//! On web a class keeps its CSS syntax and is addressed by class name; on
//! native every value is normalized into plain numbers and strings, CSS
//! variables are resolved against the active theme, and responsive values are
//! collapsed for the current viewport.
//!
//! # Modules
//!
//! - [`value`] - Style values and declarations
//! - [`normalize`] - Per-property value normalization
//! - [`unified`] - Native/web/all views of a declaration
//! - [`resolve`] - Theme and responsive resolution
//! - [`proxy`] - Cached per-component style accessor
//! - [`interactive`] - Hover/press/focus state and layered styles
//! - [`breakpoints`] - Breakpoint tokens and responsive values
//! - [`theme`] - Theme palettes and theme provider
//! - [`clsx`] - Class name composition
//! - [`config`] - Style system configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_platform::{Platform, PlatformContext, Viewport};
//! use app_ui::{style_map, StyleConfig, StyleDeclarations, StyleProxy, StyleValue};
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let decls = StyleDeclarations::new().with(
//!     "box",
//!     style_map! { "padding" => "10px", "color" => "var(--accent-1)" },
//! );
//!
//! let ctx = PlatformContext::new(Platform::Native, Viewport::new(390, 844));
//! let theme = Arc::new(get_theme(ThemeName::Light));
//! let mut styles = StyleProxy::from_declarations(&decls, theme, Some(ctx), StyleConfig::default());
//!
//! let resolved = styles.get("box").unwrap();
//! assert_eq!(resolved.style["padding"], StyleValue::Int(10));
//! assert_eq!(resolved.style["color"], StyleValue::from("#f97316"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breakpoints;
pub mod clsx;
pub mod config;
pub mod error;
pub mod interactive;
pub mod normalize;
pub mod proxy;
pub mod resolve;
pub mod theme;
pub mod unified;
pub mod value;

// Re-export commonly used types
pub use theme::{
    get_theme, all_themes, light_theme, dark_theme,
    ColorMode, Theme, ThemeKey, ThemeName, ThemeState,
};

pub use breakpoints::{Breakpoint, Responsive};
pub use clsx::{clsx, ClassList};
pub use config::StyleConfig;
pub use error::{Result, StyleError};
pub use interactive::{
    InteractionEvent, Interactive, InteractiveOutput, InteractiveState, InteractiveStyles,
};
pub use normalize::{normalize_value, Normalized, StyleOptions};
pub use proxy::{ResolvedStyle, StyleCache, StyleProxy};
pub use resolve::{resolve_style, resolve_theme_value};
pub use unified::UnifiedStyles;
pub use value::{
    InteractiveDeclaration, StyleDeclaration, StyleDeclarations, StyleMap, StyleValue,
};

//! Platform context
//!
//! The platform is injected at application start instead of being inferred
//! from globals. Components that find no context fall back to
//! [`PlatformContext::default`], which is a web environment.

use serde::{Deserialize, Serialize};

/// Rendering target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser with CSS class support
    #[default]
    Web,
    /// Native renderer that needs resolved style objects
    Native,
    /// Server-side rendering (no window, no media queries)
    Server,
}

impl Platform {
    /// Whether style objects must be fully resolved for this platform
    pub fn is_native(&self) -> bool {
        matches!(self, Platform::Native)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Web => write!(f, "web"),
            Platform::Native => write!(f, "native"),
            Platform::Server => write!(f, "server"),
        }
    }
}

/// Viewport dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Preferred color scheme reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
}

/// Source of the platform's color-scheme preference (a media query on web,
/// the appearance API on native)
#[cfg_attr(test, mockall::automock)]
pub trait ColorSchemeSource {
    /// The preferred scheme, or `None` when the platform cannot tell
    fn preferred_color_scheme(&self) -> Option<ColorScheme>;
}

/// Everything the style layer needs to know about where it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlatformContext {
    /// Active platform
    pub platform: Platform,
    /// Current viewport
    pub viewport: Viewport,
    /// Color scheme hint, if one was observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
}

impl PlatformContext {
    /// Create a context without a color scheme hint
    pub fn new(platform: Platform, viewport: Viewport) -> Self {
        Self {
            platform,
            viewport,
            color_scheme: None,
        }
    }

    /// Create a context, sampling the color scheme from `source`
    pub fn observe(platform: Platform, viewport: Viewport, source: &dyn ColorSchemeSource) -> Self {
        let color_scheme = match platform {
            // Media queries are not evaluated during SSR
            Platform::Server => None,
            _ => source.preferred_color_scheme(),
        };
        Self {
            platform,
            viewport,
            color_scheme,
        }
    }

    /// Server-side rendering context
    pub fn server() -> Self {
        Self::new(Platform::Server, Viewport::default())
    }

    /// Set the color scheme hint
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    /// Set the viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Whether the native style path is in use
    pub fn is_native(&self) -> bool {
        self.platform.is_native()
    }

    /// The effective color scheme.
    ///
    /// Server rendering defaults to dark; other platforms without a hint
    /// default to light.
    pub fn effective_color_scheme(&self) -> ColorScheme {
        match (self.platform, self.color_scheme) {
            (Platform::Server, _) => ColorScheme::Dark,
            (_, Some(scheme)) => scheme,
            (_, None) => ColorScheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_web() {
        let ctx = PlatformContext::default();
        assert_eq!(ctx.platform, Platform::Web);
        assert!(!ctx.is_native());
        assert_eq!(ctx.viewport, Viewport::new(1024, 768));
    }

    #[test]
    fn test_server_defaults_to_dark() {
        let ctx = PlatformContext::server();
        assert_eq!(ctx.effective_color_scheme(), ColorScheme::Dark);

        // A stray hint does not override SSR
        let ctx = PlatformContext::server().with_color_scheme(ColorScheme::Light);
        assert_eq!(ctx.effective_color_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_web_without_hint_is_light() {
        let ctx = PlatformContext::new(Platform::Web, Viewport::default());
        assert_eq!(ctx.effective_color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_observe_uses_source() {
        let mut source = MockColorSchemeSource::new();
        source
            .expect_preferred_color_scheme()
            .times(1)
            .return_const(Some(ColorScheme::Dark));

        let ctx = PlatformContext::observe(Platform::Native, Viewport::new(390, 844), &source);
        assert_eq!(ctx.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(ctx.effective_color_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_observe_skips_source_on_server() {
        let mut source = MockColorSchemeSource::new();
        source.expect_preferred_color_scheme().times(0);

        let ctx = PlatformContext::observe(Platform::Server, Viewport::default(), &source);
        assert_eq!(ctx.color_scheme, None);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Web.to_string(), "web");
        assert_eq!(Platform::Native.to_string(), "native");
        assert_eq!(Platform::Server.to_string(), "server");
    }

    #[test]
    fn test_context_serialization() {
        let ctx = PlatformContext::new(Platform::Native, Viewport::new(390, 844));
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"native\""));
        assert!(!json.contains("color_scheme"));

        let deserialized: PlatformContext = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ctx);
    }
}

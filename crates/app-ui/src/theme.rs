//! Themes and theme provider for Vex
//!
//! A theme is a fixed-shape palette: nine accent colors, eight shades, the
//! page background/foreground, shadow and overlay effects, and a corner
//! radius. Style declarations reference theme entries through CSS variables
//! (`var(--accent-1)`), which [`ThemeKey`] maps onto the palette.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeKey, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let accent = theme.value(ThemeKey::Accent(1));
//! assert_eq!(accent, "#f97316");
//! ```

use crate::error::StyleError;
use app_platform::{ColorScheme, PlatformContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a CSS color string (e.g., "#ffffff" or "rgba(0, 0, 0, 0.4)")
pub type Color = String;

// =============================================================================
// Brand Colors
// =============================================================================

/// Accent colors shared by every theme
pub mod accent {
    /// Blue
    pub const BLUE: &str = "#3b82f6";
    /// Orange (primary brand accent)
    pub const ORANGE: &str = "#f97316";
    /// Violet
    pub const VIOLET: &str = "#8b5cf6";
    /// Cyan
    pub const CYAN: &str = "#06b6d4";
    /// Green
    pub const GREEN: &str = "#10b981";
    /// Yellow
    pub const YELLOW: &str = "#eab308";
    /// Indigo
    pub const INDIGO: &str = "#6366f1";
    /// Red
    pub const RED: &str = "#ef4444";
    /// Pink
    pub const PINK: &str = "#ec4899";
}

// =============================================================================
// Palettes
// =============================================================================

/// Accent colors (`--accent-0` .. `--accent-8`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentPalette {
    /// `--accent-0` (blue)
    pub accent_0: Color,
    /// `--accent-1` (orange, the primary brand accent)
    pub accent_1: Color,
    /// `--accent-2` (violet)
    pub accent_2: Color,
    /// `--accent-3` (cyan)
    pub accent_3: Color,
    /// `--accent-4` (green)
    pub accent_4: Color,
    /// `--accent-5` (yellow)
    pub accent_5: Color,
    /// `--accent-6` (indigo)
    pub accent_6: Color,
    /// `--accent-7` (red)
    pub accent_7: Color,
    /// `--accent-8` (pink)
    pub accent_8: Color,
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self {
            accent_0: accent::BLUE.to_string(),
            accent_1: accent::ORANGE.to_string(),
            accent_2: accent::VIOLET.to_string(),
            accent_3: accent::CYAN.to_string(),
            accent_4: accent::GREEN.to_string(),
            accent_5: accent::YELLOW.to_string(),
            accent_6: accent::INDIGO.to_string(),
            accent_7: accent::RED.to_string(),
            accent_8: accent::PINK.to_string(),
        }
    }
}

impl AccentPalette {
    /// Get an accent by index (0-8)
    pub fn get(&self, index: u8) -> Option<&str> {
        match index {
            0 => Some(&self.accent_0),
            1 => Some(&self.accent_1),
            2 => Some(&self.accent_2),
            3 => Some(&self.accent_3),
            4 => Some(&self.accent_4),
            5 => Some(&self.accent_5),
            6 => Some(&self.accent_6),
            7 => Some(&self.accent_7),
            8 => Some(&self.accent_8),
            _ => None,
        }
    }
}

/// Neutral shades (`--shade-1` lightest-contrast .. `--shade-8` strongest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadePalette {
    /// `--shade-1`, subtle surfaces
    pub shade_1: Color,
    /// `--shade-2`, hairline borders
    pub shade_2: Color,
    /// `--shade-3`, stronger borders
    pub shade_3: Color,
    /// `--shade-4`, disabled text
    pub shade_4: Color,
    /// `--shade-5`, placeholder text
    pub shade_5: Color,
    /// `--shade-6`, secondary text
    pub shade_6: Color,
    /// `--shade-7`, emphasized text
    pub shade_7: Color,
    /// `--shade-8`, strongest contrast
    pub shade_8: Color,
}

impl ShadePalette {
    fn from_stops(stops: [&str; 8]) -> Self {
        Self {
            shade_1: stops[0].to_string(),
            shade_2: stops[1].to_string(),
            shade_3: stops[2].to_string(),
            shade_4: stops[3].to_string(),
            shade_5: stops[4].to_string(),
            shade_6: stops[5].to_string(),
            shade_7: stops[6].to_string(),
            shade_8: stops[7].to_string(),
        }
    }

    /// Get a shade by index (1-8)
    pub fn get(&self, index: u8) -> Option<&str> {
        match index {
            1 => Some(&self.shade_1),
            2 => Some(&self.shade_2),
            3 => Some(&self.shade_3),
            4 => Some(&self.shade_4),
            5 => Some(&self.shade_5),
            6 => Some(&self.shade_6),
            7 => Some(&self.shade_7),
            8 => Some(&self.shade_8),
            _ => None,
        }
    }
}

/// Shadow and overlay effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    /// Box shadow for raised surfaces
    pub shadow: String,
    /// Backdrop color behind modals
    pub overlay: Color,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
}

impl From<ColorScheme> for ThemeName {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeName::Light,
            ColorScheme::Dark => ThemeName::Dark,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(StyleError::UnknownTheme(s.to_string())),
        }
    }
}

/// A theme entry addressable from a CSS variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    /// `--accent-N` (0-8)
    Accent(u8),
    /// `--shade-N` (1-8)
    Shade(u8),
    /// `--background`
    Background,
    /// `--foreground`
    Foreground,
    /// `--shadow`
    Shadow,
    /// `--overlay`
    Overlay,
    /// `--radius`
    Radius,
}

impl ThemeKey {
    /// Map a CSS variable name (with or without the leading `--`) to a key
    pub fn from_var_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches("--");

        if let Some(index) = name.strip_prefix("accent-") {
            return index.parse::<u8>().ok().filter(|i| *i <= 8).map(ThemeKey::Accent);
        }
        if let Some(index) = name.strip_prefix("shade-") {
            return index
                .parse::<u8>()
                .ok()
                .filter(|i| (1..=8).contains(i))
                .map(ThemeKey::Shade);
        }

        match name {
            "background" => Some(ThemeKey::Background),
            "foreground" => Some(ThemeKey::Foreground),
            "shadow" => Some(ThemeKey::Shadow),
            "overlay" => Some(ThemeKey::Overlay),
            "radius" => Some(ThemeKey::Radius),
            _ => None,
        }
    }

    /// The CSS variable spelling of this key
    pub fn var_name(&self) -> String {
        match self {
            ThemeKey::Accent(i) => format!("--accent-{}", i),
            ThemeKey::Shade(i) => format!("--shade-{}", i),
            ThemeKey::Background => "--background".to_string(),
            ThemeKey::Foreground => "--foreground".to_string(),
            ThemeKey::Shadow => "--shadow".to_string(),
            ThemeKey::Overlay => "--overlay".to_string(),
            ThemeKey::Radius => "--radius".to_string(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Accent colors
    pub accent: AccentPalette,
    /// Neutral shades
    pub shade: ShadePalette,
    /// Page background
    pub background: Color,
    /// Default text color
    pub foreground: Color,
    /// Shadow and overlay effects
    pub effects: Effects,
    /// Corner radius
    pub radius: String,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Look up a theme entry.
    ///
    /// Out-of-range accent/shade indices fall back to the nearest valid stop.
    pub fn value(&self, key: ThemeKey) -> &str {
        match key {
            ThemeKey::Accent(i) => self.accent.get(i).unwrap_or(&self.accent.accent_8),
            ThemeKey::Shade(i) => self
                .shade
                .get(i)
                .unwrap_or(if i == 0 { self.shade.shade_1.as_str() } else { self.shade.shade_8.as_str() }),
            ThemeKey::Background => &self.background,
            ThemeKey::Foreground => &self.foreground,
            ThemeKey::Shadow => &self.effects.shadow,
            ThemeKey::Overlay => &self.effects.overlay,
            ThemeKey::Radius => &self.radius,
        }
    }

    /// Look up a theme entry by CSS variable name
    pub fn var(&self, name: &str) -> Option<&str> {
        ThemeKey::from_var_name(name).map(|key| self.value(key))
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        accent: AccentPalette::default(),
        shade: ShadePalette::from_stops([
            "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040", "#171717",
        ]),
        background: "#ffffff".to_string(),
        foreground: "#0a0a0a".to_string(),
        effects: Effects {
            shadow: "0 2px 8px rgba(0, 0, 0, 0.08)".to_string(),
            overlay: "rgba(0, 0, 0, 0.4)".to_string(),
        },
        radius: "20px".to_string(),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        accent: AccentPalette::default(),
        shade: ShadePalette::from_stops([
            "#171717", "#262626", "#404040", "#525252", "#737373", "#a3a3a3", "#d4d4d4", "#f5f5f5",
        ]),
        background: "#0a0a0a".to_string(),
        foreground: "#fafafa".to_string(),
        effects: Effects {
            shadow: "0 2px 8px rgba(0, 0, 0, 0.6)".to_string(),
            overlay: "rgba(0, 0, 0, 0.7)".to_string(),
        },
        radius: "20px".to_string(),
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Get all available themes
pub fn all_themes() -> HashMap<ThemeName, Theme> {
    let mut themes = HashMap::new();
    themes.insert(ThemeName::Light, light_theme());
    themes.insert(ThemeName::Dark, dark_theme());
    themes
}

/// Color mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the platform color scheme
    #[default]
    System,
    /// Always use light mode
    Light,
    /// Always use dark mode
    Dark,
}

impl ColorMode {
    /// Pick the theme for this preference in the given environment
    pub fn select(&self, ctx: &PlatformContext) -> ThemeName {
        match self {
            ColorMode::Light => ThemeName::Light,
            ColorMode::Dark => ThemeName::Dark,
            ColorMode::System => ctx.effective_color_scheme().into(),
        }
    }
}

/// Theme provider state.
///
/// The active theme is shared as an `Arc`; a new `Arc` is only created when
/// the selected theme actually changes, so consumers can detect a switch by
/// pointer identity.
#[derive(Debug, Clone)]
pub struct ThemeState {
    mode: ColorMode,
    theme: Arc<Theme>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorMode::System, &PlatformContext::server())
    }
}

impl ThemeState {
    /// Create a theme state for a preference and environment
    pub fn new(mode: ColorMode, ctx: &PlatformContext) -> Self {
        Self {
            mode,
            theme: Arc::new(get_theme(mode.select(ctx))),
        }
    }

    /// Re-evaluate the selection against the environment and return the
    /// active theme
    pub fn observe(&mut self, ctx: &PlatformContext) -> Arc<Theme> {
        let name = self.mode.select(ctx);
        if name != self.theme.name {
            tracing::debug!("Switching theme {} -> {}", self.theme.name, name);
            self.theme = Arc::new(get_theme(name));
        }
        Arc::clone(&self.theme)
    }

    /// Change the color mode preference
    pub fn set_color_mode(&mut self, mode: ColorMode, ctx: &PlatformContext) -> Arc<Theme> {
        self.mode = mode;
        self.observe(ctx)
    }

    /// Current preference
    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    /// Get the current theme
    pub fn current_theme(&self) -> Arc<Theme> {
        Arc::clone(&self.theme)
    }
}

//! Value normalization
//!
//! Turns one declared property value into the form the target renderer
//! wants. Web keeps CSS syntax (units, `var(--…)` references, shorthands);
//! native gets plain numbers, expanded border shorthands and, when a theme
//! is supplied, concrete colors. Normalization never fails: anything it does
//! not recognize is passed through.

use crate::config::StyleConfig;
use crate::resolve::{contains_css_var, is_single_var, resolve_theme_value};
use crate::theme::Theme;
use crate::value::StyleValue;
use std::sync::Arc;

/// Border shorthands expanded on native
pub const BORDER_SHORTHANDS: [&str; 5] = ["border", "borderTop", "borderRight", "borderBottom", "borderLeft"];

/// Normalization target and inputs
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Produce values for the native renderer
    pub for_native: bool,
    /// Theme used to resolve CSS variables on native
    pub theme: Option<Arc<Theme>>,
    /// Pixels per `rem`/`em`
    pub rem_base: f64,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            for_native: false,
            theme: None,
            rem_base: StyleConfig::default().rem_base,
        }
    }
}

impl StyleOptions {
    /// Web-oriented options (the default)
    pub fn web() -> Self {
        Self::default()
    }

    /// Native-oriented options without a theme
    pub fn native() -> Self {
        Self {
            for_native: true,
            ..Self::default()
        }
    }

    /// Options taking their numeric settings from a config
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            rem_base: config.rem_base,
            ..Self::default()
        }
    }

    /// Set the native flag
    pub fn for_native(mut self, for_native: bool) -> Self {
        self.for_native = for_native;
        self
    }

    /// Resolve CSS variables against this theme (native only)
    pub fn with_theme(mut self, theme: Arc<Theme>) -> Self {
        self.theme = Some(theme);
        self
    }

    fn native_theme(&self) -> Option<&Theme> {
        if self.for_native {
            self.theme.as_deref()
        } else {
            None
        }
    }
}

/// Result of normalizing one property
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Store under the original property name
    Value(StyleValue),
    /// Replace the property with these derived properties
    Expanded(Vec<(String, StyleValue)>),
}

/// Parse a `px`, `rem`/`em` or unitless length into whole pixels.
///
/// `px` values are truncated toward zero; `rem`/`em` values are scaled by
/// `rem_base` and rounded.
pub fn parse_length(value: &str, rem_base: f64) -> Option<i64> {
    let value = value.trim();

    let (number, scale, round) = if let Some(n) = value.strip_suffix("px") {
        (n, 1.0, false)
    } else if let Some(n) = value.strip_suffix("rem") {
        (n, rem_base, true)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, rem_base, true)
    } else {
        return None;
    };

    let n = number.trim().parse::<f64>().ok().filter(|n| n.is_finite())?;
    let px = n * scale;
    Some(if round { px.round() as i64 } else { px.trunc() as i64 })
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn border_width(value: &str, rem_base: f64) -> Option<i64> {
    parse_length(value, rem_base).or_else(|| value.parse::<f64>().ok().filter(|n| n.is_finite()).map(|n| n.trunc() as i64))
}

/// Expand `"<width> <style> <color>"` into `*Width`, `*Style`, `*Color`.
///
/// The color is everything after the style keyword, so functional colors
/// containing spaces stay intact.
fn expand_border(property: &str, value: &str, options: &StyleOptions) -> Option<Vec<(String, StyleValue)>> {
    let mut parts = value.split_whitespace();
    let width = border_width(parts.next()?, options.rem_base)?;
    let style = parts.next()?;
    let color = parts.collect::<Vec<_>>().join(" ");
    if color.is_empty() {
        return None;
    }

    let color = match options.native_theme() {
        Some(theme) => resolve_theme_value(&color, theme),
        None => color,
    };

    Some(vec![
        (format!("{}Width", property), StyleValue::Int(width)),
        (format!("{}Style", property), StyleValue::from(style)),
        (format!("{}Color", property), StyleValue::Str(color)),
    ])
}

/// Normalize one property value for the target in `options`
pub fn normalize_value(property: &str, value: &StyleValue, options: &StyleOptions) -> Normalized {
    let StyleValue::Str(raw) = value else {
        return Normalized::Value(value.clone());
    };

    let value = unquote(raw.trim());

    if !options.for_native {
        return Normalized::Value(StyleValue::from(value));
    }

    if BORDER_SHORTHANDS.contains(&property) {
        if let Some(expanded) = expand_border(property, value, options) {
            return Normalized::Expanded(expanded);
        }
    }

    let has_var = contains_css_var(value);

    // Multi-value shorthands ("10px 20px") are kept verbatim
    if !has_var && value.contains(char::is_whitespace) {
        return Normalized::Value(StyleValue::from(value));
    }

    if let Some(px) = parse_length(value, options.rem_base) {
        return Normalized::Value(StyleValue::Int(px));
    }

    if has_var {
        if let Some(theme) = options.native_theme() {
            let resolved = resolve_theme_value(value, theme);
            if is_single_var(value) {
                if let Some(px) = parse_length(&resolved, options.rem_base) {
                    return Normalized::Value(StyleValue::Int(px));
                }
            }
            return Normalized::Value(StyleValue::Str(resolved));
        }
    }

    Normalized::Value(StyleValue::from(value))
}

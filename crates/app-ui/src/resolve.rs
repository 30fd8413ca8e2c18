//! Theme and responsive resolution
//!
//! Runs per render on an already-normalized property bag: breakpoint-keyed
//! values collapse to the entry for the current width, CSS-variable
//! references are replaced with theme values, and viewport-relative font
//! sizes are turned into clamped pixel sizes.

use crate::breakpoints::Breakpoint;
use crate::config::StyleConfig;
use crate::normalize::parse_length;
use crate::theme::Theme;
use crate::value::{StyleMap, StyleValue};

const VAR_OPEN: &str = "var(";
const PLACEHOLDER: &str = "__CSS_VAR__";

/// Whether a string references a CSS variable in either supported form
pub fn contains_css_var(value: &str) -> bool {
    value.contains("var(--") || value.contains(PLACEHOLDER)
}

/// Replace CSS-variable references with theme values.
///
/// Handles `var(--name)`, `var(--name, fallback)` and `__CSS_VAR__name`.
/// References the theme does not know are left as written unless they carry
/// a fallback.
pub fn resolve_theme_value(value: &str, theme: &Theme) -> String {
    let resolved = replace_var_functions(value, theme);
    replace_placeholders(&resolved, theme)
}

fn replace_var_functions(value: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find(VAR_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + VAR_OPEN.len()..];

        let Some(close) = matching_paren(after_open) else {
            // Unbalanced; keep the remainder verbatim
            out.push_str(&rest[start..]);
            return out;
        };

        let inner = &after_open[..close];
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (inner.trim(), None),
        };

        match (theme.var(name), fallback) {
            (Some(themed), _) => out.push_str(themed),
            (None, Some(fallback)) => out.push_str(&replace_var_functions(fallback, theme)),
            (None, None) => out.push_str(&rest[start..start + VAR_OPEN.len() + close + 1]),
        }

        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Index of the `)` closing an already-opened paren
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn replace_placeholders(value: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find(PLACEHOLDER) {
        out.push_str(&rest[..start]);
        let after = &rest[start + PLACEHOLDER.len()..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match theme.var(name) {
            Some(themed) => out.push_str(themed),
            None => out.push_str(&rest[start..start + PLACEHOLDER.len() + name_len]),
        }

        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}

/// Whether a map is a breakpoint-keyed responsive value
pub fn is_responsive(map: &StyleMap) -> bool {
    map.keys().any(|key| Breakpoint::from_name(key).is_some())
}

/// Entry of a responsive map in effect at `width`
pub fn resolve_responsive(map: &StyleMap, width: u32) -> Option<&StyleValue> {
    Breakpoint::ALL
        .iter()
        .filter(|bp| bp.is_active(width))
        .filter_map(|bp| map.get(bp.name()))
        .last()
}

/// Resolve one value for the theme and viewport width.
///
/// Returns `None` when a responsive value has no entry for this width.
pub fn resolve_value(value: &StyleValue, theme: &Theme, width: u32, config: &StyleConfig) -> Option<StyleValue> {
    match value {
        StyleValue::Map(map) if is_responsive(map) => {
            let picked = resolve_responsive(map, width)?;
            resolve_value(picked, theme, width, config)
        }
        StyleValue::Map(map) => Some(StyleValue::Map(
            map.iter()
                .filter_map(|(k, v)| resolve_value(v, theme, width, config).map(|v| (k.clone(), v)))
                .collect(),
        )),
        StyleValue::Str(s) if contains_css_var(s) => {
            let resolved = resolve_theme_value(s, theme);
            if is_single_var(s) {
                if let Some(px) = parse_length(&resolved, config.rem_base) {
                    return Some(StyleValue::Int(px));
                }
            }
            Some(StyleValue::Str(resolved))
        }
        other => Some(other.clone()),
    }
}

/// Whether the whole string is one `var(...)` reference
pub(crate) fn is_single_var(value: &str) -> bool {
    let value = value.trim();
    value.starts_with(VAR_OPEN)
        && matching_paren(&value[VAR_OPEN.len()..]).map(|close| close + VAR_OPEN.len() + 1) == Some(value.len())
}

/// Convert a viewport-relative font size to clamped pixels.
///
/// Accepts `"<n>vw"` or any expression containing one `vw` term, such as
/// `"clamp(19px, 2.5vw, 26px)"`.
pub fn viewport_font_size(value: &str, width: u32, config: &StyleConfig) -> Option<i64> {
    let vw = value
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .find_map(|token| token.strip_suffix("vw").and_then(|n| n.parse::<f64>().ok()))
        .filter(|n| n.is_finite())?;

    let px = width as f64 * vw / 100.0;
    Some(px.clamp(config.font_clamp_min, config.font_clamp_max).round() as i64)
}

/// Resolve a whole property bag for the theme and viewport width
pub fn resolve_style(style: &StyleMap, theme: &Theme, width: u32, config: &StyleConfig) -> StyleMap {
    let mut resolved = StyleMap::new();

    for (property, value) in style {
        let Some(value) = resolve_value(value, theme, width, config) else {
            continue;
        };

        let value = match (property.as_str(), &value) {
            ("fontSize", StyleValue::Str(s)) if s.contains("vw") => viewport_font_size(s, width, config)
                .map(StyleValue::Int)
                .unwrap_or(value),
            _ => value,
        };

        resolved.insert(property.clone(), value);
    }

    resolved
}

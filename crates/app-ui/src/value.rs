//! Style values and declarations
//!
//! A component's styles are authored as a map from class name to a property
//! bag. A class is either a plain bag or an interactive declaration with a
//! `base` bag and optional state overlays. The distinction is made once, when
//! the declaration is parsed, and carried as [`StyleDeclaration`].

use crate::error::{Result, StyleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A property bag (property name → value)
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A single style property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Flag (`includeFontPadding`, `adjustsFontSizeToFit`)
    Bool(bool),
    /// Integer value (normalized lengths land here)
    Int(i64),
    /// Fractional value (opacity, flex, line height)
    Float(f64),
    /// Raw string (units, colors, CSS-variable references, keywords)
    Str(String),
    /// Nested structure (responsive values, shadow offsets)
    Map(StyleMap),
}

impl StyleValue {
    /// Borrow the string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the nested map, if this is a map value
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric value as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Whether this is a number
    pub fn is_number(&self) -> bool {
        matches!(self, StyleValue::Int(_) | StyleValue::Float(_))
    }

    /// Convert loosely-typed JSON, dropping what a style value cannot hold
    /// (nulls, arrays)
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(StyleValue::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(StyleValue::Int)
                .or_else(|| n.as_f64().map(StyleValue::Float)),
            serde_json::Value::String(s) => Some(StyleValue::Str(s.clone())),
            serde_json::Value::Object(entries) => Some(StyleValue::Map(
                entries
                    .iter()
                    .filter_map(|(k, v)| {
                        let converted = StyleValue::from_json(v);
                        if converted.is_none() {
                            tracing::warn!("Dropping style property `{}`: {} is not a style value", k, json_kind(v));
                        }
                        converted.map(|v| (k.clone(), v))
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Int(i) => write!(f, "{}", i),
            StyleValue::Float(v) => write!(f, "{}", v),
            StyleValue::Str(s) => write!(f, "{}", s),
            StyleValue::Map(m) => {
                write!(f, "{{")?;
                let mut first = true;
                for (k, v) in m {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                    first = false;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Int(value as i64)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Float(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Map(value)
    }
}

/// Build a [`StyleMap`] from `key => value` pairs
///
/// ```rust
/// use app_ui::style_map;
///
/// let box_style = style_map! { "padding" => "10px", "opacity" => 0.5 };
/// assert_eq!(box_style.len(), 2);
/// ```
#[macro_export]
macro_rules! style_map {
    () => { $crate::value::StyleMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::StyleMap::new();
        $( map.insert(::std::string::String::from($key), $crate::value::StyleValue::from($value)); )+
        map
    }};
}

// =============================================================================
// Declarations
// =============================================================================

/// Interactive class: a base bag plus state overlays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractiveDeclaration {
    /// Always-applied properties
    pub base: StyleMap,
    /// Applied while hovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<StyleMap>,
    /// Applied while pressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<StyleMap>,
    /// Applied while focused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<StyleMap>,
    /// Applied while disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<StyleMap>,
}

/// One class entry of a component's style declaration
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDeclaration {
    /// Plain property bag
    Static(StyleMap),
    /// Base bag with hover/active/focus/disabled overlays
    Interactive(InteractiveDeclaration),
}

impl StyleDeclaration {
    /// The bag that is always applied
    pub fn base(&self) -> &StyleMap {
        match self {
            StyleDeclaration::Static(map) => map,
            StyleDeclaration::Interactive(decl) => &decl.base,
        }
    }

    /// Whether this class carries state overlays
    pub fn is_interactive(&self) -> bool {
        matches!(self, StyleDeclaration::Interactive(_))
    }
}

impl From<StyleMap> for StyleDeclaration {
    /// Classify a raw bag. A bag whose `base` entry is itself a map is
    /// interactive; overlay entries that are not maps are ignored, as are any
    /// other keys next to `base`.
    fn from(mut map: StyleMap) -> Self {
        let base = match map.remove("base") {
            Some(StyleValue::Map(base)) => base,
            Some(other) => {
                map.insert("base".to_string(), other);
                return StyleDeclaration::Static(map);
            }
            None => return StyleDeclaration::Static(map),
        };

        let mut overlay = |name: &str| match map.remove(name) {
            Some(StyleValue::Map(m)) => Some(m),
            Some(_) => {
                tracing::warn!("Ignoring non-object `{}` overlay", name);
                None
            }
            None => None,
        };

        let decl = InteractiveDeclaration {
            hover: overlay("hover"),
            active: overlay("active"),
            focus: overlay("focus"),
            disabled: overlay("disabled"),
            base,
        };

        for name in map.keys() {
            tracing::warn!("Ignoring `{}` next to an interactive `base`", name);
        }

        StyleDeclaration::Interactive(decl)
    }
}

impl From<InteractiveDeclaration> for StyleDeclaration {
    fn from(value: InteractiveDeclaration) -> Self {
        StyleDeclaration::Interactive(value)
    }
}

/// A component's full style declaration (class name → declaration)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclarations {
    classes: BTreeMap<String, StyleDeclaration>,
}

impl StyleDeclarations {
    /// Create an empty declaration set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class (builder style)
    pub fn with(mut self, class_name: impl Into<String>, decl: impl Into<StyleDeclaration>) -> Self {
        self.insert(class_name, decl);
        self
    }

    /// Add or replace a class
    pub fn insert(&mut self, class_name: impl Into<String>, decl: impl Into<StyleDeclaration>) {
        self.classes.insert(class_name.into(), decl.into());
    }

    /// Look up a class
    pub fn get(&self, class_name: &str) -> Option<&StyleDeclaration> {
        self.classes.get(class_name)
    }

    /// Iterate over classes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleDeclaration)> {
        self.classes.iter()
    }

    /// Class names in order
    pub fn class_names(&self) -> impl Iterator<Item = &String> {
        self.classes.keys()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether there are no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Parse from a JSON value, rejecting anything that is not an object of
    /// objects
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(entries) = value else {
            return Err(StyleError::InvalidDeclaration(format!(
                "expected an object of classes, got {}",
                json_kind(&value)
            )));
        };

        let mut decls = Self::new();
        for (class_name, entry) in entries {
            if !entry.is_object() {
                return Err(StyleError::InvalidDeclaration(format!(
                    "class `{}` must be an object, got {}",
                    class_name,
                    json_kind(&entry)
                )));
            }
            let map: StyleMap = serde_json::from_value(entry)?;
            decls.insert(class_name, map);
        }
        Ok(decls)
    }

    /// Parse from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }
}

impl<K: Into<String>> FromIterator<(K, StyleDeclaration)> for StyleDeclarations {
    fn from_iter<T: IntoIterator<Item = (K, StyleDeclaration)>>(iter: T) -> Self {
        Self {
            classes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! Unified style builder
//!
//! Builds the three parallel views of a component's styles:
//!
//! - `native`: normalized property bag per class
//! - `web`: the class name itself, used as a key into the component's
//!   CSS-module mapping
//! - `all`: same content as `native`
//!
//! All three views always carry exactly the declared class names.
//!
//! Interactive classes contribute their `base` bag here. Their overlays are
//! normalized separately by
//! [`InteractiveStyles::from_declaration`](crate::interactive::InteractiveStyles::from_declaration)
//! and combined at the call site.

use crate::normalize::{normalize_value, Normalized, StyleOptions};
use crate::resolve::is_responsive;
use crate::value::{json_kind, StyleDeclaration, StyleDeclarations, StyleMap, StyleValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalize every property of a bag, merging expanded shorthands.
///
/// Breakpoint-keyed values are normalized entry by entry under the owning
/// property's name. A shorthand cannot expand inside a responsive value, so
/// such entries keep their declared form.
pub fn normalize_map(map: &StyleMap, options: &StyleOptions) -> StyleMap {
    let mut normalized = StyleMap::new();
    for (property, value) in map {
        if let StyleValue::Map(entries) = value {
            if is_responsive(entries) {
                let entries = entries
                    .iter()
                    .map(|(bp, entry)| match normalize_value(property, entry, options) {
                        Normalized::Value(v) => (bp.clone(), v),
                        Normalized::Expanded(_) => (bp.clone(), entry.clone()),
                    })
                    .collect();
                normalized.insert(property.clone(), StyleValue::Map(entries));
                continue;
            }
        }

        match normalize_value(property, value, options) {
            Normalized::Value(value) => {
                normalized.insert(property.clone(), value);
            }
            Normalized::Expanded(props) => normalized.extend(props),
        }
    }
    normalized
}

/// The native, web and merged views of a component's styles
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnifiedStyles {
    /// Normalized property bags
    pub native: BTreeMap<String, StyleMap>,
    /// Class name identifiers
    pub web: BTreeMap<String, String>,
    /// Alias of `native`
    pub all: BTreeMap<String, StyleMap>,
}

impl UnifiedStyles {
    /// Build from parsed declarations
    pub fn build(decls: &StyleDeclarations, options: &StyleOptions) -> Self {
        let mut styles = Self::default();

        for (class_name, decl) in decls.iter() {
            let bag = normalize_map(decl.base(), options);
            styles.web.insert(class_name.clone(), class_name.clone());
            styles.all.insert(class_name.clone(), bag.clone());
            styles.native.insert(class_name.clone(), bag);
        }

        tracing::trace!(
            "Built {} style classes (native: {})",
            styles.native.len(),
            options.for_native
        );
        styles
    }

    /// Build from loosely-typed JSON.
    ///
    /// Missing or non-object input produces empty views. A class that is not
    /// an object keeps its name with an empty bag. Both cases are logged,
    /// never returned as errors.
    pub fn from_json(value: &serde_json::Value, options: &StyleOptions) -> Self {
        let serde_json::Value::Object(entries) = value else {
            tracing::warn!(
                "Style declaration is {}, expected an object; rendering unstyled",
                json_kind(value)
            );
            return Self::default();
        };

        let mut decls = StyleDeclarations::new();
        for (class_name, entry) in entries {
            match StyleValue::from_json(entry) {
                Some(StyleValue::Map(map)) => decls.insert(class_name.clone(), StyleDeclaration::from(map)),
                _ => {
                    tracing::warn!(
                        "Style class `{}` is {}, expected an object; rendering unstyled",
                        class_name,
                        json_kind(entry)
                    );
                    decls.insert(class_name.clone(), StyleDeclaration::Static(StyleMap::new()));
                }
            }
        }

        Self::build(&decls, options)
    }

    /// Normalized bag for a class
    pub fn native_style(&self, class_name: &str) -> Option<&StyleMap> {
        self.native.get(class_name)
    }

    /// Web identifier for a class
    pub fn class_name(&self, class_name: &str) -> Option<&str> {
        self.web.get(class_name).map(String::as_str)
    }

    /// Whether a class is declared
    pub fn contains(&self, class_name: &str) -> bool {
        self.native.contains_key(class_name)
    }

    /// Declared class names in order
    pub fn class_names(&self) -> impl Iterator<Item = &String> {
        self.native.keys()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.native.len()
    }

    /// Whether there are no classes
    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }
}

//! Cached style accessor
//!
//! [`StyleProxy`] is what a component holds at render time. It answers
//! `get(class)` with the class's `{ style, className }` pair, resolving the
//! normalized bag against the active theme and viewport and memoizing the
//! result under `"<class>-<width>"`.
//!
//! The cache is dropped wholesale when the theme changes identity. Viewport
//! changes only change the key, so entries for earlier widths stay around
//! until the LRU bound evicts them.

use crate::config::StyleConfig;
use crate::normalize::StyleOptions;
use crate::resolve::resolve_style;
use crate::theme::Theme;
use crate::unified::UnifiedStyles;
use crate::value::{StyleDeclarations, StyleMap};
use app_platform::{PlatformContext, Viewport};
use lru::LruCache;
use serde::Serialize;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// A class resolved for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    /// Resolved property bag (native)
    pub style: StyleMap,
    /// Class identifier (web)
    pub class_name: String,
}

/// Resolved style cache keyed by class name and viewport width
#[derive(Debug)]
pub struct StyleCache {
    entries: LruCache<String, Arc<ResolvedStyle>>,
}

impl StyleCache {
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Cache key for a class at a width
    pub fn key(class_name: &str, width: u32) -> String {
        format!("{}-{}", class_name, width)
    }

    /// Look up an entry, marking it recently used
    pub fn get(&mut self, key: &str) -> Option<Arc<ResolvedStyle>> {
        self.entries.get(key).cloned()
    }

    /// Store an entry
    pub fn insert(&mut self, key: String, resolved: Arc<ResolvedStyle>) {
        self.entries.put(key, resolved);
    }

    /// Whether an entry exists (does not touch recency)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-component cached accessor over a unified style set
#[derive(Debug)]
pub struct StyleProxy {
    styles: Arc<UnifiedStyles>,
    theme: Arc<Theme>,
    platform: PlatformContext,
    config: StyleConfig,
    cache: StyleCache,
}

impl StyleProxy {
    /// Create a proxy.
    ///
    /// Without a platform context the proxy behaves as on web with the
    /// default viewport.
    pub fn new(
        styles: Arc<UnifiedStyles>,
        theme: Arc<Theme>,
        platform: Option<PlatformContext>,
        config: StyleConfig,
    ) -> Self {
        let cache = StyleCache::new(config.cache_capacity_non_zero());
        Self {
            styles,
            theme,
            platform: platform.unwrap_or_default(),
            config,
            cache,
        }
    }

    /// Build the unified set for the platform and wrap it in a proxy.
    ///
    /// Variables are left in place at build time; the proxy resolves them
    /// against whichever theme is active when a class is read.
    pub fn from_declarations(
        decls: &StyleDeclarations,
        theme: Arc<Theme>,
        platform: Option<PlatformContext>,
        config: StyleConfig,
    ) -> Self {
        let platform = platform.unwrap_or_default();
        let options = StyleOptions::from_config(&config).for_native(platform.is_native());
        let styles = Arc::new(UnifiedStyles::build(decls, &options));
        Self::new(styles, theme, Some(platform), config)
    }

    /// Resolve a class for the current theme and viewport
    pub fn get(&mut self, class_name: &str) -> Option<Arc<ResolvedStyle>> {
        let base = self.styles.native_style(class_name)?;
        let width = self.platform.viewport.width;
        let key = StyleCache::key(class_name, width);

        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!("Style cache hit: {}", key);
            return Some(hit);
        }

        let resolved = Arc::new(ResolvedStyle {
            style: resolve_style(base, &self.theme, width, &self.config),
            class_name: self
                .styles
                .class_name(class_name)
                .unwrap_or(class_name)
                .to_string(),
        });
        self.cache.insert(key, Arc::clone(&resolved));
        Some(resolved)
    }

    /// Resolve every declared class
    pub fn resolve_all(&mut self) -> BTreeMap<String, Arc<ResolvedStyle>> {
        let names: Vec<String> = self.styles.class_names().cloned().collect();
        names
            .into_iter()
            .filter_map(|name| self.get(&name).map(|resolved| (name, resolved)))
            .collect()
    }

    /// Switch theme; a different theme instance invalidates the cache
    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        if Arc::ptr_eq(&self.theme, &theme) {
            return;
        }
        tracing::debug!(
            "Theme changed to {}, dropping {} cached styles",
            theme.name,
            self.cache.len()
        );
        self.theme = theme;
        self.cache.clear();
    }

    /// Update the viewport used for responsive values
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.platform.viewport = viewport;
    }

    /// Active platform context
    pub fn platform(&self) -> &PlatformContext {
        &self.platform
    }

    /// Active theme
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Underlying unified style set
    pub fn styles(&self) -> &Arc<UnifiedStyles> {
        &self.styles
    }

    /// Resolved entries currently cached
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Whether `class` at `width` is cached
    pub fn is_cached(&self, class_name: &str, width: u32) -> bool {
        self.cache.contains(&StyleCache::key(class_name, width))
    }
}

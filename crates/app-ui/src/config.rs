//! Style system configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Style system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Pixels per `rem`/`em`
    pub rem_base: f64,
    /// Lower bound for viewport-relative font sizes on native
    pub font_clamp_min: f64,
    /// Upper bound for viewport-relative font sizes on native
    pub font_clamp_max: f64,
    /// Maximum resolved entries kept per style proxy
    pub cache_capacity: usize,
    /// Quiet period before a viewport resize is published
    pub resize_debounce_ms: u64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            rem_base: 16.0,
            font_clamp_min: 19.0,
            font_clamp_max: 26.0,
            cache_capacity: 256,
            resize_debounce_ms: 150,
        }
    }
}

impl StyleConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set pixels per rem
    pub fn rem_base(mut self, px: f64) -> Self {
        self.rem_base = px;
        self
    }

    /// Set the viewport-relative font clamp range
    pub fn font_clamp(mut self, min: f64, max: f64) -> Self {
        self.font_clamp_min = min.min(max);
        self.font_clamp_max = max.max(min);
        self
    }

    /// Set the resolved style cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the resize debounce window
    pub fn resize_debounce(mut self, debounce: Duration) -> Self {
        self.resize_debounce_ms = debounce.as_millis() as u64;
        self
    }

    /// Resize debounce window as a `Duration`
    pub fn resize_debounce_duration(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Cache capacity, at least one entry
    pub(crate) fn cache_capacity_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StyleConfig::default();
        assert_eq!(config.rem_base, 16.0);
        assert_eq!(config.font_clamp_min, 19.0);
        assert_eq!(config.font_clamp_max, 26.0);
        assert_eq!(config.resize_debounce_duration(), Duration::from_millis(150));
    }

    #[test]
    fn test_builder() {
        let config = StyleConfig::new()
            .rem_base(10.0)
            .font_clamp(30.0, 20.0)
            .cache_capacity(0)
            .resize_debounce(Duration::from_millis(50));

        assert_eq!(config.rem_base, 10.0);
        assert_eq!(config.font_clamp_min, 20.0);
        assert_eq!(config.font_clamp_max, 30.0);
        assert_eq!(config.cache_capacity_non_zero().get(), 1);
        assert_eq!(config.resize_debounce_ms, 50);
    }

    #[test]
    fn test_from_json_partial() {
        let config = StyleConfig::from_json(r#"{ "cacheCapacity": 32 }"#).unwrap();
        assert_eq!(config.cache_capacity, 32);
        assert_eq!(config.rem_base, 16.0);

        assert!(StyleConfig::from_json("42").is_err());
    }
}

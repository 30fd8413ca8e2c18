//! Responsive breakpoints
//!
//! Breakpoints are named minimum widths. A responsive value picks the entry
//! of the widest breakpoint whose threshold does not exceed the viewport
//! width, falling back to `base`.

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Named breakpoint, ordered by ascending threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Always applies (0px)
    Base,
    /// Upper edge of small phones (359px)
    MobileSmallMax,
    /// Small phones (360px)
    MobileSmall,
    /// Upper edge of phones (599px)
    MobileMax,
    /// Phones (600px)
    Mobile,
    /// Tablets (768px)
    Tablet,
    /// Desktops (1024px)
    Desktop,
}

/// Breakpoint widths
pub mod widths {
    /// Base (0px)
    pub const BASE: u32 = 0;
    /// Small phone upper edge (359px)
    pub const MOBILE_SMALL_MAX: u32 = 359;
    /// Small phone (360px)
    pub const MOBILE_SMALL: u32 = 360;
    /// Phone upper edge (599px)
    pub const MOBILE_MAX: u32 = 599;
    /// Phone (600px)
    pub const MOBILE: u32 = 600;
    /// Tablet (768px)
    pub const TABLET: u32 = 768;
    /// Desktop (1024px)
    pub const DESKTOP: u32 = 1024;
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order
    pub const ALL: [Breakpoint; 7] = [
        Breakpoint::Base,
        Breakpoint::MobileSmallMax,
        Breakpoint::MobileSmall,
        Breakpoint::MobileMax,
        Breakpoint::Mobile,
        Breakpoint::Tablet,
        Breakpoint::Desktop,
    ];

    /// Minimum viewport width for this breakpoint
    pub const fn threshold(&self) -> u32 {
        match self {
            Breakpoint::Base => widths::BASE,
            Breakpoint::MobileSmallMax => widths::MOBILE_SMALL_MAX,
            Breakpoint::MobileSmall => widths::MOBILE_SMALL,
            Breakpoint::MobileMax => widths::MOBILE_MAX,
            Breakpoint::Mobile => widths::MOBILE,
            Breakpoint::Tablet => widths::TABLET,
            Breakpoint::Desktop => widths::DESKTOP,
        }
    }

    /// Declaration key for this breakpoint
    pub const fn name(&self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::MobileSmallMax => "mobileSmallMax",
            Breakpoint::MobileSmall => "mobileSmall",
            Breakpoint::MobileMax => "mobileMax",
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Look up a breakpoint by declaration key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }

    /// Widest breakpoint active at `width`
    pub fn current(width: u32) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| bp.threshold() <= width)
            .unwrap_or(Breakpoint::Base)
    }

    /// Whether this breakpoint applies at `width`
    pub fn is_active(&self, width: u32) -> bool {
        width >= self.threshold()
    }

    /// Web media query selecting this breakpoint
    pub fn min_width_query(&self) -> String {
        format!("(min-width: {}px)", self.threshold())
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Breakpoint {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::UnknownBreakpoint(s.to_string()))
    }
}

/// Check if width reaches the tablet breakpoint
pub fn is_tablet_up(width: u32) -> bool {
    Breakpoint::Tablet.is_active(width)
}

/// Check if width reaches the desktop breakpoint
pub fn is_desktop(width: u32) -> bool {
    Breakpoint::Desktop.is_active(width)
}

// =============================================================================
// Responsive Values
// =============================================================================

/// A value that may vary by breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    /// Same value at every width
    Plain(T),
    /// Per-breakpoint values
    ByBreakpoint(BTreeMap<Breakpoint, T>),
}

impl<T> Responsive<T> {
    /// Start a per-breakpoint value with its `base` entry
    pub fn base(value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Breakpoint::Base, value);
        Responsive::ByBreakpoint(map)
    }

    /// Add or replace a breakpoint entry
    pub fn at(self, breakpoint: Breakpoint, value: T) -> Self {
        let mut map = match self {
            Responsive::Plain(plain) => {
                let mut map = BTreeMap::new();
                map.insert(Breakpoint::Base, plain);
                map
            }
            Responsive::ByBreakpoint(map) => map,
        };
        map.insert(breakpoint, value);
        Responsive::ByBreakpoint(map)
    }

    /// Value in effect at `width`, or `None` when no entry applies
    pub fn resolve(&self, width: u32) -> Option<&T> {
        match self {
            Responsive::Plain(value) => Some(value),
            Responsive::ByBreakpoint(map) => map
                .iter()
                .filter(|(bp, _)| bp.is_active(width))
                .last()
                .map(|(_, value)| value),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Plain(value)
    }
}

//! Min/max bounds per granularity.
//!
//! Each side resolves on its own: a readable value is formatted at the
//! granularity, anything else falls back to the default bound for that side.
//! The two sides are never compared against each other.

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::granularity::Granularity;

pub const DEFAULT_MIN: &str = "1970-01-01";
pub const DEFAULT_MAX: &str = "2470-12-31";

/// Configured bounds, as given by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBounds {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

impl RangeBounds {
    pub fn new(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        }
    }
}

/// Concrete bounds handed to the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Min,
    Max,
}

impl Side {
    fn default_bound(self) -> &'static str {
        match self {
            Side::Min => DEFAULT_MIN,
            Side::Max => DEFAULT_MAX,
        }
    }
}

/// Resolve one side of a bound at `granularity`.
pub fn resolve_bound(granularity: Granularity, value: Option<&str>, side: Side) -> String {
    value
        .and_then(|v| DateValue::parse(v).format_valid(granularity))
        .unwrap_or_else(|| DateValue::parse(side.default_bound()).format(granularity))
}

pub fn resolve_range(granularity: Granularity, bounds: &RangeBounds) -> ResolvedRange {
    ResolvedRange {
        min: resolve_bound(granularity, bounds.min.as_deref(), Side::Min),
        max: resolve_bound(granularity, bounds.max.as_deref(), Side::Max),
    }
}

impl ResolvedRange {
    pub fn defaults(granularity: Granularity) -> Self {
        resolve_range(granularity, &RangeBounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_and_missing_bounds_fall_back() {
        let r = resolve_range(Granularity::Day, &RangeBounds::new(Some("invalid"), None));
        assert_eq!(r.min, DEFAULT_MIN);
        assert_eq!(r.max, DEFAULT_MAX);
    }

    #[test]
    fn defaults_follow_the_granularity() {
        assert_eq!(
            ResolvedRange::defaults(Granularity::Month),
            ResolvedRange {
                min: "1970-01".into(),
                max: "2470-12".into()
            }
        );
        assert_eq!(ResolvedRange::defaults(Granularity::Year).max, "2470");
    }

    #[test]
    fn valid_bounds_are_reformatted() {
        let r = resolve_range(
            Granularity::Month,
            &RangeBounds::new(Some("2020-03-17"), Some("2021")),
        );
        assert_eq!(r.min, "2020-03");
        assert_eq!(r.max, "2021-01");
    }

    #[test]
    fn inverted_bounds_are_kept_as_configured() {
        let r = resolve_range(
            Granularity::Day,
            &RangeBounds::new(Some("2025-01-01"), Some("2024-01-01")),
        );
        assert_eq!(r.min, "2025-01-01");
        assert_eq!(r.max, "2024-01-01");
    }
}

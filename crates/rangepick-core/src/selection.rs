//! Per-granularity selection state.
//!
//! Each granularity keeps its own `{start, end}` pair. Switching the active
//! granularity only changes which pair is read; it never touches the others.
//! The validity flag is the completeness of the active pair and is refreshed
//! after every write and every switch.

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::granularity::{Granularity, PerGranularity};

/// A start/end pair of formatted dates. Either side may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateSpan {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Re-read both sides at `granularity`, dropping unreadable ones.
    pub fn normalized(&self, granularity: Granularity) -> Self {
        let norm = |v: &Option<String>| {
            v.as_deref()
                .and_then(|s| DateValue::parse(s).format_valid(granularity))
        };
        Self {
            start: norm(&self.start),
            end: norm(&self.end),
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    active: Granularity,
    spans: PerGranularity<DateSpan>,
    valid: bool,
}

impl SelectionState {
    pub fn new(active: Granularity, spans: PerGranularity<DateSpan>) -> Self {
        let valid = spans[active].is_complete();
        Self {
            active,
            spans,
            valid,
        }
    }

    pub fn active(&self) -> Granularity {
        self.active
    }

    /// Whether confirm may propagate for the active granularity.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn span(&self, granularity: Granularity) -> &DateSpan {
        &self.spans[granularity]
    }

    pub fn active_span(&self) -> &DateSpan {
        &self.spans[self.active]
    }

    pub fn spans(&self) -> &PerGranularity<DateSpan> {
        &self.spans
    }

    /// Overwrite exactly `granularity`'s pair.
    pub fn set_selection(
        &mut self,
        granularity: Granularity,
        start: Option<String>,
        end: Option<String>,
    ) {
        self.spans[granularity] = DateSpan { start, end };
        self.refresh_validity();
    }

    pub fn clear(&mut self, granularity: Granularity) {
        self.set_selection(granularity, None, None);
    }

    pub fn switch_to(&mut self, granularity: Granularity) {
        self.active = granularity;
        self.refresh_validity();
    }

    fn refresh_validity(&mut self) {
        self.valid = self.spans[self.active].is_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn validity_requires_both_ends() {
        let mut state = SelectionState::new(Granularity::Day, PerGranularity::default());
        assert!(!state.is_valid());

        state.set_selection(Granularity::Day, some("2024-06-01"), None);
        assert!(!state.is_valid());

        state.set_selection(Granularity::Day, some("2024-06-01"), some("2024-06-03"));
        assert!(state.is_valid());

        state.clear(Granularity::Day);
        assert!(!state.is_valid());
        assert!(state.active_span().is_empty());
    }

    #[test]
    fn switching_preserves_every_pair() {
        let mut state = SelectionState::new(Granularity::Day, PerGranularity::default());
        state.set_selection(Granularity::Day, some("2024-06-01"), some("2024-06-03"));
        state.switch_to(Granularity::Month);
        assert!(!state.is_valid());
        assert!(state.active_span().is_empty());

        state.switch_to(Granularity::Day);
        assert!(state.is_valid());
        assert_eq!(state.span(Granularity::Day).start(), Some("2024-06-01"));
        assert_eq!(state.span(Granularity::Day).end(), Some("2024-06-03"));
    }

    #[test]
    fn writing_another_granularity_leaves_active_pair_alone() {
        let mut state = SelectionState::new(Granularity::Year, PerGranularity::default());
        state.set_selection(Granularity::Month, some("2024-01"), some("2024-03"));
        assert!(!state.is_valid());
        assert_eq!(state.span(Granularity::Year), &DateSpan::default());
    }

    #[test]
    fn normalized_reformats_and_drops_garbage() {
        let span = DateSpan::new(Some("2024-06-15"), Some("soon"));
        let month = span.normalized(Granularity::Month);
        assert_eq!(month.start(), Some("2024-06"));
        assert_eq!(month.end(), None);
    }
}

//! Calendar widget contract.
//!
//! The widget is an external component that draws the day/month/year grid.
//! The picker only talks to it through mutable settings plus `reset()`, which
//! re-renders from those settings. The widget's own click callbacks are
//! forwarded by the host into the picker's `on_widget_*` methods; nothing the
//! picker calls here may invoke them.

use serde::Serialize;

use crate::date::DateValue;
use crate::granularity::{Granularity, WidgetMode};
use crate::range::ResolvedRange;
use crate::selection::DateSpan;

/// Joins the two ends of a day range in `WidgetSelected::dates`.
pub const DATES_SEPARATOR: &str = ":";

/// The widget's selection representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetSelected {
    pub year: Option<i32>,
    /// Zero-based month index.
    pub month: Option<u32>,
    /// Day mode only: `["start:end"]`, `["start"]`, or empty.
    pub dates: Option<Vec<String>>,
}

impl WidgetSelected {
    /// Translate a pair into the widget's representation for `granularity`.
    pub fn for_span(granularity: Granularity, span: &DateSpan) -> Self {
        let anchor = span.start().map(DateValue::parse);
        let year = anchor.as_ref().and_then(DateValue::year);
        let month = anchor.as_ref().and_then(DateValue::month0);
        match granularity {
            Granularity::Day => {
                let joined = [span.start(), span.end()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(DATES_SEPARATOR);
                Self {
                    year,
                    month,
                    dates: Some(if joined.is_empty() { Vec::new() } else { vec![joined] }),
                }
            }
            Granularity::Month => Self {
                year,
                month,
                dates: None,
            },
            Granularity::Year => Self {
                year,
                month: None,
                dates: None,
            },
        }
    }
}

/// Mutable widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSettings {
    pub mode: WidgetMode,
    pub selected: WidgetSelected,
    pub range: ResolvedRange,
}

impl WidgetSettings {
    pub fn new(granularity: Granularity, span: &DateSpan, range: ResolvedRange) -> Self {
        Self {
            mode: granularity.widget_mode(),
            selected: WidgetSelected::for_span(granularity, span),
            range,
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::new(
            Granularity::Day,
            &DateSpan::default(),
            ResolvedRange::defaults(Granularity::Day),
        )
    }
}

pub trait CalendarWidget {
    /// First render with `settings`.
    fn init(&mut self, settings: WidgetSettings);

    /// Release the widget.
    fn destroy(&mut self);

    /// Re-render from the current settings.
    fn reset(&mut self);

    fn settings(&self) -> &WidgetSettings;

    fn settings_mut(&mut self) -> &mut WidgetSettings;

    /// Year the widget is currently showing.
    fn selected_year(&self) -> Option<i32> {
        self.settings().selected.year
    }

    /// Zero-based month the widget is currently showing.
    fn selected_month(&self) -> Option<u32> {
        self.settings().selected.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_mode_joins_present_ends() {
        let sel = WidgetSelected::for_span(
            Granularity::Day,
            &DateSpan::new(Some("2024-06-03"), Some("2024-06-10")),
        );
        assert_eq!(sel.dates, Some(vec!["2024-06-03:2024-06-10".to_string()]));
        assert_eq!(sel.year, Some(2024));
        assert_eq!(sel.month, Some(5));

        let start_only =
            WidgetSelected::for_span(Granularity::Day, &DateSpan::new(Some("2024-06-03"), None));
        assert_eq!(start_only.dates, Some(vec!["2024-06-03".to_string()]));
    }

    #[test]
    fn cleared_day_mode_is_an_empty_list() {
        let sel = WidgetSelected::for_span(Granularity::Day, &DateSpan::default());
        assert_eq!(sel.dates, Some(Vec::new()));
        assert_eq!(sel.year, None);
        assert_eq!(sel.month, None);
    }

    #[test]
    fn month_and_year_modes_use_indices() {
        let span = DateSpan::new(Some("2023-11"), Some("2024-02"));
        let month = WidgetSelected::for_span(Granularity::Month, &span);
        assert_eq!((month.year, month.month, month.dates), (Some(2023), Some(10), None));

        let year = WidgetSelected::for_span(Granularity::Year, &DateSpan::new(Some("2021"), None));
        assert_eq!((year.year, year.month, year.dates), (Some(2021), None, None));
    }
}

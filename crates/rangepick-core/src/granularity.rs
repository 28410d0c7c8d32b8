//! Granularity and the lookup tables keyed by it.
//!
//! Every per-granularity mapping lives here once: the calendar unit a
//! granularity steps in, the calendar widget's mode label for it, and the
//! chrome panel's labels. [`PerGranularity`] is the enum-indexed container the
//! rest of the crate uses for "one value per granularity" state.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The unit at which a range is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    #[serde(alias = "date")]
    Day,
    Month,
    Year,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Month, Granularity::Year];

    /// Calendar unit used for offsets and period boundaries.
    pub fn unit(self) -> Unit {
        match self {
            Granularity::Day => Unit::Day,
            Granularity::Month => Unit::Month,
            Granularity::Year => Unit::Year,
        }
    }

    /// The calendar widget's own name for this granularity.
    pub fn widget_mode(self) -> WidgetMode {
        match self {
            Granularity::Day => WidgetMode::Multiple,
            Granularity::Month => WidgetMode::Month,
            Granularity::Year => WidgetMode::Year,
        }
    }

    pub fn labels(self) -> GranularityLabels {
        match self {
            Granularity::Day => GranularityLabels {
                switch: "Daily",
                start: "Start date",
                end: "End date",
            },
            Granularity::Month => GranularityLabels {
                switch: "Monthly",
                start: "Start month",
                end: "End month",
            },
            Granularity::Year => GranularityLabels {
                switch: "Yearly",
                start: "Start year",
                end: "End year",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "date" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            other => Err(format!("unknown granularity: {other}")),
        }
    }
}

/// Calendar arithmetic units.
///
/// `Day` doubles as the identity unit for [`first_of`](crate::DateValue::first_of)
/// and [`last_of`](crate::DateValue::last_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    Week,
    Month,
    Year,
}

/// Selection modes understood by the calendar widget.
///
/// Fixed bijection with [`Granularity`]; see [`Granularity::widget_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetMode {
    /// Multiple-ranged day selection.
    Multiple,
    Month,
    Year,
}

impl WidgetMode {
    pub fn granularity(self) -> Granularity {
        match self {
            WidgetMode::Multiple => Granularity::Day,
            WidgetMode::Month => Granularity::Month,
            WidgetMode::Year => Granularity::Year,
        }
    }
}

/// Chrome panel labels for one granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GranularityLabels {
    /// Granularity switch button text.
    pub switch: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

/// One value per granularity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct PerGranularity<T> {
    #[serde(default, alias = "date", deserialize_with = "crate::config::null_as_default")]
    pub day: T,
    #[serde(default, deserialize_with = "crate::config::null_as_default")]
    pub month: T,
    #[serde(default, deserialize_with = "crate::config::null_as_default")]
    pub year: T,
}

impl<T> PerGranularity<T> {
    pub fn from_fn(mut f: impl FnMut(Granularity) -> T) -> Self {
        Self {
            day: f(Granularity::Day),
            month: f(Granularity::Month),
            year: f(Granularity::Year),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Granularity, &T) -> U) -> PerGranularity<U> {
        PerGranularity {
            day: f(Granularity::Day, &self.day),
            month: f(Granularity::Month, &self.month),
            year: f(Granularity::Year, &self.year),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Granularity, &T)> + '_ {
        Granularity::ALL.into_iter().map(move |g| (g, &self[g]))
    }
}

impl<T> Index<Granularity> for PerGranularity<T> {
    type Output = T;

    fn index(&self, g: Granularity) -> &T {
        match g {
            Granularity::Day => &self.day,
            Granularity::Month => &self.month,
            Granularity::Year => &self.year,
        }
    }
}

impl<T> IndexMut<Granularity> for PerGranularity<T> {
    fn index_mut(&mut self, g: Granularity) -> &mut T {
        match g {
            Granularity::Day => &mut self.day,
            Granularity::Month => &mut self.month,
            Granularity::Year => &mut self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_mode_is_a_bijection() {
        for g in Granularity::ALL {
            assert_eq!(g.widget_mode().granularity(), g);
        }
    }

    #[test]
    fn parses_date_alias() {
        assert_eq!("date".parse::<Granularity>().unwrap(), Granularity::Day);
        assert_eq!("Month".parse::<Granularity>().unwrap(), Granularity::Month);
        assert!("week".parse::<Granularity>().is_err());
    }

    #[test]
    fn index_mut_touches_only_one_entry() {
        let mut table = PerGranularity::<u32>::default();
        table[Granularity::Month] = 7;
        assert_eq!(table.day, 0);
        assert_eq!(table.month, 7);
        assert_eq!(table.year, 0);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Granularity::Year).unwrap();
        assert_eq!(json, "\"year\"");
        let parsed: Granularity = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(parsed, Granularity::Day);
    }
}

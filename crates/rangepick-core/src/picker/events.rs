use serde::{Deserialize, Serialize};

use crate::granularity::Granularity;

/// Every completed picker cascade produces an Event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PickerEvent {
    PresetApplied {
        granularity: Granularity,
        preset_id: u64,
        start: Option<String>,
        end: Option<String>,
    },
    GranularityChanged {
        granularity: Granularity,
        start: Option<String>,
        end: Option<String>,
    },
    SelectionReset {
        granularity: Granularity,
    },
    DaysPicked {
        start: Option<String>,
        end: Option<String>,
    },
    MonthPicked {
        value: String,
    },
    YearPicked {
        value: String,
    },
    Confirmed {
        granularity: Granularity,
        start: String,
        end: String,
    },
    Cancelled {
        granularity: Granularity,
    },
}

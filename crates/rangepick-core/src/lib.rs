//! # Rangepick Core Library
//!
//! Selection logic for a date-range picker that works at day, month or year
//! granularity. The picker keeps an external calendar widget and a chrome
//! panel (presets, granularity switch, start/end display, buttons) showing
//! the same selection, without either view ever calling back into the other.
//!
//! ## Architecture
//!
//! - **Dates**: an immutable day value with granularity-aware formatting and
//!   calendar arithmetic
//! - **Presets**: shortcut tokens (`current`, `week`, offsets, literals)
//!   resolved against today
//! - **Selection**: one start/end pair per granularity, plus the confirm gate
//! - **Picker**: the controller that routes chrome and widget input through
//!   the state and back out to both views
//!
//! ## Key Components
//!
//! - [`DatePicker`]: The sync controller
//! - [`DateValue`]: Parsed, immutable calendar day
//! - [`PresetList`]: Resolved presets for one granularity
//! - [`PickerOptions`]: Construction options, loadable from TOML or JSON

pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod granularity;
pub mod picker;
pub mod preset;
pub mod range;
pub mod selection;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{PickerOptions, PresetCatalog};
pub use date::{DateInput, DateSource, DateValue, INVALID_DATE};
pub use error::{ConfigError, PickerError, Result};
pub use granularity::{Granularity, GranularityLabels, PerGranularity, Unit, WidgetMode};
pub use picker::{
    CalendarWidget, Callbacks, ChromeEvent, ChromePanel, DatePicker, HeadlessChrome,
    HeadlessWidget, PickerEvent, WidgetSelected, WidgetSettings,
};
pub use preset::{Preset, PresetDef, PresetList, PresetResolver, PresetToken};
pub use range::{resolve_range, RangeBounds, ResolvedRange, DEFAULT_MAX, DEFAULT_MIN};
pub use selection::{DateSpan, SelectionState};

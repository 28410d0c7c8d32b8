//! Chrome panel contract: presets, granularity switch, display, buttons.
//!
//! Everything here is a display-update entry point. Implementations render
//! what they are given and must not call back into the picker; user input
//! reaches the picker only through [`DatePicker::handle`](super::DatePicker::handle).

use serde::{Deserialize, Serialize};

use super::listeners::{Listener, ListenerScope};
use crate::granularity::{Granularity, GranularityLabels};
use crate::preset::Preset;
use crate::selection::DateSpan;

/// Shown in place of an empty start or end.
pub const EMPTY_PLACEHOLDER: &str = "Select";

/// User input coming from the chrome panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChromeEvent {
    PresetClicked { id: u64 },
    GranularityClicked { granularity: Granularity },
    ConfirmClicked,
    CancelClicked,
    ResetClicked,
}

/// Everything needed for a full draw.
#[derive(Debug, Clone, Copy)]
pub struct ChromeView<'a> {
    pub active: Granularity,
    pub fluid_mode: bool,
    pub presets: &'a [Preset],
    pub labels: GranularityLabels,
    pub span: &'a DateSpan,
    pub confirm_enabled: bool,
}

pub trait ChromePanel {
    /// Full initial draw.
    fn draw(&mut self, view: &ChromeView<'_>);

    /// Regenerate the preset buttons.
    fn render_presets(&mut self, granularity: Granularity, presets: &[Preset]);

    /// Regenerate the granularity switch with `active` highlighted.
    fn render_granularity_switch(&mut self, active: Granularity);

    /// Update the start/end display.
    fn render_display(&mut self, labels: GranularityLabels, span: &DateSpan);

    fn set_confirm_enabled(&mut self, enabled: bool);

    fn attach(&mut self, scope: ListenerScope, listener: &Listener);

    fn detach(&mut self, scope: ListenerScope, listener: &Listener);

    /// Remove everything the panel drew.
    fn clear(&mut self);
}

//! In-memory widget and chrome implementations.
//!
//! Both record what the picker asked of them and draw nothing. The CLI drives
//! a picker with them, and tests assert against what they recorded.

use serde::Serialize;

use super::chrome::{ChromePanel, ChromeView, EMPTY_PLACEHOLDER};
use super::listeners::{Listener, ListenerScope};
use super::widget::{CalendarWidget, WidgetSettings};
use crate::granularity::{Granularity, GranularityLabels};
use crate::preset::Preset;
use crate::selection::DateSpan;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadlessWidget {
    settings: WidgetSettings,
    initialized: bool,
    destroyed: bool,
    renders: usize,
    view_year: Option<i32>,
    view_month: Option<u32>,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the visible page without selecting anything, as paging arrows do.
    pub fn navigate(&mut self, year: i32, month0: Option<u32>) {
        self.view_year = Some(year);
        if month0.is_some() {
            self.view_month = month0;
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Number of `init` and `reset` renders so far.
    pub fn renders(&self) -> usize {
        self.renders
    }

    fn sync_view(&mut self) {
        self.view_year = self.settings.selected.year;
        self.view_month = self.settings.selected.month;
        self.renders += 1;
    }
}

impl CalendarWidget for HeadlessWidget {
    fn init(&mut self, settings: WidgetSettings) {
        self.settings = settings;
        self.initialized = true;
        self.destroyed = false;
        self.sync_view();
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn reset(&mut self) {
        self.sync_view();
    }

    fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut WidgetSettings {
        &mut self.settings
    }

    fn selected_year(&self) -> Option<i32> {
        self.view_year.or(self.settings.selected.year)
    }

    fn selected_month(&self) -> Option<u32> {
        self.view_month.or(self.settings.selected.month)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadlessChrome {
    active: Granularity,
    switch_visible: bool,
    presets: Vec<Preset>,
    labels: Option<GranularityLabels>,
    start_text: String,
    end_text: String,
    confirm_enabled: bool,
    attached: Vec<(ListenerScope, Listener)>,
    draws: usize,
    preset_renders: usize,
    cleared: bool,
}

impl HeadlessChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Granularity {
        self.active
    }

    pub fn switch_visible(&self) -> bool {
        self.switch_visible
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset_labels(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn labels(&self) -> Option<GranularityLabels> {
        self.labels
    }

    /// Start display text; [`EMPTY_PLACEHOLDER`] when empty.
    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    pub fn end_text(&self) -> &str {
        &self.end_text
    }

    pub fn confirm_enabled(&self) -> bool {
        self.confirm_enabled
    }

    pub fn attached(&self) -> &[(ListenerScope, Listener)] {
        &self.attached
    }

    /// Attached listeners within one scope.
    pub fn attached_in(&self, scope: ListenerScope) -> usize {
        self.attached.iter().filter(|(s, _)| *s == scope).count()
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn preset_renders(&self) -> usize {
        self.preset_renders
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

fn display_text(value: Option<&str>) -> String {
    value.unwrap_or(EMPTY_PLACEHOLDER).to_string()
}

impl ChromePanel for HeadlessChrome {
    fn draw(&mut self, view: &ChromeView<'_>) {
        self.active = view.active;
        self.switch_visible = view.fluid_mode;
        self.presets = view.presets.to_vec();
        self.labels = Some(view.labels);
        self.start_text = display_text(view.span.start());
        self.end_text = display_text(view.span.end());
        self.confirm_enabled = view.confirm_enabled;
        self.cleared = false;
        self.draws += 1;
    }

    fn render_presets(&mut self, _granularity: Granularity, presets: &[Preset]) {
        self.presets = presets.to_vec();
        self.preset_renders += 1;
    }

    fn render_granularity_switch(&mut self, active: Granularity) {
        self.active = active;
    }

    fn render_display(&mut self, labels: GranularityLabels, span: &DateSpan) {
        self.labels = Some(labels);
        self.start_text = display_text(span.start());
        self.end_text = display_text(span.end());
    }

    fn set_confirm_enabled(&mut self, enabled: bool) {
        self.confirm_enabled = enabled;
    }

    fn attach(&mut self, scope: ListenerScope, listener: &Listener) {
        self.attached.push((scope, *listener));
    }

    fn detach(&mut self, scope: ListenerScope, listener: &Listener) {
        if let Some(pos) = self
            .attached
            .iter()
            .position(|(s, l)| *s == scope && l == listener)
        {
            self.attached.remove(pos);
        }
    }

    fn clear(&mut self) {
        self.presets.clear();
        self.labels = None;
        self.start_text.clear();
        self.end_text.clear();
        self.confirm_enabled = false;
        self.cleared = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::listeners::{EventKind, ListenerAction};

    fn listener() -> Listener {
        Listener {
            selector: ".confirm-button",
            event: EventKind::Click,
            action: ListenerAction::Confirm,
        }
    }

    #[test]
    fn detach_removes_one_matching_registration() {
        let mut chrome = HeadlessChrome::new();
        chrome.attach(ListenerScope::Button, &listener());
        chrome.attach(ListenerScope::Button, &listener());
        chrome.detach(ListenerScope::Button, &listener());
        assert_eq!(chrome.attached_in(ListenerScope::Button), 1);

        chrome.detach(ListenerScope::Preset, &listener());
        assert_eq!(chrome.attached_in(ListenerScope::Button), 1);
    }

    #[test]
    fn empty_display_shows_placeholder() {
        let mut chrome = HeadlessChrome::new();
        chrome.render_display(
            Granularity::Month.labels(),
            &DateSpan::new(Some("2024-02"), None),
        );
        assert_eq!(chrome.start_text(), "2024-02");
        assert_eq!(chrome.end_text(), EMPTY_PLACEHOLDER);
        assert_eq!(chrome.labels().map(|l| l.start), Some("Start month"));
    }

    #[test]
    fn navigation_overrides_selected_page() {
        let mut widget = HeadlessWidget::new();
        let mut settings = WidgetSettings::default();
        settings.selected.year = Some(2020);
        settings.selected.month = Some(3);
        widget.init(settings);
        assert_eq!(widget.selected_year(), Some(2020));

        widget.navigate(2022, None);
        assert_eq!(widget.selected_year(), Some(2022));
        assert_eq!(widget.selected_month(), Some(3));

        widget.reset();
        assert_eq!(widget.selected_year(), Some(2020));
        assert_eq!(widget.renders(), 2);
    }
}

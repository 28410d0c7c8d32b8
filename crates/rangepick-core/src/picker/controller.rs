//! The picker: selection state plus the two views it keeps in step.
//!
//! Every public command is one cascade with one origin. Chrome-originated
//! commands (`apply_preset`, `switch_granularity`, `reset`, `confirm`,
//! `cancel`) update the state, refresh the chrome display and push the result
//! into the widget's settings. Widget-originated commands (`on_widget_*`)
//! update the state, refresh the chrome and rewrite the widget's settings to
//! the normalized pair. Neither direction ever calls an input handler of the
//! other view, so a cascade cannot re-enter itself.
//!
//! ## Usage
//!
//! ```ignore
//! let mut picker = DatePicker::new(options, callbacks, widget, chrome);
//! picker.handle(ChromeEvent::PresetClicked { id });
//! picker.on_widget_day_click(&["2024-06-03", "2024-06-10"]);
//! picker.handle(ChromeEvent::ConfirmClicked);
//! ```

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use super::callbacks::Callbacks;
use super::chrome::{ChromeEvent, ChromePanel, ChromeView};
use super::events::PickerEvent;
use super::listeners::{ChromeListeners, ListenerScope};
use super::widget::{CalendarWidget, WidgetSelected, WidgetSettings};
use crate::clock::{Clock, SystemClock};
use crate::config::PickerOptions;
use crate::date::DateValue;
use crate::granularity::Granularity;
use crate::preset::PresetList;
use crate::range::resolve_range;
use crate::selection::{DateSpan, SelectionState};

/// Chrome sections regenerated on a granularity switch.
const SWITCH_SCOPES: [ListenerScope; 2] = [ListenerScope::Preset, ListenerScope::Action];

pub struct DatePicker<W: CalendarWidget, C: ChromePanel> {
    options: PickerOptions,
    state: SelectionState,
    presets: PresetList,
    /// A single highlighted day waiting for its range to close.
    pending_day: Option<String>,
    widget: W,
    chrome: C,
    listeners: ChromeListeners,
    callbacks: Callbacks,
    clock: Box<dyn Clock>,
    destroyed: bool,
}

impl<W: CalendarWidget, C: ChromePanel> DatePicker<W, C> {
    /// Build a picker on the system clock.
    pub fn new(options: PickerOptions, callbacks: Callbacks, widget: W, chrome: C) -> Self {
        Self::with_clock(options, callbacks, widget, chrome, SystemClock)
    }

    /// Build a picker, draw the chrome, attach its listeners and init the widget.
    pub fn with_clock(
        options: PickerOptions,
        callbacks: Callbacks,
        widget: W,
        chrome: C,
        clock: impl Clock + 'static,
    ) -> Self {
        let active = options.granularity;
        let state = SelectionState::new(active, options.normalized_selection());
        let presets = PresetList::resolve(
            active,
            DateValue::today(&clock),
            options.presets.get(active),
        );
        let listeners = ChromeListeners::new(options.fluid_mode);

        let mut picker = Self {
            options,
            state,
            presets,
            pending_day: None,
            widget,
            chrome,
            listeners,
            callbacks,
            clock: Box::new(clock),
            destroyed: false,
        };
        picker.mount();
        picker
    }

    fn mount(&mut self) {
        let active = self.state.active();
        let view = ChromeView {
            active,
            fluid_mode: self.options.fluid_mode,
            presets: self.presets.items(),
            labels: active.labels(),
            span: self.state.active_span(),
            confirm_enabled: self.state.is_valid(),
        };
        self.chrome.draw(&view);
        self.listeners.attach_all(&mut self.chrome);

        let range = resolve_range(active, &self.options.range[active]);
        self.widget
            .init(WidgetSettings::new(active, self.state.active_span(), range));
        debug!(granularity = %active, fluid_mode = self.options.fluid_mode, "picker mounted");
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn granularity(&self) -> Granularity {
        self.state.active()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selection(&self) -> &DateSpan {
        self.state.active_span()
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn presets(&self) -> &PresetList {
        &self.presets
    }

    pub fn pending_day(&self) -> Option<&str> {
        self.pending_day.as_deref()
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn listeners(&self) -> &ChromeListeners {
        &self.listeners
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable widget access for the host, e.g. to navigate its view.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // ── Chrome input ─────────────────────────────────────────────────

    /// Dispatch a chrome event, provided an attached listener covers it.
    pub fn handle(&mut self, event: ChromeEvent) -> Option<PickerEvent> {
        if !self.listeners.accepts(&event) {
            debug!(?event, "no attached listener, chrome event dropped");
            return None;
        }
        match event {
            ChromeEvent::PresetClicked { id } => self.apply_preset(id),
            ChromeEvent::GranularityClicked { granularity } => self.switch_granularity(granularity),
            ChromeEvent::ConfirmClicked => self.confirm(),
            ChromeEvent::CancelClicked => self.cancel(),
            ChromeEvent::ResetClicked => self.reset(),
        }
    }

    /// Apply a preset from the current list to the active granularity.
    pub fn apply_preset(&mut self, id: u64) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        let Some(preset) = self.presets.get(id) else {
            warn!(id, "unknown preset id");
            return None;
        };
        let active = self.state.active();
        let start = DateValue::parse(&preset.resolved_start).format_valid(active);
        let end = DateValue::parse(&preset.resolved_end).format_valid(active);

        self.pending_day = None;
        self.state.set_selection(active, start.clone(), end.clone());
        self.refresh_display();
        self.push_to_widget(active, &DateSpan { start: start.clone(), end: end.clone() });
        debug!(granularity = %active, id, ?start, ?end, "preset applied");

        if let Some(cb) = self.callbacks.on_preset_click.as_mut() {
            cb(start.as_deref(), end.as_deref(), active);
        }
        Some(PickerEvent::PresetApplied {
            granularity: active,
            preset_id: id,
            start,
            end,
        })
    }

    /// Make `target` the active granularity, showing its stored pair.
    pub fn switch_granularity(&mut self, target: Granularity) -> Option<PickerEvent> {
        if self.destroyed || target == self.state.active() {
            return None;
        }
        self.pending_day = None;
        self.state.switch_to(target);
        self.presets = PresetList::resolve(
            target,
            DateValue::today(self.clock.as_ref()),
            self.options.presets.get(target),
        );

        let presets = &self.presets;
        self.listeners.rebind(&SWITCH_SCOPES, &mut self.chrome, |chrome| {
            chrome.render_presets(target, presets.items());
            chrome.render_granularity_switch(target);
        });
        self.refresh_display();

        let span = self.state.active_span().clone();
        self.push_to_widget(target, &span);
        debug!(granularity = %target, start = ?span.start, end = ?span.end, "granularity switched");

        if let Some(cb) = self.callbacks.on_granularity_change.as_mut() {
            cb(target, span.start(), span.end());
        }
        Some(PickerEvent::GranularityChanged {
            granularity: target,
            start: span.start,
            end: span.end,
        })
    }

    /// Clear the active granularity's pair.
    pub fn reset(&mut self) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        let active = self.state.active();
        self.pending_day = None;
        self.state.clear(active);
        self.refresh_display();
        self.push_to_widget(active, &DateSpan::default());
        debug!(granularity = %active, "selection reset");

        if let Some(cb) = self.callbacks.on_reset.as_mut() {
            cb(active);
        }
        Some(PickerEvent::SelectionReset {
            granularity: active,
        })
    }

    /// Confirm the active pair. Nothing happens while it is incomplete.
    pub fn confirm(&mut self) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        let active = self.state.active();
        let (Some(start), Some(end)) = (
            self.state.active_span().start.clone(),
            self.state.active_span().end.clone(),
        ) else {
            debug!(granularity = %active, "confirm ignored, selection incomplete");
            return None;
        };
        debug!(granularity = %active, %start, %end, "selection confirmed");

        if let Some(cb) = self.callbacks.on_confirm.as_mut() {
            cb(&start, &end, active);
        }
        Some(PickerEvent::Confirmed {
            granularity: active,
            start,
            end,
        })
    }

    pub fn cancel(&mut self) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        let active = self.state.active();
        debug!(granularity = %active, "picker cancelled");
        if let Some(cb) = self.callbacks.on_cancel.as_mut() {
            cb(active);
        }
        Some(PickerEvent::Cancelled {
            granularity: active,
        })
    }

    // ── Widget input ─────────────────────────────────────────────────

    /// The widget's day-click report: every day it currently highlights.
    ///
    /// Two or more days form a range from the earliest to the latest. A lone
    /// day is held as pending and selected as a one-day range. An empty report
    /// right after a pending day re-selects that day: the user clicked it a
    /// second time to close the range.
    pub fn on_widget_day_click<S: AsRef<str>>(&mut self, highlighted: &[S]) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        if self.state.active() != Granularity::Day {
            debug!(granularity = %self.state.active(), "day click ignored outside day granularity");
            return None;
        }

        let mut days: Vec<NaiveDate> = highlighted
            .iter()
            .filter_map(|raw| {
                let day = DateValue::parse(raw.as_ref()).day();
                if day.is_none() {
                    warn!(value = raw.as_ref(), "unreadable highlighted day dropped");
                }
                day
            })
            .collect();
        days.sort_unstable();
        let days: Vec<String> = days
            .into_iter()
            .map(|d| DateValue::parse(d).format(Granularity::Day))
            .collect();

        // What the widget keeps showing; a lone day stays an open range.
        let (span, widget_span) = match days.as_slice() {
            [] => match self.pending_day.take() {
                Some(day) => {
                    let span = DateSpan {
                        start: Some(day.clone()),
                        end: Some(day),
                    };
                    (span.clone(), span)
                }
                None => (DateSpan::default(), DateSpan::default()),
            },
            [only] => {
                self.pending_day = Some(only.clone());
                (
                    DateSpan {
                        start: Some(only.clone()),
                        end: Some(only.clone()),
                    },
                    DateSpan {
                        start: Some(only.clone()),
                        end: None,
                    },
                )
            }
            [first, .., last] => {
                self.pending_day = None;
                let span = DateSpan {
                    start: Some(first.clone()),
                    end: Some(last.clone()),
                };
                (span.clone(), span)
            }
        };

        self.push_to_widget(Granularity::Day, &widget_span);
        self.state
            .set_selection(Granularity::Day, span.start.clone(), span.end.clone());
        self.refresh_display();
        debug!(start = ?span.start, end = ?span.end, pending = ?self.pending_day, "days picked");

        if let Some(cb) = self.callbacks.on_day_click.as_mut() {
            cb(span.start(), span.end());
        }
        Some(PickerEvent::DaysPicked {
            start: span.start,
            end: span.end,
        })
    }

    /// The widget's month-click report (zero-based month index).
    pub fn on_widget_month_click(&mut self, month0: u32) -> Option<PickerEvent> {
        let year = self.widget.selected_year();
        self.on_widget_period_click(year, Some(month0))
    }

    pub fn on_widget_year_click(&mut self, year: i32) -> Option<PickerEvent> {
        let month0 = self.widget.selected_month();
        self.on_widget_period_click(Some(year), month0)
    }

    fn on_widget_period_click(
        &mut self,
        year: Option<i32>,
        month0: Option<u32>,
    ) -> Option<PickerEvent> {
        if self.destroyed {
            return None;
        }
        let active = self.state.active();
        if active == Granularity::Day {
            debug!("period click ignored at day granularity");
            return None;
        }
        // The widget always shows some page; without one reported, it is today's.
        let today = self.clock.today();
        let year = year.unwrap_or_else(|| today.year());
        let month0 = month0.unwrap_or_else(|| today.month0());
        let Some(date) = month0
            .checked_add(1)
            .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
        else {
            warn!(year, month0, "period click outside the calendar");
            return None;
        };
        let value = DateValue::parse(date).format(active);

        self.state
            .set_selection(active, Some(value.clone()), Some(value.clone()));
        self.refresh_display();
        let span = self.state.active_span().clone();
        self.push_to_widget(active, &span);
        debug!(granularity = %active, %value, "period picked");

        match active {
            Granularity::Month => {
                if let Some(cb) = self.callbacks.on_month_click.as_mut() {
                    cb(&value);
                }
                Some(PickerEvent::MonthPicked { value })
            }
            _ => {
                if let Some(cb) = self.callbacks.on_year_click.as_mut() {
                    cb(&value);
                }
                Some(PickerEvent::YearPicked { value })
            }
        }
    }

    // ── Teardown ─────────────────────────────────────────────────────

    /// Release the widget, detach every listener and clear the chrome.
    /// Later calls (and drop) do nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.widget.destroy();
        self.listeners.detach_all(&mut self.chrome);
        self.listeners.clear();
        self.chrome.clear();
        self.pending_day = None;
        self.destroyed = true;
        debug!("picker destroyed");
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn refresh_display(&mut self) {
        let active = self.state.active();
        self.chrome
            .render_display(active.labels(), self.state.active_span());
        self.chrome.set_confirm_enabled(self.state.is_valid());
    }

    /// Write the widget's mode, selection and bounds, then re-render it.
    fn push_to_widget(&mut self, granularity: Granularity, span: &DateSpan) {
        let range = resolve_range(granularity, &self.options.range[granularity]);
        let settings = self.widget.settings_mut();
        settings.mode = granularity.widget_mode();
        settings.selected = WidgetSelected::for_span(granularity, span);
        settings.range = range;
        trace!(?settings, "widget settings pushed");
        self.widget.reset();
    }
}

impl<W: CalendarWidget, C: ChromePanel> Drop for DatePicker<W, C> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<W: CalendarWidget, C: ChromePanel> std::fmt::Debug for DatePicker<W, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("pending_day", &self.pending_day)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

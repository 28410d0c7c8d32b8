//! Host notification hooks.

use crate::granularity::Granularity;

type ConfirmFn = Box<dyn FnMut(&str, &str, Granularity)>;
type GranularityFn = Box<dyn FnMut(Granularity)>;
type ChangeFn = Box<dyn FnMut(Granularity, Option<&str>, Option<&str>)>;
type PresetFn = Box<dyn FnMut(Option<&str>, Option<&str>, Granularity)>;
type DayFn = Box<dyn FnMut(Option<&str>, Option<&str>)>;
type ValueFn = Box<dyn FnMut(&str)>;

/// Optional host callbacks, one per action.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) on_confirm: Option<ConfirmFn>,
    pub(crate) on_cancel: Option<GranularityFn>,
    pub(crate) on_granularity_change: Option<ChangeFn>,
    pub(crate) on_preset_click: Option<PresetFn>,
    pub(crate) on_reset: Option<GranularityFn>,
    pub(crate) on_day_click: Option<DayFn>,
    pub(crate) on_month_click: Option<ValueFn>,
    pub(crate) on_year_click: Option<ValueFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired on confirm, only while the active pair is complete.
    pub fn on_confirm(mut self, f: impl FnMut(&str, &str, Granularity) + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut(Granularity) + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_granularity_change(
        mut self,
        f: impl FnMut(Granularity, Option<&str>, Option<&str>) + 'static,
    ) -> Self {
        self.on_granularity_change = Some(Box::new(f));
        self
    }

    pub fn on_preset_click(
        mut self,
        f: impl FnMut(Option<&str>, Option<&str>, Granularity) + 'static,
    ) -> Self {
        self.on_preset_click = Some(Box::new(f));
        self
    }

    pub fn on_reset(mut self, f: impl FnMut(Granularity) + 'static) -> Self {
        self.on_reset = Some(Box::new(f));
        self
    }

    pub fn on_day_click(mut self, f: impl FnMut(Option<&str>, Option<&str>) + 'static) -> Self {
        self.on_day_click = Some(Box::new(f));
        self
    }

    pub fn on_month_click(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_month_click = Some(Box::new(f));
        self
    }

    pub fn on_year_click(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_year_click = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_granularity_change", &self.on_granularity_change.is_some())
            .field("on_preset_click", &self.on_preset_click.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .field("on_day_click", &self.on_day_click.is_some())
            .field("on_month_click", &self.on_month_click.is_some())
            .field("on_year_click", &self.on_year_click.is_some())
            .finish()
    }
}

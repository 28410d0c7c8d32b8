//! Chrome panel listener registrations.
//!
//! Listeners are grouped by the chrome section whose markup they bind to.
//! A section that gets regenerated must have its listeners detached first and
//! re-attached afterwards; [`ChromeListeners::rebind`] is the only way the
//! picker regenerates a section, so the pairing always holds.

use serde::Serialize;

use super::chrome::{ChromeEvent, ChromePanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
}

/// What a listener does when its event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerAction {
    ApplyPreset,
    SwitchGranularity,
    Confirm,
    Cancel,
    Reset,
}

impl ListenerAction {
    pub fn for_event(event: &ChromeEvent) -> Self {
        match event {
            ChromeEvent::PresetClicked { .. } => ListenerAction::ApplyPreset,
            ChromeEvent::GranularityClicked { .. } => ListenerAction::SwitchGranularity,
            ChromeEvent::ConfirmClicked => ListenerAction::Confirm,
            ChromeEvent::CancelClicked => ListenerAction::Cancel,
            ChromeEvent::ResetClicked => ListenerAction::Reset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Listener {
    pub selector: &'static str,
    pub event: EventKind,
    pub action: ListenerAction,
}

/// Chrome sections that own listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerScope {
    Preset,
    Action,
    Button,
}

impl ListenerScope {
    pub const ALL: [ListenerScope; 3] =
        [ListenerScope::Preset, ListenerScope::Action, ListenerScope::Button];

    /// Container the scope's selectors are resolved under.
    pub fn container(self) -> &'static str {
        match self {
            ListenerScope::Preset => ".preset-container",
            ListenerScope::Action => ".action-container",
            ListenerScope::Button => ".button-container",
        }
    }
}

pub mod selectors {
    pub const PRESET_BUTTON: &str = ".preset-button";
    pub const GRANULARITY_BUTTON: &str = ".granularity-button";
    pub const CONFIRM_BUTTON: &str = ".confirm-button";
    pub const CANCEL_BUTTON: &str = ".cancel-button";
    pub const RESET_BUTTON: &str = ".reset-button";
}

/// Listeners of one scope and whether they are currently attached.
#[derive(Debug, Clone)]
pub struct ListenerRegistry {
    scope: ListenerScope,
    listeners: Vec<Listener>,
    attached: bool,
}

impl ListenerRegistry {
    pub fn new(scope: ListenerScope) -> Self {
        Self {
            scope,
            listeners: Vec::new(),
            attached: false,
        }
    }

    pub fn scope(&self) -> ListenerScope {
        self.scope
    }

    pub fn register(&mut self, selector: &'static str, event: EventKind, action: ListenerAction) {
        self.listeners.push(Listener {
            selector,
            event,
            action,
        });
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attach every listener. A no-op while already attached.
    pub fn attach<P: ChromePanel + ?Sized>(&mut self, chrome: &mut P) {
        if self.attached {
            return;
        }
        for listener in &self.listeners {
            chrome.attach(self.scope, listener);
        }
        self.attached = true;
    }

    /// Detach every listener. A no-op while detached.
    pub fn detach<P: ChromePanel + ?Sized>(&mut self, chrome: &mut P) {
        if !self.attached {
            return;
        }
        for listener in &self.listeners {
            chrome.detach(self.scope, listener);
        }
        self.attached = false;
    }

    /// Drop all registrations. Must be detached first.
    pub fn clear(&mut self) {
        debug_assert!(!self.attached, "clearing attached listeners");
        self.listeners.clear();
    }

    fn handles(&self, action: ListenerAction) -> bool {
        self.attached && self.listeners.iter().any(|l| l.action == action)
    }
}

/// The picker's three listener registries.
#[derive(Debug, Clone)]
pub struct ChromeListeners {
    preset: ListenerRegistry,
    action: ListenerRegistry,
    button: ListenerRegistry,
}

impl ChromeListeners {
    /// Standard registrations; the granularity switch only in fluid mode.
    pub fn new(fluid_mode: bool) -> Self {
        let mut preset = ListenerRegistry::new(ListenerScope::Preset);
        preset.register(selectors::PRESET_BUTTON, EventKind::Click, ListenerAction::ApplyPreset);

        let mut action = ListenerRegistry::new(ListenerScope::Action);
        if fluid_mode {
            action.register(
                selectors::GRANULARITY_BUTTON,
                EventKind::Click,
                ListenerAction::SwitchGranularity,
            );
        }

        let mut button = ListenerRegistry::new(ListenerScope::Button);
        button.register(selectors::CONFIRM_BUTTON, EventKind::Click, ListenerAction::Confirm);
        button.register(selectors::CANCEL_BUTTON, EventKind::Click, ListenerAction::Cancel);
        button.register(selectors::RESET_BUTTON, EventKind::Click, ListenerAction::Reset);

        Self {
            preset,
            action,
            button,
        }
    }

    pub fn registry(&self, scope: ListenerScope) -> &ListenerRegistry {
        match scope {
            ListenerScope::Preset => &self.preset,
            ListenerScope::Action => &self.action,
            ListenerScope::Button => &self.button,
        }
    }

    fn registry_mut(&mut self, scope: ListenerScope) -> &mut ListenerRegistry {
        match scope {
            ListenerScope::Preset => &mut self.preset,
            ListenerScope::Action => &mut self.action,
            ListenerScope::Button => &mut self.button,
        }
    }

    pub fn attach_all<P: ChromePanel + ?Sized>(&mut self, chrome: &mut P) {
        for scope in ListenerScope::ALL {
            self.registry_mut(scope).attach(chrome);
        }
    }

    pub fn detach_all<P: ChromePanel + ?Sized>(&mut self, chrome: &mut P) {
        for scope in ListenerScope::ALL {
            self.registry_mut(scope).detach(chrome);
        }
    }

    pub fn clear(&mut self) {
        for scope in ListenerScope::ALL {
            self.registry_mut(scope).clear();
        }
    }

    /// Detach `scopes`, run `render`, then re-attach them.
    pub fn rebind<P, R>(
        &mut self,
        scopes: &[ListenerScope],
        chrome: &mut P,
        render: impl FnOnce(&mut P) -> R,
    ) -> R
    where
        P: ChromePanel + ?Sized,
    {
        for &scope in scopes {
            self.registry_mut(scope).detach(chrome);
        }
        let out = render(chrome);
        for &scope in scopes {
            self.registry_mut(scope).attach(chrome);
        }
        out
    }

    /// Whether an attached listener would have produced `event`.
    pub fn accepts(&self, event: &ChromeEvent) -> bool {
        let action = ListenerAction::for_event(event);
        ListenerScope::ALL
            .into_iter()
            .any(|scope| self.registry(scope).handles(action))
    }
}

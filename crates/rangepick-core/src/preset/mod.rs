//! Preset shortcuts.
//!
//! A [`PresetDef`] is the declarative form a host configures
//! (`{label, start, end}` with raw tokens). A [`PresetList`] resolves definitions
//! into [`Preset`]s for one granularity against a given "today". Lists are
//! rebuilt whenever a granularity's presets are shown, since `current` and
//! friends move with the clock.

mod resolver;
mod token;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::granularity::Granularity;

pub use resolver::PresetResolver;
pub use token::{NamedToken, PresetToken};

static NEXT_PRESET_ID: AtomicU64 = AtomicU64::new(1);

/// Hand out the next process-unique preset id.
fn next_id() -> u64 {
    NEXT_PRESET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Declarative preset as configured by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDef {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub start: Option<PresetToken>,
    #[serde(default)]
    pub end: Option<PresetToken>,
}

impl PresetDef {
    pub fn new(
        label: impl Into<String>,
        start: impl Into<PresetToken>,
        end: impl Into<PresetToken>,
    ) -> Self {
        Self {
            label: label.into(),
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Built-in presets for `granularity`.
    pub fn defaults(granularity: Granularity) -> Vec<PresetDef> {
        match granularity {
            Granularity::Day => vec![
                PresetDef::new("Today", "current", "current"),
                PresetDef::new("Yesterday", -1, -1),
                PresetDef::new("This week", "week", "current"),
                PresetDef::new("Last 7 days (excluding today)", -7, -1),
                PresetDef::new("This month", "month", "current"),
                PresetDef::new("Last 30 days (excluding today)", -30, -1),
            ],
            Granularity::Month => vec![PresetDef::new("This month", "current", "current")],
            Granularity::Year => vec![PresetDef::new("This year", "current", "current")],
        }
    }
}

/// A resolved preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub id: u64,
    pub label: String,
    pub origin_start: Option<PresetToken>,
    pub origin_end: Option<PresetToken>,
    pub resolved_start: String,
    pub resolved_end: String,
}

/// Resolved presets for one granularity.
#[derive(Debug, Clone)]
pub struct PresetList {
    resolver: PresetResolver,
    items: Vec<Preset>,
}

impl PresetList {
    pub fn new(granularity: Granularity, today: DateValue) -> Self {
        Self {
            resolver: PresetResolver::new(granularity, today),
            items: Vec::new(),
        }
    }

    /// Resolve every definition in order.
    pub fn resolve(granularity: Granularity, today: DateValue, defs: &[PresetDef]) -> Self {
        let mut list = Self::new(granularity, today);
        for def in defs {
            list.add(def);
        }
        list
    }

    pub fn granularity(&self) -> Granularity {
        self.resolver.granularity()
    }

    /// Resolve and append `def`, returning its id.
    pub fn add(&mut self, def: &PresetDef) -> u64 {
        let (resolved_start, resolved_end) =
            self.resolver.resolve(def.start.as_ref(), def.end.as_ref());
        let id = next_id();
        self.items.push(Preset {
            id,
            label: def.label.clone(),
            origin_start: def.start.clone(),
            origin_end: def.end.clone(),
            resolved_start,
            resolved_end,
        });
        id
    }

    pub fn delete(&mut self, id: u64) {
        self.items.retain(|p| p.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: u64) -> Option<&Preset> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Preset> {
        self.items.iter().find(|p| p.label == label)
    }

    pub fn items(&self) -> &[Preset] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Picker construction options.
//!
//! Options are plain data and deserialize from TOML or JSON. Every field has
//! a default; a field that is missing or `null` takes its default, and nested
//! tables merge the same way field by field. Unknown keys are ignored.
//!
//! Host callbacks are not part of the options; see
//! [`Callbacks`](crate::picker::Callbacks).

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};
use crate::granularity::{Granularity, PerGranularity};
use crate::preset::PresetDef;
use crate::range::RangeBounds;
use crate::selection::DateSpan;

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Preset lists per granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalog {
    #[serde(default = "default_day_presets", alias = "date", deserialize_with = "presets_or_default_day")]
    pub day: Vec<PresetDef>,
    #[serde(default = "default_month_presets", deserialize_with = "presets_or_default_month")]
    pub month: Vec<PresetDef>,
    #[serde(default = "default_year_presets", deserialize_with = "presets_or_default_year")]
    pub year: Vec<PresetDef>,
}

impl PresetCatalog {
    pub fn get(&self, granularity: Granularity) -> &[PresetDef] {
        match granularity {
            Granularity::Day => &self.day,
            Granularity::Month => &self.month,
            Granularity::Year => &self.year,
        }
    }
}

/// Options recognised when building a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOptions {
    /// Granularity active on open.
    #[serde(default, alias = "type", deserialize_with = "null_as_default")]
    pub granularity: Granularity,
    /// Enables the granularity switch.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fluid_mode: bool,
    /// Seed selection per granularity.
    #[serde(default, deserialize_with = "null_as_default")]
    pub selection: PerGranularity<DateSpan>,
    /// Seed bounds per granularity.
    #[serde(default, deserialize_with = "null_as_default")]
    pub range: PerGranularity<RangeBounds>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub presets: PresetCatalog,
}

// Default functions
fn default_day_presets() -> Vec<PresetDef> {
    PresetDef::defaults(Granularity::Day)
}
fn default_month_presets() -> Vec<PresetDef> {
    PresetDef::defaults(Granularity::Month)
}
fn default_year_presets() -> Vec<PresetDef> {
    PresetDef::defaults(Granularity::Year)
}

fn presets_or<'de, D>(
    deserializer: D,
    granularity: Granularity,
) -> std::result::Result<Vec<PresetDef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PresetDef>>::deserialize(deserializer)?
        .unwrap_or_else(|| PresetDef::defaults(granularity)))
}
fn presets_or_default_day<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Vec<PresetDef>, D::Error> {
    presets_or(d, Granularity::Day)
}
fn presets_or_default_month<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Vec<PresetDef>, D::Error> {
    presets_or(d, Granularity::Month)
}
fn presets_or_default_year<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Vec<PresetDef>, D::Error> {
    presets_or(d, Granularity::Year)
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self {
            day: default_day_presets(),
            month: default_month_presets(),
            year: default_year_presets(),
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Day,
            fluid_mode: false,
            selection: PerGranularity::default(),
            range: PerGranularity::default(),
            presets: PresetCatalog::default(),
        }
    }
}

impl PickerOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a field has the wrong type.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a `.toml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: format!("unsupported extension: {}", other.unwrap_or("<none>")),
            }
            .into()),
        }
    }

    /// Seeds re-read at their own granularity; unreadable seeds become empty.
    pub fn normalized_selection(&self) -> PerGranularity<DateSpan> {
        self.selection.map(|g, span| span.normalized(g))
    }
}

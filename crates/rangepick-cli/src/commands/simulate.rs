//! Script-driven picker runs.
//!
//! A script is a TOML or JSON document with picker `options` and an ordered
//! list of `events`:
//!
//! ```toml
//! [options]
//! fluid_mode = true
//!
//! [[events]]
//! type = "preset"
//! label = "Yesterday"
//!
//! [[events]]
//! type = "confirm"
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::Args;
use rangepick_core::picker::{HeadlessChrome, HeadlessWidget};
use rangepick_core::{
    CalendarWidget, Callbacks, ChromeEvent, ConfigError, DatePicker, Granularity, PickerOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::pinned_clock;

#[derive(Args)]
pub struct SimulateArgs {
    /// Script file (.toml or .json)
    script: PathBuf,
    /// Resolve presets against this day instead of the system date
    #[arg(long)]
    today: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    options: PickerOptions,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    /// Click the preset with this label.
    Preset { label: String },
    /// Click a granularity switch button.
    Switch { granularity: Granularity },
    Reset,
    Confirm,
    Cancel,
    /// The widget's day-click report.
    Days {
        #[serde(default)]
        dates: Vec<String>,
    },
    /// The widget's month-click report; `year` pages there first.
    Month {
        month_index: u32,
        #[serde(default)]
        year: Option<i32>,
    },
    Year { year: i32 },
    /// Page the widget without selecting.
    Navigate {
        year: i32,
        #[serde(default)]
        month_index: Option<u32>,
    },
}

fn load_script(path: &Path) -> Result<Script, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let script: Script = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(ConfigError::ParseFailed(format!(
                "script must be .toml or .json: {}",
                path.display()
            ))
            .into())
        }
    };
    Ok(script)
}

/// Callbacks that log their own name into `fired`.
fn recording_callbacks(fired: &Rc<RefCell<Vec<&'static str>>>) -> Callbacks {
    let hook = |name: &'static str| {
        let fired = Rc::clone(fired);
        move || fired.borrow_mut().push(name)
    };
    let (confirm, cancel, switch, preset) = (
        hook("on_confirm"),
        hook("on_cancel"),
        hook("on_granularity_change"),
        hook("on_preset_click"),
    );
    let (reset, day, month, year) = (
        hook("on_reset"),
        hook("on_day_click"),
        hook("on_month_click"),
        hook("on_year_click"),
    );
    Callbacks::new()
        .on_confirm(move |_, _, _| confirm())
        .on_cancel(move |_| cancel())
        .on_granularity_change(move |_, _, _| switch())
        .on_preset_click(move |_, _, _| preset())
        .on_reset(move |_| reset())
        .on_day_click(move |_, _| day())
        .on_month_click(move |_| month())
        .on_year_click(move |_| year())
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let script = load_script(&args.script)?;
    let clock = pinned_clock(args.today.as_deref())?;
    debug!(events = script.events.len(), "script loaded");

    let fired = Rc::new(RefCell::new(Vec::new()));
    let mut picker = DatePicker::with_clock(
        script.options,
        recording_callbacks(&fired),
        HeadlessWidget::new(),
        HeadlessChrome::new(),
        clock,
    );

    for (step, input) in script.events.iter().enumerate() {
        let event = match input {
            ScriptEvent::Preset { label } => {
                let id = picker
                    .presets()
                    .find_by_label(label)
                    .map(|p| p.id)
                    .ok_or_else(|| format!("step {step}: no preset labelled {label:?}"))?;
                picker.handle(ChromeEvent::PresetClicked { id })
            }
            ScriptEvent::Switch { granularity } => picker.handle(ChromeEvent::GranularityClicked {
                granularity: *granularity,
            }),
            ScriptEvent::Reset => picker.handle(ChromeEvent::ResetClicked),
            ScriptEvent::Confirm => picker.handle(ChromeEvent::ConfirmClicked),
            ScriptEvent::Cancel => picker.handle(ChromeEvent::CancelClicked),
            ScriptEvent::Days { dates } => picker.on_widget_day_click(dates.as_slice()),
            ScriptEvent::Month { month_index, year } => {
                if let Some(year) = year {
                    picker.widget_mut().navigate(*year, None);
                }
                picker.on_widget_month_click(*month_index)
            }
            ScriptEvent::Year { year } => picker.on_widget_year_click(*year),
            ScriptEvent::Navigate { year, month_index } => {
                picker.widget_mut().navigate(*year, *month_index);
                None
            }
        };
        let callbacks: Vec<&str> = fired.borrow_mut().drain(..).collect();
        let line = json!({
            "step": step,
            "input": input,
            "event": event,
            "callbacks": callbacks,
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    let chrome = picker.chrome();
    let summary = json!({
        "granularity": picker.granularity(),
        "valid": picker.is_valid(),
        "selection": picker.state().spans(),
        "pending_day": picker.pending_day(),
        "display": {
            "start": chrome.start_text(),
            "end": chrome.end_text(),
            "confirm_enabled": chrome.confirm_enabled(),
        },
        "widget": picker.widget().settings(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    picker.destroy();
    Ok(())
}

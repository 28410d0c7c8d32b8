use std::path::PathBuf;

use clap::Args;
use rangepick_core::{DateValue, Granularity, PickerOptions, PresetList};

use super::pinned_clock;

#[derive(Args)]
pub struct PresetsArgs {
    /// Granularity to resolve for (day, month, year)
    #[arg(short, long, default_value_t = Granularity::Day)]
    granularity: Granularity,
    /// Resolve against this day instead of the system date
    #[arg(long)]
    today: Option<String>,
    /// Options file (.toml or .json) providing the preset lists
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PresetsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = match &args.config {
        Some(path) => PickerOptions::load(path)?,
        None => PickerOptions::default(),
    };
    let clock = pinned_clock(args.today.as_deref())?;
    let list = PresetList::resolve(
        args.granularity,
        DateValue::today(&clock),
        options.presets.get(args.granularity),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(list.items())?);
    } else if list.is_empty() {
        println!("No presets.");
    } else {
        for preset in list.items() {
            println!(
                "{:<32} {} .. {}",
                preset.label, preset.resolved_start, preset.resolved_end
            );
        }
    }
    Ok(())
}

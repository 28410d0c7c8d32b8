use clap::Args;
use rangepick_core::{resolve_range, Granularity, RangeBounds};

#[derive(Args)]
pub struct RangeArgs {
    /// Granularity to resolve for (day, month, year)
    #[arg(short, long, default_value_t = Granularity::Day)]
    granularity: Granularity,
    /// Lower bound; unreadable values fall back to the default
    #[arg(long)]
    min: Option<String>,
    /// Upper bound; unreadable values fall back to the default
    #[arg(long)]
    max: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RangeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = RangeBounds::new(args.min.as_deref(), args.max.as_deref());
    let range = resolve_range(args.granularity, &bounds);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&range)?);
    } else {
        println!("min: {}", range.min);
        println!("max: {}", range.max);
    }
    Ok(())
}

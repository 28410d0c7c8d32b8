use clap::Args;
use rangepick_core::{DateValue, Granularity};
use serde_json::json;

#[derive(Args)]
pub struct ParseArgs {
    /// Date text, e.g. "2024-06-15", "2024/06" or "2024-06-15 08:30"
    input: String,
    /// Output granularity (day, month, year)
    #[arg(short, long, default_value_t = Granularity::Day)]
    granularity: Granularity,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let value = DateValue::parse(args.input.as_str());
    let formatted = value.format(args.granularity);

    if args.json {
        let out = json!({
            "input": args.input,
            "granularity": args.granularity,
            "value": formatted,
            "valid": !value.is_invalid(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{formatted}");
    }
    Ok(())
}

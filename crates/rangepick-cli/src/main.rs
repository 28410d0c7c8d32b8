use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rangepick", version, about = "Date-range picker engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical form of a date input
    Parse(commands::parse::ParseArgs),
    /// List resolved presets
    Presets(commands::presets::PresetsArgs),
    /// Resolve min/max bounds
    Range(commands::range::RangeArgs),
    /// Run an event script through a headless picker
    Simulate(commands::simulate::SimulateArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Range(args) => commands::range::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

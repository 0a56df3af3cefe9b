use anyhow::Result;
use bikeshare_explorer::{app, DatasetRegistry};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(name = "bikeshare-explorer", version, about)]
struct Cli {
    /// Directory containing the city CSV files (chicago.csv,
    /// new_york_city.csv, washington.csv)
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = DatasetRegistry::new(cli.data_dir);

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&registry, &mut stdin.lock(), &mut stdout.lock())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Plot projects on a process maturity quadrant grid")]
pub struct Cli {
    /// Path to a grid config file (YAML)
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Seed for marker jitter, for reproducible layouts
    #[clap(long)]
    pub seed: Option<u64>,

    /// Grid layout override: 2x2 or 4x4
    #[clap(long)]
    pub layout: Option<String>,
}

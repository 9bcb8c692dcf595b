use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use extension_icons::{IconSet, DEFAULT_OUT_DIR};

#[derive(Parser)]
#[command(name = "extension-icons")]
#[command(about = "Write the 16/48/128 px extension icons")]
struct Cli {
    /// Directory the icons are written to (must already exist)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    IconSet::standard(&args.out_dir)
        .with_verbose(args.verbose)
        .write_all()
        .with_context(|| format!("Failed to create icons in {}", args.out_dir.display()))?;

    println!("Icons created.");
    Ok(())
}

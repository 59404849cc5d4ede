//! Print the recorded clue history for one answer word as JSON
//! Run with: cargo run --bin clue-lookup -- OREO

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crosshare_pdf::lookup::ClueDatabase;

#[derive(Parser, Debug)]
#[command(name = "clue-lookup")]
#[command(about = "Look up previously used clues for an answer word")]
struct Args {
    /// Answer word to look up
    word: String,

    /// Tab-separated clue database
    #[arg(long, default_value = "clues.tsv")]
    db: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let db = ClueDatabase::open(&args.db)
        .with_context(|| format!("Failed to load clue database {}", args.db.display()))?;

    let clues = db.clues_for(&args.word);
    let json = serde_json::to_string_pretty(&clues).context("Failed to encode clues")?;
    println!("{}", json);

    Ok(())
}

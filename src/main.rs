use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use crosshare_pdf::cli::Args;
use crosshare_pdf::config::Settings;
use crosshare_pdf::export::export_pdf;
use crosshare_pdf::store::DirectoryStore;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let store = DirectoryStore::new(&args.store);
    let settings = Settings::from_args(&args);

    let response = match export_pdf(&store, Some(&args.puzzle_id), &settings) {
        Ok(response) => response,
        Err(e) => {
            log::debug!("Export failed with status {}: {}", e.status_code(), e.body_json());
            return Err(e).with_context(|| {
                format!(
                    "Failed to export puzzle {} from {}",
                    args.puzzle_id,
                    store.root().display()
                )
            });
        }
    };

    for (name, value) in &response.headers {
        log::info!("{}: {}", name, value);
    }

    let output_path = args.output_path(&response.filename);
    fs::write(&output_path, &response.body)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}

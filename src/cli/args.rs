use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output filename used when the puzzle title sanitizes to nothing
pub const FALLBACK_FILENAME: &str = "puzzle.pdf";

#[derive(Parser, Debug)]
#[command(name = "crosshare-pdf")]
#[command(
    author,
    version,
    about = "Export a stored Crosshare puzzle as a print-ready PDF"
)]
pub struct Args {
    /// Puzzle identifier to export
    #[arg(required = true)]
    pub puzzle_id: String,

    /// Directory holding `<puzzle id>.json` records
    #[arg(long, default_value = "puzzles")]
    pub store: PathBuf,

    /// Output PDF file path (defaults to the sanitized puzzle title)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "a4")]
    pub page_size: PageSize,

    /// Skip stream compression of the finished PDF
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Portrait page dimensions in points (width, height)
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

impl Args {
    /// Get the output path, defaulting to the suggested download filename.
    ///
    /// A title with no word characters leaves only the extension; that falls
    /// back to `puzzle.pdf` rather than writing a dotfile.
    pub fn output_path(&self, suggested_filename: &str) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let stem = suggested_filename
            .strip_suffix(".pdf")
            .unwrap_or(suggested_filename);
        if stem.trim().is_empty() {
            PathBuf::from(FALLBACK_FILENAME)
        } else {
            PathBuf::from(suggested_filename)
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

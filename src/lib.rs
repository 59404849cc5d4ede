pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod lookup;
pub mod model;
pub mod parser;
pub mod render;
pub mod store;

pub use cli::PageSize;
pub use config::Settings;
pub use error::{ExportError, PuzzleError, RenderError};
pub use export::{export_pdf, PdfResponse};
pub use lookup::ClueDatabase;
pub use model::PuzzleRecord;
pub use parser::{puzzle_from_db, DbPuzzle};
pub use render::PuzzleSheetRenderer;
pub use store::{DirectoryStore, PuzzleStore};

/// High-level API for rendering a stored puzzle to PDF.
///
/// This is the recommended entry point for library consumers that already
/// hold a puzzle record. It validates the record, lays out the grid and clue
/// columns, and serializes the document.
///
/// # Arguments
///
/// * `stored` - Puzzle record in its stored (short field name) form
/// * `page_size` - Paper size for every page of the document
///
/// # Returns
///
/// PDF file contents as bytes, or an ExportError when the record is malformed
/// or the document cannot be produced.
///
/// # Example
///
/// ```no_run
/// use crosshare_pdf::{render_puzzle, DbPuzzle, PageSize};
///
/// let json = std::fs::read_to_string("puzzles/abc123.json").unwrap();
/// let stored: DbPuzzle = serde_json::from_str(&json).unwrap();
///
/// let pdf_bytes = render_puzzle(&stored, PageSize::A4).unwrap();
/// std::fs::write("puzzle.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_puzzle(stored: &DbPuzzle, page_size: PageSize) -> Result<Vec<u8>, ExportError> {
    let puzzle = puzzle_from_db(stored)?;
    let settings = Settings::default().with_page_size(page_size);
    Ok(PuzzleSheetRenderer::new(settings).render(&puzzle)?)
}

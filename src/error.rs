use thiserror::Error;

/// Errors raised while shaping a stored record into a `PuzzleRecord`
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Invalid puzzle size: {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },

    #[error("Grid has {actual} cells, expected {expected}")]
    GridLength { expected: usize, actual: usize },

    #[error("{direction} clues and numbers differ in length ({clues} vs {numbers})")]
    ClueCount {
        direction: &'static str,
        clues: usize,
        numbers: usize,
    },

    #[error("Cell index {index} in {field} is outside the grid")]
    CellOutOfRange { field: &'static str, index: usize },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

/// Errors from the puzzle store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read puzzle {id}: {source}")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed puzzle record {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the export handler, each mapping to a response status
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("bad puzzle params")]
    BadParams,

    #[error("failed to get puzzle")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    InvalidPuzzle(#[from] PuzzleError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum ClueDbError {
    #[error("Failed to open clue database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid clue database entry at line {line}: {message}")]
    InvalidLine { line: usize, message: String },
}

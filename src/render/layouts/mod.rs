//! Whole-document renderers

pub mod puzzle_sheet;

pub use puzzle_sheet::PuzzleSheetRenderer;

pub mod clue_flow;
pub mod grid;
pub mod puzzle;

pub use clue_flow::{build_clue_items, ClueFlowItem};
pub use grid::{CluedEntry, Entry, ViewableGrid};
pub use puzzle::{ClueKey, Direction, GridSize, Highlight, PuzzleRecord, BLOCK};

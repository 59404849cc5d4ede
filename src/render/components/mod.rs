//! Rendering components for PDF generation

pub mod clue_flow;
pub mod grid;
pub mod info_header;

pub use clue_flow::{ClueFlowLayout, ClueLayout, GridFootprint, PlacedItem};
pub use grid::{square_size, GridPlan, GridRenderer};
pub use info_header::InfoHeaderRenderer;

//! Printable puzzle sheet
//!
//! One document per puzzle: title and byline, the grid, then the clue list
//! flowing in columns below and beside the grid and onto further pages.

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt};

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{build_clue_items, PuzzleRecord, ViewableGrid};
use crate::render::components::{
    ClueFlowLayout, ClueLayout, GridFootprint, GridPlan, GridRenderer, InfoHeaderRenderer,
};
use crate::render::helpers::compress::compress_pdf;
use crate::render::helpers::layer::LayerBuilder;

/// Every placement decision for one puzzle, before drawing
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub grid: GridPlan,
    pub clues: ClueLayout,
}

/// Puzzle sheet renderer
pub struct PuzzleSheetRenderer {
    settings: Settings,
}

impl PuzzleSheetRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Compute grid and clue placement without producing a document
    pub fn plan(&self, puzzle: &PuzzleRecord) -> SheetPlan {
        let grid = ViewableGrid::from_puzzle(puzzle);
        let grid_plan =
            GridRenderer::new(&self.settings).plan(puzzle, &grid, self.settings.grid_origin);
        let items = build_clue_items(puzzle, &grid);
        let clues = ClueFlowLayout::new(&self.settings)
            .layout(&items, self.footprint(puzzle, grid_plan.square_size));
        SheetPlan {
            grid: grid_plan,
            clues,
        }
    }

    fn footprint(&self, puzzle: &PuzzleRecord, square_size: f32) -> GridFootprint {
        GridFootprint {
            square_size,
            rows: puzzle.size.rows,
            cols: puzzle.size.cols,
        }
    }

    /// Generate the PDF for one puzzle
    pub fn render(&self, puzzle: &PuzzleRecord) -> Result<Vec<u8>, RenderError> {
        log::info!("Generating pdf for {}", puzzle.title);

        let grid = ViewableGrid::from_puzzle(puzzle);

        let mut doc = PdfDocument::new(&puzzle.title);
        doc.metadata.info.creator = self.settings.creator.clone();
        doc.metadata.info.author = puzzle.author_name.clone();

        let mut first_page = LayerBuilder::new(self.settings.page_height);
        InfoHeaderRenderer::new(&self.settings).render(&mut first_page, puzzle);
        let square_size = GridRenderer::new(&self.settings).render(
            &mut first_page,
            puzzle,
            &grid,
            self.settings.grid_origin,
        );

        let items = build_clue_items(puzzle, &grid);
        let flow = ClueFlowLayout::new(&self.settings);
        let layout = flow.layout(&items, self.footprint(puzzle, square_size));

        let mut layers = vec![first_page];
        layers.extend(
            (1..layout.page_count).map(|_| LayerBuilder::new(self.settings.page_height)),
        );
        flow.draw(&layout, &mut layers);

        let width = Mm::from(Pt(self.settings.page_width));
        let height = Mm::from(Pt(self.settings.page_height));
        let pages: Vec<PdfPage> = layers
            .into_iter()
            .map(|layer| PdfPage::new(width, height, layer.into_ops()))
            .collect();
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warning(s)", warnings.len());
        }
        if bytes.is_empty() {
            return Err(RenderError::PdfGeneration(
                "serializer produced no output".to_string(),
            ));
        }

        if !self.settings.compress {
            return Ok(bytes);
        }
        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}; keeping uncompressed output", e);
                Ok(bytes)
            }
        }
    }
}

//! Crossword grid renderer
//!
//! Draws cells, blocks, bars, highlight decorations and cell numbers. The
//! square size chosen here is handed back to the caller so the clue layout
//! can work out where columns start.

use printpdf::{BuiltinFont, Color, PaintMode};

use crate::config::Settings;
use crate::model::{Highlight, PuzzleRecord, ViewableGrid};
use crate::render::helpers::colors::{BLACK, BLOCK_GRAY, SHADE_GRAY, WHITE};
use crate::render::helpers::layer::LayerBuilder;

/// Fill applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    Block,
    Shaded,
    Open,
}

/// Geometry and decorations for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellShape {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub fill: CellFill,
    /// False for hidden cells, which get no fill or border
    pub framed: bool,
    pub bar_right: bool,
    pub bar_bottom: bool,
    pub circled: bool,
}

/// A cell number and its baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct CellLabel {
    pub number: u32,
    pub x: f32,
    pub y: f32,
}

/// Everything the grid will draw, computed before drawing
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub square_size: f32,
    pub label_font_size: f32,
    pub cells: Vec<CellShape>,
    pub labels: Vec<CellLabel>,
}

/// Square size that keeps the grid inside `extent` on both sides, capped at `max`
pub fn square_size(rows: usize, cols: usize, max: f32, extent: f32) -> f32 {
    max.min(extent / rows as f32).min(extent / cols as f32)
}

/// Renderer for the puzzle grid
pub struct GridRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> GridRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Compute cell geometry and labels for a grid with its top-left corner at `origin`
    pub fn plan(&self, puzzle: &PuzzleRecord, grid: &ViewableGrid, origin: (f32, f32)) -> GridPlan {
        let size = puzzle.size;
        let square = square_size(
            size.rows,
            size.cols,
            self.settings.max_square_size,
            self.settings.grid_extent,
        );
        let (ox, oy) = origin;

        let mut cells = Vec::with_capacity(size.cell_count());
        for row in 0..size.rows {
            for col in 0..size.cols {
                let index = size.index(row, col);
                let highlighted = puzzle.highlighted.contains(&index);

                let fill = if puzzle.is_block(index) {
                    CellFill::Block
                } else if highlighted && puzzle.highlight == Highlight::Shade {
                    CellFill::Shaded
                } else {
                    CellFill::Open
                };

                cells.push(CellShape {
                    index,
                    x: ox + col as f32 * square,
                    y: oy + row as f32 * square,
                    fill,
                    framed: !puzzle.hidden.contains(&index),
                    bar_right: puzzle.v_bars.contains(&index),
                    bar_bottom: puzzle.h_bars.contains(&index),
                    circled: highlighted && puzzle.highlight == Highlight::Circle,
                });
            }
        }

        let labels = grid
            .cell_labels
            .iter()
            .map(|(&index, &number)| {
                let row = index / size.cols;
                let col = index % size.cols;
                CellLabel {
                    number,
                    x: ox + col as f32 * square + square / 24.0,
                    y: oy + row as f32 * square + square / 4.0,
                }
            })
            .collect();

        GridPlan {
            square_size: square,
            label_font_size: square / 3.5,
            cells,
            labels,
        }
    }

    /// Draw the grid and return the square size used
    pub fn render(
        &self,
        layer: &mut LayerBuilder,
        puzzle: &PuzzleRecord,
        grid: &ViewableGrid,
        origin: (f32, f32),
    ) -> f32 {
        let plan = self.plan(puzzle, grid, origin);
        log::debug!(
            "Grid {}x{} at square size {:.2}",
            puzzle.size.rows,
            puzzle.size.cols,
            plan.square_size
        );
        self.draw(layer, &plan);
        plan.square_size
    }

    pub fn draw(&self, layer: &mut LayerBuilder, plan: &GridPlan) {
        let square = plan.square_size;
        let line_width = self.settings.line_width;

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(line_width);

        for cell in &plan.cells {
            let fill = match cell.fill {
                CellFill::Block => BLOCK_GRAY,
                CellFill::Shaded => SHADE_GRAY,
                CellFill::Open => WHITE,
            };
            if cell.framed {
                layer.set_fill_color(Color::Rgb(fill));
                layer.add_rect(cell.x, cell.y, square, square, PaintMode::FillStroke);
            }

            if cell.bar_right {
                layer.set_outline_thickness(self.settings.bar_width);
                layer.add_line(cell.x + square, cell.y, cell.x + square, cell.y + square);
                layer.set_outline_thickness(line_width);
            }
            if cell.bar_bottom {
                layer.set_outline_thickness(self.settings.bar_width);
                layer.add_line(cell.x, cell.y + square, cell.x + square, cell.y + square);
                layer.set_outline_thickness(line_width);
            }

            if cell.circled {
                layer.add_circle(
                    cell.x + square / 2.0,
                    cell.y + square / 2.0,
                    square / 2.0,
                    PaintMode::Stroke,
                );
            }
        }

        layer.set_fill_color(Color::Rgb(BLACK));
        for label in &plan.labels {
            layer.use_text(
                label.number.to_string(),
                plan.label_font_size,
                label.x,
                label.y,
                BuiltinFont::Helvetica,
            );
        }
    }
}

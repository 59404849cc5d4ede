use crate::cli::{Args, PageSize};

use super::defaults::*;

/// Runtime settings for PDF export
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (points)
    pub page_size: PageSize,
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    margin_right_inset: f32,
    margin_bottom_inset: f32,

    // Info header
    pub info_origin: (f32, f32),
    pub title_font_size: f32,
    pub byline_font_size: f32,

    // Grid
    pub grid_origin: (f32, f32),
    pub max_square_size: f32,
    pub grid_extent: f32,
    pub line_width: f32,
    pub bar_width: f32,

    // Clue flow
    pub clue_font_size: f32,
    pub label_width: f32,
    pub clue_width: f32,
    pub column_separator: f32,

    // Document
    pub creator: String,
    pub compress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let page_size = PageSize::default();
        let (page_width, page_height) = page_size.dimensions_pt();
        Self {
            page_size,
            page_width,
            page_height,
            margin_left: MARGIN_LEFT,
            margin_right_inset: MARGIN_RIGHT_INSET,
            margin_bottom_inset: MARGIN_BOTTOM_INSET,

            info_origin: INFO_ORIGIN,
            title_font_size: TITLE_FONT_SIZE,
            byline_font_size: BYLINE_FONT_SIZE,

            grid_origin: GRID_ORIGIN,
            max_square_size: MAX_SQUARE_SIZE,
            grid_extent: GRID_EXTENT,
            line_width: GRID_LINE_WIDTH,
            bar_width: BAR_WIDTH,

            clue_font_size: CLUE_FONT_SIZE,
            label_width: LABEL_WIDTH,
            clue_width: CLUE_WIDTH,
            column_separator: COLUMN_SEPARATOR,

            creator: CREATOR.to_string(),
            compress: true,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            compress: !args.no_compress,
            ..Self::default()
        }
        .with_page_size(args.page_size)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        let (w, h) = page_size.dimensions_pt();
        self.page_size = page_size;
        self.page_width = w;
        self.page_height = h;
        self
    }

    /// Right edge available to clue columns
    pub fn margin_right(&self) -> f32 {
        self.page_width - self.margin_right_inset
    }

    /// Lowest baseline available to clue text
    pub fn margin_bottom(&self) -> f32 {
        self.page_height - self.margin_bottom_inset
    }

    /// Horizontal advance from one clue column to the next
    pub fn column_advance(&self) -> f32 {
        self.label_width + self.clue_width + self.column_separator
    }

    /// Vertical space consumed by one wrapped clue line
    pub fn clue_line_advance(&self) -> f32 {
        self.clue_font_size + CLUE_LINE_GAP
    }
}

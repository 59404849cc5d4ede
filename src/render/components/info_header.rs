use printpdf::{BuiltinFont, Color};

use crate::config::defaults::{BYLINE_OFFSET, PUBLISHED_ON, TITLE_OFFSET};
use crate::config::Settings;
use crate::model::PuzzleRecord;
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::layer::LayerBuilder;

/// Title and byline block above the grid
pub struct InfoHeaderRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> InfoHeaderRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Full byline as printed, including the publication note
    pub fn byline_text(puzzle: &PuzzleRecord) -> String {
        format!("{}{}", puzzle.byline(), PUBLISHED_ON)
    }

    pub fn render(&self, layer: &mut LayerBuilder, puzzle: &PuzzleRecord) {
        let (x, y) = self.settings.info_origin;

        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text(
            puzzle.title.as_str(),
            self.settings.title_font_size,
            x,
            y + TITLE_OFFSET,
            BuiltinFont::Helvetica,
        );
        layer.use_text(
            Self::byline_text(puzzle),
            self.settings.byline_font_size,
            x,
            y + BYLINE_OFFSET,
            BuiltinFont::Helvetica,
        );
    }
}

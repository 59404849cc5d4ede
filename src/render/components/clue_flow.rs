//! Multi-column clue flow
//!
//! Places the ordered clue list into fixed-width columns, moving to the next
//! column when an item would cross the bottom margin and to a new page when
//! the next column would cross the right margin. Placement is computed first
//! (`layout`) and drawn afterwards (`draw`), so page breaks can be inspected
//! without rendering.
//!
//! Section headings look one item ahead: a heading only stays in the current
//! column if its first clue fits there too. A heading with nothing after it
//! is dropped.

use printpdf::{BuiltinFont, Color};

use crate::config::defaults::{
    BELOW_GRID_TOP, GRID_CLEARANCE, LABEL_PADDING, LINE_HEIGHT_FACTOR, RUNNING_TOP,
};
use crate::config::Settings;
use crate::model::ClueFlowItem;
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::{get_helvetica_measurer, TextMeasure};

/// The part of the first page occupied by the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFootprint {
    pub square_size: f32,
    pub rows: usize,
    pub cols: usize,
}

/// An item with its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    /// Index into the item list
    pub index: usize,
    /// Zero-based page number
    pub page: usize,
    /// Left edge of the column
    pub x: f32,
    /// Baseline of the first line
    pub y: f32,
    pub heading: bool,
    pub label: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClueLayout {
    pub page_count: usize,
    pub placed: Vec<PlacedItem>,
}

impl ClueLayout {
    /// Distinct column x positions used on a page, in placement order
    pub fn columns_on_page(&self, page: usize) -> Vec<f32> {
        let mut columns: Vec<f32> = Vec::new();
        for item in self.placed.iter().filter(|p| p.page == page) {
            if columns.last() != Some(&item.x) {
                columns.push(item.x);
            }
        }
        columns
    }
}

pub struct ClueFlowLayout<'a> {
    settings: &'a Settings,
    measurer: &'a dyn TextMeasure,
}

impl<'a> ClueFlowLayout<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_measurer(settings, get_helvetica_measurer())
    }

    pub fn with_measurer(settings: &'a Settings, measurer: &'a dyn TextMeasure) -> Self {
        Self { settings, measurer }
    }

    /// Unlabeled items (notes, spacers) take over the label gutter
    fn item_width(&self, item: &ClueFlowItem) -> f32 {
        if item.has_label() {
            self.settings.clue_width
        } else {
            self.settings.clue_width + self.settings.label_width
        }
    }

    fn wrap(&self, item: &ClueFlowItem) -> Vec<String> {
        self.measurer.split_text_to_size(
            &item.clue,
            self.item_width(item),
            self.settings.clue_font_size,
        )
    }

    fn extent(&self, line_count: usize) -> f32 {
        line_count as f32 * self.settings.clue_line_advance()
    }

    /// Baseline of the first line in a column starting at `x`
    fn column_top(&self, x: f32, added_page: bool, grid: GridFootprint) -> f32 {
        let grid_right = self.settings.margin_left + grid.square_size * grid.cols as f32;
        if added_page || x > grid_right + GRID_CLEARANCE {
            RUNNING_TOP
        } else {
            BELOW_GRID_TOP + grid.square_size * grid.rows as f32
        }
    }

    pub fn layout(&self, items: &[ClueFlowItem], grid: GridFootprint) -> ClueLayout {
        let margin_bottom = self.settings.margin_bottom();
        let margin_right = self.settings.margin_right();

        let mut x = self.settings.margin_left;
        let mut added_page = false;
        let mut page = 0;
        let mut y = self.column_top(x, added_page, grid);
        let mut placed = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let lines = self.wrap(item);
            let adjust = self.extent(lines.len());

            let heading = item.is_heading();
            let mut needed = adjust;
            if heading {
                let Some(next) = items.get(index + 1) else {
                    log::debug!("Dropping trailing {} heading", item.label);
                    continue;
                };
                needed += self.extent(self.wrap(next).len());
            }

            if y + needed > margin_bottom {
                x += self.settings.column_advance();
                if x + self.settings.label_width > margin_right {
                    page += 1;
                    x = self.settings.margin_left;
                    added_page = true;
                }
                y = self.column_top(x, added_page, grid);
            }

            placed.push(PlacedItem {
                index,
                page,
                x,
                y,
                heading,
                label: item.label.clone(),
                lines,
            });
            y += adjust;
        }

        log::debug!(
            "Laid out {} clue items over {} page(s)",
            placed.len(),
            page + 1
        );

        ClueLayout {
            page_count: page + 1,
            placed,
        }
    }

    /// Draw placed items; `pages` must hold one layer per layout page
    pub fn draw(&self, layout: &ClueLayout, pages: &mut [LayerBuilder]) {
        let font_size = self.settings.clue_font_size;
        let label_width = self.settings.label_width;
        let line_pitch = font_size * LINE_HEIGHT_FACTOR;

        for layer in pages.iter_mut() {
            layer.set_fill_color(Color::Rgb(BLACK));
        }

        for item in &layout.placed {
            let Some(layer) = pages.get_mut(item.page) else {
                log::warn!("No page {} for clue item {}", item.page, item.index);
                continue;
            };

            if item.heading {
                layer.use_text(
                    item.label.as_str(),
                    font_size,
                    item.x,
                    item.y,
                    BuiltinFont::HelveticaBold,
                );
                continue;
            }

            if !item.label.is_empty() {
                let label_right = item.x + label_width - LABEL_PADDING;
                let label_x = label_right - self.measurer.measure_width_pt(&item.label, font_size);
                layer.use_text(
                    item.label.as_str(),
                    font_size,
                    label_x,
                    item.y,
                    BuiltinFont::Helvetica,
                );
            }

            let text_x = if item.label.is_empty() {
                item.x
            } else {
                item.x + label_width
            };
            for (i, line) in item.lines.iter().enumerate() {
                layer.use_text(
                    line.as_str(),
                    font_size,
                    text_x,
                    item.y + i as f32 * line_pitch,
                    BuiltinFont::Helvetica,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_clue_items, Direction, GridSize, PuzzleRecord, ViewableGrid};

    const STANDARD: GridFootprint = GridFootprint {
        square_size: 24.0,
        rows: 15,
        cols: 15,
    };

    fn numbered(count: usize) -> Vec<ClueFlowItem> {
        (1..=count)
            .map(|n| ClueFlowItem::new(n.to_string(), "Short clue"))
            .collect()
    }

    #[test]
    fn test_first_column_starts_below_grid() {
        let settings = Settings::default();
        let layout = ClueFlowLayout::new(&settings).layout(&numbered(3), STANDARD);

        assert_eq!(layout.page_count, 1);
        assert_eq!(layout.placed[0].x, 50.0);
        assert_eq!(layout.placed[0].y, 460.0);
        assert_eq!(layout.placed[1].y, 472.0);
        assert_eq!(layout.placed[2].y, 484.0);
    }

    #[test]
    fn test_overflow_adds_column_on_same_page() {
        let settings = Settings::default();
        // 27 single-line items fit between 460 and the A4 bottom margin
        let layout = ClueFlowLayout::new(&settings).layout(&numbered(40), STANDARD);

        assert_eq!(layout.page_count, 1);
        assert_eq!(layout.columns_on_page(0), vec![50.0, 175.0]);
        let second = &layout.placed[27];
        assert_eq!(second.page, 0);
        assert_eq!(second.x, 175.0);
        assert_eq!(second.y, 460.0);
        assert_eq!(layout.placed[26].x, 50.0);
    }

    #[test]
    fn test_columns_beside_grid_start_at_running_top() {
        let settings = Settings::default();
        let layout = ClueFlowLayout::new(&settings).layout(&numbered(27 * 3 + 5), STANDARD);

        assert_eq!(layout.columns_on_page(0), vec![50.0, 175.0, 300.0, 425.0]);
        let beside = layout.placed.iter().find(|p| p.x == 425.0).unwrap();
        assert_eq!(beside.y, 85.0);
    }

    #[test]
    fn test_new_page_when_right_margin_exceeded() {
        let settings = Settings::default();
        // Three columns under the grid, one full-height column beside it
        let first_page = 27 * 3 + 58;
        let layout = ClueFlowLayout::new(&settings).layout(&numbered(first_page + 1), STANDARD);

        assert_eq!(layout.page_count, 2);
        let last = layout.placed.last().unwrap();
        assert_eq!(last.page, 1);
        assert_eq!(last.x, 50.0);
        assert_eq!(last.y, 85.0);
        assert_eq!(layout.placed[first_page - 1].page, 0);
    }

    #[test]
    fn test_heading_is_not_stranded_at_column_bottom() {
        let settings = Settings::default();
        let mut items: Vec<ClueFlowItem> = (0..26).map(|_| ClueFlowItem::spacer()).collect();
        items.push(ClueFlowItem::heading(Direction::Across));
        items.push(ClueFlowItem::new("1", "First clue"));

        let layout = ClueFlowLayout::new(&settings).layout(&items, STANDARD);

        let heading = &layout.placed[26];
        assert!(heading.heading);
        assert_eq!(heading.x, 175.0);
        assert_eq!(heading.y, 460.0);
        let first = &layout.placed[27];
        assert_eq!(first.x, 175.0);
        assert_eq!(first.y, 472.0);
    }

    #[test]
    fn test_plain_item_fills_last_slot() {
        let settings = Settings::default();
        let mut items: Vec<ClueFlowItem> = (0..26).map(|_| ClueFlowItem::spacer()).collect();
        items.push(ClueFlowItem::new("1", "Fits"));

        let layout = ClueFlowLayout::new(&settings).layout(&items, STANDARD);
        assert_eq!(layout.placed[26].x, 50.0);
        assert_eq!(layout.placed[26].y, 460.0 + 26.0 * 12.0);
    }

    #[test]
    fn test_trailing_heading_is_dropped() {
        let settings = Settings::default();
        let items = vec![
            ClueFlowItem::heading(Direction::Across),
            ClueFlowItem::new("1", "Only clue"),
            ClueFlowItem::spacer(),
            ClueFlowItem::heading(Direction::Down),
        ];
        let layout = ClueFlowLayout::new(&settings).layout(&items, STANDARD);

        assert_eq!(layout.placed.len(), 3);
        assert!(layout.placed.iter().all(|p| p.label != "DOWN"));
    }

    #[test]
    fn test_no_across_entries() {
        let settings = Settings::default();
        let mut puzzle = PuzzleRecord::blank("Column", "Tester", GridSize::new(4, 1));
        puzzle.clues.insert((Direction::Down, 1), "Tall".to_string());
        let grid = ViewableGrid::from_puzzle(&puzzle);
        let items = build_clue_items(&puzzle, &grid);
        let footprint = GridFootprint {
            square_size: 24.0,
            rows: 4,
            cols: 1,
        };

        let layout = ClueFlowLayout::new(&settings).layout(&items, footprint);
        let labels: Vec<&str> = layout.placed.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["ACROSS", "", "DOWN", "1"]);
    }

    #[test]
    fn test_empty_clue_consumes_a_line() {
        let settings = Settings::default();
        let items = vec![ClueFlowItem::new("1", ""), ClueFlowItem::new("2", "Next")];
        let layout = ClueFlowLayout::new(&settings).layout(&items, STANDARD);

        assert_eq!(layout.placed[0].lines.len(), 1);
        assert_eq!(layout.placed[1].y, layout.placed[0].y + 12.0);
    }

    #[test]
    fn test_unlabeled_items_use_label_gutter() {
        let settings = Settings::default();
        let layout = ClueFlowLayout::new(&settings);
        let labeled = ClueFlowItem::new("1", "x");
        let note = ClueFlowItem::new("", "x");
        assert_eq!(layout.item_width(&labeled), 94.0);
        assert_eq!(layout.item_width(&note), 113.0);
    }

    #[test]
    fn test_wrapped_clue_advances_by_line_count() {
        let settings = Settings::default();
        let long = "An unusually verbose clue that will certainly need several lines to fit";
        let items = vec![ClueFlowItem::new("1", long), ClueFlowItem::new("2", "Next")];
        let layout = ClueFlowLayout::new(&settings).layout(&items, STANDARD);

        let lines = layout.placed[0].lines.len();
        assert!(lines > 1);
        assert_eq!(layout.placed[1].y, 460.0 + lines as f32 * 12.0);
    }

    /// Every character is 10pt wide regardless of font size
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn measure_width_pt(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn test_custom_measurer_drives_wrapping() {
        let settings = Settings::default();
        let flow = ClueFlowLayout::with_measurer(&settings, &FixedWidth);
        // 94pt holds nine characters per line
        let items = vec![
            ClueFlowItem::new("1", "abcd efgh ijkl"),
            ClueFlowItem::new("2", "x"),
        ];
        let layout = flow.layout(&items, STANDARD);

        assert_eq!(layout.placed[0].lines, vec!["abcd efgh", "ijkl"]);
        assert_eq!(layout.placed[1].y, 460.0 + 24.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let settings = Settings::default();
        let items = numbered(150);
        let flow = ClueFlowLayout::new(&settings);
        assert_eq!(flow.layout(&items, STANDARD), flow.layout(&items, STANDARD));
    }

    #[test]
    fn test_draw_uses_one_layer_per_page() {
        let settings = Settings::default();
        let flow = ClueFlowLayout::new(&settings);
        let layout = flow.layout(&numbered(200), STANDARD);
        assert_eq!(layout.page_count, 2);

        let mut pages: Vec<LayerBuilder> = (0..layout.page_count)
            .map(|_| LayerBuilder::new(settings.page_height))
            .collect();
        flow.draw(&layout, &mut pages);
        assert!(pages.iter().all(|p| !p.ops().is_empty()));
    }
}

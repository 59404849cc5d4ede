//! Layout constants, all in points

/// Left page margin, also the x of the info header and grid
pub const MARGIN_LEFT: f32 = 50.0;

/// Inset of the right margin from the page's right edge
pub const MARGIN_RIGHT_INSET: f32 = 50.0;

/// Inset of the bottom margin from the page's bottom edge
pub const MARGIN_BOTTOM_INSET: f32 = 50.0;

/// Top-left corner of the info header block
pub const INFO_ORIGIN: (f32, f32) = (50.0, 50.0);

/// Baseline offsets of the title and byline below the info origin
pub const TITLE_OFFSET: f32 = 8.0;
pub const BYLINE_OFFSET: f32 = 20.0;

pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const BYLINE_FONT_SIZE: f32 = 9.0;

/// Top-left corner of the grid
pub const GRID_ORIGIN: (f32, f32) = (50.0, 80.0);

/// Largest square size for small grids
pub const MAX_SQUARE_SIZE: f32 = 24.0;

/// Bounding box the grid must fit in, per side
pub const GRID_EXTENT: f32 = 360.0;

/// Normal grid stroke width
pub const GRID_LINE_WIDTH: f32 = 0.5;

/// Bar stroke width (8x the normal stroke)
pub const BAR_WIDTH: f32 = 4.0;

pub const CLUE_FONT_SIZE: f32 = 9.0;

/// Extra vertical space per wrapped clue line
pub const CLUE_LINE_GAP: f32 = 3.0;

/// Line pitch of multi-line clue text, as a multiple of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Label gutter width
pub const LABEL_WIDTH: f32 = 19.0;

/// Distance from the right edge of the label gutter to the label's right edge
pub const LABEL_PADDING: f32 = 5.0;

/// Clue text column width
pub const CLUE_WIDTH: f32 = 94.0;

/// Gap between clue columns
pub const COLUMN_SEPARATOR: f32 = 12.0;

/// Column top under the grid, before adding the grid height
pub const BELOW_GRID_TOP: f32 = 100.0;

/// Column top on pages without a grid and beside the grid
pub const RUNNING_TOP: f32 = 85.0;

/// Horizontal clearance past the grid's right edge before a column counts as beside it
pub const GRID_CLEARANCE: f32 = 10.0;

/// PDF creator metadata
pub const CREATOR: &str = "crosshare.org";

/// Appended to the byline
pub const PUBLISHED_ON: &str = " - Published on crosshare.org";

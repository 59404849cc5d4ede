use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Cell value marking a block square
pub const BLOCK: &str = ".";

/// Entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Section heading used in the clue list
    pub fn heading(&self) -> &'static str {
        match self {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// How highlighted cells are decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Light gray fill
    Shade,
    /// Inscribed circle outline
    #[default]
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major cell index
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Clue lookup key: direction plus entry number
pub type ClueKey = (Direction, u32);

/// A finished, validated puzzle ready for export.
///
/// Built by `parser::puzzle_from_db`; renderers only read it.
#[derive(Debug, Clone)]
pub struct PuzzleRecord {
    pub title: String,
    pub author_name: String,
    pub guest_constructor: Option<String>,
    pub size: GridSize,
    pub grid: Vec<String>,
    pub highlighted: HashSet<usize>,
    pub highlight: Highlight,
    pub hidden: HashSet<usize>,
    pub v_bars: HashSet<usize>,
    pub h_bars: HashSet<usize>,
    pub clues: BTreeMap<ClueKey, String>,
    pub constructor_notes: Option<String>,
}

impl PuzzleRecord {
    /// An open grid of the given size with no decorations or clues
    pub fn blank(title: impl Into<String>, author_name: impl Into<String>, size: GridSize) -> Self {
        Self {
            title: title.into(),
            author_name: author_name.into(),
            guest_constructor: None,
            size,
            grid: vec![" ".to_string(); size.cell_count()],
            highlighted: HashSet::new(),
            highlight: Highlight::default(),
            hidden: HashSet::new(),
            v_bars: HashSet::new(),
            h_bars: HashSet::new(),
            clues: BTreeMap::new(),
            constructor_notes: None,
        }
    }

    pub fn is_block(&self, index: usize) -> bool {
        self.grid.get(index).map(|c| c == BLOCK).unwrap_or(false)
    }

    /// Text for a clue, empty when the puzzle has none for that entry
    pub fn clue_text(&self, direction: Direction, number: u32) -> &str {
        self.clues
            .get(&(direction, number))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Author line shown under the title
    pub fn byline(&self) -> String {
        match self.guest_constructor.as_deref() {
            Some(guest) if !guest.is_empty() => {
                format!("By {} - Published by {}", guest, self.author_name)
            }
            _ => format!("By {}", self.author_name),
        }
    }
}

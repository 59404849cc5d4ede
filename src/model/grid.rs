//! Derived grid view: cell numbering and entries
//!
//! Rebuilt from a `PuzzleRecord` on every export, never stored.

use std::collections::BTreeMap;

use super::puzzle::{Direction, PuzzleRecord};

/// A maximal run of open cells in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub direction: Direction,
    pub label_number: u32,
    /// Cell indices in reading order
    pub cells: Vec<usize>,
}

/// An entry paired with its clue text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CluedEntry {
    pub direction: Direction,
    pub label_number: u32,
    pub clue_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewableGrid {
    /// Cell index -> label number, for cells that start an entry
    pub cell_labels: BTreeMap<usize, u32>,
    /// Entries in scan order (Across before Down for a shared start cell)
    pub entries: Vec<Entry>,
}

impl ViewableGrid {
    /// Number the grid and collect its entries.
    ///
    /// Hidden cells break runs exactly like blocks. A vertical bar on a cell
    /// ends the Across run there; a horizontal bar ends the Down run.
    pub fn from_puzzle(puzzle: &PuzzleRecord) -> Self {
        let rows = puzzle.size.rows;
        let cols = puzzle.size.cols;
        let open = |i: usize| !puzzle.is_block(i) && !puzzle.hidden.contains(&i);

        let mut grid = ViewableGrid::default();
        let mut next_label = 1;

        for row in 0..rows {
            for col in 0..cols {
                let i = puzzle.size.index(row, col);
                if !open(i) {
                    continue;
                }

                let starts_across = (col == 0 || !open(i - 1) || puzzle.v_bars.contains(&(i - 1)))
                    && col + 1 < cols
                    && open(i + 1)
                    && !puzzle.v_bars.contains(&i);
                let starts_down = (row == 0
                    || !open(i - cols)
                    || puzzle.h_bars.contains(&(i - cols)))
                    && row + 1 < rows
                    && open(i + cols)
                    && !puzzle.h_bars.contains(&i);

                if !starts_across && !starts_down {
                    continue;
                }

                let label = next_label;
                next_label += 1;
                grid.cell_labels.insert(i, label);

                if starts_across {
                    let mut cells = vec![i];
                    let mut c = col;
                    while c + 1 < cols {
                        let cur = puzzle.size.index(row, c);
                        if puzzle.v_bars.contains(&cur) || !open(cur + 1) {
                            break;
                        }
                        c += 1;
                        cells.push(cur + 1);
                    }
                    grid.entries.push(Entry {
                        direction: Direction::Across,
                        label_number: label,
                        cells,
                    });
                }

                if starts_down {
                    let mut cells = vec![i];
                    let mut r = row;
                    while r + 1 < rows {
                        let cur = puzzle.size.index(r, col);
                        if puzzle.h_bars.contains(&cur) || !open(cur + cols) {
                            break;
                        }
                        r += 1;
                        cells.push(cur + cols);
                    }
                    grid.entries.push(Entry {
                        direction: Direction::Down,
                        label_number: label,
                        cells,
                    });
                }
            }
        }

        grid
    }

    /// Attach clue text from the puzzle to every entry of one direction, in label order
    pub fn clued_entries(&self, puzzle: &PuzzleRecord, direction: Direction) -> Vec<CluedEntry> {
        let mut clued: Vec<CluedEntry> = self
            .entries
            .iter()
            .filter(|e| e.direction == direction)
            .map(|e| CluedEntry {
                direction: e.direction,
                label_number: e.label_number,
                clue_text: puzzle.clue_text(e.direction, e.label_number).to_string(),
            })
            .collect();
        clued.sort_by_key(|e| e.label_number);
        clued
    }

    pub fn label_for(&self, index: usize) -> Option<u32> {
        self.cell_labels.get(&index).copied()
    }
}

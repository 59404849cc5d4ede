//! Stored puzzle records and their conversion into `PuzzleRecord`

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::model::{Direction, GridSize, Highlight, PuzzleRecord};

/// A puzzle as held in the document store, using Crosshare's short field names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DbPuzzle {
    /// Title
    pub t: String,
    /// Author display name
    pub n: String,
    /// Author id
    #[serde(default)]
    pub a: String,
    /// Guest constructor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc: Option<String>,
    /// Rows
    pub h: usize,
    /// Columns
    pub w: usize,
    /// Cell values, row-major
    pub g: Vec<String>,
    /// Across clue texts and numbers (parallel arrays)
    #[serde(default)]
    pub ac: Vec<String>,
    #[serde(default)]
    pub an: Vec<u32>,
    /// Down clue texts and numbers (parallel arrays)
    #[serde(default)]
    pub dc: Vec<String>,
    #[serde(default)]
    pub dn: Vec<u32>,
    /// Highlighted cells
    #[serde(default)]
    pub hs: Vec<usize>,
    /// Shade highlighted cells instead of circling them
    #[serde(default)]
    pub s: bool,
    #[serde(default)]
    pub vb: Vec<usize>,
    #[serde(default)]
    pub hb: Vec<usize>,
    #[serde(default)]
    pub hdn: Vec<usize>,
    /// Constructor notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
}

/// Largest row or column count accepted from the store
pub const MAX_GRID_DIMENSION: usize = 100;

/// Validate a stored record and shape it for export
pub fn puzzle_from_db(db: &DbPuzzle) -> Result<PuzzleRecord, PuzzleError> {
    let in_range = |n: usize| (1..=MAX_GRID_DIMENSION).contains(&n);
    let cell_count = db
        .h
        .checked_mul(db.w)
        .filter(|_| in_range(db.h) && in_range(db.w))
        .ok_or(PuzzleError::InvalidSize {
            rows: db.h,
            cols: db.w,
        })?;
    let size = GridSize::new(db.h, db.w);
    if db.g.len() != cell_count {
        return Err(PuzzleError::GridLength {
            expected: cell_count,
            actual: db.g.len(),
        });
    }

    let mut clues = BTreeMap::new();
    collect_clues(&mut clues, Direction::Across, &db.ac, &db.an)?;
    collect_clues(&mut clues, Direction::Down, &db.dc, &db.dn)?;

    Ok(PuzzleRecord {
        title: db.t.clone(),
        author_name: db.n.clone(),
        guest_constructor: db.gc.clone().filter(|g| !g.is_empty()),
        size,
        grid: db.g.clone(),
        highlighted: cell_set("hs", &db.hs, size)?,
        highlight: if db.s {
            Highlight::Shade
        } else {
            Highlight::Circle
        },
        hidden: cell_set("hdn", &db.hdn, size)?,
        v_bars: cell_set("vb", &db.vb, size)?,
        h_bars: cell_set("hb", &db.hb, size)?,
        clues,
        constructor_notes: db.cn.clone().filter(|n| !n.is_empty()),
    })
}

fn collect_clues(
    clues: &mut BTreeMap<(Direction, u32), String>,
    direction: Direction,
    texts: &[String],
    numbers: &[u32],
) -> Result<(), PuzzleError> {
    if texts.len() != numbers.len() {
        return Err(PuzzleError::ClueCount {
            direction: direction.heading(),
            clues: texts.len(),
            numbers: numbers.len(),
        });
    }
    for (text, number) in texts.iter().zip(numbers) {
        clues.insert((direction, *number), text.clone());
    }
    Ok(())
}

fn cell_set(
    field: &'static str,
    cells: &[usize],
    size: GridSize,
) -> Result<HashSet<usize>, PuzzleError> {
    if let Some(&index) = cells.iter().find(|&&i| i >= size.cell_count()) {
        return Err(PuzzleError::CellOutOfRange { field, index });
    }
    Ok(cells.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DbPuzzle {
        DbPuzzle {
            t: "Mini".to_string(),
            n: "Alice".to_string(),
            h: 2,
            w: 3,
            g: vec!["A", "B", "C", "D", ".", "F"]
                .into_iter()
                .map(String::from)
                .collect(),
            ac: vec!["Letters".to_string()],
            an: vec![1],
            dc: vec!["Pair".to_string(), "Other pair".to_string()],
            dn: vec![1, 2],
            hs: vec![0],
            s: true,
            ..DbPuzzle::default()
        }
    }

    #[test]
    fn test_shapes_record() {
        let puzzle = puzzle_from_db(&sample()).unwrap();
        assert_eq!(puzzle.title, "Mini");
        assert_eq!(puzzle.size, GridSize::new(2, 3));
        assert_eq!(puzzle.highlight, Highlight::Shade);
        assert!(puzzle.highlighted.contains(&0));
        assert_eq!(puzzle.clue_text(Direction::Down, 2), "Other pair");
        assert!(puzzle.guest_constructor.is_none());
    }

    #[test]
    fn test_deserializes_short_keys() {
        let json = r#"{"t":"Json","n":"Bob","h":1,"w":2,"g":["A","B"],
            "ac":["Two"],"an":[1],"gc":"Carol","cn":"Notes here"}"#;
        let db: DbPuzzle = serde_json::from_str(json).unwrap();
        let puzzle = puzzle_from_db(&db).unwrap();
        assert_eq!(puzzle.guest_constructor.as_deref(), Some("Carol"));
        assert_eq!(puzzle.constructor_notes.as_deref(), Some("Notes here"));
        assert_eq!(puzzle.highlight, Highlight::Circle);
        assert_eq!(puzzle.clue_text(Direction::Across, 1), "Two");
    }

    #[test]
    fn test_rejects_wrong_grid_length() {
        let mut db = sample();
        db.g.pop();
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::GridLength {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_rejects_mismatched_clue_arrays() {
        let mut db = sample();
        db.dn.pop();
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::ClueCount { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_bar() {
        let mut db = sample();
        db.vb = vec![6];
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::CellOutOfRange {
                field: "vb",
                index: 6
            })
        ));
    }

    #[test]
    fn test_rejects_zero_size() {
        let mut db = sample();
        db.h = 0;
        db.g.clear();
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_size() {
        let mut db = sample();
        db.h = usize::MAX;
        db.w = 2;
        db.g.clear();
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut db = sample();
        db.h = MAX_GRID_DIMENSION + 1;
        db.w = 1;
        db.g = vec!["A".to_string(); MAX_GRID_DIMENSION + 1];
        db.dn.clear();
        db.dc.clear();
        assert!(matches!(
            puzzle_from_db(&db),
            Err(PuzzleError::InvalidSize { .. })
        ));

        db.h = MAX_GRID_DIMENSION;
        db.g.pop();
        assert!(puzzle_from_db(&db).is_ok());
    }
}

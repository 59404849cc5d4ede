pub mod clue_db;
pub mod db;

pub use clue_db::{normalize_word, parse_clue_database, parse_clue_line, ClueRecord};
pub use db::{puzzle_from_db, DbPuzzle};

//! Clue history lookup over a tab-separated clue database

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ClueDbError;
use crate::parser::{normalize_word, parse_clue_database, ClueRecord};

/// In-memory clue database keyed by normalized answer word
#[derive(Debug, Default)]
pub struct ClueDatabase {
    by_word: HashMap<String, Vec<ClueRecord>>,
}

impl ClueDatabase {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ClueDbError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ClueDbError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let db = Self::parse(&content)?;
        log::info!(
            "Loaded {} answer words from {}",
            db.word_count(),
            path.display()
        );
        Ok(db)
    }

    pub fn parse(content: &str) -> Result<Self, ClueDbError> {
        let mut by_word: HashMap<String, Vec<ClueRecord>> = HashMap::new();
        for record in parse_clue_database(content)? {
            by_word.entry(record.word.clone()).or_default().push(record);
        }
        Ok(Self { by_word })
    }

    pub fn word_count(&self) -> usize {
        self.by_word.len()
    }

    /// Clues recorded for `word`, most used first
    pub fn clues_for(&self, word: &str) -> Vec<ClueRecord> {
        let key = normalize_word(word);
        let mut clues = self.by_word.get(&key).cloned().unwrap_or_default();
        clues.sort_by(by_usage);
        log::debug!("{} clue(s) for {}", clues.len(), key);
        clues
    }
}

fn by_usage(a: &ClueRecord, b: &ClueRecord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.clue.cmp(&b.clue))
}

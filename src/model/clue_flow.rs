use super::grid::ViewableGrid;
use super::puzzle::{Direction, PuzzleRecord};

/// One item in the flowing clue list.
///
/// Numbered clues, section headings, spacer lines and the constructor note
/// all share this shape; the layout treats them uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueFlowItem {
    pub label: String,
    pub clue: String,
}

impl ClueFlowItem {
    pub fn new(label: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            clue: clue.into(),
        }
    }

    pub fn spacer() -> Self {
        Self::new("", "")
    }

    pub fn heading(direction: Direction) -> Self {
        Self::new(direction.heading(), "")
    }

    /// True for the "ACROSS"/"DOWN" section headings
    pub fn is_heading(&self) -> bool {
        self.label.eq_ignore_ascii_case("across") || self.label.eq_ignore_ascii_case("down")
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Build the full ordered item list for a puzzle:
/// constructor note, Across heading and clues, Down heading and clues.
pub fn build_clue_items(puzzle: &PuzzleRecord, grid: &ViewableGrid) -> Vec<ClueFlowItem> {
    let mut items = Vec::new();

    if let Some(notes) = puzzle.constructor_notes.as_deref() {
        items.push(ClueFlowItem::new("", notes));
        items.push(ClueFlowItem::spacer());
    }

    items.push(ClueFlowItem::heading(Direction::Across));
    items.extend(
        grid.clued_entries(puzzle, Direction::Across)
            .into_iter()
            .map(|e| ClueFlowItem::new(e.label_number.to_string(), e.clue_text)),
    );

    items.push(ClueFlowItem::spacer());
    items.push(ClueFlowItem::heading(Direction::Down));
    items.extend(
        grid.clued_entries(puzzle, Direction::Down)
            .into_iter()
            .map(|e| ClueFlowItem::new(e.label_number.to_string(), e.clue_text)),
    );

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::puzzle::GridSize;

    #[test]
    fn test_item_order() {
        let mut puzzle = PuzzleRecord::blank("Mini", "Tester", GridSize::new(2, 2));
        puzzle.constructor_notes = Some("Have fun".to_string());
        puzzle
            .clues
            .insert((Direction::Down, 2), "Right side".to_string());
        let grid = ViewableGrid::from_puzzle(&puzzle);
        let items = build_clue_items(&puzzle, &grid);

        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["", "", "ACROSS", "1", "3", "", "DOWN", "1", "2"]);
        assert_eq!(items[0].clue, "Have fun");
        assert_eq!(items[8].clue, "Right side");
    }

    #[test]
    fn test_no_across_entries_keeps_heading() {
        let mut puzzle = PuzzleRecord::blank("Column", "Tester", GridSize::new(3, 1));
        puzzle.clues.insert((Direction::Down, 1), "Tall".to_string());
        let grid = ViewableGrid::from_puzzle(&puzzle);
        let items = build_clue_items(&puzzle, &grid);

        assert_eq!(items[0], ClueFlowItem::heading(Direction::Across));
        assert_eq!(items[1], ClueFlowItem::spacer());
        assert_eq!(items[2], ClueFlowItem::heading(Direction::Down));
        assert_eq!(items[3], ClueFlowItem::new("1", "Tall"));
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_heading_detection() {
        assert!(ClueFlowItem::heading(Direction::Across).is_heading());
        assert!(ClueFlowItem::new("down", "").is_heading());
        assert!(!ClueFlowItem::new("12", "Across the river").is_heading());
        assert!(!ClueFlowItem::spacer().is_heading());
    }
}

use crate::domain::card::{normalize_monetary_value, Card, CardUpdate, NewCard, Priority};
use crate::error::{BoardError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A workflow column owning an ordered list of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub color: String,
    pub order: u32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// The whole board document as persisted
///
/// `card_id_seq` is the highest card id ever assigned. New ids are taken
/// above both it and the highest id currently on the board, so deleting a
/// card never frees its id for reuse. Documents written before the field
/// existed deserialize with 0 and fall back to plain max-plus-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub card_id_seq: u64,
}

impl Board {
    /// Looks up a column by id
    pub fn column(&self, id: u64) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    /// Looks up a card anywhere on the board
    pub fn find_card(&self, card_id: u64) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .find(|card| card.id == card_id)
    }

    /// Locates a card as (column index, card index)
    fn locate_card(&self, card_id: u64) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col_idx, col)| {
            col.cards
                .iter()
                .position(|card| card.id == card_id)
                .map(|card_idx| (col_idx, card_idx))
        })
    }

    fn next_card_id(&self) -> u64 {
        let max_existing = self
            .columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .map(|card| card.id)
            .max()
            .unwrap_or(0);
        self.card_id_seq.max(max_existing) + 1
    }

    /// Creates a card at the end of the target column
    pub fn create_card(&mut self, draft: NewCard) -> Result<Card> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::InvalidInput(
                "card title must not be empty".to_string(),
            ));
        }

        let id = self.next_card_id();
        let column = self
            .columns
            .iter_mut()
            .find(|col| col.id == draft.column_id)
            .ok_or(BoardError::ColumnNotFound(draft.column_id))?;

        let card = Card {
            id,
            title: draft.title,
            description: draft.description,
            client_name: draft.client_name,
            due_date: draft.due_date,
            owner_name: draft.owner_name,
            priority: draft.priority,
            labels: draft.labels,
            comment_count: 0,
            attachment_count: 0,
            monetary_value: normalize_monetary_value(draft.monetary_value),
            order: (column.cards.len() + 1) as u32,
        };

        column.cards.push(card.clone());
        self.card_id_seq = id;
        Ok(card)
    }

    /// Moves a card to the end of the target column
    ///
    /// Moving a card to the column it is already in re-appends it at the
    /// tail; membership is unchanged but its `order` becomes the last
    /// position.
    pub fn move_card(&mut self, card_id: u64, target_column_id: u64) -> Result<Card> {
        let (source_idx, card_idx) = self
            .locate_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;
        let target_idx = self
            .columns
            .iter()
            .position(|col| col.id == target_column_id)
            .ok_or(BoardError::ColumnNotFound(target_column_id))?;

        let mut card = self.columns[source_idx].cards.remove(card_idx);
        card.order = (self.columns[target_idx].cards.len() + 1) as u32;
        self.columns[target_idx].cards.push(card.clone());
        Ok(card)
    }

    /// Overwrites the updatable fields of a card
    ///
    /// `id`, `order`, `comment_count`, `attachment_count` and column
    /// membership stay as they are.
    pub fn update_card(&mut self, card_id: u64, update: CardUpdate) -> Result<Card> {
        let (col_idx, card_idx) = self
            .locate_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;

        let card = &mut self.columns[col_idx].cards[card_idx];
        card.title = update.title;
        card.description = update.description;
        card.client_name = update.client_name;
        card.due_date = update.due_date;
        card.owner_name = update.owner_name;
        card.priority = update.priority;
        card.labels = update.labels;
        card.monetary_value = normalize_monetary_value(update.monetary_value);
        Ok(card.clone())
    }

    /// Removes a card from whichever column holds it
    pub fn remove_card(&mut self, card_id: u64) -> Result<()> {
        let (col_idx, card_idx) = self
            .locate_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;
        self.columns[col_idx].cards.remove(card_idx);
        Ok(())
    }

    /// The fixed board materialized on first use
    pub fn seed() -> Self {
        Self {
            columns: vec![
                Column {
                    id: 1,
                    title: "Backlog".to_string(),
                    color: "bg-gray-500".to_string(),
                    order: 1,
                    cards: vec![
                        seed_card(
                            1,
                            1,
                            "Portal Redesign",
                            "Modernize the corporate portal interface",
                            "Tech Corp",
                            NaiveDate::from_ymd_opt(2026, 3, 15),
                            "Ana Silva",
                            Priority::Medium,
                            &["UI/UX", "Web"],
                            3,
                            2,
                            25000.0,
                        ),
                        seed_card(
                            2,
                            2,
                            "Payment API Integration",
                            "Integrate the payment gateway",
                            "E-commerce Plus",
                            NaiveDate::from_ymd_opt(2026, 2, 20),
                            "Carlos Santos",
                            Priority::High,
                            &["Backend", "API"],
                            1,
                            0,
                            15000.0,
                        ),
                    ],
                },
                Column {
                    id: 2,
                    title: "To Do".to_string(),
                    color: "bg-blue-500".to_string(),
                    order: 2,
                    cards: vec![
                        seed_card(
                            3,
                            1,
                            "iOS Mobile App",
                            "Build the iOS version of the app",
                            "StartupX",
                            NaiveDate::from_ymd_opt(2026, 2, 28),
                            "Maria Costa",
                            Priority::High,
                            &["Mobile", "iOS"],
                            5,
                            3,
                            45000.0,
                        ),
                        seed_card(
                            4,
                            2,
                            "Analytics Dashboard",
                            "Build the metrics dashboard",
                            "Data Corp",
                            NaiveDate::from_ymd_opt(2026, 3, 10),
                            "Joao Silva",
                            Priority::Medium,
                            &["Frontend", "Analytics"],
                            2,
                            1,
                            18000.0,
                        ),
                    ],
                },
                Column {
                    id: 3,
                    title: "In Progress".to_string(),
                    color: "bg-yellow-500".to_string(),
                    order: 3,
                    cards: vec![
                        seed_card(
                            5,
                            1,
                            "ERP System",
                            "Financial management module",
                            "ABC Industries",
                            NaiveDate::from_ymd_opt(2026, 2, 25),
                            "Pedro Lima",
                            Priority::High,
                            &["ERP", "Backend"],
                            8,
                            5,
                            75000.0,
                        ),
                        seed_card(
                            6,
                            2,
                            "Landing Page",
                            "New institutional landing page",
                            "Marketing Pro",
                            NaiveDate::from_ymd_opt(2026, 2, 18),
                            "Ana Silva",
                            Priority::Medium,
                            &["Frontend", "Marketing"],
                            4,
                            2,
                            8000.0,
                        ),
                    ],
                },
                Column {
                    id: 4,
                    title: "In Review".to_string(),
                    color: "bg-purple-500".to_string(),
                    order: 4,
                    cards: vec![seed_card(
                        7,
                        1,
                        "Reporting Module",
                        "Report generation system",
                        "Tech Corp",
                        NaiveDate::from_ymd_opt(2026, 2, 15),
                        "Carlos Santos",
                        Priority::High,
                        &["Backend", "Reports"],
                        6,
                        4,
                        22000.0,
                    )],
                },
                Column {
                    id: 5,
                    title: "Done".to_string(),
                    color: "bg-green-500".to_string(),
                    order: 5,
                    cards: vec![seed_card(
                        8,
                        1,
                        "Corporate Website",
                        "Responsive corporate site",
                        "XYZ Company",
                        NaiveDate::from_ymd_opt(2026, 1, 30),
                        "Maria Costa",
                        Priority::High,
                        &["Web", "Frontend"],
                        12,
                        7,
                        32000.0,
                    )],
                },
            ],
            card_id_seq: 8,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_card(
    id: u64,
    order: u32,
    title: &str,
    description: &str,
    client_name: &str,
    due_date: Option<NaiveDate>,
    owner_name: &str,
    priority: Priority,
    labels: &[&str],
    comment_count: u32,
    attachment_count: u32,
    monetary_value: f64,
) -> Card {
    Card {
        id,
        title: title.to_string(),
        description: description.to_string(),
        client_name: client_name.to_string(),
        due_date,
        owner_name: owner_name.to_string(),
        priority,
        labels: labels.iter().map(|label| label.to_string()).collect(),
        comment_count,
        attachment_count,
        monetary_value,
        order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_layout() {
        let board = Board::seed();

        assert_eq!(board.columns.len(), 5);
        assert_eq!(board.card_id_seq, 8);

        let ids: Vec<u64> = board.columns.iter().map(|col| col.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let card_counts: Vec<usize> = board.columns.iter().map(|col| col.cards.len()).collect();
        assert_eq!(card_counts, vec![2, 2, 2, 1, 1]);

        assert_eq!(board.columns[0].title, "Backlog");
        assert_eq!(board.columns[1].title, "To Do");

        // Card orders within each column ascend from 1
        for col in &board.columns {
            for (idx, card) in col.cards.iter().enumerate() {
                assert_eq!(card.order as usize, idx + 1);
            }
        }
    }

    #[test]
    fn test_create_card_assigns_next_id_and_order() {
        let mut board = Board::seed();

        let card = board.create_card(NewCard::new(1, "New Task")).unwrap();

        assert_eq!(card.id, 9);
        assert_eq!(card.order, 3);
        assert_eq!(board.columns[0].cards.len(), 3);
        assert_eq!(board.card_id_seq, 9);
    }

    #[test]
    fn test_create_card_applies_defaults() {
        let mut board = Board::seed();

        let card = board.create_card(NewCard::new(2, "Minimal")).unwrap();

        assert_eq!(card.description, "");
        assert_eq!(card.client_name, "");
        assert!(card.due_date.is_none());
        assert_eq!(card.priority, Priority::Medium);
        assert!(card.labels.is_empty());
        assert_eq!(card.comment_count, 0);
        assert_eq!(card.attachment_count, 0);
        assert_eq!(card.monetary_value, 0.0);
    }

    #[test]
    fn test_create_card_normalizes_negative_value() {
        let mut board = Board::seed();

        let mut draft = NewCard::new(1, "Priced");
        draft.monetary_value = -500.0;
        let card = board.create_card(draft).unwrap();

        assert_eq!(card.monetary_value, 0.0);
    }

    #[test]
    fn test_create_card_empty_title_rejected() {
        let mut board = Board::seed();
        let before = board.clone();

        let err = board.create_card(NewCard::new(1, "   ")).unwrap_err();

        assert!(matches!(err, BoardError::InvalidInput(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_create_card_unknown_column() {
        let mut board = Board::seed();
        let before = board.clone();

        let err = board.create_card(NewCard::new(99, "Orphan")).unwrap_err();

        assert!(matches!(err, BoardError::ColumnNotFound(99)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_card_between_columns() {
        let mut board = Board::seed();
        let source_len = board.columns[1].cards.len();
        let target_len = board.columns[2].cards.len();

        let card = board.move_card(3, 3).unwrap();

        assert_eq!(board.columns[1].cards.len(), source_len - 1);
        assert_eq!(board.columns[2].cards.len(), target_len + 1);
        assert_eq!(card.order as usize, target_len + 1);
        assert_eq!(board.columns[2].cards.last().map(|c| c.id), Some(3));
        assert!(board.columns[1].cards.iter().all(|c| c.id != 3));
    }

    #[test]
    fn test_move_card_to_current_column_reappends() {
        let mut board = Board::seed();
        let original = board.find_card(1).cloned().unwrap();

        let moved = board.move_card(1, 1).unwrap();

        // Card moved to the tail of its own column; only `order` changed
        assert_eq!(board.columns[0].cards.len(), 2);
        assert_eq!(board.columns[0].cards.last().map(|c| c.id), Some(1));
        assert_eq!(moved.order, 2);
        assert_eq!(moved.title, original.title);
        assert_eq!(moved.monetary_value, original.monetary_value);
        assert_eq!(moved.comment_count, original.comment_count);
    }

    #[test]
    fn test_move_card_unknown_card() {
        let mut board = Board::seed();
        let before = board.clone();

        let err = board.move_card(42, 1).unwrap_err();

        assert!(matches!(err, BoardError::CardNotFound(42)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_card_unknown_target_column() {
        let mut board = Board::seed();
        let before = board.clone();

        let err = board.move_card(1, 99).unwrap_err();

        assert!(matches!(err, BoardError::ColumnNotFound(99)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_card_missing_card_takes_precedence() {
        let mut board = Board::seed();

        let err = board.move_card(42, 99).unwrap_err();

        assert!(matches!(err, BoardError::CardNotFound(42)));
    }

    #[test]
    fn test_update_card_overwrites_fields() {
        let mut board = Board::seed();

        let update = CardUpdate {
            title: "Rewritten".to_string(),
            description: "New description".to_string(),
            client_name: "New Client".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            owner_name: "New Owner".to_string(),
            priority: Priority::Low,
            labels: vec!["Revised".to_string()],
            monetary_value: 1234.5,
        };
        let card = board.update_card(5, update).unwrap();

        assert_eq!(card.title, "Rewritten");
        assert_eq!(card.priority, Priority::Low);
        assert_eq!(card.monetary_value, 1234.5);
        assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2026, 6, 1));
    }

    #[test]
    fn test_update_card_preserves_identity_fields() {
        let mut board = Board::seed();
        let original = board.find_card(5).cloned().unwrap();

        let card = board.update_card(5, CardUpdate::default()).unwrap();

        assert_eq!(card.id, original.id);
        assert_eq!(card.order, original.order);
        assert_eq!(card.comment_count, original.comment_count);
        assert_eq!(card.attachment_count, original.attachment_count);
        // Still in the same column
        assert!(board.columns[2].cards.iter().any(|c| c.id == 5));
    }

    #[test]
    fn test_update_card_unknown_card() {
        let mut board = Board::seed();

        let err = board.update_card(42, CardUpdate::default()).unwrap_err();

        assert!(matches!(err, BoardError::CardNotFound(42)));
    }

    #[test]
    fn test_remove_card() {
        let mut board = Board::seed();

        board.remove_card(7).unwrap();

        assert!(board.columns[3].cards.is_empty());
        assert!(board.find_card(7).is_none());
        assert!(matches!(
            board.remove_card(7).unwrap_err(),
            BoardError::CardNotFound(7)
        ));
    }

    #[test]
    fn test_card_id_never_reused_after_delete() {
        let mut board = Board::seed();

        // Delete the card holding the highest id, then create a new one
        board.remove_card(8).unwrap();
        let card = board.create_card(NewCard::new(1, "Fresh")).unwrap();

        assert_eq!(card.id, 9);
    }

    #[test]
    fn test_legacy_document_without_id_seq() {
        let json = r#"{
            "columns": [
                {"id": 1, "title": "Only", "color": "", "order": 1, "cards": [
                    {"id": 4, "title": "A", "order": 1}
                ]}
            ]
        }"#;
        let mut board: Board = serde_json::from_str(json).unwrap();

        assert_eq!(board.card_id_seq, 0);
        let card = board.create_card(NewCard::new(1, "Next")).unwrap();
        assert_eq!(card.id, 5);
    }

    #[test]
    fn test_empty_board_starts_ids_at_one() {
        let mut board = Board {
            columns: vec![Column {
                id: 1,
                title: "Empty".to_string(),
                color: String::new(),
                order: 1,
                cards: Vec::new(),
            }],
            card_id_seq: 0,
        };

        let card = board.create_card(NewCard::new(1, "First")).unwrap();

        assert_eq!(card.id, 1);
        assert_eq!(card.order, 1);
    }

    #[test]
    fn test_document_round_trip() {
        let board = Board::seed();

        let json = serde_json::to_string_pretty(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(back, board);
    }
}

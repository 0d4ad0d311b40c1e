use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub attachment_count: u32,
    #[serde(default)]
    pub monetary_value: f64,
    pub order: u32,
}

/// Fields supplied when creating a card
#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub column_id: u64,
    pub title: String,
    pub description: String,
    pub client_name: String,
    pub due_date: Option<NaiveDate>,
    pub owner_name: String,
    pub priority: Priority,
    pub labels: Vec<String>,
    pub monetary_value: f64,
}

impl NewCard {
    /// Creates a draft with the required fields; everything else defaults
    pub fn new(column_id: u64, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Fields supplied when updating a card
///
/// Identity and bookkeeping fields (`id`, `order`, `comment_count`,
/// `attachment_count`) are not part of the update surface.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: String,
    pub description: String,
    pub client_name: String,
    pub due_date: Option<NaiveDate>,
    pub owner_name: String,
    pub priority: Priority,
    pub labels: Vec<String>,
    pub monetary_value: f64,
}

/// Clamps a monetary value to the valid range.
///
/// Anything that is not a finite non-negative number is stored as 0.
pub(crate) fn normalize_monetary_value(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

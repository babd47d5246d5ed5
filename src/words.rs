// 🗣️ Word Entries - the vocabulary records and how the list is browsed
// Filtering, sorting, and duplicate detection over in-memory entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// WORD ENTRY
// ============================================================================

/// One word the child has said, as read from the word-entry source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: i64,

    pub word: String,

    /// When the word was recorded (naive UTC). None when the stored value
    /// could not be parsed; such entries are skipped by monthly aggregation.
    pub date_added: Option<NaiveDateTime>,

    pub user_id: i64,

    /// Display name of the family member who added the word
    pub added_by: String,

    pub category_id: Option<i64>,

    /// Category name, if the word was categorised
    pub category: Option<String>,
}

// ============================================================================
// SORTING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Word,
}

impl SortField {
    /// Query-string parsing: anything other than "word" sorts by date.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("word") => SortField::Word,
            _ => SortField::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Word => "word",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-string parsing: anything other than "asc" is descending.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

// ============================================================================
// WORD FILTER
// ============================================================================

/// Word list view: optional category/user filters plus a sort.
/// Default is newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordFilter {
    pub sort: SortField,
    pub order: SortOrder,
    pub category_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl WordFilter {
    pub fn matches(&self, entry: &WordEntry) -> bool {
        if let Some(category_id) = self.category_id {
            if entry.category_id != Some(category_id) {
                return false;
            }
        }

        if let Some(user_id) = self.user_id {
            if entry.user_id != user_id {
                return false;
            }
        }

        true
    }

    /// Filter `entries` and sort what remains.
    pub fn apply(&self, entries: Vec<WordEntry>) -> Vec<WordEntry> {
        let mut kept: Vec<WordEntry> = entries.into_iter().filter(|e| self.matches(e)).collect();

        match self.sort {
            SortField::Date => kept.sort_by(|a, b| a.date_added.cmp(&b.date_added)),
            SortField::Word => kept.sort_by(|a, b| a.word.cmp(&b.word)),
        }

        if self.order == SortOrder::Desc {
            kept.reverse();
        }

        kept
    }
}

// ============================================================================
// DUPLICATE DETECTION
// ============================================================================

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Existing entry with the same text, ignoring case and surrounding whitespace.
pub fn find_duplicate<'a>(entries: &'a [WordEntry], text: &str) -> Option<&'a WordEntry> {
    let needle = normalize(text);
    entries.iter().find(|e| normalize(&e.word) == needle)
}

/// Like [`find_duplicate`], but ignores the entry being edited.
pub fn find_duplicate_excluding<'a>(
    entries: &'a [WordEntry],
    text: &str,
    exclude_id: i64,
) -> Option<&'a WordEntry> {
    let needle = normalize(text);
    entries
        .iter()
        .find(|e| e.id != exclude_id && normalize(&e.word) == needle)
}

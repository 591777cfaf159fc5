//! Predicate builder: filter selection state and record matching
//!
//! A [`FilterState`] captures what the user typed and picked; it derives a
//! pure predicate over any [`Record`]. Safe to re-evaluate on every
//! keystroke — there is no cached or incremental state.

use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The sentinel spelling meaning "no constraint" in a categorical dropdown
pub const ALL: &str = "all";

/// One categorical filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// No constraint on this field
    All,
    /// Field must equal this value
    #[serde(untagged)]
    Value(String),
}

impl Selection {
    /// Parse a dropdown value, mapping the `"all"` sentinel to [`Selection::All`]
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            Selection::All
        } else {
            Selection::Value(raw.to_string())
        }
    }

    /// Whether this selection constrains anything
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// The current filter state of one table: free-text search plus zero or
/// more categorical selections, keyed by column name.
///
/// Selections keep insertion order (`IndexMap`) so serialized state and log
/// output stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub selections: IndexMap<String, Selection>,
}

impl FilterState {
    /// An empty filter: no search text, no selections
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a categorical selection, `"all"` meaning "clear the constraint"
    pub fn select(&mut self, field: &str, value: &str) {
        self.selections
            .insert(field.to_string(), Selection::parse(value));
    }

    /// True when the filter constrains nothing: search is blank and every
    /// selection is `"all"`. Pages use this to decide between full-store and
    /// filtered aggregates.
    pub fn is_trivial(&self) -> bool {
        self.search.trim().is_empty() && self.selections.values().all(Selection::is_all)
    }

    /// Evaluate the predicate against one record.
    ///
    /// The predicate is the AND of every categorical selection and the
    /// search clause. A selection naming an unknown field or a value the
    /// record's field never takes matches nothing — the table goes empty
    /// rather than erroring. An empty or whitespace-only search matches
    /// everything; otherwise matching is a case-insensitive substring test
    /// over the record's declared searchable fields.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        for (field, selection) in &self.selections {
            if let Selection::Value(wanted) = selection {
                let matched = record
                    .field(field)
                    .is_some_and(|value| value.matches_selection(wanted));
                if !matched {
                    return false;
                }
            }
        }
        self.matches_search(record)
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        R::searchable_fields().iter().any(|field| {
            record
                .field(field)
                .and_then(|value| value.as_str().map(str::to_lowercase))
                .is_some_and(|text| text.contains(&query))
        })
    }
}

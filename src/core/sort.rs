//! Comparator builder: sort keys, directions, and toggle semantics

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply the direction to a base ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A sortable column declared by a page descriptor.
///
/// Each column carries its own default direction: identifier- and name-like
/// columns start ascending, magnitude columns (amounts, dates, counts)
/// start descending. The default is per-column configuration, not a global
/// rule — the observed pages differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortColumn {
    pub key: &'static str,
    pub default_direction: SortDirection,
}

impl SortColumn {
    pub const fn asc(key: &'static str) -> Self {
        Self {
            key,
            default_direction: SortDirection::Asc,
        }
    }

    pub const fn desc(key: &'static str) -> Self {
        Self {
            key,
            default_direction: SortDirection::Desc,
        }
    }
}

/// The active sort of one table: a column key plus a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }

    /// Handle a header click: clicking the active column flips direction,
    /// clicking another column switches to it at that column's default
    /// direction. Clicking a key the table never declared is a wiring
    /// mistake in the presentation layer and fails fast.
    pub fn toggle(
        &mut self,
        key: &str,
        columns: &[SortColumn],
        record_type: &'static str,
    ) -> Result<(), QueryError> {
        let column = columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| QueryError::UnknownSortKey {
                record_type,
                key: key.to_string(),
            })?;
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = column.key.to_string();
            self.direction = column.default_direction;
        }
        Ok(())
    }
}

/// Three-way comparison of two records on one column, ascending.
///
/// Missing fields order as null (first); the engine validates keys before
/// sorting, so this only happens for optional fields that are unset.
pub fn compare_records<R: Record>(a: &R, b: &R, key: &str) -> Ordering {
    let av = a.field(key).unwrap_or(FieldValue::Null);
    let bv = b.field(key).unwrap_or(FieldValue::Null);
    av.compare(&bv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::tests::TestRecord;

    const COLUMNS: &[SortColumn] = &[
        SortColumn::asc("id"),
        SortColumn::asc("name"),
        SortColumn::desc("amount"),
        SortColumn::desc("posted"),
    ];

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let mut state = SortState::new("amount", SortDirection::Desc);
        state.toggle("amount", COLUMNS, "test_record").unwrap();
        assert_eq!(state.direction, SortDirection::Asc);
        state.toggle("amount", COLUMNS, "test_record").unwrap();
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_new_column_uses_column_default() {
        let mut state = SortState::new("posted", SortDirection::Asc);
        state.toggle("id", COLUMNS, "test_record").unwrap();
        assert_eq!(state, SortState::new("id", SortDirection::Asc));

        state.toggle("amount", COLUMNS, "test_record").unwrap();
        assert_eq!(state, SortState::new("amount", SortDirection::Desc));
    }

    #[test]
    fn test_toggle_unknown_key_fails_fast() {
        let mut state = SortState::new("id", SortDirection::Asc);
        let err = state.toggle("urgncy", COLUMNS, "test_record").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSortKey {
                record_type: "test_record",
                key: "urgncy".to_string(),
            }
        );
        // State is untouched on error.
        assert_eq!(state, SortState::new("id", SortDirection::Asc));
    }

    #[test]
    fn test_compare_records_numeric() {
        let a = TestRecord::new("T-1", "a", "Plumbing", 100.0, "2026-02-01");
        let b = TestRecord::new("T-2", "b", "Plumbing", 200.0, "2026-02-02");
        assert_eq!(compare_records(&a, &b, "amount"), Ordering::Less);
        assert_eq!(compare_records(&b, &a, "amount"), Ordering::Greater);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}

//! Query view orchestration: filter then stable-sort
//!
//! `view(records, predicate, comparator) = sort(filter(records, predicate),
//! comparator)` — a pure function recomputed eagerly on every input change.
//! Dataset sizes are tens to low hundreds of rows, so there is no caching;
//! identical inputs always yield an identical output sequence.

use crate::core::error::QueryError;
use crate::core::filter::FilterState;
use crate::core::record::Record;
use crate::core::sort::{SortColumn, SortState, compare_records};
use serde::{Deserialize, Serialize};

/// Static descriptor of one table: the sortable columns it declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: &'static [SortColumn],
}

impl TableSpec {
    pub const fn new(columns: &'static [SortColumn]) -> Self {
        Self { columns }
    }

    /// Validate a sort key against the declared columns
    pub fn check_sort_key(&self, key: &str, record_type: &'static str) -> Result<(), QueryError> {
        if self.columns.iter().any(|c| c.key == key) {
            Ok(())
        } else {
            Err(QueryError::UnknownSortKey {
                record_type,
                key: key.to_string(),
            })
        }
    }
}

/// The complete interaction state of one table.
///
/// Owned by the presentation layer (created on view mount, updated on each
/// interaction) and threaded into every query call; the engine holds no
/// state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    #[serde(default)]
    pub filter: FilterState,
    pub sort: SortState,
}

impl QueryState {
    pub fn new(sort: SortState) -> Self {
        Self {
            filter: FilterState::new(),
            sort,
        }
    }
}

/// Produce the filtered, sorted sequence for the current interaction state.
///
/// The sort key is validated against the table's declared columns before
/// anything runs (unknown keys are programmer errors). Filtering keeps
/// input order; sorting is stable, so rows equal on the sort key keep
/// their relative input order in both directions. An empty result is a
/// first-class value, not a special case.
pub fn query_view<R: Record>(
    records: &[R],
    state: &QueryState,
    table: &TableSpec,
) -> Result<Vec<R>, QueryError> {
    table.check_sort_key(&state.sort.key, R::record_type())?;

    let mut rows: Vec<R> = records
        .iter()
        .filter(|r| state.filter.matches(*r))
        .cloned()
        .collect();

    let direction = state.sort.direction;
    rows.sort_by(|a, b| direction.apply(compare_records(a, b, &state.sort.key)));

    tracing::debug!(
        record_type = R::record_type(),
        total = records.len(),
        visible = rows.len(),
        sort_key = %state.sort.key,
        sort_direction = ?direction,
        "query view recomputed"
    );
    Ok(rows)
}

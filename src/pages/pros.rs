//! Pro directory page: the roster, filterable by trade and account status

use crate::core::error::QueryError;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::core::view::{QueryState, TableSpec};
use crate::entities::pro::Pro;
use crate::pages::{PageView, page_view};
use crate::store::RecordStore;

/// Directory columns are all magnitudes: best-rated, busiest, or priciest
/// first.
pub const COLUMNS: &[SortColumn] = &[
    SortColumn::desc("rating"),
    SortColumn::desc("jobsCompleted"),
    SortColumn::desc("hourlyRate"),
];

pub const TABLE: TableSpec = TableSpec::new(COLUMNS);

pub fn initial_sort() -> SortState {
    SortState::new("rating", SortDirection::Desc)
}

pub fn query(store: &RecordStore<Pro>, state: &QueryState) -> Result<PageView<Pro>, QueryError> {
    page_view(store, state, &TABLE)
}

//! Reviews page: homeowner feedback with a rating breakdown panel.
//!
//! The table sort is fixed (newest first, no sortable headers). The rating
//! breakdown follows the filters: with no filter active it describes the
//! whole platform, otherwise it describes exactly the rows on screen.

use crate::core::aggregate::{AggregateScope, Scoped, filtered_scope};
use crate::core::error::QueryError;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::core::view::{QueryState, TableSpec};
use crate::entities::review::{RATING_DOMAIN, Review};
use crate::pages::{PageView, page_view};
use crate::store::RecordStore;
use indexmap::IndexMap;

pub const COLUMNS: &[SortColumn] = &[SortColumn::desc("date")];

pub const TABLE: TableSpec = TableSpec::new(COLUMNS);

/// Fixed sort: newest review first
pub fn initial_sort() -> SortState {
    SortState::new("date", SortDirection::Desc)
}

pub fn query(
    store: &RecordStore<Review>,
    state: &QueryState,
) -> Result<PageView<Review>, QueryError> {
    page_view(store, state, &TABLE)
}

/// The breakdown panel: average rating plus per-star counts over the full
/// 5..1 scale, with explicit zeros for unseen ratings
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBreakdown {
    pub scope: AggregateScope,
    pub average: f64,
    pub counts: IndexMap<i64, usize>,
    pub reviewed: usize,
}

/// Compute the breakdown for the current interaction state: full store when
/// the filter is trivial, the visible rows otherwise
pub fn rating_breakdown(
    store: &RecordStore<Review>,
    state: &QueryState,
    rows: &[Review],
) -> Result<RatingBreakdown, QueryError> {
    let scoped = if state.filter.is_trivial() {
        store.full_scope()
    } else {
        filtered_scope(rows)
    };
    breakdown_over(scoped)
}

fn breakdown_over(scoped: Scoped<'_, Review>) -> Result<RatingBreakdown, QueryError> {
    Ok(RatingBreakdown {
        scope: scoped.scope(),
        average: scoped.average("rating")?,
        counts: scoped.distribution("rating", RATING_DOMAIN)?,
        reviewed: scoped.len(),
    })
}

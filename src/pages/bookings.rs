//! Bookings page: confirmed engagements with platform-wide summary cards

use crate::core::aggregate::AggregateScope;
use crate::core::error::QueryError;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::core::view::{QueryState, TableSpec};
use crate::entities::booking::{Booking, BookingStatus};
use crate::pages::{PageView, page_view};
use crate::store::RecordStore;

pub const COLUMNS: &[SortColumn] = &[
    SortColumn::asc("id"),
    SortColumn::asc("proName"),
    SortColumn::asc("homeowner"),
    SortColumn::asc("status"),
    SortColumn::desc("amount"),
    SortColumn::desc("platformFee"),
    SortColumn::desc("scheduledDate"),
];

pub const TABLE: TableSpec = TableSpec::new(COLUMNS);

pub fn initial_sort() -> SortState {
    SortState::new("scheduledDate", SortDirection::Desc)
}

pub fn query(
    store: &RecordStore<Booking>,
    state: &QueryState,
) -> Result<PageView<Booking>, QueryError> {
    page_view(store, state, &TABLE)
}

/// The page's summary cards. These describe the whole platform and do not
/// move when the table is filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub booked_total: f64,
    pub platform_fees: f64,
    pub completed: usize,
    pub in_progress: usize,
}

pub fn summary(store: &RecordStore<Booking>) -> Result<BookingSummary, QueryError> {
    let scoped = store.full_scope();
    debug_assert_eq!(scoped.scope(), AggregateScope::FullStore);
    Ok(BookingSummary {
        booked_total: scoped.sum("amount")?,
        platform_fees: scoped.sum("platformFee")?,
        completed: scoped.count_where(|b| b.status == BookingStatus::Completed),
        in_progress: scoped.count_where(|b| b.status == BookingStatus::InProgress),
    })
}

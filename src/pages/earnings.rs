//! Earnings page: per-pro payout records with two summary layers.
//!
//! The platform summary cards read the full store; the totals row under the
//! table reads the filtered view, so narrowing to one pro or one period
//! shows that slice's money.

use crate::core::aggregate::{AggregateScope, filtered_scope};
use crate::core::error::QueryError;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::core::view::{QueryState, TableSpec};
use crate::entities::earning::EarningRecord;
use crate::pages::{PageView, page_view};
use crate::store::RecordStore;

pub const COLUMNS: &[SortColumn] = &[
    SortColumn::asc("proName"),
    SortColumn::asc("category"),
    SortColumn::asc("period"),
    SortColumn::asc("payoutStatus"),
    SortColumn::desc("jobsCompleted"),
    SortColumn::desc("grossEarnings"),
    SortColumn::desc("platformFee"),
    SortColumn::desc("netEarnings"),
];

pub const TABLE: TableSpec = TableSpec::new(COLUMNS);

pub fn initial_sort() -> SortState {
    SortState::new("grossEarnings", SortDirection::Desc)
}

pub fn query(
    store: &RecordStore<EarningRecord>,
    state: &QueryState,
) -> Result<PageView<EarningRecord>, QueryError> {
    page_view(store, state, &TABLE)
}

/// Platform-wide cards: whole-store money and volume, unaffected by filters
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSummary {
    pub total_gross: f64,
    pub total_fees: f64,
    pub total_net: f64,
    pub total_jobs: u64,
    /// Gross per completed job as a ratio of sums, weighting each record by
    /// its job count; 0.0 when no jobs were completed
    pub average_per_job: f64,
}

pub fn platform_summary(store: &RecordStore<EarningRecord>) -> Result<PlatformSummary, QueryError> {
    let scoped = store.full_scope();
    debug_assert_eq!(scoped.scope(), AggregateScope::FullStore);
    Ok(PlatformSummary {
        total_gross: scoped.sum("grossEarnings")?,
        total_fees: scoped.sum("platformFee")?,
        total_net: scoped.sum("netEarnings")?,
        total_jobs: scoped.sum("jobsCompleted")? as u64,
        average_per_job: scoped.ratio_of_sums("grossEarnings", "jobsCompleted")?,
    })
}

/// The totals row under the table: money across exactly the visible rows
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTotals {
    pub gross: f64,
    pub fees: f64,
    pub net: f64,
}

pub fn filtered_totals(rows: &[EarningRecord]) -> Result<FilteredTotals, QueryError> {
    let scoped = filtered_scope(rows);
    Ok(FilteredTotals {
        gross: scoped.sum("grossEarnings")?,
        fees: scoped.sum("platformFee")?,
        net: scoped.sum("netEarnings")?,
    })
}

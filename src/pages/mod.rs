//! Page descriptors: per-table policy for the dashboard pages.
//!
//! Each page module declares its sortable columns (with per-column default
//! directions), its initial sort, and the summary aggregates the page shows
//! — including which scope each number reads. The heavy lifting lives in
//! [`crate::core`]; a page is configuration plus a handful of named
//! aggregate functions.

pub mod bookings;
pub mod dashboard;
pub mod earnings;
pub mod jobs;
pub mod pros;
pub mod reviews;

use crate::core::error::QueryError;
use crate::core::record::Record;
use crate::core::view::{QueryState, TableSpec, query_view};
use crate::store::RecordStore;
use serde::Serialize;

/// One page's table output: the visible rows plus the unfiltered total,
/// for "showing X of Y" style captions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<R: Record> {
    pub rows: Vec<R>,
    pub total: usize,
}

impl<R: Record> PageView<R> {
    pub fn visible(&self) -> usize {
        self.rows.len()
    }
}

pub(crate) fn page_view<R: Record>(
    store: &RecordStore<R>,
    state: &QueryState,
    table: &TableSpec,
) -> Result<PageView<R>, QueryError> {
    let rows = query_view(store.records(), state, table)?;
    Ok(PageView {
        total: store.len(),
        rows,
    })
}

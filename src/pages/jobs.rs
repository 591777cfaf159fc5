//! Job board page: every job request, filterable by category and status

use crate::core::error::QueryError;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::core::view::{QueryState, TableSpec};
use crate::entities::job::Job;
use crate::pages::{PageView, page_view};
use crate::store::RecordStore;

/// Sortable columns. Identifier- and name-like columns default ascending;
/// amount and creation date default to newest/largest first.
pub const COLUMNS: &[SortColumn] = &[
    SortColumn::asc("id"),
    SortColumn::asc("category"),
    SortColumn::asc("status"),
    SortColumn::asc("homeowner"),
    SortColumn::desc("amount"),
    SortColumn::desc("createdAt"),
];

pub const TABLE: TableSpec = TableSpec::new(COLUMNS);

/// The page opens on newest jobs first
pub fn initial_sort() -> SortState {
    SortState::new("createdAt", SortDirection::Desc)
}

pub fn query(store: &RecordStore<Job>, state: &QueryState) -> Result<PageView<Job>, QueryError> {
    page_view(store, state, &TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MarketplaceData;

    #[test]
    fn test_initial_view_is_newest_first() {
        let data = MarketplaceData::seeded().unwrap();
        let view = query(data.jobs(), &QueryState::new(initial_sort())).unwrap();
        assert_eq!(view.visible(), view.total);
        for pair in view.rows.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_search_drain_matches_case_insensitively() {
        let data = MarketplaceData::seeded().unwrap();
        let mut state = QueryState::new(initial_sort());
        state.filter.search = "drain".to_string();

        let view = query(data.jobs(), &state).unwrap();
        assert_eq!(view.rows.len(), 1);
        assert!(view.rows[0].title.contains("Drain"));
    }

    #[test]
    fn test_category_and_status_filters_combine() {
        let data = MarketplaceData::seeded().unwrap();
        let mut state = QueryState::new(initial_sort());
        state.filter.select("category", "Plumbing");
        state.filter.select("status", "Completed");

        let view = query(data.jobs(), &state).unwrap();
        assert!(!view.rows.is_empty());
        for job in &view.rows {
            assert_eq!(job.category.label(), "Plumbing");
            assert_eq!(job.status.label(), "Completed");
        }
    }

    #[test]
    fn test_toggle_amount_starts_descending() {
        let mut sort = initial_sort();
        sort.toggle("amount", COLUMNS, "job").unwrap();
        assert_eq!(sort, SortState::new("amount", SortDirection::Desc));
        sort.toggle("amount", COLUMNS, "job").unwrap();
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_description_is_not_a_sort_key() {
        let data = MarketplaceData::seeded().unwrap();
        let state = QueryState::new(SortState::new("description", SortDirection::Asc));
        assert!(query(data.jobs(), &state).is_err());
    }
}

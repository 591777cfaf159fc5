//! End-to-end tests of the query pipeline: filter state through view to
//! scoped aggregates, over both hand-built fixtures and the bundled seed.

use tradeboard::pages::{bookings, earnings, jobs, reviews};
use tradeboard::prelude::*;

fn booking(id: &str, category: TradeCategory, amount: f64) -> Booking {
    Booking {
        id: id.to_string(),
        job_id: "JOB-1".to_string(),
        pro_id: "PRO-1".to_string(),
        pro_name: "Test Pro".to_string(),
        homeowner: "Test Owner".to_string(),
        category,
        service: "Test Service".to_string(),
        status: BookingStatus::Confirmed,
        amount,
        platform_fee: platform_fee(amount),
        scheduled_date: "2026-02-01".to_string(),
        completed_date: None,
    }
}

fn review(id: &str, rating: u8) -> Review {
    Review {
        id: id.to_string(),
        job_id: "JOB-1".to_string(),
        pro_name: "Test Pro".to_string(),
        pro_id: "PRO-1".to_string(),
        homeowner: "Test Owner".to_string(),
        category: TradeCategory::Plumbing,
        rating,
        comment: "Fine work.".to_string(),
        date: "2026-02-01".to_string(),
        service: "Test Service".to_string(),
    }
}

#[test]
fn filter_then_fee_sum_then_sort_toggle() {
    let store = RecordStore::new(vec![
        booking("BKG-1", TradeCategory::Plumbing, 100.0),
        booking("BKG-2", TradeCategory::Electrical, 200.0),
    ]);

    // Category filter narrows to exactly the plumbing booking.
    let mut state = QueryState::new(bookings::initial_sort());
    state.filter.select("category", "Plumbing");
    let view = bookings::query(&store, &state).unwrap();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, "BKG-1");

    // The filtered fee sum is 15% of the one visible amount.
    let fees = filtered_scope(&view.rows).sum("platformFee").unwrap();
    assert_eq!(fees, 15.00);

    // On the full set, a first click on amount sorts descending (the
    // column default), a second flips it.
    state.filter.select("category", "all");
    state.sort.toggle("amount", bookings::COLUMNS, Booking::record_type()).unwrap();
    let desc = bookings::query(&store, &state).unwrap();
    let amounts: Vec<f64> = desc.rows.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![200.0, 100.0]);

    state.sort.toggle("amount", bookings::COLUMNS, Booking::record_type()).unwrap();
    let asc = bookings::query(&store, &state).unwrap();
    let amounts: Vec<f64> = asc.rows.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![100.0, 200.0]);
}

#[test]
fn average_per_job_with_zero_volume_is_zero_not_nan() {
    let store = RecordStore::new(vec![EarningRecord {
        id: "ERN-1".to_string(),
        pro_id: "PRO-1".to_string(),
        pro_name: "Test Pro".to_string(),
        category: TradeCategory::Plumbing,
        period: "Feb 2026".to_string(),
        jobs_completed: 0,
        gross_earnings: 0.0,
        platform_fee: 0.0,
        net_earnings: 0.0,
        payout_status: PayoutStatus::Scheduled,
        payout_date: None,
    }]);

    let cards = earnings::platform_summary(&store).unwrap();
    assert_eq!(cards.average_per_job, 0.0);
    assert!(!cards.average_per_job.is_nan());
}

#[test]
fn search_is_case_insensitive_substring_over_searchable_fields() {
    let data = MarketplaceData::seeded().unwrap();
    let mut state = QueryState::new(jobs::initial_sort());
    state.filter.search = "drain".to_string();

    let view = jobs::query(data.jobs(), &state).unwrap();
    assert_eq!(view.rows.len(), 1);
    assert!(view.rows[0].title.to_lowercase().contains("drain"));

    // Same query, shouting. Same result.
    state.filter.search = "DRAIN".to_string();
    let shouted = jobs::query(data.jobs(), &state).unwrap();
    assert_eq!(shouted.rows, view.rows);
}

#[test]
fn rating_distribution_reports_explicit_zeros() {
    let store = RecordStore::new(vec![
        review("REV-1", 5),
        review("REV-2", 5),
        review("REV-3", 4),
        review("REV-4", 3),
        review("REV-5", 5),
    ]);

    let state = QueryState::new(reviews::initial_sort());
    let view = reviews::query(&store, &state).unwrap();
    let breakdown = reviews::rating_breakdown(&store, &state, &view.rows).unwrap();

    let counts: Vec<(i64, usize)> = breakdown.counts.into_iter().collect();
    assert_eq!(counts, vec![(5, 3), (4, 1), (3, 1), (2, 0), (1, 0)]);
    assert_eq!(breakdown.scope, AggregateScope::FullStore);
}

#[test]
fn unknown_filter_value_empties_the_table_without_error() {
    let data = MarketplaceData::seeded().unwrap();
    let mut state = QueryState::new(jobs::initial_sort());
    state.filter.select("category", "Blacksmithing");

    let view = jobs::query(data.jobs(), &state).unwrap();
    assert!(view.rows.is_empty());
    assert_eq!(view.total, data.jobs().len());
}

#[test]
fn filtered_aggregates_never_exceed_full_store() {
    let data = MarketplaceData::seeded().unwrap();
    let full = data.earnings().full_scope().sum("grossEarnings").unwrap();

    let mut state = QueryState::new(earnings::initial_sort());
    state.filter.select("category", "Plumbing");
    let view = earnings::query(data.earnings(), &state).unwrap();
    let filtered = filtered_scope(&view.rows).sum("grossEarnings").unwrap();

    assert!(filtered > 0.0);
    assert!(filtered < full);

    // With the filter cleared, the two scopes agree exactly.
    state.filter.select("category", "all");
    let all = earnings::query(data.earnings(), &state).unwrap();
    assert_eq!(filtered_scope(&all.rows).sum("grossEarnings").unwrap(), full);
}

#[test]
fn query_state_round_trips_through_json() {
    let mut state = QueryState::new(jobs::initial_sort());
    state.filter.search = "heater".to_string();
    state.filter.select("category", "Plumbing");
    state.filter.select("status", "all");

    let json = serde_json::to_string(&state).unwrap();
    let restored: QueryState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    // Wire shape stays camelCase with the "all" sentinel spelled out.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sort"]["key"], "createdAt");
    assert_eq!(value["filter"]["selections"]["status"], "all");
}

#[test]
fn iso_dates_order_lexicographically_without_parsing() {
    let data = MarketplaceData::seeded().unwrap();
    let mut state = QueryState::new(jobs::initial_sort());
    state.sort.direction = SortDirection::Asc;

    let view = jobs::query(data.jobs(), &state).unwrap();
    let dates: Vec<&str> = view.rows.iter().map(|j| j.created_at.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

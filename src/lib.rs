//! # Tradeboard
//!
//! A generic, in-process query engine for a home-services marketplace
//! operations dashboard: filterable, sortable views and summary aggregates
//! over immutable, typed record collections.
//!
//! ## Features
//!
//! - **Record/Descriptor Architecture**: one generic pipeline parameterized
//!   by entity type, plus one small descriptor per dashboard page
//! - **Predicate Builder**: free-text search + categorical filters composed
//!   into a single pure predicate
//! - **Comparator Builder**: per-column sort with configurable default
//!   directions and stable ordering
//! - **Scoped Aggregates**: every summary number declares whether it reflects
//!   the full store or the currently filtered view
//! - **Seed Integrity**: referential integrity and domain invariants are
//!   validated when the store is built
//!
//! ## Quick Start
//!
//! ```rust
//! use tradeboard::prelude::*;
//!
//! let data = MarketplaceData::seeded().expect("seed data is consistent");
//!
//! // Filter the job board to plumbing jobs matching "drain".
//! let mut state = QueryState::new(pages::jobs::initial_sort());
//! state.filter.search = "drain".to_string();
//! state.filter.select("category", "Plumbing");
//!
//! let view = pages::jobs::query(data.jobs(), &state).unwrap();
//! for job in &view.rows {
//!     println!("{} {} ({})", job.id, job.title, job.status);
//! }
//! ```
//!
//! The presentation layer owns the interaction state: it threads a
//! [`core::view::QueryState`] into each query call and re-renders from the
//! returned rows and aggregates. The engine itself is pure and synchronous.

pub mod core;
pub mod entities;
pub mod pages;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core engine ===
    pub use crate::core::{
        aggregate::{AggregateScope, Scoped, filtered_scope},
        error::QueryError,
        field::FieldValue,
        filter::{FilterState, Selection},
        record::Record,
        sort::{SortColumn, SortDirection, SortState},
        view::{QueryState, TableSpec, query_view},
    };

    // === Entities ===
    pub use crate::entities::{
        PLATFORM_FEE_RATE, format_date, platform_fee,
        booking::{Booking, BookingStatus},
        earning::{EarningRecord, PayoutStatus},
        job::{Job, JobStatus, TradeCategory, UrgencyLevel},
        pro::{Pro, ProStatus},
        review::Review,
    };

    // === Store ===
    pub use crate::store::{MarketplaceData, RecordStore, StoreError};

    // === Pages ===
    pub use crate::pages;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
}

//! Core module containing the generic query engine

pub mod aggregate;
pub mod error;
pub mod field;
pub mod filter;
pub mod record;
pub mod sort;
pub mod view;

pub use aggregate::{AggregateScope, Scoped, filtered_scope};
pub use error::QueryError;
pub use field::FieldValue;
pub use filter::{FilterState, Selection};
pub use record::Record;
pub use sort::{SortColumn, SortDirection, SortState};
pub use view::{QueryState, TableSpec, query_view};

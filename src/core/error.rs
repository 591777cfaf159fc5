//! Typed error handling for the query engine
//!
//! Engine errors are configuration mistakes — a mismatch between what a
//! page descriptor declares and what the record type supports. They are
//! programmer errors surfaced fast, not runtime/user conditions: an unknown
//! *filter value* degrades to an empty result instead (see
//! [`crate::core::filter`]).

use thiserror::Error;

/// Errors raised by the query engine and aggregator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The sort key is not among the table's declared sortable columns
    #[error("unknown sort key '{key}' for {record_type}")]
    UnknownSortKey {
        record_type: &'static str,
        key: String,
    },

    /// An aggregate referenced a field the record type does not have
    #[error("unknown field '{field}' for {record_type}")]
    UnknownField {
        record_type: &'static str,
        field: String,
    },

    /// An aggregate referenced a field that is not numeric
    #[error("field '{field}' on {record_type} is not numeric")]
    NonNumericField {
        record_type: &'static str,
        field: String,
    },
}

/// A specialized Result type for query engine operations
pub type QueryResult<T> = Result<T, QueryError>;

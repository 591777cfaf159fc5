//! Record trait defining the core abstraction for all tabular entities

use crate::core::field::FieldValue;

/// Base trait for every record type exposed through a query view.
///
/// A record is an immutable row in one of the dashboard tables. The trait
/// gives the generic engine everything it needs without knowing the
/// concrete type:
/// - a stable identifier
/// - dynamic field access by column name (camelCase, matching the seed
///   data's wire shape)
/// - the list of text fields eligible for free-text search
pub trait Record: Clone + Send + Sync + 'static {
    /// The singular record type name (e.g., "job", "booking")
    fn record_type() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Fields searched by the free-text predicate, in declaration order
    fn searchable_fields() -> &'static [&'static str];

    /// Get the value of a specific field by column name.
    ///
    /// Returns `None` for a column the record does not have; optional
    /// fields that are unset return `Some(FieldValue::Null)`.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal record used by the engine's unit tests.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct TestRecord {
        pub id: String,
        pub name: String,
        pub category: String,
        pub amount: f64,
        pub posted: String,
    }

    impl TestRecord {
        pub(crate) fn new(id: &str, name: &str, category: &str, amount: f64, posted: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                amount,
                posted: posted.to_string(),
            }
        }
    }

    impl Record for TestRecord {
        fn record_type() -> &'static str {
            "test_record"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn searchable_fields() -> &'static [&'static str] {
            &["id", "name"]
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(self.id.as_str().into()),
                "name" => Some(self.name.as_str().into()),
                "category" => Some(self.category.as_str().into()),
                "amount" => Some(self.amount.into()),
                "posted" => Some(self.posted.as_str().into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_field_access() {
        let r = TestRecord::new("T-1", "Drain fix", "Plumbing", 120.0, "2026-02-01");
        assert_eq!(r.field("name"), Some("Drain fix".into()));
        assert_eq!(r.field("amount"), Some(120.0.into()));
        assert_eq!(r.field("bogus"), None);
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(TestRecord::record_type(), "test_record");
        assert_eq!(TestRecord::searchable_fields(), &["id", "name"]);
    }
}

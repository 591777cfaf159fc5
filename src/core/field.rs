//! Field value types and comparison semantics

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A polymorphic field value that can hold the different column types
/// appearing in dashboard tables.
///
/// Date-like fields are carried as ISO-8601 strings: their lexicographic
/// order is their chronological order, so sorting never parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare a value against the string spelling of a filter selection.
    ///
    /// String values compare directly; numeric and boolean values compare
    /// against the parsed selection (the Reviews page filters an integer
    /// rating through a string-valued dropdown). A selection that does not
    /// parse matches nothing.
    pub fn matches_selection(&self, selection: &str) -> bool {
        match self {
            FieldValue::String(s) => s == selection,
            FieldValue::Integer(i) => selection.parse::<i64>() == Ok(*i),
            FieldValue::Float(f) => selection.parse::<f64>() == Ok(*f),
            FieldValue::Boolean(b) => selection.parse::<bool>() == Ok(*b),
            FieldValue::Null => false,
        }
    }

    /// Total order across values of the same column.
    ///
    /// Strings are locale-naive lexicographic, numbers compare numerically
    /// (integers widen against floats), booleans order false < true, and
    /// null sorts before everything. Columns are homogeneous by
    /// construction; a type mismatch falls back to a fixed type rank so the
    /// order stays deterministic.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.type_rank().cmp(&b.type_rank()),
            },
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) => 2,
            FieldValue::Float(_) => 3,
            FieldValue::String(_) => 4,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Integer(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::from("test");
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_f64(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numeric_widening() {
        assert_eq!(FieldValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(FieldValue::Boolean(true).as_f64(), None);
    }

    #[test]
    fn test_optional_field_becomes_null() {
        let none: Option<&str> = None;
        assert!(FieldValue::from(none).is_null());
        assert_eq!(FieldValue::from(Some("pro")).as_str(), Some("pro"));
    }

    #[test]
    fn test_matches_selection_string() {
        let value = FieldValue::from("Plumbing");
        assert!(value.matches_selection("Plumbing"));
        assert!(!value.matches_selection("Electrical"));
    }

    #[test]
    fn test_matches_selection_integer_rating() {
        let value = FieldValue::Integer(4);
        assert!(value.matches_selection("4"));
        assert!(!value.matches_selection("5"));
        assert!(!value.matches_selection("not-a-number"));
    }

    #[test]
    fn test_null_never_matches() {
        assert!(!FieldValue::Null.matches_selection("anything"));
    }

    #[test]
    fn test_compare_strings_lexicographic() {
        let a = FieldValue::from("Alice");
        let b = FieldValue::from("Bob");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_compare_iso_dates_chronological() {
        // Lexicographic on ISO-8601 is chronological; no parsing needed.
        let earlier = FieldValue::from("2026-01-09");
        let later = FieldValue::from("2026-02-14");
        assert_eq!(earlier.compare(&later), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_numeric() {
        let int = FieldValue::Integer(3);
        let float = FieldValue::Float(2.5);
        assert_eq!(int.compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&int), Ordering::Less);
    }

    #[test]
    fn test_null_sorts_first() {
        assert_eq!(FieldValue::Null.compare(&FieldValue::from("x")), Ordering::Less);
        assert_eq!(FieldValue::from(1.0).compare(&FieldValue::Null), Ordering::Greater);
    }

    #[test]
    fn test_serde_untagged_roundtrip() {
        let original = FieldValue::from("Feb 2026");
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}

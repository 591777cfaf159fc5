//! Aggregator: scoped summary statistics over record sequences
//!
//! Every aggregate call declares its scope. Summary cards that describe the
//! whole platform read [`AggregateScope::FullStore`]; "filtered totals"
//! rows read [`AggregateScope::FilteredView`]. The scope travels with the
//! records in a [`Scoped`] handle so the policy is visible at each call
//! site instead of being an accident of which variable was in reach.

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;

/// Which record sequence an aggregate was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateScope {
    /// The entire record store, regardless of current filters
    FullStore,
    /// The current query view output
    FilteredView,
}

/// A record sequence tagged with its declared aggregate scope
#[derive(Debug, Clone, Copy)]
pub struct Scoped<'a, R> {
    scope: AggregateScope,
    records: &'a [R],
}

/// Tag a query view's output rows for filtered-scope aggregation
pub fn filtered_scope<R: Record>(rows: &[R]) -> Scoped<'_, R> {
    Scoped {
        scope: AggregateScope::FilteredView,
        records: rows,
    }
}

impl<'a, R: Record> Scoped<'a, R> {
    pub(crate) fn full_store(records: &'a [R]) -> Self {
        Self {
            scope: AggregateScope::FullStore,
            records,
        }
    }

    pub fn scope(&self) -> AggregateScope {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of a numeric field across the sequence
    pub fn sum(&self, field: &str) -> Result<f64, QueryError> {
        let mut total = 0.0;
        for record in self.records {
            total += numeric_field(record, field)?;
        }
        Ok(total)
    }

    /// Arithmetic mean of a numeric field; 0.0 over an empty sequence,
    /// never NaN
    pub fn average(&self, field: &str) -> Result<f64, QueryError> {
        if self.records.is_empty() {
            return Ok(0.0);
        }
        Ok(self.sum(field)? / self.records.len() as f64)
    }

    /// Count of records matching a predicate
    pub fn count_where(&self, predicate: impl Fn(&R) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(r)).count()
    }

    /// Frequency distribution of a small integer field over an explicit
    /// domain. Every domain value appears in the output, unseen values with
    /// a count of zero; values outside the domain are ignored. Iteration
    /// order follows the domain.
    pub fn distribution(
        &self,
        field: &str,
        domain: &[i64],
    ) -> Result<IndexMap<i64, usize>, QueryError> {
        let mut counts: IndexMap<i64, usize> = domain.iter().map(|v| (*v, 0)).collect();
        for record in self.records {
            let value = field_value(record, field)?;
            let Some(n) = value.as_f64() else {
                return Err(QueryError::NonNumericField {
                    record_type: R::record_type(),
                    field: field.to_string(),
                });
            };
            if let Some(slot) = counts.get_mut(&(n as i64)) {
                *slot += 1;
            }
        }
        Ok(counts)
    }

    /// Average-per-unit as a ratio of sums: `sum(numerator) /
    /// sum(denominator)`, weighting each record by its denominator rather
    /// than averaging per-record ratios. 0.0 when the denominator sum is
    /// zero, never NaN.
    pub fn ratio_of_sums(&self, numerator: &str, denominator: &str) -> Result<f64, QueryError> {
        let num = self.sum(numerator)?;
        let den = self.sum(denominator)?;
        if den == 0.0 { Ok(0.0) } else { Ok(num / den) }
    }
}

fn field_value<R: Record>(record: &R, field: &str) -> Result<FieldValue, QueryError> {
    record.field(field).ok_or_else(|| QueryError::UnknownField {
        record_type: R::record_type(),
        field: field.to_string(),
    })
}

fn numeric_field<R: Record>(record: &R, field: &str) -> Result<f64, QueryError> {
    let value = field_value(record, field)?;
    value.as_f64().ok_or_else(|| QueryError::NonNumericField {
        record_type: R::record_type(),
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::tests::TestRecord;

    fn records() -> Vec<TestRecord> {
        vec![
            TestRecord::new("T-1", "a", "Plumbing", 100.0, "2026-02-01"),
            TestRecord::new("T-2", "b", "Electrical", 200.0, "2026-02-02"),
            TestRecord::new("T-3", "c", "Plumbing", 50.0, "2026-02-03"),
        ]
    }

    #[test]
    fn test_sum() {
        let records = records();
        let scoped = Scoped::full_store(&records);
        assert_eq!(scoped.sum("amount").unwrap(), 350.0);
        assert_eq!(scoped.scope(), AggregateScope::FullStore);
    }

    #[test]
    fn test_filtered_sum_bounded_by_full_sum() {
        let records = records();
        let full = Scoped::full_store(&records).sum("amount").unwrap();
        let subset = &records[..2];
        let filtered = filtered_scope(subset).sum("amount").unwrap();
        assert!(filtered <= full);
        assert_eq!(filtered_scope(&records).sum("amount").unwrap(), full);
    }

    #[test]
    fn test_average_empty_is_zero_not_nan() {
        let empty: Vec<TestRecord> = vec![];
        let avg = filtered_scope(&empty).average("amount").unwrap();
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn test_average() {
        let records = records();
        let avg = Scoped::full_store(&records).average("amount").unwrap();
        assert!((avg - 350.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_where() {
        let records = records();
        let n = Scoped::full_store(&records).count_where(|r| r.category == "Plumbing");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_ratio_of_sums_zero_denominator() {
        let records = vec![TestRecord::new("T-1", "a", "Plumbing", 0.0, "2026-02-01")];
        let ratio = Scoped::full_store(&records)
            .ratio_of_sums("amount", "amount")
            .unwrap();
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let records = records();
        let err = Scoped::full_store(&records).sum("bogus").unwrap_err();
        assert!(matches!(err, QueryError::UnknownField { .. }));
    }

    #[test]
    fn test_non_numeric_field_fails_fast() {
        let records = records();
        let err = Scoped::full_store(&records).sum("name").unwrap_err();
        assert!(matches!(err, QueryError::NonNumericField { .. }));
    }

    #[test]
    fn test_distribution_includes_zero_counts() {
        #[derive(Clone)]
        struct Rated(i64);
        impl Record for Rated {
            fn record_type() -> &'static str {
                "rated"
            }
            fn id(&self) -> &str {
                "r"
            }
            fn searchable_fields() -> &'static [&'static str] {
                &[]
            }
            fn field(&self, name: &str) -> Option<FieldValue> {
                (name == "rating").then(|| FieldValue::Integer(self.0))
            }
        }

        let records: Vec<Rated> = [5, 5, 4, 3, 5].into_iter().map(Rated).collect();
        let dist = Scoped::full_store(&records)
            .distribution("rating", &[5, 4, 3, 2, 1])
            .unwrap();
        let counts: Vec<(i64, usize)> = dist.into_iter().collect();
        assert_eq!(counts, vec![(5, 3), (4, 1), (3, 1), (2, 0), (1, 0)]);
    }
}

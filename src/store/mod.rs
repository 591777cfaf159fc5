//! Immutable record stores and seed integrity validation
//!
//! Stores are seeded once by an external loader and read-only afterwards:
//! there is no create/update/delete surface. Cloning a store is cheap
//! (shared `Arc`), so every consumer can hold its own handle.

pub mod seed;

use crate::core::aggregate::Scoped;
use crate::core::record::Record;
use crate::entities::booking::Booking;
use crate::entities::earning::EarningRecord;
use crate::entities::job::Job;
use crate::entities::pro::Pro;
use crate::entities::review::Review;
use crate::entities::platform_fee;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Errors raised while building a store from seed data.
///
/// These are cold-start precondition failures in the data supplied by the
/// loader, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{record_type} id '{id}' does not match expected pattern {pattern}")]
    MalformedId {
        record_type: &'static str,
        id: String,
        pattern: &'static str,
    },

    #[error("{record_type} '{id}': field '{field}' is not an ISO-8601 date: '{value}'")]
    MalformedDate {
        record_type: &'static str,
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("{record_type} '{id}': '{field}' references missing {target_type} '{target_id}'")]
    DanglingReference {
        record_type: &'static str,
        id: String,
        field: &'static str,
        target_type: &'static str,
        target_id: String,
    },

    #[error("{record_type} '{id}': {message}")]
    InvariantViolation {
        record_type: &'static str,
        id: String,
        message: String,
    },
}

/// An immutable, in-memory collection of one record type
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Arc<Vec<R>>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// All records, in seed order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one record by identifier
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Tag the whole store for full-store aggregation
    pub fn full_scope(&self) -> Scoped<'_, R> {
        Scoped::full_store(&self.records)
    }
}

/// The five seeded stores the dashboard reads from.
///
/// Construction validates referential integrity and every domain invariant;
/// a dataset that fails validation never becomes visible to a query view.
#[derive(Debug, Clone)]
pub struct MarketplaceData {
    jobs: RecordStore<Job>,
    pros: RecordStore<Pro>,
    bookings: RecordStore<Booking>,
    reviews: RecordStore<Review>,
    earnings: RecordStore<EarningRecord>,
}

impl MarketplaceData {
    /// Build and validate the stores from loader-supplied collections
    pub fn new(
        jobs: Vec<Job>,
        pros: Vec<Pro>,
        bookings: Vec<Booking>,
        reviews: Vec<Review>,
        earnings: Vec<EarningRecord>,
    ) -> Result<Self, StoreError> {
        let data = Self {
            jobs: RecordStore::new(jobs),
            pros: RecordStore::new(pros),
            bookings: RecordStore::new(bookings),
            reviews: RecordStore::new(reviews),
            earnings: RecordStore::new(earnings),
        };
        data.validate()?;
        tracing::info!(
            jobs = data.jobs.len(),
            pros = data.pros.len(),
            bookings = data.bookings.len(),
            reviews = data.reviews.len(),
            earnings = data.earnings.len(),
            "marketplace data validated and loaded"
        );
        Ok(data)
    }

    /// Build the bundled demo dataset
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(
            seed::jobs(),
            seed::pros(),
            seed::bookings(),
            seed::reviews(),
            seed::earning_records(),
        )
    }

    pub fn jobs(&self) -> &RecordStore<Job> {
        &self.jobs
    }

    pub fn pros(&self) -> &RecordStore<Pro> {
        &self.pros
    }

    pub fn bookings(&self) -> &RecordStore<Booking> {
        &self.bookings
    }

    pub fn reviews(&self) -> &RecordStore<Review> {
        &self.reviews
    }

    pub fn earnings(&self) -> &RecordStore<EarningRecord> {
        &self.earnings
    }

    fn validate(&self) -> Result<(), StoreError> {
        for job in self.jobs.records() {
            validate_job(job, &self.pros)?;
        }
        for pro in self.pros.records() {
            validate_pro(pro)?;
        }
        for booking in self.bookings.records() {
            validate_booking(booking, &self.jobs, &self.pros)?;
        }
        for review in self.reviews.records() {
            validate_review(review, &self.jobs, &self.pros)?;
        }
        for record in self.earnings.records() {
            validate_earning(record, &self.pros)?;
        }
        Ok(())
    }
}

// === Per-entity validation ===

fn validate_job(job: &Job, pros: &RecordStore<Pro>) -> Result<(), StoreError> {
    check_id::<Job>(&job.id, job_id_pattern())?;
    check_date::<Job>(&job.id, "createdAt", &job.created_at)?;
    if let Some(date) = &job.scheduled_date {
        check_date::<Job>(&job.id, "scheduledDate", date)?;
    }
    if let Some(date) = &job.completed_date {
        check_date::<Job>(&job.id, "completedDate", date)?;
    }

    let pre_quote = job.status.is_pre_quote();
    if pre_quote != (job.amount == 0.0) {
        return Err(invariant::<Job>(
            &job.id,
            format!(
                "amount {} is inconsistent with status '{}' (zero iff pre-quote)",
                job.amount, job.status
            ),
        ));
    }
    if pre_quote != job.pro_id.is_none() {
        return Err(invariant::<Job>(
            &job.id,
            format!("pro assignment is inconsistent with status '{}'", job.status),
        ));
    }
    if job.pro.is_some() != job.pro_id.is_some() {
        return Err(invariant::<Job>(
            &job.id,
            "pro name and pro id must be present together".to_string(),
        ));
    }
    if let Some(pro_id) = &job.pro_id {
        check_reference::<Job, Pro>(&job.id, "proId", pro_id, pros)?;
    }
    Ok(())
}

fn validate_pro(pro: &Pro) -> Result<(), StoreError> {
    check_id::<Pro>(&pro.id, pro_id_pattern())?;
    check_date::<Pro>(&pro.id, "joinedDate", &pro.joined_date)?;

    if (pro.rating == 0.0) != (pro.review_count == 0) {
        return Err(invariant::<Pro>(
            &pro.id,
            format!(
                "rating {} and review count {} disagree (zero iff unrated)",
                pro.rating, pro.review_count
            ),
        ));
    }
    if pro.rating != 0.0 && !(1.0..=5.0).contains(&pro.rating) {
        return Err(invariant::<Pro>(
            &pro.id,
            format!("rating {} outside 1.0–5.0", pro.rating),
        ));
    }
    if !(0.0..=100.0).contains(&pro.completion_rate) {
        return Err(invariant::<Pro>(
            &pro.id,
            format!("completion rate {} outside 0–100", pro.completion_rate),
        ));
    }
    Ok(())
}

fn validate_booking(
    booking: &Booking,
    jobs: &RecordStore<Job>,
    pros: &RecordStore<Pro>,
) -> Result<(), StoreError> {
    check_id::<Booking>(&booking.id, booking_id_pattern())?;
    check_date::<Booking>(&booking.id, "scheduledDate", &booking.scheduled_date)?;
    if let Some(date) = &booking.completed_date {
        check_date::<Booking>(&booking.id, "completedDate", date)?;
    }
    check_reference::<Booking, Pro>(&booking.id, "proId", &booking.pro_id, pros)?;

    let job = jobs
        .get(&booking.job_id)
        .ok_or_else(|| StoreError::DanglingReference {
            record_type: Booking::record_type(),
            id: booking.id.clone(),
            field: "jobId",
            target_type: Job::record_type(),
            target_id: booking.job_id.clone(),
        })?;
    if job.status.is_pre_quote() {
        return Err(invariant::<Booking>(
            &booking.id,
            format!(
                "references job '{}' still in pre-quote status '{}'",
                job.id, job.status
            ),
        ));
    }

    let expected = platform_fee(booking.amount);
    if booking.platform_fee != expected {
        return Err(invariant::<Booking>(
            &booking.id,
            format!(
                "platform fee {} differs from 15% of {} ({})",
                booking.platform_fee, booking.amount, expected
            ),
        ));
    }
    Ok(())
}

fn validate_review(
    review: &Review,
    jobs: &RecordStore<Job>,
    pros: &RecordStore<Pro>,
) -> Result<(), StoreError> {
    check_id::<Review>(&review.id, review_id_pattern())?;
    check_date::<Review>(&review.id, "date", &review.date)?;
    check_reference::<Review, Job>(&review.id, "jobId", &review.job_id, jobs)?;
    check_reference::<Review, Pro>(&review.id, "proId", &review.pro_id, pros)?;

    if !(1..=5).contains(&review.rating) {
        return Err(invariant::<Review>(
            &review.id,
            format!("rating {} outside 1–5", review.rating),
        ));
    }
    Ok(())
}

fn validate_earning(record: &EarningRecord, pros: &RecordStore<Pro>) -> Result<(), StoreError> {
    check_id::<EarningRecord>(&record.id, earning_id_pattern())?;
    if let Some(date) = &record.payout_date {
        check_date::<EarningRecord>(&record.id, "payoutDate", date)?;
    }
    check_reference::<EarningRecord, Pro>(&record.id, "proId", &record.pro_id, pros)?;

    let expected_fee = platform_fee(record.gross_earnings);
    if record.platform_fee != expected_fee {
        return Err(invariant::<EarningRecord>(
            &record.id,
            format!(
                "platform fee {} differs from 15% of {} ({})",
                record.platform_fee, record.gross_earnings, expected_fee
            ),
        ));
    }
    if record.net_earnings != record.gross_earnings - record.platform_fee {
        return Err(invariant::<EarningRecord>(
            &record.id,
            format!(
                "net {} is not gross {} minus fee {}",
                record.net_earnings, record.gross_earnings, record.platform_fee
            ),
        ));
    }
    Ok(())
}

// === Validation helpers ===

struct IdPattern {
    pattern: &'static str,
    regex: OnceLock<Regex>,
}

impl IdPattern {
    const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            regex: OnceLock::new(),
        }
    }

    fn is_match(&self, id: &str) -> bool {
        self.regex
            .get_or_init(|| Regex::new(self.pattern).expect("id pattern is valid"))
            .is_match(id)
    }
}

fn job_id_pattern() -> &'static IdPattern {
    static PATTERN: IdPattern = IdPattern::new(r"^JOB-\d+$");
    &PATTERN
}

fn pro_id_pattern() -> &'static IdPattern {
    static PATTERN: IdPattern = IdPattern::new(r"^PRO-\d+$");
    &PATTERN
}

fn booking_id_pattern() -> &'static IdPattern {
    static PATTERN: IdPattern = IdPattern::new(r"^BKG-\d+$");
    &PATTERN
}

fn review_id_pattern() -> &'static IdPattern {
    static PATTERN: IdPattern = IdPattern::new(r"^REV-\d+$");
    &PATTERN
}

fn earning_id_pattern() -> &'static IdPattern {
    static PATTERN: IdPattern = IdPattern::new(r"^ERN-\d+$");
    &PATTERN
}

fn check_id<R: Record>(id: &str, pattern: &IdPattern) -> Result<(), StoreError> {
    if pattern.is_match(id) {
        Ok(())
    } else {
        Err(StoreError::MalformedId {
            record_type: R::record_type(),
            id: id.to_string(),
            pattern: pattern.pattern,
        })
    }
}

fn check_date<R: Record>(id: &str, field: &'static str, value: &str) -> Result<(), StoreError> {
    if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(StoreError::MalformedDate {
            record_type: R::record_type(),
            id: id.to_string(),
            field,
            value: value.to_string(),
        })
    }
}

fn check_reference<R: Record, T: Record>(
    id: &str,
    field: &'static str,
    target_id: &str,
    targets: &RecordStore<T>,
) -> Result<(), StoreError> {
    if targets.contains(target_id) {
        Ok(())
    } else {
        Err(StoreError::DanglingReference {
            record_type: R::record_type(),
            id: id.to_string(),
            field,
            target_type: T::record_type(),
            target_id: target_id.to_string(),
        })
    }
}

fn invariant<R: Record>(id: &str, message: String) -> StoreError {
    StoreError::InvariantViolation {
        record_type: R::record_type(),
        id: id.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::job::{JobStatus, TradeCategory, UrgencyLevel};

    #[test]
    fn test_seeded_data_passes_validation() {
        let data = MarketplaceData::seeded().expect("bundled seed must validate");
        assert!(!data.jobs().is_empty());
        assert!(!data.pros().is_empty());
        assert!(!data.bookings().is_empty());
        assert!(!data.reviews().is_empty());
        assert!(!data.earnings().is_empty());
    }

    #[test]
    fn test_store_lookup_by_id() {
        let data = MarketplaceData::seeded().unwrap();
        let first = &data.jobs().records()[0];
        assert_eq!(data.jobs().get(first.id()).map(|j| j.id()), Some(first.id()));
        assert!(data.jobs().get("JOB-0000").is_none());
    }

    #[test]
    fn test_dangling_pro_reference_rejected() {
        let mut jobs = seed::jobs();
        jobs[0].pro_id = Some("PRO-999".to_string());
        jobs[0].pro = Some("Ghost Pro".to_string());
        jobs[0].status = JobStatus::Confirmed;
        jobs[0].amount = 100.0;

        let err = MarketplaceData::new(
            jobs,
            seed::pros(),
            seed::bookings(),
            seed::reviews(),
            seed::earning_records(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DanglingReference { .. }));
    }

    #[test]
    fn test_fee_mismatch_rejected() {
        let mut bookings = seed::bookings();
        bookings[0].platform_fee += 1.0;

        let err = MarketplaceData::new(
            seed::jobs(),
            seed::pros(),
            bookings,
            seed::reviews(),
            seed::earning_records(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::InvariantViolation { .. }));
    }

    #[test]
    fn test_pre_quote_job_with_amount_rejected() {
        let mut jobs = seed::jobs();
        let job = Job {
            id: "JOB-9001".to_string(),
            title: "Fence Repair".to_string(),
            category: TradeCategory::Carpentry,
            status: JobStatus::Requested,
            urgency: UrgencyLevel::Standard,
            homeowner: "Test Owner".to_string(),
            homeowner_location: "Austin, TX".to_string(),
            pro: None,
            pro_id: None,
            amount: 250.0,
            created_at: "2026-02-01".to_string(),
            scheduled_date: None,
            completed_date: None,
            description: "Requested job should carry no amount.".to_string(),
            status_note: None,
        };
        jobs.push(job);

        let err = MarketplaceData::new(
            jobs,
            seed::pros(),
            seed::bookings(),
            seed::reviews(),
            seed::earning_records(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::InvariantViolation { .. }));
    }

    #[test]
    fn test_malformed_id_rejected() {
        let mut pros = seed::pros();
        pros[0].id = "professional-1".to_string();

        // Strip records referencing the renamed pro so only the id check trips.
        let jobs: Vec<Job> = seed::jobs()
            .into_iter()
            .filter(|j| j.pro_id.as_deref() != Some("PRO-101"))
            .collect();
        let job_ids: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
        let bookings: Vec<_> = seed::bookings()
            .into_iter()
            .filter(|b| b.pro_id != "PRO-101" && job_ids.contains(&b.job_id))
            .collect();
        let reviews: Vec<_> = seed::reviews()
            .into_iter()
            .filter(|r| r.pro_id != "PRO-101" && job_ids.contains(&r.job_id))
            .collect();
        let earnings: Vec<_> = seed::earning_records()
            .into_iter()
            .filter(|e| e.pro_id != "PRO-101")
            .collect();

        let err = MarketplaceData::new(jobs, pros, bookings, reviews, earnings).unwrap_err();
        assert!(matches!(err, StoreError::MalformedId { .. }));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut reviews = seed::reviews();
        reviews[0].date = "Jan 15 2026".to_string();

        let err = MarketplaceData::new(
            seed::jobs(),
            seed::pros(),
            seed::bookings(),
            reviews,
            seed::earning_records(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::MalformedDate { .. }));
    }
}

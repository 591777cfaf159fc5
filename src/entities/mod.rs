//! Marketplace entity types
//!
//! Five record kinds flow through the dashboard: jobs, pros, bookings,
//! reviews, and per-period earning records. All are immutable once loaded;
//! the store is seeded once and read-only afterwards. Field names exposed
//! through [`crate::core::Record::field`] use the camelCase spelling of the
//! seed data's wire shape.

pub mod booking;
pub mod earning;
pub mod job;
pub mod macros;
pub mod pro;
pub mod review;

/// The marketplace commission, as a fraction of the gross amount
pub const PLATFORM_FEE_RATE: f64 = 0.15;

/// Platform fee for a gross amount: 15%, rounded to two decimal places.
///
/// Both Booking.platformFee and EarningRecord.platformFee must equal this
/// exactly for their gross amounts.
pub fn platform_fee(gross: f64) -> f64 {
    (gross * PLATFORM_FEE_RATE * 100.0).round() / 100.0
}

/// Format an ISO-8601 date string for display, e.g. "2026-02-03" → "Feb 3,
/// 2026". Ordering never parses dates; display formatting does. Unparseable
/// input is shown as-is.
pub fn format_date(iso: &str) -> String {
    match chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

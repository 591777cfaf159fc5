//! Booking: a confirmed engagement, the narrowed view of a Job once a
//! quote is accepted

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::entities::job::TradeCategory;
use crate::label_enum;
use serde::{Deserialize, Serialize};

label_enum!(
    /// Booking-level status — the subset of job statuses that describe a
    /// confirmed engagement
    BookingStatus {
        Confirmed => "Confirmed",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
);

/// A confirmed booking, created when a homeowner accepts a pro's quote.
/// Every booking corresponds to a Job in Confirmed or later status.
///
/// Invariant (checked at seed load): `platform_fee` equals 15% of `amount`
/// rounded to two decimals (see [`crate::entities::platform_fee`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// References `Job::id`
    pub job_id: String,
    /// References `Pro::id`
    pub pro_id: String,
    pub pro_name: String,
    pub homeowner: String,
    pub category: TradeCategory,
    /// Service label shown in the table, e.g. "Water Heater Install"
    pub service: String,
    pub status: BookingStatus,
    /// Total amount charged to the homeowner in USD
    pub amount: f64,
    /// Platform service fee (15% of amount)
    pub platform_fee: f64,
    pub scheduled_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl Record for Booking {
    fn record_type() -> &'static str {
        "booking"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "proName", "homeowner", "service", "jobId"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "jobId" => Some(self.job_id.as_str().into()),
            "proId" => Some(self.pro_id.as_str().into()),
            "proName" => Some(self.pro_name.as_str().into()),
            "homeowner" => Some(self.homeowner.as_str().into()),
            "category" => Some(self.category.label().into()),
            "service" => Some(self.service.as_str().into()),
            "status" => Some(self.status.label().into()),
            "amount" => Some(self.amount.into()),
            "platformFee" => Some(self.platform_fee.into()),
            "scheduledDate" => Some(self.scheduled_date.as_str().into()),
            "completedDate" => Some(self.completed_date.as_deref().into()),
            _ => None,
        }
    }
}

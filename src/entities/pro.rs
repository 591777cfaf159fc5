//! Pro: a verified service professional registered on the platform

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::entities::job::TradeCategory;
use crate::label_enum;
use serde::{Deserialize, Serialize};

label_enum!(
    /// Account standing for a pro on the platform
    ProStatus {
        Active => "Active",
        PendingVerification => "Pending Verification",
        Suspended => "Suspended",
        LicenseExpired => "License Expired",
        BackgroundCheckFailed => "Background Check Failed",
    }
);

/// A service professional.
///
/// Invariant (checked at seed load): `rating == 0` exactly when
/// `review_count == 0` — a rating of 0 means "unrated", never "terrible".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pro {
    pub id: String,
    pub name: String,
    /// Registered business name, e.g. "Apex Plumbing & Drain LLC"
    pub business_name: String,
    pub trade: TradeCategory,
    pub status: ProStatus,
    /// Weighted average of all received reviews (1.0–5.0; 0 = unrated)
    pub rating: f64,
    pub review_count: u32,
    pub jobs_completed: u32,
    /// Base hourly rate in USD
    pub hourly_rate: f64,
    /// Human-readable service territory, e.g. "Austin Metro — 15mi radius"
    pub service_area: String,
    /// Average response time string, e.g. "45 min avg"
    pub response_time: String,
    pub licensed: bool,
    pub insured: bool,
    pub background_check: bool,
    pub joined_date: String,
    /// Two-letter initials for avatar fallback
    pub avatar_initials: String,
    /// Percentage of accepted jobs completed without cancellation (0–100)
    pub completion_rate: f64,
}

impl Record for Pro {
    fn record_type() -> &'static str {
        "pro"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "businessName", "serviceArea", "id"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "businessName" => Some(self.business_name.as_str().into()),
            "trade" => Some(self.trade.label().into()),
            "status" => Some(self.status.label().into()),
            "rating" => Some(self.rating.into()),
            "reviewCount" => Some(self.review_count.into()),
            "jobsCompleted" => Some(self.jobs_completed.into()),
            "hourlyRate" => Some(self.hourly_rate.into()),
            "serviceArea" => Some(self.service_area.as_str().into()),
            "responseTime" => Some(self.response_time.as_str().into()),
            "licensed" => Some(self.licensed.into()),
            "insured" => Some(self.insured.into()),
            "backgroundCheck" => Some(self.background_check.into()),
            "joinedDate" => Some(self.joined_date.as_str().into()),
            "completionRate" => Some(self.completion_rate.into()),
            _ => None,
        }
    }
}

//! Job: a homeowner's service request, from posting through resolution

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::label_enum;
use serde::{Deserialize, Serialize};

label_enum!(
    /// The 10 trade categories available on the platform
    TradeCategory {
        Plumbing => "Plumbing",
        Electrical => "Electrical",
        Hvac => "HVAC",
        Moving => "Moving",
        Painting => "Painting",
        Landscaping => "Landscaping",
        Cleaning => "Cleaning",
        Handyman => "Handyman",
        Roofing => "Roofing",
        Carpentry => "Carpentry",
    }
);

label_enum!(
    /// Lifecycle status of a job posting from creation through resolution
    JobStatus {
        Requested => "Requested",
        Quoted => "Quoted",
        Confirmed => "Confirmed",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
        Disputed => "Disputed",
        NoShow => "No-Show",
    }
);

impl JobStatus {
    /// Requested/Quoted: no quote has been accepted yet, so the job carries
    /// no amount and no assigned pro
    pub fn is_pre_quote(self) -> bool {
        matches!(self, JobStatus::Requested | JobStatus::Quoted)
    }

    /// Confirmed or later in the lifecycle (a booking exists)
    pub fn is_confirmed_or_later(self) -> bool {
        !self.is_pre_quote()
    }
}

label_enum!(
    /// Urgency tier set by the homeowner when posting a job.
    /// Emergency jobs carry a 2x rate multiplier.
    UrgencyLevel {
        Standard => "Standard",
        SameDay => "Same-Day",
        Emergency => "Emergency",
    }
);

/// A job request posted by a homeowner.
///
/// Invariants (checked at seed load): `amount` is 0 only while the status
/// is pre-quote, and `pro`/`pro_id` are present only from Confirmed onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    /// Short descriptive title, e.g. "Drain Cleaning — Kitchen Sink"
    pub title: String,
    pub category: TradeCategory,
    pub status: JobStatus,
    pub urgency: UrgencyLevel,
    pub homeowner: String,
    pub homeowner_location: String,
    /// Assigned pro's display name; absent until a quote is accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro: Option<String>,
    /// Assigned pro's id, for relational lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_id: Option<String>,
    /// Job amount in USD (includes the Emergency 2x multiplier when set)
    pub amount: f64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    pub description: String,
    /// Notes on cancellation or dispute reason, present when relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
}

impl Record for Job {
    fn record_type() -> &'static str {
        "job"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "title", "homeowner", "pro"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "category" => Some(self.category.label().into()),
            "status" => Some(self.status.label().into()),
            "urgency" => Some(self.urgency.label().into()),
            "homeowner" => Some(self.homeowner.as_str().into()),
            "homeownerLocation" => Some(self.homeowner_location.as_str().into()),
            "pro" => Some(self.pro.as_deref().into()),
            "proId" => Some(self.pro_id.as_deref().into()),
            "amount" => Some(self.amount.into()),
            "createdAt" => Some(self.created_at.as_str().into()),
            "scheduledDate" => Some(self.scheduled_date.as_deref().into()),
            "completedDate" => Some(self.completed_date.as_deref().into()),
            "description" => Some(self.description.as_str().into()),
            _ => None,
        }
    }
}

//! Review: homeowner feedback tied to one completed job

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::entities::job::TradeCategory;
use serde::{Deserialize, Serialize};

/// A homeowner review left after a completed job.
///
/// `rating` is an integer 1–5 (checked at seed load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// References `Job::id`
    pub job_id: String,
    pub pro_name: String,
    /// References `Pro::id`
    pub pro_id: String,
    pub homeowner: String,
    pub category: TradeCategory,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub service: String,
}

/// The rating scale, in the order the breakdown bars display it
pub const RATING_DOMAIN: &[i64] = &[5, 4, 3, 2, 1];

impl Record for Review {
    fn record_type() -> &'static str {
        "review"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["proName", "homeowner", "service", "comment"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "jobId" => Some(self.job_id.as_str().into()),
            "proName" => Some(self.pro_name.as_str().into()),
            "proId" => Some(self.pro_id.as_str().into()),
            "homeowner" => Some(self.homeowner.as_str().into()),
            "category" => Some(self.category.label().into()),
            "rating" => Some(FieldValue::Integer(i64::from(self.rating))),
            "comment" => Some(self.comment.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            "service" => Some(self.service.as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Review {
        Review {
            id: "REV-301".to_string(),
            job_id: "JOB-1042".to_string(),
            pro_name: "Marcus Reed".to_string(),
            pro_id: "PRO-101".to_string(),
            homeowner: "Dana Whitfield".to_string(),
            category: TradeCategory::Plumbing,
            rating: 5,
            comment: "Fast, clean, explained everything.".to_string(),
            date: "2026-01-15".to_string(),
            service: "Drain Cleaning".to_string(),
        }
    }

    #[test]
    fn test_rating_exposed_as_integer() {
        assert_eq!(sample().field("rating"), Some(FieldValue::Integer(5)));
    }

    #[test]
    fn test_comment_is_searchable() {
        assert!(Review::searchable_fields().contains(&"comment"));
    }

    #[test]
    fn test_rating_domain_covers_scale() {
        assert_eq!(RATING_DOMAIN, &[5, 4, 3, 2, 1]);
    }
}

//! EarningRecord: a pro's aggregated earnings for one payout period

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::entities::job::TradeCategory;
use crate::label_enum;
use serde::{Deserialize, Serialize};

label_enum!(
    /// Payout status for pro earnings
    PayoutStatus {
        Paid => "Paid",
        Processing => "Processing",
        Scheduled => "Scheduled",
        InstantPay => "Instant Pay",
    }
);

/// One pro's earnings for one period.
///
/// Invariants (checked at seed load): `platform_fee` is 15% of
/// `gross_earnings` rounded to two decimals, and `net_earnings` equals
/// `gross_earnings − platform_fee` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningRecord {
    pub id: String,
    /// References `Pro::id`
    pub pro_id: String,
    pub pro_name: String,
    pub category: TradeCategory,
    /// Human-readable period label, e.g. "Feb 2026"
    pub period: String,
    pub jobs_completed: u32,
    pub gross_earnings: f64,
    pub platform_fee: f64,
    pub net_earnings: f64,
    pub payout_status: PayoutStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_date: Option<String>,
}

impl Record for EarningRecord {
    fn record_type() -> &'static str {
        "earning_record"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["proName", "id", "category"]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "proId" => Some(self.pro_id.as_str().into()),
            "proName" => Some(self.pro_name.as_str().into()),
            "category" => Some(self.category.label().into()),
            "period" => Some(self.period.as_str().into()),
            "jobsCompleted" => Some(self.jobs_completed.into()),
            "grossEarnings" => Some(self.gross_earnings.into()),
            "platformFee" => Some(self.platform_fee.into()),
            "netEarnings" => Some(self.net_earnings.into()),
            "payoutStatus" => Some(self.payout_status.label().into()),
            "payoutDate" => Some(self.payout_date.as_deref().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::platform_fee;

    fn sample() -> EarningRecord {
        EarningRecord {
            id: "ERN-701".to_string(),
            pro_id: "PRO-101".to_string(),
            pro_name: "Marcus Reed".to_string(),
            category: TradeCategory::Plumbing,
            period: "Jan 2026".to_string(),
            jobs_completed: 14,
            gross_earnings: 6840.0,
            platform_fee: 1026.0,
            net_earnings: 5814.0,
            payout_status: PayoutStatus::Paid,
            payout_date: Some("2026-02-01".to_string()),
        }
    }

    #[test]
    fn test_fee_and_net_derivations() {
        let record = sample();
        assert_eq!(record.platform_fee, platform_fee(record.gross_earnings));
        assert_eq!(record.net_earnings, record.gross_earnings - record.platform_fee);
    }

    #[test]
    fn test_category_searchable_per_earnings_page() {
        assert!(EarningRecord::searchable_fields().contains(&"category"));
        assert_eq!(sample().field("category"), Some("Plumbing".into()));
    }

    #[test]
    fn test_missing_payout_date_is_null() {
        let mut record = sample();
        record.payout_date = None;
        assert_eq!(record.field("payoutDate"), Some(FieldValue::Null));
    }
}

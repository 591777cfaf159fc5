//! Dashboard home: recent activity plus platform-wide stat cards.
//!
//! Everything here reads full-store scope; the dashboard has no filters.

use crate::core::error::QueryError;
use crate::core::view::QueryState;
use crate::entities::job::{Job, JobStatus};
use crate::entities::pro::ProStatus;
use crate::pages::jobs;
use crate::store::MarketplaceData;

/// The stat cards across the top of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformStats {
    /// Jobs currently confirmed or in progress
    pub active_jobs: usize,
    pub active_pros: usize,
    /// Mean rating across all reviews; 0.0 before the first review
    pub average_rating: f64,
    /// Gross amount across completed jobs
    pub completed_revenue: f64,
    /// Completed share of jobs that reached a booking; 0.0 with no bookings
    pub completion_rate: f64,
    /// Disputed share of jobs that reached a booking; 0.0 with no bookings
    pub dispute_rate: f64,
}

pub fn platform_stats(data: &MarketplaceData) -> Result<PlatformStats, QueryError> {
    let jobs = data.jobs().full_scope();
    let pros = data.pros().full_scope();
    let reviews = data.reviews().full_scope();

    let booked = jobs.count_where(|j| j.status.is_confirmed_or_later());
    let completed = jobs.count_where(|j| j.status == JobStatus::Completed);
    let disputed = jobs.count_where(|j| j.status == JobStatus::Disputed);
    let rate = |part: usize| {
        if booked == 0 {
            0.0
        } else {
            part as f64 / booked as f64
        }
    };

    let mut completed_revenue = 0.0;
    for job in data.jobs().records() {
        if job.status == JobStatus::Completed {
            completed_revenue += job.amount;
        }
    }

    Ok(PlatformStats {
        active_jobs: jobs.count_where(|j| {
            matches!(j.status, JobStatus::Confirmed | JobStatus::InProgress)
        }),
        active_pros: pros.count_where(|p| p.status == ProStatus::Active),
        average_rating: reviews.average("rating")?,
        completed_revenue,
        completion_rate: rate(completed),
        dispute_rate: rate(disputed),
    })
}

/// The most recently created jobs, newest first
pub fn recent_jobs(data: &MarketplaceData, limit: usize) -> Result<Vec<Job>, QueryError> {
    let state = QueryState::new(jobs::initial_sort());
    let mut rows = jobs::query(data.jobs(), &state)?.rows;
    rows.truncate(limit);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_jobs_newest_first_and_bounded() {
        let data = MarketplaceData::seeded().unwrap();
        let recent = recent_jobs(&data, 5).unwrap();
        assert_eq!(recent.len(), 5);
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_recent_jobs_limit_beyond_store_returns_all() {
        let data = MarketplaceData::seeded().unwrap();
        let recent = recent_jobs(&data, 10_000).unwrap();
        assert_eq!(recent.len(), data.jobs().len());
    }

    #[test]
    fn test_platform_stats_on_seed() {
        let data = MarketplaceData::seeded().unwrap();
        let stats = platform_stats(&data).unwrap();
        assert!(stats.active_jobs > 0);
        assert!(stats.active_pros > 0);
        assert!(stats.average_rating > 0.0 && stats.average_rating <= 5.0);
        assert!(stats.completed_revenue > 0.0);
        assert!(stats.completion_rate > 0.0 && stats.completion_rate <= 1.0);
        assert!(stats.dispute_rate < stats.completion_rate);
    }

    #[test]
    fn test_rates_guard_empty_stores() {
        let data = MarketplaceData::new(vec![], vec![], vec![], vec![], vec![]).unwrap();
        let stats = platform_stats(&data).unwrap();
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.dispute_rate, 0.0);
        assert_eq!(stats.average_rating, 0.0);
    }
}

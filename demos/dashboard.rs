//! Renders the dashboard home to stdout: platform stat cards, recent
//! activity, and each page's summary aggregates.
//!
//! ```sh
//! RUST_LOG=tradeboard=debug cargo run --example dashboard
//! ```

use anyhow::Result;
use tradeboard::pages::{bookings, dashboard, earnings, reviews};
use tradeboard::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data = MarketplaceData::seeded()?;

    let stats = dashboard::platform_stats(&data)?;
    println!("=== Platform ===");
    println!("Active jobs:        {}", stats.active_jobs);
    println!("Active pros:        {}", stats.active_pros);
    println!("Average rating:     {:.2}", stats.average_rating);
    println!("Completed revenue:  ${:.2}", stats.completed_revenue);
    println!("Completion rate:    {:.0}%", stats.completion_rate * 100.0);
    println!("Dispute rate:       {:.0}%", stats.dispute_rate * 100.0);

    println!("\n=== Recent jobs ===");
    for job in dashboard::recent_jobs(&data, 5)? {
        println!(
            "{}  {:<40} {:<12} {}",
            job.id,
            job.title,
            job.status.label(),
            format_date(&job.created_at)
        );
    }

    let cards = bookings::summary(data.bookings())?;
    println!("\n=== Bookings ===");
    println!("Booked total:   ${:.2}", cards.booked_total);
    println!("Platform fees:  ${:.2}", cards.platform_fees);
    println!("Completed:      {}", cards.completed);
    println!("In progress:    {}", cards.in_progress);

    let money = earnings::platform_summary(data.earnings())?;
    println!("\n=== Earnings ===");
    println!("Gross:          ${:.2}", money.total_gross);
    println!("Fees:           ${:.2}", money.total_fees);
    println!("Net:            ${:.2}", money.total_net);
    println!("Jobs:           {}", money.total_jobs);
    println!("Avg per job:    ${:.2}", money.average_per_job);

    let state = QueryState::new(reviews::initial_sort());
    let view = reviews::query(data.reviews(), &state)?;
    let breakdown = reviews::rating_breakdown(data.reviews(), &state, &view.rows)?;
    println!("\n=== Reviews ({:.2} average) ===", breakdown.average);
    for (stars, count) in &breakdown.counts {
        println!("{stars} stars  {}", "#".repeat(*count));
    }

    Ok(())
}

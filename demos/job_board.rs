//! Walks the job board through a typical interaction: search, filter, and
//! a couple of header clicks.
//!
//! ```sh
//! RUST_LOG=tradeboard=debug cargo run --example job_board
//! ```

use anyhow::Result;
use tradeboard::pages::jobs;
use tradeboard::prelude::*;

fn print_view(label: &str, view: &pages::PageView<Job>) {
    println!("\n--- {label} (showing {} of {}) ---", view.visible(), view.total);
    for job in &view.rows {
        println!(
            "{}  {:<40} {:<12} {:<12} ${:>8.2}  {}",
            job.id,
            job.title,
            job.category.label(),
            job.status.label(),
            job.amount,
            job.created_at
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data = MarketplaceData::seeded()?;
    let mut state = QueryState::new(jobs::initial_sort());

    let view = jobs::query(data.jobs(), &state)?;
    print_view("Newest first", &view);

    state.filter.search = "drain".to_string();
    let view = jobs::query(data.jobs(), &state)?;
    print_view("Search: drain", &view);

    state.filter.search.clear();
    state.filter.select("category", "Plumbing");
    state.filter.select("status", "Completed");
    let view = jobs::query(data.jobs(), &state)?;
    print_view("Completed plumbing", &view);

    // First click on the amount header sorts largest first, second flips it.
    state.sort.toggle("amount", jobs::COLUMNS, Job::record_type())?;
    let view = jobs::query(data.jobs(), &state)?;
    print_view("By amount, descending", &view);

    state.sort.toggle("amount", jobs::COLUMNS, Job::record_type())?;
    let view = jobs::query(data.jobs(), &state)?;
    print_view("By amount, ascending", &view);

    Ok(())
}

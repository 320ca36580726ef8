//! Console consumer of the aggregation engine.
//!
//! Stands in for the presentation layer: it receives the summary tables as
//! read-only data, sorts explicitly (map order is not part of the contract)
//! and formats cents into dollars at this boundary only.

use std::sync::Arc;

use anyhow::Result;
use contracts::summaries::{ArchetypeSale, ItemSale, VenueSale};
use engine::format::format_cents;
use engine::{config, loader, Insights};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_logging()?;

    let config = config::load_config()?;
    let path = config::dataset_path(&config);
    let dataset = loader::load_dataset(&path)?;
    let insights = Insights::new(Arc::new(dataset));
    tracing::info!(
        orders = insights.dataset().orders.len(),
        "aggregating order stream"
    );

    println!(
        "Venue sales report — generated {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    print_quick_summary(&insights);
    print_menu_sales(&insights);
    print_venue_sales(&insights);
    print_archetype_sales(&insights);

    Ok(())
}

fn init_logging() -> Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("reporter.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn print_quick_summary(insights: &Insights) {
    let summary = insights.quick_summary();
    println!("\n== Quick summary ==");
    println!("{} unique users identified", summary.user_count);
    println!("{} total transactions", summary.transaction_count);
    println!("${} settled in transactions", format_cents(summary.transaction_cents));
    println!("${} earned on receipts", format_cents(summary.receipt_cents));
    println!("${} gained from tips", format_cents(summary.tip_cents));
}

fn print_menu_sales(insights: &Insights) {
    println!("\n== Sales by menu item ==");
    let mut rows: Vec<&ItemSale> = insights.sales_by_item().values().collect();
    rows.sort_by(|a, b| {
        b.total_revenue_cents
            .cmp(&a.total_revenue_cents)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });

    for row in rows {
        println!(
            "{:<24} {:<10} qty {:>5}   ${:>12}",
            row.name,
            row.item_type,
            row.total_qty,
            format_cents(row.total_revenue_cents)
        );
        let mut venues: Vec<_> = row.per_venue.iter().collect();
        venues.sort_by_key(|(venue_id, _)| venue_id.as_str());
        for (venue_id, slice) in venues {
            println!(
                "    at {:<18} qty {:>5}   ${:>12}",
                venue_id,
                slice.qty,
                format_cents(slice.revenue_cents)
            );
        }
    }
}

fn print_venue_sales(insights: &Insights) {
    println!("\n== Sales by venue ==");
    let mut rows: Vec<&VenueSale> = insights.sales_by_venue().values().collect();
    rows.sort_by(|a, b| {
        b.total_revenue_cents
            .cmp(&a.total_revenue_cents)
            .then_with(|| a.venue_id.cmp(&b.venue_id))
    });

    for row in rows {
        println!(
            "{:<24} {:<10} qty {:>5}   ${:>12}",
            row.name,
            row.category,
            row.total_qty,
            format_cents(row.total_revenue_cents)
        );
        let mut items: Vec<_> = row.items_sold.iter().collect();
        items.sort_by_key(|(item_id, _)| item_id.as_str());
        for (item_id, slice) in items {
            println!(
                "    {:<21} qty {:>5}   ${:>12}",
                item_id,
                slice.qty,
                format_cents(slice.revenue_cents)
            );
        }
    }
}

fn print_archetype_sales(insights: &Insights) {
    println!("\n== Sales by archetype ==");
    let mut rows: Vec<&ArchetypeSale> = insights.sales_by_archetype().values().collect();
    rows.sort_by(|a, b| {
        b.total_revenue_cents
            .cmp(&a.total_revenue_cents)
            .then_with(|| a.archetype_id.cmp(&b.archetype_id))
    });

    for row in rows {
        println!(
            "{:<24} qty {:>5}   ${:>12}",
            row.archetype_name,
            row.total_qty,
            format_cents(row.total_revenue_cents)
        );
        let mut items: Vec<_> = row.items_sold.iter().collect();
        items.sort_by_key(|(item_id, _)| item_id.as_str());
        for (item_id, slice) in items {
            println!(
                "    {:<21} qty {:>5}   ${:>12}",
                item_id,
                slice.qty,
                format_cents(slice.revenue_cents)
            );
        }
    }
}

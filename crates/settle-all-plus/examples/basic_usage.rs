//! Basic usage example demonstrating batch settling with summary accessors
//!
//! This example shows how to:
//! 1. Wrap pending computations as batch items
//! 2. Wait for all of them to settle without short-circuiting on failures
//! 3. Read counts and all/any summaries from the settled view
//! 4. Walk the raw outcomes in input order

use settle_all_plus::{BatchItem, settle_all_plus};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Starting batch settle demo");

    let items = vec![
        create_fetch_item("Database query", 200, true),
        create_fetch_item("API call", 300, false),
        create_fetch_item("File read", 150, true),
        create_fetch_item("Cache lookup", 50, true),
    ];

    println!("📋 Created {} items", items.len());

    println!("\n⏱️ Waiting for every item to settle...");
    let start_time = std::time::Instant::now();

    let view = settle_all_plus(items, None)?.await;

    let duration = start_time.elapsed();
    println!("\n✅ Batch settled in {:?}", duration);

    println!("\n📈 Results:");
    println!("  Total items: {}", view.raw_result().len());
    println!("  Fulfilled: {}", view.fulfilled_count());
    println!("  Rejected: {}", view.rejected_count());
    println!("  All fulfilled: {}", view.are_all_fulfilled());
    println!("  Any rejected: {}", view.has_rejected());

    for (index, outcome) in view.raw_result().iter().enumerate() {
        println!("  Item {}: {}", index, outcome.status());
    }

    for reason in view.rejection_reasons() {
        println!("  ⚠️ {}", reason);
    }

    Ok(())
}

fn create_fetch_item(
    name: &str,
    delay_ms: u64,
    succeeds: bool,
) -> BatchItem<'static, String, String> {
    let name = name.to_string();
    BatchItem::pending(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        if succeeds {
            Ok(format!("{name} finished after {delay_ms}ms"))
        } else {
            Err(format!("{name} failed after {delay_ms}ms"))
        }
    })
}

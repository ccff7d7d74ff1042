use settle_all_plus::SettleBatch;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let start = Instant::now();

    // Items settle concurrently and nothing aborts on the rejection
    let batch = SettleBatch::new()
        .pending(async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            println!("first item fulfilled after 100ms");
            Ok::<&str, String>("first")
        })
        .pending(async {
            tokio::time::sleep(Duration::from_millis(150)).await;
            println!("second item rejected after 150ms");
            Err("second item gave up".to_string())
        })
        .pending(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            println!("third item fulfilled after 50ms");
            Ok("third")
        });

    let view = batch.settle().unwrap().await;

    assert!(start.elapsed().as_millis() < 210);
    assert_eq!(2, view.fulfilled_count());
    assert_eq!(1, view.rejected_count());
    assert!(view.has_rejected());
    assert!(!view.are_all_fulfilled());
    // Output shows ~150ms total (the slowest item), demonstrating that the
    // whole batch is driven concurrently by the single settle wait
}

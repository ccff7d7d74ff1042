//! Simple integration tests for settle-all-plus library
//! Tests the public API as an external user would use it

use settle_all_plus::{BatchItem, SettleBatch, settle_all_plus};
use std::time::{Duration, Instant};
use tokio::time::sleep;

fn fulfilled_after(delay_ms: u64, value: u32) -> BatchItem<'static, u32, String> {
    BatchItem::pending(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        Ok(value)
    })
}

fn rejected_after(delay_ms: u64, reason: &str) -> BatchItem<'static, u32, String> {
    let reason = reason.to_string();
    BatchItem::pending(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        Err(reason)
    })
}

/// Test a batch where every item fulfills
#[tokio::test]
async fn test_all_fulfilled() {
    let items = vec![
        fulfilled_after(10, 1),
        fulfilled_after(20, 2),
        fulfilled_after(5, 3),
        fulfilled_after(15, 4),
    ];

    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;

    assert_eq!(view.raw_result().len(), 4);
    assert_eq!(view.fulfilled_count(), 4);
    assert_eq!(view.rejected_count(), 0);
    assert!(view.are_all_fulfilled());
    assert!(!view.are_all_rejected());
    assert!(view.has_fulfilled());
    assert!(!view.has_rejected());
}

/// Test a batch with both fulfilled and rejected items
#[tokio::test]
async fn test_mixed_results() {
    let items = vec![
        fulfilled_after(10, 1),
        fulfilled_after(5, 2),
        rejected_after(15, "first failure"),
        rejected_after(5, "second failure"),
        rejected_after(10, "third failure"),
    ];

    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;

    assert_eq!(view.raw_result().len(), 5);
    assert_eq!(view.fulfilled_count(), 2);
    assert_eq!(view.rejected_count(), 3);
    assert!(!view.are_all_fulfilled());
    assert!(!view.are_all_rejected());
    assert!(view.has_fulfilled());
    assert!(view.has_rejected());
}

/// Test a batch where every item rejects
#[tokio::test]
async fn test_all_rejected() {
    let items: Vec<BatchItem<u32, String>> =
        (0..5).map(|i| rejected_after(5, &format!("failure {i}"))).collect();

    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;

    assert_eq!(view.raw_result().len(), 5);
    assert_eq!(view.fulfilled_count(), 0);
    assert_eq!(view.rejected_count(), 5);
    assert!(!view.are_all_fulfilled());
    assert!(view.are_all_rejected());
    assert!(!view.has_fulfilled());
    assert!(view.has_rejected());
}

/// Test an empty batch
#[tokio::test]
async fn test_empty_batch() {
    let items: Vec<BatchItem<u32, String>> = vec![];

    let view = settle_all_plus(items, None)
        .expect("Empty batch should pass validation")
        .await;

    assert!(view.raw_result().is_empty());
    assert_eq!(view.fulfilled_count(), 0);
    assert_eq!(view.rejected_count(), 0);
    assert!(!view.has_fulfilled());
    assert!(!view.has_rejected());
    assert!(!view.are_all_fulfilled());
    assert!(!view.are_all_rejected());
}

/// Test that outcome order matches input order even when completion order differs
#[tokio::test]
async fn test_order_matches_input() {
    // later items complete first
    let items = vec![
        fulfilled_after(80, 0),
        fulfilled_after(60, 1),
        rejected_after(40, "middle failure"),
        fulfilled_after(20, 3),
    ];

    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;

    assert_eq!(view.raw_result()[0].value(), Some(&0));
    assert_eq!(view.raw_result()[1].value(), Some(&1));
    assert_eq!(
        view.raw_result()[2].reason(),
        Some(&"middle failure".to_string())
    );
    assert_eq!(view.raw_result()[3].value(), Some(&3));
}

/// Test that the batch settles concurrently
#[tokio::test]
async fn test_items_settle_in_parallel() {
    // Create three items that each take 50ms
    let items: Vec<BatchItem<u32, String>> = (0..3).map(|i| fulfilled_after(50, i)).collect();

    let start = Instant::now();
    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;
    let duration = start.elapsed();

    // Should complete in roughly 50ms (concurrent) rather than 150ms (sequential)
    assert!(
        duration < Duration::from_millis(100),
        "Items should settle in parallel"
    );
    assert_eq!(view.fulfilled_count(), 3);
}

/// Test that an early rejection does not cut the wait short
#[tokio::test]
async fn test_no_short_circuit_on_failure() {
    let items = vec![
        rejected_after(0, "instant failure"),
        fulfilled_after(40, 1),
        fulfilled_after(80, 2),
    ];

    let view = settle_all_plus(items, None)
        .expect("Validation should pass")
        .await;

    // the slow items still produced their outcomes
    assert_eq!(view.raw_result().len(), 3);
    assert_eq!(view.fulfilled_count(), 2);
    assert_eq!(view.rejected_count(), 1);
    assert_eq!(view.raw_result()[2].value(), Some(&2));
}

/// Test builder pattern for collecting items
#[tokio::test]
async fn test_builder_pattern() {
    let batch: SettleBatch<u32, String> = SettleBatch::new()
        .pending(async { Ok(42) })
        .pending(async { Ok(84) });

    assert_eq!(batch.len(), 2);

    let view = batch.settle().expect("Validation should pass").await;

    assert_eq!(view.raw_result().len(), 2);
    assert!(view.are_all_fulfilled());

    let values: Vec<u32> = view.fulfilled_values().copied().collect();
    assert_eq!(values, vec![42, 84]);
}

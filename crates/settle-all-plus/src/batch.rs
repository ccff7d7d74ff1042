use crate::{BatchItem, SettleError, SettleFuture, SettleOptions, settle_all_plus};
use std::future::Future;

/// Ordered batch of computations, collected ahead of a single settle wait.
pub struct SettleBatch<'a, T, E> {
    items: Vec<BatchItem<'a, T, E>>,
    options: SettleOptions,
}

impl<'a, T: 'a, E: 'a> SettleBatch<'a, T, E> {
    pub fn new() -> Self {
        Self::with_options(SettleOptions::default())
    }

    pub fn with_options(options: SettleOptions) -> Self {
        Self {
            items: vec![],
            options,
        }
    }

    pub fn insert(mut self, item: BatchItem<'a, T, E>) -> Self {
        self.items.push(item);
        self
    }

    /// Add an item to the batch
    pub fn push(&mut self, item: BatchItem<'a, T, E>) {
        self.items.push(item);
    }

    /// Convenience method to add a pending computation
    pub fn pending<F: Future<Output = Result<T, E>> + 'a>(self, fut: F) -> Self {
        self.insert(BatchItem::pending(fut))
    }

    /// Convenience method to add an already-known value
    pub fn immediate(self, value: T) -> Self {
        self.insert(BatchItem::immediate(value))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start the settle wait for every collected item.
    pub fn settle(self) -> Result<SettleFuture<'a, T, E>, SettleError> {
        settle_all_plus(self.items, Some(self.options))
    }
}

impl<'a, T: 'a, E: 'a> Default for SettleBatch<'a, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

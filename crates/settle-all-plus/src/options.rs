use derive_getters::Getters;

/// Batch-level configuration.
#[derive(Getters, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleOptions {
    /// When true, every batch item must be a pending future; an immediate
    /// value is refused before any waiting starts.
    check_input_for_futures: bool,
}

impl SettleOptions {
    pub fn new(check_input_for_futures: bool) -> Self {
        Self {
            check_input_for_futures,
        }
    }

    /// Convenience constructor for batches that mix futures and plain values
    pub fn skip_future_check() -> Self {
        Self::new(false)
    }
}

impl Default for SettleOptions {
    fn default() -> Self {
        Self::new(true)
    }
}

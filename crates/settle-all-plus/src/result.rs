use crate::Outcome;
use derive_getters::Getters;

/// Read-only view over the settled outcomes of a batch.
///
/// Every summary is computed from the wrapped list on each read; the list is
/// in input order and owned exclusively by the view.
#[derive(Getters, Debug)]
pub struct SettledView<T, E> {
    raw_result: Vec<Outcome<T, E>>,
}

impl<T, E> SettledView<T, E> {
    pub(crate) fn new(raw_result: Vec<Outcome<T, E>>) -> Self {
        Self { raw_result }
    }

    pub fn fulfilled_count(&self) -> usize {
        self.raw_result.iter().filter(|o| o.is_fulfilled()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.raw_result.iter().filter(|o| o.is_rejected()).count()
    }

    /// Returns true if at least one outcome is fulfilled
    pub fn has_fulfilled(&self) -> bool {
        self.raw_result.iter().any(Outcome::is_fulfilled)
    }

    /// Returns true if at least one outcome is rejected
    pub fn has_rejected(&self) -> bool {
        self.raw_result.iter().any(Outcome::is_rejected)
    }

    /// Returns true if the batch is non-empty and every outcome is fulfilled.
    /// An empty batch is neither all-fulfilled nor all-rejected.
    pub fn are_all_fulfilled(&self) -> bool {
        !self.raw_result.is_empty() && self.raw_result.iter().all(Outcome::is_fulfilled)
    }

    pub fn are_all_rejected(&self) -> bool {
        !self.raw_result.is_empty() && self.raw_result.iter().all(Outcome::is_rejected)
    }

    /// Returns all fulfillment values, in input order
    pub fn fulfilled_values(&self) -> impl Iterator<Item = &T> {
        self.raw_result.iter().filter_map(Outcome::value)
    }

    /// Returns all rejection reasons, in input order
    pub fn rejection_reasons(&self) -> impl Iterator<Item = &E> {
        self.raw_result.iter().filter_map(Outcome::reason)
    }

    pub fn into_raw_result(self) -> Vec<Outcome<T, E>> {
        self.raw_result
    }
}

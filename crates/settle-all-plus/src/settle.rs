use crate::{BatchItem, Outcome, SettleError, SettleOptions, SettledView};
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`settle_all_plus`]. It resolves once every item has
/// settled and carries no error channel of its own.
pub type SettleFuture<'a, T, E> = Pin<Box<dyn Future<Output = SettledView<T, E>> + 'a>>;

/// Waits for every item in the batch to reach a terminal state and wraps the
/// outcomes in a [`SettledView`].
///
/// Validation runs synchronously, before any waiting: with
/// `check_input_for_futures` enabled (the default), a [`BatchItem::Immediate`]
/// entry fails the call with [`SettleError::ImmediateItem`]. Passing `None`
/// for `options` applies the defaults.
///
/// The returned future never fails. A rejecting item does not abort the wait
/// on the others; its failure shows up only as an [`Outcome::Rejected`] entry
/// of the view, at the item's input position.
pub fn settle_all_plus<'a, T: 'a, E: 'a>(
    items: Vec<BatchItem<'a, T, E>>,
    options: Option<SettleOptions>,
) -> Result<SettleFuture<'a, T, E>, SettleError> {
    let options = options.unwrap_or_default();

    if *options.check_input_for_futures() {
        if let Some(index) = items.iter().position(BatchItem::is_immediate) {
            return Err(SettleError::ImmediateItem(index));
        }
    }

    Ok(Box::pin(async move {
        let outcomes = futures::future::join_all(items.into_iter().map(BatchItem::into_future))
            .await
            .into_iter()
            .map(Outcome::from)
            .collect();

        SettledView::new(outcomes)
    }))
}

use std::future::{self, Future};
use std::pin::Pin;

pub type PendingItem<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a>>;

/// One entry of an input batch.
pub enum BatchItem<'a, T, E> {
    /// A computation that is still running and settles on its own.
    Pending(PendingItem<'a, T, E>),

    /// A plain value, settled as fulfilled without waiting.
    Immediate(T),
}

impl<'a, T: 'a, E: 'a> BatchItem<'a, T, E> {
    pub fn pending<F: Future<Output = Result<T, E>> + 'a>(fut: F) -> Self {
        Self::Pending(Box::pin(fut))
    }

    /// Convenience method to wrap a value that needs no waiting
    pub fn immediate(value: T) -> Self {
        Self::Immediate(value)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    pub(crate) fn into_future(self) -> PendingItem<'a, T, E> {
        match self {
            Self::Pending(fut) => fut,
            Self::Immediate(value) => Box::pin(future::ready(Ok(value))),
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SettleError {
    #[error("input must be an array of futures: item {0} is an immediate value")]
    ImmediateItem(usize),
}

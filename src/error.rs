use thiserror::Error;

/// Failures raised by the few operations that opt out of the absence-based API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MayError {
    /// Forced extraction of a potential value that contains no value.
    #[error("No Value")]
    NoValue,

    /// A sequence expected to hold at most one item held more.
    #[error("Expected either no items or a single item.")]
    MultipleElements,
}

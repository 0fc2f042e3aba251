//! # NoValue Module
//!
//! A lack-of-value literal that is not tied to any element type. It converts
//! into an absent [`May<T>`] for whatever `T` the context needs and compares
//! equal to every absent potential value.

use std::hash::{Hash, Hasher};

use crate::may::{May, NO_VALUE_TAG};

/// A non-generic lack of value, equivalent to `May::<T>::none()` for every `T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoValue;

/// The untyped no-value literal.
pub const NO_VALUE: NoValue = NoValue;

impl NoValue {
    /// Determines if this potential value contains a value or not (it doesn't).
    #[inline]
    pub const fn has_value(&self) -> bool {
        false
    }
}

impl Hash for NoValue {
    /// Hashes exactly like an absent `May<T>`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        NO_VALUE_TAG.hash(state);
    }
}

impl<T> From<NoValue> for May<T> {
    #[inline]
    fn from(_: NoValue) -> Self {
        May::none()
    }
}

impl<T> PartialEq<NoValue> for May<T> {
    #[inline]
    fn eq(&self, _: &NoValue) -> bool {
        !self.has_value()
    }
}

impl<T> PartialEq<May<T>> for NoValue {
    #[inline]
    fn eq(&self, other: &May<T>) -> bool {
        !other.has_value()
    }
}

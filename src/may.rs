//! # May Module
//!
//! The [`May<T>`] container: a potential value that holds either exactly one
//! value of type `T` or no value at all.
//!
//! ## Equality
//!
//! All forms of no value are equal, including [`NoValue`](crate::NoValue),
//! `May::<T>::none()`, `May::<AnyOtherT>::none()` and `May::<T>::default()`.
//! Absent values of the same `T` compare with `==` directly; absent values of
//! unrelated element types compare through [`MayHaveValue`](crate::MayHaveValue).
//!
//! A present value holding an "empty" payload is *not* absent:
//! `May::new(None::<i32>)` has a value, and it differs from
//! `May::<Option<i32>>::none()` both in equality and in hash.
//!
//! ## Example
//!
//! ```rust
//! use may_value::{May, Maybe, NoValue};
//!
//! let parsed: May<i32> = "42".parse::<i32>().ok().into();
//! assert_eq!(parsed, 42.maybe());
//! assert_eq!(May::<i32>::none(), NoValue);
//! assert_eq!(parsed.to_string(), "Value: 42");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MayError;

/// Hash prefix shared by every absent value, whatever its element type.
pub(crate) const NO_VALUE_TAG: u8 = 0;
/// Hash prefix written before the payload of a present value.
pub(crate) const VALUE_TAG: u8 = 1;

/// A potential value that may contain no value or may contain a value of type `T`.
///
/// Instances are immutable: every combinator consumes `self` and produces a
/// new `May`. Use [`as_ref`](May::as_ref) to run a chain without giving up
/// ownership.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct May<T> {
    value: Option<T>,
}

impl<T> May<T> {
    /// Constructs a potential value containing the given value.
    ///
    /// The value is never inspected: wrapping `None`, `()` or an empty string
    /// still produces a present `May`.
    #[inline]
    pub const fn new(value: T) -> Self {
        May { value: Some(value) }
    }

    /// Returns a potential value containing no value.
    #[inline]
    pub const fn none() -> Self {
        May { value: None }
    }

    /// Determines if this potential value contains a value or not.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Matches this potential value into either a function expecting a value
    /// or a function expecting no value, returning the result.
    ///
    /// Exactly one of the two functions runs.
    #[inline]
    pub fn match_with<R, V, A>(self, on_value: V, on_absent: A) -> R
    where
        V: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.value {
            Some(value) => on_value(value),
            None => on_absent(),
        }
    }

    /// Returns the contained value, or [`MayError::NoValue`] if there is none.
    ///
    /// This is the only extraction that treats absence as a failure; prefer
    /// the `else_*` family for everything else.
    #[inline]
    pub fn force_get(self) -> Result<T, MayError> {
        self.value.ok_or(MayError::NoValue)
    }

    /// Borrows the contained value, if any.
    #[inline]
    pub const fn as_ref(&self) -> May<&T> {
        match self.value {
            Some(ref value) => May::new(value),
            None => May::none(),
        }
    }

    /// Mutably borrows the contained value, if any.
    #[inline]
    pub fn as_mut(&mut self) -> May<&mut T> {
        match self.value {
            Some(ref mut value) => May::new(value),
            None => May::none(),
        }
    }

    /// Iterates over the contained value: zero or one item.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }

    #[inline]
    pub(crate) fn into_inner(self) -> Option<T> {
        self.value
    }

    #[inline]
    pub(crate) const fn from_inner(value: Option<T>) -> Self {
        May { value }
    }
}

impl<T> Default for May<T> {
    /// The default potential value contains no value.
    #[inline]
    fn default() -> Self {
        May::none()
    }
}

impl<T: Hash> Hash for May<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            Some(value) => {
                VALUE_TAG.hash(state);
                value.hash(state);
            }
            None => NO_VALUE_TAG.hash(state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for May<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("May").field(value).finish(),
            None => f.write_str("NoValue"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for May<T> {
    /// Diagnostic rendering only: `Value: {value}` or `No Value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Value: {}", value),
            None => f.write_str("No Value"),
        }
    }
}

impl<T> IntoIterator for May<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a May<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wraps any value into a present [`May`].
///
/// ```rust
/// use may_value::{May, Maybe};
///
/// assert_eq!("5".maybe(), May::new("5"));
/// assert!(None::<String>.maybe().has_value());
/// ```
pub trait Maybe: Sized {
    /// Returns a potential value containing `self`.
    fn maybe(self) -> May<Self>;
}

impl<T> Maybe for T {
    #[inline]
    fn maybe(self) -> May<Self> {
        May::new(self)
    }
}

//! # Presence Module
//!
//! Type-erased view of potential values. [`MayHaveValue`] is implemented by
//! every `May<T>` (with a comparable `'static` element type) and by
//! [`NoValue`], which makes heterogeneous comparisons possible:
//!
//! ```rust
//! use may_value::{May, MayHaveValue, NoValue};
//!
//! let items: Vec<Box<dyn MayHaveValue>> = vec![
//!     Box::new(NoValue),
//!     Box::new(May::<i32>::none()),
//!     Box::new(May::<String>::none()),
//! ];
//! for a in &items {
//!     for b in &items {
//!         assert!(**a == **b);
//!     }
//! }
//! ```
//!
//! Two erased values are equal when they are the same `May<T>` type holding
//! equal values, or when neither holds a value.

use std::any::Any;
use std::fmt;

use crate::may::May;
use crate::no_value::NoValue;

/// A potential value of unknown type that may or may not contain a value.
///
/// Implementations must compare equal to every other implementation when
/// neither has a value.
pub trait MayHaveValue {
    /// Determines if this potential value contains a value or not.
    fn has_value(&self) -> bool;

    /// Upcast used to recover the concrete type during comparison.
    fn as_any(&self) -> &dyn Any;

    /// Compares against another potential value of any type.
    fn eq_may(&self, other: &dyn MayHaveValue) -> bool;
}

impl<T: PartialEq + 'static> MayHaveValue for May<T> {
    #[inline]
    fn has_value(&self) -> bool {
        May::has_value(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_may(&self, other: &dyn MayHaveValue) -> bool {
        match other.as_any().downcast_ref::<May<T>>() {
            Some(other) => self == other,
            // potential values containing no value are always equal
            None => !May::has_value(self) && !other.has_value(),
        }
    }
}

impl MayHaveValue for NoValue {
    #[inline]
    fn has_value(&self) -> bool {
        false
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn eq_may(&self, other: &dyn MayHaveValue) -> bool {
        !other.has_value()
    }
}

impl<T: PartialEq + 'static> May<T> {
    /// Erases the element type, for comparisons across instantiations.
    #[inline]
    pub fn as_dyn(&self) -> &dyn MayHaveValue {
        self
    }
}

impl<'a> dyn MayHaveValue + 'a {
    /// Runs `action` if this potential value does not contain a value.
    #[inline]
    pub fn else_do<F: FnOnce()>(&self, action: F) {
        if !self.has_value() {
            action();
        }
    }
}

impl<'a, 'b> PartialEq<dyn MayHaveValue + 'b> for dyn MayHaveValue + 'a {
    #[inline]
    fn eq(&self, other: &(dyn MayHaveValue + 'b)) -> bool {
        self.eq_may(other)
    }
}

impl<'a> fmt::Debug for dyn MayHaveValue + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_value() {
            f.write_str("MayHaveValue(Value)")
        } else {
            f.write_str("MayHaveValue(NoValue)")
        }
    }
}

impl<'a, T: PartialEq + 'static> PartialEq<dyn MayHaveValue + 'a> for May<T> {
    #[inline]
    fn eq(&self, other: &(dyn MayHaveValue + 'a)) -> bool {
        self.eq_may(other)
    }
}

impl<'a> PartialEq<dyn MayHaveValue + 'a> for NoValue {
    #[inline]
    fn eq(&self, other: &(dyn MayHaveValue + 'a)) -> bool {
        !other.has_value()
    }
}

//! # may_value
//!
//! Potential values: [`May<T>`] holds either exactly one value of type `T` or
//! no value at all, with combinators to transform, combine, default and
//! extract it without resorting to panics for the common "absent" case.
//!
//! - All forms of no value are equal, whatever their element type:
//!   [`NoValue`], `May::<i32>::none()` and `May::<String>::default()` all
//!   compare equal (through [`MayHaveValue`] across types) and hash alike.
//! - A present "empty" payload is still a value: `May::new(None::<i32>)` is
//!   not the same as `May::<Option<i32>>::none()`.
//! - [`MayIterator`] turns sequences into potential values and back.

pub mod error;
pub mod may;
pub mod no_value;
pub mod presence;
pub mod combinators;
pub mod sequence;

#[cfg(test)]
mod property_tests;

pub use error::*;
pub use may::*;
pub use no_value::*;
pub use presence::*;
pub use sequence::*;

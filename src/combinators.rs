//! # Combinators Module
//!
//! Transformations, combinations and defaults for [`May<T>`].
//!
//! Everything here is built on [`May::bind`] and [`May::match_with`]:
//! an absent input short-circuits without running the supplied function, and
//! a fallback is only evaluated when the input is absent.
//!
//! ## Example
//!
//! ```rust
//! use may_value::{May, Maybe};
//!
//! fn sqrt(value: f64) -> May<f64> {
//!     if value >= 0.0 { value.sqrt().maybe() } else { May::none() }
//! }
//!
//! let a: May<f64> = "16".parse::<f64>().ok().into();
//! let b: May<f64> = "-4".parse::<f64>().ok().into();
//! let difference = a.bind(sqrt).combine(b.bind(sqrt), |a, b| a - b);
//! assert!(!difference.has_value());
//! assert_eq!(difference.else_value(0.0), 0.0);
//! ```

use crate::may::May;

impl<T> May<T> {
    /// Returns the result of `f` on the contained value, or no value if there is none.
    ///
    /// `f` is not invoked when `self` is absent.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> May<U>
    where
        F: FnOnce(T) -> May<U>,
    {
        self.match_with(f, May::none)
    }

    /// Projects the contained value, if it is present, and otherwise returns no value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> May<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| May::new(f(value)))
    }

    /// Returns the same value, unless the contained value does not match the
    /// predicate in which case no value is returned.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> May<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|value| if predicate(&value) { May::new(value) } else { May::none() })
    }

    /// Chains a dependent potential value and combines both results.
    ///
    /// Returns no value if either step has no value; `result` only runs when
    /// both are present.
    pub fn select_many<M, R, S, F>(self, selector: S, result: F) -> May<R>
    where
        S: FnOnce(&T) -> May<M>,
        F: FnOnce(T, M) -> R,
    {
        self.bind(|value| selector(&value).map(|mid| result(value, mid)))
    }

    /// Combines this value with another, returning no value if either has none.
    pub fn combine<B, R, F>(self, other: May<B>, f: F) -> May<R>
    where
        F: FnOnce(T, B) -> R,
    {
        self.bind(|a| other.map(|b| f(a, b)))
    }

    /// Combines three potential values, returning no value if any has none.
    pub fn combine3<B, C, R, F>(self, b: May<B>, c: May<C>, f: F) -> May<R>
    where
        F: FnOnce(T, B, C) -> R,
    {
        self.bind(|a| b.bind(|b| c.map(|c| f(a, b, c))))
    }

    /// Combines four potential values, returning no value if any has none.
    pub fn combine4<B, C, D, R, F>(self, b: May<B>, c: May<C>, d: May<D>, f: F) -> May<R>
    where
        F: FnOnce(T, B, C, D) -> R,
    {
        self.bind(|a| b.bind(|b| c.bind(|c| d.map(|d| f(a, b, c, d)))))
    }

    /// Returns the contained value, if any, or else the given alternative value.
    #[inline]
    pub fn else_value(self, fallback: T) -> T {
        self.else_with(|| fallback)
    }

    /// Returns the contained value, if any, or else the result of `fallback`.
    ///
    /// `fallback` only runs when there is no contained value.
    #[inline]
    pub fn else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, fallback)
    }

    /// Returns this potential value if it has a value, or else `fallback`.
    #[inline]
    pub fn else_may(self, fallback: May<T>) -> May<T> {
        self.else_may_with(|| fallback)
    }

    /// Returns this potential value if it has a value, or else the result of `fallback`.
    ///
    /// `fallback` only runs when there is no contained value.
    #[inline]
    pub fn else_may_with<F>(self, fallback: F) -> May<T>
    where
        F: FnOnce() -> May<T>,
    {
        self.match_with(May::new, fallback)
    }

    /// Returns the contained value, if any, or else the type's default value.
    #[inline]
    pub fn else_default(self) -> T
    where
        T: Default,
    {
        self.else_with(T::default)
    }

    /// Runs `action` with the contained value, if any.
    ///
    /// The returned marker has a value iff the action ran, so an
    /// [`else_do`](May::else_do) can follow directly.
    #[inline]
    pub fn if_then_do<F>(self, action: F) -> May<()>
    where
        F: FnOnce(T),
    {
        self.map(action)
    }

    /// Runs `action` if this potential value does not contain a value.
    #[inline]
    pub fn else_do<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if !self.has_value() {
            action();
        }
    }

    /// Converts into the native optional form: absent becomes `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_inner()
    }

    /// Converts from the native optional form: `None` becomes no value.
    #[inline]
    pub const fn from_option(value: Option<T>) -> Self {
        May::from_inner(value)
    }
}

impl<T> May<May<T>> {
    /// Flattens a doubly-potential value, with the result containing a value
    /// only if both levels contained a value.
    #[inline]
    pub fn flatten(self) -> May<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Option<T>> for May<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        May::from_option(value)
    }
}

impl<T> From<May<T>> for Option<T> {
    #[inline]
    fn from(value: May<T>) -> Self {
        value.into_option()
    }
}

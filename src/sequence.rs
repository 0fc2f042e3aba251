//! # Sequence Module
//!
//! Bridges between sequences and potential values.
//!
//! - [`MayIterator`] adds `may_*` reductions to every iterator: each one
//!   returns no value for an empty sequence instead of panicking or asking
//!   for a seed.
//! - Iterators of `May<T>` can drop their absent items with
//!   [`values`](MayIterator::values) or be collected all-or-nothing with
//!   [`may_all`](MayIterator::may_all) / `collect::<May<_>>()`.
//! - [`MaySliceExt`] reads the ends of a slice in constant time.
//!
//! ## Example
//!
//! ```rust
//! use may_value::{May, MayIterator, NoValue};
//!
//! let inputs = ["1.5", "x", "2"];
//! let parsed = || inputs.iter().map(|s| May::from_option(s.parse::<f64>().ok()));
//!
//! assert_eq!(parsed().values().collect::<Vec<_>>(), vec![1.5, 2.0]);
//! assert_eq!(parsed().may_all(), NoValue);
//! assert_eq!((1..=5).may_aggregate(|a, b| a + b), May::new(15));
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::trace;

use crate::error::MayError;
use crate::may::May;

/// Potential-value reductions available on every [`Iterator`].
pub trait MayIterator: Iterator + Sized {
    /// Combines all the items into one aggregate item using `folder`.
    ///
    /// The fold is seeded by the first item, so `folder` never sees a
    /// synthetic identity. An empty sequence gives no value.
    #[inline]
    fn may_aggregate<F>(self, folder: F) -> May<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce(folder).into()
    }

    /// Returns the minimum item, preferring the earliest on ties.
    #[inline]
    fn may_min(self) -> May<Self::Item>
    where
        Self::Item: Ord,
    {
        self.may_min_by(Ord::cmp)
    }

    /// Returns the maximum item, preferring the earliest on ties.
    #[inline]
    fn may_max(self) -> May<Self::Item>
    where
        Self::Item: Ord,
    {
        self.may_max_by(Ord::cmp)
    }

    /// Returns the minimum item as determined by `compare`.
    fn may_min_by<F>(self, mut compare: F) -> May<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.may_aggregate(|a, b| if compare(&a, &b) != Ordering::Greater { a } else { b })
    }

    /// Returns the maximum item as determined by `compare`.
    fn may_max_by<F>(self, mut compare: F) -> May<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.may_aggregate(|a, b| if compare(&a, &b) != Ordering::Less { a } else { b })
    }

    /// Returns the item with the minimum projected key.
    ///
    /// `key` is evaluated exactly once per item.
    fn may_min_by_key<K, F>(self, mut key: F) -> May<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .may_min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, item)| item)
    }

    /// Returns the item with the maximum projected key.
    ///
    /// `key` is evaluated exactly once per item.
    fn may_max_by_key<K, F>(self, mut key: F) -> May<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .may_max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, item)| item)
    }

    /// Returns the item with the minimum projected key, ordering keys with
    /// `compare`.
    ///
    /// For keys without a total order, such as `f64` with `f64::total_cmp`.
    /// `key` is evaluated exactly once per item.
    fn may_min_by_key_with<K, F, C>(self, mut key: F, mut compare: C) -> May<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.map(|item| (key(&item), item))
            .may_min_by(|(a, _), (b, _)| compare(a, b))
            .map(|(_, item)| item)
    }

    /// Returns the item with the maximum projected key, ordering keys with
    /// `compare`.
    ///
    /// `key` is evaluated exactly once per item.
    fn may_max_by_key_with<K, F, C>(self, mut key: F, mut compare: C) -> May<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.map(|item| (key(&item), item))
            .may_max_by(|(a, _), (b, _)| compare(a, b))
            .map(|(_, item)| item)
    }

    /// Returns the first item, or no value if the sequence is empty.
    #[inline]
    fn may_first(mut self) -> May<Self::Item> {
        self.next().into()
    }

    /// Returns the last item, or no value if the sequence is empty.
    ///
    /// This may walk the whole sequence. [`MaySliceExt::may_last`] reads the
    /// end of a slice in constant time.
    #[inline]
    fn may_last(self) -> May<Self::Item> {
        self.last().into()
    }

    /// Returns the single item, no value if the sequence is empty, or
    /// [`MayError::MultipleElements`] as soon as a second item shows up.
    fn may_single(mut self) -> Result<May<Self::Item>, MayError> {
        let Some(first) = self.next() else {
            return Ok(May::none());
        };
        if self.next().is_some() {
            trace!("may_single: sequence has more than one item");
            return Err(MayError::MultipleElements);
        }
        Ok(May::new(first))
    }

    /// Lazily yields the values of the potential values in the sequence,
    /// skipping the ones that contain no value.
    #[inline]
    fn values<T>(self) -> Values<Self>
    where
        Self: Iterator<Item = May<T>>,
    {
        Values { iter: self }
    }

    /// Collects the values of all the potential values in the sequence.
    ///
    /// If any of them contains no value, the entire result is no value and
    /// the rest of the sequence is not consumed.
    fn may_all<T>(self) -> May<Vec<T>>
    where
        Self: Iterator<Item = May<T>>,
    {
        let mut values = Vec::new();
        for (index, may) in self.enumerate() {
            match may.into_option() {
                Some(value) => values.push(value),
                None => {
                    trace!("may_all: item {} has no value", index);
                    return May::none();
                }
            }
        }
        May::new(values)
    }
}

impl<I: Iterator> MayIterator for I {}

/// Iterator over the present values of an iterator of [`May<T>`].
///
/// Created by [`MayIterator::values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<I> {
    iter: I,
}

impl<I, T> Iterator for Values<I>
where
    I: Iterator<Item = May<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.by_ref().find_map(May::into_option)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> DoubleEndedIterator for Values<I>
where
    I: DoubleEndedIterator<Item = May<T>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.by_ref().rev().find_map(May::into_option)
    }
}

impl<I, T> FusedIterator for Values<I> where I: FusedIterator<Item = May<T>> {}

impl<T, V> FromIterator<May<T>> for May<V>
where
    V: FromIterator<T>,
{
    /// All-or-nothing collection: no value as soon as any item has no value.
    fn from_iter<I: IntoIterator<Item = May<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(May::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

/// Constant-time access to the ends of a slice.
pub trait MaySliceExt<T> {
    /// Returns the first element, or no value if the slice is empty.
    fn may_first(&self) -> May<&T>;

    /// Returns the last element, or no value if the slice is empty.
    fn may_last(&self) -> May<&T>;
}

impl<T> MaySliceExt<T> for [T] {
    #[inline]
    fn may_first(&self) -> May<&T> {
        self.first().into()
    }

    #[inline]
    fn may_last(&self) -> May<&T> {
        self.last().into()
    }
}

use quickcheck::{Arbitrary, Gen, QuickCheck};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{May, MayIterator, NoValue};

impl<T: Arbitrary> Arbitrary for May<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        May::from_option(Option::<T>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.clone().into_option().shrink().map(May::from_option))
    }
}

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// Kleisli arrows used by the monad laws
fn half(v: i32) -> May<i32> {
    if v % 2 == 0 { May::new(v / 2) } else { May::none() }
}

fn non_negative(v: i32) -> May<i32> {
    if v >= 0 { May::new(v) } else { May::none() }
}

// Property: bind(new(v), f) == f(v)
fn prop_left_identity(v: i32) -> bool {
    May::new(v).bind(half) == half(v)
}

// Property: bind(m, new) == m
fn prop_right_identity(m: May<i32>) -> bool {
    m.bind(May::new) == m
}

// Property: bind is associative
fn prop_bind_associative(m: May<i32>) -> bool {
    m.bind(half).bind(non_negative) == m.bind(|v| half(v).bind(non_negative))
}

// Property: map(id) == id and map composes
fn prop_map_functor(m: May<i32>) -> bool {
    let f = |v: i32| v.wrapping_mul(3);
    let g = |v: i32| v.wrapping_sub(7);
    m.map(|v| v) == m && m.map(f).map(g) == m.map(|v| g(f(v)))
}

// Property: filter agrees with its bind-based definition
fn prop_filter_is_bind(m: May<i32>) -> bool {
    let keep = |v: &i32| v % 3 == 0;
    m.filter(keep) == m.bind(|v| if keep(&v) { May::new(v) } else { May::none() })
}

// Property: flatten == bind(identity)
fn prop_flatten_is_bind(m: May<May<i32>>) -> bool {
    m.flatten() == m.bind(|inner| inner)
}

// Property: combine has a value iff both inputs do
fn prop_combine_presence(a: May<i32>, b: May<u8>) -> bool {
    let combined = a.combine(b, |x, y| (x, y));
    combined.has_value() == (a.has_value() && b.has_value())
        && combined.into_option() == a.into_option().zip(b.into_option())
}

// Property: equality is reflexive and symmetric, and equal values hash alike
fn prop_eq_hash_consistent(a: May<i32>, b: May<i32>) -> bool {
    a == a && (a == b) == (b == a) && (a != b || hash_of(&a) == hash_of(&b))
}

// Property: absence equals NoValue and hashes like it
fn prop_absence_is_no_value(m: May<String>) -> bool {
    (m == NoValue) == !m.has_value() && (m.has_value() || hash_of(&m) == hash_of(&NoValue))
}

// Property: else_value only falls back for absent input
fn prop_else_value(m: May<i32>, fallback: i32) -> bool {
    m.else_value(fallback) == m.into_option().unwrap_or(fallback)
}

// Property: may_aggregate is reduce seeded by the first element
fn prop_aggregate_matches_reduce(items: Vec<i64>) -> bool {
    items.iter().copied().may_aggregate(i64::wrapping_add).into_option()
        == items.iter().copied().reduce(i64::wrapping_add)
}

// Property: may_all has a value iff every item has one
fn prop_may_all(items: Vec<May<u8>>) -> bool {
    let all = items.iter().copied().may_all();
    let expected: Option<Vec<u8>> = items.iter().map(|m| m.into_option()).collect();
    all.into_option() == expected
}

// Property: values keeps the present items in order
fn prop_values_in_order(items: Vec<May<u8>>) -> bool {
    let values: Vec<u8> = items.iter().copied().values().collect();
    let expected: Vec<u8> = items.iter().filter_map(|m| m.into_option()).collect();
    values == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monad_laws() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_left_identity as fn(i32) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_right_identity as fn(May<i32>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_bind_associative as fn(May<i32>) -> bool);
    }

    #[test]
    fn test_derived_combinators() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_map_functor as fn(May<i32>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_filter_is_bind as fn(May<i32>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_flatten_is_bind as fn(May<May<i32>>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_combine_presence as fn(May<i32>, May<u8>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_else_value as fn(May<i32>, i32) -> bool);
    }

    #[test]
    fn test_equality_and_hash() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_eq_hash_consistent as fn(May<i32>, May<i32>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_absence_is_no_value as fn(May<String>) -> bool);
    }

    #[test]
    fn test_sequence_extensions() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_aggregate_matches_reduce as fn(Vec<i64>) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_may_all as fn(Vec<May<u8>>) -> bool);
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_values_in_order as fn(Vec<May<u8>>) -> bool);
    }
}

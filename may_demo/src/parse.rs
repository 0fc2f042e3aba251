//! Text-to-number parsers that report failure as no value.
//!
//! Surrounding whitespace is ignored; anything else that is not a number of
//! the requested type gives no value.

use std::str::FromStr;

use may_value::{May, Maybe};
use num_bigint::BigInt;

fn may_parse<T: FromStr>(text: &str) -> May<T> {
    text.trim().parse::<T>().ok().into()
}

pub fn may_parse_i32(text: &str) -> May<i32> {
    may_parse(text)
}

pub fn may_parse_u32(text: &str) -> May<u32> {
    may_parse(text)
}

pub fn may_parse_f64(text: &str) -> May<f64> {
    may_parse(text)
}

pub fn may_parse_bigint(text: &str) -> May<BigInt> {
    may_parse(text)
}

/// Returns the non-negative square root, unless no real solution exists.
pub fn may_sqrt(value: f64) -> May<f64> {
    if value >= 0.0 {
        value.sqrt().maybe()
    } else {
        May::none()
    }
}

/// Splits an interactive input line into its `A` and `B` parts.
///
/// Extra words after `B` are ignored, and a missing part is empty.
pub fn split_inputs(line: &str) -> (&str, &str) {
    let mut words = line.split_whitespace();
    let a = words.next().unwrap_or("");
    let b = words.next().unwrap_or("");
    (a, b)
}

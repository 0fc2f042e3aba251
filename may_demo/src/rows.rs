//! The table of computations the demo evaluates for every pair of inputs.

use std::fmt::Display;

use log::debug;
use may_value::{May, MayIterator};
use num_bigint::BigInt;

use crate::parse::{may_parse_bigint, may_parse_f64, may_parse_i32, may_parse_u32, may_sqrt};

/// Rendered result of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub has_value: bool,
}

impl Outcome {
    fn of<T: Display>(value: May<T>) -> Self {
        Outcome {
            text: value.to_string(),
            has_value: value.has_value(),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Outcome {
            text: text.into(),
            has_value: true,
        }
    }
}

type Computation = Box<dyn FnMut(&str, &str) -> Outcome>;

pub struct Row {
    pub title: &'static str,
    compute: Computation,
}

impl Row {
    fn new(title: &'static str, compute: impl FnMut(&str, &str) -> Outcome + 'static) -> Self {
        Row {
            title,
            compute: Box::new(compute),
        }
    }
}

/// All rows, in display order. Some rows keep state across evaluations.
pub struct Board {
    rows: Vec<Row>,
    evaluations: usize,
}

impl Board {
    pub fn standard() -> Self {
        let mut rows = vec![
            Row::new("A as BigInteger", |a, _| Outcome::of(may_parse_bigint(a))),
            Row::new("B as BigInteger", |_, b| Outcome::of(may_parse_bigint(b))),
            Row::new("A as Int32", |a, _| Outcome::of(may_parse_i32(a))),
            Row::new("A as UInt32", |a, _| Outcome::of(may_parse_u32(a))),
            Row::new("A as Double", |a, _| Outcome::of(may_parse_f64(a))),
            Row::new("A + B (BigInteger)", |a, b| {
                let vb = may_parse_bigint(b);
                Outcome::of(may_parse_bigint(a).bind(|va| vb.map(|vb| va + vb)))
            }),
            Row::new("A * B (BigInteger)", |a, b| {
                Outcome::of(may_parse_bigint(a).combine(may_parse_bigint(b), |va, vb| va * vb))
            }),
            Row::new("SquareRoot(A)", |a, _| {
                Outcome::of(may_parse_f64(a).map(may_sqrt).flatten())
            }),
            Row::new("SquareRoot(B)", |_, b| Outcome::of(may_parse_f64(b).bind(may_sqrt))),
            Row::new("SquareRoot(A) - SquareRoot(B)", |a, b| {
                let difference = may_parse_f64(a).select_many(
                    |_| may_parse_f64(b),
                    |va, vb| may_sqrt(va).combine(may_sqrt(vb), |sa, sb| sa - sb),
                );
                Outcome::of(difference.flatten())
            }),
            Row::new("First double in [A, B]", |a, b| {
                Outcome::of([a, b].into_iter().map(may_parse_f64).values().may_first())
            }),
            Row::new("[A, B] as IEnumable<double>", |a, b| {
                let all = [a, b].into_iter().map(may_parse_f64).may_all();
                Outcome::of(all.map(|values| format_list(&values)))
            }),
        ];
        rows.push(double_counter());
        rows.push(bigint_sum());

        Board {
            rows,
            evaluations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Evaluates every row for the given inputs, in display order.
    pub fn evaluate(&mut self, a: &str, b: &str) -> Vec<(&'static str, Outcome)> {
        self.evaluations += 1;
        debug!("evaluation #{}: a={:?} b={:?}", self.evaluations, a, b);

        self.rows
            .iter_mut()
            .map(|row| {
                let outcome = (row.compute)(a, b);
                debug!("{} -> {}", row.title, outcome.text);
                (row.title, outcome)
            })
            .collect()
    }
}

fn format_list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn double_counter() -> Row {
    let mut passes = 0usize;
    let mut fails = 0usize;
    Row::new("# of times A was a double", move |a, _| {
        may_parse_f64(a)
            .if_then_do(|_| passes += 1)
            .else_do(|| fails += 1);
        Outcome::plain(format!("{}/{}", passes, passes + fails))
    })
}

fn bigint_sum() -> Row {
    let mut sum = BigInt::from(0);
    Row::new("Sum of B each time it was a BigInteger", move |_, b| {
        may_parse_bigint(b).if_then_do(|v| sum += v);
        Outcome::plain(sum.to_string())
    })
}

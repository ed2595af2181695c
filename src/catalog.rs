//! Hand-picked formulas, each given as its full clause table.

use crate::{
    error::{Error, Result},
    types::{Cnf, Lit},
};

pub struct Example {
    pub name: &'static str,
    pub formula: &'static str,
    clauses: &'static [&'static [Lit]],
}

impl Example {
    pub fn cnf(&self) -> Result<Cnf> {
        Cnf::new(self.clauses.iter().map(|clause| clause.to_vec()).collect())
    }
}

#[rustfmt::skip]
const A: &[&[Lit]] = &[
    &[ 1,  2,  3],
    &[ 1,  2, -3],
    &[ 1, -2,  3],
    &[ 1, -2, -3],
    &[-1,  2,  3],
    &[-1,  2, -3],
    &[-1, -2,  3],
    &[-1, -2, -3],
];

#[rustfmt::skip]
const B: &[&[Lit]] = &[
    &[ 1,  2,  3,  4],
    &[ 1,  2,  3, -4],
    &[ 1,  2, -3,  4],
    &[ 1,  2, -3, -4],
    &[ 1, -2,  3,  4],
    &[ 1, -2, -3,  4],
    &[-1,  2,  3,  4],
    &[-1,  2,  3, -4],
    &[-1,  2, -3,  4],
    &[-1, -2,  3,  4],
    &[-1, -2, -3,  4],
    &[-1, -2, -3, -4],
];

#[rustfmt::skip]
const C: &[&[Lit]] = &[
    &[ 1,  2,  3,  4,  5],
    &[ 1,  2,  3,  4, -5],
    &[ 1,  2,  3, -4, -5],
    &[ 1,  2, -3,  4,  5],
    &[ 1,  2, -3,  4, -5],
    &[ 1,  2, -3, -4, -5],
    &[ 1, -2,  3,  4,  5],
    &[ 1, -2,  3,  4, -5],
    &[ 1, -2,  3, -4,  5],
    &[ 1, -2, -3,  4,  5],
    &[ 1, -2, -3,  4, -5],
    &[ 1, -2, -3, -4,  5],
    &[-1,  2,  3,  4,  5],
    &[-1,  2,  3,  4, -5],
    &[-1,  2,  3, -4, -5],
    &[-1,  2, -3,  4,  5],
    &[-1,  2, -3,  4, -5],
    &[-1,  2, -3, -4,  5],
    &[-1, -2,  3,  4,  5],
    &[-1, -2,  3,  4, -5],
    &[-1, -2,  3, -4,  5],
    &[-1, -2, -3,  4, -5],
    &[-1, -2, -3, -4, -5],
];

#[rustfmt::skip]
const D: &[&[Lit]] = &[
    &[ 1,  2,  3,  4,  5,  6],
    &[ 1,  2,  3,  4,  5, -6],
    &[ 1,  2,  3,  4, -5,  6],
    &[ 1,  2,  3,  4, -5, -6],
    &[ 1,  2,  3, -4,  5,  6],
    &[ 1,  2,  3, -4,  5, -6],
    &[ 1,  2,  3, -4, -5, -6],
    &[ 1,  2, -3,  4,  5,  6],
    &[ 1,  2, -3,  4,  5, -6],
    &[ 1,  2, -3,  4, -5,  6],
    &[ 1,  2, -3,  4, -5, -6],
    &[ 1,  2, -3, -4,  5,  6],
    &[ 1,  2, -3, -4,  5, -6],
    &[ 1,  2, -3, -4, -5, -6],
    &[ 1, -2,  3,  4,  5,  6],
    &[ 1, -2,  3,  4,  5, -6],
    &[ 1, -2,  3,  4, -5,  6],
    &[ 1, -2,  3,  4, -5, -6],
    &[ 1, -2,  3, -4,  5,  6],
    &[ 1, -2,  3, -4,  5, -6],
    &[ 1, -2,  3, -4, -5, -6],
    &[ 1, -2, -3,  4,  5,  6],
    &[ 1, -2, -3,  4,  5, -6],
    &[ 1, -2, -3,  4, -5,  6],
    &[ 1, -2, -3,  4, -5, -6],
    &[ 1, -2, -3, -4,  5,  6],
    &[ 1, -2, -3, -4,  5, -6],
    &[ 1, -2, -3, -4, -5, -6],
    &[-1,  2,  3,  4,  5,  6],
    &[-1,  2,  3,  4,  5, -6],
    &[-1,  2,  3,  4, -5,  6],
    &[-1,  2,  3,  4, -5, -6],
    &[-1,  2,  3, -4,  5,  6],
    &[-1,  2,  3, -4,  5, -6],
    &[-1,  2,  3, -4, -5, -6],
    &[-1,  2, -3,  4,  5,  6],
    &[-1,  2, -3,  4,  5, -6],
    &[-1,  2, -3,  4, -5,  6],
    &[-1,  2, -3,  4, -5, -6],
    &[-1,  2, -3, -4,  5,  6],
    &[-1,  2, -3, -4,  5, -6],
    &[-1,  2, -3, -4, -5, -6],
    &[-1, -2,  3,  4,  5,  6],
    &[-1, -2,  3,  4,  5, -6],
    &[-1, -2,  3,  4, -5,  6],
    &[-1, -2,  3,  4, -5, -6],
    &[-1, -2,  3, -4,  5,  6],
    &[-1, -2,  3, -4,  5, -6],
    &[-1, -2,  3, -4, -5, -6],
    &[-1, -2, -3,  4,  5,  6],
    &[-1, -2, -3,  4, -5,  6],
    &[-1, -2, -3,  4, -5, -6],
    &[-1, -2, -3, -4,  5,  6],
    &[-1, -2, -3, -4,  5, -6],
    &[-1, -2, -3, -4, -5, -6],
];

#[rustfmt::skip]
const E: &[&[Lit]] = &[
    &[ 1,  2,  3,  4,  5, -6],
    &[ 1,  2,  3,  4, -5,  6],
    &[ 1,  2,  3,  4, -5, -6],
    &[ 1,  2,  3, -4,  5,  6],
    &[ 1,  2,  3, -4,  5, -6],
    &[ 1,  2,  3, -4, -5, -6],
    &[ 1,  2, -3,  4,  5,  6],
    &[ 1,  2, -3,  4,  5, -6],
    &[ 1,  2, -3,  4, -5,  6],
    &[ 1,  2, -3,  4, -5, -6],
    &[-1, -2, -3, -4, -5, -6],
];

#[rustfmt::skip]
const F: &[&[Lit]] = &[
    &[ 1,  2,  3,  4,  5, -6],
    &[ 1,  2,  3,  4, -5,  6],
    &[ 1,  2,  3,  4, -5, -6],
    &[ 1,  2, -3,  4,  5, -6],
    &[ 1,  2, -3,  4, -5,  6],
    &[ 1,  2, -3,  4, -5, -6],
    &[-1, -2, -3, -4, -5, -6],
];

pub static EXAMPLES: [Example; 6] = [
    Example {
        name: "a",
        formula: "(a&((b|c)^a->c)<->b)&~(a&((b|c)^a->c)<->b)",
        clauses: A,
    },
    Example {
        name: "b",
        formula: "(a&((b|c)^a->c)|b)&~(a&((b&c)^a->c)<->b)&d",
        clauses: B,
    },
    Example {
        name: "c",
        formula: "(a&((b|c)^a->c)|b)&~(a&((b&c)^a->c)<->b)&d<->(a&b&c|d)->e",
        clauses: C,
    },
    Example {
        name: "d",
        formula: "((a&((b|c)^a->c)|b)->(a&b&c|d)&d<->(a&b&c|d)->e)&~((a&((b|c)^a->c)|b)->(a&b&c|d)&d<->(a&b&c|d)->f)",
        clauses: D,
    },
    Example {
        name: "e",
        formula: "(a|b|c|d|e|~f)&(a|b|c|d|~e|f)&(a|b|c|d|~e|~f)&(a|b|c|~d|e|f)&(a|b|c|~d|e|~f)&(a|b|c|~d|~e|~f)&(a|b|~c|d|e|f)&(a|b|~c|d|e|~f)&(a|b|~c|d|~e|f)&(a|b|~c|d|~e|~f)&(~a|~b|~c|~d|~e|~f)",
        clauses: E,
    },
    Example {
        name: "f",
        formula: "(a|b|c|d|e|~f)&(a|b|c|d|~e|f)&(a|b|c|d|~e|~f)&(a|b|~c|d|e|~f)&(a|b|~c|d|~e|f)&(a|b|~c|d|~e|~f)&(~a|~b|~c|~d|~e|~f)",
        clauses: F,
    },
];

pub fn find(name: &str) -> Result<&'static Example> {
    EXAMPLES
        .iter()
        .find(|example| example.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownExample(name.to_string()))
}

//! Bisection over the subsets of a universe.
//!
//! An index `k` in `[0, 2^m)` selects the universe entries at the set bits of
//! `k`; `phi(k)` is the sum of the selected entries. The search bisects this
//! index space as if `phi` were non-decreasing. It is not in general, so an
//! existing witness can be missed.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stop as soon as the window collapses, without probing the last candidate.
    Exact,
    /// Probe the last remaining candidate once before giving up. This extra
    /// probe is not part of the original loop; use `Exact` to reproduce it.
    #[default]
    Settle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(BigUint),
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    pub outcome: Outcome,
    /// Number of bisection iterations, at most `m`.
    pub complexity: usize,
}

impl Search {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }

    /// The witness, or `0` when none was found.
    pub fn witness(&self) -> BigUint {
        match &self.outcome {
            Outcome::Found(k) => k.clone(),
            Outcome::NotFound => BigUint::zero(),
        }
    }
}

pub fn phi(k: &BigUint, universe: &[BigUint]) -> BigUint {
    universe
        .iter()
        .enumerate()
        .filter(|&(i, _)| k.bit(i as u64))
        .map(|(_, weight)| weight)
        .sum()
}

pub fn abstract_binary_search(universe: &[BigUint], target: &BigUint, mode: Mode) -> Search {
    let mut complexity = 0;
    let mut lo = BigUint::zero();
    let mut hi = (BigUint::one() << universe.len()) - 1u32;

    while lo < hi {
        let mid: BigUint = (&lo + &hi) >> 1;
        let s = phi(&mid, universe);
        debug!(%mid, %s, complexity, "probe");

        match s.cmp(target) {
            Ordering::Less => lo = mid + 1u32,
            Ordering::Greater => hi = mid,
            Ordering::Equal => {
                info!(witness = %mid, complexity, "witness found");
                return Search {
                    outcome: Outcome::Found(mid),
                    complexity,
                };
            }
        }
        complexity += 1;
    }

    let outcome = match mode {
        Mode::Settle if phi(&lo, universe) == *target => Outcome::Found(lo),
        _ => Outcome::NotFound,
    };
    info!(found = matches!(outcome, Outcome::Found(_)), complexity, "window exhausted");

    Search {
        outcome,
        complexity,
    }
}

/// Checks that a found witness reproduces `target`.
pub fn verify(universe: &[BigUint], target: &BigUint, search: &Search) -> bool {
    match &search.outcome {
        Outcome::Found(k) => phi(k, universe) == *target,
        Outcome::NotFound => false,
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::{abstract_binary_search, phi, verify, Mode, Outcome, Search};

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    fn search(universe: &[u64], target: u64, mode: Mode) -> Search {
        abstract_binary_search(&big(universe), &BigUint::from(target), mode)
    }

    fn found(k: u64, complexity: usize) -> Search {
        Search {
            outcome: Outcome::Found(BigUint::from(k)),
            complexity,
        }
    }

    fn not_found(complexity: usize) -> Search {
        Search {
            outcome: Outcome::NotFound,
            complexity,
        }
    }

    #[test]
    fn subset_sums() {
        let universe = big(&[2, 1]);
        let sums: Vec<BigUint> = (0u32..4)
            .map(|k| phi(&BigUint::from(k), &universe))
            .collect();
        assert_eq!(sums, big(&[0, 2, 1, 3]));
    }

    #[test]
    fn single_variable() {
        // universe and target of [[1], [-1]]
        assert_eq!(search(&[2, 1], 3, Mode::Settle), found(3, 2));
        assert_eq!(search(&[2, 1], 3, Mode::Exact), not_found(2));
    }

    #[test]
    fn padded() {
        assert_eq!(search(&[0, 0, 2, 1], 3, Mode::Exact), found(13, 2));
    }

    #[test]
    fn monotonic() {
        let universe = [1, 2, 4];
        assert_eq!(search(&universe, 5, Mode::Settle), found(5, 1));
        assert_eq!(search(&universe, 6, Mode::Settle), found(6, 2));
        assert_eq!(search(&universe, 0, Mode::Settle), found(0, 2));
        assert_eq!(search(&universe, 7, Mode::Settle), found(7, 3));
        assert_eq!(search(&universe, 7, Mode::Exact), not_found(3));

        for target in 0..8 {
            let result = search(&universe, target, Mode::Settle);
            assert!(verify(&big(&universe), &BigUint::from(target), &result));
            assert!(result.complexity <= universe.len());
        }
    }

    #[test]
    fn non_monotonic() {
        let universe = [4, 2, 1];
        assert_eq!(search(&universe, 4, Mode::Settle), found(1, 1));

        // phi(4) == 1, but bisection moves left past it
        assert_eq!(phi(&BigUint::from(4u32), &big(&universe)), BigUint::from(1u32));
        let result = search(&universe, 1, Mode::Settle);
        assert_eq!(result, not_found(3));
        assert_eq!(result.witness(), BigUint::from(0u32));
        assert!(!verify(&big(&universe), &BigUint::from(1u32), &result));
    }

    #[test]
    fn empty_universe() {
        assert_eq!(search(&[], 0, Mode::Settle), found(0, 0));
        assert_eq!(search(&[], 0, Mode::Exact), not_found(0));
    }

    #[test]
    fn wide_index_space() {
        let universe: Vec<u64> = (0..70).map(|i| 1 + i % 3).collect();
        let target: u64 = universe.iter().sum();
        let result = search(&universe, target, Mode::Settle);
        assert!(result.is_found());
        assert_eq!(result.complexity, 70);
        assert_eq!(result.witness(), (BigUint::from(1u32) << 70) - 1u32);
    }
}

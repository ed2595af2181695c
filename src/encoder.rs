use std::iter::repeat;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::types::{Cnf, Lit};

/// Clause weights together with their sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub target: BigUint,
    pub universe: Vec<BigUint>,
}

impl Equation {
    /// Universe laid out as `m` zero weights followed by the `m` clause weights.
    pub fn padded_universe(&self) -> Vec<BigUint> {
        repeat(BigUint::zero())
            .take(self.universe.len())
            .chain(self.universe.iter().cloned())
            .collect()
    }
}

/// Bit `i` of the exponent is set iff the literal at position `n - 1 - i` is positive.
pub fn exponent(clause: &[Lit]) -> usize {
    let n = clause.len();
    (0..n)
        .filter(|&i| clause[n - 1 - i] > 0)
        .fold(0, |e, i| e | (1 << i))
}

pub fn encode(cnf: &Cnf) -> Equation {
    let mut target = BigUint::zero();
    let mut universe = Vec::with_capacity(cnf.len());

    for (j, clause) in cnf.clauses().iter().enumerate() {
        let e = exponent(clause);
        debug!(clause = j, exponent = e, "clause weight 2^e");

        let weight = BigUint::one() << e;
        target += &weight;
        universe.push(weight);
    }

    Equation { target, universe }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::Zero;

    use crate::types::Cnf;

    use super::{encode, exponent};

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn reversed_positions() {
        assert_eq!(exponent(&[1, 2, 3]), 0b111);
        assert_eq!(exponent(&[1, 2, -3]), 0b110);
        assert_eq!(exponent(&[-1, 2, -3]), 0b010);
        assert_eq!(exponent(&[1, -2, -3]), 0b100);
        assert_eq!(exponent(&[]), 0);
    }

    #[test]
    fn single_variable() {
        let cnf = Cnf::new(vec![vec![1], vec![-1]]).unwrap();
        let equation = encode(&cnf);
        assert_eq!(equation.universe, big(&[2, 1]));
        assert_eq!(equation.target, BigUint::from(3u32));
        assert_eq!(equation.padded_universe(), big(&[0, 0, 2, 1]));
    }

    #[test]
    fn sum_of_weights() {
        let cnf = Cnf::new(vec![
            vec![1, 2, 3, 4],
            vec![-1, 2, -3, 4],
            vec![-1, -2, -3, -4],
            vec![1, 2, 3, 4],
        ])
        .unwrap();
        let equation = encode(&cnf);
        assert_eq!(equation.universe.len(), cnf.len());
        assert_eq!(equation.universe, big(&[1 << 15, 1 << 5, 1, 1 << 15]));
        let sum: BigUint = equation.universe.iter().sum();
        assert_eq!(equation.target, sum);
    }

    #[test]
    fn deterministic() {
        let cnf = Cnf::new(vec![vec![1, -2], vec![-1, -2]]).unwrap();
        assert_eq!(encode(&cnf), encode(&cnf));
    }

    #[test]
    fn degenerate() {
        let equation = encode(&Cnf::new(vec![]).unwrap());
        assert!(equation.universe.is_empty());
        assert!(equation.target.is_zero());

        let equation = encode(&Cnf::new(vec![vec![]]).unwrap());
        assert_eq!(equation.universe, big(&[1]));
    }

    #[test]
    fn wide_weights() {
        let clause: Vec<i32> = (1..=8).collect();
        let equation = encode(&Cnf::new(vec![clause]).unwrap());
        assert_eq!(equation.target.bits(), 256);
    }
}

use num_bigint::BigUint;

use crate::{
    error::{Error, Result},
    types::MAX_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 0 first.
    Direct,
    /// Last position first.
    Inverse,
}

/// The low `len` bits of `value`, bit 0 first. Positions past the bit length
/// of `value` are zero-filled.
pub fn bits(value: &BigUint, len: usize) -> Vec<bool> {
    (0..len as u64).map(|i| value.bit(i)).collect()
}

/// The low `2^width` bits of `value`. Widths above `MAX_WIDTH` are rejected.
pub fn sat_space(value: &BigUint, width: usize) -> Result<Vec<bool>> {
    if width > MAX_WIDTH {
        return Err(Error::WidthTooLarge(width));
    }
    Ok(bits(value, 1 << width))
}

pub fn render(bits: &[bool], order: BitOrder) -> String {
    let digit = |&bit: &bool| if bit { '1' } else { '0' };
    match order {
        BitOrder::Direct => bits.iter().map(digit).collect(),
        BitOrder::Inverse => bits.iter().rev().map(digit).collect(),
    }
}

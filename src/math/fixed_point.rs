//! 256-bit fixed-point helpers with 512-bit intermediates.
//!
//! Prices are unsigned Q128.128 values.  Multiplying two of them, or a
//! price by a 128-bit amount, can exceed 256 bits before the final shift,
//! so every product is formed in a [`U512`] and narrowed afterwards.
//!
//! All helpers return `None` instead of panicking when the final result
//! does not fit in 256 bits or a divisor is zero.

use primitive_types::{U256, U512};

use crate::domain::Rounding;

/// Number of fractional bits of a Q128.128 value.
pub const SCALE_OFFSET: usize = 128;

/// Zero-extends a 256-bit value.
#[must_use]
pub(crate) fn widen(x: U256) -> U512 {
    let U256(l) = x;
    U512([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

/// Truncating-free narrowing; `None` if any high limb is set.
#[must_use]
pub(crate) fn narrow(x: U512) -> Option<U256> {
    let U512(l) = x;
    if l[4..].iter().any(|&w| w != 0) {
        return None;
    }
    Some(U256([l[0], l[1], l[2], l[3]]))
}

/// `(x * y) >> offset` with the requested rounding.
#[must_use]
pub fn mul_shift(x: U256, y: U256, offset: usize, rounding: Rounding) -> Option<U256> {
    let product = widen(x) * widen(y);
    let mut shifted = product >> offset;
    if rounding.is_up() && (shifted << offset) != product {
        shifted = shifted + U512::one();
    }
    narrow(shifted)
}

/// `(x << offset) / y` with the requested rounding.
///
/// `offset` must leave room for `x` in 512 bits, which holds for every
/// offset up to 256.
#[must_use]
pub fn shift_div(x: U256, offset: usize, y: U256, rounding: Rounding) -> Option<U256> {
    mul_div_wide(widen(x) << offset, widen(y), rounding)
}

/// `x * y / denominator` with the requested rounding.
#[must_use]
pub fn mul_div(x: U256, y: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    mul_div_wide(widen(x) * widen(y), widen(denominator), rounding)
}

/// `x * y / denominator` on `u128` operands, `None` on a zero divisor or
/// a result that does not fit in `u128`.
#[must_use]
pub fn mul_div_u128(x: u128, y: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    let wide = mul_div(
        U256::from(x),
        U256::from(y),
        U256::from(denominator),
        rounding,
    )?;
    if wide > U256::from(u128::MAX) {
        return None;
    }
    Some(wide.low_u128())
}

fn mul_div_wide(numerator: U512, denominator: U512, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let mut quotient = numerator / denominator;
    if rounding.is_up() && !(numerator % denominator).is_zero() {
        quotient = quotient + U512::one();
    }
    narrow(quotient)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn q128(v: u64) -> U256 {
        U256::from(v) << SCALE_OFFSET
    }

    #[test]
    fn widen_narrow_round_trip() {
        let x = U256::MAX;
        assert_eq!(narrow(widen(x)), Some(x));
        assert_eq!(narrow(widen(x) + U512::one()), None);
    }

    #[test]
    fn mul_shift_of_fixed_point_values() {
        assert_eq!(mul_shift(q128(3), q128(4), SCALE_OFFSET, Rounding::Down), Some(q128(12)));
    }

    #[test]
    fn mul_shift_rounding() {
        // 3 * 0.5 = 1.5
        let half = U256::one() << 127;
        assert_eq!(
            mul_shift(U256::from(3u8), half, SCALE_OFFSET, Rounding::Down),
            Some(U256::one())
        );
        assert_eq!(
            mul_shift(U256::from(3u8), half, SCALE_OFFSET, Rounding::Up),
            Some(U256::from(2u8))
        );
    }

    #[test]
    fn mul_shift_overflow_is_none() {
        assert_eq!(mul_shift(U256::MAX, U256::MAX, 0, Rounding::Down), None);
    }

    #[test]
    fn shift_div_reciprocal() {
        // 1 / 3 in Q128.128, then * 3 must round back to below one
        let Some(third) = shift_div(U256::one(), SCALE_OFFSET, U256::from(3u8), Rounding::Down) else {
            panic!("expected Some");
        };
        let Some(back) = mul_shift(third, U256::from(3u8), 0, Rounding::Down) else {
            panic!("expected Some");
        };
        assert!(back < q128(1));
        assert_eq!(shift_div(U256::one(), 0, U256::zero(), Rounding::Up), None);
    }

    #[test]
    fn mul_div_u128_rounding_and_range() {
        assert_eq!(mul_div_u128(10, 3, 4, Rounding::Down), Some(7));
        assert_eq!(mul_div_u128(10, 3, 4, Rounding::Up), Some(8));
        assert_eq!(mul_div_u128(u128::MAX, 2, 1, Rounding::Down), None);
        assert_eq!(mul_div_u128(u128::MAX, u128::MAX, u128::MAX, Rounding::Up), Some(u128::MAX));
        assert_eq!(mul_div_u128(1, 1, 0, Rounding::Down), None);
    }
}

//! Exponential bin pricing: `price(id) = (1 + bin_step / 10_000)^id`.
//!
//! Prices are unsigned Q128.128 values (see [`Price`]).  The curve is
//! computed deterministically with integer arithmetic only:
//!
//! - [`PriceCurve::price_from_id`] uses binary exponentiation over a table
//!   of `base^(2^k)` built once per bin step; negative ids take the
//!   reciprocal of the positive power.
//! - [`PriceCurve::id_from_price`] estimates the id with a Q64.64 base-2
//!   logarithm and then snaps to the exact floor bin by evaluating the
//!   curve, so `id_from_price(price_from_id(id)) == id` always holds.
//!
//! Only prices inside `[2^-64, 2^64]` are representable; ids whose price
//! leaves that window fail with [`AmmError::PriceRangeExceeded`].
//!
//! # Examples
//!
//! ```
//! use liquidity_bins::domain::{BinId, BinStep, Price};
//! use liquidity_bins::math::PriceCurve;
//!
//! let curve = PriceCurve::new(BinStep::new(1).expect("valid"));
//! assert_eq!(curve.price_from_id(BinId::ZERO), Ok(Price::ONE));
//!
//! let id = BinId::new(10_000).expect("valid");
//! let price = curve.price_from_id(id).expect("in window");
//! // 1.0001^10000 ~ e
//! assert!((price.to_f64_lossy() - 2.718_145_9).abs() < 1e-6);
//! assert_eq!(curve.id_from_price(price), Ok(id));
//! ```

use primitive_types::U256;

use super::fixed_point::{mul_shift, shift_div, SCALE_OFFSET};
use crate::domain::basis_points::BPS_DENOMINATOR;
use crate::domain::{BinId, BinStep, Price, Rounding};
use crate::error::AmmError;

/// Smallest representable price, `2^-64`, as a raw Q128.128 value.
const MIN_PRICE_RAW: U256 = U256([0, 1, 0, 0]);

/// Largest representable price, `2^64`, as a raw Q128.128 value.
const MAX_PRICE_RAW: U256 = U256([0, 0, 0, 1]);

/// Bits of bin id magnitude covered by the power table.
const ID_BITS: usize = 20;

/// Fractional bits produced by [`log2_q64`].
const LOG_FRACTION_BITS: u32 = 64;

/// Upper bound on snapping steps after the logarithmic estimate.
const MAX_CORRECTION_STEPS: usize = 4;

/// Price curve of one bin step.
///
/// Cheap to clone; holds at most twenty 256-bit powers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCurve {
    bin_step: BinStep,
    /// `powers[k] = base^(2^k)`, truncated once a power leaves the window.
    powers: Vec<U256>,
    /// `log2(base)` in Q64.64.
    log2_base: i128,
}

impl PriceCurve {
    /// Builds the power table for `bin_step`.
    #[must_use]
    pub fn new(bin_step: BinStep) -> Self {
        let one = Price::ONE.raw();
        let increment = (one * U256::from(bin_step.get())) / U256::from(BPS_DENOMINATOR);
        let base = one + increment;

        let mut powers = Vec::with_capacity(ID_BITS);
        let mut current = base;
        while powers.len() < ID_BITS && current <= MAX_PRICE_RAW {
            powers.push(current);
            match mul_shift(current, current, SCALE_OFFSET, Rounding::Down) {
                Some(next) => current = next,
                None => break,
            }
        }

        Self {
            bin_step,
            powers,
            log2_base: log2_q64(base),
        }
    }

    /// The bin step this curve was built for.
    #[must_use]
    pub const fn bin_step(&self) -> BinStep {
        self.bin_step
    }

    /// Price of bin `id`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PriceRangeExceeded`] when the price lies outside
    /// `[2^-64, 2^64]`.
    pub fn price_from_id(&self, id: BinId) -> crate::error::Result<Price> {
        let magnitude = id.magnitude();
        let mut acc = Price::ONE.raw();
        for (bit, power) in (0..ID_BITS).map(|k| (k, self.powers.get(k))) {
            if magnitude >> bit == 0 {
                break;
            }
            if magnitude & (1 << bit) == 0 {
                continue;
            }
            let Some(power) = power else {
                return Err(out_of_window());
            };
            acc = mul_shift(acc, *power, SCALE_OFFSET, Rounding::Down)
                .filter(|v| *v <= MAX_PRICE_RAW)
                .ok_or_else(out_of_window)?;
        }

        let raw = if id.get() < 0 {
            // 2^256 / acc is the Q128.128 reciprocal
            shift_div(U256::one(), 2 * SCALE_OFFSET, acc, Rounding::Down)
                .ok_or_else(out_of_window)?
        } else {
            acc
        };

        if !(MIN_PRICE_RAW..=MAX_PRICE_RAW).contains(&raw) {
            return Err(out_of_window());
        }
        Ok(Price::from_raw(raw))
    }

    /// The greatest id whose price does not exceed `price`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] for a zero price.
    /// - [`AmmError::PriceRangeExceeded`] when `price` lies outside the
    ///   representable window or below the lowest priceable bin.
    pub fn id_from_price(&self, price: Price) -> crate::error::Result<BinId> {
        if price.is_zero() {
            return Err(AmmError::InvalidInput("price must be non-zero"));
        }
        let raw = price.raw();
        if !(MIN_PRICE_RAW..=MAX_PRICE_RAW).contains(&raw) {
            return Err(out_of_window());
        }

        let estimate = log2_q64(raw).div_euclid(self.log2_base);
        let mut id = i32::try_from(estimate)
            .ok()
            .and_then(|v| BinId::new(v).ok())
            .ok_or_else(out_of_window)?;

        for _ in 0..MAX_CORRECTION_STEPS {
            match self.position_of(id, price)? {
                BinPosition::Above => {
                    id = id.checked_sub(1).ok_or_else(out_of_window)?;
                    continue;
                }
                BinPosition::BelowWindow => {}
                BinPosition::AtOrBelow => {
                    let next_is_above = match id.checked_add(1) {
                        Some(next) => self.position_of(next, price)? == BinPosition::Above,
                        None => true,
                    };
                    if next_is_above {
                        return Ok(id);
                    }
                }
            }
            id = id.checked_add(1).ok_or_else(out_of_window)?;
        }
        Err(AmmError::PriceRangeExceeded(
            "price could not be resolved to a bin",
        ))
    }

    /// Where bin `id` lies relative to `price`.  Unpriceable ids are placed
    /// by sign: positive ids are above every price, negative ids below.
    fn position_of(&self, id: BinId, price: Price) -> crate::error::Result<BinPosition> {
        match self.price_from_id(id) {
            Ok(p) if p > price => Ok(BinPosition::Above),
            Ok(_) => Ok(BinPosition::AtOrBelow),
            Err(AmmError::PriceRangeExceeded(_)) if id.get() < 0 => Ok(BinPosition::BelowWindow),
            Err(AmmError::PriceRangeExceeded(_)) => Ok(BinPosition::Above),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinPosition {
    Above,
    AtOrBelow,
    BelowWindow,
}

const fn out_of_window() -> AmmError {
    AmmError::PriceRangeExceeded("price outside [2^-64, 2^64]")
}

/// `log2(raw / 2^128)` as a signed Q64.64 value, rounded towards negative
/// infinity.  `raw` must be non-zero.
fn log2_q64(raw: U256) -> i128 {
    let msb = raw.bits().saturating_sub(1);
    let integer = msb as i128 - SCALE_OFFSET as i128;

    // mantissa in [1, 2) as Q1.127
    let mut y = if msb >= 127 {
        raw >> (msb - 127)
    } else {
        raw << (127 - msb)
    };

    let two = U256::one() << 128;
    let mut fraction: i128 = 0;
    for i in 1..=LOG_FRACTION_BITS {
        y = (y * y) >> 127;
        if y >= two {
            y = y >> 1;
            fraction |= 1 << (LOG_FRACTION_BITS - i);
        }
    }
    (integer << LOG_FRACTION_BITS) + fraction
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn curve(step: u16) -> PriceCurve {
        let Ok(s) = BinStep::new(step) else {
            panic!("invalid step {step}");
        };
        PriceCurve::new(s)
    }

    fn id(v: i32) -> BinId {
        let Ok(b) = BinId::new(v) else {
            panic!("invalid id {v}");
        };
        b
    }

    fn price(c: &PriceCurve, v: i32) -> Price {
        let Ok(p) = c.price_from_id(id(v)) else {
            panic!("id {v} not priceable");
        };
        p
    }

    // -- price_from_id ------------------------------------------------------

    #[test]
    fn id_zero_is_exactly_one() {
        for step in [1, 2, 25, 100] {
            assert_eq!(price(&curve(step), 0), Price::ONE);
        }
    }

    #[test]
    fn id_one_is_the_base() {
        let p = price(&curve(1), 1);
        assert!((p.to_f64_lossy() - 1.0001).abs() < 1e-15);
        let p = price(&curve(100), -1);
        assert!((p.to_f64_lossy() - 1.0 / 1.01).abs() < 1e-15);
    }

    #[test]
    fn reciprocal_symmetry() {
        let c = curve(1);
        for v in [100, 10_000, 100_000] {
            let product = price(&c, v).to_f64_lossy() * price(&c, -v).to_f64_lossy();
            assert!((product - 1.0).abs() < 1e-8, "id {v}: {product}");
        }
    }

    #[test]
    fn strictly_increasing_around_zero_and_far_out() {
        let c = curve(2);
        for start in [-50, 9_990, -200_000, 200_000] {
            for v in start..start + 20 {
                assert!(price(&c, v) < price(&c, v + 1), "not increasing at {v}");
            }
        }
    }

    #[test]
    fn close_to_float_reference() {
        let c = curve(25);
        for v in [-3_000, -17, 0, 42, 3_000] {
            let expected = 1.0025_f64.powi(v);
            let got = price(&c, v).to_f64_lossy();
            assert!(((got - expected) / expected).abs() < 1e-10, "id {v}");
        }
    }

    #[test]
    fn window_is_enforced() {
        let c = curve(100);
        // 1.01^4458 ~ 2^64
        assert!(c.price_from_id(id(4_400)).is_ok());
        assert!(matches!(
            c.price_from_id(id(5_000)),
            Err(AmmError::PriceRangeExceeded(_))
        ));
        assert!(matches!(
            c.price_from_id(id(-5_000)),
            Err(AmmError::PriceRangeExceeded(_))
        ));
        assert!(matches!(
            c.price_from_id(BinId::MAX),
            Err(AmmError::PriceRangeExceeded(_))
        ));
    }

    #[test]
    fn hundreds_of_thousands_with_one_bp() {
        let c = curve(1);
        assert!(c.price_from_id(id(400_000)).is_ok());
        assert!(c.price_from_id(id(-400_000)).is_ok());
        assert!(c.price_from_id(id(500_000)).is_err());
    }

    // -- id_from_price ------------------------------------------------------

    #[test]
    fn round_trip() {
        for step in [1, 2, 100] {
            let c = curve(step);
            for v in [-4_000, -1_001, -1, 0, 1, 7, 1_000, 4_000] {
                assert_eq!(c.id_from_price(price(&c, v)), Ok(id(v)), "step {step} id {v}");
            }
        }
    }

    #[test]
    fn floors_between_bins() {
        let c = curve(2);
        let lo = price(&c, 321);
        let hi = price(&c, 322);
        let mid = Price::from_raw((lo.raw() + hi.raw()) >> 1);
        assert_eq!(c.id_from_price(mid), Ok(id(321)));
        let just_below = Price::from_raw(hi.raw() - U256::one());
        assert_eq!(c.id_from_price(just_below), Ok(id(321)));
    }

    #[test]
    fn zero_price_is_invalid_input() {
        assert!(matches!(
            curve(1).id_from_price(Price::ZERO),
            Err(AmmError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_window_price_is_rejected() {
        let too_big = Price::from_raw(MAX_PRICE_RAW + U256::one());
        let too_small = Price::from_raw(MIN_PRICE_RAW - U256::one());
        assert!(matches!(
            curve(1).id_from_price(too_big),
            Err(AmmError::PriceRangeExceeded(_))
        ));
        assert!(matches!(
            curve(1).id_from_price(too_small),
            Err(AmmError::PriceRangeExceeded(_))
        ));
    }

    // -- log2 ---------------------------------------------------------------

    #[test]
    fn log2_of_powers_of_two_is_exact() {
        assert_eq!(log2_q64(Price::ONE.raw()), 0);
        assert_eq!(log2_q64(Price::ONE.raw() << 3), 3i128 << 64);
        assert_eq!(log2_q64(Price::ONE.raw() >> 5), -(5i128 << 64));
    }

    #[test]
    fn log2_fraction_matches_float() {
        // log2(1.5) = 0.5849625007
        let raw = Price::ONE.raw() + (Price::ONE.raw() >> 1);
        let got = log2_q64(raw) as f64 / 18_446_744_073_709_551_616.0;
        assert!((got - 0.584_962_500_721_156).abs() < 1e-12);
    }
}

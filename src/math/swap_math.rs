//! Per-bin swap arithmetic.
//!
//! Inside one bin the exchange rate is the bin's constant price, so a
//! swap step is a single conversion plus the input-side fee.  Rounding
//! always favors the pool: inputs are rounded up, outputs down.

use crate::domain::{Amount, Asset, FeeTier, Price, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// The amounts exchanged with a single bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinFill {
    /// Fee-inclusive input credited to the bin.
    pub amount_in: Amount,
    /// Output debited from the bin.
    pub amount_out: Amount,
    /// Part of `amount_in` that is fee.
    pub fee: Amount,
}

impl BinFill {
    /// `true` when the step moved nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount_in.is_zero() && self.amount_out.is_zero()
    }
}

/// Fee-inclusive input needed to take `amount_out` of asset `out` from a
/// bin priced at `price`.
///
/// The fee-free input is `ceil(out * price)` for asset-0 output and
/// `ceil(out / price)` for asset-1 output, then grossed up by the fee.
///
/// # Errors
///
/// Propagates [`AmmError::Overflow`], [`AmmError::DivisionByZero`] and
/// [`AmmError::InvalidFee`] from the conversion and fee math.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, Asset, FeeTier, Price};
/// use liquidity_bins::math::input_for_output;
///
/// let fill = input_for_output(Price::ONE, Amount::new(997), Asset::Token0, FeeTier::TIER_0_30_PERCENT)
///     .expect("fits");
/// assert_eq!(fill.amount_in, Amount::new(1_000));
/// assert_eq!(fill.fee, Amount::new(3));
/// ```
pub fn input_for_output(
    price: Price,
    amount_out: Amount,
    out: Asset,
    fee: FeeTier,
) -> crate::error::Result<BinFill> {
    let net = price.quote(amount_out, out, Rounding::Up)?;
    let gross = fee.gross_up(net)?;
    Ok(BinFill {
        amount_in: gross,
        amount_out,
        fee: gross.safe_sub(&net)?,
    })
}

/// Output obtained by selling `amount_in` of asset `input` into a bin
/// priced at `price`, ignoring the bin's available reserve.
///
/// # Errors
///
/// Same as [`input_for_output`].
pub fn output_for_input(
    price: Price,
    amount_in: Amount,
    input: Asset,
    fee: FeeTier,
) -> crate::error::Result<BinFill> {
    let net = fee.net_of_fee(amount_in)?;
    let amount_out = price.quote(net, input, Rounding::Down)?;
    Ok(BinFill {
        amount_in,
        amount_out,
        fee: amount_in.safe_sub(&net)?,
    })
}

/// One exact-output step: takes `min(wanted, available)` of asset `out`.
///
/// # Errors
///
/// Same as [`input_for_output`].
pub fn fill_exact_out(
    price: Price,
    wanted: Amount,
    available: Amount,
    out: Asset,
    fee: FeeTier,
) -> crate::error::Result<BinFill> {
    input_for_output(price, wanted.min(available), out, fee)
}

/// One exact-input step: consumes the whole bin when `remaining_in` covers
/// its fee-inclusive cost, otherwise converts all of `remaining_in` at the
/// bin price with floor rounding.
///
/// A whole-bin cost too large for an [`Amount`] is never covered, so such a
/// bin still takes a partial fill.
///
/// # Errors
///
/// Same as [`input_for_output`].
pub fn fill_exact_in(
    price: Price,
    remaining_in: Amount,
    available: Amount,
    input: Asset,
    fee: FeeTier,
) -> crate::error::Result<BinFill> {
    match input_for_output(price, available, input.other(), fee) {
        Ok(whole) if whole.amount_in <= remaining_in => return Ok(whole),
        Ok(_) | Err(AmmError::Overflow(_)) => {}
        Err(e) => return Err(e),
    }
    let partial = output_for_input(price, remaining_in, input, fee)?;
    if partial.amount_out.is_zero() {
        return Ok(BinFill::default());
    }
    Ok(BinFill {
        amount_out: partial.amount_out.min(available),
        ..partial
    })
}

//! Unified error type for the liquidity-bin engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  An error
//! always aborts the whole operation: no bin, aggregate, share or custody
//! side effect of a failed call is observable afterwards.

use thiserror::Error;

/// Errors produced by pricing, liquidity accounting and swap routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Malformed request: mismatched arrays, both or neither swap amounts
    /// set, or amounts not backed by pre-funded custody balance.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A bin id (or price) falls outside the representable price window.
    #[error("price range exceeded: {0}")]
    PriceRangeExceeded(&'static str),

    /// A bin or aggregate reserve would become negative.
    #[error("insufficient reserve: {0}")]
    InsufficientReserve(&'static str),

    /// A swap could not be filled within the traversal bound.
    #[error("insufficient liquidity to fill the swap")]
    InsufficientLiquidity,

    /// A burn asked for more shares than the owner holds.
    #[error("unauthorized redeem: {0}")]
    UnauthorizedRedeem(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Pool configuration rejected during validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Fee outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Token decimals outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Token pair or token identity rejected.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = AmmError::InvalidInput("amount arrays differ in length");
        assert_eq!(
            err.to_string(),
            "invalid input: amount arrays differ in length"
        );
    }

    #[test]
    fn insufficient_liquidity_display() {
        assert_eq!(
            AmmError::InsufficientLiquidity.to_string(),
            "insufficient liquidity to fill the swap"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(AmmError::DivisionByZero, AmmError::DivisionByZero);
        assert_ne!(
            AmmError::Overflow("a"),
            AmmError::Underflow("a"),
        );
    }
}

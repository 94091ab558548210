//! Construction of a pool from its configuration.
//!
//! [`FromConfig`] is implemented for each pool/config pairing explicitly;
//! there is no blanket implementation.  Implementations validate the
//! configuration, so a constructed pool always starts in a valid state.

use crate::error::AmmError;

/// Builds a pool from a validated configuration.
///
/// # Implementors
///
/// - `impl FromConfig<BinPoolConfig> for BinPool<InMemoryShareLedger, InMemoryCustody>`
pub trait FromConfig<C> {
    /// Creates a pool from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a parameter is out of range.
    /// - [`AmmError::InvalidFee`] if the fee tier is unsupported.
    /// - [`AmmError::PriceRangeExceeded`] if the initial bin is not
    ///   priceable.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}

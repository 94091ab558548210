//! Configuration for liquidity-bin pools.

use core::fmt;

use crate::domain::{BinId, BinStep, FeeTier, TokenPair};
use crate::error::AmmError;
use crate::math::PriceCurve;

/// Bins a single swap may consume unless configured otherwise.
pub const DEFAULT_MAX_BINS_PER_SWAP: u32 = 1024;

/// What a swap does when it cannot be filled completely, either because
/// the next bin lies beyond the caller's price limit or because the pool
/// runs out of liquidity in the walk direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriceLimitPolicy {
    /// Reject the swap with `InsufficientLiquidity`.
    #[default]
    Fail,
    /// Commit the part that was filled and report the actual amounts.
    PartialFill,
}

impl fmt::Display for PriceLimitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "Fail"),
            Self::PartialFill => write!(f, "PartialFill"),
        }
    }
}

/// Configuration for a liquidity-bin pool.
///
/// Liquidity sits in discrete bins; bin `id` trades at the constant price
/// `(1 + bin_step / 10_000)^id` units of asset 1 per asset 0.
///
/// # Validation
///
/// - `fee_tier` must be strictly below 100%.
/// - `active_id` must have a representable price for `bin_step`.
/// - `max_bins_per_swap` must be greater than zero.
/// - Token distinctness is enforced by [`TokenPair`] itself.
///
/// # Examples
///
/// ```
/// use liquidity_bins::config::{BinPoolConfig, PriceLimitPolicy};
/// use liquidity_bins::domain::{Address, BinId, BinStep, Decimals, FeeTier, Token, TokenPair};
///
/// let t0 = Token::new(Address::repeat_byte(1), Decimals::new(6).expect("valid"));
/// let t1 = Token::new(Address::repeat_byte(2), Decimals::new(12).expect("valid"));
/// let pair = TokenPair::new(t0, t1).expect("distinct");
///
/// let config = BinPoolConfig::new(pair, BinStep::new(2).expect("valid"), FeeTier::TIER_0_30_PERCENT, BinId::ZERO)
///     .expect("valid")
///     .with_max_bins_per_swap(64)
///     .expect("non-zero")
///     .with_price_limit_policy(PriceLimitPolicy::PartialFill);
/// assert_eq!(config.max_bins_per_swap(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinPoolConfig {
    token_pair: TokenPair,
    bin_step: BinStep,
    fee_tier: FeeTier,
    active_id: BinId,
    max_bins_per_swap: u32,
    price_limit_policy: PriceLimitPolicy,
}

impl BinPoolConfig {
    /// Creates a configuration with the default traversal cap and the
    /// [`PriceLimitPolicy::Fail`] policy.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    /// - [`AmmError::PriceRangeExceeded`] if `active_id` is not priceable.
    pub fn new(
        token_pair: TokenPair,
        bin_step: BinStep,
        fee_tier: FeeTier,
        active_id: BinId,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_pair,
            bin_step,
            fee_tier,
            active_id,
            max_bins_per_swap: DEFAULT_MAX_BINS_PER_SWAP,
            price_limit_policy: PriceLimitPolicy::Fail,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the traversal cap.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `max_bins` is zero.
    pub fn with_max_bins_per_swap(mut self, max_bins: u32) -> Result<Self, AmmError> {
        self.max_bins_per_swap = max_bins;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the partial-fill policy.
    #[must_use]
    pub const fn with_price_limit_policy(mut self, policy: PriceLimitPolicy) -> Self {
        self.price_limit_policy = policy;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// Useful after deserializing a configuration, which bypasses
    /// [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    /// - [`AmmError::InvalidConfiguration`] if `max_bins_per_swap` is zero.
    /// - [`AmmError::PriceRangeExceeded`] if `active_id` is not priceable.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_tier.is_chargeable() {
            return Err(AmmError::InvalidFee(
                "fee tier must be below 10000 basis points (100%)",
            ));
        }
        if self.max_bins_per_swap == 0 {
            return Err(AmmError::InvalidConfiguration(
                "max bins per swap must be greater than zero",
            ));
        }
        // bin step range is enforced by BinStep; re-check for deserialized values
        BinStep::new(self.bin_step.get())?;
        PriceCurve::new(self.bin_step).price_from_id(self.active_id)?;
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the bin step.
    #[must_use]
    pub const fn bin_step(&self) -> BinStep {
        self.bin_step
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the initial active bin.
    #[must_use]
    pub const fn active_id(&self) -> BinId {
        self.active_id
    }

    /// Returns the traversal cap.
    #[must_use]
    pub const fn max_bins_per_swap(&self) -> u32 {
        self.max_bins_per_swap
    }

    /// Returns the partial-fill policy.
    #[must_use]
    pub const fn price_limit_policy(&self) -> PriceLimitPolicy {
        self.price_limit_policy
    }
}

impl fmt::Display for BinPoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinPool(step={}, fee={}, active={}, max_bins={}, policy={})",
            self.bin_step,
            self.fee_tier,
            self.active_id,
            self.max_bins_per_swap,
            self.price_limit_policy
        )
    }
}

//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use liquidity_bins::prelude::*;
//! ```

pub use crate::adapters::{InMemoryCustody, InMemoryShareLedger};
pub use crate::config::{BinPoolConfig, PriceLimitPolicy};
pub use crate::domain::{
    Address, Amount, Asset, BasisPoints, Bin, BinId, BinStep, BurnResult, Decimals, FeeTier,
    GlobalState, MintResult, Price, Rounding, Shares, SwapResult, Token, TokenPair,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{CheckedArithmetic, PriceCurve};
pub use crate::pools::{BinPool, InMemoryBinPool};
pub use crate::traits::{Custody, FromConfig, LiquidityPool, ShareLedger, SwapPool};

//! Value types of the bin engine.
//!
//! Quantities ([`Amount`], [`Shares`]), pricing ([`Price`], [`BinId`],
//! [`BinStep`], [`FeeTier`]), identities ([`Address`], [`Token`],
//! [`TokenPair`]) and the records the pool reports ([`Bin`],
//! [`GlobalState`], [`SwapResult`], [`MintResult`], [`BurnResult`]).
//! Constructors validate their invariants; arithmetic never wraps.

mod address;
mod amount;
mod asset;
pub(crate) mod basis_points;
mod bin;
mod bin_id;
mod bin_step;
mod decimals;
mod fee_tier;
mod global_state;
mod liquidity_change;
mod price;
mod rounding;
mod shares;
mod swap_result;
mod swap_spec;
mod token;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::BasisPoints;
pub use bin::{Bin, BinReserves};
pub use bin_id::BinId;
pub use bin_step::BinStep;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use global_state::GlobalState;
pub use liquidity_change::{BinDeposit, BinWithdrawal, BurnResult, MintResult};
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::SwapResult;
pub use swap_spec::{SwapSpec, WalkDirection};
pub use token::Token;
pub use token_pair::TokenPair;

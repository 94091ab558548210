//! Trait seams of the engine.
//!
//! [`SwapPool`] and [`LiquidityPool`] are what a pool offers;
//! [`Custody`] and [`ShareLedger`] are what it needs from its host;
//! [`FromConfig`] builds a pool from configuration.

mod custody;
mod from_config;
mod liquidity_pool;
mod share_ledger;
mod swap_pool;

pub use custody::Custody;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use share_ledger::ShareLedger;
pub use swap_pool::SwapPool;

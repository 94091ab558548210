//! # Liquidity Bins
//!
//! Liquidity-bin AMM engine: liquidity is concentrated in discrete price
//! bins rather than spread over a continuous curve.
//!
//! Bin `id` trades at the constant price `(1 + bin_step / 10_000)^id`
//! (asset 1 per asset 0, in raw units).  Inside a bin a swap is a plain
//! conversion at that price; larger trades walk from bin to bin.
//! Liquidity providers deposit into chosen bins and receive per-bin shares.
//!
//! # Quick Start
//!
//! ```rust
//! use liquidity_bins::config::BinPoolConfig;
//! use liquidity_bins::domain::{Address, Amount, Asset, BinId, BinStep, Decimals, FeeTier, Token, TokenPair};
//! use liquidity_bins::pools::InMemoryBinPool;
//! use liquidity_bins::traits::{FromConfig, LiquidityPool, SwapPool};
//!
//! // 1. Two tokens and a pool configuration
//! let usdc = Token::new(Address::repeat_byte(1), Decimals::new(6).expect("valid decimals"));
//! let wbtc = Token::new(Address::repeat_byte(2), Decimals::new(8).expect("valid decimals"));
//! let pair = TokenPair::new(usdc, wbtc).expect("distinct tokens");
//! let config = BinPoolConfig::new(
//!     pair,
//!     BinStep::new(10).expect("valid step"),
//!     FeeTier::TIER_0_30_PERCENT,
//!     BinId::ZERO,
//! )
//! .expect("valid config");
//! let mut pool = InMemoryBinPool::from_config(&config).expect("pool created");
//!
//! // 2. Pre-fund custody, then mint asset 1 into three bins
//! let lp = Address::repeat_byte(0xAA);
//! let each = wbtc.units(1);
//! pool.custody_mut().fund_pool(Asset::Token1, Amount::new(each.get() * 3)).expect("fits");
//! pool.mint(BinId::ZERO, &[Amount::ZERO; 3], &[each; 3], lp).expect("minted");
//!
//! // 3. Quote, pre-fund the input and swap
//! let out = wbtc.units(2);
//! let quote = pool.get_swap_in(Amount::ZERO, out).expect("liquid");
//! pool.custody_mut().fund_pool(Asset::Token0, quote.amount0_in()).expect("fits");
//! let trader = Address::repeat_byte(0xBB);
//! let result = pool.swap(Amount::ZERO, out, trader, None).expect("swap succeeded");
//!
//! assert_eq!(result.amount1_out(), out);
//! assert_eq!(result.bins_crossed(), 2);
//! assert!(result.fee().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  BinPoolConfig + FromConfig
//! └──────┬───────┘
//!        │ mint / burn / swap / quotes
//!        ▼
//! ┌──────────────┐      ┌──────────────────────────┐
//! │   BinPool    │─────▶│ Custody  +  ShareLedger  │  injected collaborators
//! └──────┬───────┘      └──────────────────────────┘
//!        │ BinLedger + GlobalState
//!        ▼
//! ┌──────────────┐
//! │     Math     │  PriceCurve, Q128.128 fixed point, per-bin swap math
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`BinId`](domain::BinId), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`Custody`](traits::Custody), [`ShareLedger`](traits::ShareLedger) |
//! | [`config`] | [`BinPoolConfig`](config::BinPoolConfig) |
//! | [`pools`]  | [`BinPool`](pools::BinPool) and its [`BinLedger`](pools::BinLedger) |
//! | [`adapters`] | In-memory custody and share ledger |
//! | [`math`]   | Checked arithmetic, fixed point, price curve, swap math |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: `debug!` for committed
//! operations, `trace!` for each bin of a swap walk and `warn!` when a walk
//! stops short.  Install any logger in the host binary to see them.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;

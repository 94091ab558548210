//! Pool configuration.
//!
//! [`BinPoolConfig`] is the validated, immutable blueprint from which a
//! [`BinPool`](crate::pools::BinPool) is built.

mod bin_pool;

pub use bin_pool::{BinPoolConfig, PriceLimitPolicy, DEFAULT_MAX_BINS_PER_SWAP};

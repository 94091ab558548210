//! The liquidity-bin pool.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `bin_ledger` | [`BinLedger`]: sparse, ordered per-bin reserves |
//! | `bin_pool` | [`BinPool`]: state, collaborators, trait impls |
//! | `liquidity` | mint and burn planning and commit |
//! | `swap` | multi-bin swap walk, quoting and commit |

mod bin_ledger;
mod bin_pool;
mod liquidity;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use bin_ledger::BinLedger;
pub use bin_pool::{BinPool, InMemoryBinPool};

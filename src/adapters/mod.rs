//! In-memory collaborators.
//!
//! Reference implementations of [`Custody`](crate::traits::Custody) and
//! [`ShareLedger`](crate::traits::ShareLedger) for tests, simulations and
//! hosts that keep everything in one process.

mod memory_custody;
mod memory_shares;

pub use memory_custody::InMemoryCustody;
pub use memory_shares::InMemoryShareLedger;

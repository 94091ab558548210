//! Per-bin outcomes of minting and burning.

use core::fmt;

use super::{Amount, BinId, Shares};

/// One bin credited by a mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinDeposit {
    /// Bin receiving the deposit.
    pub id: BinId,
    /// Asset-0 deposited.
    pub amount0: Amount,
    /// Asset-1 deposited.
    pub amount1: Amount,
    /// Shares issued for the deposit.
    pub shares: Shares,
}

/// One bin debited by a burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinWithdrawal {
    /// Bin paying out.
    pub id: BinId,
    /// Shares retired.
    pub shares: Shares,
    /// Asset-0 paid.
    pub amount0: Amount,
    /// Asset-1 paid.
    pub amount1: Amount,
}

/// Outcome of a mint, one entry per requested bin (in request order).
///
/// A bin requested with two zero amounts has an entry with zero shares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MintResult {
    deposits: Vec<BinDeposit>,
    total0: Amount,
    total1: Amount,
}

impl MintResult {
    pub(crate) const fn new(deposits: Vec<BinDeposit>, total0: Amount, total1: Amount) -> Self {
        Self {
            deposits,
            total0,
            total1,
        }
    }

    /// Per-bin deposits.
    #[must_use]
    pub fn deposits(&self) -> &[BinDeposit] {
        &self.deposits
    }

    /// Shares issued per bin, in request order.
    #[must_use]
    pub fn shares(&self) -> Vec<Shares> {
        self.deposits.iter().map(|d| d.shares).collect()
    }

    /// Total asset-0 deposited.
    pub const fn total0(&self) -> Amount {
        self.total0
    }

    /// Total asset-1 deposited.
    pub const fn total1(&self) -> Amount {
        self.total1
    }
}

impl fmt::Display for MintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mint(bins={}, amount0={}, amount1={})",
            self.deposits.len(),
            self.total0,
            self.total1
        )
    }
}

/// Outcome of a burn, one entry per requested id (in request order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BurnResult {
    withdrawals: Vec<BinWithdrawal>,
    total0: Amount,
    total1: Amount,
}

impl BurnResult {
    pub(crate) const fn new(withdrawals: Vec<BinWithdrawal>, total0: Amount, total1: Amount) -> Self {
        Self {
            withdrawals,
            total0,
            total1,
        }
    }

    /// Per-bin withdrawals.
    #[must_use]
    pub fn withdrawals(&self) -> &[BinWithdrawal] {
        &self.withdrawals
    }

    /// Asset-0 paid per requested id.
    #[must_use]
    pub fn amounts0(&self) -> Vec<Amount> {
        self.withdrawals.iter().map(|w| w.amount0).collect()
    }

    /// Asset-1 paid per requested id.
    #[must_use]
    pub fn amounts1(&self) -> Vec<Amount> {
        self.withdrawals.iter().map(|w| w.amount1).collect()
    }

    /// Total asset-0 paid to the recipient.
    pub const fn total0(&self) -> Amount {
        self.total0
    }

    /// Total asset-1 paid to the recipient.
    pub const fn total1(&self) -> Amount {
        self.total1
    }
}

impl fmt::Display for BurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Burn(bins={}, amount0={}, amount1={})",
            self.withdrawals.len(),
            self.total0,
            self.total1
        )
    }
}

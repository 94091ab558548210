//! In-memory share ledger.

use std::collections::HashMap;

use crate::domain::{Address, BinId, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::ShareLedger;

/// Share balances keyed by `(holder, bin)` plus a supply per bin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryShareLedger {
    balances: HashMap<(Address, BinId), Shares>,
    supply: HashMap<BinId, Shares>,
}

impl InMemoryShareLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn debit(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError> {
        let balance = self.balance_of(holder, id);
        let left = balance
            .checked_sub(&shares)
            .ok_or(AmmError::UnauthorizedRedeem("holder owns fewer shares"))?;
        if left.is_zero() {
            self.balances.remove(&(*holder, id));
        } else {
            self.balances.insert((*holder, id), left);
        }
        Ok(())
    }
}

impl ShareLedger for InMemoryShareLedger {
    fn balance_of(&self, holder: &Address, id: BinId) -> Shares {
        self.balances
            .get(&(*holder, id))
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    fn total_supply(&self, id: BinId) -> Shares {
        self.supply.get(&id).copied().unwrap_or(Shares::ZERO)
    }

    fn mint(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError> {
        let supply = self.total_supply(id).safe_add(&shares)?;
        let balance = self.balance_of(holder, id).safe_add(&shares)?;
        self.supply.insert(id, supply);
        self.balances.insert((*holder, id), balance);
        Ok(())
    }

    fn burn(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError> {
        if self.balance_of(holder, id) < shares {
            return Err(AmmError::UnauthorizedRedeem("holder owns fewer shares"));
        }
        let supply = self.total_supply(id).safe_sub(&shares)?;
        self.debit(holder, id, shares)?;
        self.supply.insert(id, supply);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        id: BinId,
        shares: Shares,
    ) -> Result<(), AmmError> {
        if self.balance_of(from, id) < shares {
            return Err(AmmError::UnauthorizedRedeem("holder owns fewer shares"));
        }
        if from == to || shares.is_zero() {
            return Ok(());
        }
        let received = self.balance_of(to, id).safe_add(&shares)?;
        self.debit(from, id, shares)?;
        self.balances.insert((*to, id), received);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::repeat_byte(0xA1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xB0)
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let mut l = InMemoryShareLedger::new();
        let Ok(()) = l.mint(&alice(), BinId::ZERO, Shares::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.mint(&bob(), BinId::ZERO, Shares::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.total_supply(BinId::ZERO), Shares::new(150));
        let Ok(()) = l.burn(&alice(), BinId::ZERO, Shares::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice(), BinId::ZERO), Shares::ZERO);
        assert_eq!(l.total_supply(BinId::ZERO), Shares::new(50));
    }

    #[test]
    fn burning_more_than_owned_is_unauthorized() {
        let mut l = InMemoryShareLedger::new();
        let Ok(()) = l.mint(&alice(), BinId::ZERO, Shares::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.mint(&bob(), BinId::ZERO, Shares::new(10)) else {
            panic!("expected Ok");
        };
        let before = l.clone();
        let Err(AmmError::UnauthorizedRedeem(_)) = l.burn(&alice(), BinId::ZERO, Shares::new(11)) else {
            panic!("expected UnauthorizedRedeem");
        };
        assert_eq!(l, before);
    }

    #[test]
    fn transfer_moves_balance_not_supply() {
        let mut l = InMemoryShareLedger::new();
        let Ok(()) = l.mint(&alice(), BinId::ZERO, Shares::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.transfer(&alice(), &bob(), BinId::ZERO, Shares::new(4)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice(), BinId::ZERO), Shares::new(6));
        assert_eq!(l.balance_of(&bob(), BinId::ZERO), Shares::new(4));
        assert_eq!(l.total_supply(BinId::ZERO), Shares::new(10));

        let Err(AmmError::UnauthorizedRedeem(_)) =
            l.transfer(&bob(), &alice(), BinId::ZERO, Shares::new(5))
        else {
            panic!("expected UnauthorizedRedeem");
        };
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut l = InMemoryShareLedger::new();
        let Ok(()) = l.mint(&alice(), BinId::ZERO, Shares::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.transfer(&alice(), &alice(), BinId::ZERO, Shares::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice(), BinId::ZERO), Shares::new(10));
    }
}

//! In-memory custody.

use std::collections::HashMap;

use crate::domain::{Address, Amount, Asset};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::Custody;

/// Custody backed by plain maps: one balance per asset for the pool and one
/// per `(account, asset)` for everybody it has paid.
///
/// [`fund_pool`](Self::fund_pool) models the transfer a caller makes into
/// the pool before calling `mint` or `swap`.
///
/// # Examples
///
/// ```
/// use liquidity_bins::adapters::InMemoryCustody;
/// use liquidity_bins::domain::{Address, Amount, Asset};
/// use liquidity_bins::traits::Custody;
///
/// let mut custody = InMemoryCustody::new();
/// custody.fund_pool(Asset::Token0, Amount::new(100)).expect("fits");
/// let alice = Address::repeat_byte(0xA1);
/// custody.transfer_out(Asset::Token0, &alice, Amount::new(40)).expect("held");
/// assert_eq!(custody.pool_balance(Asset::Token0), Amount::new(60));
/// assert_eq!(custody.balance_of(&alice, Asset::Token0), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCustody {
    pool0: Amount,
    pool1: Amount,
    accounts: HashMap<(Address, Asset), Amount>,
}

impl InMemoryCustody {
    /// Empty custody.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the pool balance overflows.
    pub fn fund_pool(&mut self, asset: Asset, amount: Amount) -> Result<(), AmmError> {
        let slot = self.pool_slot(asset);
        *slot = slot.safe_add(&amount)?;
        Ok(())
    }

    /// What `account` has received of `asset`.
    pub fn balance_of(&self, account: &Address, asset: Asset) -> Amount {
        self.accounts
            .get(&(*account, asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn pool_slot(&mut self, asset: Asset) -> &mut Amount {
        match asset {
            Asset::Token0 => &mut self.pool0,
            Asset::Token1 => &mut self.pool1,
        }
    }
}

impl Custody for InMemoryCustody {
    fn pool_balance(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token0 => self.pool0,
            Asset::Token1 => self.pool1,
        }
    }

    fn transfer_out(&mut self, asset: Asset, recipient: &Address, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        let held = self.pool_balance(asset);
        let remaining = held
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientReserve("custody holds less than the payout"))?;
        let received = self.balance_of(recipient, asset).safe_add(&amount)?;
        *self.pool_slot(asset) = remaining;
        self.accounts.insert((*recipient, asset), received);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fund_and_pay() {
        let mut c = InMemoryCustody::new();
        let bob = Address::repeat_byte(0xB0);
        let Ok(()) = c.fund_pool(Asset::Token1, Amount::new(10)) else {
            panic!("expected Ok");
        };
        let Ok(()) = c.transfer_out(Asset::Token1, &bob, Amount::new(4)) else {
            panic!("expected Ok");
        };
        let Ok(()) = c.transfer_out(Asset::Token1, &bob, Amount::new(6)) else {
            panic!("expected Ok");
        };
        assert_eq!(c.pool_balance(Asset::Token1), Amount::ZERO);
        assert_eq!(c.balance_of(&bob, Asset::Token1), Amount::new(10));
        assert_eq!(c.balance_of(&bob, Asset::Token0), Amount::ZERO);
    }

    #[test]
    fn overdraw_leaves_state_untouched() {
        let mut c = InMemoryCustody::new();
        let bob = Address::repeat_byte(0xB0);
        let Ok(()) = c.fund_pool(Asset::Token0, Amount::new(3)) else {
            panic!("expected Ok");
        };
        let before = c.clone();
        let Err(AmmError::InsufficientReserve(_)) = c.transfer_out(Asset::Token0, &bob, Amount::new(4))
        else {
            panic!("expected InsufficientReserve");
        };
        assert_eq!(c, before);
    }

    #[test]
    fn fund_overflow() {
        let mut c = InMemoryCustody::new();
        let Ok(()) = c.fund_pool(Asset::Token0, Amount::MAX) else {
            panic!("expected Ok");
        };
        let Err(AmmError::Overflow(_)) = c.fund_pool(Asset::Token0, Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }
}

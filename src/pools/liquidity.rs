//! Minting and burning bin shares.
//!
//! A deposit is valued in asset-1 units at the bin's own price.  The first
//! deposit into a bin fixes the share rate at one share per unit of value;
//! later deposits receive shares pro rata to the bin's current value.
//! Withdrawals pay `reserve * shares / supply` rounded down; the rounding
//! residue stays in the bin for the remaining holders.

use std::collections::HashMap;

use log::{debug, error};
use primitive_types::U256;

use crate::domain::{
    Address, Amount, Asset, BinDeposit, BinId, BinReserves, BinWithdrawal, BurnResult, MintResult,
    Price, Rounding, Shares,
};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::pools::BinPool;
use crate::traits::{Custody, ShareLedger};

/// A verified deposit, not yet applied.
#[derive(Debug, Clone)]
pub(super) struct MintPlan {
    start_id: BinId,
    deposits: Vec<BinDeposit>,
    total0: Amount,
    total1: Amount,
}

/// A verified withdrawal, not yet applied.
#[derive(Debug, Clone)]
pub(super) struct BurnPlan {
    withdrawals: Vec<BinWithdrawal>,
    total0: Amount,
    total1: Amount,
}

/// Value of `reserves` in asset-1 units at `price`, floored.
fn value_at(price: Price, amount0: Amount, amount1: Amount) -> Result<U256, AmmError> {
    let converted = price.quote_wide(amount0, Asset::Token0, Rounding::Down)?;
    converted
        .checked_add(amount1.to_u256())
        .ok_or(AmmError::Overflow("bin value overflow"))
}

fn check_lengths(left: usize, right: usize) -> Result<(), AmmError> {
    if left == 0 {
        return Err(AmmError::InvalidInput("no bins given"));
    }
    if left != right {
        return Err(AmmError::InvalidInput("array lengths differ"));
    }
    Ok(())
}

impl<L: ShareLedger, C: Custody> BinPool<L, C> {
    /// Shares issued for depositing `value` into a bin.
    fn shares_for(&self, id: BinId, price: Price, value: U256) -> Result<Shares, AmmError> {
        let supply = self.shares.total_supply(id);
        let shares = if supply.is_zero() {
            value
        } else {
            let reserves = self.state.ledger.reserves(id);
            let existing = value_at(price, reserves.reserve0(), reserves.reserve1())?;
            if existing.is_zero() {
                return Err(AmmError::InvalidInput("bin has shares but no value"));
            }
            mul_div(value, supply.to_u256(), existing, Rounding::Down)
                .ok_or(AmmError::Overflow("share computation overflow"))?
        };
        Shares::from_u256(shares).ok_or(AmmError::Overflow("share amount exceeds u128"))
    }

    pub(super) fn plan_mint(
        &self,
        start_id: BinId,
        amounts0: &[Amount],
        amounts1: &[Amount],
    ) -> Result<MintPlan, AmmError> {
        check_lengths(amounts0.len(), amounts1.len())?;

        let mut deposits = Vec::with_capacity(amounts0.len());
        let mut total0 = Amount::ZERO;
        let mut total1 = Amount::ZERO;
        for (offset, (&amount0, &amount1)) in amounts0.iter().zip(amounts1).enumerate() {
            let id = i32::try_from(offset)
                .ok()
                .and_then(|delta| start_id.checked_add(delta))
                .ok_or(AmmError::PriceRangeExceeded("deposit range leaves the bin window"))?;
            let price = self.curve.price_from_id(id)?;
            let shares = if amount0.is_zero() && amount1.is_zero() {
                Shares::ZERO
            } else {
                let value = value_at(price, amount0, amount1)?;
                let shares = self.shares_for(id, price, value)?;
                if shares.is_zero() {
                    return Err(AmmError::InvalidInput("deposit too small to mint shares"));
                }
                shares
            };
            total0 = total0.safe_add(&amount0)?;
            total1 = total1.safe_add(&amount1)?;
            deposits.push(BinDeposit {
                id,
                amount0,
                amount1,
                shares,
            });
        }

        if self.unaccounted(Asset::Token0) < total0 || self.unaccounted(Asset::Token1) < total1 {
            return Err(AmmError::InvalidInput(
                "deposit exceeds the pre-funded custody balance",
            ));
        }
        Ok(MintPlan {
            start_id,
            deposits,
            total0,
            total1,
        })
    }

    pub(super) fn commit_mint(
        &mut self,
        plan: MintPlan,
        recipient: Address,
    ) -> Result<MintResult, AmmError> {
        let saved = self.state.checkpoint(plan.deposits.iter().map(|d| d.id));
        if let Err(e) = self.apply_mint(&plan) {
            self.restore(saved);
            return Err(e);
        }

        let mut issued: Vec<(BinId, Shares)> = Vec::with_capacity(plan.deposits.len());
        for deposit in plan.deposits.iter().filter(|d| !d.shares.is_zero()) {
            if let Err(e) = self.shares.mint(&recipient, deposit.id, deposit.shares) {
                for (id, shares) in &issued {
                    if let Err(undo) = self.shares.burn(&recipient, *id, *shares) {
                        error!("could not retire {shares} shares of bin {id} after failed mint: {undo}");
                    }
                }
                self.restore(saved);
                return Err(e);
            }
            issued.push((deposit.id, deposit.shares));
        }

        let result = MintResult::new(plan.deposits, plan.total0, plan.total1);
        debug!(
            "{result} from bin {} for {recipient}, reserves now {}",
            plan.start_id, self.state.global
        );
        Ok(result)
    }

    fn apply_mint(&mut self, plan: &MintPlan) -> Result<(), AmmError> {
        for deposit in &plan.deposits {
            self.state
                .ledger
                .credit(deposit.id, deposit.amount0, deposit.amount1)?;
        }
        let global = &mut self.state.global;
        global.reserve0 = global.reserve0.safe_add(&plan.total0)?;
        global.reserve1 = global.reserve1.safe_add(&plan.total1)?;
        global.current_id = plan.start_id;
        Ok(())
    }

    pub(super) fn plan_burn(
        &self,
        owner: &Address,
        ids: &[BinId],
        shares: &[Shares],
    ) -> Result<BurnPlan, AmmError> {
        check_lengths(ids.len(), shares.len())?;

        // Working view so repeated ids see earlier withdrawals.
        let mut requested: HashMap<BinId, Shares> = HashMap::new();
        let mut working: HashMap<BinId, (BinReserves, Shares)> = HashMap::new();
        let mut withdrawals = Vec::with_capacity(ids.len());
        let mut total0 = Amount::ZERO;
        let mut total1 = Amount::ZERO;

        for (&id, &burned) in ids.iter().zip(shares) {
            let cumulative = requested.entry(id).or_default();
            *cumulative = cumulative.safe_add(&burned)?;
            if *cumulative > self.shares.balance_of(owner, id) {
                return Err(AmmError::UnauthorizedRedeem(
                    "burn exceeds the owner's shares",
                ));
            }
            if burned.is_zero() {
                withdrawals.push(BinWithdrawal {
                    id,
                    shares: burned,
                    amount0: Amount::ZERO,
                    amount1: Amount::ZERO,
                });
                continue;
            }

            let (reserves, supply) = working
                .entry(id)
                .or_insert_with(|| (self.state.ledger.reserves(id), self.shares.total_supply(id)));
            let amount0 = reserves
                .reserve0()
                .safe_mul_div(burned.get(), supply.get(), Rounding::Down)?;
            let amount1 = reserves
                .reserve1()
                .safe_mul_div(burned.get(), supply.get(), Rounding::Down)?;
            *reserves = reserves.debit(amount0, amount1)?;
            *supply = supply.safe_sub(&burned)?;

            total0 = total0.safe_add(&amount0)?;
            total1 = total1.safe_add(&amount1)?;
            withdrawals.push(BinWithdrawal {
                id,
                shares: burned,
                amount0,
                amount1,
            });
        }

        if self.custody.pool_balance(Asset::Token0) < total0
            || self.custody.pool_balance(Asset::Token1) < total1
        {
            return Err(AmmError::InsufficientReserve(
                "custody cannot cover the withdrawal",
            ));
        }
        Ok(BurnPlan {
            withdrawals,
            total0,
            total1,
        })
    }

    pub(super) fn commit_burn(
        &mut self,
        plan: BurnPlan,
        owner: Address,
        recipient: Address,
    ) -> Result<BurnResult, AmmError> {
        let saved = self.state.checkpoint(plan.withdrawals.iter().map(|w| w.id));
        if let Err(e) = self.apply_burn(&plan) {
            self.restore(saved);
            return Err(e);
        }

        let mut retired: Vec<(BinId, Shares)> = Vec::with_capacity(plan.withdrawals.len());
        for w in plan.withdrawals.iter().filter(|w| !w.shares.is_zero()) {
            if let Err(e) = self.shares.burn(&owner, w.id, w.shares) {
                self.reissue(&owner, &retired);
                self.restore(saved);
                return Err(e);
            }
            retired.push((w.id, w.shares));
        }

        if let Err(e) = self
            .custody
            .transfer_out(Asset::Token0, &recipient, plan.total0)
        {
            self.reissue(&owner, &retired);
            self.restore(saved);
            return Err(e);
        }
        if let Err(e) = self
            .custody
            .transfer_out(Asset::Token1, &recipient, plan.total1)
        {
            error!(
                "asset-1 payout of {} to {recipient} failed after {} of asset 0 was paid: {e}",
                plan.total1, plan.total0
            );
            self.reissue(&owner, &retired);
            self.restore(saved);
            return Err(e);
        }

        let result = BurnResult::new(plan.withdrawals, plan.total0, plan.total1);
        debug!("{result} by {owner} to {recipient}, reserves now {}", self.state.global);
        Ok(result)
    }

    fn apply_burn(&mut self, plan: &BurnPlan) -> Result<(), AmmError> {
        for w in &plan.withdrawals {
            self.state.ledger.debit(w.id, w.amount0, w.amount1)?;
        }
        let global = &mut self.state.global;
        global.reserve0 = global.reserve0.safe_sub(&plan.total0)?;
        global.reserve1 = global.reserve1.safe_sub(&plan.total1)?;
        Ok(())
    }

    /// Gives back shares retired by a burn that could not complete.
    fn reissue(&mut self, owner: &Address, retired: &[(BinId, Shares)]) {
        for (id, shares) in retired {
            if let Err(e) = self.shares.mint(owner, *id, *shares) {
                error!("could not reissue {shares} shares of bin {id} to {owner}: {e}");
            }
        }
    }
}

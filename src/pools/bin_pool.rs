//! Liquidity-bin pool.
//!
//! Liquidity lives in discrete bins.  Bin `id` trades at the constant
//! price `(1 + bin_step / 10_000)^id` (asset 1 per asset 0), so within a
//! bin a swap is a plain conversion; larger trades walk across bins.
//!
//! # Ownership
//!
//! The pool owns the bin reserves and the aggregate [`GlobalState`].  Asset
//! balances live in a [`Custody`] and share ownership in a
//! [`ShareLedger`]; both are injected.  Pass `&mut` references to keep
//! ownership of the collaborators outside the pool.
//!
//! # Atomicity
//!
//! `mint`, `burn` and `swap` first build a plan against read-only state,
//! verifying every precondition, and only then commit.  If a collaborator
//! still fails during the commit, the pool restores its previous state and
//! undoes the share-ledger calls it already made.
//!
//! # Examples
//!
//! ```
//! use liquidity_bins::config::BinPoolConfig;
//! use liquidity_bins::domain::{Address, Amount, Asset, BinId, BinStep, Decimals, FeeTier, Token, TokenPair};
//! use liquidity_bins::pools::InMemoryBinPool;
//! use liquidity_bins::traits::{FromConfig, LiquidityPool, SwapPool};
//!
//! let t0 = Token::new(Address::repeat_byte(1), Decimals::new(6).expect("valid"));
//! let t1 = Token::new(Address::repeat_byte(2), Decimals::new(6).expect("valid"));
//! let pair = TokenPair::new(t0, t1).expect("distinct");
//! let config = BinPoolConfig::new(pair, BinStep::new(1).expect("valid"), FeeTier::ZERO, BinId::ZERO)
//!     .expect("valid");
//! let mut pool = InMemoryBinPool::from_config(&config).expect("valid");
//!
//! let lp = Address::repeat_byte(0xAA);
//! pool.custody_mut().fund_pool(Asset::Token0, Amount::new(1_000)).expect("fits");
//! pool.mint(BinId::ZERO, &[Amount::new(1_000)], &[Amount::ZERO], lp).expect("minted");
//!
//! let quote = pool.get_swap_in(Amount::new(100), Amount::ZERO).expect("liquid");
//! assert_eq!(quote.amount1_in(), Amount::new(100));
//! ```

use crate::adapters::{InMemoryCustody, InMemoryShareLedger};
use crate::config::BinPoolConfig;
use crate::domain::{
    Address, Amount, Bin, BinId, BurnResult, FeeTier, GlobalState, MintResult, Price, Shares,
    SwapResult, SwapSpec, TokenPair,
};
use crate::error::AmmError;
use crate::math::PriceCurve;
use crate::pools::bin_ledger::BinSnapshot;
use crate::pools::BinLedger;
use crate::traits::{Custody, FromConfig, LiquidityPool, ShareLedger, SwapPool};

/// Mutable engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PoolState {
    pub(super) ledger: BinLedger,
    pub(super) global: GlobalState,
}

/// The bins an operation touches plus the aggregates, captured before it
/// commits.  Its size follows the operation, not the ledger.
#[derive(Debug, Clone)]
pub(super) struct Checkpoint {
    bins: BinSnapshot,
    global: GlobalState,
}

impl PoolState {
    pub(super) fn checkpoint(&self, ids: impl IntoIterator<Item = BinId>) -> Checkpoint {
        Checkpoint {
            bins: self.ledger.snapshot(ids),
            global: self.global,
        }
    }
}

/// A [`BinPool`] with in-memory collaborators.
pub type InMemoryBinPool = BinPool<InMemoryShareLedger, InMemoryCustody>;

/// A liquidity-bin AMM pool with injected share ledger `L` and custody `C`.
///
/// Built from a [`BinPoolConfig`] with
/// [`with_collaborators`](Self::with_collaborators), or via [`FromConfig`]
/// with in-memory collaborators.
#[derive(Debug, Clone)]
pub struct BinPool<L, C> {
    pub(super) config: BinPoolConfig,
    pub(super) curve: PriceCurve,
    pub(super) state: PoolState,
    pub(super) shares: L,
    pub(super) custody: C,
}

impl<L: ShareLedger, C: Custody> BinPool<L, C> {
    /// Creates an empty pool positioned at the configured active bin.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`BinPoolConfig::validate`].
    pub fn with_collaborators(config: BinPoolConfig, shares: L, custody: C) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            curve: PriceCurve::new(config.bin_step()),
            state: PoolState {
                ledger: BinLedger::new(),
                global: GlobalState::at(config.active_id()),
            },
            config,
            shares,
            custody,
        })
    }

    /// The pool configuration.
    #[must_use]
    pub const fn config(&self) -> &BinPoolConfig {
        &self.config
    }

    /// The pool's price curve.
    #[must_use]
    pub const fn curve(&self) -> &PriceCurve {
        &self.curve
    }

    /// `price(id)` for this pool's bin step.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PriceRangeExceeded`] outside the price window.
    pub fn price_from_id(&self, id: BinId) -> Result<Price, AmmError> {
        self.curve.price_from_id(id)
    }

    /// Greatest bin whose price does not exceed `price`.
    ///
    /// # Errors
    ///
    /// See [`PriceCurve::id_from_price`].
    pub fn id_from_price(&self, price: Price) -> Result<BinId, AmmError> {
        self.curve.id_from_price(price)
    }

    /// Every materialized bin, in ascending id order.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.state.ledger.iter().filter_map(|(id, reserves)| {
            self.curve
                .price_from_id(id)
                .ok()
                .map(|price| Bin::new(id, reserves, price))
        })
    }

    /// Number of materialized bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.state.ledger.len()
    }

    /// The reserve ledger.
    #[must_use]
    pub const fn ledger(&self) -> &BinLedger {
        &self.state.ledger
    }

    /// The share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &L {
        &self.shares
    }

    /// Mutable access to the share ledger, for holder-initiated transfers.
    pub fn share_ledger_mut(&mut self) -> &mut L {
        &mut self.shares
    }

    /// The custody.
    #[must_use]
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Mutable access to the custody, for pre-funding.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// Shares of bin `id` held by `holder`.
    pub fn shares_of(&self, holder: &Address, id: BinId) -> Shares {
        self.shares.balance_of(holder, id)
    }

    /// Verifies that the aggregate reserves equal the sum over all bins.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserve`] on a mismatch and
    /// [`AmmError::Overflow`] if the sums overflow.
    pub fn check_reserves_invariant(&self) -> Result<(), AmmError> {
        let (total0, total1) = self.state.ledger.totals()?;
        let global = self.state.global;
        if total0 != global.reserve0 || total1 != global.reserve1 {
            return Err(AmmError::InsufficientReserve(
                "global reserves diverge from bin reserves",
            ));
        }
        Ok(())
    }

    /// Restores `saved` after a failed commit.
    pub(super) fn restore(&mut self, saved: Checkpoint) {
        self.state.ledger.rollback(saved.bins);
        self.state.global = saved.global;
    }
}

impl FromConfig<BinPoolConfig> for InMemoryBinPool {
    /// Builds a pool with fresh in-memory collaborators.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`BinPoolConfig::validate`].
    fn from_config(config: &BinPoolConfig) -> Result<Self, AmmError> {
        Self::with_collaborators(*config, InMemoryShareLedger::new(), InMemoryCustody::new())
    }
}

impl<L: ShareLedger, C: Custody> SwapPool for BinPool<L, C> {
    fn swap(
        &mut self,
        amount0_out: Amount,
        amount1_out: Amount,
        recipient: Address,
        price_limit: Option<Price>,
    ) -> Result<SwapResult, AmmError> {
        let spec = SwapSpec::from_outputs(amount0_out, amount1_out)?;
        self.execute_swap(spec, recipient, price_limit)
    }

    fn get_swap_in(&self, amount0_out: Amount, amount1_out: Amount) -> Result<SwapResult, AmmError> {
        let spec = SwapSpec::from_outputs(amount0_out, amount1_out)?;
        self.quote(spec)
    }

    fn get_swap_out(&self, amount0_in: Amount, amount1_in: Amount) -> Result<SwapResult, AmmError> {
        let spec = SwapSpec::from_inputs(amount0_in, amount1_in)?;
        self.quote(spec)
    }

    fn token_pair(&self) -> &TokenPair {
        self.config.token_pair()
    }

    fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }
}

impl<L: ShareLedger, C: Custody> LiquidityPool for BinPool<L, C> {
    fn mint(
        &mut self,
        start_id: BinId,
        amounts0: &[Amount],
        amounts1: &[Amount],
        recipient: Address,
    ) -> Result<MintResult, AmmError> {
        let plan = self.plan_mint(start_id, amounts0, amounts1)?;
        self.commit_mint(plan, recipient)
    }

    fn burn(
        &mut self,
        owner: Address,
        ids: &[BinId],
        shares: &[Shares],
        recipient: Address,
    ) -> Result<BurnResult, AmmError> {
        let plan = self.plan_burn(&owner, ids, shares)?;
        self.commit_burn(plan, owner, recipient)
    }

    fn get_bin(&self, id: BinId) -> Result<Bin, AmmError> {
        let price = self.curve.price_from_id(id)?;
        Ok(Bin::new(id, self.state.ledger.reserves(id), price))
    }

    fn global(&self) -> GlobalState {
        self.state.global
    }
}

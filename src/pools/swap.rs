//! Multi-bin swap walk.
//!
//! # Algorithm
//!
//! 1. Buying asset 0 walks down from the active bin, buying asset 1 walks
//!    up.  Bins without the output asset are skipped.
//! 2. Each bin converts at its own price; the fee is added to the input
//!    and stays in that bin.
//! 3. The walk stops when the request is satisfied, when the next bin is
//!    beyond the price limit, when liquidity runs out, or when
//!    `max_bins_per_swap` bins have been consumed.
//! 4. The swap takes the whole pre-funded input.  Whatever the walk did not
//!    need is credited to the last bin touched, so it accrues to that bin's
//!    liquidity providers instead of lingering unaccounted in custody.
//! 5. The plan is committed in one step: bin deltas, aggregate reserves,
//!    active bin, then the payout through custody.  Only the touched bins
//!    are captured for rollback.

use log::{debug, trace, warn};

use crate::config::PriceLimitPolicy;
use crate::domain::{
    Address, Amount, Asset, BinId, Price, SwapResult, SwapSpec, WalkDirection,
};
use crate::error::AmmError;
use crate::math::{fill_exact_in, fill_exact_out, BinFill, CheckedArithmetic};
use crate::pools::BinPool;
use crate::traits::{Custody, ShareLedger};

/// Why a walk ended before the request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortfall {
    PriceLimit,
    Exhausted,
    TraversalCap,
}

/// A fully computed swap, not yet applied.
#[derive(Debug, Clone)]
struct SwapPlan {
    spec: SwapSpec,
    steps: Vec<(BinId, BinFill)>,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    surplus: Amount,
    shortfall: Option<Shortfall>,
}

impl SwapPlan {
    fn new(spec: SwapSpec) -> Self {
        Self {
            spec,
            steps: Vec::new(),
            amount_in: Amount::ZERO,
            amount_out: Amount::ZERO,
            fee: Amount::ZERO,
            surplus: Amount::ZERO,
            shortfall: None,
        }
    }

    fn push(&mut self, id: BinId, fill: BinFill) -> Result<(), AmmError> {
        self.amount_in = self.amount_in.safe_add(&fill.amount_in)?;
        self.amount_out = self.amount_out.safe_add(&fill.amount_out)?;
        self.fee = self.fee.safe_add(&fill.fee)?;
        self.steps.push((id, fill));
        Ok(())
    }

    fn last_id(&self, fallback: BinId) -> BinId {
        self.steps.last().map_or(fallback, |(id, _)| *id)
    }

    /// Claims the whole of `funded`, which must cover the walk's cost.  An
    /// empty walk has no bin to credit and claims nothing.
    fn absorb(&mut self, funded: Amount) -> Result<(), AmmError> {
        if self.steps.is_empty() {
            return Ok(());
        }
        self.surplus = funded.safe_sub(&self.amount_in)?;
        Ok(())
    }

    /// Input charged to the trader: the walk's cost plus the surplus.
    fn charged(&self) -> Result<Amount, AmmError> {
        self.amount_in.safe_add(&self.surplus)
    }

    fn touched(&self) -> impl Iterator<Item = BinId> + '_ {
        self.steps.iter().map(|(id, _)| *id)
    }

    fn result(&self, fallback_id: BinId) -> Result<SwapResult, AmmError> {
        let bins = u32::try_from(self.steps.len()).unwrap_or(u32::MAX);
        Ok(
            SwapResult::new(self.spec.input_asset(), self.charged()?, self.amount_out)
                .with_fee(self.fee)
                .with_surplus(self.surplus)
                .with_walk(bins, self.last_id(fallback_id), self.shortfall.is_none()),
        )
    }
}

/// `true` if a bin at `price` may be consumed under `limit`.
fn within_limit(price: Price, limit: Option<Price>, direction: WalkDirection) -> bool {
    match (limit, direction) {
        (None, _) => true,
        (Some(limit), WalkDirection::Down) => price >= limit,
        (Some(limit), WalkDirection::Up) => price <= limit,
    }
}

impl<L: ShareLedger, C: Custody> BinPool<L, C> {
    /// Plans the walk for `spec` without touching any state.
    fn plan_swap(&self, spec: SwapSpec, price_limit: Option<Price>) -> Result<SwapPlan, AmmError> {
        let direction = spec.direction();
        let output = spec.output_asset();
        let input = spec.input_asset();
        let fee = self.config.fee_tier();
        let max_bins = usize::try_from(self.config.max_bins_per_swap()).unwrap_or(usize::MAX);
        let start = self.state.global.current_id;

        let mut plan = SwapPlan::new(spec);
        let mut remaining = spec.amount();

        for (id, reserves) in self.state.ledger.walk(start, direction, output) {
            if remaining.is_zero() {
                break;
            }
            let price = self.curve.price_from_id(id)?;
            if !within_limit(price, price_limit, direction) {
                plan.shortfall = Some(Shortfall::PriceLimit);
                break;
            }
            if plan.steps.len() >= max_bins {
                plan.shortfall = Some(Shortfall::TraversalCap);
                break;
            }
            let available = reserves.of(output);
            let fill = if spec.is_exact_in() {
                fill_exact_in(price, remaining, available, input, fee)?
            } else {
                fill_exact_out(price, remaining, available, output, fee)?
            };
            if fill.is_empty() {
                break;
            }
            trace!(
                "swap step {id}: in={} out={} fee={} at {price}",
                fill.amount_in,
                fill.amount_out,
                fill.fee
            );
            remaining = if spec.is_exact_in() {
                remaining.safe_sub(&fill.amount_in)?
            } else {
                remaining.safe_sub(&fill.amount_out)?
            };
            plan.push(id, fill)?;
        }

        if !remaining.is_zero() && plan.shortfall.is_none() {
            plan.shortfall = Some(Shortfall::Exhausted);
        }
        Ok(plan)
    }

    /// Applies the pool's shortfall policy to a plan.
    fn settle_shortfall(&self, plan: &SwapPlan) -> Result<(), AmmError> {
        let Some(shortfall) = plan.shortfall else {
            return Ok(());
        };
        match shortfall {
            Shortfall::TraversalCap => {
                warn!(
                    "swap {} hit the traversal cap of {} bins",
                    plan.spec,
                    self.config.max_bins_per_swap()
                );
                Err(AmmError::InsufficientLiquidity)
            }
            Shortfall::PriceLimit | Shortfall::Exhausted => {
                warn!(
                    "swap {} stopped short ({shortfall:?}) after {} of {}",
                    plan.spec,
                    plan.amount_out,
                    plan.spec.amount()
                );
                match self.config.price_limit_policy() {
                    PriceLimitPolicy::Fail => Err(AmmError::InsufficientLiquidity),
                    PriceLimitPolicy::PartialFill if plan.amount_out.is_zero() => {
                        Err(AmmError::InsufficientLiquidity)
                    }
                    PriceLimitPolicy::PartialFill => Ok(()),
                }
            }
        }
    }

    /// Pure quote for `spec`.
    ///
    /// Exact-output quotes follow the swap rules under the `Fail` policy.
    /// Exact-input quotes report whatever output the reachable bins supply.
    pub(super) fn quote(&self, spec: SwapSpec) -> Result<SwapResult, AmmError> {
        let plan = self.plan_swap(spec, None)?;
        if plan.amount_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        if !spec.is_exact_in() && plan.shortfall.is_some() {
            if plan.shortfall == Some(Shortfall::TraversalCap) {
                warn!("quote {spec} exceeds the traversal cap");
            }
            return Err(AmmError::InsufficientLiquidity);
        }
        plan.result(self.state.global.current_id)
    }

    /// Input of `asset` sitting in custody beyond the accounted reserve.
    pub(super) fn unaccounted(&self, asset: Asset) -> Amount {
        self.custody
            .pool_balance(asset)
            .saturating_sub(&self.state.global.reserve(asset))
    }

    /// Plans, verifies and commits an exact-output swap.
    pub(super) fn execute_swap(
        &mut self,
        spec: SwapSpec,
        recipient: Address,
        price_limit: Option<Price>,
    ) -> Result<SwapResult, AmmError> {
        let mut plan = self.plan_swap(spec, price_limit)?;
        self.settle_shortfall(&plan)?;

        let input = spec.input_asset();
        let output = spec.output_asset();
        let funded = self.unaccounted(input);
        if funded < plan.amount_in {
            return Err(AmmError::InvalidInput(
                "pre-funded input does not cover the swap",
            ));
        }
        plan.absorb(funded)?;

        let result = plan.result(self.state.global.current_id)?;
        let saved = self.state.checkpoint(plan.touched());
        if let Err(e) = self.apply_swap(&plan, result.last_id()) {
            self.restore(saved);
            return Err(e);
        }
        if let Err(e) = self.custody.transfer_out(output, &recipient, plan.amount_out) {
            self.restore(saved);
            return Err(e);
        }

        if !plan.surplus.is_zero() {
            debug!(
                "swap absorbed {} surplus {input} into {}",
                plan.surplus,
                result.last_id()
            );
        }
        debug!(
            "swap committed: {result}, active bin {}",
            self.state.global.current_id
        );
        Ok(result)
    }

    fn apply_swap(&mut self, plan: &SwapPlan, last_id: BinId) -> Result<(), AmmError> {
        let input = plan.spec.input_asset();
        for (id, fill) in &plan.steps {
            let (in0, in1) = split(input, fill.amount_in);
            let (out0, out1) = split(input.other(), fill.amount_out);
            self.state.ledger.credit(*id, in0, in1)?;
            self.state.ledger.debit(*id, out0, out1)?;
        }
        let (extra0, extra1) = split(input, plan.surplus);
        self.state.ledger.credit(last_id, extra0, extra1)?;
        let (in0, in1) = split(input, plan.charged()?);
        let (out0, out1) = split(input.other(), plan.amount_out);
        let global = &mut self.state.global;
        global.reserve0 = global.reserve0.safe_add(&in0)?.safe_sub(&out0)?;
        global.reserve1 = global.reserve1.safe_add(&in1)?.safe_sub(&out1)?;
        global.current_id = last_id;
        Ok(())
    }
}

/// `(amount0, amount1)` with `amount` on the `asset` side.
const fn split(asset: Asset, amount: Amount) -> (Amount, Amount) {
    match asset {
        Asset::Token0 => (amount, Amount::ZERO),
        Asset::Token1 => (Amount::ZERO, amount),
    }
}

//! Property-based tests for the bin pool.
//!
//! 1. **Curve laws**: prices strictly increase with the id and
//!    `id_from_price(price_from_id(i)) == i`.
//! 2. **Reserve conservation**: after any mix of mints, swaps and burns the
//!    aggregate reserves equal the sum over bins and never exceed custody.
//! 3. **Quote mirroring**: selling the quoted input of an exact-output
//!    request yields at least the requested output, `swap` executes
//!    exactly what `get_swap_in` quoted, and swapping for what
//!    `get_swap_out` quoted consumes the whole input, leaving nothing
//!    unaccounted in custody.
//! 4. **Burn never overpays**: partial withdrawals never return more than
//!    was deposited, and a late depositor cannot take the earlier one's
//!    funds.

use proptest::prelude::*;

use crate::config::BinPoolConfig;
use crate::domain::{
    Address, Amount, Asset, BinId, BinStep, Decimals, FeeTier, Shares, Token, TokenPair,
};
use crate::math::PriceCurve;
use crate::pools::InMemoryBinPool;
use crate::traits::{Custody, FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn lp() -> Address {
    Address::repeat_byte(0x0A)
}

fn trader() -> Address {
    Address::repeat_byte(0x0B)
}

fn make_pool(step: u16, fee: FeeTier) -> InMemoryBinPool {
    let (Ok(d6), Ok(d12), Ok(step)) = (Decimals::new(6), Decimals::new(12), BinStep::new(step))
    else {
        panic!("valid params");
    };
    let Ok(pair) = TokenPair::new(
        Token::new(Address::repeat_byte(1), d6),
        Token::new(Address::repeat_byte(2), d12),
    ) else {
        panic!("valid pair");
    };
    let Ok(cfg) = BinPoolConfig::new(pair, step, fee, BinId::ZERO) else {
        panic!("valid config");
    };
    let Ok(pool) = InMemoryBinPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn bin(v: i32) -> BinId {
    let Ok(b) = BinId::new(v) else {
        panic!("valid id");
    };
    b
}

fn fund(pool: &mut InMemoryBinPool, asset: Asset, amount: u128) {
    let Ok(()) = pool.custody_mut().fund_pool(asset, Amount::new(amount)) else {
        panic!("funding failed");
    };
}

/// Pool with asset 1 spread over `reserves.len()` bins from id 0 upward.
fn ladder(reserves: &[u128], fee: FeeTier) -> InMemoryBinPool {
    let mut pool = make_pool(10, fee);
    let amounts1: Vec<Amount> = reserves.iter().copied().map(Amount::new).collect();
    let amounts0 = vec![Amount::ZERO; reserves.len()];
    fund(&mut pool, Asset::Token1, reserves.iter().sum());
    let Ok(_) = pool.mint(BinId::ZERO, &amounts0, &amounts1, lp()) else {
        panic!("mint failed");
    };
    pool
}

fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::ZERO),
        Just(FeeTier::TIER_0_05_PERCENT),
        Just(FeeTier::TIER_0_30_PERCENT),
        Just(FeeTier::TIER_1_00_PERCENT),
    ]
}

fn ladder_strategy() -> impl Strategy<Value = Vec<u128>> {
    prop::collection::vec(1_000u128..1_000_000_000, 1..12)
}

#[derive(Debug, Clone)]
enum Op {
    Mint { start: i32, amount0: u128, amount1: u128 },
    BuyAsset0(u128),
    BuyAsset1(u128),
    BurnHalf(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-20i32..20, 0u128..1_000_000_000, 0u128..1_000_000_000).prop_map(
            |(start, amount0, amount1)| Op::Mint {
                start,
                amount0,
                amount1
            }
        ),
        (1u128..10_000_000).prop_map(Op::BuyAsset0),
        (1u128..10_000_000).prop_map(Op::BuyAsset1),
        (-20i32..20).prop_map(Op::BurnHalf),
    ]
}

fn apply(pool: &mut InMemoryBinPool, op: &Op) {
    match *op {
        Op::Mint {
            start,
            amount0,
            amount1,
        } => {
            fund(pool, Asset::Token0, amount0);
            fund(pool, Asset::Token1, amount1);
            let _ = pool.mint(bin(start), &[Amount::new(amount0)], &[Amount::new(amount1)], lp());
        }
        Op::BuyAsset0(out) => buy(pool, Amount::new(out), Amount::ZERO),
        Op::BuyAsset1(out) => buy(pool, Amount::ZERO, Amount::new(out)),
        Op::BurnHalf(id) => {
            let id = bin(id);
            let half = Shares::new(pool.shares_of(&lp(), id).get() / 2);
            if !half.is_zero() {
                let _ = pool.burn(lp(), &[id], &[half], lp());
            }
        }
    }
}

fn buy(pool: &mut InMemoryBinPool, amount0_out: Amount, amount1_out: Amount) {
    let Ok(quote) = pool.get_swap_in(amount0_out, amount1_out) else {
        return;
    };
    fund(pool, quote.input_asset(), quote.amount_in().get());
    let _ = pool.swap(amount0_out, amount1_out, trader(), None);
}

// ---------------------------------------------------------------------------
// Property 1: Curve laws
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_curve_round_trip_and_monotonic(step in 1u16..=100, id in -4_000i32..4_000) {
        let Ok(step) = BinStep::new(step) else {
            panic!("valid step");
        };
        let curve = PriceCurve::new(step);
        let (Ok(p), Ok(next)) = (curve.price_from_id(bin(id)), curve.price_from_id(bin(id + 1)))
        else {
            panic!("inside the window");
        };
        prop_assert!(p < next, "price must increase at id {}", id);
        prop_assert_eq!(curve.id_from_price(p), Ok(bin(id)));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Reserve conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_match_bins(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut pool = make_pool(10, FeeTier::TIER_0_30_PERCENT);
        for op in &ops {
            apply(&mut pool, op);
            prop_assert_eq!(pool.check_reserves_invariant(), Ok(()), "after {:?}", op);
            let global = pool.global();
            prop_assert!(pool.custody().pool_balance(Asset::Token0) >= global.reserve0);
            prop_assert!(pool.custody().pool_balance(Asset::Token1) >= global.reserve1);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Quote mirroring
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quoted_input_buys_requested_output(
        reserves in ladder_strategy(),
        fee in fee_strategy(),
        fraction in 1u128..=1_000,
    ) {
        let pool = ladder(&reserves, fee);
        let total: u128 = reserves.iter().sum();
        let want = (total * fraction / 1_000).max(1);

        let Ok(cost) = pool.get_swap_in(Amount::ZERO, Amount::new(want)) else {
            panic!("liquidity covers the request");
        };
        let Ok(back) = pool.get_swap_out(cost.amount_in(), Amount::ZERO) else {
            panic!("quoted input must be sellable");
        };
        prop_assert!(
            back.amount1_out().get() >= want,
            "sold {} for {} but wanted {}",
            cost.amount_in(), back.amount1_out(), want
        );
    }

    #[test]
    fn prop_swap_executes_the_quote(
        reserves in ladder_strategy(),
        fee in fee_strategy(),
        fraction in 1u128..=1_000,
    ) {
        let mut pool = ladder(&reserves, fee);
        let total: u128 = reserves.iter().sum();
        let want = Amount::new((total * fraction / 1_000).max(1));

        let Ok(quote) = pool.get_swap_in(Amount::ZERO, want) else {
            panic!("liquidity covers the request");
        };
        fund(&mut pool, Asset::Token0, quote.amount_in().get());
        let Ok(done) = pool.swap(Amount::ZERO, want, trader(), None) else {
            panic!("funded swap must succeed");
        };
        prop_assert_eq!(done, quote);
        prop_assert_eq!(pool.custody().balance_of(&trader(), Asset::Token1), want);
    }

    #[test]
    fn prop_exact_in_round_trip_leaves_nothing_unaccounted(
        reserves in ladder_strategy(),
        fee in fee_strategy(),
        paid in 1u128..20_000_000_000,
    ) {
        let mut pool = ladder(&reserves, fee);
        let Ok(quote) = pool.get_swap_out(Amount::new(paid), Amount::ZERO) else {
            // too small to buy a single unit
            return Ok(());
        };
        fund(&mut pool, Asset::Token0, paid);
        let Ok(done) = pool.swap(Amount::ZERO, quote.amount1_out(), trader(), None) else {
            panic!("quoted output must be buyable with the quoted input");
        };
        prop_assert_eq!(done.amount0_in(), Amount::new(paid));
        prop_assert_eq!(done.amount1_out(), quote.amount1_out());
        prop_assert_eq!(
            pool.custody().pool_balance(Asset::Token0),
            pool.global().reserve0
        );
        prop_assert_eq!(pool.check_reserves_invariant(), Ok(()));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Burn never overpays
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_piecewise_burn_never_exceeds_deposit(
        id in -500i32..500,
        amount0 in 0u128..1_000_000_000,
        amount1 in 1u128..1_000_000_000,
        pieces in prop::collection::vec(1u128..100, 1..6),
    ) {
        let mut pool = make_pool(25, FeeTier::ZERO);
        let id = bin(id);
        fund(&mut pool, Asset::Token0, amount0);
        fund(&mut pool, Asset::Token1, amount1);
        let Ok(_) = pool.mint(id, &[Amount::new(amount0)], &[Amount::new(amount1)], lp()) else {
            panic!("mint");
        };

        let (mut paid0, mut paid1) = (0u128, 0u128);
        for percent in pieces {
            let held = pool.shares_of(&lp(), id).get();
            let piece = (held * percent / 100).max(1).min(held);
            if piece == 0 {
                break;
            }
            let Ok(r) = pool.burn(lp(), &[id], &[Shares::new(piece)], lp()) else {
                panic!("owner can burn own shares");
            };
            paid0 += r.total0().get();
            paid1 += r.total1().get();
            prop_assert!(paid0 <= amount0 && paid1 <= amount1);
        }

        let rest = pool.shares_of(&lp(), id);
        if !rest.is_zero() {
            let Ok(r) = pool.burn(lp(), &[id], &[rest], lp()) else {
                panic!("owner can burn own shares");
            };
            paid0 += r.total0().get();
            paid1 += r.total1().get();
        }
        // the last holder out takes whatever rounding left behind
        prop_assert_eq!((paid0, paid1), (amount0, amount1));
        prop_assert_eq!(pool.check_reserves_invariant(), Ok(()));
    }

    #[test]
    fn prop_late_depositor_is_not_overpaid(
        id in -500i32..500,
        seed in 1u128..1_000_000_000,
        amount in 1u128..1_000_000_000,
    ) {
        let mut pool = make_pool(25, FeeTier::ZERO);
        let id = bin(id);
        let first = Address::repeat_byte(0x51);
        let second = Address::repeat_byte(0x52);
        fund(&mut pool, Asset::Token1, seed + amount);

        let Ok(_) = pool.mint(id, &[Amount::ZERO], &[Amount::new(seed)], first) else {
            panic!("seed mint");
        };
        let Ok(_) = pool.mint(id, &[Amount::ZERO], &[Amount::new(amount)], second) else {
            return Ok(());
        };

        let shares = pool.shares_of(&second, id);
        let Ok(paid) = pool.burn(second, &[id], &[shares], second) else {
            panic!("owner can burn own shares");
        };
        prop_assert!(paid.total1().get() <= amount, "{} > {}", paid.total1(), amount);
        prop_assert_eq!(pool.check_reserves_invariant(), Ok(()));
    }
}

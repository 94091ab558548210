//! Liquidity-bin pool walkthrough.
//!
//! Mints liquidity into three bins, quotes and executes a swap that walks
//! across them, then burns the position.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example bin_pool
//! ```

use liquidity_bins::config::BinPoolConfig;
use liquidity_bins::domain::{
    Address, Amount, Asset, BinId, BinStep, Decimals, FeeTier, Price, Shares, Token, TokenPair,
};
use liquidity_bins::pools::InMemoryBinPool;
use liquidity_bins::traits::{FromConfig, LiquidityPool, SwapPool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Liquidity-Bin Pool ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let usdc = Token::new(Address::repeat_byte(1), Decimals::new(6)?);
    let eurc = Token::new(Address::repeat_byte(2), Decimals::new(12)?);
    let pair = TokenPair::new(usdc, eurc)?;

    // ── 2. Configure the pool ───────────────────────────────────────────
    //    2 bp between bins, 0.30% fee.  The active bin is the one where one
    //    whole USDC buys one whole EURC (raw price 10^6).
    let step = BinStep::new(2)?;
    let probe = BinPoolConfig::new(pair, step, FeeTier::TIER_0_30_PERCENT, BinId::ZERO)?;
    let par = InMemoryBinPool::from_config(&probe)?.id_from_price(Price::from_ratio(1_000_000, 1)?)?;
    let config = BinPoolConfig::new(pair, step, FeeTier::TIER_0_30_PERCENT, par)?;
    let mut pool = InMemoryBinPool::from_config(&config)?;
    println!("Pool config: {config}");

    // ── 3. Mint three bins ──────────────────────────────────────────────
    //    Lowest bin holds EURC only, highest USDC only, the middle both.
    let lp = Address::repeat_byte(0xAA);
    let start = par.checked_add(-1).ok_or("start bin outside the window")?;
    let amounts0 = [Amount::ZERO, usdc.units(50), usdc.units(100)];
    let amounts1 = [eurc.units(100), eurc.units(50), Amount::ZERO];
    pool.custody_mut().fund_pool(Asset::Token0, usdc.units(150))?;
    pool.custody_mut().fund_pool(Asset::Token1, eurc.units(150))?;
    let minted = pool.mint(start, &amounts0, &amounts1, lp)?;
    println!("\n{minted}");
    for bin in pool.bins() {
        println!("  {bin}");
    }
    println!("  {}", pool.global());

    // ── 4. Quote and execute: buy 120 EURC ──────────────────────────────
    let trader = Address::repeat_byte(0xBB);
    let want = eurc.units(120);
    let quote = pool.get_swap_in(Amount::ZERO, want)?;
    println!("\nQuote:  {quote}");
    pool.custody_mut().fund_pool(Asset::Token0, quote.amount0_in())?;
    let result = pool.swap(Amount::ZERO, want, trader, None)?;
    println!("Swap:   {result}");
    println!("  Effective price: {}", result.effective_price()?);
    println!("  {}", pool.global());

    // ── 5. Burn everything ──────────────────────────────────────────────
    let ids: Vec<BinId> = pool.bins().map(|b| b.id()).collect();
    let shares: Vec<Shares> = ids.iter().map(|id| pool.shares_of(&lp, *id)).collect();
    let burned = pool.burn(lp, &ids, &shares, lp)?;
    println!("\n{burned}");
    let pair = *pool.token_pair();
    println!(
        "  LP received {} USDC and {} EURC (whole units)",
        pair.token(Asset::Token0)
            .whole_units(pool.custody().balance_of(&lp, Asset::Token0))?,
        pair.token(Asset::Token1)
            .whole_units(pool.custody().balance_of(&lp, Asset::Token1))?
    );
    pool.check_reserves_invariant()?;
    println!("  {}", pool.global());

    Ok(())
}

//! Curve aave-style stable pool interface
//!
//! Coins are indexed DAI = 0, USDC = 1, USDT = 2. With `use_underlying` set the
//! pool takes and returns the plain stablecoins rather than their aTokens.
use odra::prelude::*;
use odra::casper_types::U256;

/// Number of coins in the pool
pub const COIN_COUNT: usize = 3;

#[odra::external_contract]
pub trait CurvePool {
    /// Deposit `amounts` (one entry per coin), minting at least `min_mint_amount` LP
    fn add_liquidity(&mut self, amounts: Vec<U256>, min_mint_amount: U256, use_underlying: bool) -> U256;

    /// Burn `token_amount` LP for coin `i`, receiving at least `min_amount`
    fn remove_liquidity_one_coin(
        &mut self,
        token_amount: U256,
        i: u8,
        min_amount: U256,
        use_underlying: bool,
    ) -> U256;

    /// Withdraw exact `amounts`, burning no more than `max_burn_amount` LP. Returns LP burned.
    fn remove_liquidity_imbalance(
        &mut self,
        amounts: Vec<U256>,
        max_burn_amount: U256,
        use_underlying: bool,
    ) -> U256;
}

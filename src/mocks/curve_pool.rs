//! Curve pool double minting LP 1:1 against the coin amounts it receives
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::MockError;
use crate::protocols::token::Cep18TokenContractRef;
use super::token::MockTokenContractRef;

#[odra::module(errors = MockError)]
pub struct MockCurvePool {
    /// Pool coins in index order
    coins: Var<Vec<Address>>,
    /// LP token, minted and burned by this pool
    lp_token: Var<Address>,
}

#[odra::module]
impl MockCurvePool {
    pub fn init(&mut self, coins: Vec<Address>, lp_token: Address) {
        self.coins.set(coins);
        self.lp_token.set(lp_token);
    }

    pub fn coins(&self) -> Vec<Address> {
        self.coins.get_or_default()
    }

    pub fn add_liquidity(&mut self, amounts: Vec<U256>, min_mint_amount: U256, use_underlying: bool) -> U256 {
        let _ = use_underlying;
        let caller = self.env().caller();
        let this = self.env().self_address();
        let coins = self.checked_coins(amounts.len());

        let mut minted = U256::zero();
        for (coin, amount) in coins.into_iter().zip(amounts) {
            if amount == U256::zero() {
                continue;
            }
            Cep18TokenContractRef::new(self.env(), coin).transfer_from(caller, this, amount);
            minted += amount;
        }

        if minted < min_mint_amount {
            self.env().revert(MockError::ExcessiveSlippage);
        }
        self.lp().mint(caller, minted);
        minted
    }

    pub fn remove_liquidity_one_coin(
        &mut self,
        token_amount: U256,
        i: u8,
        min_amount: U256,
        use_underlying: bool,
    ) -> U256 {
        let _ = use_underlying;
        let caller = self.env().caller();
        let coin = self
            .coins()
            .get(i as usize)
            .copied()
            .unwrap_or_revert_with(&self.env(), MockError::InvalidCoinIndex);

        if token_amount < min_amount {
            self.env().revert(MockError::ExcessiveSlippage);
        }
        self.lp().burn(caller, token_amount);
        self.pay_out(coin, caller, token_amount);
        token_amount
    }

    pub fn remove_liquidity_imbalance(
        &mut self,
        amounts: Vec<U256>,
        max_burn_amount: U256,
        use_underlying: bool,
    ) -> U256 {
        let _ = use_underlying;
        let caller = self.env().caller();
        let coins = self.checked_coins(amounts.len());

        let burned = amounts.iter().fold(U256::zero(), |acc, amount| acc + *amount);
        if burned > max_burn_amount {
            self.env().revert(MockError::ExcessiveSlippage);
        }
        self.lp().burn(caller, burned);

        for (coin, amount) in coins.into_iter().zip(amounts) {
            if amount > U256::zero() {
                self.pay_out(coin, caller, amount);
            }
        }
        burned
    }

    fn checked_coins(&self, len: usize) -> Vec<Address> {
        let coins = self.coins();
        if coins.len() != len {
            self.env().revert(MockError::InvalidCoinIndex);
        }
        coins
    }

    fn lp(&self) -> MockTokenContractRef {
        let lp_token = self.lp_token.get_or_revert_with(MockError::InvalidCoinIndex);
        MockTokenContractRef::new(self.env(), lp_token)
    }

    fn pay_out(&self, coin: Address, to: Address, amount: U256) {
        let mut token = Cep18TokenContractRef::new(self.env(), coin);
        if token.balance_of(self.env().self_address()) < amount {
            self.env().revert(MockError::InsufficientLiquidity);
        }
        if !token.transfer(to, amount) {
            self.env().revert(MockError::TransferFailed);
        }
    }
}

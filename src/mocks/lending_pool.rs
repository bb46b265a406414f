//! Lending pool and address provider doubles
//!
//! Deposits and variable debt are tracked per (asset, account). Borrowed funds
//! are paid out of the pool's own token balance, so tests seed it with liquidity.
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::MockError;
use crate::protocols::token::Cep18TokenContractRef;

/// Resolves a fixed lending pool
#[odra::module(errors = MockError)]
pub struct MockAddressesProvider {
    lending_pool: Var<Address>,
}

#[odra::module]
impl MockAddressesProvider {
    pub fn init(&mut self, lending_pool: Address) {
        self.lending_pool.set(lending_pool);
    }

    pub fn get_lending_pool(&self) -> Address {
        self.lending_pool.get_or_revert_with(MockError::NotConfigured)
    }
}

#[odra::module(errors = MockError)]
pub struct MockLendingPool {
    /// Supplied balance: (asset, account) -> amount
    deposits: Mapping<(Address, Address), U256>,
    /// Variable debt: (asset, account) -> amount
    debts: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl MockLendingPool {
    pub fn deposit(&mut self, asset: Address, amount: U256, on_behalf_of: Address, referral_code: u16) {
        let _ = referral_code;
        let caller = self.env().caller();
        let this = self.env().self_address();

        Cep18TokenContractRef::new(self.env(), asset).transfer_from(caller, this, amount);
        let current = self.deposit_of(asset, on_behalf_of);
        self.deposits.set(&(asset, on_behalf_of), current + amount);
    }

    pub fn withdraw(&mut self, asset: Address, amount: U256, to: Address) -> U256 {
        let caller = self.env().caller();
        let position = self.deposit_of(asset, caller);
        let amount = if amount == U256::MAX { position } else { amount };

        if amount > position {
            self.env().revert(MockError::InsufficientBalance);
        }
        self.deposits.set(&(asset, caller), position - amount);
        self.pay_out(asset, to, amount);
        amount
    }

    pub fn borrow(
        &mut self,
        asset: Address,
        amount: U256,
        interest_rate_mode: u8,
        referral_code: u16,
        on_behalf_of: Address,
    ) {
        let _ = (interest_rate_mode, referral_code);
        let caller = self.env().caller();

        let token = Cep18TokenContractRef::new(self.env(), asset);
        if token.balance_of(self.env().self_address()) < amount {
            self.env().revert(MockError::InsufficientLiquidity);
        }

        let debt = self.debt_of(asset, on_behalf_of);
        self.debts.set(&(asset, on_behalf_of), debt + amount);
        self.pay_out(asset, caller, amount);
    }

    pub fn repay(&mut self, asset: Address, amount: U256, rate_mode: u8, on_behalf_of: Address) -> U256 {
        let _ = rate_mode;
        let caller = self.env().caller();
        let debt = self.debt_of(asset, on_behalf_of);
        if debt == U256::zero() {
            self.env().revert(MockError::NoDebt);
        }

        let repaid = amount.min(debt);
        let this = self.env().self_address();
        Cep18TokenContractRef::new(self.env(), asset).transfer_from(caller, this, repaid);
        self.debts.set(&(asset, on_behalf_of), debt - repaid);
        repaid
    }

    pub fn deposit_of(&self, asset: Address, account: Address) -> U256 {
        self.deposits.get(&(asset, account)).unwrap_or_default()
    }

    pub fn debt_of(&self, asset: Address, account: Address) -> U256 {
        self.debts.get(&(asset, account)).unwrap_or_default()
    }

    fn pay_out(&self, asset: Address, to: Address, amount: U256) {
        let mut token = Cep18TokenContractRef::new(self.env(), asset);
        if !token.transfer(to, amount) {
            self.env().revert(MockError::TransferFailed);
        }
    }
}

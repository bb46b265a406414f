//! CEP-18 token with open minting and scriptable transfer results
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::MockError;
use crate::events::{Approval, Transfer};

/// Recorded `transfer` call
#[odra::odra_type]
pub struct TransferCall {
    pub to: Address,
    pub amount: U256,
}

/// Mock token used for stablecoins and the Curve LP token
#[odra::module(events = [Transfer, Approval], errors = MockError)]
pub struct MockToken {
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// When set, `transfer` returns false without moving funds
    fail_transfers: Var<bool>,
    /// Number of `transfer` calls
    transfer_calls: Var<u32>,
    /// Most recent `transfer` call
    last_transfer: Var<TransferCall>,
}

#[odra::module]
impl MockToken {
    pub fn init(&mut self, symbol: String, decimals: u8) {
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.fail_transfers.set(false);
        self.transfer_calls.set(0);
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_calls.set(self.transfer_calls() + 1);
        self.last_transfer.set(TransferCall { to, amount });

        if self.fail_transfers.get_or_default() {
            return false;
        }
        self.transfer_internal(caller, to, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(MockError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Open mint, any caller
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.total_supply.set(self.total_supply() + amount);
        self.balances.set(&to, self.balance_of(to) + amount);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to,
            value: amount,
        });
    }

    /// Open burn, any caller
    pub fn burn(&mut self, from: Address, amount: U256) {
        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(MockError::InsufficientBalance);
        }

        self.balances.set(&from, current_balance - amount);
        self.total_supply.set(self.total_supply() - amount);

        self.env().emit_event(Transfer {
            from,
            to: self.env().self_address(),
            value: amount,
        });
    }

    /// Make every following `transfer` return false
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers.set(fail);
    }

    pub fn transfer_calls(&self) -> u32 {
        self.transfer_calls.get_or_default()
    }

    pub fn last_transfer(&self) -> Option<TransferCall> {
        self.last_transfer.get()
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(MockError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        self.balances.set(&to, self.balance_of(to) + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

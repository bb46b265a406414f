//! Loan Manager contract
//!
//! Binds the lending pool provider, the Curve pool, deposit zap and LP token,
//! and the three stablecoins once at construction and exposes:
//! - Owner-only withdrawals from the contract, the lending pool and Curve
//! - Worker-only borrow-and-stake / unstake-and-repay
//! - Owner and worker administration

use alloc::vec;
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::access::{is_zero_address, OwnableByWorker, Role};
use crate::errors::LoanManagerError;
use crate::events::*;
use crate::protocols::aave::{
    AaveLendingPoolContractRef, LendingPoolAddressesProviderContractRef, REFERRAL_CODE,
    VARIABLE_RATE_MODE,
};
use crate::protocols::curve::{CurvePoolContractRef, COIN_COUNT};
use crate::protocols::token::Cep18TokenContractRef;

/// External protocol addresses bound at construction
#[odra::odra_type]
pub struct ProtocolAddresses {
    /// Aave lending pool addresses provider
    pub lending_pool_address_provider: Address,
    /// Curve stable pool
    pub curve_pool: Address,
    /// Curve deposit zap
    pub curve_deposit: Address,
    /// Curve LP token
    pub curve_lp_token: Address,
    /// DAI, coin 0
    pub dai: Address,
    /// USDC, coin 1
    pub usdc: Address,
    /// USDT, coin 2
    pub usdt: Address,
}

/// Loan Manager contract
#[odra::module(
    events = [
        Withdrawn,
        WithdrawnFromAave,
        WithdrawnFromCurve,
        BorrowedAndStaked,
        UnstakedAndRepaid
    ],
    errors = LoanManagerError
)]
pub struct LoanManager {
    /// Owner and worker gates
    access: SubModule<OwnableByWorker>,
    /// Lending pool addresses provider
    lending_pool_address_provider: Var<Address>,
    /// Curve pool address
    curve_pool: Var<Address>,
    /// Curve deposit zap address
    curve_deposit: Var<Address>,
    /// Curve LP token address
    curve_lp_token: Var<Address>,
    /// Stablecoins in Curve coin order
    stablecoins: Var<Vec<Address>>,
}

#[odra::module]
impl LoanManager {
    /// Initialize the loan manager. The deployer becomes both owner and worker.
    pub fn init(
        &mut self,
        lending_pool_address_provider: Address,
        curve_pool: Address,
        curve_deposit: Address,
        curve_lp_token: Address,
        dai: Address,
        usdc: Address,
        usdt: Address,
    ) {
        let addresses = [
            lending_pool_address_provider,
            curve_pool,
            curve_deposit,
            curve_lp_token,
            dai,
            usdc,
            usdt,
        ];
        if addresses.iter().any(is_zero_address) {
            self.env().revert(LoanManagerError::InvalidAddress);
        }

        let deployer = self.env().caller();
        self.access.init(deployer);

        self.lending_pool_address_provider.set(lending_pool_address_provider);
        self.curve_pool.set(curve_pool);
        self.curve_deposit.set(curve_deposit);
        self.curve_lp_token.set(curve_lp_token);
        self.stablecoins.set(vec![dai, usdc, usdt]);
    }

    // ========================================
    // Roles
    // ========================================

    pub fn owner(&self) -> Address {
        self.access.get_owner()
    }

    pub fn worker(&self) -> Address {
        self.access.get_worker()
    }

    /// Owner only
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.access.transfer_ownership(new_owner);
    }

    /// Owner only
    pub fn set_worker(&mut self, new_worker: Address) {
        self.access.set_worker(new_worker);
    }

    // ========================================
    // Owner Withdrawals
    // ========================================

    /// Send the contract's whole `token` balance to the owner
    pub fn withdraw(&mut self, token: Address) -> U256 {
        let owner = self.only(Role::Owner);
        self.send_balance_to(token, owner)
    }

    /// Close the `token` position in the lending pool and send the proceeds to the owner
    pub fn withdraw_from_aave(&mut self, token: Address) -> U256 {
        let owner = self.only(Role::Owner);

        let this = self.env().self_address();
        let mut lending_pool = self.lending_pool();
        let released = lending_pool.withdraw(token, U256::MAX, this);

        self.env().emit_event(WithdrawnFromAave {
            token,
            amount: released,
            timestamp: self.env().get_block_time(),
        });

        self.send_balance_to(token, owner)
    }

    /// Unwind the whole Curve position into `token` and send it to the owner
    pub fn withdraw_from_curve(&mut self, token: Address) -> U256 {
        let owner = self.only(Role::Owner);
        let coin_index = self.coin_index(token);

        let this = self.env().self_address();
        let lp_balance = self.lp_token().balance_of(this);
        let received = if lp_balance > U256::zero() {
            self.curve().remove_liquidity_one_coin(lp_balance, coin_index, U256::zero(), true)
        } else {
            U256::zero()
        };

        self.env().emit_event(WithdrawnFromCurve {
            token,
            lp_burned: lp_balance,
            amount: received,
            timestamp: self.env().get_block_time(),
        });

        self.send_balance_to(token, owner)
    }

    // ========================================
    // Worker Operations
    // ========================================

    /// Borrow `amount` of `token` at variable rate and stake it into Curve.
    /// Returns the LP tokens minted.
    pub fn borrow_and_stake(&mut self, token: Address, amount: U256) -> U256 {
        self.only(Role::Worker);
        let coin_index = self.coin_index(token);
        if amount == U256::zero() {
            self.env().revert(LoanManagerError::ZeroAmount);
        }

        let this = self.env().self_address();
        self.lending_pool()
            .borrow(token, amount, VARIABLE_RATE_MODE, REFERRAL_CODE, this);

        let curve_pool = self.curve_pool_address();
        self.approve(token, curve_pool, amount);
        let lp_minted = self
            .curve()
            .add_liquidity(single_coin_amounts(coin_index, amount), U256::zero(), true);

        self.env().emit_event(BorrowedAndStaked {
            token,
            amount,
            lp_minted,
            timestamp: self.env().get_block_time(),
        });

        lp_minted
    }

    /// Pull exactly `amount` of `token` out of Curve and repay it to the lending pool.
    /// Returns the debt actually repaid.
    pub fn unstake_and_repay(&mut self, token: Address, amount: U256) -> U256 {
        self.only(Role::Worker);
        let coin_index = self.coin_index(token);
        if amount == U256::zero() {
            self.env().revert(LoanManagerError::ZeroAmount);
        }

        let this = self.env().self_address();
        let max_burn = self.lp_token().balance_of(this);
        let lp_burned = self.curve().remove_liquidity_imbalance(
            single_coin_amounts(coin_index, amount),
            max_burn,
            true,
        );

        let mut lending_pool = self.lending_pool();
        let pool_address = lending_pool.address().clone();
        self.approve(token, pool_address, amount);
        let repaid = lending_pool.repay(token, amount, VARIABLE_RATE_MODE, this);
        // repay may pull less than approved
        self.approve(token, pool_address, U256::zero());

        self.env().emit_event(UnstakedAndRepaid {
            token,
            amount,
            lp_burned,
            repaid,
            timestamp: self.env().get_block_time(),
        });

        repaid
    }

    // ========================================
    // View Functions
    // ========================================

    pub fn protocol_addresses(&self) -> ProtocolAddresses {
        let stablecoins = self.stablecoins();
        ProtocolAddresses {
            lending_pool_address_provider: self.provider_address(),
            curve_pool: self.curve_pool_address(),
            curve_deposit: self
                .curve_deposit
                .get_or_revert_with(LoanManagerError::InvalidConfiguration),
            curve_lp_token: self.lp_token_address(),
            dai: stablecoins[0],
            usdc: stablecoins[1],
            usdt: stablecoins[2],
        }
    }

    /// Stablecoins in Curve coin order
    pub fn stablecoins(&self) -> Vec<Address> {
        let coins = self.stablecoins.get_or_default();
        if coins.len() != COIN_COUNT {
            self.env().revert(LoanManagerError::InvalidConfiguration);
        }
        coins
    }
}

impl LoanManager {
    /// Gate the current call on `role`, returning the role holder
    fn only(&self, role: Role) -> Address {
        let caller = self.env().caller();
        self.access.assert_role(role, &caller);
        caller
    }

    fn coin_index(&self, token: Address) -> u8 {
        self.stablecoins()
            .iter()
            .position(|coin| *coin == token)
            .map(|index| index as u8)
            .unwrap_or_revert_with(&self.env(), LoanManagerError::UnsupportedToken)
    }

    /// Transfer the whole balance of `token` held by this contract
    fn send_balance_to(&mut self, token: Address, recipient: Address) -> U256 {
        let mut erc20 = Cep18TokenContractRef::new(self.env(), token);
        let amount = erc20.balance_of(self.env().self_address());
        if !erc20.transfer(recipient, amount) {
            self.env().revert(LoanManagerError::TransferFailed);
        }

        self.env().emit_event(Withdrawn {
            token,
            recipient,
            amount,
            timestamp: self.env().get_block_time(),
        });
        amount
    }

    fn approve(&self, token: Address, spender: Address, amount: U256) {
        let mut erc20 = Cep18TokenContractRef::new(self.env(), token);
        if !erc20.approve(spender, amount) {
            self.env().revert(LoanManagerError::ApprovalFailed);
        }
    }

    fn lending_pool(&self) -> AaveLendingPoolContractRef {
        let provider =
            LendingPoolAddressesProviderContractRef::new(self.env(), self.provider_address());
        AaveLendingPoolContractRef::new(self.env(), provider.get_lending_pool())
    }

    fn curve(&self) -> CurvePoolContractRef {
        CurvePoolContractRef::new(self.env(), self.curve_pool_address())
    }

    fn lp_token(&self) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env(), self.lp_token_address())
    }

    fn provider_address(&self) -> Address {
        self.lending_pool_address_provider
            .get_or_revert_with(LoanManagerError::InvalidConfiguration)
    }

    fn curve_pool_address(&self) -> Address {
        self.curve_pool
            .get_or_revert_with(LoanManagerError::InvalidConfiguration)
    }

    fn lp_token_address(&self) -> Address {
        self.curve_lp_token
            .get_or_revert_with(LoanManagerError::InvalidConfiguration)
    }
}

/// Curve amounts vector with `amount` at `coin_index` and zero elsewhere
fn single_coin_amounts(coin_index: u8, amount: U256) -> Vec<U256> {
    let mut amounts = vec![U256::zero(); COIN_COUNT];
    amounts[coin_index as usize] = amount;
    amounts
}

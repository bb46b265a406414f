//! Aave v2 style lending pool interfaces
use odra::prelude::*;
use odra::casper_types::U256;

/// Variable interest rate mode
pub const VARIABLE_RATE_MODE: u8 = 2;

/// No referral
pub const REFERRAL_CODE: u16 = 0;

/// Registry resolving the current lending pool
#[odra::external_contract]
pub trait LendingPoolAddressesProvider {
    fn get_lending_pool(&self) -> Address;
}

/// Lending pool entry points used by the loan manager
#[odra::external_contract]
pub trait AaveLendingPool {
    /// Supply `amount` of `asset` credited to `on_behalf_of`
    fn deposit(&mut self, asset: Address, amount: U256, on_behalf_of: Address, referral_code: u16);

    /// Withdraw up to `amount` of the caller's `asset` position to `to`.
    /// `U256::MAX` withdraws the whole position. Returns the amount withdrawn.
    fn withdraw(&mut self, asset: Address, amount: U256, to: Address) -> U256;

    /// Borrow `amount` of `asset`; funds go to the caller, debt to `on_behalf_of`
    fn borrow(
        &mut self,
        asset: Address,
        amount: U256,
        interest_rate_mode: u8,
        referral_code: u16,
        on_behalf_of: Address,
    );

    /// Repay debt of `on_behalf_of`. Returns the amount actually repaid.
    fn repay(&mut self, asset: Address, amount: U256, rate_mode: u8, on_behalf_of: Address) -> U256;
}

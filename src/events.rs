//! Event definitions for the loan manager contracts
use odra::prelude::*;
use odra::casper_types::U256;
use odra::prelude::Address;

/// Event emitted when ownership changes hands
#[odra::event]
pub struct OwnershipTransferred {
    /// Owner before the change, `None` at construction
    pub previous_owner: Option<Address>,
    /// Owner after the change
    pub new_owner: Address,
}

/// Event emitted when the worker is reassigned
#[odra::event]
pub struct WorkerChanged {
    /// Worker before the change, `None` at construction
    pub previous_worker: Option<Address>,
    /// Worker after the change
    pub new_worker: Address,
}

/// Event emitted when a token balance is sent to the owner
#[odra::event]
pub struct Withdrawn {
    /// Token moved
    pub token: Address,
    /// Receiving owner
    pub recipient: Address,
    /// Amount moved
    pub amount: U256,
    /// Block time of the withdrawal
    pub timestamp: u64,
}

/// Event emitted when a lending pool position is closed
#[odra::event]
pub struct WithdrawnFromAave {
    /// Underlying asset
    pub token: Address,
    /// Amount released by the lending pool
    pub amount: U256,
    /// Block time of the withdrawal
    pub timestamp: u64,
}

/// Event emitted when the Curve position is unwound into one coin
#[odra::event]
pub struct WithdrawnFromCurve {
    /// Coin received
    pub token: Address,
    /// LP tokens burned
    pub lp_burned: U256,
    /// Coin amount received
    pub amount: U256,
    /// Block time of the withdrawal
    pub timestamp: u64,
}

/// Event emitted when borrowed funds are staked into Curve
#[odra::event]
pub struct BorrowedAndStaked {
    /// Borrowed asset
    pub token: Address,
    /// Amount borrowed and staked
    pub amount: U256,
    /// LP tokens minted
    pub lp_minted: U256,
    /// Block time of the operation
    pub timestamp: u64,
}

/// Event emitted when staked funds are pulled out and repaid
#[odra::event]
pub struct UnstakedAndRepaid {
    /// Repaid asset
    pub token: Address,
    /// Amount unstaked
    pub amount: U256,
    /// LP tokens burned
    pub lp_burned: U256,
    /// Debt actually repaid
    pub repaid: U256,
    /// Block time of the operation
    pub timestamp: u64,
}

/// Event emitted when mock tokens move
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when a mock token approval is granted
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// Amount approved
    pub value: U256,
}

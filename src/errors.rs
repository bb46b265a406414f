//! Error definitions for the loan manager contracts
use odra::prelude::*;

/// Errors raised by the owner gate
#[odra::odra_error]
pub enum OwnableError {
    /// Ownable: caller is not the owner
    CallerNotOwner = 1,

    /// Null address supplied as owner
    InvalidOwner = 2,
}

impl OwnableError {
    /// Revert reason shown to callers and tooling
    pub fn message(&self) -> &'static str {
        match self {
            OwnableError::CallerNotOwner => "Ownable: caller is not the owner",
            OwnableError::InvalidOwner => "Ownable: new owner is the zero address",
        }
    }
}

/// Errors raised by the worker gate
#[odra::odra_error]
pub enum WorkerError {
    /// OwnableByWorker: caller is not the owner
    CallerNotWorker = 10,

    /// Null address supplied as worker
    InvalidWorker = 11,
}

impl WorkerError {
    /// Revert reason shown to callers and tooling.
    ///
    /// The worker denial keeps the "owner" wording deployed tooling already matches on.
    pub fn message(&self) -> &'static str {
        match self {
            WorkerError::CallerNotWorker => "OwnableByWorker: caller is not the owner",
            WorkerError::InvalidWorker => "OwnableByWorker: new worker is the zero address",
        }
    }
}

/// Human-readable reason for a gate revert, as reported by the contract's
/// callers. `None` for errors without a fixed reason string.
pub fn revert_reason(error: &OdraError) -> Option<&'static str> {
    let known: [(OdraError, &'static str); 4] = [
        (OwnableError::CallerNotOwner.into(), OwnableError::CallerNotOwner.message()),
        (OwnableError::InvalidOwner.into(), OwnableError::InvalidOwner.message()),
        (WorkerError::CallerNotWorker.into(), WorkerError::CallerNotWorker.message()),
        (WorkerError::InvalidWorker.into(), WorkerError::InvalidWorker.message()),
    ];
    known
        .into_iter()
        .find(|(known, _)| known == error)
        .map(|(_, reason)| reason)
}

/// Errors raised by the loan manager routing logic
#[odra::odra_error]
pub enum LoanManagerError {
    /// Token is not one of the configured stablecoins
    UnsupportedToken = 100,

    /// Zero amount supplied
    ZeroAmount = 101,

    /// Token transfer returned false
    TransferFailed = 102,

    /// Token approval returned false
    ApprovalFailed = 103,

    /// Null address supplied at construction
    InvalidAddress = 104,

    /// Protocol address missing from storage
    InvalidConfiguration = 105,
}

/// Errors raised by the mock protocol contracts
#[odra::odra_error]
pub enum MockError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 200,

    /// Insufficient balance for operation
    InsufficientBalance = 201,

    /// Pool cannot cover the requested amount
    InsufficientLiquidity = 202,

    /// Repay requested with no outstanding debt
    NoDebt = 203,

    /// Slippage bound violated
    ExcessiveSlippage = 204,

    /// Coin index outside the pool
    InvalidCoinIndex = 205,

    /// Nested token transfer returned false
    TransferFailed = 206,

    /// Required address was never configured
    NotConfigured = 207,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_reason_for_gate_errors() {
        assert_eq!(
            revert_reason(&OwnableError::CallerNotOwner.into()),
            Some("Ownable: caller is not the owner")
        );
        assert_eq!(
            revert_reason(&WorkerError::CallerNotWorker.into()),
            Some("OwnableByWorker: caller is not the owner")
        );
        assert_eq!(revert_reason(&LoanManagerError::ZeroAmount.into()), None);
    }
}

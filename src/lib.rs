#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Access control
pub mod access;

pub mod errors;
pub mod events;

// External protocol interfaces
pub mod protocols;

// Loan manager contract
pub mod loan_manager;

// Network configuration
pub mod deployment;

// Local network and test doubles
pub mod mocks;

pub use loan_manager::{LoanManager, ProtocolAddresses};

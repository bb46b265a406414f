//! Loan manager - routes borrowed stablecoins between an Aave style lending
//! pool and a Curve stable pool under owner/worker separation of duties.
//!
//! The worker can only move funds into protocol positions; getting funds out
//! to an account is owner-only.

pub mod contract;


pub use contract::{LoanManager, ProtocolAddresses};

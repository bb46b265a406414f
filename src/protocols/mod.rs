//! Interfaces of the external contracts the loan manager routes funds through

pub mod aave;
pub mod curve;
pub mod token;

pub use aave::{AaveLendingPool, LendingPoolAddressesProvider, REFERRAL_CODE, VARIABLE_RATE_MODE};
pub use curve::{CurvePool, COIN_COUNT};
pub use token::Cep18Token;

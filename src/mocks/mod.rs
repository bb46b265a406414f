//! Stand-ins for the external protocols, deployed on local networks and in tests

pub mod curve_pool;
pub mod lending_pool;
pub mod token;

pub use curve_pool::MockCurvePool;
pub use lending_pool::{MockAddressesProvider, MockLendingPool};
pub use token::MockToken;

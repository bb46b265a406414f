//! Two-tier access control: an owner for administration and a worker for
//! day-to-day fund routing.

pub mod roles;
pub mod ownable;
pub mod ownable_by_worker;

pub use roles::{is_zero_address, Role, Roles};
pub use ownable::Ownable;
pub use ownable_by_worker::OwnableByWorker;

//! Role predicate shared by both gates
use odra::casper_types::bytesrepr::ToBytes;
use odra::prelude::*;

/// Capability a caller must hold to run a gated entry point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Administrative operations and ownership transfer
    Owner,
    /// Moving funds into protocol positions
    Worker,
}

/// Snapshot of the accounts currently holding each role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    /// Account holding `Role::Owner`
    pub owner: Address,
    /// Account holding `Role::Worker`
    pub worker: Address,
}

impl Roles {
    /// Snapshot of the given holders
    pub fn new(owner: Address, worker: Address) -> Self {
        Self { owner, worker }
    }

    /// Whether `caller` holds `role`. Only the exact holder passes; the owner
    /// is not a fallback for the worker role.
    pub fn holds(&self, role: Role, caller: &Address) -> bool {
        match role {
            Role::Owner => self.owner == *caller,
            Role::Worker => self.worker == *caller,
        }
    }
}

/// True when the address hash is all zeroes, for either address kind.
pub fn is_zero_address(address: &Address) -> bool {
    match address.to_bytes() {
        // first byte is the variant tag
        Ok(bytes) => bytes.iter().skip(1).all(|byte| *byte == 0),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::casper_types::account::AccountHash;

    fn account(byte: u8) -> Address {
        Address::Account(AccountHash::new([byte; 32]))
    }

    #[test]
    fn test_owner_role_matches_only_owner() {
        let roles = Roles::new(account(1), account(2));
        assert!(roles.holds(Role::Owner, &account(1)));
        assert!(!roles.holds(Role::Owner, &account(2)));
        assert!(!roles.holds(Role::Owner, &account(3)));
    }

    #[test]
    fn test_worker_role_has_no_owner_fallback() {
        let roles = Roles::new(account(1), account(2));
        assert!(roles.holds(Role::Worker, &account(2)));
        assert!(!roles.holds(Role::Worker, &account(1)));
    }

    #[test]
    fn test_same_account_holds_both_roles() {
        let roles = Roles::new(account(7), account(7));
        assert!(roles.holds(Role::Owner, &account(7)));
        assert!(roles.holds(Role::Worker, &account(7)));
    }

    #[test]
    fn test_zero_address_detection() {
        assert!(is_zero_address(&account(0)));
        assert!(!is_zero_address(&account(1)));

        let env = odra_test::env();
        assert!(!is_zero_address(&env.get_account(0)));
    }
}

//! Single-owner authorization gate
use odra::prelude::*;
use super::roles::is_zero_address;
use crate::errors::OwnableError;
use crate::events::OwnershipTransferred;

/// Holds the one account allowed to administer the contract
#[odra::module(events = [OwnershipTransferred], errors = OwnableError)]
pub struct Ownable {
    /// Current owner
    owner: Var<Address>,
}

#[odra::module]
impl Ownable {
    /// Initialize with an explicit owner
    pub fn init(&mut self, owner: Address) {
        if is_zero_address(&owner) {
            self.env().revert(OwnableError::InvalidOwner);
        }
        self.owner.set(owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner: None,
            new_owner: owner,
        });
    }

    /// Get the current owner
    pub fn get_owner(&self) -> Address {
        self.owner.get_or_revert_with(OwnableError::InvalidOwner)
    }

    /// Hand ownership to `new_owner`. The previous owner loses every owner right.
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        let caller = self.env().caller();
        self.assert_owner(&caller);

        if is_zero_address(&new_owner) {
            self.env().revert(OwnableError::InvalidOwner);
        }

        let previous_owner = self.get_owner();
        self.owner.set(new_owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner: Some(previous_owner),
            new_owner,
        });
    }
}

impl Ownable {
    /// Reverts with `CallerNotOwner` unless `caller` is the owner
    pub fn assert_owner(&self, caller: &Address) {
        if self.get_owner() != *caller {
            self.env().revert(OwnableError::CallerNotOwner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::casper_types::account::AccountHash;
    use odra::host::{Deployer, HostEnv};

    fn setup() -> (HostEnv, OwnableHostRef) {
        let env = odra_test::env();
        let owner = env.get_account(0);
        let ownable = Ownable::deploy(&env, OwnableInitArgs { owner });
        (env, ownable)
    }

    #[test]
    fn test_init_sets_owner() {
        let (env, ownable) = setup();
        assert_eq!(ownable.get_owner(), env.get_account(0));
    }

    #[test]
    fn test_init_rejects_zero_owner() {
        let env = odra_test::env();
        let zero = Address::Account(AccountHash::new([0u8; 32]));
        let result = Ownable::try_deploy(&env, OwnableInitArgs { owner: zero });
        assert!(result.is_err());
    }

    #[test]
    fn test_transfer_ownership() {
        let (env, mut ownable) = setup();
        let new_owner = env.get_account(1);

        ownable.transfer_ownership(new_owner);
        assert_eq!(ownable.get_owner(), new_owner);
        assert!(env.emitted_event(
            &ownable,
            OwnershipTransferred {
                previous_owner: Some(env.get_account(0)),
                new_owner,
            }
        ));
    }

    #[test]
    fn test_old_owner_loses_rights() {
        let (env, mut ownable) = setup();
        let old_owner = env.get_account(0);
        let new_owner = env.get_account(1);

        ownable.transfer_ownership(new_owner);

        env.set_caller(old_owner);
        assert_eq!(
            ownable.try_transfer_ownership(old_owner),
            Err(OwnableError::CallerNotOwner.into())
        );

        env.set_caller(new_owner);
        ownable.transfer_ownership(old_owner);
        assert_eq!(ownable.get_owner(), old_owner);
    }

    #[test]
    fn test_non_owner_cannot_transfer() {
        let (env, mut ownable) = setup();
        let stranger = env.get_account(2);

        env.set_caller(stranger);
        assert_eq!(
            ownable.try_transfer_ownership(stranger),
            Err(OwnableError::CallerNotOwner.into())
        );
        assert_eq!(ownable.get_owner(), env.get_account(0));
    }

    #[test]
    fn test_transfer_to_zero_address_rejected() {
        let (env, mut ownable) = setup();
        let zero = Address::Account(AccountHash::new([0u8; 32]));

        assert_eq!(
            ownable.try_transfer_ownership(zero),
            Err(OwnableError::InvalidOwner.into())
        );
        assert_eq!(ownable.get_owner(), env.get_account(0));
    }

    #[test]
    fn test_denial_message() {
        assert_eq!(
            OwnableError::CallerNotOwner.message(),
            "Ownable: caller is not the owner"
        );
    }
}

//! Worker gate layered on top of the owner gate
//!
//! The owner administers; the worker routes funds into protocol positions.
//! Both start as the same account and diverge only through `set_worker`.
use odra::prelude::*;
use super::ownable::Ownable;
use super::roles::{is_zero_address, Role, Roles};
use crate::errors::{OwnableError, WorkerError};
use crate::events::WorkerChanged;

/// Owner plus a separately assignable worker
#[odra::module(events = [WorkerChanged], errors = WorkerError)]
pub struct OwnableByWorker {
    /// Owner gate
    ownable: SubModule<Ownable>,
    /// Current worker
    worker: Var<Address>,
}

#[odra::module]
impl OwnableByWorker {
    /// Initialize owner and worker to the same account
    pub fn init(&mut self, owner: Address) {
        self.ownable.init(owner);
        self.worker.set(owner);

        self.env().emit_event(WorkerChanged {
            previous_worker: None,
            new_worker: owner,
        });
    }

    /// Get the current owner
    pub fn get_owner(&self) -> Address {
        self.ownable.get_owner()
    }

    /// Get the current worker
    pub fn get_worker(&self) -> Address {
        self.worker.get_or_revert_with(WorkerError::InvalidWorker)
    }

    /// Owner only
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownable.transfer_ownership(new_owner);
    }

    /// Owner only. Reassigning the current worker is a no-op that still succeeds.
    pub fn set_worker(&mut self, new_worker: Address) {
        let caller = self.env().caller();
        self.assert_role(Role::Owner, &caller);

        if is_zero_address(&new_worker) {
            self.env().revert(WorkerError::InvalidWorker);
        }

        let previous_worker = self.get_worker();
        self.worker.set(new_worker);

        self.env().emit_event(WorkerChanged {
            previous_worker: Some(previous_worker),
            new_worker,
        });
    }
}

impl OwnableByWorker {
    /// Current owner and worker as one snapshot
    pub fn roles(&self) -> Roles {
        Roles::new(self.get_owner(), self.get_worker())
    }

    /// Reverts unless `caller` holds `role`. Must run before any state change.
    pub fn assert_role(&self, role: Role, caller: &Address) {
        if self.roles().holds(role, caller) {
            return;
        }
        match role {
            Role::Owner => self.env().revert(OwnableError::CallerNotOwner),
            Role::Worker => self.env().revert(WorkerError::CallerNotWorker),
        }
    }
}

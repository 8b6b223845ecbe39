//! Capabilities shared by the payloads of each envelope, so callers can work
//! with "whatever account this is" without matching on the variant.

use std::{any::Any, fmt::Debug};

use crate::proto::cosmos_sdk::{
    v1::Coin,
    x::{
        auth::{
            v1::BaseAccount,
            vesting::v1::{
                BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount,
                PeriodicVestingAccount,
            },
        },
        supply::v1::{ModuleAccount, Supply},
    },
};

/// Implemented by every account payload.
///
/// Only the types registered with [Account](crate::Account) can be stored
/// in one; anything else is rejected by
/// [set_account](crate::Account::set_account).
pub trait ExportedAccount: Any + Debug + Send + Sync {
    /// The embedded base account, if it has been populated.
    fn base_account(&self) -> Option<&BaseAccount>;

    /// Hand back ownership for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn address(&self) -> &[u8] {
        self.base_account()
            .map(|base| base.address.as_slice())
            .unwrap_or_default()
    }

    fn account_number(&self) -> u64 {
        self.base_account().map_or(0, |base| base.account_number)
    }

    fn sequence(&self) -> u64 {
        self.base_account().map_or(0, |base| base.sequence)
    }
}

/// Implemented by every supply payload.
pub trait ExportedSupply: Any + Debug + Send + Sync {
    fn total(&self) -> &[Coin];

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

fn vesting_base(base: Option<&BaseVestingAccount>) -> Option<&BaseAccount> {
    base?.base_account.as_ref()
}

impl ExportedAccount for BaseAccount {
    fn base_account(&self) -> Option<&BaseAccount> {
        Some(self)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl ExportedAccount for ContinuousVestingAccount {
    fn base_account(&self) -> Option<&BaseAccount> {
        vesting_base(self.base_vesting_account.as_ref())
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl ExportedAccount for DelayedVestingAccount {
    fn base_account(&self) -> Option<&BaseAccount> {
        vesting_base(self.base_vesting_account.as_ref())
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl ExportedAccount for PeriodicVestingAccount {
    fn base_account(&self) -> Option<&BaseAccount> {
        vesting_base(self.base_vesting_account.as_ref())
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl ExportedAccount for ModuleAccount {
    fn base_account(&self) -> Option<&BaseAccount> {
        self.base_account.as_ref()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl ExportedSupply for Supply {
    fn total(&self) -> &[Coin] {
        &self.total
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

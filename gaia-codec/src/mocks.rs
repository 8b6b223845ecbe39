//! Random payloads and envelopes for exercising the codec.

use rand::{distributions::Alphanumeric, Rng};

use crate::{
    proto::cosmos_sdk::{
        v1::Coin,
        x::{
            auth::{
                v1::BaseAccount,
                vesting::v1::{
                    BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount, Period,
                    PeriodicVestingAccount,
                },
            },
            supply::v1::{ModuleAccount, Supply as SupplyRecord},
        },
    },
    Account, AccountSum, Supply, SupplySum,
};

fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn random_coins<R: Rng>(rng: &mut R) -> Vec<Coin> {
    let count = rng.gen_range(0..4);
    (0..count).map(|_| random_coin(rng)).collect()
}

pub fn random_coin<R: Rng>(rng: &mut R) -> Coin {
    let len = rng.gen_range(3..8);
    Coin {
        denom: random_string(rng, len).to_lowercase(),
        amount: rng.gen::<u64>().to_string(),
    }
}

pub fn random_base_account<R: Rng>(rng: &mut R) -> BaseAccount {
    let mut address = vec![0u8; 20];
    rng.fill(&mut address[..]);
    let mut pub_key = vec![0u8; 33];
    rng.fill(&mut pub_key[..]);
    BaseAccount {
        address,
        pub_key,
        account_number: rng.gen(),
        sequence: rng.gen_range(0..1_000_000),
    }
}

fn random_base_vesting_account<R: Rng>(rng: &mut R) -> BaseVestingAccount {
    BaseVestingAccount {
        base_account: Some(random_base_account(rng)),
        original_vesting: random_coins(rng),
        delegated_free: random_coins(rng),
        delegated_vesting: random_coins(rng),
        end_time: rng.gen_range(0..i64::MAX),
    }
}

pub fn random_continuous_vesting_account<R: Rng>(rng: &mut R) -> ContinuousVestingAccount {
    ContinuousVestingAccount {
        base_vesting_account: Some(random_base_vesting_account(rng)),
        start_time: rng.gen_range(0..i64::MAX),
    }
}

pub fn random_delayed_vesting_account<R: Rng>(rng: &mut R) -> DelayedVestingAccount {
    DelayedVestingAccount {
        base_vesting_account: Some(random_base_vesting_account(rng)),
    }
}

pub fn random_periodic_vesting_account<R: Rng>(rng: &mut R) -> PeriodicVestingAccount {
    let periods = rng.gen_range(0..6);
    PeriodicVestingAccount {
        base_vesting_account: Some(random_base_vesting_account(rng)),
        start_time: rng.gen_range(0..i64::MAX),
        vesting_periods: (0..periods)
            .map(|_| Period {
                length: rng.gen_range(1..31_536_000),
                amount: random_coins(rng),
            })
            .collect(),
    }
}

pub fn random_module_account<R: Rng>(rng: &mut R) -> ModuleAccount {
    let permissions = ["minter", "burner", "staking"]
        .into_iter()
        .filter(|_| rng.gen_bool(0.5))
        .map(String::from)
        .collect();
    let len = rng.gen_range(4..12);
    ModuleAccount {
        base_account: Some(random_base_account(rng)),
        name: random_string(rng, len),
        permissions,
    }
}

/// One account of each registered kind, in field number order.
pub fn every_account<R: Rng>(rng: &mut R) -> Vec<Account> {
    vec![
        random_base_account(rng).into(),
        random_continuous_vesting_account(rng).into(),
        random_delayed_vesting_account(rng).into(),
        random_periodic_vesting_account(rng).into(),
        random_module_account(rng).into(),
    ]
}

pub fn random_account<R: Rng>(rng: &mut R) -> Account {
    let sum = match rng.gen_range(0..5) {
        0 => AccountSum::BaseAccount(random_base_account(rng)),
        1 => AccountSum::ContinuousVestingAccount(random_continuous_vesting_account(rng)),
        2 => AccountSum::DelayedVestingAccount(random_delayed_vesting_account(rng)),
        3 => AccountSum::PeriodicVestingAccount(random_periodic_vesting_account(rng)),
        _ => AccountSum::ModuleAccount(random_module_account(rng)),
    };
    Account { sum: Some(sum) }
}

pub fn random_supply<R: Rng>(rng: &mut R) -> Supply {
    Supply {
        sum: Some(SupplySum::Supply(SupplyRecord {
            total: random_coins(rng),
        })),
    }
}

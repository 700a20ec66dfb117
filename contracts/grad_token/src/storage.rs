// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{Address, Env};

use crate::error::{handle_error, Error};
use crate::schema::{DataKey, TokenMetadata};

pub fn has_metadata(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

pub fn read_metadata(env: &Env) -> TokenMetadata {
    match env.storage().instance().get(&DataKey::Metadata) {
        Some(meta) => meta,
        None => handle_error(env, Error::NotInitialized),
    }
}

pub fn write_metadata(env: &Env, meta: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, meta);
}

pub fn read_admin(env: &Env) -> Address {
    match env.storage().instance().get(&DataKey::Admin) {
        Some(admin) => admin,
        None => handle_error(env, Error::NotInitialized),
    }
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Minter)
}

pub fn write_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&DataKey::Minter, minter);
}

pub fn read_max_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::MaxSupply).unwrap_or(0)
}

pub fn write_max_supply(env: &Env, cap: &i128) {
    env.storage().instance().set(&DataKey::MaxSupply, cap);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: &i128) {
    env.storage().instance().set(&DataKey::TotalSupply, supply);
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, holder: &Address, amount: &i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone()), amount);
}

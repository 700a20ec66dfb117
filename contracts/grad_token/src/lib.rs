// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

#![no_std]

/// Contract version for tracking deployments and upgrades
pub const VERSION: &str = "1.0.0";

mod error;
mod schema;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::schema::TokenMetadata;

const INIT_EVENT: Symbol = symbol_short!("init");
const SET_MINTER_EVENT: Symbol = symbol_short!("setMinter");
const MINT_EVENT: Symbol = symbol_short!("mint");
const BURN_EVENT: Symbol = symbol_short!("burn");
const TRANSFER_EVENT: Symbol = symbol_short!("transfer");

/// GradXP Token Contract
///
/// Fungible utility token for the GradXP platform with a hard max-supply
/// cap. Module-completion and reward-claim operations on the platform
/// contract mint into this ledger; only the admin and one authorized
/// minter (the platform) may mint.
#[contract]
pub struct GradToken;

#[contractimpl]
impl GradToken {
    /// One-time constructor.
    ///
    /// Stores token metadata, the administrator and the supply cap.
    ///
    /// # Panics
    ///
    /// * If the contract has already been initialized
    /// * If `max_supply` is not positive
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        max_supply: i128,
    ) {
        admin.require_auth();

        if storage::has_metadata(&env) {
            handle_error(&env, Error::AlreadyInitialized);
        }
        if max_supply <= 0 {
            handle_error(&env, Error::InvalidAmount);
        }

        storage::write_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        storage::write_admin(&env, &admin);
        storage::write_max_supply(&env, &max_supply);

        env.events().publish((INIT_EVENT,), (admin, max_supply));
    }

    /// Authorize a minter address (the platform contract).
    ///
    /// Only the admin can call this. The previous minter, if any, loses
    /// the privilege.
    pub fn set_minter(env: Env, caller: Address, minter: Address) {
        caller.require_auth();

        let admin = storage::read_admin(&env);
        if caller != admin {
            handle_error(&env, Error::Unauthorized);
        }

        storage::write_minter(&env, &minter);

        env.events().publish((SET_MINTER_EVENT,), (caller, minter));
    }

    /// Mint `amount` tokens to `to`.
    ///
    /// # Panics
    ///
    /// * If `caller` is neither the admin nor the authorized minter
    /// * If `amount` is not positive
    /// * If minting would push total supply past the max-supply cap
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();

        if amount <= 0 {
            handle_error(&env, Error::InvalidAmount);
        }

        let admin = storage::read_admin(&env);
        let is_minter = storage::read_minter(&env).is_some_and(|m| m == caller);
        if caller != admin && !is_minter {
            handle_error(&env, Error::Unauthorized);
        }

        let supply = storage::read_total_supply(&env);
        let cap = storage::read_max_supply(&env);
        let new_supply = supply
            .checked_add(amount)
            .unwrap_or_else(|| handle_error(&env, Error::ExceedsMaxSupply));
        if new_supply > cap {
            handle_error(&env, Error::ExceedsMaxSupply);
        }

        let balance = storage::read_balance(&env, &to);
        storage::write_balance(&env, &to, &(balance + amount));
        storage::write_total_supply(&env, &new_supply);

        env.events().publish((MINT_EVENT,), (to, amount));
    }

    /// Burn `amount` tokens from `from`'s balance.
    ///
    /// `from` must authorize the call.
    pub fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();

        if amount <= 0 {
            handle_error(&env, Error::InvalidAmount);
        }

        let balance = storage::read_balance(&env, &from);
        if balance < amount {
            handle_error(&env, Error::InsufficientBalance);
        }

        storage::write_balance(&env, &from, &(balance - amount));
        let supply = storage::read_total_supply(&env);
        storage::write_total_supply(&env, &(supply - amount));

        env.events().publish((BURN_EVENT,), (from, amount));
    }

    /// Transfer `amount` tokens from `from` to `to`.
    ///
    /// `from` must authorize the call.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if amount <= 0 {
            handle_error(&env, Error::InvalidAmount);
        }

        let from_balance = storage::read_balance(&env, &from);
        if from_balance < amount {
            handle_error(&env, Error::InsufficientBalance);
        }

        storage::write_balance(&env, &from, &(from_balance - amount));
        let to_balance = storage::read_balance(&env, &to);
        storage::write_balance(&env, &to, &(to_balance + amount));

        env.events().publish((TRANSFER_EVENT,), (from, to, amount));
    }

    /// Balance of `holder`, 0 if the account has never held tokens.
    pub fn balance(env: Env, holder: Address) -> i128 {
        storage::read_balance(&env, &holder)
    }

    /// Current circulating supply.
    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    /// Hard cap on total supply.
    pub fn max_supply(env: Env) -> i128 {
        storage::read_max_supply(&env)
    }

    pub fn name(env: Env) -> String {
        storage::read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::read_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        storage::read_metadata(&env).decimals
    }

    pub fn admin(env: Env) -> Address {
        storage::read_admin(&env)
    }

    pub fn minter(env: Env) -> Option<Address> {
        storage::read_minter(&env)
    }

    /// Get the current contract version
    pub fn get_contract_version(_env: Env) -> String {
        String::from_str(&_env, VERSION)
    }
}

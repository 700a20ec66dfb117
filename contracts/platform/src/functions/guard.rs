// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

//! Pause flag and per-instance reentrancy guard.
//!
//! Guarded operations (purchase, refund, completion, claims, investment)
//! call `enter` first and `exit` on the way out. A panic reverts the
//! `Busy` write along with everything else, so the flag cannot stay set
//! after a failed invocation.

use soroban_sdk::Env;

use crate::error::{handle_error, Error};
use crate::schema::DataKey;

pub fn require_not_paused(env: &Env) {
    let paused: bool = env.storage().instance().get(&DataKey::Paused).unwrap_or(false);
    if paused {
        handle_error(env, Error::Paused);
    }
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

/// Mark a guarded operation as in progress. Fails if one already is.
pub fn enter(env: &Env) {
    let busy: bool = env.storage().instance().get(&DataKey::Busy).unwrap_or(false);
    if busy {
        handle_error(env, Error::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Busy, &true);
}

/// Clear the in-progress marker. Must be called on every successful exit.
pub fn exit(env: &Env) {
    env.storage().instance().set(&DataKey::Busy, &false);
}

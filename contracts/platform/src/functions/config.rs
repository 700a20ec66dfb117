// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage};
use crate::schema::{
    PlatformConfig, DEFAULT_CREATOR_SHARE_BPS, DEFAULT_INVESTOR_SHARE_BPS, DEFAULT_MAX_INVESTMENT,
    DEFAULT_MIN_INVESTMENT, DEFAULT_MODULE_REWARD, DEFAULT_PLATFORM_FEE_BPS,
    DEFAULT_REFUND_WINDOW, MAX_PLATFORM_FEE_BPS,
};

const INIT_EVENT: Symbol = symbol_short!("init");
const PAUSED_EVENT: Symbol = symbol_short!("paused");
const UNPAUSED_EVENT: Symbol = symbol_short!("unpaused");
const CONFIG_EVENT: Symbol = symbol_short!("cfgUpdate");
const FUND_POOL_EVENT: Symbol = symbol_short!("fundPool");

/// One-time constructor wiring the collaborator contracts and seeding the
/// tunables with their defaults.
pub fn initialize(
    env: Env,
    admin: Address,
    payment_token: Address,
    reward_token: Address,
    certificate: Address,
) {
    admin.require_auth();

    if storage::has_config(&env) {
        handle_error(&env, Error::AlreadyInitialized);
    }

    let config = PlatformConfig {
        admin: admin.clone(),
        payment_token,
        reward_token,
        certificate,
        platform_fee_bps: DEFAULT_PLATFORM_FEE_BPS,
        default_module_reward: DEFAULT_MODULE_REWARD,
        investor_share_bps: DEFAULT_INVESTOR_SHARE_BPS,
        creator_share_bps: DEFAULT_CREATOR_SHARE_BPS,
        refund_window: DEFAULT_REFUND_WINDOW,
        min_investment: DEFAULT_MIN_INVESTMENT,
        max_investment: DEFAULT_MAX_INVESTMENT,
    };
    storage::write_config(&env, &config);

    env.events().publish((INIT_EVENT,), admin);
}

fn require_admin(env: &Env, caller: &Address) -> PlatformConfig {
    caller.require_auth();
    let config = storage::read_config(env);
    if *caller != config.admin {
        handle_error(env, Error::Unauthorized);
    }
    config
}

pub fn pause(env: Env, caller: Address) {
    require_admin(&env, &caller);
    guard::set_paused(&env, true);
    env.events().publish((PAUSED_EVENT,), caller);
}

pub fn unpause(env: Env, caller: Address) {
    require_admin(&env, &caller);
    guard::set_paused(&env, false);
    env.events().publish((UNPAUSED_EVENT,), caller);
}

/// Update the platform fee, capped at 10%.
pub fn update_platform_fee(env: Env, caller: Address, fee_bps: u32) {
    let mut config = require_admin(&env, &caller);

    if fee_bps > MAX_PLATFORM_FEE_BPS {
        handle_error(&env, Error::InvalidFee);
    }

    let old = config.platform_fee_bps;
    config.platform_fee_bps = fee_bps;
    storage::write_config(&env, &config);

    env.events()
        .publish((CONFIG_EVENT, symbol_short!("fee")), (old, fee_bps));
}

/// Update the reward applied to modules created with a zero reward.
pub fn update_default_reward(env: Env, caller: Address, reward: i128) {
    let mut config = require_admin(&env, &caller);

    if reward <= 0 {
        handle_error(&env, Error::InvalidAmount);
    }

    let old = config.default_module_reward;
    config.default_module_reward = reward;
    storage::write_config(&env, &config);

    env.events()
        .publish((CONFIG_EVENT, symbol_short!("reward")), (old, reward));
}

/// Update the investor/creator revenue split. The two must sum to 100%.
pub fn update_share_split(env: Env, caller: Address, investor_bps: u32, creator_bps: u32) {
    let mut config = require_admin(&env, &caller);

    if investor_bps + creator_bps != 10_000 {
        handle_error(&env, Error::InvalidShareSplit);
    }

    let old = (config.investor_share_bps, config.creator_share_bps);
    config.investor_share_bps = investor_bps;
    config.creator_share_bps = creator_bps;
    storage::write_config(&env, &config);

    env.events().publish(
        (CONFIG_EVENT, symbol_short!("split")),
        (old, (investor_bps, creator_bps)),
    );
}

pub fn update_refund_window(env: Env, caller: Address, seconds: u64) {
    let mut config = require_admin(&env, &caller);

    if seconds == 0 {
        handle_error(&env, Error::InvalidRefundWindow);
    }

    let old = config.refund_window;
    config.refund_window = seconds;
    storage::write_config(&env, &config);

    env.events()
        .publish((CONFIG_EVENT, symbol_short!("refundWin")), (old, seconds));
}

/// Update the investment bounds. Enforces 0 < min <= max.
pub fn update_investment_bounds(env: Env, caller: Address, min: i128, max: i128) {
    let mut config = require_admin(&env, &caller);

    if min <= 0 || min > max {
        handle_error(&env, Error::InvalidBounds);
    }

    let old = (config.min_investment, config.max_investment);
    config.min_investment = min;
    config.max_investment = max;
    storage::write_config(&env, &config);

    env.events()
        .publish((CONFIG_EVENT, symbol_short!("invBounds")), (old, (min, max)));
}

/// Move payment tokens from `from` into the contract treasury.
///
/// Module-completion rewards are paid out of the treasury, so it must be
/// funded ahead of claims; platform fees accumulate there as well.
pub fn fund_reward_pool(env: Env, from: Address, amount: i128) {
    from.require_auth();

    if amount <= 0 {
        handle_error(&env, Error::InvalidAmount);
    }

    let config = storage::read_config(&env);
    token::Client::new(&env, &config.payment_token).transfer(
        &from,
        &env.current_contract_address(),
        &amount,
    );

    env.events().publish((FUND_POOL_EVENT,), (from, amount));
}

pub fn get_config(env: &Env) -> PlatformConfig {
    storage::read_config(env)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage};
use crate::schema::{BPS_DENOMINATOR, WITHDRAWAL_FEE_BPS};

const WITHDRAW_EVENT: Symbol = symbol_short!("invWthdr");

/// Withdraw an active investment.
///
/// Pays back principal minus the fixed 5% fee, deactivates the record
/// (never deletes it) and removes the principal from the course's
/// `total_investment`. Already-claimed revenue shares are not revoked.
pub fn withdraw_investment(env: Env, investor: Address, course_id: String) -> i128 {
    guard::require_not_paused(&env);
    guard::enter(&env);

    investor.require_auth();

    let mut investment = match storage::get_investment(&env, &course_id, &investor) {
        Some(investment) if investment.active => investment,
        _ => handle_error(&env, Error::NoActiveInvestment),
    };

    let mut course = storage::load_course(&env, &course_id);

    let fee = investment.amount * WITHDRAWAL_FEE_BPS / BPS_DENOMINATOR;
    let payout = investment.amount - fee;

    course.total_investment -= investment.amount;
    storage::save_course(&env, &course);

    investment.active = false;
    storage::save_investment(&env, &investment);

    let config = storage::read_config(&env);
    token::Client::new(&env, &config.payment_token).transfer(
        &env.current_contract_address(),
        &investor,
        &payout,
    );

    env.events()
        .publish((WITHDRAW_EVENT,), (investor, course_id, payout));

    guard::exit(&env);
    payout
}

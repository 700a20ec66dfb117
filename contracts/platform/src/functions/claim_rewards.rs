// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage};
use crate::interfaces::RewardTokenClient;
use crate::schema::TOKENS_PER_REWARD_UNIT;

const CLAIM_EVENT: Symbol = symbol_short!("claimRwd");

/// Claim all unclaimed module rewards across every course the student has
/// purchased, as one aggregate payout.
///
/// Marks every scanned record fully claimed, pays the total from the
/// contract treasury and mints the correlated grad tokens. There is no
/// per-course partial claim; the whole scan settles atomically.
pub fn claim_rewards(env: Env, student: Address) -> i128 {
    guard::require_not_paused(&env);
    guard::enter(&env);

    student.require_auth();

    let config = storage::read_config(&env);

    let mut total: i128 = 0;
    for course_id in storage::student_courses(&env, &student).iter() {
        if let Some(mut progress) = storage::get_progress(&env, &course_id, &student) {
            let unclaimed = progress.earned_rewards - progress.claimed_rewards;
            if unclaimed > 0 {
                total += unclaimed;
                progress.claimed_rewards = progress.earned_rewards;
                storage::save_progress(&env, &progress);
            }
        }
    }

    if total == 0 {
        handle_error(&env, Error::NothingToClaim);
    }

    let contract = env.current_contract_address();
    token::Client::new(&env, &config.payment_token).transfer(&contract, &student, &total);
    RewardTokenClient::new(&env, &config.reward_token).mint(
        &contract,
        &student,
        &(total * TOKENS_PER_REWARD_UNIT),
    );

    env.events().publish((CLAIM_EVENT,), (student, total));

    guard::exit(&env);
    total
}

/// Unclaimed module rewards for `student`, summed over all purchases.
pub fn get_claimable_rewards(env: &Env, student: &Address) -> i128 {
    let mut total: i128 = 0;
    for course_id in storage::student_courses(env, student).iter() {
        if let Some(progress) = storage::get_progress(env, &course_id, student) {
            total += progress.earned_rewards - progress.claimed_rewards;
        }
    }
    total
}

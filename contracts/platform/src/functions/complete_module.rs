// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage};
use crate::interfaces::RewardTokenClient;
use crate::schema::{StudentProgress, TOKENS_PER_REWARD_UNIT};

const COMPLETE_EVENT: Symbol = symbol_short!("complete");

/// Record a module completion and accrue its reward.
///
/// The duplicate guard compares only against the single most recently
/// completed module: completing any module other than the immediately
/// previous one is accepted again. This matches the deployed behavior and
/// must not be tightened to a full completed-set check.
pub fn complete_module(
    env: Env,
    student: Address,
    course_id: String,
    module_id: String,
) -> StudentProgress {
    guard::require_not_paused(&env);
    guard::enter(&env);

    student.require_auth();

    let config = storage::read_config(&env);

    let mut progress = match storage::get_progress(&env, &course_id, &student) {
        Some(progress) if progress.purchased => progress,
        _ => handle_error(&env, Error::NotPurchased),
    };

    let module = storage::load_module(&env, &module_id);
    if !module.is_active {
        handle_error(&env, Error::ModuleInactive);
    }
    if !storage::course_modules(&env, &course_id).contains(&module_id) {
        handle_error(&env, Error::ModuleNotInCourse);
    }
    if progress.last_module_completed.as_ref() == Some(&module_id) {
        handle_error(&env, Error::ModuleAlreadyCompleted);
    }

    progress.completed_modules += 1;
    progress.last_module_completed = Some(module_id.clone());
    progress.earned_rewards += module.reward_amount;
    storage::save_progress(&env, &progress);

    let token_mint = module.reward_amount * TOKENS_PER_REWARD_UNIT;
    if token_mint > 0 {
        RewardTokenClient::new(&env, &config.reward_token).mint(
            &env.current_contract_address(),
            &student,
            &token_mint,
        );
    }

    env.events().publish(
        (COMPLETE_EVENT,),
        (student, course_id, module_id, module.reward_amount),
    );

    guard::exit(&env);
    progress
}

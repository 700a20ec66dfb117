// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;
use crate::schema::Module;

const CREATE_MODULE_EVENT: Symbol = symbol_short!("crtModule");

/// Create a module inside a course.
///
/// Module ids are globally unique, not scoped per course. A zero
/// `reward_amount` takes the platform-wide default.
pub fn create_module(
    env: Env,
    caller: Address,
    module_id: String,
    course_id: String,
    title: String,
    description: String,
    duration_hours: u32,
    reward_amount: i128,
) -> Module {
    caller.require_auth();

    if module_id.is_empty() {
        handle_error(&env, Error::EmptyModuleId);
    }
    if title.is_empty() {
        handle_error(&env, Error::EmptyTitle);
    }
    if reward_amount < 0 {
        handle_error(&env, Error::InvalidAmount);
    }

    let course = storage::load_course(&env, &course_id);
    if caller != course.creator {
        handle_error(&env, Error::Unauthorized);
    }

    if storage::has_module(&env, &module_id) {
        handle_error(&env, Error::DuplicateModuleId);
    }

    let config = storage::read_config(&env);
    let reward = if reward_amount == 0 {
        config.default_module_reward
    } else {
        reward_amount
    };

    let module = Module {
        id: module_id.clone(),
        course_id: course_id.clone(),
        title,
        description,
        duration_hours,
        reward_amount: reward,
        is_active: true,
        created_at: env.ledger().timestamp(),
    };

    storage::save_module(&env, &module);
    storage::push_course_module(&env, &course_id, &module_id);

    env.events()
        .publish((CREATE_MODULE_EVENT,), (module_id, course_id, reward));

    module
}

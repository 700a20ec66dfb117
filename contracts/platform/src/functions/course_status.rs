// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;
use crate::schema::Course;

const COURSE_STATUS_EVENT: Symbol = symbol_short!("crsStatus");

/// Creator-only toggle of `is_active`. Existing enrollments are untouched;
/// an inactive course only refuses new purchases and investments.
fn set_status(env: Env, creator: Address, course_id: String, active: bool) -> Course {
    creator.require_auth();

    let mut course = storage::load_course(&env, &course_id);

    if creator != course.creator {
        handle_error(&env, Error::Unauthorized);
    }

    course.is_active = active;
    storage::save_course(&env, &course);

    env.events()
        .publish((COURSE_STATUS_EVENT,), (course_id, active));

    course
}

pub fn deactivate_course(env: Env, creator: Address, course_id: String) -> Course {
    set_status(env, creator, course_id, false)
}

pub fn reactivate_course(env: Env, creator: Address, course_id: String) -> Course {
    set_status(env, creator, course_id, true)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;

const RATE_COURSE_EVENT: Symbol = symbol_short!("rateCrs");

/// Submit or revise a 1-5 rating for a purchased course.
///
/// Re-rating by the same student replaces the previous value in the
/// running sum; the rating count increments only on first rating, so a
/// student is never counted twice.
pub fn rate_course(env: Env, student: Address, course_id: String, rating: u32) {
    student.require_auth();

    if !(1..=5).contains(&rating) {
        handle_error(&env, Error::InvalidRating);
    }

    let mut course = storage::load_course(&env, &course_id);

    let mut progress = match storage::get_progress(&env, &course_id, &student) {
        Some(progress) if progress.purchased => progress,
        _ => handle_error(&env, Error::NotPurchased),
    };

    if progress.has_rated {
        course.total_rating -= progress.rating as u64;
    } else {
        course.rating_count += 1;
        progress.has_rated = true;
    }
    course.total_rating += rating as u64;
    progress.rating = rating;

    storage::save_course(&env, &course);
    storage::save_progress(&env, &progress);

    env.events()
        .publish((RATE_COURSE_EVENT,), (student, course_id, rating));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage, utils};
use crate::interfaces::CertificateClient;

const REFUND_EVENT: Symbol = symbol_short!("refund");

/// Refund a purchase.
///
/// Allowed only strictly before `purchase_time + refund_window` and only
/// with zero completed modules. The platform fee is not returned. The
/// certificate is burned and the progress record is kept as history with
/// `purchased` cleared.
pub fn request_refund(env: Env, student: Address, course_id: String) {
    guard::require_not_paused(&env);
    guard::enter(&env);

    student.require_auth();

    let config = storage::read_config(&env);
    let mut course = storage::load_course(&env, &course_id);

    let mut progress = match storage::get_progress(&env, &course_id, &student) {
        Some(progress) if progress.purchased => progress,
        _ => handle_error(&env, Error::NotPurchased),
    };

    let now = env.ledger().timestamp();
    if now >= progress.purchase_time + config.refund_window {
        handle_error(&env, Error::RefundWindowExpired);
    }
    if progress.completed_modules > 0 {
        handle_error(&env, Error::ModulesCompleted);
    }

    let fee = utils::bps_share(course.price, config.platform_fee_bps);
    let refund = course.price - fee;

    let contract = env.current_contract_address();
    CertificateClient::new(&env, &config.certificate).burn_certificate(
        &contract,
        &student,
        &course_id,
    );

    course.total_students -= 1;
    storage::save_course(&env, &course);

    progress.purchased = false;
    storage::save_progress(&env, &progress);

    if refund > 0 {
        token::Client::new(&env, &config.payment_token).transfer(&contract, &student, &refund);
    }

    env.events()
        .publish((REFUND_EVENT,), (student, course_id, refund));

    guard::exit(&env);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage, utils};
use crate::interfaces::CertificateClient;
use crate::schema::StudentProgress;

const PURCHASE_EVENT: Symbol = symbol_short!("purchase");

/// Purchase a course.
///
/// Pulls `payment` from the student, splits it into the platform fee
/// (retained), an investor-reserved portion (retained for later claims,
/// only when the course has active investors) and the creator payout
/// (transferred immediately), then mints the ownership certificate.
/// A failing transfer or certificate mint aborts the whole call; the host
/// reverts every write, so the purchase never partially applies.
pub fn purchase_course(
    env: Env,
    student: Address,
    course_id: String,
    payment: i128,
) -> StudentProgress {
    guard::require_not_paused(&env);
    guard::enter(&env);

    student.require_auth();

    let config = storage::read_config(&env);
    let mut course = storage::load_course(&env, &course_id);

    if !course.is_active {
        handle_error(&env, Error::CourseInactive);
    }
    if payment < course.price {
        handle_error(&env, Error::InsufficientPayment);
    }

    let previous = storage::get_progress(&env, &course_id, &student);
    if previous.as_ref().is_some_and(|p| p.purchased) {
        handle_error(&env, Error::AlreadyPurchased);
    }

    let contract = env.current_contract_address();
    let payment_client = token::Client::new(&env, &config.payment_token);
    payment_client.transfer(&student, &contract, &payment);

    let fee = utils::bps_share(payment, config.platform_fee_bps);
    let remainder = payment - fee;
    let creator_cut = if storage::has_active_investors(&env, &course_id) {
        // the investor portion stays in the contract for later claims
        utils::bps_share(remainder, config.creator_share_bps)
    } else {
        remainder
    };
    if creator_cut > 0 {
        payment_client.transfer(&contract, &course.creator, &creator_cut);
    }

    // AlreadyOwned from the registry aborts the whole purchase
    CertificateClient::new(&env, &config.certificate).mint_certificate(
        &contract,
        &student,
        &course_id,
    );

    // A refunded record is revived rather than recreated, so completion
    // and rating history survives across re-purchases.
    let progress = match previous {
        Some(mut progress) => {
            progress.purchased = true;
            progress.purchase_time = env.ledger().timestamp();
            progress
        }
        None => StudentProgress {
            course_id: course_id.clone(),
            student: student.clone(),
            purchased: true,
            purchase_time: env.ledger().timestamp(),
            completed_modules: 0,
            last_module_completed: None,
            earned_rewards: 0,
            claimed_rewards: 0,
            rating: 0,
            has_rated: false,
        },
    };
    storage::save_progress(&env, &progress);
    storage::push_student_course(&env, &student, &course_id);

    course.total_students += 1;
    storage::save_course(&env, &course);

    env.events().publish(
        (PURCHASE_EVENT,),
        (student, course_id, payment, fee, creator_cut),
    );

    guard::exit(&env);
    progress
}

#[cfg(test)]
mod test {
    use crate::schema::CourseLevel;
    use crate::{GradxpPlatform, GradxpPlatformClient};
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    // Paths that fail before any token movement; the funded flows live in
    // the crate-level end-to-end tests.
    fn setup<'a>() -> (Env, GradxpPlatformClient<'a>, Address, String) {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(GradxpPlatform, ());
        let client = GradxpPlatformClient::new(&env, &contract_id);

        client.initialize(
            &Address::generate(&env),
            &Address::generate(&env),
            &Address::generate(&env),
            &Address::generate(&env),
        );

        let creator = Address::generate(&env);
        let course_id = String::from_str(&env, "rust-101");
        client.create_course(
            &creator,
            &course_id,
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, ""),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );

        (env, client, creator, course_id)
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #6)")]
    fn test_purchase_missing_course_fails() {
        let (env, client, _creator, _course_id) = setup();

        client.purchase_course(
            &Address::generate(&env),
            &String::from_str(&env, "missing"),
            &1000,
        );
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #15)")]
    fn test_purchase_inactive_course_fails() {
        let (env, client, creator, course_id) = setup();

        client.deactivate_course(&creator, &course_id);
        client.purchase_course(&Address::generate(&env), &course_id, &1000);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #18)")]
    fn test_purchase_below_price_fails() {
        let (env, client, _creator, course_id) = setup();

        client.purchase_course(&Address::generate(&env), &course_id, &999);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #4)")]
    fn test_purchase_while_paused_fails() {
        let (env, client, _creator, course_id) = setup();

        let admin = client.get_config().admin;
        client.pause(&admin);
        client.purchase_course(&Address::generate(&env), &course_id, &1000);
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage};
use crate::schema::Investment;

const INVEST_EVENT: Symbol = symbol_short!("invest");

/// Invest in a course.
///
/// A first-time investor gets a fresh record and joins the course's
/// investor index; a repeat investment accumulates onto the existing
/// record and reactivates it after a withdrawal. `total_investment`
/// tracks the sum of active amounts.
pub fn invest_in_course(
    env: Env,
    investor: Address,
    course_id: String,
    amount: i128,
) -> Investment {
    guard::require_not_paused(&env);
    guard::enter(&env);

    investor.require_auth();

    let config = storage::read_config(&env);
    let mut course = storage::load_course(&env, &course_id);

    if !course.is_active {
        handle_error(&env, Error::CourseInactive);
    }
    if amount < config.min_investment || amount > config.max_investment {
        handle_error(&env, Error::InvestmentOutOfRange);
    }

    token::Client::new(&env, &config.payment_token).transfer(
        &investor,
        &env.current_contract_address(),
        &amount,
    );

    let now = env.ledger().timestamp();
    let investment = match storage::get_investment(&env, &course_id, &investor) {
        Some(mut investment) => {
            if investment.active {
                investment.amount += amount;
            } else {
                // The old principal was paid back at withdrawal; the
                // revived record starts from the fresh contribution so
                // total_investment keeps matching the active sum.
                investment.amount = amount;
            }
            investment.timestamp = now;
            investment.active = true;
            investment
        }
        None => {
            storage::push_course_investor(&env, &course_id, &investor);
            storage::push_investor_course(&env, &investor, &course_id);
            Investment {
                course_id: course_id.clone(),
                investor: investor.clone(),
                amount,
                timestamp: now,
                claimed_rewards: 0,
                last_claim_time: 0,
                active: true,
            }
        }
    };
    storage::save_investment(&env, &investment);

    course.total_investment += amount;
    storage::save_course(&env, &course);

    env.events()
        .publish((INVEST_EVENT,), (investor, course_id, amount));

    guard::exit(&env);
    investment
}

#[cfg(test)]
mod test {
    use crate::schema::CourseLevel;
    use crate::{GradxpPlatform, GradxpPlatformClient};
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn setup<'a>() -> (Env, GradxpPlatformClient<'a>, String) {
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

        let course_id = String::from_str(&env, "rust-101");
        client.create_course(
            &Address::generate(&env),
            &course_id,
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, ""),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );

        (env, client, course_id)
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #25)")]
    fn test_investment_below_minimum_fails() {
        let (env, client, course_id) = setup();

        // default minimum is 10
        client.invest_in_course(&Address::generate(&env), &course_id, &9);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #25)")]
    fn test_investment_above_maximum_fails() {
        let (env, client, course_id) = setup();

        client.invest_in_course(&Address::generate(&env), &course_id, &1_000_001);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #6)")]
    fn test_investment_missing_course_fails() {
        let (env, client, _course_id) = setup();

        client.invest_in_course(
            &Address::generate(&env),
            &String::from_str(&env, "missing"),
            &100,
        );
    }
}

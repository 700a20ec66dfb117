// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, token, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::{guard, storage, utils};

const INV_CLAIM_EVENT: Symbol = symbol_short!("invClaim");

/// Share of course revenue currently attributable to one investment.
///
/// Recomputed from the current `total_students` and `total_investment`
/// snapshots rather than from a running ledger of revenue events, so late
/// investors and late purchases retroactively shift everyone's computed
/// share. That is the deployed accounting model and is kept as-is.
fn computed_share(env: &Env, course_id: &String, investor: &Address) -> i128 {
    let investment = match storage::get_investment(env, course_id, investor) {
        Some(investment) if investment.active => investment,
        _ => return 0,
    };

    let course = storage::load_course(env, course_id);
    if course.total_investment == 0 {
        return 0;
    }

    let config = storage::read_config(env);
    let revenue = course.total_students as i128 * course.price;
    let pool = utils::bps_share(revenue, config.investor_share_bps);
    let share = pool * investment.amount / course.total_investment;

    share - investment.claimed_rewards
}

fn settle(env: &Env, course_id: &String, investor: &Address, unclaimed: i128) {
    let mut investment = match storage::get_investment(env, course_id, investor) {
        Some(investment) => investment,
        None => return,
    };
    investment.claimed_rewards += unclaimed;
    investment.last_claim_time = env.ledger().timestamp();
    storage::save_investment(env, &investment);
}

/// Claim the unclaimed revenue share for one course.
pub fn claim_investment_rewards(env: Env, investor: Address, course_id: String) -> i128 {
    guard::require_not_paused(&env);
    guard::enter(&env);

    investor.require_auth();

    let unclaimed = computed_share(&env, &course_id, &investor);
    if unclaimed <= 0 {
        handle_error(&env, Error::NothingToClaim);
    }

    settle(&env, &course_id, &investor, unclaimed);

    let config = storage::read_config(&env);
    token::Client::new(&env, &config.payment_token).transfer(
        &env.current_contract_address(),
        &investor,
        &unclaimed,
    );

    env.events()
        .publish((INV_CLAIM_EVENT,), (investor, course_id, unclaimed));

    guard::exit(&env);
    unclaimed
}

/// Claim unclaimed revenue shares across every course the investor holds
/// an active record in, as one aggregate transfer.
pub fn claim_all_investment_rewards(env: Env, investor: Address) -> i128 {
    guard::require_not_paused(&env);
    guard::enter(&env);

    investor.require_auth();

    let mut total: i128 = 0;
    for course_id in storage::investor_courses(&env, &investor).iter() {
        let unclaimed = computed_share(&env, &course_id, &investor);
        if unclaimed > 0 {
            settle(&env, &course_id, &investor, unclaimed);
            total += unclaimed;
        }
    }

    if total == 0 {
        handle_error(&env, Error::NothingToClaim);
    }

    let config = storage::read_config(&env);
    token::Client::new(&env, &config.payment_token).transfer(
        &env.current_contract_address(),
        &investor,
        &total,
    );

    env.events().publish((INV_CLAIM_EVENT,), (investor, total));

    guard::exit(&env);
    total
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

#![cfg(test)]

use crate::{GradToken, GradTokenClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

const MAX_SUPPLY: i128 = 1_000_000_000;

fn setup<'a>() -> (Env, GradTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(GradToken, ());
    let client = GradTokenClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "GradXP Token"),
        &String::from_str(&env, "GRADX"),
        &7,
        &MAX_SUPPLY,
    );

    (env, client, admin)
}

#[test]
fn test_initialize_stores_metadata() {
    let (env, client, admin) = setup();

    assert_eq!(client.name(), String::from_str(&env, "GradXP Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "GRADX"));
    assert_eq!(client.decimals(), 7);
    assert_eq!(client.max_supply(), MAX_SUPPLY);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.admin(), admin);
    assert_eq!(client.minter(), None);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn test_initialize_twice_fails() {
    let (env, client, admin) = setup();

    client.initialize(
        &admin,
        &String::from_str(&env, "GradXP Token"),
        &String::from_str(&env, "GRADX"),
        &7,
        &MAX_SUPPLY,
    );
}

#[test]
fn test_admin_can_mint() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    client.mint(&admin, &holder, &500);

    assert_eq!(client.balance(&holder), 500);
    assert_eq!(client.total_supply(), 500);
}

#[test]
fn test_authorized_minter_can_mint() {
    let (env, client, admin) = setup();
    let minter = Address::generate(&env);
    let holder = Address::generate(&env);

    client.set_minter(&admin, &minter);
    client.mint(&minter, &holder, &250);

    assert_eq!(client.balance(&holder), 250);
    assert_eq!(client.minter(), Some(minter));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn test_unauthorized_mint_fails() {
    let (env, client, _admin) = setup();
    let stranger = Address::generate(&env);

    client.mint(&stranger, &stranger, &100);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #6)")]
fn test_mint_past_cap_fails() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    client.mint(&admin, &holder, &MAX_SUPPLY);
    client.mint(&admin, &holder, &1);
}

#[test]
fn test_mint_exactly_to_cap() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    client.mint(&admin, &holder, &MAX_SUPPLY);
    assert_eq!(client.total_supply(), MAX_SUPPLY);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")]
fn test_mint_zero_amount_fails() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);

    client.mint(&admin, &holder, &0);
}

#[test]
fn test_transfer_moves_balance() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&admin, &alice, &1000);
    client.transfer(&alice, &bob, &400);

    assert_eq!(client.balance(&alice), 600);
    assert_eq!(client.balance(&bob), 400);
    assert_eq!(client.total_supply(), 1000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")]
fn test_transfer_more_than_balance_fails() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&admin, &alice, &100);
    client.transfer(&alice, &bob, &101);
}

#[test]
fn test_burn_reduces_supply() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);

    client.mint(&admin, &alice, &1000);
    client.burn(&alice, &300);

    assert_eq!(client.balance(&alice), 700);
    assert_eq!(client.total_supply(), 700);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")]
fn test_burn_more_than_balance_fails() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);

    client.mint(&admin, &alice, &100);
    client.burn(&alice, &200);
}

#[test]
fn test_burn_frees_room_under_cap() {
    let (env, client, admin) = setup();
    let alice = Address::generate(&env);

    client.mint(&admin, &alice, &MAX_SUPPLY);
    client.burn(&alice, &10);
    client.mint(&admin, &alice, &10);

    assert_eq!(client.total_supply(), MAX_SUPPLY);
}

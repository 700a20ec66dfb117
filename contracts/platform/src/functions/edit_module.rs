// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;
use crate::schema::{EditModuleParams, Module};

const EDIT_MODULE_EVENT: Symbol = symbol_short!("edtModule");

/// Partial update of a module, plus an explicit `is_active` assignment.
/// The course binding is immutable.
pub fn edit_module(
    env: Env,
    caller: Address,
    module_id: String,
    params: EditModuleParams,
) -> Module {
    caller.require_auth();

    let mut module = storage::load_module(&env, &module_id);
    let course = storage::load_course(&env, &module.course_id);

    if caller != course.creator {
        handle_error(&env, Error::Unauthorized);
    }

    if let Some(ref title) = params.new_title {
        if title.is_empty() {
            handle_error(&env, Error::EmptyTitle);
        }
        module.title = title.clone();
    }

    if let Some(ref description) = params.new_description {
        if !description.is_empty() {
            module.description = description.clone();
        }
    }

    if let Some(duration) = params.new_duration_hours {
        if duration > 0 {
            module.duration_hours = duration;
        }
    }

    if let Some(reward) = params.new_reward_amount {
        if reward <= 0 {
            handle_error(&env, Error::InvalidAmount);
        }
        module.reward_amount = reward;
    }

    // Explicit assignment, not partial
    if let Some(active) = params.new_is_active {
        module.is_active = active;
    }

    storage::save_module(&env, &module);

    env.events()
        .publish((EDIT_MODULE_EVENT,), (caller, module_id));

    module
}

#[cfg(test)]
mod test {
    use crate::schema::{CourseLevel, EditModuleParams};
    use crate::{GradxpPlatform, GradxpPlatformClient};
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

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
        let module_id = String::from_str(&env, "m1");
        client.create_module(
            &creator,
            &module_id,
            &course_id,
            &String::from_str(&env, "Ownership"),
            &String::from_str(&env, "Moves and borrows"),
            &2,
            &25,
        );

        (env, client, creator, module_id)
    }

    fn no_changes() -> EditModuleParams {
        EditModuleParams {
            new_title: None,
            new_description: None,
            new_duration_hours: None,
            new_reward_amount: None,
            new_is_active: None,
        }
    }

    #[test]
    fn test_edit_module_partial() {
        let (env, client, creator, module_id) = setup();

        let params = EditModuleParams {
            new_reward_amount: Some(40),
            new_is_active: Some(false),
            ..no_changes()
        };
        let module = client.edit_module(&creator, &module_id, &params);

        assert_eq!(module.reward_amount, 40);
        assert!(!module.is_active);
        // untouched fields survive
        assert_eq!(module.title, String::from_str(&env, "Ownership"));
        assert_eq!(
            module.description,
            String::from_str(&env, "Moves and borrows")
        );
        assert_eq!(module.duration_hours, 2);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #3)")]
    fn test_edit_module_not_creator_fails() {
        let (env, client, _creator, module_id) = setup();

        client.edit_module(&Address::generate(&env), &module_id, &no_changes());
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #7)")]
    fn test_edit_module_not_found() {
        let (env, client, creator, _module_id) = setup();

        client.edit_module(&creator, &String::from_str(&env, "missing"), &no_changes());
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #14)")]
    fn test_edit_module_zero_reward_rejected() {
        let (_env, client, creator, module_id) = setup();

        let params = EditModuleParams {
            new_reward_amount: Some(0),
            ..no_changes()
        };
        client.edit_module(&creator, &module_id, &params);
    }
}

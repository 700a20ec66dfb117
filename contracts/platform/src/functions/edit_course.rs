// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;
use crate::schema::{Course, CourseLevel, EditCourseParams};

const EDIT_COURSE_EVENT: Symbol = symbol_short!("edtCourse");
const SET_LEVEL_EVENT: Symbol = symbol_short!("setLevel");

/// Partial update of a course. Only the creator may edit; omitted fields
/// stay untouched and supplied fields must carry usable values, so stored
/// fields are overwritten but never cleared.
pub fn edit_course(
    env: Env,
    creator: Address,
    course_id: String,
    params: EditCourseParams,
) -> Course {
    creator.require_auth();

    let mut course = storage::load_course(&env, &course_id);

    if creator != course.creator {
        handle_error(&env, Error::Unauthorized);
    }

    if let Some(ref title) = params.new_title {
        if title.is_empty() {
            handle_error(&env, Error::EmptyTitle);
        }
        course.title = title.clone();
    }

    if let Some(ref description) = params.new_description {
        if !description.is_empty() {
            course.description = description.clone();
        }
    }

    if let Some(price) = params.new_price {
        if price < 0 {
            handle_error(&env, Error::InvalidAmount);
        }
        course.price = price;
    }

    if let Some(duration) = params.new_duration_hours {
        if duration > 0 {
            course.duration_hours = duration;
        }
    }

    storage::save_course(&env, &course);

    env.events()
        .publish((EDIT_COURSE_EVENT,), (creator, course_id));

    course
}

/// Explicit assignment of the difficulty level. Creator only.
pub fn set_course_level(
    env: Env,
    creator: Address,
    course_id: String,
    level: CourseLevel,
) -> Course {
    creator.require_auth();

    let mut course = storage::load_course(&env, &course_id);

    if creator != course.creator {
        handle_error(&env, Error::Unauthorized);
    }

    course.level = level;
    storage::save_course(&env, &course);

    env.events()
        .publish((SET_LEVEL_EVENT,), (creator, course_id));

    course
}

#[cfg(test)]
mod test {
    use crate::schema::{Course, CourseLevel, EditCourseParams};
    use crate::{GradxpPlatform, GradxpPlatformClient};
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn setup<'a>() -> (Env, GradxpPlatformClient<'a>, Address, Course) {
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
        let course = client.create_course(
            &creator,
            &String::from_str(&env, "rust-101"),
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, "Ownership and borrowing"),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );

        (env, client, creator, course)
    }

    fn no_changes() -> EditCourseParams {
        EditCourseParams {
            new_title: None,
            new_description: None,
            new_price: None,
            new_duration_hours: None,
        }
    }

    #[test]
    fn test_edit_course_partial_fields() {
        let (env, client, creator, course) = setup();

        let params = EditCourseParams {
            new_title: Some(String::from_str(&env, "Rust, Properly")),
            new_price: Some(2000),
            ..no_changes()
        };
        let edited = client.edit_course(&creator, &course.id, &params);

        assert_eq!(edited.title, String::from_str(&env, "Rust, Properly"));
        assert_eq!(edited.price, 2000);
        // untouched fields survive
        assert_eq!(edited.description, course.description);
        assert_eq!(edited.level, CourseLevel::Beginner);
        assert_eq!(edited.duration_hours, 20);
        assert_eq!(edited.category, course.category);
    }

    #[test]
    fn test_edit_course_noop_keeps_everything() {
        let (_env, client, creator, course) = setup();

        let edited = client.edit_course(&creator, &course.id, &no_changes());
        assert_eq!(edited, client.get_course(&course.id));
        assert_eq!(edited.title, course.title);
        assert_eq!(edited.price, course.price);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #3)")]
    fn test_edit_course_unauthorized() {
        let (env, client, _creator, course) = setup();
        let impostor = Address::generate(&env);

        client.edit_course(&impostor, &course.id, &no_changes());
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #6)")]
    fn test_edit_course_not_found() {
        let (env, client, creator, _course) = setup();

        client.edit_course(
            &creator,
            &String::from_str(&env, "missing"),
            &no_changes(),
        );
    }

    #[test]
    fn test_set_course_level() {
        let (_env, client, creator, course) = setup();

        let updated = client.set_course_level(&creator, &course.id, &CourseLevel::Advanced);

        assert_eq!(updated.level, CourseLevel::Advanced);
        // the rest of the record is untouched
        assert_eq!(updated.title, course.title);
        assert_eq!(updated.price, course.price);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #3)")]
    fn test_set_course_level_not_creator_fails() {
        let (env, client, _creator, course) = setup();

        client.set_course_level(
            &Address::generate(&env),
            &course.id,
            &CourseLevel::Intermediate,
        );
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #11)")]
    fn test_edit_course_empty_title_rejected() {
        let (env, client, creator, course) = setup();

        let params = EditCourseParams {
            new_title: Some(String::from_str(&env, "")),
            ..no_changes()
        };
        client.edit_course(&creator, &course.id, &params);
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::functions::storage;
use crate::schema::{Course, CourseLevel};

const CREATE_COURSE_EVENT: Symbol = symbol_short!("crtCourse");

pub fn create_course(
    env: Env,
    creator: Address,
    course_id: String,
    title: String,
    description: String,
    price: i128,
    total_modules: u32,
    category: String,
    level: CourseLevel,
    duration_hours: u32,
) -> Course {
    creator.require_auth();

    if course_id.is_empty() {
        handle_error(&env, Error::EmptyCourseId);
    }
    if title.is_empty() {
        handle_error(&env, Error::EmptyTitle);
    }
    if total_modules == 0 {
        handle_error(&env, Error::InvalidModuleCount);
    }
    if price < 0 {
        handle_error(&env, Error::InvalidAmount);
    }

    if storage::has_course(&env, &course_id) {
        handle_error(&env, Error::DuplicateCourseId);
    }

    let course = Course {
        id: course_id.clone(),
        title,
        description,
        price,
        total_modules,
        creator: creator.clone(),
        total_investment: 0,
        total_students: 0,
        total_rating: 0,
        rating_count: 0,
        is_active: true,
        created_at: env.ledger().timestamp(),
        category: category.clone(),
        level,
        duration_hours,
    };

    storage::save_course(&env, &course);
    storage::push_category_course(&env, &category, &course_id);

    env.events()
        .publish((CREATE_COURSE_EVENT,), (course_id, creator, price));

    course
}

#[cfg(test)]
mod test {
    use crate::schema::CourseLevel;
    use crate::{GradxpPlatform, GradxpPlatformClient};
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn setup<'a>() -> (Env, GradxpPlatformClient<'a>) {
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

        (env, client)
    }

    #[test]
    fn test_create_course_success() {
        let (env, client) = setup();
        let creator = Address::generate(&env);

        let course = client.create_course(
            &creator,
            &String::from_str(&env, "rust-101"),
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, "Ownership, borrowing and the rest"),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );

        assert_eq!(course.id, String::from_str(&env, "rust-101"));
        assert_eq!(course.creator, creator);
        assert_eq!(course.price, 1000);
        assert_eq!(course.total_modules, 4);
        assert_eq!(course.total_students, 0);
        assert_eq!(course.total_investment, 0);
        assert!(course.is_active);

        let stored = client.get_course(&course.id);
        assert_eq!(stored, course);
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #8)")]
    fn test_duplicate_course_id_fails() {
        let (env, client) = setup();
        let creator = Address::generate(&env);

        for _ in 0..2 {
            client.create_course(
                &creator,
                &String::from_str(&env, "rust-101"),
                &String::from_str(&env, "Rust for Beginners"),
                &String::from_str(&env, ""),
                &1000,
                &4,
                &String::from_str(&env, "programming"),
                &CourseLevel::Beginner,
                &20,
            );
        }
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #10)")]
    fn test_empty_course_id_fails() {
        let (env, client) = setup();

        client.create_course(
            &Address::generate(&env),
            &String::from_str(&env, ""),
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, ""),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #11)")]
    fn test_empty_title_fails() {
        let (env, client) = setup();

        client.create_course(
            &Address::generate(&env),
            &String::from_str(&env, "rust-101"),
            &String::from_str(&env, ""),
            &String::from_str(&env, ""),
            &1000,
            &4,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );
    }

    #[test]
    #[should_panic(expected = "HostError: Error(Contract, #12)")]
    fn test_zero_modules_fails() {
        let (env, client) = setup();

        client.create_course(
            &Address::generate(&env),
            &String::from_str(&env, "rust-101"),
            &String::from_str(&env, "Rust for Beginners"),
            &String::from_str(&env, ""),
            &1000,
            &0,
            &String::from_str(&env, "programming"),
            &CourseLevel::Beginner,
            &20,
        );
    }

    #[test]
    fn test_free_course_allowed() {
        let (env, client) = setup();

        let course = client.create_course(
            &Address::generate(&env),
            &String::from_str(&env, "intro"),
            &String::from_str(&env, "Intro"),
            &String::from_str(&env, ""),
            &0,
            &1,
            &String::from_str(&env, "general"),
            &CourseLevel::Beginner,
            &1,
        );
        assert_eq!(course.price, 0);
    }

    #[test]
    fn test_category_index_updated() {
        let (env, client) = setup();
        let creator = Address::generate(&env);
        let category = String::from_str(&env, "programming");

        for id in ["rust-101", "rust-201"] {
            client.create_course(
                &creator,
                &String::from_str(&env, id),
                &String::from_str(&env, "Rust"),
                &String::from_str(&env, ""),
                &1000,
                &4,
                &category,
                &CourseLevel::Intermediate,
                &20,
            );
        }

        let categories = client.list_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories.get(0), Some(category.clone()));

        let in_category = client.get_courses_by_category(&category);
        assert_eq!(in_category.len(), 2);
    }
}

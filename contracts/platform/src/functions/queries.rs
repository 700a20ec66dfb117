// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{Address, Env, String, Vec};

use crate::functions::storage;
use crate::schema::{Course, Investment, Module, StudentProgress};

pub fn get_course(env: &Env, course_id: String) -> Course {
    storage::load_course(env, &course_id)
}

pub fn get_module(env: &Env, module_id: String) -> Module {
    storage::load_module(env, &module_id)
}

/// Modules of a course in creation order.
pub fn list_course_modules(env: &Env, course_id: String) -> Vec<Module> {
    let mut modules = Vec::new(env);
    for module_id in storage::course_modules(env, &course_id).iter() {
        modules.push_back(storage::load_module(env, &module_id));
    }
    modules
}

pub fn list_categories(env: &Env) -> Vec<String> {
    storage::categories(env)
}

pub fn get_courses_by_category(env: &Env, category: String) -> Vec<Course> {
    let mut courses = Vec::new(env);
    for course_id in storage::category_courses(env, &category).iter() {
        courses.push_back(storage::load_course(env, &course_id));
    }
    courses
}

/// Truncated average rating, 0 while unrated.
pub fn get_average_rating(env: &Env, course_id: String) -> u64 {
    let course = storage::load_course(env, &course_id);
    if course.rating_count == 0 {
        return 0;
    }
    course.total_rating / course.rating_count as u64
}

pub fn get_progress(env: &Env, course_id: String, student: Address) -> Option<StudentProgress> {
    storage::get_progress(env, &course_id, &student)
}

pub fn get_student_courses(env: &Env, student: Address) -> Vec<String> {
    storage::student_courses(env, &student)
}

pub fn get_investment(env: &Env, course_id: String, investor: Address) -> Option<Investment> {
    storage::get_investment(env, &course_id, &investor)
}

pub fn get_course_investors(env: &Env, course_id: String) -> Vec<Address> {
    storage::course_investors(env, &course_id)
}

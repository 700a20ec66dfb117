// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

//! Shared storage accessors for the platform's owned records.
//!
//! Loading helpers fail with the spec'd error when a record is absent;
//! index helpers keep the auxiliary Vec structures in step with the
//! owning records.

use soroban_sdk::{Address, Env, String, Vec};

use crate::error::{handle_error, Error};
use crate::schema::{Course, DataKey, Investment, Module, PlatformConfig, StudentProgress};

pub fn read_config(env: &Env) -> PlatformConfig {
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        None => handle_error(env, Error::NotInitialized),
    }
}

pub fn write_config(env: &Env, config: &PlatformConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_course(env: &Env, course_id: &String) -> Course {
    match env
        .storage()
        .persistent()
        .get(&DataKey::Course(course_id.clone()))
    {
        Some(course) => course,
        None => handle_error(env, Error::CourseNotFound),
    }
}

pub fn has_course(env: &Env, course_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Course(course_id.clone()))
}

pub fn save_course(env: &Env, course: &Course) {
    env.storage()
        .persistent()
        .set(&DataKey::Course(course.id.clone()), course);
}

pub fn load_module(env: &Env, module_id: &String) -> Module {
    match env
        .storage()
        .persistent()
        .get(&DataKey::Module(module_id.clone()))
    {
        Some(module) => module,
        None => handle_error(env, Error::ModuleNotFound),
    }
}

pub fn has_module(env: &Env, module_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Module(module_id.clone()))
}

pub fn save_module(env: &Env, module: &Module) {
    env.storage()
        .persistent()
        .set(&DataKey::Module(module.id.clone()), module);
}

pub fn course_modules(env: &Env, course_id: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::CourseModules(course_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_course_module(env: &Env, course_id: &String, module_id: &String) {
    let mut modules = course_modules(env, course_id);
    modules.push_back(module_id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::CourseModules(course_id.clone()), &modules);
}

pub fn get_progress(env: &Env, course_id: &String, student: &Address) -> Option<StudentProgress> {
    env.storage()
        .persistent()
        .get(&DataKey::Progress(course_id.clone(), student.clone()))
}

pub fn save_progress(env: &Env, progress: &StudentProgress) {
    env.storage().persistent().set(
        &DataKey::Progress(progress.course_id.clone(), progress.student.clone()),
        progress,
    );
}

pub fn student_courses(env: &Env, student: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::StudentCourses(student.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_student_course(env: &Env, student: &Address, course_id: &String) {
    let mut courses = student_courses(env, student);
    if !courses.contains(course_id) {
        courses.push_back(course_id.clone());
        env.storage()
            .persistent()
            .set(&DataKey::StudentCourses(student.clone()), &courses);
    }
}

pub fn get_investment(env: &Env, course_id: &String, investor: &Address) -> Option<Investment> {
    env.storage()
        .persistent()
        .get(&DataKey::Investment(course_id.clone(), investor.clone()))
}

pub fn save_investment(env: &Env, investment: &Investment) {
    env.storage().persistent().set(
        &DataKey::Investment(investment.course_id.clone(), investment.investor.clone()),
        investment,
    );
}

pub fn course_investors(env: &Env, course_id: &String) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CourseInvestors(course_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_course_investor(env: &Env, course_id: &String, investor: &Address) {
    let mut investors = course_investors(env, course_id);
    if !investors.contains(investor) {
        investors.push_back(investor.clone());
        env.storage()
            .persistent()
            .set(&DataKey::CourseInvestors(course_id.clone()), &investors);
    }
}

pub fn investor_courses(env: &Env, investor: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::InvestorCourses(investor.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_investor_course(env: &Env, investor: &Address, course_id: &String) {
    let mut courses = investor_courses(env, investor);
    if !courses.contains(course_id) {
        courses.push_back(course_id.clone());
        env.storage()
            .persistent()
            .set(&DataKey::InvestorCourses(investor.clone()), &courses);
    }
}

pub fn categories(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Categories)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn category_courses(env: &Env, category: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Category(category.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Append a course to the category index, creating the category entry on
/// first use.
pub fn push_category_course(env: &Env, category: &String, course_id: &String) {
    let mut all = categories(env);
    if !all.contains(category) {
        all.push_back(category.clone());
        env.storage().persistent().set(&DataKey::Categories, &all);
    }

    let mut courses = category_courses(env, category);
    courses.push_back(course_id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Category(category.clone()), &courses);
}

/// True if at least one investment record for the course is active.
pub fn has_active_investors(env: &Env, course_id: &String) -> bool {
    for investor in course_investors(env, course_id).iter() {
        if let Some(investment) = get_investment(env, course_id, &investor) {
            if investment.active {
                return true;
            }
        }
    }
    false
}

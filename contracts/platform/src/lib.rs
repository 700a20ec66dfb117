// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP
#![allow(clippy::too_many_arguments)]
#![no_std]

/// Contract version for tracking deployments and upgrades
pub const VERSION: &str = "1.0.0";

pub mod error;
pub mod functions;
pub mod interfaces;
pub mod schema;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::schema::{
    Course, EditCourseParams, EditModuleParams, Investment, Module, PlatformConfig,
    StudentProgress, CourseLevel,
};

/// GradXP Platform Contract
///
/// This contract owns the course catalog, the enrollment and progress
/// ledger, the investment ledger and the platform tunables. Payments move
/// through the configured payment token; completion rewards mint grad
/// tokens and purchases mint ownership certificates, both through
/// collaborator contracts wired in at initialization.
#[contract]
pub struct GradxpPlatform;

#[contractimpl]
impl GradxpPlatform {
    /// One-time constructor to set the admin and collaborator addresses.
    ///
    /// Seeds the tunables with their defaults (2.5% platform fee, 50/50
    /// investor/creator split, 3-day refund window).
    ///
    /// # Panics
    ///
    /// * If the contract has already been initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        reward_token: Address,
        certificate: Address,
    ) {
        functions::config::initialize(env, admin, payment_token, reward_token, certificate)
    }

    // ── Course catalog ──────────────────────────────────────────────────

    /// Create a new course in the catalog.
    ///
    /// # Arguments
    ///
    /// * `creator` - The address that will own the course
    /// * `course_id` - Caller-supplied unique identifier
    /// * `price` - Price in the smallest unit of the payment token
    /// * `total_modules` - Planned module count, must be positive
    ///
    /// # Panics
    ///
    /// * If the course id is already registered
    /// * If the id or title is empty, the price negative, or the module
    ///   count zero
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
        functions::create_course::create_course(
            env,
            creator,
            course_id,
            title,
            description,
            price,
            total_modules,
            category,
            level,
            duration_hours,
        )
    }

    /// Edit an existing course. Creator only; omitted fields are left
    /// unchanged.
    pub fn edit_course(
        env: Env,
        creator: Address,
        course_id: String,
        params: EditCourseParams,
    ) -> Course {
        functions::edit_course::edit_course(env, creator, course_id, params)
    }

    /// Set a course's difficulty level. Creator only; always an explicit
    /// assignment, unlike the partial fields of `edit_course`.
    pub fn set_course_level(
        env: Env,
        creator: Address,
        course_id: String,
        level: CourseLevel,
    ) -> Course {
        functions::edit_course::set_course_level(env, creator, course_id, level)
    }

    /// Deactivate a course. Creator only; existing enrollments keep
    /// working, only new purchases and investments are refused.
    pub fn deactivate_course(env: Env, creator: Address, course_id: String) -> Course {
        functions::course_status::deactivate_course(env, creator, course_id)
    }

    /// Reactivate a previously deactivated course. Creator only.
    pub fn reactivate_course(env: Env, creator: Address, course_id: String) -> Course {
        functions::course_status::reactivate_course(env, creator, course_id)
    }

    /// Create a module inside a course.
    ///
    /// Module ids are globally unique across the catalog. A zero
    /// `reward_amount` takes the platform-wide default reward.
    ///
    /// # Panics
    ///
    /// * If the module id already exists anywhere in the catalog
    /// * If the course doesn't exist or the caller is not its creator
    pub fn create_module(
        env: Env,
        caller: Address,
        module_id: String,
        course_id: String,
        title: String,
        description: String,
        duration_hours: u32,
        reward_amount: i128,
    ) -> Module {
        functions::create_module::create_module(
            env,
            caller,
            module_id,
            course_id,
            title,
            description,
            duration_hours,
            reward_amount,
        )
    }

    /// Edit an existing module. Creator only; `new_is_active` is an
    /// explicit assignment while the other fields are partial.
    pub fn edit_module(
        env: Env,
        caller: Address,
        module_id: String,
        params: EditModuleParams,
    ) -> Module {
        functions::edit_module::edit_module(env, caller, module_id, params)
    }

    /// Rate a purchased course with a value in [1, 5].
    ///
    /// Re-rating replaces the student's previous value instead of
    /// double-counting it.
    pub fn rate_course(env: Env, student: Address, course_id: String, rating: u32) {
        functions::rate_course::rate_course(env, student, course_id, rating)
    }

    // ── Enrollment & progress ───────────────────────────────────────────

    /// Purchase a course with `payment` units of the payment token.
    ///
    /// The payment is split into the platform fee (retained), an
    /// investor-reserved portion (retained, only when the course has
    /// active investors) and the creator payout (transferred
    /// immediately). Mints an ownership certificate for the student.
    ///
    /// # Panics
    ///
    /// * If the course is missing or inactive
    /// * If `payment` is below the course price
    /// * If the student already owns the course
    /// * If the certificate registry reports the course already owned
    pub fn purchase_course(
        env: Env,
        student: Address,
        course_id: String,
        payment: i128,
    ) -> StudentProgress {
        functions::purchase_course::purchase_course(env, student, course_id, payment)
    }

    /// Refund a purchase inside the refund window.
    ///
    /// Only while no module has been completed. The platform fee is not
    /// returned; the certificate is burned and the enrollment is closed,
    /// keeping the progress record as history.
    pub fn request_refund(env: Env, student: Address, course_id: String) {
        functions::request_refund::request_refund(env, student, course_id)
    }

    /// Record a module completion, accruing its reward and minting the
    /// correlated grad tokens (100 per reward unit).
    pub fn complete_module(
        env: Env,
        student: Address,
        course_id: String,
        module_id: String,
    ) -> StudentProgress {
        functions::complete_module::complete_module(env, student, course_id, module_id)
    }

    /// Claim all unclaimed module rewards across every purchased course
    /// as one aggregate payout. Returns the amount paid.
    ///
    /// # Panics
    ///
    /// * If there is nothing to claim
    pub fn claim_rewards(env: Env, student: Address) -> i128 {
        functions::claim_rewards::claim_rewards(env, student)
    }

    /// Unclaimed module rewards for `student`.
    pub fn get_claimable_rewards(env: Env, student: Address) -> i128 {
        functions::claim_rewards::get_claimable_rewards(&env, &student)
    }

    // ── Investment ──────────────────────────────────────────────────────

    /// Invest in a course. The amount must sit inside the configured
    /// bounds; repeat investments accumulate onto the existing record.
    pub fn invest_in_course(
        env: Env,
        investor: Address,
        course_id: String,
        amount: i128,
    ) -> Investment {
        functions::invest_in_course::invest_in_course(env, investor, course_id, amount)
    }

    /// Claim the investor's unclaimed revenue share for one course.
    /// Returns the amount paid.
    pub fn claim_investment_rewards(env: Env, investor: Address, course_id: String) -> i128 {
        functions::claim_investment_rewards::claim_investment_rewards(env, investor, course_id)
    }

    /// Claim unclaimed revenue shares across all invested courses as one
    /// aggregate transfer. Returns the amount paid.
    pub fn claim_all_investment_rewards(env: Env, investor: Address) -> i128 {
        functions::claim_investment_rewards::claim_all_investment_rewards(env, investor)
    }

    /// Withdraw an active investment, minus the fixed 5% fee.
    /// Returns the amount paid back.
    pub fn withdraw_investment(env: Env, investor: Address, course_id: String) -> i128 {
        functions::withdraw_investment::withdraw_investment(env, investor, course_id)
    }

    // ── Admin controls ──────────────────────────────────────────────────

    /// Pause all guarded operations. Admin only.
    pub fn pause(env: Env, caller: Address) {
        functions::config::pause(env, caller)
    }

    /// Resume guarded operations. Admin only.
    pub fn unpause(env: Env, caller: Address) {
        functions::config::unpause(env, caller)
    }

    /// Return true if the platform is paused.
    pub fn is_paused(env: Env) -> bool {
        functions::guard::is_paused(&env)
    }

    /// Update the platform fee in basis points, capped at 10%. Admin only.
    pub fn update_platform_fee(env: Env, caller: Address, fee_bps: u32) {
        functions::config::update_platform_fee(env, caller, fee_bps)
    }

    /// Update the default module reward. Admin only.
    pub fn update_default_reward(env: Env, caller: Address, reward: i128) {
        functions::config::update_default_reward(env, caller, reward)
    }

    /// Update the investor/creator split; the parts must sum to 100%.
    /// Admin only.
    pub fn update_share_split(env: Env, caller: Address, investor_bps: u32, creator_bps: u32) {
        functions::config::update_share_split(env, caller, investor_bps, creator_bps)
    }

    /// Update the refund window in seconds. Admin only.
    pub fn update_refund_window(env: Env, caller: Address, seconds: u64) {
        functions::config::update_refund_window(env, caller, seconds)
    }

    /// Update the investment bounds; enforces 0 < min <= max. Admin only.
    pub fn update_investment_bounds(env: Env, caller: Address, min: i128, max: i128) {
        functions::config::update_investment_bounds(env, caller, min, max)
    }

    /// Move payment tokens from `from` into the contract treasury, out of
    /// which module rewards are paid.
    pub fn fund_reward_pool(env: Env, from: Address, amount: i128) {
        functions::config::fund_reward_pool(env, from, amount)
    }

    /// Current platform configuration.
    pub fn get_config(env: Env) -> PlatformConfig {
        functions::config::get_config(&env)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Retrieve a course by its ID.
    ///
    /// # Panics
    ///
    /// * If no course with the given ID exists
    pub fn get_course(env: Env, course_id: String) -> Course {
        functions::queries::get_course(&env, course_id)
    }

    /// Retrieve a module by its ID.
    pub fn get_module(env: Env, module_id: String) -> Module {
        functions::queries::get_module(&env, module_id)
    }

    /// List the modules of a course in creation order.
    pub fn list_course_modules(env: Env, course_id: String) -> Vec<Module> {
        functions::queries::list_course_modules(&env, course_id)
    }

    /// List all category names in creation order.
    pub fn list_categories(env: Env) -> Vec<String> {
        functions::queries::list_categories(&env)
    }

    /// List the courses registered under a category.
    pub fn get_courses_by_category(env: Env, category: String) -> Vec<Course> {
        functions::queries::get_courses_by_category(&env, category)
    }

    /// Truncated average rating of a course, 0 while unrated.
    pub fn get_average_rating(env: Env, course_id: String) -> u64 {
        functions::queries::get_average_rating(&env, course_id)
    }

    /// Progress record for `(course, student)`, if any.
    pub fn get_progress(env: Env, course_id: String, student: Address) -> Option<StudentProgress> {
        functions::queries::get_progress(&env, course_id, student)
    }

    /// Ids of the courses a student has purchased (past or present).
    pub fn get_student_courses(env: Env, student: Address) -> Vec<String> {
        functions::queries::get_student_courses(&env, student)
    }

    /// Investment record for `(course, investor)`, if any.
    pub fn get_investment(env: Env, course_id: String, investor: Address) -> Option<Investment> {
        functions::queries::get_investment(&env, course_id, investor)
    }

    /// Every investor that ever invested in a course.
    pub fn get_course_investors(env: Env, course_id: String) -> Vec<Address> {
        functions::queries::get_course_investors(&env, course_id)
    }

    /// Get the current contract version
    pub fn get_contract_version(_env: Env) -> String {
        String::from_str(&_env, VERSION)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{contracttype, Address, String};

/// Basis-point denominator for all percentage math.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Grad tokens minted per reward-currency unit.
pub const TOKENS_PER_REWARD_UNIT: i128 = 100;

/// Fixed fee retained when an investor withdraws principal, in basis points.
pub const WITHDRAWAL_FEE_BPS: i128 = 500;

/// Upper bound on the platform fee (10%).
pub const MAX_PLATFORM_FEE_BPS: u32 = 1_000;

pub const DEFAULT_PLATFORM_FEE_BPS: u32 = 250;
pub const DEFAULT_INVESTOR_SHARE_BPS: u32 = 5_000;
pub const DEFAULT_CREATOR_SHARE_BPS: u32 = 5_000;
/// Three days, in seconds.
pub const DEFAULT_REFUND_WINDOW: u64 = 259_200;
pub const DEFAULT_MODULE_REWARD: i128 = 10;
pub const DEFAULT_MIN_INVESTMENT: i128 = 10;
pub const DEFAULT_MAX_INVESTMENT: i128 = 1_000_000;

/// Difficulty level of a course.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A purchasable learning unit in the catalog.
///
/// The id is caller-supplied, unique, and immutable after creation.
/// `total_investment` always equals the sum of `amount` over the course's
/// active investment records.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in the smallest unit of the payment token
    pub price: i128,
    pub total_modules: u32,
    pub creator: Address,
    /// Sum of active investment amounts
    pub total_investment: i128,
    /// Number of currently enrolled students
    pub total_students: u32,
    /// Running sum of submitted ratings
    pub total_rating: u64,
    /// Number of students who have rated (each counted once)
    pub rating_count: u32,
    pub is_active: bool,
    pub created_at: u64,
    pub category: String,
    pub level: CourseLevel,
    pub duration_hours: u32,
}

/// A sub-unit of a course whose completion accrues reward.
///
/// Module ids are globally unique, not scoped per course, and the course
/// binding is set at creation and never reassigned.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub duration_hours: u32,
    /// Reward accrued per completion, in payment-token units
    pub reward_amount: i128,
    pub is_active: bool,
    pub created_at: u64,
}

/// Per-student, per-course purchase and completion state.
///
/// Created on purchase and never deleted; a refund clears `purchased`
/// but retains the record as history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentProgress {
    pub course_id: String,
    pub student: Address,
    pub purchased: bool,
    pub purchase_time: u64,
    pub completed_modules: u32,
    /// Marker used by the duplicate-completion guard. Only the most
    /// recent completion is remembered.
    pub last_module_completed: Option<String>,
    pub earned_rewards: i128,
    /// Always <= earned_rewards
    pub claimed_rewards: i128,
    /// Last rating submitted by this student, 0 if never rated
    pub rating: u32,
    pub has_rated: bool,
}

/// Per-course, per-investor contribution record.
///
/// Deactivated on withdrawal, never deleted. A repeat investment while
/// active accumulates onto `amount`; after a withdrawal the record is
/// reactivated with the fresh contribution as its new principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    pub course_id: String,
    pub investor: Address,
    pub amount: i128,
    /// Timestamp of the most recent contribution
    pub timestamp: u64,
    pub claimed_rewards: i128,
    pub last_claim_time: u64,
    pub active: bool,
}

/// Global platform tunables, mutated only by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub admin: Address,
    /// Asset purchases, investments and reward payouts are denominated in
    pub payment_token: Address,
    /// The grad-token contract minted on completions and claims
    pub reward_token: Address,
    /// The certificate registry contract
    pub certificate: Address,
    pub platform_fee_bps: u32,
    pub default_module_reward: i128,
    pub investor_share_bps: u32,
    pub creator_share_bps: u32,
    /// Seconds after purchase during which a refund is allowed
    pub refund_window: u64,
    pub min_investment: i128,
    pub max_investment: i128,
}

/// Partial-update request for a course. `None` leaves the stored field
/// unchanged; supplied values must be non-empty / positive, so fields can
/// be overwritten but never cleared. The difficulty level is set through
/// `set_course_level` instead.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditCourseParams {
    pub new_title: Option<String>,
    pub new_description: Option<String>,
    pub new_price: Option<i128>,
    pub new_duration_hours: Option<u32>,
}

/// Partial-update request for a module. `new_is_active` is an explicit
/// assignment, not partial.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditModuleParams {
    pub new_title: Option<String>,
    pub new_description: Option<String>,
    pub new_duration_hours: Option<u32>,
    pub new_reward_amount: Option<i128>,
    pub new_is_active: Option<bool>,
}

/// Storage keys for platform state.
///
/// This enum defines the keys used to store and retrieve course, progress
/// and investment data from the contract's storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global tunables and collaborator addresses
    Config,
    /// Global pause flag, settable only by the admin
    Paused,
    /// Reentrancy guard flag, one per contract instance
    Busy,
    /// Key for storing courses: course_id -> Course
    Course(String),
    /// Key for storing modules: module_id -> Module
    Module(String),
    /// Key for the course -> module index: course_id -> Vec<String>
    CourseModules(String),
    /// All category names in creation order
    Categories,
    /// Key for the category index: name -> Vec<String> of course ids
    Category(String),
    /// Key for storing progress: (course_id, student) -> StudentProgress
    Progress(String, Address),
    /// Key for courses purchased per student: student -> Vec<String>
    StudentCourses(Address),
    /// Key for storing investments: (course_id, investor) -> Investment
    Investment(String, Address),
    /// Key for investors per course: course_id -> Vec<Address>
    CourseInvestors(String),
    /// Key for courses invested in per investor: investor -> Vec<String>
    InvestorCourses(Address),
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{contracterror, panic_with_error, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    Paused = 4,
    ReentrantCall = 5,
    CourseNotFound = 6,
    ModuleNotFound = 7,
    DuplicateCourseId = 8,
    DuplicateModuleId = 9,
    EmptyCourseId = 10,
    EmptyTitle = 11,
    InvalidModuleCount = 12,
    InvalidRating = 13,
    InvalidAmount = 14,
    CourseInactive = 15,
    AlreadyPurchased = 16,
    NotPurchased = 17,
    InsufficientPayment = 18,
    RefundWindowExpired = 19,
    ModulesCompleted = 20,
    ModuleInactive = 21,
    ModuleNotInCourse = 22,
    ModuleAlreadyCompleted = 23,
    NothingToClaim = 24,
    InvestmentOutOfRange = 25,
    NoActiveInvestment = 26,
    InvalidFee = 27,
    InvalidShareSplit = 28,
    InvalidBounds = 29,
    InvalidRefundWindow = 30,
    EmptyModuleId = 31,
}

pub fn handle_error(env: &Env, error: Error) -> ! {
    panic_with_error!(env, error)
}

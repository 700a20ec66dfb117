// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

pub mod claim_investment_rewards;
pub mod claim_rewards;
pub mod complete_module;
pub mod config;
pub mod course_status;
pub mod create_course;
pub mod create_module;
pub mod edit_course;
pub mod edit_module;
pub mod guard;
pub mod invest_in_course;
pub mod purchase_course;
pub mod queries;
pub mod rate_course;
pub mod request_refund;
pub mod storage;
pub mod utils;
pub mod withdraw_investment;

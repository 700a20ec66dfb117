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
    AlreadyOwned = 4,
    CertificateNotFound = 5,
    EmptyCourseId = 6,
}

pub fn handle_error(env: &Env, error: Error) -> ! {
    panic_with_error!(env, error)
}

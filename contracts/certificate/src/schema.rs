// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{contracttype, Address, String};

/// A non-fungible certificate proving course ownership.
///
/// One live certificate exists per (holder, course) pair. Burning a
/// certificate (on refund) frees the pair for a future re-purchase.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    /// Sequential token identifier
    pub token_id: u64,
    /// Current holder of the certificate
    pub owner: Address,
    /// The course this certificate attests ownership of
    pub course_id: String,
    /// Timestamp when the certificate was minted
    pub issued_at: u64,
}

/// Storage keys for certificate data.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator address
    Admin,
    /// Authorized minter address (the platform contract)
    Minter,
    /// Counter for sequential token ids
    NextTokenId,
    /// Key for storing certificates: token_id -> Certificate
    Cert(u64),
    /// Key for the ownership index: (holder, course_id) -> token_id
    OwnerCert(Address, String),
    /// Key for per-course metadata URIs: course_id -> String
    CourseUri(String),
}

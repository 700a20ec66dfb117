// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

//! Capability interfaces for the platform's external collaborators.
//!
//! The platform never links against the token or certificate crates; it
//! talks to whatever contracts are wired in at `initialize` through these
//! clients. The payment asset uses the built-in `soroban_sdk::token::Client`.

use soroban_sdk::{contractclient, Address, Env, String};

/// Fungible reward ledger (the grad-token contract).
#[contractclient(name = "RewardTokenClient")]
pub trait RewardToken {
    /// Mint `amount` tokens to `to`. Fails in the collaborator if the
    /// caller is unauthorized or the max-supply cap would be exceeded.
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
}

/// Non-fungible course-ownership registry (the certificate contract).
#[contractclient(name = "CertificateClient")]
pub trait CertificateRegistry {
    /// Mint a certificate for `(to, course_id)`. Fails in the collaborator
    /// if the pair already holds a live certificate.
    fn mint_certificate(env: Env, caller: Address, to: Address, course_id: String) -> u64;

    /// Burn the live certificate for `(holder, course_id)`. Fails in the
    /// collaborator if none exists.
    fn burn_certificate(env: Env, caller: Address, holder: Address, course_id: String);
}

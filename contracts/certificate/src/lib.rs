// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

#![no_std]

/// Contract version for tracking deployments and upgrades
pub const VERSION: &str = "1.0.0";

mod error;
mod schema;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

use crate::error::{handle_error, Error};
use crate::schema::{Certificate, DataKey};

const MINT_EVENT: Symbol = symbol_short!("certMint");
const BURN_EVENT: Symbol = symbol_short!("certBurn");
const SET_URI_EVENT: Symbol = symbol_short!("setUri");

/// Course Certificate Contract
///
/// Non-fungible ownership registry for the GradXP platform. A certificate
/// is keyed by (holder, course) and minted on purchase; a refund burns it.
/// Only the admin and the authorized minter (the platform contract) can
/// mint or burn.
#[contract]
pub struct CourseCertificate;

#[contractimpl]
impl CourseCertificate {
    /// One-time constructor to set the admin and minter addresses.
    ///
    /// # Panics
    ///
    /// * If the contract has already been initialized
    pub fn initialize(env: Env, admin: Address, minter: Address) {
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Admin) {
            handle_error(&env, Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Minter, &minter);
    }

    /// Replace the authorized minter. Admin only.
    pub fn set_minter(env: Env, caller: Address, minter: Address) {
        caller.require_auth();
        Self::require_admin(&env, &caller);

        env.storage().instance().set(&DataKey::Minter, &minter);
    }

    /// Set the metadata URI resolved by certificates of `course_id`.
    ///
    /// Admin only. Overwrites any previous URI for the course.
    pub fn set_course_uri(env: Env, caller: Address, course_id: String, uri: String) {
        caller.require_auth();
        Self::require_admin(&env, &caller);

        if course_id.is_empty() {
            handle_error(&env, Error::EmptyCourseId);
        }

        env.storage()
            .persistent()
            .set(&DataKey::CourseUri(course_id.clone()), &uri);

        env.events().publish((SET_URI_EVENT,), (caller, course_id));
    }

    /// Mint a certificate for `to` over `course_id`.
    ///
    /// Returns the sequential token id of the new certificate.
    ///
    /// # Panics
    ///
    /// * If `caller` is neither the admin nor the authorized minter
    /// * If `to` already holds a live certificate for this course
    pub fn mint_certificate(env: Env, caller: Address, to: Address, course_id: String) -> u64 {
        caller.require_auth();
        Self::require_minter_or_admin(&env, &caller);

        if course_id.is_empty() {
            handle_error(&env, Error::EmptyCourseId);
        }

        let owner_key = DataKey::OwnerCert(to.clone(), course_id.clone());
        if env.storage().persistent().has(&owner_key) {
            handle_error(&env, Error::AlreadyOwned);
        }

        let token_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&DataKey::NextTokenId, &token_id);

        let cert = Certificate {
            token_id,
            owner: to.clone(),
            course_id: course_id.clone(),
            issued_at: env.ledger().timestamp(),
        };

        env.storage().persistent().set(&DataKey::Cert(token_id), &cert);
        env.storage().persistent().set(&owner_key, &token_id);

        env.events()
            .publish((MINT_EVENT,), (to, course_id, token_id));

        token_id
    }

    /// Burn the certificate held by `holder` for `course_id`.
    ///
    /// # Panics
    ///
    /// * If `caller` is neither the admin nor the authorized minter
    /// * If no live certificate exists for the pair
    pub fn burn_certificate(env: Env, caller: Address, holder: Address, course_id: String) {
        caller.require_auth();
        Self::require_minter_or_admin(&env, &caller);

        let owner_key = DataKey::OwnerCert(holder.clone(), course_id.clone());
        let token_id: u64 = match env.storage().persistent().get(&owner_key) {
            Some(id) => id,
            None => handle_error(&env, Error::CertificateNotFound),
        };

        env.storage().persistent().remove(&DataKey::Cert(token_id));
        env.storage().persistent().remove(&owner_key);

        env.events()
            .publish((BURN_EVENT,), (holder, course_id, token_id));
    }

    /// Token id held by `holder` for `course_id`, if any.
    pub fn get_token_id(env: Env, holder: Address, course_id: String) -> Option<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerCert(holder, course_id))
    }

    /// True if `holder` has a live certificate for `course_id`.
    pub fn has_certificate(env: Env, holder: Address, course_id: String) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::OwnerCert(holder, course_id))
    }

    /// Owner of `token_id`.
    ///
    /// # Panics
    ///
    /// * If the certificate doesn't exist or was burned
    pub fn owner_of(env: Env, token_id: u64) -> Address {
        let cert: Certificate = match env.storage().persistent().get(&DataKey::Cert(token_id)) {
            Some(cert) => cert,
            None => handle_error(&env, Error::CertificateNotFound),
        };
        cert.owner
    }

    /// Metadata URI for `token_id`, resolved through its course.
    pub fn token_uri(env: Env, token_id: u64) -> Option<String> {
        let cert: Certificate = match env.storage().persistent().get(&DataKey::Cert(token_id)) {
            Some(cert) => cert,
            None => handle_error(&env, Error::CertificateNotFound),
        };
        env.storage()
            .persistent()
            .get(&DataKey::CourseUri(cert.course_id))
    }

    /// Get the current contract version
    pub fn get_contract_version(_env: Env) -> String {
        String::from_str(&_env, VERSION)
    }

    fn require_admin(env: &Env, caller: &Address) {
        let admin: Address = match env.storage().instance().get(&DataKey::Admin) {
            Some(admin) => admin,
            None => handle_error(env, Error::NotInitialized),
        };
        if *caller != admin {
            handle_error(env, Error::Unauthorized);
        }
    }

    fn require_minter_or_admin(env: &Env, caller: &Address) {
        let admin: Address = match env.storage().instance().get(&DataKey::Admin) {
            Some(admin) => admin,
            None => handle_error(env, Error::NotInitialized),
        };
        let minter: Option<Address> = env.storage().instance().get(&DataKey::Minter);
        if *caller != admin && minter != Some(caller.clone()) {
            handle_error(env, Error::Unauthorized);
        }
    }
}

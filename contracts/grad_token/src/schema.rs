// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use soroban_sdk::{contracttype, Address, String};

/// Immutable token metadata fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Storage keys for the fungible ledger.
///
/// This enum defines the keys used to store and retrieve
/// token state from the contract's persistent storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Token metadata fixed at initialization
    Metadata,
    /// Administrator address
    Admin,
    /// Authorized minter address (the platform contract)
    Minter,
    /// Hard cap on total supply
    MaxSupply,
    /// Current circulating supply
    TotalSupply,
    /// Key for storing balances: holder -> i128
    Balance(Address),
}

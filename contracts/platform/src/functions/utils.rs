// SPDX-License-Identifier: MIT
// Copyright (c) 2025 GradXP

use crate::schema::BPS_DENOMINATOR;

/// Basis-point share of `amount`, truncating. Remainders are forfeited,
/// never redistributed.
pub fn bps_share(amount: i128, bps: u32) -> i128 {
    amount * bps as i128 / BPS_DENOMINATOR
}

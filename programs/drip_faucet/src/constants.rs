/**
 * Program Constants
 *
 * This module defines the constant values used throughout the drip faucet
 * program: the registry capacity bound and the PDA derivation seeds.
 */

/// ===== CAPACITY CONSTANTS =====

/// Maximum number of drips one faucet can register
/// - Bounds the registry account space, which is allocated up front
/// - Matches the width of the per-wallet claimed bitmap (one u64)
pub const MAX_DRIPS: usize = 64;

/// ===== PDA SEED CONSTANTS =====

/// Seed for faucet PDA derivation
/// - Used in: ["faucet", authority]
/// - One faucet per authority
/// - The faucet PDA is the mint authority that signs payout mints
pub const FAUCET_SEED: &str = "faucet";

/// Seed for claim state PDA derivation
/// - Used in: ["claim", faucet_key, claimant_key]
/// - Creates unique claim tracking for each (faucet, claimant) pair
/// - Created lazily on a wallet's first claim and never closed
pub const CLAIM_SEED: &str = "claim";

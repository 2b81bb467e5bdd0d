use anchor_lang::prelude::*;

/// Event emitted when a new faucet is created
#[event]
pub struct FaucetCreated {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Authority allowed to register and toggle drips
    pub authority: Pubkey,
}

/// Event emitted when a drip is registered
#[event]
pub struct DripAdded {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Index assigned to the new drip
    pub index: u32,
    /// Mint distributed by the drip
    pub mint: Pubkey,
    /// Amount minted per successful claim
    pub amount: u64,
}

/// Event emitted when a drip's active flag is set
#[event]
pub struct DripActiveSet {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Index of the toggled drip
    pub index: u32,
    /// New value of the active flag
    pub active: bool,
}

/// Event emitted when a single drip is claimed
#[event]
pub struct DripClaimed {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Wallet that claimed
    pub claimant: Pubkey,
    /// Index of the claimed drip
    pub index: u32,
    /// Mint that was paid out
    pub mint: Pubkey,
    /// Amount minted to the claimant
    pub amount: u64,
}

/// Event emitted with the outcome of a batch claim
#[event]
pub struct DripsClaimed {
    /// The faucet account public key
    pub faucet: Pubkey,
    /// Wallet that claimed
    pub claimant: Pubkey,
    /// Number of indices evaluated
    pub attempted: u32,
    /// Number of claims that transitioned state and were paid out
    pub succeeded: u32,
}

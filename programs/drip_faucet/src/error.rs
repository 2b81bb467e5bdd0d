use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    // Access control errors
    #[msg("Only authority can perform this action")]
    OnlyAuthority,

    // Drip registration errors
    #[msg("Invalid address")]
    InvalidAddress,
    #[msg("Invalid token to drip")]
    InvalidToken,
    #[msg("Faucet drip capacity reached")]
    FaucetFull,

    // Claim validation errors
    #[msg("Drip not exists")]
    DripNotFound,
    #[msg("Drip is not active")]
    DripInactive,
    #[msg("Drip already claimed")]
    AlreadyClaimed,

    // Account wiring errors
    #[msg("Mint does not match the drip at this index")]
    DripMintMismatch,
    #[msg("Expected one mint and one recipient token account per requested index")]
    RemainingAccountsMismatch,
    #[msg("Recipient token account is not owned by the claimant")]
    InvalidRecipient,
}

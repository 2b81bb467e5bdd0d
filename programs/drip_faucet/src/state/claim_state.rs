use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::Drip;

/**
 * Per-wallet claim tracking account
 *
 * One ClaimState account per (faucet, wallet) pair, created lazily on the
 * wallet's first claim and never closed. Bit `i` of `claimed` records
 * that the wallet has claimed drip `i`.
 *
 * The claimed bit is a one-way latch: no instruction ever clears it.
 * Deactivating a drip only hides it from claiming; once a wallet has
 * claimed, its status for that drip oscillates between claimed+active and
 * claimed+inactive as the authority toggles the drip.
 *
 * Derivation: ["claim", faucet_key, claimant_key]
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimState {
    /// Bit-packed claimed flags, one bit per drip index
    pub claimed: u64,
}

impl ClaimState {
    /// Account size: 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimState>();

    pub fn is_claimed(&self, index: u32) -> bool {
        self.claimed & (1u64 << index) != 0
    }

    fn mark_claimed(&mut self, index: u32) {
        self.claimed |= 1u64 << index;
    }

    /// Single-claim transition: errors when the drip is inactive or the
    /// bit is already set, otherwise latches the bit.
    pub fn claim(&mut self, index: u32, drip: &Drip) -> Result<()> {
        require!(drip.active, FaucetError::DripInactive);
        require!(!self.is_claimed(index), FaucetError::AlreadyClaimed);
        self.mark_claimed(index);
        Ok(())
    }

    /// Batch-claim transition: inactive and already-claimed drips are
    /// skipped instead of failing. Returns true when the bit latched.
    pub fn claim_lenient(&mut self, index: u32, drip: &Drip) -> bool {
        if !drip.active || self.is_claimed(index) {
            return false;
        }
        self.mark_claimed(index);
        true
    }
}

use anchor_lang::prelude::*;

use crate::constants::MAX_DRIPS;
use crate::error::FaucetError;
use crate::state::ClaimState;

/**
 * A single registered drip
 *
 * Immutable after registration except for the active flag. A drip's index
 * is its position in the faucet's drip list; indices are assigned
 * sequentially from 0 and never reused, so external references stay valid
 * for the lifetime of the faucet.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct Drip {
    /// Mint distributed by this drip
    /// - The faucet PDA must be the mint authority so claims can be paid
    pub mint: Pubkey,

    /// Amount minted per successful claim
    /// - Fixed at registration
    pub amount: u64,

    /// Whether the drip is currently claimable
    /// - Toggled by the authority; claim history is unaffected
    pub active: bool,
}

impl Drip {
    /// Serialized size of one drip entry
    pub const LEN: usize = 32 + 8 + 1;
}

/**
 * Main faucet state account
 *
 * This struct is the drip registry: an append-only, index-addressed list
 * of drip definitions plus the authority allowed to manage them. Drips
 * are never removed or reordered, only deactivated, because per-wallet
 * claim bitmaps are position-indexed.
 *
 * The faucet PDA doubles as the mint authority of every registered drip
 * mint, which is what lets the program sign payout mints.
 *
 * Derivation: ["faucet", authority]
 *
 * Lifecycle:
 * 1. Created during initialize_faucet with an empty drip list
 * 2. Grown one entry at a time by add_drip
 * 3. Entries toggled in place by set_drip_active
 */
#[account]
#[derive(Default, Debug)]
pub struct Faucet {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing payout mints
    pub bump: u8,

    /// Authority allowed to register drips and toggle activity
    pub authority: Pubkey,

    /// Registered drips, ordered by index
    /// - Append-only: position is the drip's permanent identity
    pub drips: Vec<Drip>,
}

impl Faucet {
    /// Account size: discriminator + bump + authority + vec prefix + max entries
    /// - Allocated up front so the registry can grow without realloc
    pub const LEN: usize = 8 + 1 + 32 + 4 + MAX_DRIPS * Drip::LEN;

    pub fn drips_len(&self) -> u32 {
        self.drips.len() as u32
    }

    /// Returns the drip at `index`, or DripNotFound when out of bounds.
    pub fn drip(&self, index: u32) -> Result<&Drip> {
        self.drips
            .get(index as usize)
            .ok_or_else(|| error!(FaucetError::DripNotFound))
    }

    /// Appends a new active drip and returns its index.
    pub fn add_drip(&mut self, mint: Pubkey, amount: u64) -> Result<u32> {
        require!(self.drips.len() < MAX_DRIPS, FaucetError::FaucetFull);
        let index = self.drips_len();
        self.drips.push(Drip {
            mint,
            amount,
            active: true,
        });
        Ok(index)
    }

    /// Sets the active flag of the drip at `index`.
    ///
    /// Setting the current value again is a no-op success. Claimed bits
    /// are never affected.
    pub fn set_drip_active(&mut self, index: u32, active: bool) -> Result<()> {
        let drip = self
            .drips
            .get_mut(index as usize)
            .ok_or_else(|| error!(FaucetError::DripNotFound))?;
        drip.active = active;
        Ok(())
    }

    /// Computes the per-drip claim status codes for one wallet, in
    /// ascending index order.
    ///
    /// Each code packs the wallet's persisted claimed bit with the drip's
    /// live active flag:
    ///
    /// | code | claimed | active |
    /// |------|---------|--------|
    /// | 0    | no      | yes    |
    /// | 1    | yes     | yes    |
    /// | 2    | no      | no     |
    /// | 3    | yes     | no     |
    ///
    /// Activity is read from the registry at query time, never stored per
    /// wallet, so a toggle is reflected in every wallet's status at once.
    pub fn drip_statuses(&self, claims: &ClaimState) -> Vec<u8> {
        self.drips
            .iter()
            .enumerate()
            .map(|(index, drip)| {
                let claimed = claims.is_claimed(index as u32) as u8;
                let inactive = (!drip.active as u8) << 1;
                claimed | inactive
            })
            .collect()
    }
}

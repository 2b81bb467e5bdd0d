use anchor_lang::prelude::*;

declare_id!("7w5Sfv6d3DcDT3tf7UFSc3CUuCgzfDR1ZJKccQhYGJSd");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::Drip;

/**
 * Drip Faucet Program
 *
 * A Solana program distributing a curated set of test tokens ("drips") to
 * requesting wallets, once per wallet per drip.
 *
 * Key Features:
 * - Append-only drip registry; a drip's index is its permanent identity
 * - One claimed bit per (wallet, drip), latched forever once set
 * - Per-drip active flag the authority can toggle without touching claim history
 * - Single, batch, and claim-everything entrypoints with per-item skip accounting
 * - Payouts minted under faucet PDA authority (SPL Token and Token 2022)
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Faucet PDA: drip registry, admin authority, and payout mint authority
 * - ClaimState PDAs: one bit-packed claim bitmap per (faucet, wallet)
 *
 * Workflow:
 * 1. Authority initializes a faucet and points drip mints' authority at its PDA
 * 2. Authority registers drips (mint + fixed amount per claim)
 * 3. Wallets claim individual drips, a chosen set, or everything at once
 * 4. Authority can pause a drip at any time; reactivating restores
 *    claimability for wallets that have not claimed it
 */
#[program]
pub mod drip_faucet {
    use super::*;

    /**
     * Creates a new faucet
     *
     * Initializes the faucet registry PDA for the calling authority with
     * an empty drip list.
     *
     * @param ctx - Account context containing faucet and authority accounts
     *
     * Access Control: Any wallet; the creator becomes the authority
     */
    pub fn initialize_faucet(ctx: Context<InitializeFaucet>) -> Result<()> {
        handle_initialize_faucet(ctx)
    }

    /**
     * Registers a new drip
     *
     * Appends a drip distributing `amount` units of the given mint per
     * claim. The drip is active immediately; its index is the registry
     * length at call time and never changes.
     *
     * @param ctx - Account context containing faucet, mint and authority accounts
     * @param amount - Amount minted per successful claim
     *
     * Access Control: Authority only
     */
    pub fn add_drip(ctx: Context<AddDrip>, amount: u64) -> Result<()> {
        handle_add_drip(ctx, amount)
    }

    /**
     * Sets a drip's active flag
     *
     * Inactive drips reject claims without consuming claim state; claimed
     * bits are never affected. Re-asserting the current value is a no-op
     * success.
     *
     * @param ctx - Account context containing faucet and authority accounts
     * @param index - Index of the drip to toggle
     * @param active - New value of the active flag
     *
     * Access Control: Authority only
     */
    pub fn set_drip_active(ctx: Context<SetDripActive>, index: u32, active: bool) -> Result<()> {
        handle_set_drip_active(ctx, index, active)
    }

    /**
     * Claims a single drip
     *
     * Latches the claimant's bit for the index and mints the drip amount
     * to the claimant's token account.
     *
     * @param ctx - Account context containing faucet, claim state and token accounts
     * @param index - Index of the drip to claim
     *
     * Access Control: Any wallet; succeeds at most once per (wallet, drip)
     */
    pub fn claim(ctx: Context<Claim>, index: u32) -> Result<()> {
        handle_claim(ctx, index)
    }

    /**
     * Claims several drips in one call
     *
     * Evaluates the indices in the given order; inactive and
     * already-claimed entries are skipped, any unknown index fails the
     * whole call. Outcome reported via the DripsClaimed event.
     *
     * @param ctx - Account context plus one (mint, token account) pair per index
     * @param indices - Drip indices to attempt
     *
     * Access Control: Any wallet
     */
    pub fn claim_many<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimMany<'info>>,
        indices: Vec<u32>,
    ) -> Result<()> {
        handle_claim_many(ctx, indices)
    }

    /**
     * Claims every registered drip
     *
     * Equivalent to claim_many over 0..drips_len() ascending.
     *
     * @param ctx - Account context plus one (mint, token account) pair per drip
     *
     * Access Control: Any wallet
     */
    pub fn claim_all<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimAll<'info>>,
    ) -> Result<()> {
        handle_claim_all(ctx)
    }

    /**
     * Returns the number of registered drips
     */
    pub fn drips_len(ctx: Context<QueryFaucet>) -> Result<u32> {
        handle_drips_len(ctx)
    }

    /**
     * Returns the drip at `index`
     */
    pub fn get_drip(ctx: Context<QueryFaucet>, index: u32) -> Result<Drip> {
        handle_get_drip(ctx, index)
    }

    /**
     * Returns a snapshot of the full drip registry in index order
     */
    pub fn all_drips(ctx: Context<QueryFaucet>) -> Result<Vec<Drip>> {
        handle_all_drips(ctx)
    }

    /**
     * Returns the wallet's claim status code for every drip, ascending
     *
     * Codes: 0 = unclaimed+active, 1 = claimed+active, 2 = unclaimed+inactive,
     * 3 = claimed+inactive. Computed live from the registry's active flags
     * and the wallet's persisted claimed bits.
     */
    pub fn drip_status(ctx: Context<QueryDripStatus>, wallet: Pubkey) -> Result<Vec<u8>> {
        handle_drip_status(ctx, wallet)
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenInterface;

use crate::constants::*;
use crate::event::*;
use crate::instructions::claim_common::process_claim_batch;
use crate::state::*;

/**
 * Account context for claiming several drips in one call
 *
 * Remaining accounts carry one (drip_mint, recipient_token_account) pair
 * per requested index, in request order.
 *
 * Access Control: Any wallet
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimMany<'info> {
    /// The faucet registry holding the drip definitions
    /// - Also the mint authority signing the payouts
    pub faucet: Account<'info, Faucet>,

    /// Individual claim state for this claimant
    /// - Derived from: ["claim", faucet_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimState::LEN,
        seeds = [CLAIM_SEED.as_bytes(), faucet.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_state: Account<'info, ClaimState>,

    /// The wallet claiming the drips
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for claim state creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims the requested drip indices in order, skipping inactive and
 * already-claimed entries
 *
 * @param ctx - The account context plus one account pair per index
 * @param indices - Drip indices to attempt, evaluated in the given order
 *
 * Any unknown index fails the whole call with DripNotFound and no state
 * change. The outcome is reported in the DripsClaimed event as
 * (attempted, succeeded).
 */
pub fn handle_claim_many<'info>(
    ctx: Context<'_, '_, 'info, 'info, ClaimMany<'info>>,
    indices: Vec<u32>,
) -> Result<()> {
    let attempted = indices.len() as u32;
    let claimant = ctx.accounts.claimant.key();

    let succeeded = process_claim_batch(
        &ctx.accounts.faucet,
        &mut ctx.accounts.claim_state,
        &claimant,
        ctx.accounts.token_program.to_account_info(),
        ctx.remaining_accounts,
        &indices,
    )?;

    emit_cpi!(DripsClaimed {
        faucet: ctx.accounts.faucet.key(),
        claimant,
        attempted,
        succeeded,
    });

    Ok(())
}

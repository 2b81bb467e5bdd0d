use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenInterface;

use crate::constants::*;
use crate::event::*;
use crate::instructions::claim_common::process_claim_batch;
use crate::state::*;

/**
 * Account context for claiming every registered drip in one call
 *
 * Remaining accounts carry one (drip_mint, recipient_token_account) pair
 * per drip index, ascending.
 *
 * Access Control: Any wallet
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimAll<'info> {
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
 * Claims every drip the wallet has not claimed yet
 *
 * Equivalent to claim_many over all indices in ascending order; attempted
 * always equals the registry length at call time. Inactive and
 * already-claimed drips are skipped.
 */
pub fn handle_claim_all<'info>(ctx: Context<'_, '_, 'info, 'info, ClaimAll<'info>>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let indices: Vec<u32> = (0..ctx.accounts.faucet.drips_len()).collect();
    let attempted = indices.len() as u32;

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

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::mint_token;

/**
 * Account context for claiming a single drip
 *
 * This instruction pays out one drip to the claimant, once. The claim is
 * recorded as one bit in the claimant's ClaimState account, which is
 * created on first use.
 *
 * Access Control: Any wallet; each (wallet, drip) pair succeeds at most once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The faucet registry holding the drip definitions
    /// - Also the mint authority signing the payout
    pub faucet: Account<'info, Faucet>,

    /// Individual claim state for this claimant
    /// - Bit i set means drip i was already claimed by this wallet
    /// - Derived from: ["claim", faucet_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimState::LEN,
        seeds = [CLAIM_SEED.as_bytes(), faucet.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_state: Account<'info, ClaimState>,

    /// Mint of the drip being claimed
    /// - Must match the registered mint at the requested index
    #[account(mut)]
    pub drip_mint: InterfaceAccount<'info, Mint>,

    /// Claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = drip_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The wallet claiming the drip
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for claim state creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a single drip claim
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Index of the drip to claim
 *
 * Validation Process:
 * 1. The index must name a registered drip and the drip must be active
 * 2. The claimant's bit for the index must not be set yet
 * 3. The provided mint must be the drip's registered mint
 *
 * The claimed bit is latched before the mint CPI so a reentrant claim
 * attempt triggered by the transfer observes AlreadyClaimed instead of
 * double-spending. A failed CPI aborts the transaction, which also rolls
 * the bit back.
 */
pub fn handle_claim(ctx: Context<Claim>, index: u32) -> Result<()> {
    let faucet = &ctx.accounts.faucet;
    let claim_state = &mut ctx.accounts.claim_state;

    // ===== VALIDATION PHASE =====

    let drip = faucet.drip(index)?.clone();
    require!(
        ctx.accounts.drip_mint.key() == drip.mint,
        FaucetError::DripMintMismatch
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Errors with DripInactive / AlreadyClaimed, otherwise latches the bit
    claim_state.claim(index, &drip)?;

    // ===== INTERACTIONS PHASE (Token Mint) =====

    // Prepare PDA signing seeds for the payout
    let authority_key = faucet.authority;
    let faucet_bump = faucet.bump;
    let seeds = &[
        FAUCET_SEED.as_bytes(),
        authority_key.as_ref(),
        &[faucet_bump],
    ];
    let signer = &[&seeds[..]];

    mint_token(
        ctx.accounts.faucet.to_account_info(),
        ctx.accounts.drip_mint.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        drip.amount,
        signer,
    )?;

    emit_cpi!(DripClaimed {
        faucet: ctx.accounts.faucet.key(),
        claimant: ctx.accounts.claimant.key(),
        index,
        mint: drip.mint,
        amount: drip.amount,
    });

    Ok(())
}

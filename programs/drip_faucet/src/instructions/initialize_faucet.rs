use anchor_lang::prelude::*;

use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new faucet
 *
 * This instruction initializes the faucet registry PDA for the calling
 * authority with an empty drip list. Drip mints are registered afterwards
 * with add_drip; each must name the faucet PDA as its mint authority so
 * the program can sign payout mints.
 *
 * Access Control: Any wallet may create its own faucet; the creator
 * becomes the authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFaucet<'info> {
    /// The faucet registry account (PDA)
    /// - Holds the drip list and signs distribution mints
    /// - Derived from: ["faucet", authority]
    #[account(
        init,
        payer = authority,
        space = Faucet::LEN,
        seeds = [FAUCET_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub faucet: Account<'info, Faucet>,

    /// The authority of the new faucet
    /// - Only this wallet can register drips and toggle their activity
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new faucet with an empty drip registry
 *
 * @param ctx - The account context containing faucet and authority accounts
 */
pub fn handle_initialize_faucet(ctx: Context<InitializeFaucet>) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;

    faucet.bump = ctx.bumps.faucet;
    faucet.authority = ctx.accounts.authority.key();
    // drips starts empty; indices are assigned sequentially by add_drip

    emit_cpi!(FaucetCreated {
        faucet: faucet.key(),
        authority: faucet.authority,
    });

    Ok(())
}

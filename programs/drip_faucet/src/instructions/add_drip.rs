use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for registering a new drip
 *
 * Appends a drip definition to the faucet registry. The new drip is
 * active immediately and its index is the registry length at call time.
 * Existing entries are never moved, so previously issued indices remain
 * valid.
 *
 * Access Control: Only the faucet authority can register drips
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddDrip<'info> {
    /// The faucet registry to append to
    #[account(
        mut,
        seeds = [FAUCET_SEED.as_bytes(), authority.key().as_ref()],
        bump = faucet.bump,
        has_one = authority @ FaucetError::OnlyAuthority
    )]
    pub faucet: Account<'info, Faucet>,

    /// The mint the new drip distributes
    /// - Deliberately unchecked at the account layer so the handler can
    ///   reject a default key before reading any account data
    /// CHECK: validated in handle_add_drip
    pub drip_mint: UncheckedAccount<'info>,

    /// The faucet authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Token program owning the drip mint (SPL Token or Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Registers a new drip for `amount` units of the given mint
 *
 * @param ctx - The account context containing faucet, mint and authority accounts
 * @param amount - Amount minted per successful claim, fixed for the drip's lifetime
 *
 * Validation Process:
 * 1. The mint key must not be the default (all-zero) pubkey
 * 2. The account must be a mint owned by the token program
 * 3. The mint authority must be the faucet PDA, otherwise claims could
 *    never be paid out
 */
pub fn handle_add_drip(ctx: Context<AddDrip>, amount: u64) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    let drip_mint = &ctx.accounts.drip_mint;

    // Cheap key check first; rejected without further detail
    require!(
        drip_mint.key() != Pubkey::default(),
        FaucetError::InvalidAddress
    );

    // The account must deserialize as a mint controlled by the faucet PDA
    require!(
        drip_mint.owner == &ctx.accounts.token_program.key(),
        FaucetError::InvalidToken
    );
    let mint_data = drip_mint.try_borrow_data()?;
    let mint = Mint::try_deserialize(&mut mint_data.as_ref())?;
    require!(
        mint.mint_authority == COption::Some(faucet.key()),
        FaucetError::InvalidToken
    );

    let index = faucet.add_drip(drip_mint.key(), amount)?;

    emit_cpi!(DripAdded {
        faucet: faucet.key(),
        index,
        mint: drip_mint.key(),
        amount,
    });

    Ok(())
}

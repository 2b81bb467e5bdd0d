use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for toggling a drip's active flag
 *
 * Access Control: Only the faucet authority can toggle drips
 *
 * Business Logic:
 * - Setting the current value again is a no-op success
 * - Claimed bits are never affected; a reactivated drip becomes
 *   claimable again only for wallets that have not claimed it before
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetDripActive<'info> {
    /// The faucet registry holding the drip to toggle
    #[account(
        mut,
        seeds = [FAUCET_SEED.as_bytes(), authority.key().as_ref()],
        bump = faucet.bump,
        has_one = authority @ FaucetError::OnlyAuthority
    )]
    pub faucet: Account<'info, Faucet>,

    /// The faucet authority
    pub authority: Signer<'info>,
}

/**
 * Sets the active flag of the drip at `index`
 *
 * @param ctx - The account context containing faucet and authority accounts
 * @param index - Index of the drip to toggle
 * @param active - New value of the active flag
 */
pub fn handle_set_drip_active(
    ctx: Context<SetDripActive>,
    index: u32,
    active: bool,
) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;

    faucet.set_drip_active(index, active)?;

    emit_cpi!(DripActiveSet {
        faucet: faucet.key(),
        index,
        active,
    });

    Ok(())
}

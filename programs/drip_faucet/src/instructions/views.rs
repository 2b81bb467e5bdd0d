use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/// Read-only context for registry queries. Mutates nothing; results come
/// back as return data so off-chain callers can read them via simulation.
#[derive(Accounts)]
pub struct QueryFaucet<'info> {
    pub faucet: Account<'info, Faucet>,
}

/// Read-only context for per-wallet status queries.
#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct QueryDripStatus<'info> {
    pub faucet: Account<'info, Faucet>,

    /// Claim state of the queried wallet
    /// - May not exist yet (wallet never claimed); read as all-unclaimed
    /// CHECK: seed-derived; deserialized manually when initialized
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), faucet.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub claim_state: UncheckedAccount<'info>,
}

/// Number of registered drips.
pub fn handle_drips_len(ctx: Context<QueryFaucet>) -> Result<u32> {
    Ok(ctx.accounts.faucet.drips_len())
}

/// The drip at `index`, or DripNotFound.
pub fn handle_get_drip(ctx: Context<QueryFaucet>, index: u32) -> Result<Drip> {
    Ok(ctx.accounts.faucet.drip(index)?.clone())
}

/// Snapshot of the full registry in index order.
pub fn handle_all_drips(ctx: Context<QueryFaucet>) -> Result<Vec<Drip>> {
    Ok(ctx.accounts.faucet.drips.clone())
}

/**
 * Computes the wallet's claim status code for every drip, ascending
 *
 * The result has one entry per registered drip at call time. A wallet
 * without a claim state account reads as having claimed nothing.
 */
pub fn handle_drip_status(ctx: Context<QueryDripStatus>, _wallet: Pubkey) -> Result<Vec<u8>> {
    let claim_state = &ctx.accounts.claim_state;

    let claims = if claim_state.data_len() != 0 {
        let data = claim_state.try_borrow_data()?;
        ClaimState::try_deserialize(&mut data.as_ref())?
    } else {
        ClaimState::default()
    };

    Ok(ctx.accounts.faucet.drip_statuses(&claims))
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::constants::FAUCET_SEED;
use crate::error::FaucetError;
use crate::state::{ClaimState, Drip, Faucet};
use crate::utils::mint_token;

/// One granted claim from a batch evaluation. `slot` is the position in
/// the request, used to locate the matching remaining-accounts pair.
#[derive(Debug)]
pub(crate) struct BatchItem {
    pub slot: usize,
    pub index: u32,
    pub drip: Drip,
}

/// Evaluates a batch of drip indices in request order, latching the
/// claimed bit for every claim that goes through.
///
/// Any out-of-range index fails the whole call with DripNotFound before a
/// single bit changes. Inactive and already-claimed entries are skipped
/// without failing; duplicates are evaluated independently, so the first
/// occurrence claims and later ones skip as already claimed.
pub(crate) fn evaluate_claim_batch(
    faucet: &Faucet,
    claim_state: &mut ClaimState,
    indices: &[u32],
) -> Result<Vec<BatchItem>> {
    // Fail-fast validation pass: no index may be out of range
    for &index in indices {
        faucet.drip(index)?;
    }

    let mut granted = Vec::new();
    for (slot, &index) in indices.iter().enumerate() {
        let drip = faucet.drip(index)?;
        if claim_state.claim_lenient(index, drip) {
            granted.push(BatchItem {
                slot,
                index,
                drip: drip.clone(),
            });
        }
    }

    Ok(granted)
}

/**
 * Shared batch-claim engine used by claim_many and claim_all
 *
 * Evaluates the indices against the claimant's claim state, then mints
 * the payout for every granted claim. Bits latch before any CPI runs; a
 * failed CPI aborts the transaction, rolling the whole batch back.
 *
 * Remaining accounts layout: one (drip_mint, recipient_token_account)
 * pair per requested index, in request order. Pairs belonging to skipped
 * indices are left untouched.
 */
pub(crate) fn process_claim_batch<'info>(
    faucet: &Account<'info, Faucet>,
    claim_state: &mut ClaimState,
    claimant: &Pubkey,
    token_program: AccountInfo<'info>,
    remaining_accounts: &'info [AccountInfo<'info>],
    indices: &[u32],
) -> Result<u32> {
    require!(
        remaining_accounts.len() == indices.len() * 2,
        FaucetError::RemainingAccountsMismatch
    );

    let granted = evaluate_claim_batch(faucet, claim_state, indices)?;

    // Prepare PDA signing seeds once for all payouts
    let authority_key = faucet.authority;
    let faucet_bump = faucet.bump;
    let seeds = &[
        FAUCET_SEED.as_bytes(),
        authority_key.as_ref(),
        &[faucet_bump],
    ];
    let signer = &[&seeds[..]];

    for item in &granted {
        let drip_mint = &remaining_accounts[item.slot * 2];
        let recipient = &remaining_accounts[item.slot * 2 + 1];

        require!(
            drip_mint.key() == item.drip.mint,
            FaucetError::DripMintMismatch
        );
        let recipient_account = InterfaceAccount::<TokenAccount>::try_from(recipient)?;
        require!(
            recipient_account.owner == *claimant && recipient_account.mint == item.drip.mint,
            FaucetError::InvalidRecipient
        );

        mint_token(
            faucet.to_account_info(),
            drip_mint.clone(),
            recipient.clone(),
            token_program.clone(),
            item.drip.amount,
            signer,
        )?;
    }

    Ok(granted.len() as u32)
}

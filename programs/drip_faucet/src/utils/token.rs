use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, MintTo};

/// Mints `amount` of a drip's token to the recipient, signed by the faucet
/// PDA (the configured mint authority). Supports both SPL Token and
/// Token 2022 mints.
pub fn mint_token<'a>(
    authority: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    to: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint,
        to,
        authority,
    };

    mint_to(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
    )
}

pub mod test_claims;
pub mod test_registry;

use anchor_lang::prelude::Pubkey;

use crate::state::Faucet;

/// Faucet fixture with `count` active drips of 100 units each, the shape
/// a typical deployment seeds (a dozen test tokens).
pub fn faucet_with_drips(count: usize) -> Faucet {
    let mut faucet = Faucet {
        bump: 254,
        authority: Pubkey::new_unique(),
        drips: Vec::new(),
    };
    for _ in 0..count {
        faucet.add_drip(Pubkey::new_unique(), 100).unwrap();
    }
    faucet
}

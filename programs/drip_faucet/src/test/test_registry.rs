use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_DRIPS;
use crate::error::FaucetError;
use crate::state::{ClaimState, Faucet};
use crate::test::faucet_with_drips;

#[test]
fn add_drip_assigns_sequential_indices() {
    let mut faucet = Faucet::default();
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    assert_eq!(faucet.add_drip(mint_a, 100).unwrap(), 0);
    assert_eq!(faucet.add_drip(mint_b, 250).unwrap(), 1);
    assert_eq!(faucet.drips_len(), 2);

    let drip = faucet.drip(1).unwrap();
    assert_eq!(drip.mint, mint_b);
    assert_eq!(drip.amount, 250);
    assert!(drip.active);
}

#[test]
fn add_drip_rejects_when_full() {
    let mut faucet = faucet_with_drips(MAX_DRIPS);

    assert_eq!(
        faucet.add_drip(Pubkey::new_unique(), 1).unwrap_err(),
        FaucetError::FaucetFull.into()
    );
    assert_eq!(faucet.drips_len(), MAX_DRIPS as u32);
}

#[test]
fn unknown_index_is_rejected() {
    let mut faucet = faucet_with_drips(12);

    assert_eq!(
        faucet.drip(12).unwrap_err(),
        FaucetError::DripNotFound.into()
    );
    assert_eq!(
        faucet.set_drip_active(12, false).unwrap_err(),
        FaucetError::DripNotFound.into()
    );
}

#[test]
fn set_drip_active_is_idempotent() {
    let mut faucet = faucet_with_drips(3);
    let claims = ClaimState::default();

    faucet.set_drip_active(1, false).unwrap();
    let statuses = faucet.drip_statuses(&claims);
    faucet.set_drip_active(1, false).unwrap();
    assert_eq!(faucet.drip_statuses(&claims), statuses);

    faucet.set_drip_active(1, true).unwrap();
    faucet.set_drip_active(1, true).unwrap();
    assert_eq!(faucet.drip_statuses(&claims), vec![0, 0, 0]);
}

#[test]
fn toggling_never_touches_claimed_bits() {
    let mut faucet = faucet_with_drips(4);
    let mut claims = ClaimState::default();
    claims.claim(2, faucet.drip(2).unwrap()).unwrap();

    faucet.set_drip_active(2, false).unwrap();
    assert!(claims.is_claimed(2));
    faucet.set_drip_active(2, true).unwrap();
    assert!(claims.is_claimed(2));
}

#[test]
fn statuses_follow_the_activity_and_claim_matrix() {
    // 12 active drips; the wallet claims drip 1, then drips 0 and 1 pause
    let mut faucet = faucet_with_drips(12);
    let mut claims = ClaimState::default();

    assert_eq!(faucet.drip_statuses(&claims), vec![0u8; 12]);

    claims.claim(1, faucet.drip(1).unwrap()).unwrap();
    let mut expected = vec![0u8; 12];
    expected[1] = 1;
    assert_eq!(faucet.drip_statuses(&claims), expected);

    faucet.set_drip_active(0, false).unwrap();
    expected[0] = 2;
    assert_eq!(faucet.drip_statuses(&claims), expected);

    faucet.set_drip_active(1, false).unwrap();
    expected[1] = 3;
    assert_eq!(faucet.drip_statuses(&claims), expected);

    // reactivation reverses the code without touching the claimed bit
    faucet.set_drip_active(1, true).unwrap();
    expected[1] = 1;
    assert_eq!(faucet.drip_statuses(&claims), expected);
}

#[test]
fn status_length_tracks_registry_growth() {
    let mut faucet = faucet_with_drips(12);
    let claims = ClaimState::default();
    assert_eq!(faucet.drip_statuses(&claims).len(), 12);

    faucet.add_drip(Pubkey::new_unique(), 500).unwrap();
    assert_eq!(faucet.drip_statuses(&claims).len(), 13);
}

use anchor_lang::prelude::Pubkey;

use crate::error::FaucetError;
use crate::instructions::claim_common::evaluate_claim_batch;
use crate::state::ClaimState;
use crate::test::faucet_with_drips;

#[test]
fn claim_latches_once() {
    let faucet = faucet_with_drips(12);
    let mut claims = ClaimState::default();

    claims.claim(0, faucet.drip(0).unwrap()).unwrap();
    assert!(claims.is_claimed(0));

    assert_eq!(
        claims.claim(0, faucet.drip(0).unwrap()).unwrap_err(),
        FaucetError::AlreadyClaimed.into()
    );
}

#[test]
fn claim_requires_an_active_drip() {
    let mut faucet = faucet_with_drips(2);
    faucet.set_drip_active(0, false).unwrap();
    let mut claims = ClaimState::default();

    assert_eq!(
        claims.claim(0, faucet.drip(0).unwrap()).unwrap_err(),
        FaucetError::DripInactive.into()
    );
    assert!(!claims.is_claimed(0));

    // reactivation makes the claim go through
    faucet.set_drip_active(0, true).unwrap();
    claims.claim(0, faucet.drip(0).unwrap()).unwrap();
    assert!(claims.is_claimed(0));
}

#[test]
fn lenient_claim_skips_instead_of_failing() {
    let mut faucet = faucet_with_drips(3);
    faucet.set_drip_active(1, false).unwrap();
    let mut claims = ClaimState::default();

    assert!(claims.claim_lenient(0, faucet.drip(0).unwrap()));
    assert!(!claims.claim_lenient(0, faucet.drip(0).unwrap())); // already claimed
    assert!(!claims.claim_lenient(1, faucet.drip(1).unwrap())); // inactive
    assert!(claims.claim_lenient(2, faucet.drip(2).unwrap()));
}

#[test]
fn batch_skips_claimed_entries() {
    let faucet = faucet_with_drips(12);
    let mut claims = ClaimState::default();
    claims.claim(5, faucet.drip(5).unwrap()).unwrap();

    let granted = evaluate_claim_batch(&faucet, &mut claims, &[2, 7, 5]).unwrap();
    assert_eq!(granted.len(), 2);
    assert_eq!(granted[0].index, 2);
    assert_eq!(granted[0].slot, 0);
    assert_eq!(granted[1].index, 7);
    assert_eq!(granted[1].slot, 1);
}

#[test]
fn batch_fails_whole_call_on_unknown_index() {
    let faucet = faucet_with_drips(12);
    let mut claims = ClaimState::default();

    let err = evaluate_claim_batch(&faucet, &mut claims, &[0, 2, 5, 20]).unwrap_err();
    assert_eq!(err, FaucetError::DripNotFound.into());
    // nothing before the bad index was claimed either
    assert_eq!(claims.claimed, 0);
}

#[test]
fn duplicate_indices_claim_only_once() {
    let faucet = faucet_with_drips(4);
    let mut claims = ClaimState::default();

    let granted = evaluate_claim_batch(&faucet, &mut claims, &[3, 3, 3]).unwrap();
    assert_eq!(granted.len(), 1);
    // the first occurrence wins; later duplicates skip as already claimed
    assert_eq!(granted[0].slot, 0);
    assert_eq!(granted[0].index, 3);
}

#[test]
fn claim_everything_skips_paused_drips() {
    let mut faucet = faucet_with_drips(12);
    faucet.set_drip_active(4, false).unwrap();
    faucet.set_drip_active(9, false).unwrap();
    let mut claims = ClaimState::default();

    let indices: Vec<u32> = (0..faucet.drips_len()).collect();
    let granted = evaluate_claim_batch(&faucet, &mut claims, &indices).unwrap();
    assert_eq!(indices.len(), 12);
    assert_eq!(granted.len(), 10);

    // after unpausing, a second sweep finds only the pair that was skipped
    faucet.set_drip_active(4, true).unwrap();
    faucet.set_drip_active(9, true).unwrap();
    let granted = evaluate_claim_batch(&faucet, &mut claims, &indices).unwrap();
    assert_eq!(granted.len(), 2);
    assert_eq!(granted[0].index, 4);
    assert_eq!(granted[1].index, 9);
}

#[test]
fn fresh_wallets_claim_a_grown_registry_in_full() {
    // 12 seeded drips plus one registered later
    let mut faucet = faucet_with_drips(12);
    faucet.add_drip(Pubkey::new_unique(), 100).unwrap();

    let mut first = ClaimState::default();
    let granted = evaluate_claim_batch(&faucet, &mut first, &[5, 10, 12]).unwrap();
    assert_eq!(granted.len(), 3);

    let mut second = ClaimState::default();
    let all: Vec<u32> = (0..faucet.drips_len()).collect();
    let granted = evaluate_claim_batch(&faucet, &mut second, &all).unwrap();
    assert_eq!(granted.len(), 13);
}

#[test]
fn granted_claims_carry_the_drip_payout() {
    let faucet = faucet_with_drips(3);
    let mut claims = ClaimState::default();

    let granted = evaluate_claim_batch(&faucet, &mut claims, &[1]).unwrap();
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].drip.mint, faucet.drip(1).unwrap().mint);
    assert_eq!(granted[0].drip.amount, 100);
}

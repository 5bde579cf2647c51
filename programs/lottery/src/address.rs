//! Program-derived addresses for lottery and registry accounts.
//!
//! Clients compute the same addresses off-chain from the same seeds, so the
//! encoding here is part of the program's public interface: the lottery id is
//! always the fixed-width 8-byte little-endian form.

use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, REGISTRY_SEED},
    error::LotteryError,
};

/// Derives a program-owned address from a seed tag, an owner and an optional id.
pub fn find_address(tag: &[u8], owner: &Pubkey, id: Option<u64>) -> (Pubkey, u8) {
    match id {
        Some(id) => Pubkey::find_program_address(
            &[tag, owner.as_ref(), id.to_le_bytes().as_ref()],
            &crate::ID,
        ),
        None => Pubkey::find_program_address(&[tag, owner.as_ref()], &crate::ID),
    }
}

pub fn find_lottery_address(authority: &Pubkey, id: u64) -> (Pubkey, u8) {
    find_address(LOTTERY_SEED, authority, Some(id))
}

pub fn find_registry_address(authority: &Pubkey) -> (Pubkey, u8) {
    find_address(REGISTRY_SEED, authority, None)
}

/// Checks `key` against the lottery address rebuilt from its stored bump.
pub fn verify_lottery_address(key: &Pubkey, authority: &Pubkey, id: u64, bump: u8) -> Result<()> {
    let expected = Pubkey::create_program_address(
        &[
            LOTTERY_SEED,
            authority.as_ref(),
            id.to_le_bytes().as_ref(),
            &[bump],
        ],
        &crate::ID,
    )
    .map_err(|_| error!(LotteryError::AddressMismatch))?;
    require_keys_eq!(*key, expected, LotteryError::AddressMismatch);
    Ok(())
}

/// Checks `key` against the registry address rebuilt from its stored bump.
pub fn verify_registry_address(key: &Pubkey, authority: &Pubkey, bump: u8) -> Result<()> {
    let expected =
        Pubkey::create_program_address(&[REGISTRY_SEED, authority.as_ref(), &[bump]], &crate::ID)
            .map_err(|_| error!(LotteryError::AddressMismatch))?;
    require_keys_eq!(*key, expected, LotteryError::AddressMismatch);
    Ok(())
}

use anchor_lang::prelude::*;

use crate::{constants::MAX_REGISTRY_IDS, error::LotteryError};

// 8 discriminator + 32 authority + 1 bump + (4 + 8 * MAX_REGISTRY_IDS) known_ids + (4 + 8 * MAX_REGISTRY_IDS) active_ids
pub const REGISTRY_ACCOUNT_SIZE: usize =
    8 + 32 + 1 + (4 + 8 * MAX_REGISTRY_IDS) + (4 + 8 * MAX_REGISTRY_IDS);

/// Lottery ids created by one authority. `active_ids` drops an id once its
/// prize has been paid; `known_ids` never shrinks, so ids are not reused.
#[account]
pub struct RegistryAccount {
    pub authority: Pubkey,
    pub bump: u8,
    pub known_ids: Vec<u64>,
    pub active_ids: Vec<u64>,
}

impl RegistryAccount {
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            bump,
            known_ids: Vec::new(),
            active_ids: Vec::new(),
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.known_ids.contains(&id)
    }

    pub fn register(&mut self, id: u64) -> Result<()> {
        require!(!self.contains(id), LotteryError::DuplicateLottery);
        require!(
            self.known_ids.len() < MAX_REGISTRY_IDS,
            LotteryError::RegistryFull
        );

        self.known_ids.push(id);
        self.active_ids.push(id);
        Ok(())
    }

    pub fn deactivate(&mut self, id: u64) {
        self.active_ids.retain(|active| *active != id);
    }
}

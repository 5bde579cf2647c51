use std::cell::Ref;

use anchor_lang::prelude::*;
use arrayref::array_ref;
use switchboard_on_demand::RandomnessAccountData;

use crate::error::LotteryError;

/// Program owning the oracle randomness accounts on the target cluster.
#[cfg(feature = "devnet")]
pub const RANDOMNESS_PROGRAM_ID: Pubkey = switchboard_on_demand::ON_DEMAND_DEVNET_PID;
#[cfg(not(feature = "devnet"))]
pub const RANDOMNESS_PROGRAM_ID: Pubkey = switchboard_on_demand::ON_DEMAND_MAINNET_PID;

/// Seed and reveal slots of an oracle randomness account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomnessSlots {
    pub seed_slot: u64,
    pub reveal_slot: u64,
}

impl RandomnessSlots {
    /// A commitment is only accepted while its seed is from the previous slot.
    pub fn assert_fresh_commit(&self, current_slot: u64) -> Result<()> {
        require!(
            current_slot.checked_sub(1) == Some(self.seed_slot),
            LotteryError::RandomnessAlreadyRevealed
        );
        Ok(())
    }

    /// Whether the oracle has revealed a value for the current seed.
    pub fn is_revealed(&self) -> bool {
        self.reveal_slot > self.seed_slot
    }
}

fn parse<'a>(account: &'a AccountInfo) -> Result<Ref<'a, RandomnessAccountData>> {
    let data = account.try_borrow_data()?;
    RandomnessAccountData::parse(data).map_err(|_| error!(LotteryError::InvalidRandomnessAccount))
}

/// Reads the slots of an oracle randomness account. Fails unless the data
/// carries the oracle's randomness account discriminator.
pub fn read_slots(account: &AccountInfo) -> Result<RandomnessSlots> {
    let data = parse(account)?;
    Ok(RandomnessSlots {
        seed_slot: data.seed_slot,
        reveal_slot: data.reveal_slot,
    })
}

/// Reads the value revealed in `current_slot` as a u64, together with the
/// account's slots. The value is only readable in the slot it was revealed in.
pub fn read_revealed_u64(
    account: &AccountInfo,
    current_slot: u64,
) -> Result<(RandomnessSlots, u64)> {
    let data = parse(account)?;
    let value = data
        .get_value(&Clock {
            slot: current_slot,
            ..Default::default()
        })
        .map_err(|_| error!(LotteryError::RandomnessNotResolved))?;

    let slots = RandomnessSlots {
        seed_slot: data.seed_slot,
        reveal_slot: data.reveal_slot,
    };
    Ok((slots, value_to_u64(&value)))
}

/// First 8 bytes of a revealed value, little-endian.
pub fn value_to_u64(value: &[u8; 32]) -> u64 {
    u64::from_le_bytes(*array_ref![value, 0, 8])
}

use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_DURATION, MAX_PARTICIPANTS},
    error::LotteryError,
    randomness::RandomnessSlots,
};

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// 32 (treasury) +
// 8 (id) +
// 8 (entry_price) +
// 8 (goal_amount) +
// 8 (total_collected) +
// 8 (start_time) +
// 8 (end_time) +
// 1 (state) +
// 33 (winner: Option<Pubkey>) +
// 33 (randomness_account: Option<Pubkey>) +
// 8 (randomness_seed_slot) +
// 1 (bump) +
// 4 + 32 * MAX_PARTICIPANTS (participants: Vec<Pubkey>)
pub const LOTTERY_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 8 + 1 + 33 + 33 + 8 + 1 + 4 + 32 * MAX_PARTICIPANTS;

/// Persisted lifecycle of a lottery. Everything before a winner exists is
/// `Active`; whether it is not yet started, open or closed follows from the
/// clock, see [`LotteryAccount::status`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LotteryState {
    Active,
    WinnerSelected,
    Paid,
}

/// Full lifecycle as seen at a given moment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LotteryStatus {
    Created,
    Open,
    Closed,
    WinnerSelected,
    Paid,
}

/// Lottery configuration as supplied to `initialize`, before and after
/// defaults are applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LotteryParams {
    pub entry_price: u64,
    pub goal_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
}

impl LotteryParams {
    /// Applies the time defaults and validates the result.
    ///
    /// * `start_time == 0` starts the lottery at `now`
    /// * `end_time == 0` ends it `DEFAULT_DURATION` after the start
    pub fn resolve(self, now: i64) -> Result<Self> {
        require!(
            self.entry_price > 0 && self.goal_amount > 0,
            LotteryError::InvalidParameters
        );

        let start_time = if self.start_time == 0 {
            now
        } else {
            self.start_time
        };
        let end_time = if self.end_time == 0 {
            start_time
                .checked_add(DEFAULT_DURATION)
                .ok_or(LotteryError::Overflow)?
        } else {
            self.end_time
        };

        require!(start_time >= 0, LotteryError::InvalidTimeWindow);
        require!(end_time > start_time, LotteryError::InvalidTimeWindow);

        Ok(Self {
            start_time,
            end_time,
            ..self
        })
    }
}

#[account]
pub struct LotteryAccount {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub id: u64,
    pub entry_price: u64,
    pub goal_amount: u64,
    pub total_collected: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub state: LotteryState,
    pub winner: Option<Pubkey>,
    pub randomness_account: Option<Pubkey>,
    /// Seed slot of the committed randomness account. A re-seeded account no
    /// longer carries the committed value.
    pub randomness_seed_slot: u64,
    pub bump: u8,
    /// Entries in purchase order. The position of an entry is its index for
    /// winner selection, so this is append-only.
    pub participants: Vec<Pubkey>,
}

impl LotteryAccount {
    pub fn new(
        authority: Pubkey,
        treasury: Pubkey,
        id: u64,
        params: LotteryParams,
        bump: u8,
    ) -> Self {
        Self {
            authority,
            treasury,
            id,
            entry_price: params.entry_price,
            goal_amount: params.goal_amount,
            total_collected: 0,
            start_time: params.start_time,
            end_time: params.end_time,
            state: LotteryState::Active,
            winner: None,
            randomness_account: None,
            randomness_seed_slot: 0,
            bump,
            participants: Vec::new(),
        }
    }

    pub fn status(&self, now: i64) -> LotteryStatus {
        match self.state {
            LotteryState::Paid => LotteryStatus::Paid,
            LotteryState::WinnerSelected => LotteryStatus::WinnerSelected,
            LotteryState::Active if now < self.start_time => LotteryStatus::Created,
            LotteryState::Active if now < self.end_time => LotteryStatus::Open,
            LotteryState::Active => LotteryStatus::Closed,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.state != LotteryState::Active || self.winner.is_some()
    }

    pub fn goal_met(&self) -> bool {
        self.total_collected >= self.goal_amount
    }

    /// A winner may be drawn once sales have closed, or earlier when the goal
    /// has been reached.
    pub fn can_pick_winner(&self, now: i64) -> bool {
        now >= self.end_time || self.goal_met()
    }

    pub fn check_entry(&self, now: i64) -> Result<()> {
        require!(!self.is_finalized(), LotteryError::LotteryAlreadyFinalized);
        require!(
            self.status(now) == LotteryStatus::Open,
            LotteryError::LotteryNotOpen
        );
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            LotteryError::LotteryFull
        );
        Ok(())
    }

    /// Appends one entry for `buyer` and returns its entry index.
    /// The caller moves `entry_price` to the treasury.
    pub fn record_entry(&mut self, buyer: Pubkey, now: i64) -> Result<u64> {
        self.check_entry(now)?;

        let total_collected = self
            .total_collected
            .checked_add(self.entry_price)
            .ok_or(LotteryError::Overflow)?;

        let entry_index = self.participants.len() as u64;
        self.participants.push(buyer);
        self.total_collected = total_collected;

        Ok(entry_index)
    }

    /// Binds the randomness account seeded at `seed_slot`.
    ///
    /// An existing commitment can only be replaced while its value is still
    /// unknown; `previous` holds the current slots of the committed account.
    pub fn commit_randomness(
        &mut self,
        randomness_account: Pubkey,
        seed_slot: u64,
        previous: Option<&RandomnessSlots>,
    ) -> Result<()> {
        require!(!self.is_finalized(), LotteryError::AlreadyFinalized);

        if self.randomness_account.is_some() {
            let previous = previous.ok_or(LotteryError::RandomnessAlreadyCommitted)?;
            require!(
                previous.seed_slot == self.randomness_seed_slot && !previous.is_revealed(),
                LotteryError::RandomnessAlreadyRevealed
            );
        }

        self.randomness_account = Some(randomness_account);
        self.randomness_seed_slot = seed_slot;
        Ok(())
    }

    /// Checks that `randomness_account` is still the committed account at the
    /// committed seed.
    pub fn check_randomness(&self, randomness_account: &Pubkey, seed_slot: u64) -> Result<()> {
        let committed = self
            .randomness_account
            .ok_or(LotteryError::RandomnessNotCommitted)?;
        require_keys_eq!(
            *randomness_account,
            committed,
            LotteryError::InvalidRandomnessAccount
        );
        require!(
            seed_slot == self.randomness_seed_slot,
            LotteryError::InvalidRandomnessAccount
        );
        Ok(())
    }

    pub fn check_pick(&self, now: i64) -> Result<()> {
        require!(!self.is_finalized(), LotteryError::AlreadyFinalized);
        require!(self.can_pick_winner(now), LotteryError::LotteryStillOpen);
        require!(!self.participants.is_empty(), LotteryError::NoParticipants);
        Ok(())
    }

    /// Picks the winner at `random_value mod participants.len()` and freezes
    /// the lottery.
    pub fn select_winner(&mut self, random_value: u64, now: i64) -> Result<Pubkey> {
        self.check_pick(now)?;

        let index = winner_index(random_value, self.participants.len());
        let winner = self.participants[index];

        self.winner = Some(winner);
        self.state = LotteryState::WinnerSelected;

        Ok(winner)
    }

    /// The amount owed to the winner, while it is still owed.
    pub fn payout_amount(&self) -> Result<u64> {
        match self.state {
            LotteryState::Active => err!(LotteryError::WinnerNotSelected),
            LotteryState::Paid => err!(LotteryError::AlreadyPaid),
            LotteryState::WinnerSelected => Ok(self.total_collected),
        }
    }

    pub fn mark_paid(&mut self) -> Result<u64> {
        let amount = self.payout_amount()?;
        self.state = LotteryState::Paid;
        Ok(amount)
    }
}

/// Range-reduces an untrusted random value to an entry index.
/// `count` must be non-zero.
pub fn winner_index(random_value: u64, count: usize) -> usize {
    (random_value % count as u64) as usize
}

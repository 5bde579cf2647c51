use anchor_lang::prelude::*;

use crate::{
    address::verify_lottery_address,
    error::LotteryError,
    randomness::{read_revealed_u64, RANDOMNESS_PROGRAM_ID},
    state::LotteryAccount,
};

/// Event emitted when a winner is picked
#[event]
pub struct WinnerPicked {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// The random value consumed by the draw
    pub random_value: u64,
    /// Number of entries the winner was drawn from
    pub participant_count: u64,
    /// Amount owed to the winner in lamports
    pub pot: u64,
}

/// Picks the lottery winner from the committed randomness account.
///
/// Execution requirements:
/// 1. The signer is the lottery authority
/// 2. No winner has been picked yet
/// 3. Entries have closed, or the goal amount has been reached
/// 4. At least one entry exists
/// 5. The randomness account is the committed one, still at the committed seed
///    and revealed in this slot
///
/// The winner is `participants[random_value % participants.len()]`, where
/// `random_value` is the first 8 bytes of the revealed value (little-endian).
/// Entry order is purchase order, so the outcome depends only on the random
/// value and the order in which entries were bought.
///
/// # Errors
/// - `Unauthorized` if the signer is not the lottery authority
/// - `AlreadyFinalized` if a winner already exists
/// - `LotteryStillOpen` if entries are still open and the goal is not met
/// - `NoParticipants` if nobody entered
/// - `RandomnessNotCommitted` if no randomness account was committed
/// - `InvalidRandomnessAccount` if the account is not the committed one, is not
///   owned by the oracle program or has been re-seeded since the commit
/// - `RandomnessNotResolved` if the value is not revealed in this slot
pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery_account;

    verify_lottery_address(&lottery.key(), &lottery.authority, lottery.id, lottery.bump)?;
    lottery.check_pick(clock.unix_timestamp)?;

    let randomness_key = ctx.accounts.randomness_account_data.key();
    let committed = lottery
        .randomness_account
        .ok_or(LotteryError::RandomnessNotCommitted)?;
    require_keys_eq!(
        randomness_key,
        committed,
        LotteryError::InvalidRandomnessAccount
    );

    let (slots, random_value) =
        read_revealed_u64(&ctx.accounts.randomness_account_data, clock.slot)?;
    lottery.check_randomness(&randomness_key, slots.seed_slot)?;

    let winner = lottery.select_winner(random_value, clock.unix_timestamp)?;

    msg!(
        "Winner of lottery {} picked by {}: {}",
        lottery.id,
        ctx.accounts.authority.key(),
        winner
    );
    msg!(
        "Lottery {} pot awaiting payout: {} lamports",
        lottery.id,
        lottery.total_collected
    );

    emit!(WinnerPicked {
        lottery: lottery.key(),
        winner,
        random_value,
        participant_count: lottery.participants.len() as u64,
        pot: lottery.total_collected,
    });

    Ok(())
}

/// Accounts required for the pick_winner instruction
#[derive(Accounts)]
pub struct PickWinner<'info> {
    #[account(
        mut,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub lottery_account: Account<'info, LotteryAccount>,

    /// CHECK: Owned by the oracle program; checked against the committed key
    /// and seed in the handler.
    #[account(owner = RANDOMNESS_PROGRAM_ID @ LotteryError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

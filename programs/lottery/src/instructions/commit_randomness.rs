use anchor_lang::prelude::*;

use crate::{
    address::verify_lottery_address,
    error::LotteryError,
    randomness::{read_slots, RANDOMNESS_PROGRAM_ID},
    state::LotteryAccount,
};

/// Event emitted when a randomness account is bound to a lottery
#[event]
pub struct RandomnessCommitted {
    pub lottery: Pubkey,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
}

/// Binds an oracle randomness account to the lottery ahead of the draw.
///
/// The account must belong to the oracle program and have been seeded in the
/// previous slot, so its value cannot be known yet.
///
/// A commitment can be replaced only while its value is still hidden. The
/// replacement has to pass the committed account as
/// `previous_randomness_account`. Once that account is revealed or re-seeded,
/// the lottery stays bound to it.
pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery_account;

    verify_lottery_address(&lottery.key(), &lottery.authority, lottery.id, lottery.bump)?;

    let randomness_key = ctx.accounts.randomness_account_data.key();
    let randomness = read_slots(&ctx.accounts.randomness_account_data)?;
    randomness.assert_fresh_commit(clock.slot)?;

    let previous = match (
        lottery.randomness_account,
        &ctx.accounts.previous_randomness_account,
    ) {
        (Some(committed), Some(previous)) => {
            require_keys_eq!(
                previous.key(),
                committed,
                LotteryError::InvalidRandomnessAccount
            );
            Some(read_slots(previous)?)
        }
        _ => None,
    };

    lottery.commit_randomness(randomness_key, randomness.seed_slot, previous.as_ref())?;

    msg!(
        "Lottery {} committed to randomness account {} (seed slot {})",
        lottery.id,
        randomness_key,
        randomness.seed_slot
    );

    emit!(RandomnessCommitted {
        lottery: lottery.key(),
        randomness_account: randomness_key,
        seed_slot: randomness.seed_slot,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    #[account(
        mut,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub lottery_account: Account<'info, LotteryAccount>,

    /// CHECK: Owned by the oracle program; the data is parsed and its
    /// discriminator checked in the handler.
    #[account(owner = RANDOMNESS_PROGRAM_ID @ LotteryError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    /// CHECK: The currently committed randomness account, required only when
    /// replacing a commitment. Checked against the stored key in the handler.
    #[account(owner = RANDOMNESS_PROGRAM_ID @ LotteryError::InvalidRandomnessAccount)]
    pub previous_randomness_account: Option<UncheckedAccount<'info>>,

    pub authority: Signer<'info>,
}

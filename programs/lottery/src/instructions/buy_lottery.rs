use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{address::verify_lottery_address, error::LotteryError, state::LotteryAccount};

/// Event emitted when an entry is purchased
#[event]
pub struct LotteryEntered {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Position of this entry in purchase order
    pub entry_index: u64,
    /// Amount paid in lamports
    pub amount: u64,
    /// Lottery total after this entry
    pub total_collected: u64,
}

/// Instruction to buy one entry into a lottery
///
/// Each call is an independent entry: a buyer may enter several times and
/// their chance of winning grows with the number of entries they hold.
///
/// # Security Considerations
/// 1. The lottery must live at its derived address
/// 2. Entries are only accepted inside [start_time, end_time) and before a winner exists
/// 3. The buyer must hold at least the entry price
/// 4. Payment goes to the treasury recorded on the lottery
///
/// # Errors
/// - `LotteryAlreadyFinalized` if a winner has been picked
/// - `LotteryNotOpen` before start or at/after end
/// - `LotteryFull` if the entry cap has been reached
/// - `InsufficientFunds` if the buyer cannot cover the entry price
/// - `InvalidTreasury` if the treasury account does not match the lottery
pub fn buy_lottery(ctx: Context<BuyLottery>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery_account;
    let buyer = &ctx.accounts.buyer;

    verify_lottery_address(&lottery.key(), &lottery.authority, lottery.id, lottery.bump)?;
    lottery.check_entry(now)?;

    let entry_price = lottery.entry_price;
    require!(
        buyer.lamports() >= entry_price,
        LotteryError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        entry_price,
    )?;

    let entry_index = lottery.record_entry(buyer.key(), now)?;

    msg!(
        "Buyer {} entered lottery {} (entry #{}). Total collected: {}",
        buyer.key(),
        lottery.id,
        entry_index,
        lottery.total_collected
    );

    if lottery.goal_met() {
        msg!("Lottery {} goal reached", lottery.id);
    }

    emit!(LotteryEntered {
        lottery: lottery.key(),
        buyer: buyer.key(),
        entry_index,
        amount: entry_price,
        total_collected: lottery.total_collected,
    });

    Ok(())
}

/// Accounts required for the buy_lottery instruction
#[derive(Accounts)]
pub struct BuyLottery<'info> {
    #[account(mut)]
    pub lottery_account: Account<'info, LotteryAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Receives the entry payment
    #[account(
        mut,
        address = lottery_account.treasury @ LotteryError::InvalidTreasury,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

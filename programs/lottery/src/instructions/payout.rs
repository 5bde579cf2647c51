use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    address::{verify_lottery_address, verify_registry_address},
    error::LotteryError,
    state::{LotteryAccount, RegistryAccount},
};

/// Event emitted when the pot is paid to the winner
#[event]
pub struct PrizePaid {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
}

/// Instruction to transfer the pot from the treasury to the winner
///
/// Anyone may submit it, but the treasury is an ordinary wallet and has to
/// sign for the lamports leaving it. A treasury that refuses to sign blocks
/// the payout; the program cannot move its lamports on its own. Succeeds
/// exactly once per lottery.
///
/// # Security Considerations
/// 1. The lottery and registry must live at their derived addresses
/// 2. The treasury must be the one recorded on the lottery
/// 3. The destination must be the recorded winner
/// 4. The lottery must be in WinnerSelected state
///
/// # Errors
/// - `WinnerNotSelected` if no winner has been picked
/// - `AlreadyPaid` if the pot was already paid
/// - `InvalidWinner` if the destination is not the winner
/// - `InsufficientFunds` if the treasury cannot cover the pot
pub fn payout(ctx: Context<Payout>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery_account;
    let registry = &mut ctx.accounts.registry;

    verify_lottery_address(&lottery.key(), &lottery.authority, lottery.id, lottery.bump)?;
    verify_registry_address(&registry.key(), &lottery.authority, registry.bump)?;

    let amount = lottery.payout_amount()?;
    require!(
        lottery.winner == Some(ctx.accounts.winner.key()),
        LotteryError::InvalidWinner
    );
    require!(
        ctx.accounts.treasury.lamports() >= amount,
        LotteryError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.winner.to_account_info(),
            },
        ),
        amount,
    )?;

    lottery.mark_paid()?;
    registry.deactivate(lottery.id);

    msg!(
        "Lottery {} paid {} lamports to {}",
        lottery.id,
        amount,
        ctx.accounts.winner.key()
    );

    emit!(PrizePaid {
        lottery: lottery.key(),
        winner: ctx.accounts.winner.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Payout<'info> {
    #[account(
        mut,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery_account: Account<'info, LotteryAccount>,

    #[account(
        mut,
        constraint = registry.authority == lottery_account.authority @ LotteryError::AddressMismatch,
    )]
    pub registry: Account<'info, RegistryAccount>,

    #[account(mut)]
    pub treasury: Signer<'info>,

    #[account(mut)]
    pub winner: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

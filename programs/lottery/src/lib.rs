use anchor_lang::prelude::*;
pub use instructions::*;

pub mod address;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

declare_id!("5SfZAZiAB4f4SbXyu6fF3JyvgBEfGzTaTxifFDAjyRV1");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        id: u64,
        entry_price: u64,
        goal_amount: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::initialize::initialize(
            ctx,
            id,
            entry_price,
            goal_amount,
            start_time,
            end_time,
        )
    }

    pub fn get_active_lotteries(ctx: Context<GetActiveLotteries>) -> Result<Vec<u64>> {
        instructions::get_active_lotteries::get_active_lotteries(ctx)
    }

    pub fn buy_lottery(ctx: Context<BuyLottery>) -> Result<()> {
        instructions::buy_lottery::buy_lottery(ctx)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        instructions::commit_randomness::commit_randomness(ctx)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        instructions::pick_winner::pick_winner(ctx)
    }

    pub fn payout(ctx: Context<Payout>) -> Result<()> {
        instructions::payout::payout(ctx)
    }
}

use anchor_lang::prelude::*;

use crate::{
    address::{find_lottery_address, find_registry_address},
    constants::{LOTTERY_SEED, REGISTRY_SEED},
    error::LotteryError,
    state::{
        LotteryAccount, LotteryParams, RegistryAccount, LOTTERY_ACCOUNT_SIZE,
        REGISTRY_ACCOUNT_SIZE,
    },
    utils::{create_program_account, read_account, write_account},
};

/// Event emitted when a lottery is created
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the created lottery
    pub lottery: Pubkey,
    /// The authority administering the lottery
    pub authority: Pubkey,
    /// Account receiving entry payments
    pub treasury: Pubkey,
    /// Lottery id, unique per authority
    pub id: u64,
    /// Price per entry in lamports
    pub entry_price: u64,
    /// Target amount in lamports
    pub goal_amount: u64,
    /// When entries open
    pub start_time: i64,
    /// When entries close
    pub end_time: i64,
}

/// Instruction to create a new lottery and record its id in the authority's registry
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `id` - Lottery id, unique per authority
/// * `entry_price` - Price per entry in lamports (must be > 0)
/// * `goal_amount` - Target amount in lamports (must be > 0)
/// * `start_time` - Unix timestamp when entries open, `0` for now
/// * `end_time` - Unix timestamp when entries close, `0` for 24 hours after start
///
/// # Account Validations
/// * Lottery - PDA with seeds ["lottery", authority, id (u64 LE)], created here
/// * Registry - PDA with seeds ["registry", authority], created on first use
/// * Authority - Signer paying for both accounts
///
/// # Errors
/// - `AddressMismatch` if the lottery or registry is not at its derived address
/// - `DuplicateLottery` if the id is already in use for this authority
/// - `InvalidParameters` if entry price or goal is zero
/// - `InvalidTimeWindow` if the lottery would not end after it starts
/// - `RegistryFull` if the authority has no room left for another id
pub fn initialize(
    ctx: Context<Initialize>,
    id: u64,
    entry_price: u64,
    goal_amount: u64,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let treasury = ctx.accounts.treasury.key();

    let lottery_info = ctx.accounts.lottery_account.to_account_info();
    let registry_info = ctx.accounts.registry.to_account_info();
    let payer = ctx.accounts.authority.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    let (lottery_address, lottery_bump) = find_lottery_address(&authority, id);
    require_keys_eq!(
        lottery_info.key(),
        lottery_address,
        LotteryError::AddressMismatch
    );
    let (registry_address, registry_bump) = find_registry_address(&authority);
    require_keys_eq!(
        registry_info.key(),
        registry_address,
        LotteryError::AddressMismatch
    );

    require!(
        *lottery_info.owner != crate::ID,
        LotteryError::DuplicateLottery
    );

    let params = LotteryParams {
        entry_price,
        goal_amount,
        start_time,
        end_time,
    }
    .resolve(now)?;

    let mut registry = if *registry_info.owner == crate::ID {
        read_account::<RegistryAccount>(&registry_info)?
    } else {
        create_program_account(
            &payer,
            &registry_info,
            &system_program,
            REGISTRY_ACCOUNT_SIZE,
            &[REGISTRY_SEED, authority.as_ref(), &[registry_bump]],
        )?;
        RegistryAccount::new(authority, registry_bump)
    };
    registry.register(id)?;
    write_account(&registry_info, &registry)?;

    create_program_account(
        &payer,
        &lottery_info,
        &system_program,
        LOTTERY_ACCOUNT_SIZE,
        &[
            LOTTERY_SEED,
            authority.as_ref(),
            id.to_le_bytes().as_ref(),
            &[lottery_bump],
        ],
    )?;
    let lottery = LotteryAccount::new(authority, treasury, id, params, lottery_bump);
    write_account(&lottery_info, &lottery)?;

    msg!(
        "Lottery {} created by {}: entry price {} lamports, goal {} lamports, open {}..{}",
        id,
        authority,
        params.entry_price,
        params.goal_amount,
        params.start_time,
        params.end_time
    );

    emit!(LotteryInitialized {
        lottery: lottery_address,
        authority,
        treasury,
        id,
        entry_price: params.entry_price,
        goal_amount: params.goal_amount,
        start_time: params.start_time,
        end_time: params.end_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: Checked against the address derived from the authority and id,
    /// then created in the handler.
    #[account(mut)]
    pub lottery_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// Wallet receiving entry payments. It signs the payout later on.
    pub treasury: SystemAccount<'info>,

    /// CHECK: Checked against the authority's registry address in the
    /// handler, created on first use.
    #[account(mut)]
    pub registry: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

//! Runs the program's instructions against a local bank.

use anchor_lang::{
    prelude::*, system_program, AccountDeserialize, AccountSerialize, InstructionData,
    ToAccountMetas,
};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::Account as SolanaAccount,
    instruction::{Instruction, InstructionError},
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

pub use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

pub use crate::address::{find_lottery_address, find_registry_address};
use crate::state::{
    LotteryAccount, LotteryParams, RegistryAccount, LOTTERY_ACCOUNT_SIZE, REGISTRY_ACCOUNT_SIZE,
};

// The generated entrypoint ties the account slice to the account lifetime,
// which the builtin processor signature does not.
fn process_instruction<'a, 'b, 'c, 'd>(
    program_id: &'a Pubkey,
    accounts: &'b [AccountInfo<'c>],
    data: &'d [u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    crate::entry(program_id, accounts, data)
}

pub struct LotteryTest {
    program_test: ProgramTest,
}

impl LotteryTest {
    pub fn new() -> Self {
        let mut program_test =
            ProgramTest::new("lottery", crate::ID, processor!(process_instruction));
        program_test.prefer_bpf(false);
        Self { program_test }
    }

    pub fn fund(&mut self, address: &Pubkey, lamports: u64) {
        self.program_test.add_account(
            *address,
            SolanaAccount {
                lamports,
                data: vec![],
                owner: system_program::ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn add_raw(&mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.program_test.add_account(
            address,
            SolanaAccount {
                lamports: Rent::default().minimum_balance(data.len()),
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn add_lottery(&mut self, address: Pubkey, lottery: &LotteryAccount) {
        self.add_raw(address, crate::ID, serialize(lottery, LOTTERY_ACCOUNT_SIZE));
    }

    pub fn add_registry(&mut self, address: Pubkey, registry: &RegistryAccount) {
        self.add_raw(address, crate::ID, serialize(registry, REGISTRY_ACCOUNT_SIZE));
    }

    pub async fn start(self) -> ProgramTestContext {
        self.program_test.start_with_context().await
    }
}

fn serialize<T: AccountSerialize>(state: &T, space: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(space);
    state.try_serialize(&mut data).unwrap();
    data.resize(space, 0);
    data
}

/// A lottery whose sales window closed long ago.
pub fn lottery_fixture(authority: Pubkey, treasury: Pubkey, id: u64, bump: u8) -> LotteryAccount {
    let params = LotteryParams {
        entry_price: LAMPORTS_PER_SOL / 10,
        goal_amount: LAMPORTS_PER_SOL,
        start_time: 1,
        end_time: 2,
    };
    LotteryAccount::new(authority, treasury, id, params, bump)
}

pub async fn send(
    banks_client: &mut BanksClient,
    instruction: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> std::result::Result<(), BanksClientError> {
    let mut keypairs = vec![payer];
    for signer in signers {
        if signer.pubkey() != payer.pubkey() {
            keypairs.push(*signer);
        }
    }

    let blockhash = banks_client.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &keypairs,
        blockhash,
    );
    banks_client.process_transaction(transaction).await
}

/// Custom error code the program failed with.
pub fn error_code(err: BanksClientError) -> u32 {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))
        | BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        } => code,
        other => panic!("expected a program error, got {other:?}"),
    }
}

pub async fn fetch_lottery(banks_client: &mut BanksClient, address: Pubkey) -> LotteryAccount {
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    LotteryAccount::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn fetch_registry(banks_client: &mut BanksClient, authority: &Pubkey) -> RegistryAccount {
    let (address, _) = find_registry_address(authority);
    let account = banks_client.get_account(address).await.unwrap().unwrap();
    RegistryAccount::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn balance(banks_client: &mut BanksClient, address: Pubkey) -> u64 {
    banks_client.get_balance(address).await.unwrap()
}

fn instruction(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub fn initialize_ix(
    authority: Pubkey,
    treasury: Pubkey,
    id: u64,
    entry_price: u64,
    goal_amount: u64,
    start_time: i64,
    end_time: i64,
) -> Instruction {
    let (lottery_account, _) = find_lottery_address(&authority, id);
    let (registry, _) = find_registry_address(&authority);
    instruction(
        crate::accounts::Initialize {
            lottery_account,
            authority,
            treasury,
            registry,
            system_program: system_program::ID,
        },
        crate::instruction::Initialize {
            id,
            entry_price,
            goal_amount,
            start_time,
            end_time,
        },
    )
}

/// `initialize` against caller-chosen lottery and registry addresses.
pub fn initialize_ix_at(
    lottery_account: Pubkey,
    registry: Pubkey,
    authority: Pubkey,
    treasury: Pubkey,
    id: u64,
    entry_price: u64,
    goal_amount: u64,
) -> Instruction {
    instruction(
        crate::accounts::Initialize {
            lottery_account,
            authority,
            treasury,
            registry,
            system_program: system_program::ID,
        },
        crate::instruction::Initialize {
            id,
            entry_price,
            goal_amount,
            start_time: 0,
            end_time: 0,
        },
    )
}

pub fn buy_lottery_ix(lottery_account: Pubkey, buyer: Pubkey, treasury: Pubkey) -> Instruction {
    instruction(
        crate::accounts::BuyLottery {
            lottery_account,
            buyer,
            treasury,
            system_program: system_program::ID,
        },
        crate::instruction::BuyLottery {},
    )
}

pub fn commit_randomness_ix(
    lottery_account: Pubkey,
    randomness_account_data: Pubkey,
    previous_randomness_account: Option<Pubkey>,
    authority: Pubkey,
) -> Instruction {
    instruction(
        crate::accounts::CommitRandomness {
            lottery_account,
            randomness_account_data,
            previous_randomness_account,
            authority,
        },
        crate::instruction::CommitRandomness {},
    )
}

pub fn pick_winner_ix(
    lottery_account: Pubkey,
    randomness_account_data: Pubkey,
    authority: Pubkey,
) -> Instruction {
    instruction(
        crate::accounts::PickWinner {
            lottery_account,
            randomness_account_data,
            authority,
            system_program: system_program::ID,
        },
        crate::instruction::PickWinner {},
    )
}

pub fn payout_ix(
    lottery_account: Pubkey,
    registry: Pubkey,
    treasury: Pubkey,
    winner: Pubkey,
) -> Instruction {
    instruction(
        crate::accounts::Payout {
            lottery_account,
            registry,
            treasury,
            winner,
            system_program: system_program::ID,
        },
        crate::instruction::Payout {},
    )
}

pub fn get_active_lotteries_ix(registry: Pubkey) -> Instruction {
    instruction(
        crate::accounts::GetActiveLotteries { registry },
        crate::instruction::GetActiveLotteries {},
    )
}

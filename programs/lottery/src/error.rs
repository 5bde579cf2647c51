use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("Entry price and goal amount must be greater than zero")]
    InvalidParameters,
    #[msg("End time must be after start time")]
    InvalidTimeWindow,
    #[msg("A lottery with this id already exists for this authority")]
    DuplicateLottery,
    #[msg("Account does not match its derived address")]
    AddressMismatch,
    #[msg("Lottery is not open for entries")]
    LotteryNotOpen,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Lottery already has a winner")]
    LotteryAlreadyFinalized,
    #[msg("Only the lottery authority can perform this action")]
    Unauthorized,
    #[msg("Lottery has no participants")]
    NoParticipants,
    #[msg("Winner has already been picked")]
    AlreadyFinalized,
    #[msg("Lottery is still open")]
    LotteryStillOpen,
    #[msg("Prize has already been paid")]
    AlreadyPaid,
    Overflow,
    #[msg("Lottery has reached the maximum number of entries")]
    LotteryFull,
    #[msg("Registry cannot track more lotteries")]
    RegistryFull,
    #[msg("Treasury account does not match the lottery")]
    InvalidTreasury,
    #[msg("Winner account does not match the lottery")]
    InvalidWinner,
    #[msg("No winner has been picked yet")]
    WinnerNotSelected,
    #[msg("No randomness account has been committed")]
    RandomnessNotCommitted,
    #[msg("Randomness account does not match the committed one")]
    InvalidRandomnessAccount,
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been resolved for this slot")]
    RandomnessNotResolved,
    #[msg("A randomness account is already committed")]
    RandomnessAlreadyCommitted,
}

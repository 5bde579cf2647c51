pub use buy_lottery::*;
pub use commit_randomness::*;
pub use get_active_lotteries::*;
pub use initialize::*;
pub use payout::*;
pub use pick_winner::*;

pub mod buy_lottery;
pub mod commit_randomness;
pub mod get_active_lotteries;
pub mod initialize;
pub mod payout;
pub mod pick_winner;

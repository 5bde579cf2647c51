/// Seed tag for per-authority lottery accounts: ["lottery", authority, id (u64 LE)].
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed tag for the per-authority registry: ["registry", authority].
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Lottery length used when `initialize` is called with `end_time == 0`.
pub const DEFAULT_DURATION: i64 = 24 * 60 * 60; // 24 hours in seconds

/// Upper bound on entries per lottery. Sized so the account stays below the
/// 10 KiB limit for accounts created through CPI.
pub const MAX_PARTICIPANTS: usize = 256;

/// Upper bound on lottery ids a single registry can track.
pub const MAX_REGISTRY_IDS: usize = 64;

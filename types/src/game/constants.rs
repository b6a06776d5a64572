/// Number of faces on the game die.
pub const DIE_SIDES: u8 = 6;

/// Rolls each player makes per round.
pub const ROLLS_PER_ROUND: u8 = 3;

/// Score a player must reach exactly to win the match.
pub const SCORE_TARGET: u8 = 21;

/// Upper bound on rounds before a match resolves without a winner.
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Sentinel round/roll index for "never reached the win condition".
pub const NO_WIN_INDEX: u32 = u32::MAX;

/// Base reward paid to a match winner.
pub const DEFAULT_BASE_PAYOUT: u64 = 100;

/// Payout multiplier applied when multiple players reach the target on the
/// same round and roll (a zen finish).
pub const DEFAULT_ZEN_MULTIPLIER: u64 = 2;

/// Default cooldown applied to an asset after a match, in seconds (6 hours).
pub const DEFAULT_BASE_COOLDOWN_SECS: u64 = 6 * 60 * 60;

/// Capacity of the engine's recent-roll history buffer.
pub const RECENT_ROLL_HISTORY: usize = 16;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DIE_SIDES, NO_WIN_INDEX, SCORE_TARGET};

/// Invariant violations detectable on a generated game trace.
///
/// These indicate a programming error in the generator, never a playable
/// outcome, so callers should surface them loudly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundsInvariantError {
    #[error("roll out of range at round {round} roll {roll} (got {got})")]
    RollOutOfRange { round: usize, roll: usize, got: u8 },
    #[error("damage out of range at round {round} roll {roll} (got {got})")]
    DamageOutOfRange { round: usize, roll: usize, got: u8 },
    #[error("total score out of range at round {round} roll {roll} (got {got})")]
    ScoreOutOfRange { round: usize, roll: usize, got: u8 },
    #[error("total score decreased at round {round} roll {roll} ({prev} -> {got})")]
    ScoreDecreased {
        round: usize,
        roll: usize,
        prev: u8,
        got: u8,
    },
    #[error("win indexes disagree (round {round_index}, roll {roll_index})")]
    MismatchedWinIndexes { round_index: u32, roll_index: u32 },
    #[error("win index out of bounds (round {round_index}, roll {roll_index})")]
    WinIndexOutOfBounds { round_index: u32, roll_index: u32 },
}

/// One die roll within a round.
///
/// `roll` is the face shown and `damage` the face's damage value; both are
/// `None` only before the roll is generated. `total_score` is the running
/// score after this roll is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollData {
    pub roll: Option<u8>,
    pub damage: Option<u8>,
    pub total_score: u8,
}

/// One round of rolls for a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundData {
    /// Zero-based round number within the match.
    pub round_number: u32,
    /// Running score at the end of this round.
    pub total_damage_so_far: u8,
    /// Rolls taken this round, in order. Append-only during generation.
    pub rolls: Vec<RollData>,
}

/// A player's full precomputed game trace.
///
/// `game_win_round_index`/`game_win_roll_index` hold the first position at
/// which the win condition was reached, or [`NO_WIN_INDEX`] sentinels when it
/// never was. Callers must treat the sentinel pair as "did not win".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundsData {
    pub rounds: Vec<RoundData>,
    pub game_win_round_index: u32,
    pub game_win_roll_index: u32,
}

impl Default for PlayerRoundsData {
    fn default() -> Self {
        Self {
            rounds: Vec::new(),
            game_win_round_index: NO_WIN_INDEX,
            game_win_roll_index: NO_WIN_INDEX,
        }
    }
}

impl PlayerRoundsData {
    /// Whether this trace reaches the win condition.
    pub fn has_win(&self) -> bool {
        self.game_win_round_index != NO_WIN_INDEX
    }

    /// The win position as `(round, roll)`, if any.
    pub fn win_position(&self) -> Option<(u32, u32)> {
        self.has_win()
            .then_some((self.game_win_round_index, self.game_win_roll_index))
    }

    /// The roll at `(round_index, roll_index)`, if generated.
    pub fn roll_at(&self, round_index: u32, roll_index: u32) -> Option<&RollData> {
        self.rounds
            .get(round_index as usize)
            .and_then(|round| round.rolls.get(roll_index as usize))
    }

    /// Validate the generator's hard contracts over this trace.
    pub fn validate_invariants(&self) -> Result<(), RoundsInvariantError> {
        let mut prev_score = 0u8;
        for (round_idx, round) in self.rounds.iter().enumerate() {
            for (roll_idx, roll) in round.rolls.iter().enumerate() {
                if let Some(face) = roll.roll {
                    if face < 1 || face > DIE_SIDES {
                        return Err(RoundsInvariantError::RollOutOfRange {
                            round: round_idx,
                            roll: roll_idx,
                            got: face,
                        });
                    }
                }
                if let Some(damage) = roll.damage {
                    if damage < 1 || damage > DIE_SIDES {
                        return Err(RoundsInvariantError::DamageOutOfRange {
                            round: round_idx,
                            roll: roll_idx,
                            got: damage,
                        });
                    }
                }
                if roll.total_score < 1 || roll.total_score > SCORE_TARGET {
                    return Err(RoundsInvariantError::ScoreOutOfRange {
                        round: round_idx,
                        roll: roll_idx,
                        got: roll.total_score,
                    });
                }
                if roll.total_score < prev_score {
                    return Err(RoundsInvariantError::ScoreDecreased {
                        round: round_idx,
                        roll: roll_idx,
                        prev: prev_score,
                        got: roll.total_score,
                    });
                }
                prev_score = roll.total_score;
            }
        }

        let round_sentinel = self.game_win_round_index == NO_WIN_INDEX;
        let roll_sentinel = self.game_win_roll_index == NO_WIN_INDEX;
        if round_sentinel != roll_sentinel {
            return Err(RoundsInvariantError::MismatchedWinIndexes {
                round_index: self.game_win_round_index,
                roll_index: self.game_win_roll_index,
            });
        }
        if !round_sentinel && self.roll_at(self.game_win_round_index, self.game_win_roll_index).is_none() {
            return Err(RoundsInvariantError::WinIndexOutOfBounds {
                round_index: self.game_win_round_index,
                roll_index: self.game_win_roll_index,
            });
        }
        Ok(())
    }
}

/// Resolution summary for a completed match.
///
/// Computed once when the game resolves; immutable after. Sentinel win
/// indexes with a zero payout describe a match nobody won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWinInfo {
    pub game_win_round_index: u32,
    pub game_win_roll_index: u32,
    pub payout: u64,
    pub zen: bool,
}

impl GameWinInfo {
    /// Outcome for a match that ran out of rounds without a winner.
    pub fn no_winner() -> Self {
        Self {
            game_win_round_index: NO_WIN_INDEX,
            game_win_roll_index: NO_WIN_INDEX,
            payout: 0,
            zen: false,
        }
    }

    /// Whether any player won this match.
    pub fn has_winner(&self) -> bool {
        self.game_win_round_index != NO_WIN_INDEX
    }
}

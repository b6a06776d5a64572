use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    DEFAULT_BASE_PAYOUT, DEFAULT_MAX_ROUNDS, DEFAULT_ZEN_MULTIPLIER, DIE_SIDES, ROLLS_PER_ROUND,
    SCORE_TARGET,
};

/// Errors raised by [`GameConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_rounds must be greater than zero")]
    ZeroMaxRounds,
    #[error("rolls_per_round must be greater than zero")]
    ZeroRollsPerRound,
    #[error("score_target must be reachable by a single die face (got {got}, die has {sides})")]
    UnreachableTarget { got: u8, sides: u8 },
}

/// Match rules for one game instance.
///
/// Plain data with no ambient lookup; constructed once and passed to the
/// engine by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum rounds before the match resolves without a winner.
    pub max_rounds: u32,
    /// Rolls each player makes per round.
    pub rolls_per_round: u8,
    /// Score a player must reach exactly to win.
    pub score_target: u8,
    /// Base reward paid to a match winner.
    pub base_payout: u64,
    /// Payout multiplier for a zen (simultaneous) finish.
    pub zen_multiplier: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            rolls_per_round: ROLLS_PER_ROUND,
            score_target: SCORE_TARGET,
            base_payout: DEFAULT_BASE_PAYOUT,
            zen_multiplier: DEFAULT_ZEN_MULTIPLIER,
        }
    }
}

impl GameConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        if self.rolls_per_round == 0 {
            return Err(ConfigError::ZeroRollsPerRound);
        }
        // A target below the highest die face can overshoot on the very
        // first roll, leaving a score of zero that the trace invariants
        // reject. Every target of at least one full face is landable.
        if self.score_target < DIE_SIDES {
            return Err(ConfigError::UnreachableTarget {
                got: self.score_target,
                sides: DIE_SIDES,
            });
        }
        Ok(())
    }

    /// Hard ceiling on ticks a match of `player_count` players can take.
    pub fn max_ticks(&self, player_count: usize) -> u64 {
        (self.max_rounds as u64)
            .saturating_mul(self.rolls_per_round as u64)
            .saturating_mul(player_count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.score_target, 21);
        assert_eq!(config.rolls_per_round, 3);
    }

    #[test]
    fn zero_rounds_rejected() {
        let config = GameConfig {
            max_rounds: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxRounds));
    }

    #[test]
    fn zero_rolls_rejected() {
        let config = GameConfig {
            rolls_per_round: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRollsPerRound));
    }

    #[test]
    fn sub_face_target_rejected() {
        for target in [0u8, 3, DIE_SIDES - 1] {
            let config = GameConfig {
                score_target: target,
                ..GameConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::UnreachableTarget {
                    got: target,
                    sides: DIE_SIDES,
                })
            );
        }
        // One full face is the smallest landable target.
        let config = GameConfig {
            score_target: DIE_SIDES,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn max_ticks_bounds_a_two_player_match() {
        let config = GameConfig::default();
        assert_eq!(config.max_ticks(2), 100 * 3 * 2);
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`CooldownBonusFactors::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum FactorsError {
    #[error("{field} must lie in [0, 1] (got {got})")]
    OutOfRange { field: &'static str, got: f64 },
}

/// Fractional adjustment bounds for one direction pair.
///
/// `increase` bounds how much longer a cooldown may get, `decrease` how much
/// shorter. Both are fractions of the base duration in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncreaseDecrease {
    pub increase: f64,
    pub decrease: f64,
}

impl IncreaseDecrease {
    fn validate(&self, field: &'static str) -> Result<(), FactorsError> {
        for got in [self.increase, self.decrease] {
            if !(0.0..=1.0).contains(&got) {
                return Err(FactorsError::OutOfRange { field, got });
            }
        }
        Ok(())
    }
}

/// Per-dimension adjustment maxima, keyed by the three population-relative
/// dimensions the cooldown factory compares against the median.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedianMaxes {
    pub games_played: IncreaseDecrease,
    pub wallet_count: IncreaseDecrease,
    pub rank_score: IncreaseDecrease,
}

/// Static tuning for the cooldown factory.
///
/// `time_max_percents` clamps the combined adjustment; `median_maxes` caps
/// each dimension's contribution. Fixed coefficients, never stored
/// per-entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CooldownBonusFactors {
    pub time_max_percents: IncreaseDecrease,
    pub median_maxes: MedianMaxes,
}

impl Default for CooldownBonusFactors {
    fn default() -> Self {
        Self {
            // Combined adjustment may lengthen the cooldown by at most 20%
            // and shorten it by at most 80%.
            time_max_percents: IncreaseDecrease {
                increase: 0.2,
                decrease: 0.8,
            },
            median_maxes: MedianMaxes {
                games_played: IncreaseDecrease {
                    increase: 0.1,
                    decrease: 0.4,
                },
                wallet_count: IncreaseDecrease {
                    increase: 0.1,
                    decrease: 0.3,
                },
                rank_score: IncreaseDecrease {
                    increase: 0.1,
                    decrease: 0.1,
                },
            },
        }
    }
}

impl CooldownBonusFactors {
    /// Validate that every coefficient lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), FactorsError> {
        self.time_max_percents.validate("time_max_percents")?;
        self.median_maxes.games_played.validate("games_played")?;
        self.median_maxes.wallet_count.validate("wallet_count")?;
        self.median_maxes.rank_score.validate("rank_score")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factors_are_valid() {
        assert!(CooldownBonusFactors::default().validate().is_ok());
    }

    #[test]
    fn per_dimension_decreases_cover_the_global_clamp() {
        // The sum of dimension decreases should be able to reach the global
        // maximum so a fully above-median asset hits the floor.
        let factors = CooldownBonusFactors::default();
        let sum = factors.median_maxes.games_played.decrease
            + factors.median_maxes.wallet_count.decrease
            + factors.median_maxes.rank_score.decrease;
        assert!(sum >= factors.time_max_percents.decrease);
    }

    #[test]
    fn rejects_out_of_range_coefficient() {
        let mut factors = CooldownBonusFactors::default();
        factors.median_maxes.rank_score.increase = 1.5;
        assert_eq!(
            factors.validate(),
            Err(FactorsError::OutOfRange {
                field: "rank_score",
                got: 1.5
            })
        );
    }

    #[test]
    fn rejects_negative_coefficient() {
        let mut factors = CooldownBonusFactors::default();
        factors.time_max_percents.decrease = -0.1;
        assert!(factors.validate().is_err());
    }
}

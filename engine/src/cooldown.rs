//! Adaptive cooldown factory.
//!
//! Computes the next cooldown for an asset after a match from three
//! population-relative dimensions: games played, wallets owned by the
//! holder, and leaderboard rank score. An asset above the population median
//! on a dimension earns a shorter cooldown, one below the median a longer
//! one, each scaled by its relative distance from the median and capped by
//! the dimension's tuning. The three deltas combine by summation, the sum is
//! clamped to the global `time_max_percents` bounds, and the result is
//! applied to the base duration (floored at zero).
//!
//! Deterministic: identical inputs always yield identical durations.

use daruma_types::{AssetRecord, CooldownBonusFactors, IncreaseDecrease, PopulationStats, UserRecord};
use tracing::debug;

/// Signed fractional delta for one dimension.
///
/// Positive lengthens the cooldown (below median), negative shortens it
/// (above median). The magnitude scales with the relative distance from the
/// median, saturating at the dimension's configured maxima.
fn dimension_delta(own: u32, median: u32, bounds: &IncreaseDecrease) -> f64 {
    if own == median {
        return 0.0;
    }
    if median == 0 {
        // No meaningful distance; treat any nonzero value as fully above.
        return -bounds.decrease;
    }
    let distance = ((f64::from(own) - f64::from(median)).abs() / f64::from(median)).min(1.0);
    if own > median {
        -bounds.decrease * distance
    } else {
        bounds.increase * distance
    }
}

/// Compute the next cooldown duration, in seconds, for an asset.
pub fn compute_next_cooldown(
    asset: &AssetRecord,
    owner: &UserRecord,
    stats: &PopulationStats,
    factors: &CooldownBonusFactors,
    base_cooldown_secs: u64,
) -> u64 {
    let games = dimension_delta(
        asset.games_played,
        stats.median_games_played,
        &factors.median_maxes.games_played,
    );
    let wallets = dimension_delta(
        owner.wallet_count,
        stats.median_wallet_count,
        &factors.median_maxes.wallet_count,
    );
    let rank = dimension_delta(
        asset.rank_score,
        stats.median_rank_score,
        &factors.median_maxes.rank_score,
    );

    let combined = (games + wallets + rank).clamp(
        -factors.time_max_percents.decrease,
        factors.time_max_percents.increase,
    );
    let adjusted = (base_cooldown_secs as f64) * (1.0 + combined);
    let next = adjusted.max(0.0).round() as u64;
    debug!(
        asset = asset.id,
        games, wallets, rank, combined, next, "cooldown computed"
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u64 = 21_600;

    fn median_stats() -> PopulationStats {
        PopulationStats {
            median_games_played: 10,
            median_wallet_count: 2,
            median_rank_score: 100,
        }
    }

    fn asset(games_played: u32, rank_score: u32) -> AssetRecord {
        AssetRecord {
            games_played,
            rank_score,
            ..AssetRecord::new(1, 1)
        }
    }

    fn owner(wallet_count: u32) -> UserRecord {
        UserRecord {
            wallet_count,
            ..UserRecord::new(1, "owner")
        }
    }

    #[test]
    fn at_median_everywhere_keeps_the_baseline() {
        let factors = CooldownBonusFactors::default();
        let next = compute_next_cooldown(
            &asset(10, 100),
            &owner(2),
            &median_stats(),
            &factors,
            BASE,
        );
        assert_eq!(next, BASE);
    }

    #[test]
    fn maximally_above_median_hits_the_floor_bound() {
        let factors = CooldownBonusFactors::default();
        // Twice the median (or more) on every dimension saturates each
        // dimension's decrease; their sum exceeds the global clamp.
        let next = compute_next_cooldown(
            &asset(100, 1_000),
            &owner(20),
            &median_stats(),
            &factors,
            BASE,
        );
        let floor = ((BASE as f64) * (1.0 - factors.time_max_percents.decrease)).round() as u64;
        assert_eq!(next, floor);
        assert!(next > 0);
    }

    #[test]
    fn below_median_lengthens_up_to_the_cap() {
        let factors = CooldownBonusFactors::default();
        let next = compute_next_cooldown(
            &asset(0, 0),
            &owner(0),
            &PopulationStats {
                median_games_played: 10,
                median_wallet_count: 2,
                median_rank_score: 100,
            },
            &factors,
            BASE,
        );
        // Sum of increases (0.3) exceeds the global cap (0.2).
        let cap = ((BASE as f64) * (1.0 + factors.time_max_percents.increase)).round() as u64;
        assert_eq!(next, cap);
    }

    #[test]
    fn adjustment_is_monotonic_in_games_played() {
        let factors = CooldownBonusFactors::default();
        let stats = median_stats();
        let mut last = u64::MAX;
        for games in [0u32, 5, 10, 15, 20, 40] {
            let next =
                compute_next_cooldown(&asset(games, 100), &owner(2), &stats, &factors, BASE);
            assert!(next <= last, "cooldown must not grow as games_played grows");
            last = next;
        }
    }

    #[test]
    fn zero_median_treats_active_assets_as_above() {
        let factors = CooldownBonusFactors::default();
        let stats = PopulationStats::default();
        let busy = compute_next_cooldown(&asset(5, 5), &owner(5), &stats, &factors, BASE);
        let idle = compute_next_cooldown(&asset(0, 0), &owner(0), &stats, &factors, BASE);
        assert!(busy < idle);
        assert_eq!(idle, BASE);
    }

    #[test]
    fn never_negative_even_with_extreme_tuning() {
        let mut factors = CooldownBonusFactors::default();
        factors.time_max_percents.decrease = 1.0;
        factors.median_maxes.games_played.decrease = 1.0;
        factors.median_maxes.wallet_count.decrease = 1.0;
        factors.median_maxes.rank_score.decrease = 1.0;
        let next = compute_next_cooldown(
            &asset(1_000, 1_000),
            &owner(1_000),
            &median_stats(),
            &factors,
            BASE,
        );
        assert_eq!(next, 0);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let factors = CooldownBonusFactors::default();
        let stats = median_stats();
        let a = compute_next_cooldown(&asset(7, 120), &owner(3), &stats, &factors, BASE);
        let b = compute_next_cooldown(&asset(7, 120), &owner(3), &stats, &factors, BASE);
        assert_eq!(a, b);
    }
}

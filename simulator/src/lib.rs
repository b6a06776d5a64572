//! Local match harness.
//!
//! Wires record views into a roster, drives the round state machine to
//! resolution, and feeds the outcome through the cooldown factory — the same
//! flow the chat-facing layer performs in production, minus its I/O.

use anyhow::{bail, Result};
use daruma_engine::{compute_next_cooldown, CircularBuffer, DarumaGame, Player, PlayerManager};
use daruma_types::{
    AssetRecord, CooldownBonusFactors, GameConfig, GameWinInfo, PopulationStats, UserRecord,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Inputs for one simulated match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSetup {
    /// Human seats to fill with synthetic users.
    pub humans: usize,
    /// Seed the channel NPC as an extra seat.
    pub fill_npc: bool,
    /// Channel hosting the match.
    pub channel_id: u64,
    pub match_seed: u64,
    pub config: GameConfig,
    pub factors: CooldownBonusFactors,
    pub stats: PopulationStats,
    pub base_cooldown_secs: u64,
}

/// Outcome of one simulated match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_seed: u64,
    pub players: usize,
    pub ticks: u64,
    pub outcome: GameWinInfo,
    /// User ids of the winning seats, registration order.
    pub winner_user_ids: Vec<u64>,
    /// Next cooldown per seat, in seconds, registration order.
    pub cooldowns_secs: Vec<u64>,
}

/// Aggregate over a batch of matches.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub matches: u64,
    pub wins: u64,
    pub zen_finishes: u64,
    pub no_winner: u64,
    pub min_cooldown_secs: u64,
    pub max_cooldown_secs: u64,
    pub reports: Vec<MatchReport>,
}

/// Run a single match end to end.
pub fn run_match(setup: &MatchSetup) -> Result<MatchReport> {
    if setup.humans == 0 && !setup.fill_npc {
        bail!("match needs at least one seat (humans or the NPC fill)");
    }

    let mut manager = if setup.fill_npc {
        PlayerManager::with_npc(setup.channel_id)
    } else {
        PlayerManager::new()
    };
    for seat in 0..setup.humans {
        let user_id = seat as u64 + 1;
        let mut user = UserRecord::new(user_id, format!("player-{user_id}"));
        user.wallet_count = 1 + (seat as u32 % 3);
        let mut asset = AssetRecord::new(user_id * 100, user_id);
        asset.games_played = seat as u32 * 4;
        asset.rank_score = 50 + seat as u32 * 25;
        manager.add_player(Player::new(user, asset, setup.channel_id));
    }

    let mut game = DarumaGame::new(manager, setup.config)?;
    game.start(setup.match_seed)?;

    let mut ticks = 0u64;
    let outcome = loop {
        match game.advance()? {
            daruma_engine::TickOutcome::Resolved(info) => break info,
            daruma_engine::TickOutcome::Rolled { .. } => ticks += 1,
        }
    };

    let winner_user_ids = game
        .winners()
        .iter()
        .map(|&index| game.roster().all_players()[index].user.id)
        .collect();
    let cooldowns_secs = game
        .roster()
        .all_players()
        .iter()
        .map(|player| {
            compute_next_cooldown(
                &player.asset,
                &player.user,
                &setup.stats,
                &setup.factors,
                setup.base_cooldown_secs,
            )
        })
        .collect();

    Ok(MatchReport {
        match_seed: setup.match_seed,
        players: game.roster().player_count(),
        ticks,
        outcome,
        winner_user_ids,
        cooldowns_secs,
    })
}

/// Run `count` matches with consecutive seeds, keeping the most recent
/// `keep_reports` full reports.
pub fn run_batch(setup: &MatchSetup, count: u64, keep_reports: usize) -> Result<BatchSummary> {
    let mut summary = BatchSummary {
        min_cooldown_secs: u64::MAX,
        ..BatchSummary::default()
    };
    let mut recent = CircularBuffer::new(keep_reports.max(1));

    for offset in 0..count {
        let setup = MatchSetup {
            match_seed: setup.match_seed.wrapping_add(offset),
            ..setup.clone()
        };
        let report = run_match(&setup)?;
        summary.matches += 1;
        if report.outcome.has_winner() {
            summary.wins += 1;
            if report.outcome.zen {
                summary.zen_finishes += 1;
            }
        } else {
            summary.no_winner += 1;
        }
        for &cooldown in &report.cooldowns_secs {
            summary.min_cooldown_secs = summary.min_cooldown_secs.min(cooldown);
            summary.max_cooldown_secs = summary.max_cooldown_secs.max(cooldown);
        }
        recent.enqueue(report);
    }

    if summary.matches == 0 {
        summary.min_cooldown_secs = 0;
    }
    summary.reports = recent.to_vec();
    info!(
        matches = summary.matches,
        wins = summary.wins,
        zen = summary.zen_finishes,
        "batch complete"
    );
    Ok(summary)
}

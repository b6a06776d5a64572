use serde::{Deserialize, Serialize};

/// Read-only view of a persisted user.
///
/// The engine never mutates users; `wallet_count` feeds the cooldown
/// factory's wallets-owned dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    /// Wallets linked to this user.
    pub wallet_count: u32,
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wallet_count: 1,
        }
    }
}

/// View of a persisted playable asset (the NFT a player fields for a match).
///
/// Win/loss counters and the cooldown timestamp are written back by the
/// persistence layer after the engine reports outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: u64,
    /// Wallet currently holding the asset.
    pub owner_wallet: u64,
    /// Unix timestamp at which the asset may play again.
    pub cooldown_ends_at: u64,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Leaderboard score; higher is better.
    pub rank_score: u32,
}

impl AssetRecord {
    pub fn new(id: u64, owner_wallet: u64) -> Self {
        Self {
            id,
            owner_wallet,
            ..Self::default()
        }
    }

    /// Fold one match result into the asset's counters.
    pub fn record_result(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
    }
}

/// Population medians across all active assets.
///
/// Supplied by an external aggregation query; the cooldown factory consumes
/// only these three scalars, never raw per-asset data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub median_games_played: u32,
    pub median_wallet_count: u32,
    pub median_rank_score: u32,
}

//! In-memory player for one match.

use daruma_types::{AssetRecord, PlayerRoundsData, UserRecord};

/// A user fielding one asset in one match.
///
/// Exists only for the lifetime of a waiting room or running match; the
/// persisted user/asset state it wraps is read-only here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub user: UserRecord,
    pub asset: AssetRecord,
    /// Precomputed trace for this match; empty until the game starts.
    pub rolls_data: PlayerRoundsData,
    /// Channel hosting the match.
    pub channel_id: u64,
    /// NPC players fill matches lacking enough humans.
    pub is_npc: bool,
}

impl Player {
    pub fn new(user: UserRecord, asset: AssetRecord, channel_id: u64) -> Self {
        Self {
            user,
            asset,
            rolls_data: PlayerRoundsData::default(),
            channel_id,
            is_npc: false,
        }
    }

    /// Create the house NPC for a channel.
    ///
    /// NPC user/asset ids are fixed so a roster can never hold two NPCs.
    pub fn npc(channel_id: u64) -> Self {
        Self {
            user: UserRecord::new(0, "Daruma Bot"),
            asset: AssetRecord::new(0, 0),
            rolls_data: PlayerRoundsData::default(),
            channel_id,
            is_npc: true,
        }
    }

    /// Attach the precomputed trace for this match.
    pub fn assign_rounds(&mut self, rolls_data: PlayerRoundsData) {
        self.rolls_data = rolls_data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npc_is_flagged_and_stable() {
        let npc = Player::npc(555);
        assert!(npc.is_npc);
        assert_eq!(npc.user.id, 0);
        assert_eq!(npc.channel_id, 555);
        assert!(npc.rolls_data.rounds.is_empty());
    }

    #[test]
    fn assign_rounds_replaces_trace() {
        let mut player = Player::new(UserRecord::new(1, "alice"), AssetRecord::new(10, 1), 9);
        let mut data = PlayerRoundsData::default();
        data.game_win_round_index = 2;
        data.game_win_roll_index = 1;
        player.assign_rounds(data.clone());
        assert_eq!(player.rolls_data, data);
    }
}

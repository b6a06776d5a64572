//! Per-channel player roster.
//!
//! Tracks the players registered for one match. Lookup is always by user id,
//! never by asset: a user holds at most one seat, and registering a second
//! asset swaps the asset on the existing seat instead of adding a duplicate.
//!
//! Single-threaded by design; mutation is serialized by the channel's event
//! flow.

use crate::player::Player;

/// Insertion-ordered roster of players for one game instance.
#[derive(Clone, Debug, Default)]
pub struct PlayerManager {
    players: Vec<Player>,
}

impl PlayerManager {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster pre-seeded with the channel NPC.
    pub fn with_npc(channel_id: u64) -> Self {
        Self {
            players: vec![Player::npc(channel_id)],
        }
    }

    /// Add a player, or swap the asset on an existing seat.
    ///
    /// Returns `true` when the roster changed: a new seat, or a different
    /// asset on an existing seat. Returns `false` for the exact same
    /// (user, asset) pair.
    pub fn add_player(&mut self, player: Player) -> bool {
        match self
            .players
            .iter_mut()
            .find(|seated| seated.user.id == player.user.id)
        {
            Some(seated) => {
                if seated.asset.id == player.asset.id {
                    return false;
                }
                seated.asset = player.asset;
                true
            }
            None => {
                self.players.push(player);
                true
            }
        }
    }

    /// Remove a player by user id. Returns `false` when absent.
    pub fn remove_player(&mut self, user_id: u64) -> bool {
        match self.get_player_index(user_id) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    /// Look up a player by user id.
    pub fn get_player(&self, user_id: u64) -> Option<&Player> {
        self.players.iter().find(|player| player.user.id == user_id)
    }

    /// Registration-order index of a player, if seated.
    pub fn get_player_index(&self, user_id: u64) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.user.id == user_id)
    }

    /// All seated players in registration order.
    pub fn all_players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access for the engine to attach traces at game start.
    pub(crate) fn all_players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daruma_types::{AssetRecord, UserRecord};

    fn player(user_id: u64, asset_id: u64) -> Player {
        Player::new(
            UserRecord::new(user_id, format!("user-{user_id}")),
            AssetRecord::new(asset_id, user_id),
            1,
        )
    }

    #[test]
    fn add_is_idempotent_for_same_user_and_asset() {
        let mut manager = PlayerManager::new();
        assert!(manager.add_player(player(1, 10)));
        assert!(!manager.add_player(player(1, 10)));
        assert_eq!(manager.player_count(), 1);
    }

    #[test]
    fn add_with_new_asset_swaps_in_place() {
        let mut manager = PlayerManager::new();
        assert!(manager.add_player(player(1, 10)));
        assert!(manager.add_player(player(1, 11)));
        assert_eq!(manager.player_count(), 1);
        assert_eq!(manager.get_player(1).unwrap().asset.id, 11);
        assert_eq!(manager.get_player_index(1), Some(0));
    }

    #[test]
    fn remove_absent_returns_false() {
        let mut manager = PlayerManager::new();
        assert!(!manager.remove_player(42));
        manager.add_player(player(1, 10));
        assert!(manager.remove_player(1));
        assert!(!manager.remove_player(1));
        assert!(manager.is_empty());
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut manager = PlayerManager::new();
        manager.add_player(player(3, 30));
        manager.add_player(player(1, 10));
        manager.add_player(player(2, 20));
        let ids: Vec<u64> = manager.all_players().iter().map(|p| p.user.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(manager.get_player_index(2), Some(2));
        assert_eq!(manager.get_player_index(9), None);
    }

    #[test]
    fn npc_seed_counts_as_a_seat() {
        let mut manager = PlayerManager::with_npc(7);
        assert_eq!(manager.player_count(), 1);
        assert!(manager.get_player(0).unwrap().is_npc);
        // A second NPC registration is the same (user, asset) pair.
        assert!(!manager.add_player(Player::npc(7)));
    }
}

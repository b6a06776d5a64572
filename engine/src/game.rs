//! Game round state machine.
//!
//! Drives a multi-player match through rounds and rolls in lockstep.
//!
//! ## Phases
//!
//! A match progresses through three phases:
//! 1. **WaitingRoom** - players register into the roster
//! 2. **RoundInProgress** - the machine ticks through precomputed rolls
//! 3. **Resolved** - terminal; the outcome is fixed
//!
//! Each tick consumes the active player's precomputed roll at the current
//! `(round, roll)` position, then rotates to the next player; when every
//! player has consumed the position, the roll index advances (and the round
//! index when the round's rolls are exhausted). The current player is always
//! derived from the player index, never stored.
//!
//! Win resolution compares each player's precomputed win position against
//! the machine's position: the earliest position wins, ties broken by lower
//! roll index and then registration order. Several players sharing the exact
//! winning position is a zen finish. A match that exhausts `max_rounds`
//! resolves to a no-winner outcome; the machine always terminates.

use daruma_types::{
    ConfigError, GameConfig, GameWinInfo, RollData, RECENT_ROLL_HISTORY,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::dice::complete_game_for_player;
use crate::manager::PlayerManager;
use crate::player::Player;
use crate::ring::CircularBuffer;
use crate::rng::GameRng;

/// Errors from driving a match.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game has not been started")]
    GameNotStarted,
    #[error("game was already started")]
    GameAlreadyStarted,
    #[error("game is already complete")]
    GameAlreadyComplete,
    #[error("cannot start a game with an empty roster")]
    EmptyRoster,
    #[error("roster is locked once rounds are in progress")]
    RosterLocked,
    #[error("player {player_index} has no roll at round {round_index} roll {roll_index}")]
    TraceExhausted {
        player_index: usize,
        round_index: u32,
        roll_index: u32,
    },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Match lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    WaitingRoom,
    RoundInProgress,
    Resolved,
}

/// The machine's position within the match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameRoundState {
    pub round_index: u32,
    pub roll_index: u32,
    pub player_index: usize,
}

/// Result of one [`DarumaGame::advance`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active player consumed one precomputed roll.
    Rolled {
        player_index: usize,
        round_index: u32,
        roll_index: u32,
        roll: RollData,
    },
    /// The match resolved; the machine is terminal.
    Resolved(GameWinInfo),
}

/// One channel's match: roster, precomputed traces, and round progression.
#[derive(Clone, Debug)]
pub struct DarumaGame {
    manager: PlayerManager,
    config: GameConfig,
    phase: GamePhase,
    state: GameRoundState,
    /// Earliest precomputed win position across the roster, fixed at start.
    win_point: Option<(u32, u32)>,
    /// Registration-order indices of players sharing the win position.
    winners: Vec<usize>,
    win_info: Option<GameWinInfo>,
    recent_rolls: CircularBuffer<(usize, RollData)>,
}

impl DarumaGame {
    /// Create a match in the waiting-room phase.
    pub fn new(manager: PlayerManager, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            manager,
            config,
            phase: GamePhase::WaitingRoom,
            state: GameRoundState::default(),
            win_point: None,
            winners: Vec::new(),
            win_info: None,
            recent_rolls: CircularBuffer::new(RECENT_ROLL_HISTORY),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round_state(&self) -> GameRoundState {
        self.state
    }

    /// The player whose roll the next tick will consume.
    pub fn current_player(&self) -> Option<&Player> {
        matches!(self.phase, GamePhase::RoundInProgress)
            .then(|| self.manager.all_players().get(self.state.player_index))
            .flatten()
    }

    pub fn roster(&self) -> &PlayerManager {
        &self.manager
    }

    /// Register a player while the waiting room is open.
    pub fn add_player(&mut self, player: Player) -> Result<bool, GameError> {
        if self.phase != GamePhase::WaitingRoom {
            return Err(GameError::RosterLocked);
        }
        Ok(self.manager.add_player(player))
    }

    /// Remove a player while the waiting room is open.
    pub fn remove_player(&mut self, user_id: u64) -> Result<bool, GameError> {
        if self.phase != GamePhase::WaitingRoom {
            return Err(GameError::RosterLocked);
        }
        Ok(self.manager.remove_player(user_id))
    }

    /// Close the waiting room and precompute every player's trace.
    ///
    /// Seeds one RNG stream per registration index, so a given match seed
    /// fully determines the outcome.
    pub fn start(&mut self, match_seed: u64) -> Result<(), GameError> {
        match self.phase {
            GamePhase::WaitingRoom => {}
            GamePhase::RoundInProgress => return Err(GameError::GameAlreadyStarted),
            GamePhase::Resolved => return Err(GameError::GameAlreadyComplete),
        }
        if self.manager.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let config = self.config;
        for (index, player) in self.manager.all_players_mut().iter_mut().enumerate() {
            let mut rng = GameRng::new(match_seed, index as u32);
            player.assign_rounds(complete_game_for_player(&mut rng, &config));
        }

        // Fix the winner set up front: lowest round, then lowest roll, then
        // registration order (the scan order).
        let mut best: Option<(u32, u32)> = None;
        let mut winners = Vec::new();
        for (index, player) in self.manager.all_players().iter().enumerate() {
            let Some(position) = player.rolls_data.win_position() else {
                continue;
            };
            match best {
                Some(current) if position > current => {}
                Some(current) if position == current => winners.push(index),
                _ => {
                    best = Some(position);
                    winners = vec![index];
                }
            }
        }
        self.win_point = best;
        self.winners = winners;
        self.phase = GamePhase::RoundInProgress;
        info!(
            players = self.manager.player_count(),
            match_seed, "match started"
        );
        Ok(())
    }

    /// Advance the machine by one tick.
    ///
    /// Returns the consumed roll, or the resolution once every player has
    /// consumed the winning position (or the round cap is exhausted).
    /// Calling this on a resolved machine is a contract violation and fails
    /// with [`GameError::GameAlreadyComplete`].
    pub fn advance(&mut self) -> Result<TickOutcome, GameError> {
        match self.phase {
            GamePhase::WaitingRoom => return Err(GameError::GameNotStarted),
            GamePhase::Resolved => return Err(GameError::GameAlreadyComplete),
            GamePhase::RoundInProgress => {}
        }

        if let Some(info) = self.due_resolution() {
            self.phase = GamePhase::Resolved;
            self.win_info = Some(info);
            info!(
                winners = self.winners.len(),
                zen = info.zen,
                payout = info.payout,
                "match resolved"
            );
            return Ok(TickOutcome::Resolved(info));
        }

        let GameRoundState {
            round_index,
            roll_index,
            player_index,
        } = self.state;

        let roll = self
            .manager
            .all_players()
            .get(player_index)
            .and_then(|player| player.rolls_data.roll_at(round_index, roll_index))
            .copied()
            .ok_or(GameError::TraceExhausted {
                player_index,
                round_index,
                roll_index,
            })?;

        self.recent_rolls.enqueue((player_index, roll));
        debug!(
            player_index,
            round_index,
            roll_index,
            total_score = roll.total_score,
            "tick"
        );

        // Rotate to the next player; a wraparound moves the position to the
        // next roll, and past the round's last roll to the next round.
        self.state.player_index += 1;
        if self.state.player_index == self.manager.player_count() {
            self.state.player_index = 0;
            self.state.roll_index += 1;
            if self.state.roll_index == u32::from(self.config.rolls_per_round) {
                self.state.roll_index = 0;
                self.state.round_index += 1;
            }
        }

        Ok(TickOutcome::Rolled {
            player_index,
            round_index,
            roll_index,
            roll,
        })
    }

    /// Drive the machine until it resolves.
    ///
    /// Terminates within `config.max_ticks(player_count) + 1` calls by
    /// construction: every tick strictly advances the position, and the
    /// position is bounded by the round cap.
    pub fn run_to_completion(&mut self) -> Result<GameWinInfo, GameError> {
        loop {
            if let TickOutcome::Resolved(info) = self.advance()? {
                return Ok(info);
            }
        }
    }

    /// The resolution outcome, if the machine has passed the decisive position.
    fn due_resolution(&self) -> Option<GameWinInfo> {
        let position = (self.state.round_index, self.state.roll_index);
        if let Some(win_point) = self.win_point {
            // The winning column is fully consumed once the position moves
            // strictly past it.
            if position > win_point {
                let zen = self.winners.len() > 1;
                let payout = if zen {
                    self.config.base_payout.saturating_mul(self.config.zen_multiplier)
                } else {
                    self.config.base_payout
                };
                return Some(GameWinInfo {
                    game_win_round_index: win_point.0,
                    game_win_roll_index: win_point.1,
                    payout,
                    zen,
                });
            }
        }
        (self.state.round_index >= self.config.max_rounds).then(GameWinInfo::no_winner)
    }

    /// Registration indices of the winning players; empty until resolved or
    /// for a no-winner outcome.
    pub fn winners(&self) -> &[usize] {
        if self.phase == GamePhase::Resolved && self.win_info.is_some_and(|info| info.has_winner())
        {
            &self.winners
        } else {
            &[]
        }
    }

    /// The fixed outcome, once resolved.
    pub fn win_info(&self) -> Option<GameWinInfo> {
        self.win_info
    }

    /// Recent rolls, oldest-to-newest, as `(player_index, roll)`.
    pub fn recent_rolls(&self) -> Vec<(usize, RollData)> {
        self.recent_rolls.to_vec()
    }
}

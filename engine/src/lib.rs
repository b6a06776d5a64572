//! Daruma match engine.
//!
//! This crate contains the deterministic game core: the seeded dice RNG, the
//! round simulator, the per-channel player roster, the round state machine,
//! and the adaptive cooldown factory.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside the engine.
//! - Do not use ambient randomness; all randomness derives from the match
//!   seed handed to [`DarumaGame::start`].
//! - Avoid iteration order of hash-based collections influencing outputs
//!   (the roster is a plain insertion-ordered list for this reason).
//!
//! ## Concurrency model
//! One engine instance serves one channel's match and is driven by a single
//! logical flow. There is no internal locking; concurrent matches are
//! independent instances.
//!
//! The primary entrypoint is [`DarumaGame`].

pub mod cooldown;
pub mod dice;
pub mod game;
pub mod manager;
pub mod player;
pub mod ring;
pub mod rng;

pub use cooldown::compute_next_cooldown;
pub use dice::complete_game_for_player;
pub use game::{DarumaGame, GameError, GamePhase, GameRoundState, TickOutcome};
pub use manager::PlayerManager;
pub use player::Player;
pub use ring::CircularBuffer;
pub use rng::GameRng;

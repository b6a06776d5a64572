//! Daruma common types.
//!
//! This crate defines the data model shared by the game engine and its
//! frontends: roll/round records, match outcomes, read-only views of
//! persisted user/asset state, population statistics, and the cooldown
//! tuning tables.
//!
//! Nothing here performs I/O. Persistence, messaging, and chain side effects
//! live in surrounding collaborators that consume and produce these types.

pub mod game;

pub use game::*;

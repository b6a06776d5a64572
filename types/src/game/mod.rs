//! Daruma game domain types.
//!
//! Defines roll/round/match state, record views, and constants used by the
//! engine and clients.

mod config;
mod constants;
mod cooldown;
mod records;
mod rounds;

pub use config::*;
pub use constants::*;
pub use cooldown::*;
pub use records::*;
pub use rounds::*;

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, Score, Side};
pub use tick::{TickEvents, TickInput, tick};

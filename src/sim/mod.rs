//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only comes from the host's frame clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Aabb, BrickContact, skater_brick_contact};
pub use state::{
    Brick, BrickLevel, GameEvent, GamePhase, GameState, Gem, Skater, Snapshot, SpriteView,
};
pub use tick::{TickInput, check_game_over, tick};

//! Deterministic mini-game simulation
//!
//! All gameplay logic for the arcade mini-game lives here. This module must
//! stay pure and deterministic:
//! - Fixed intervals only (the caller owns the timers)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bullets_hitting, within_hit_radius};
pub use state::{Bullet, Enemy, EnemyVariant, GameEvent, GameState, Player};
pub use tick::{TickInput, apply_input, autopilot, tick_motion, tick_spawn};

//! Fixed-interval simulation ticks
//!
//! Two independent loops drive the mini-game: `tick_motion` every
//! `MOTION_DT` and `tick_spawn` every `SPAWN_INTERVAL`.

use glam::Vec2;
use rand::Rng;

use super::collision::bullets_hitting;
use super::state::{EnemyVariant, GameEvent, GameState};
use crate::consts::*;

/// Pointer input gathered between frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Field column the pointer is over
    pub aim_x: Option<f32>,
    /// Shots requested (clicks/taps) since the last apply
    pub fire: u32,
}

/// Apply pending pointer input: aim first, then fire from the new position
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(x) = input.aim_x {
        state.aim(x);
    }
    for _ in 0..input.fire {
        state.fire();
    }
}

/// Advance bullets and enemies by one motion tick.
/// Returns the points awarded during this tick.
pub fn tick_motion(state: &mut GameState) -> u32 {
    state.time_ticks += 1;

    for bullet in &mut state.bullets {
        bullet.pos.y -= bullet.speed;
    }
    state.bullets.retain(|b| b.pos.y > 0.0);

    // Bullets are not consumed by hits, and every bullet in range scores
    // (one event each). Enemies are never culled at the bottom edge, they
    // keep sinking (and keep counting toward the cap).
    let mut awarded = 0;
    let enemies = std::mem::take(&mut state.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());
    for mut enemy in enemies {
        let hits = bullets_hitting(&enemy, &state.bullets);
        if hits.is_empty() {
            enemy.pos.y += enemy.speed;
            survivors.push(enemy);
            continue;
        }
        for _ in &hits {
            state.score += enemy.points as u64;
            awarded += enemy.points;
            state.events.push(GameEvent::EnemyDestroyed {
                id: enemy.id,
                points: enemy.points,
                pos: (enemy.pos.x, enemy.pos.y),
            });
        }
    }
    state.enemies = survivors;

    awarded
}

/// Spawn one enemy at the top if under the cap.
/// Returns the new enemy's id.
pub fn tick_spawn(state: &mut GameState) -> Option<u32> {
    if state.enemies.len() >= MAX_ENEMIES {
        return None;
    }

    let x = SPAWN_X_MIN + state.rng.random::<f32>() * SPAWN_X_SPAN;
    let speed = ENEMY_SPEED_MIN + state.rng.random::<f32>() * ENEMY_SPEED_SPAN;
    let variant = if state.rng.random_bool(FAST_VARIANT_CHANCE) {
        EnemyVariant::Fast
    } else {
        EnemyVariant::Normal
    };

    let id = state.push_enemy(Vec2::new(x, 0.0), speed, variant);
    log::debug!("Spawned enemy {} ({:?}) at x={:.1}", id, variant, x);
    Some(id)
}

/// Demo/idle mode: track the lowest enemy still above the cannon and shoot
/// when lined up. Fires at most every fourth motion tick.
pub fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .iter()
        .filter(|e| e.pos.y < PLAYER_Y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(enemy) = target else {
        return TickInput::default();
    };

    let aligned = (state.player.pos.x - enemy.pos.x).abs() < HIT_RADIUS;
    let fire = if aligned && state.time_ticks.is_multiple_of(4) {
        1
    } else {
        0
    };

    TickInput {
        aim_x: Some(enemy.pos.x),
        fire,
    }
}

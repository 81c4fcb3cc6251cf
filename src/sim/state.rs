//! Mini-game state and entity types
//!
//! Everything here lives for a single mini-game session and is dropped when
//! the mini-game closes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Enemy variant tag (cosmetic: both variants share the same speed range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyVariant {
    #[default]
    Normal,
    Fast,
}

/// The player's cannon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_Y),
        }
    }
}

impl Player {
    /// Move to a field column, clamped to the field
    pub fn aim(&mut self, x: f32) {
        if x.is_finite() {
            self.pos.x = x.clamp(0.0, FIELD_SIZE);
        }
    }
}

/// A bullet travelling up the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Distance travelled per motion tick
    pub speed: f32,
}

/// A falling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Distance descended per motion tick
    pub speed: f32,
    pub points: u32,
    pub variant: EnemyVariant,
}

/// Things that happened during a tick, drained by the owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the cannon
    BulletFired { id: u32 },
    /// A new enemy entered at the top
    EnemySpawned { id: u32, variant: EnemyVariant },
    /// An enemy was shot down and its points awarded
    EnemyDestroyed { id: u32, points: u32, pos: (f32, f32) },
}

/// Complete mini-game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Points scored this session
    pub score: u64,
    /// Motion ticks run so far
    pub time_ticks: u64,
    pub player: Player,
    /// Live bullets (ordered by id)
    pub bullets: Vec<Bullet>,
    /// Live enemies (ordered by id)
    pub enemies: Vec<Enemy>,
    /// Events not yet drained
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Follow the pointer to a field column
    pub fn aim(&mut self, x: f32) {
        self.player.aim(x);
    }

    /// Fire a bullet from the player's current position
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        self.bullets.push(Bullet {
            id,
            pos: self.player.pos,
            speed: BULLET_SPEED,
        });
        self.events.push(GameEvent::BulletFired { id });
        id
    }

    /// Place an enemy directly (spawn tick does this with random parameters)
    pub fn push_enemy(&mut self, pos: Vec2, speed: f32, variant: EnemyVariant) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            speed,
            points: ENEMY_POINTS,
            variant,
        });
        self.events.push(GameEvent::EnemySpawned { id, variant });
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enemies that have sunk past the bottom of the field but are still simulated
    pub fn enemies_below_field(&self) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.pos.y > FIELD_SIZE)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7);
        assert_eq!(state.player.pos, Vec2::new(50.0, 85.0));
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_aim_clamps_to_field() {
        let mut state = GameState::new(7);
        state.aim(130.0);
        assert_eq!(state.player.pos.x, 100.0);
        state.aim(-4.0);
        assert_eq!(state.player.pos.x, 0.0);
        state.aim(f32::NAN);
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.pos.y, PLAYER_Y);
    }

    #[test]
    fn test_fire_spawns_at_player() {
        let mut state = GameState::new(7);
        state.aim(31.0);
        let id = state.fire();
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].id, id);
        assert_eq!(state.bullets[0].pos, Vec2::new(31.0, PLAYER_Y));
        assert_eq!(state.bullets[0].speed, BULLET_SPEED);
        assert_eq!(state.drain_events(), vec![GameEvent::BulletFired { id }]);
        assert!(state.events.is_empty());
    }
}

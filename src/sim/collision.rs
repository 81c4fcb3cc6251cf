//! Bullet/enemy hit detection
//!
//! Entities are points; a hit is any pair closer than `HIT_RADIUS`.

use glam::Vec2;

use super::state::{Bullet, Enemy};
use crate::consts::HIT_RADIUS;

/// True if the two points are strictly closer than the hit radius
#[inline]
pub fn within_hit_radius(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < HIT_RADIUS
}

/// Ids of every bullet within hit range of the enemy, in bullet order.
/// Each one scores separately.
pub fn bullets_hitting(enemy: &Enemy, bullets: &[Bullet]) -> Vec<u32> {
    bullets
        .iter()
        .filter(|b| within_hit_radius(b.pos, enemy.pos))
        .map(|b| b.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EnemyVariant;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            id: 1,
            pos: Vec2::new(x, y),
            speed: 0.5,
            points: 10,
            variant: EnemyVariant::Normal,
        }
    }

    fn bullet_at(id: u32, x: f32, y: f32) -> Bullet {
        Bullet {
            id,
            pos: Vec2::new(x, y),
            speed: 5.0,
        }
    }

    #[test]
    fn test_identical_position_hits() {
        assert!(within_hit_radius(Vec2::new(40.0, 40.0), Vec2::new(40.0, 40.0)));
    }

    #[test]
    fn test_hit_radius_is_exclusive() {
        assert!(!within_hit_radius(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)));
        assert!(within_hit_radius(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.9)));
    }

    #[test]
    fn test_bullets_hitting_lists_all_in_range() {
        let enemy = enemy_at(50.0, 20.0);
        let bullets = [
            bullet_at(1, 10.0, 20.0),
            bullet_at(2, 52.0, 21.0),
            bullet_at(3, 50.0, 20.0),
            bullet_at(4, 50.0, 26.0),
        ];
        assert_eq!(bullets_hitting(&enemy, &bullets), vec![2, 3]);
        assert!(bullets_hitting(&enemy, &bullets[..1]).is_empty());
        assert!(bullets_hitting(&enemy, &[]).is_empty());
    }
}

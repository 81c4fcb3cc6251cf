//! Mini-game scene building
//!
//! Turns the simulation state into NDC triangles. Field coordinates run
//! 0..100 on both axes with y pointing down; the canvas may be any aspect
//! ratio, so sizes are given in field-width units and squashed vertically.

use glam::Vec2;

use super::shapes::{circle, diamond, rect, rect_outline, triangle_up};
use super::vertex::Vertex;
use crate::consts::FIELD_SIZE;
use crate::sim::{EnemyVariant, GameState};
use crate::theme::Palette;

/// Bullet radius in field-width units
const BULLET_RADIUS: f32 = 1.0;
/// Enemy half size
const ENEMY_HALF: f32 = 2.5;
/// Player half size
const PLAYER_HALF: f32 = 3.0;
const BULLET_SEGMENTS: u32 = 12;

/// Canvas-dependent projection from field space to NDC
#[derive(Debug, Clone, Copy)]
pub struct FieldView {
    /// Canvas width / height
    aspect: f32,
}

impl FieldView {
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        Self { aspect }
    }

    /// Field point to NDC (y flipped)
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let half = FIELD_SIZE / 2.0;
        Vec2::new(p.x / half - 1.0, 1.0 - p.y / half)
    }

    /// Field-width length to NDC half extents that stay square on screen
    pub fn extent(&self, size: f32) -> Vec2 {
        let x = size / (FIELD_SIZE / 2.0);
        Vec2::new(x, x * self.aspect)
    }
}

/// Build every triangle for one frame
pub fn build_scene(state: &GameState, palette: &Palette, view: &FieldView) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        3 + state.bullets.len() * (BULLET_SEGMENTS as usize * 3) + state.enemies.len() * 30,
    );

    for enemy in &state.enemies {
        let center = view.to_ndc(enemy.pos);
        let half = view.extent(ENEMY_HALF);
        match enemy.variant {
            EnemyVariant::Normal => {
                vertices.extend(rect_outline(center, half, half * 0.3, palette.enemy));
                vertices.extend(rect(center, half * 0.35, palette.enemy));
            }
            EnemyVariant::Fast => {
                vertices.extend(diamond(center, half * 1.2, palette.enemy_fast));
            }
        }
    }

    for bullet in &state.bullets {
        vertices.extend(circle(
            view.to_ndc(bullet.pos),
            view.extent(BULLET_RADIUS),
            palette.bullet,
            BULLET_SEGMENTS,
        ));
    }

    vertices.extend(triangle_up(
        view.to_ndc(state.player.pos),
        view.extent(PLAYER_HALF),
        palette.player,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_field_corners_map_to_ndc() {
        let view = FieldView::new(800, 400);
        assert_eq!(view.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(view.to_ndc(Vec2::new(100.0, 100.0)), Vec2::new(1.0, -1.0));
        assert_eq!(view.to_ndc(Vec2::new(50.0, 50.0)), Vec2::ZERO);
    }

    #[test]
    fn test_extent_corrects_aspect() {
        let view = FieldView::new(800, 400);
        assert_eq!(view.extent(5.0), Vec2::new(0.1, 0.2));
        assert_eq!(FieldView::new(10, 0).extent(5.0), Vec2::new(0.1, 0.1));
    }

    #[test]
    fn test_scene_contents() {
        let mut state = GameState::new(5);
        let palette = Theme::Quantum.palette();
        let view = FieldView::new(640, 384);

        // Player only
        assert_eq!(build_scene(&state, palette, &view).len(), 3);

        state.fire();
        state.push_enemy(Vec2::new(20.0, 10.0), 0.5, EnemyVariant::Normal);
        state.push_enemy(Vec2::new(70.0, 10.0), 0.5, EnemyVariant::Fast);
        let vertices = build_scene(&state, palette, &view);
        assert_eq!(vertices.len(), 30 + 6 + 36 + 3);

        // Player drawn last, in its colour
        assert_eq!(vertices.last().unwrap().color, palette.player);
    }
}

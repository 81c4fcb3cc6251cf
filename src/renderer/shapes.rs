//! Shape generation for 2D primitives
//!
//! All shapes take a centre and per-axis half extents so the caller can
//! correct for the canvas aspect ratio.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Filled ellipse as a triangle fan (3 vertices per segment)
pub fn circle(center: Vec2, radius: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius.x * theta1.cos(),
            center.y + radius.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius.x * theta2.cos(),
            center.y + radius.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Axis-aligned rectangle (two triangles)
pub fn rect(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = center - half;
    let max = center + half;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Rhombus with corners on the axes (two triangles)
pub fn diamond(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let left = Vec2::new(center.x - half.x, center.y);
    let right = Vec2::new(center.x + half.x, center.y);
    let top = Vec2::new(center.x, center.y + half.y);
    let bottom = Vec2::new(center.x, center.y - half.y);
    vec![
        Vertex::new(left.x, left.y, color),
        Vertex::new(bottom.x, bottom.y, color),
        Vertex::new(right.x, right.y, color),
        Vertex::new(left.x, left.y, color),
        Vertex::new(right.x, right.y, color),
        Vertex::new(top.x, top.y, color),
    ]
}

/// Upward-pointing triangle
pub fn triangle_up(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(center.x - half.x, center.y - half.y, color),
        Vertex::new(center.x + half.x, center.y - half.y, color),
        Vertex::new(center.x, center.y + half.y, color),
    ]
}

/// Square outline of the given thickness (four bars)
pub fn rect_outline(center: Vec2, half: Vec2, thickness: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    // Top and bottom
    vertices.extend(rect(
        Vec2::new(center.x, center.y + half.y - thickness.y / 2.0),
        Vec2::new(half.x, thickness.y / 2.0),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(center.x, center.y - half.y + thickness.y / 2.0),
        Vec2::new(half.x, thickness.y / 2.0),
        color,
    ));
    // Left and right
    vertices.extend(rect(
        Vec2::new(center.x - half.x + thickness.x / 2.0, center.y),
        Vec2::new(thickness.x / 2.0, half.y),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(center.x + half.x - thickness.x / 2.0, center.y),
        Vec2::new(thickness.x / 2.0, half.y),
        color,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::ZERO, Vec2::new(0.5, 0.25), WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            assert!(v.position[0].abs() <= 0.5 + 1e-6);
            assert!(v.position[1].abs() <= 0.25 + 1e-6);
        }
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.25), WHITE);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [0.5, 0.75]);
        assert_eq!(verts[2].position, [1.5, 1.25]);
    }

    #[test]
    fn test_outline_is_four_bars() {
        let verts = rect_outline(Vec2::ZERO, Vec2::ONE, Vec2::splat(0.1), WHITE);
        assert_eq!(verts.len(), 24);
    }
}

//! Drawable path construction for each shape kind.
//!
//! Paths are built in local coordinates around the shape's origin; a renderer
//! translates them by the shape's spawn position and subsequent falls. The y
//! axis grows downward, matching the viewport convention.
use std::f32::consts::TAU;

use glam::Vec2;

use crate::geometry::{bump_radius, BLOB_STEPS};

/// Description of a drawable, either as an explicit vertex list or as a
/// primitive the renderer can materialize directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePath {
    /// Closed outline given by its vertices in drawing order.
    Polygon { vertices: Vec<Vec2> },
    /// Axis-aligned rectangle centered on the origin.
    Rect { half_extents: Vec2 },
    /// Circle centered on the origin.
    Circle { radius: f32 },
    /// Axis-aligned ellipse centered on the origin.
    Ellipse { radii: Vec2 },
}

/// Isosceles triangle with its base on the x axis and apex pointing up.
pub fn triangle(size: f32) -> ShapePath {
    ShapePath::Polygon {
        vertices: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(size, 0.0),
            Vec2::new(size / 2.0, -size),
        ],
    }
}

/// Square of side `size`, centered on the origin.
pub fn centered_rect(size: f32) -> ShapePath {
    ShapePath::Rect {
        half_extents: Vec2::splat(size / 2.0),
    }
}

/// Regular polygon ring with the given circumradius.
///
/// The loop is closed explicitly: the first vertex is revisited at the end,
/// so the vertex list has `sides + 1` entries.
pub fn regular_ring(sides: u32, radius: f32) -> ShapePath {
    debug_assert!(sides >= 3, "a ring needs at least 3 sides");
    let step = TAU / sides as f32;
    let vertices = (0..=sides)
        .map(|i| {
            let theta = i as f32 * step;
            Vec2::new(theta.cos() * radius, theta.sin() * radius)
        })
        .collect();
    ShapePath::Polygon { vertices }
}

/// Irregular bumped outline sampled at `BLOB_STEPS + 1` angles over a full turn.
///
/// The final sample lands back on the first (sin is periodic in the integer
/// bump count), closing the loop the same way [`regular_ring`] does.
pub fn blob(radius: f32, bumps: u32) -> ShapePath {
    let step = TAU / BLOB_STEPS as f32;
    let vertices = (0..=BLOB_STEPS)
        .map(|i| {
            let theta = i as f32 * step;
            let r = bump_radius(radius, bumps, theta);
            Vec2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    ShapePath::Polygon { vertices }
}

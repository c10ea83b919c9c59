//! Shape kinds, drawable path construction, and area computation.
//!
//! Everything here is pure over its inputs; the only randomness is the bump
//! count drawn for [`ShapeKind::Blob`], which comes from the injected
//! [`RngCore`] so that builds are reproducible under a seeded generator.
use rand::rand_core::RngCore;

pub mod area;
pub mod path;

pub use path::ShapePath;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of angular slices used to sample and integrate a blob outline.
pub const BLOB_STEPS: usize = 100;

/// Inclusive bounds for the per-blob bump count.
pub const BLOB_BUMPS_MIN: u32 = 3;
pub const BLOB_BUMPS_MAX: u32 = 7;

/// Relative amplitude of the blob's radial bumps.
pub const BUMP_AMPLITUDE: f32 = 0.3;

/// The closed set of shape kinds the engine can produce.
///
/// The discriminant values are an implementation detail; draw kinds uniformly
/// via [`ShapeKind::ALL`] rather than from any numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Circle,
    Ellipse,
    /// Irregular star-like outline with a randomized bump count.
    Blob,
}

impl ShapeKind {
    /// Every kind, in declaration order. Index with a uniform draw to pick one.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Blob,
    ];
}

/// A drawable path plus the area the engine accounts for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltShape {
    pub path: ShapePath,
    pub area: f32,
}

/// Build the local-origin path and area for a shape of the given kind and size.
///
/// `size` is the characteristic linear dimension of the shape (edge length or
/// diameter depending on kind) and must be positive. The path is centered on
/// the shape's local origin; callers position it via the shape's metadata.
///
/// Note on the polygon kinds: the outline uses `size` as the circumradius
/// while the area formula uses `size / 2`, and the triangle's area does not
/// correspond to its drawn geometry at all. Downstream totals depend on these
/// numbers, so both halves of the discrepancy are kept as-is.
pub fn build_shape(kind: ShapeKind, size: f32, rng: &mut dyn RngCore) -> BuiltShape {
    debug_assert!(size > 0.0, "shape size must be > 0");

    match kind {
        ShapeKind::Triangle => BuiltShape {
            path: path::triangle(size),
            area: area::regular_polygon_area(3, size / 2.0),
        },
        ShapeKind::Square => BuiltShape {
            path: path::centered_rect(size),
            area: size * size,
        },
        ShapeKind::Pentagon => BuiltShape {
            path: path::regular_ring(5, size),
            area: area::regular_polygon_area(5, size / 2.0),
        },
        ShapeKind::Hexagon => BuiltShape {
            path: path::regular_ring(6, size),
            area: area::regular_polygon_area(6, size / 2.0),
        },
        ShapeKind::Circle => BuiltShape {
            path: ShapePath::Circle { radius: size / 2.0 },
            area: area::circle_area(size / 2.0),
        },
        ShapeKind::Ellipse => BuiltShape {
            path: ShapePath::Ellipse {
                radii: glam::Vec2::new(size / 2.0, size / 3.0),
            },
            area: area::ellipse_area(size / 2.0, size / 3.0),
        },
        ShapeKind::Blob => {
            let bumps = draw_bumps(rng);
            BuiltShape {
                path: path::blob(size, bumps),
                area: area::approximate_polar_area(size, bumps, BLOB_STEPS),
            }
        }
    }
}

/// Radius of a bumped outline at angle `theta`.
#[inline]
pub(crate) fn bump_radius(radius: f32, bumps: u32, theta: f32) -> f32 {
    radius * (1.0 + BUMP_AMPLITUDE * (bumps as f32 * theta).sin())
}

/// Draw a bump count uniformly from `[BLOB_BUMPS_MIN, BLOB_BUMPS_MAX]`.
fn draw_bumps(rng: &mut dyn RngCore) -> u32 {
    let span = BLOB_BUMPS_MAX - BLOB_BUMPS_MIN;
    // rand01 can land exactly on 1.0, so cap the offset at the span.
    BLOB_BUMPS_MIN + ((rand01(rng) * (span + 1) as f32) as u32).min(span)
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

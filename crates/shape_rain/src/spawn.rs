//! Randomized shape metadata generation.
//!
//! The generator owns the monotone id sequence instead of leaning on any
//! process-global counter, and all randomness flows through the injected
//! [`RngCore`], so a seeded run reproduces the same stream of metadata.
use glam::Vec2;
use rand::rand_core::RngCore;

use crate::geometry::{rand01, ShapeKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bounds of the uniform size draw, in world units.
pub const SIZE_MIN_DEFAULT: f32 = 30.0;
pub const SIZE_MAX_DEFAULT: f32 = 90.0;

/// Identity of a spawned shape, unique for the lifetime of its generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeId(pub u64);

/// The immutable descriptive record a shape is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeMetadata {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Fill color as 0xRRGGBB.
    pub color: u32,
    /// Characteristic linear dimension (edge length or diameter by kind).
    pub size: f32,
    /// Spawn-time position in viewport coordinates.
    pub position: Vec2,
}

/// Produces randomized [`ShapeMetadata`] with strictly increasing ids.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    next_id: u64,
    size_min: f32,
    size_max: f32,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGenerator {
    /// Generator with the default size range.
    pub fn new() -> Self {
        Self::with_size_range(SIZE_MIN_DEFAULT, SIZE_MAX_DEFAULT)
    }

    /// Generator drawing sizes uniformly from `[size_min, size_max)`.
    pub fn with_size_range(size_min: f32, size_max: f32) -> Self {
        debug_assert!(size_min > 0.0, "size_min must be > 0");
        debug_assert!(size_max > size_min, "size_max must exceed size_min");
        Self {
            next_id: 0,
            size_min,
            size_max,
        }
    }

    /// Generate metadata for one new shape.
    ///
    /// With `spawn` present the position is used verbatim (an explicit spawn,
    /// e.g. from a pointer click). Otherwise `x` is uniform over
    /// `[0, viewport_width)` and `y` sits at `-size`, just above the visible
    /// top edge so the shape falls into view.
    pub fn generate(
        &mut self,
        viewport_width: f32,
        spawn: Option<Vec2>,
        rng: &mut dyn RngCore,
    ) -> ShapeMetadata {
        debug_assert!(viewport_width > 0.0, "viewport_width must be > 0");

        let kind = ShapeKind::ALL[(rng.next_u32() % ShapeKind::ALL.len() as u32) as usize];
        let color = rng.next_u32() & 0xFF_FFFF;
        let size = (self.size_min + rand01(rng) * (self.size_max - self.size_min))
            .clamp(self.size_min, self.size_max.next_down());
        let position = spawn.unwrap_or_else(|| {
            let x = (rand01(rng) * viewport_width).clamp(0.0, viewport_width.next_down());
            Vec2::new(x, -size)
        });

        let id = ShapeId(self.next_id);
        self.next_id += 1;

        ShapeMetadata {
            id,
            kind,
            color,
            size,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut generator = ShapeGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = HashSet::new();
        let mut previous = None;
        for _ in 0..10_000 {
            let meta = generator.generate(800.0, None, &mut rng);
            assert!(seen.insert(meta.id), "duplicate id {:?}", meta.id);
            if let Some(prev) = previous {
                assert!(meta.id > prev);
            }
            previous = Some(meta.id);
        }
    }

    #[test]
    fn draws_stay_in_their_ranges() {
        let mut generator = ShapeGenerator::new();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..2_000 {
            let meta = generator.generate(800.0, None, &mut rng);
            assert!(meta.size >= SIZE_MIN_DEFAULT && meta.size < SIZE_MAX_DEFAULT);
            assert!(meta.color <= 0xFF_FFFF);
            assert!(meta.position.x >= 0.0 && meta.position.x < 800.0);
            assert_eq!(meta.position.y, -meta.size);
        }
    }

    #[test]
    fn every_kind_shows_up_eventually() {
        let mut generator = ShapeGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        let mut kinds = HashSet::new();
        for _ in 0..2_000 {
            kinds.insert(generator.generate(800.0, None, &mut rng).kind);
        }
        assert_eq!(kinds.len(), ShapeKind::ALL.len());
    }

    #[test]
    fn explicit_spawn_position_is_used_verbatim() {
        let mut generator = ShapeGenerator::new();
        let mut rng = StdRng::seed_from_u64(4);

        let at = Vec2::new(123.5, 456.25);
        let meta = generator.generate(800.0, Some(at), &mut rng);
        assert_eq!(meta.position, at);
    }

    #[test]
    fn same_seed_reproduces_the_stream() {
        let mut gen_a = ShapeGenerator::new();
        let mut gen_b = ShapeGenerator::new();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(
                gen_a.generate(800.0, None, &mut rng_a),
                gen_b.generate(800.0, None, &mut rng_b)
            );
        }
    }

    #[test]
    fn custom_size_range_is_respected() {
        let mut generator = ShapeGenerator::with_size_range(5.0, 10.0);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let meta = generator.generate(800.0, None, &mut rng);
            assert!(meta.size >= 5.0 && meta.size < 10.0);
        }
    }
}

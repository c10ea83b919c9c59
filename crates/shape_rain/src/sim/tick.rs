//! The per-tick simulation step.
//!
//! Each tick accumulates elapsed time against the spawn interval, releases any
//! due spawns, integrates the fall of every live shape, and culls what has
//! left the viewport. `dt` is a unitless frame-time multiplier (1.0 at the
//! nominal frame rate), not wall-clock seconds.
use glam::Vec2;
use rand::rand_core::RngCore;
use tracing::debug;

use crate::error::Result;
use crate::geometry::build_shape;
use crate::sim::config::SimConfig;
use crate::sim::instance::ShapeInstance;
use crate::sim::surface::{RenderSurface, SurfaceHandle};
use crate::sim::world::World;
use crate::spawn::{ShapeGenerator, ShapeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ticks between spawns at a spawn rate of 1; the rate is "shapes per
/// `SPAWN_INTERVAL_BASE` ticks".
pub const SPAWN_INTERVAL_BASE: f32 = 60.0;

/// Aggregate statistics over the live shapes, reported every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimStats {
    pub count: usize,
    pub total_area: f32,
}

/// The tick-driven controller owning the generator and the live set.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    gravity: f32,
    spawn_rate: f32,
    spawn_timer: f32,
    generator: ShapeGenerator,
    world: World,
}

impl Simulation {
    /// Creates a simulation after validating the configuration.
    pub fn try_new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Creates a simulation, checking the configuration only in debug builds.
    pub fn new(config: SimConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid simulation configuration"
        );
        Self::from_config(config)
    }

    fn from_config(config: SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            spawn_rate: config.spawn_rate,
            spawn_timer: 0.0,
            generator: ShapeGenerator::with_size_range(config.size_min, config.size_max),
            world: World::new(),
            config,
        }
    }

    /// Advance the simulation by `dt` ticks.
    ///
    /// Spawning is burst-catch-up: when `dt` spans several spawn intervals,
    /// every due spawn is released in this call rather than one per frame.
    /// Culled shapes are permanently removed and their drawables detached.
    pub fn tick(
        &mut self,
        dt: f32,
        rng: &mut impl RngCore,
        surface: &mut dyn RenderSurface,
    ) -> SimStats {
        debug_assert!(dt >= 0.0, "dt must be non-negative");

        self.spawn_timer += dt;
        // A zero rate would make the interval meaningless, so it skips the
        // spawn phase entirely; the timer keeps accumulating and releases the
        // backlog once the rate comes back.
        if self.spawn_rate > 0.0 {
            let interval = SPAWN_INTERVAL_BASE / self.spawn_rate;
            while self.spawn_timer >= interval {
                self.spawn_timer -= interval;
                self.spawn_shape(None, rng, surface);
            }
        }

        // Snapshot the ids up front: culling mutates the registry and must
        // not disturb the traversal.
        let ids: Vec<ShapeId> = self.world.instances().iter().map(|i| i.id()).collect();
        let cull_line = self.config.viewport.y + self.config.cull_margin;
        let mut culled = Vec::new();

        for id in ids {
            let Some(instance) = self.world.instance_mut(id) else {
                continue;
            };
            // Semi-implicit Euler: the position update sees the new velocity.
            instance.vertical_velocity += self.gravity * dt;
            instance.position.y += instance.vertical_velocity * dt;
            surface.move_to(instance.handle, instance.position.into());

            if instance.position.y > cull_line {
                culled.push(instance.handle);
            }
        }

        for handle in culled {
            debug!(?handle, "culling shape below the viewport");
            self.world.remove_by_handle(handle, surface);
        }

        self.stats()
    }

    /// Spawn one shape at an explicit position (e.g. from a pointer click).
    pub fn spawn_at(
        &mut self,
        position: Vec2,
        rng: &mut impl RngCore,
        surface: &mut dyn RenderSurface,
    ) -> ShapeId {
        self.spawn_shape(Some(position), rng, surface)
    }

    /// Remove the shape behind `handle` (e.g. it was clicked).
    ///
    /// Returns `false` when the handle is unknown; that is a benign race with
    /// culling, not an error.
    pub fn remove(&mut self, handle: SurfaceHandle, surface: &mut dyn RenderSurface) -> bool {
        self.world.remove_by_handle(handle, surface)
    }

    fn spawn_shape(
        &mut self,
        spawn: Option<Vec2>,
        rng: &mut dyn RngCore,
        surface: &mut dyn RenderSurface,
    ) -> ShapeId {
        let metadata = self
            .generator
            .generate(self.config.viewport.x, spawn, rng);
        let built = build_shape(metadata.kind, metadata.size, rng);
        let handle = surface.attach(&built.path, metadata.color, metadata.position.into());
        debug!(id = metadata.id.0, kind = ?metadata.kind, "spawned shape");

        let id = metadata.id;
        self.world.insert(ShapeInstance::new(metadata, built, handle));
        id
    }

    /// Current statistics of the live set.
    pub fn stats(&self) -> SimStats {
        SimStats {
            count: self.world.len(),
            total_area: self.world.total_area(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Set the gravity, clamped to be non-negative.
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity.max(0.0);
    }

    /// Step the gravity by `delta` (use a negative delta to decrease).
    pub fn adjust_gravity(&mut self, delta: f32) {
        self.set_gravity(self.gravity + delta);
    }

    pub fn spawn_rate(&self) -> f32 {
        self.spawn_rate
    }

    /// Set the spawn rate, clamped to be non-negative.
    pub fn set_spawn_rate(&mut self, spawn_rate: f32) {
        self.spawn_rate = spawn_rate.max(0.0);
    }

    /// Step the spawn rate by `delta` (use a negative delta to decrease).
    pub fn adjust_spawn_rate(&mut self, delta: f32) {
        self.set_spawn_rate(self.spawn_rate + delta);
    }
}

//! Simulation configuration.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::spawn::{SIZE_MAX_DEFAULT, SIZE_MIN_DEFAULT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::sim::tick::Simulation`].
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimConfig {
    /// Viewport extents in world units; shapes fall along +y.
    pub viewport: Vec2,
    /// Initial downward acceleration per tick of unit delta.
    pub gravity: f32,
    /// Initial spawn rate in shapes per nominal 60 ticks.
    pub spawn_rate: f32,
    /// How far past the bottom edge a shape may fall before it is culled.
    pub cull_margin: f32,
    /// Lower bound of the uniform size draw.
    pub size_min: f32,
    /// Exclusive upper bound of the uniform size draw.
    pub size_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(800.0, 600.0),
            gravity: 1.0,
            spawn_rate: 1.0,
            cull_margin: 100.0,
            size_min: SIZE_MIN_DEFAULT,
            size_max: SIZE_MAX_DEFAULT,
        }
    }
}

impl SimConfig {
    /// Creates a new [`SimConfig`] with the specified viewport extents.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Sets the initial gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the initial spawn rate.
    pub fn with_spawn_rate(mut self, spawn_rate: f32) -> Self {
        self.spawn_rate = spawn_rate;
        self
    }

    /// Sets the cull margin below the viewport.
    pub fn with_cull_margin(mut self, cull_margin: f32) -> Self {
        self.cull_margin = cull_margin;
        self
    }

    /// Sets the size draw bounds.
    pub fn with_size_range(mut self, size_min: f32, size_max: f32) -> Self {
        self.size_min = size_min;
        self.size_max = size_max;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "viewport must be > 0 in both components".into(),
            ));
        }
        if self.gravity < 0.0 {
            return Err(Error::InvalidConfig("gravity must be >= 0".into()));
        }
        if self.spawn_rate < 0.0 {
            return Err(Error::InvalidConfig("spawn_rate must be >= 0".into()));
        }
        if self.cull_margin < 0.0 {
            return Err(Error::InvalidConfig("cull_margin must be >= 0".into()));
        }
        if self.size_min <= 0.0 || self.size_max <= self.size_min {
            return Err(Error::InvalidConfig(
                "size range must be positive and non-empty".into(),
            ));
        }

        Ok(())
    }
}

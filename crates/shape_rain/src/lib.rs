#![forbid(unsafe_code)]
//! shape_rain: procedural 2D shapes, their areas, and a gravity-driven fall simulation.
//!
//! Modules:
//! - geometry: shape kinds, drawable path construction, exact and approximated areas
//! - spawn: randomized shape metadata with owned id sequencing
//! - sim: the tick-driven simulation (config, instance registry, render boundary, stepping)
//!
//! The crate produces shape descriptions and numeric state only; turning those
//! into pixels is the job of an external renderer implementing
//! [`sim::surface::RenderSurface`].
pub mod error;
pub mod geometry;
pub mod sim;
pub mod spawn;

/// Convenient re-exports for common types. Import with `use shape_rain::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{build_shape, BuiltShape, ShapeKind, ShapePath};
    pub use crate::sim::config::SimConfig;
    pub use crate::sim::instance::ShapeInstance;
    pub use crate::sim::surface::{
        HeadlessSurface, RecordingSurface, RenderSurface, SurfaceCommand, SurfaceHandle,
    };
    pub use crate::sim::tick::{SimStats, Simulation};
    pub use crate::sim::world::World;
    pub use crate::spawn::{ShapeGenerator, ShapeId, ShapeMetadata};
}

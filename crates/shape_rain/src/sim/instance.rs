//! A live spawned shape.
use glam::Vec2;

use crate::geometry::{BuiltShape, ShapePath};
use crate::sim::surface::SurfaceHandle;
use crate::spawn::{ShapeId, ShapeMetadata};

/// One live shape: immutable metadata and geometry, plus the state that
/// mutates while it falls.
///
/// Kind, color, and size never change after creation; only `position.y` and
/// `vertical_velocity` do.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub metadata: ShapeMetadata,
    /// Local-origin drawable description, kept for re-rendering and tooling.
    pub path: ShapePath,
    /// Area computed once at creation from the metadata.
    pub area: f32,
    /// Current logical position; starts at the spawn position.
    pub position: Vec2,
    /// Downward velocity, integrated by the simulation tick.
    pub vertical_velocity: f32,
    /// Handle of the drawable the rendering collaborator owns for this shape.
    pub handle: SurfaceHandle,
}

impl ShapeInstance {
    pub fn new(metadata: ShapeMetadata, built: BuiltShape, handle: SurfaceHandle) -> Self {
        debug_assert!(built.area >= 0.0, "area must be non-negative");
        Self {
            position: metadata.position,
            metadata,
            path: built.path,
            area: built.area,
            vertical_velocity: 0.0,
            handle,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.metadata.id
    }
}

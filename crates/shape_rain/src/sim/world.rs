//! Registry of live shape instances.
use tracing::trace;

use crate::sim::instance::ShapeInstance;
use crate::sim::surface::{RenderSurface, SurfaceHandle};
use crate::spawn::ShapeId;

/// The ordered collection of live shapes.
///
/// Insertion order is kept for deterministic iteration; aggregates are
/// recomputed from the live set on every query so they can never go stale.
#[derive(Debug, Clone, Default)]
pub struct World {
    instances: Vec<ShapeInstance>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly built instance.
    pub fn insert(&mut self, instance: ShapeInstance) {
        debug_assert!(
            !self.instances.iter().any(|i| i.id() == instance.id()),
            "duplicate shape id {:?}",
            instance.id()
        );
        debug_assert!(
            !self.instances.iter().any(|i| i.handle == instance.handle),
            "duplicate surface handle {:?}",
            instance.handle
        );
        self.instances.push(instance);
    }

    /// Remove the instance whose drawable matches `handle`, detaching the
    /// drawable from the surface.
    ///
    /// Returns `false` without side effects when no instance matches, so a
    /// second click racing a cull needs no special casing.
    pub fn remove_by_handle(
        &mut self,
        handle: SurfaceHandle,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let Some(index) = self.instances.iter().position(|i| i.handle == handle) else {
            return false;
        };

        surface.detach(handle);
        let removed = self.instances.remove(index);
        trace!(id = removed.id().0, "removed shape");
        true
    }

    /// The live instances in insertion order.
    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub(crate) fn instance_mut(&mut self, id: ShapeId) -> Option<&mut ShapeInstance> {
        self.instances.iter_mut().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Sum of the areas of every live instance.
    pub fn total_area(&self) -> f32 {
        self.instances.iter().map(|i| i.area).sum()
    }
}

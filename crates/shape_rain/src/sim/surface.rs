//! The boundary to the external rendering collaborator.
//!
//! The engine never draws pixels. It hands a [`RenderSurface`] a path, a fill
//! color, and a spawn position, and gets back an opaque [`SurfaceHandle`] for
//! the drawable the surface materialized. Position updates and teardown flow
//! through the same handle. Positions cross the boundary as [`mint`] vectors
//! so renderers are not tied to this crate's math library.
use mint::Vector2;

use crate::geometry::ShapePath;

/// Opaque identifier for a drawable owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceHandle(pub u64);

/// A rendering collaborator that materializes and maintains drawables.
pub trait RenderSurface {
    /// Materialize a drawable for a newly spawned shape and return its handle.
    ///
    /// Handles must be unique among the drawables currently attached; the
    /// engine uses them for identity-based removal.
    fn attach(&mut self, path: &ShapePath, color: u32, position: Vector2<f32>) -> SurfaceHandle;

    /// Reflect a logical position change of an attached drawable.
    fn move_to(&mut self, handle: SurfaceHandle, position: Vector2<f32>);

    /// Destroy the drawable behind `handle`. Unknown handles are ignored.
    fn detach(&mut self, handle: SurfaceHandle);
}

/// A command the engine issued to a surface, as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Attach {
        handle: SurfaceHandle,
        color: u32,
        position: Vector2<f32>,
        path: ShapePath,
    },
    MoveTo {
        handle: SurfaceHandle,
        position: Vector2<f32>,
    },
    Detach {
        handle: SurfaceHandle,
    },
}

/// Surface that issues handles but discards every command.
///
/// The collaborator of choice for headless runs and benches.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    next_handle: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for HeadlessSurface {
    fn attach(&mut self, _path: &ShapePath, _color: u32, _position: Vector2<f32>) -> SurfaceHandle {
        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn move_to(&mut self, _handle: SurfaceHandle, _position: Vector2<f32>) {}

    fn detach(&mut self, _handle: SurfaceHandle) {}
}

/// Surface that records every command for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<SurfaceCommand> {
        self.commands
    }

    pub fn as_slice(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSurface for RecordingSurface {
    fn attach(&mut self, path: &ShapePath, color: u32, position: Vector2<f32>) -> SurfaceHandle {
        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        self.commands.push(SurfaceCommand::Attach {
            handle,
            color,
            position,
            path: path.clone(),
        });
        handle
    }

    fn move_to(&mut self, handle: SurfaceHandle, position: Vector2<f32>) {
        self.commands.push(SurfaceCommand::MoveTo { handle, position });
    }

    fn detach(&mut self, handle: SurfaceHandle) {
        self.commands.push(SurfaceCommand::Detach { handle });
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn headless_surface_issues_sequential_handles() {
        let mut surface = HeadlessSurface::new();
        let path = ShapePath::Circle { radius: 10.0 };
        let a = surface.attach(&path, 0xFF0000, Vec2::ZERO.into());
        let b = surface.attach(&path, 0x00FF00, Vec2::ZERO.into());
        assert_ne!(a, b);
        assert_eq!(a, SurfaceHandle(0));
        assert_eq!(b, SurfaceHandle(1));
    }

    #[test]
    fn recording_surface_captures_the_command_stream() {
        let mut surface = RecordingSurface::new();
        let path = ShapePath::Circle { radius: 5.0 };

        let handle = surface.attach(&path, 0x123456, Vec2::new(10.0, 20.0).into());
        surface.move_to(handle, Vec2::new(10.0, 25.0).into());
        surface.detach(handle);

        let commands = surface.as_slice();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            SurfaceCommand::Attach { color: 0x123456, .. }
        ));
        assert!(
            matches!(&commands[1], SurfaceCommand::MoveTo { position, .. } if position.y == 25.0)
        );
        assert_eq!(commands[2], SurfaceCommand::Detach { handle });
    }

    #[test]
    fn clear_empties_the_log_but_keeps_handle_sequence() {
        let mut surface = RecordingSurface::new();
        let path = ShapePath::Circle { radius: 5.0 };
        let a = surface.attach(&path, 0, Vec2::ZERO.into());
        surface.clear();
        assert!(surface.is_empty());
        let b = surface.attach(&path, 0, Vec2::ZERO.into());
        assert_ne!(a, b);
    }
}

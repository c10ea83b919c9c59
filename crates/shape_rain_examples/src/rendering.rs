//! Shared helpers for the example binaries: tracing setup and a small
//! software rasterizer that dumps a simulation frame to PNG.
//!
//! The rasterizer is intentionally naive (per-pixel point-in-shape tests over
//! each shape's bounding box); it exists to make example output visible, not
//! to be fast.
use std::path::Path;

use glam::Vec2;
use image::{ImageBuffer, Rgb};
use shape_rain::geometry::ShapePath;
use shape_rain::sim::world::World;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// How to map a simulation viewport onto an output image.
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Viewport extents in world units.
    pub viewport: Vec2,
    /// Background color.
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), viewport: Vec2) -> Self {
        Self {
            image_size,
            viewport,
            background: [238, 238, 238],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

/// Rasterize every live shape into a PNG at `out_path`.
pub fn render_world_to_png(
    world: &World,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size;
    let scale = Vec2::new(
        width as f32 / config.viewport.x,
        height as f32 / config.viewport.y,
    );
    let mut image = ImageBuffer::from_pixel(width, height, Rgb(config.background));

    for instance in world.instances() {
        let color = rgb_bytes(instance.metadata.color);
        let (local_min, local_max) = path_bounds(&instance.path);

        let min_px = (instance.position + local_min) * scale;
        let max_px = (instance.position + local_max) * scale;
        let x0 = min_px.x.floor().max(0.0) as u32;
        let y0 = min_px.y.floor().max(0.0) as u32;
        let x1 = (max_px.x.ceil() as i64).clamp(0, width as i64 - 1) as u32;
        let y1 = (max_px.y.ceil() as i64).clamp(0, height as i64 - 1) as u32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let world_point = Vec2::new(
                    (px as f32 + 0.5) / scale.x,
                    (py as f32 + 0.5) / scale.y,
                );
                let local = world_point - instance.position;
                if contains_local(&instance.path, local) {
                    image.put_pixel(px, py, Rgb(color));
                }
            }
        }
    }

    image.save(out_path.as_ref())?;
    Ok(())
}

fn rgb_bytes(color: u32) -> [u8; 3] {
    [
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    ]
}

/// Axis-aligned bounds of a path in its local coordinates.
fn path_bounds(path: &ShapePath) -> (Vec2, Vec2) {
    match path {
        ShapePath::Polygon { vertices } => {
            let mut min = Vec2::splat(f32::MAX);
            let mut max = Vec2::splat(f32::MIN);
            for v in vertices {
                min = min.min(*v);
                max = max.max(*v);
            }
            (min, max)
        }
        ShapePath::Rect { half_extents } => (-*half_extents, *half_extents),
        ShapePath::Circle { radius } => (Vec2::splat(-radius), Vec2::splat(*radius)),
        ShapePath::Ellipse { radii } => (-*radii, *radii),
    }
}

/// Point-in-shape test in the path's local coordinates.
fn contains_local(path: &ShapePath, p: Vec2) -> bool {
    match path {
        ShapePath::Polygon { vertices } => polygon_contains(vertices, p),
        ShapePath::Rect { half_extents } => {
            p.x.abs() <= half_extents.x && p.y.abs() <= half_extents.y
        }
        ShapePath::Circle { radius } => p.length_squared() <= radius * radius,
        ShapePath::Ellipse { radii } => {
            let n = p / *radii;
            n.length_squared() <= 1.0
        }
    }
}

/// Even-odd ray casting over a closed vertex loop.
fn polygon_contains(vertices: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            if p.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

//! A scripted pointer session against a recording surface: spawn shapes at
//! "click" positions, remove one by its drawable handle, tick a few frames,
//! and dump the command stream the renderer would have received.
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_rain::prelude::*;
use shape_rain_examples::{init_tracing, render_world_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let viewport = Vec2::new(800.0, 600.0);
    let config = SimConfig::new(viewport)
        .with_spawn_rate(0.0)
        .with_gravity(0.5);
    let mut sim = Simulation::try_new(config)?;

    let mut rng = StdRng::seed_from_u64(11);
    let mut surface = RecordingSurface::new();

    // Three clicks on the background spawn three shapes.
    let clicks = [
        Vec2::new(150.0, 120.0),
        Vec2::new(400.0, 80.0),
        Vec2::new(650.0, 200.0),
    ];
    for click in clicks {
        let id = sim.spawn_at(click, &mut rng, &mut surface);
        info!(id = id.0, x = click.x, y = click.y, "spawned at click");
    }

    // A click on the middle shape removes it; a second click on the same
    // drawable is a quiet no-op.
    let clicked = sim.world().instances()[1].handle;
    info!(removed = sim.remove(clicked, &mut surface), "first click");
    info!(removed = sim.remove(clicked, &mut surface), "second click");

    // Short enough that the survivors are still on screen for the frame dump.
    for _ in 0..30 {
        sim.tick(1.0, &mut rng, &mut surface);
    }
    let stats = sim.stats();
    info!(
        live = stats.count,
        total_area = stats.total_area,
        "after 30 ticks"
    );

    let (mut attaches, mut moves, mut detaches) = (0usize, 0usize, 0usize);
    for command in surface.as_slice() {
        match command {
            SurfaceCommand::Attach { .. } => attaches += 1,
            SurfaceCommand::MoveTo { .. } => moves += 1,
            SurfaceCommand::Detach { .. } => detaches += 1,
        }
    }
    info!(attaches, moves, detaches, "surface command stream");

    let rc = RenderConfig::new((800, 600), viewport);
    let out = "rain-pointer-session.png";
    render_world_to_png(sim.world(), &rc, out)?;
    info!(out, "wrote final frame");

    Ok(())
}

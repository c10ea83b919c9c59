use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_rain::prelude::*;
use shape_rain_examples::{init_tracing, render_world_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A gentle rain: frequent spawns, quarter gravity so the frame fills up.
    let viewport = Vec2::new(800.0, 600.0);
    let config = SimConfig::new(viewport)
        .with_spawn_rate(6.0)
        .with_gravity(0.25);
    let mut sim = Simulation::try_new(config)?;

    let mut rng = StdRng::seed_from_u64(2025);
    let mut surface = HeadlessSurface::new();

    for tick_index in 1..=600u32 {
        let stats = sim.tick(1.0, &mut rng, &mut surface);
        if tick_index % 100 == 0 {
            info!(
                tick = tick_index,
                live = stats.count,
                total_area = stats.total_area,
                "simulation progress"
            );
        }
    }

    let rc = RenderConfig::new((800, 600), viewport).with_background([26, 26, 26]);
    let out = "rain-basic.png";
    render_world_to_png(sim.world(), &rc, out)?;
    info!(out, "wrote final frame");

    Ok(())
}

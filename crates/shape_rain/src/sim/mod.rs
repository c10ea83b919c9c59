//! The tick-driven simulation: configuration, the live-instance registry, the
//! render-surface boundary, and the per-tick stepping logic.
//!
//! Everything runs single-threaded and cooperatively: the host invokes one
//! [`tick::Simulation::tick`] per display frame, and pointer-driven spawns and
//! removals execute between ticks on the same logical thread.
pub mod config;
pub mod instance;
pub mod surface;
pub mod tick;
pub mod world;

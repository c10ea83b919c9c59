#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_world_to_png, RenderConfig};

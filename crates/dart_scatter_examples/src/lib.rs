#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{render_panels_to_png, render_points_to_png, Panel, RenderConfig};
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber so the samplers' logs reach stderr.
///
/// Honours `RUST_LOG`; defaults to `info`. Calling it more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

use dart_scatter::prelude::*;
use dart_scatter_examples::{init_tracing, render_panels_to_png, Panel, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Both panels share one canvas size
    let domain = Domain::new(960.0, 500.0);
    let mut rng = StdRng::seed_from_u64(42);

    // Top: Mitchell's best candidate, 500 points with 30 samples each
    let best = best_candidate(500, 30, domain, &mut rng)?;

    // Bottom: Poisson disc with r = 15 and k = 30
    let poisson = poisson_disc(15.0, 30, domain, &mut rng)?;

    let config = RenderConfig::new((960, 500), domain);
    render_panels_to_png(
        &[
            Panel {
                points: &best,
                config: config.clone(),
            },
            Panel {
                points: &poisson,
                config: config.with_background([245, 245, 245]),
            },
        ],
        "samplers-best-candidate-vs-poisson.png",
    )?;

    info!(
        "Best candidate: {} points | poisson disc: {} points.",
        best.len(),
        poisson.len()
    );
    Ok(())
}

use dart_scatter::prelude::*;
use dart_scatter_examples::{init_tracing, render_panels_to_png, Panel, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let domain = Domain::new(100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(42);

    // Poisson first so the white-noise panel gets the same number of points
    let run = PoissonDiscSampling::new(4.0)
        .sampler(domain)?
        .run(&mut rng);
    let uniform = UniformRandomSampling::new(run.points.len()).generate(domain, &mut rng)?;

    let config = RenderConfig::new((600, 600), domain)
        .with_background([26, 28, 35])
        .with_color([240, 235, 200]);
    render_panels_to_png(
        &[
            Panel {
                points: &uniform,
                config: config.clone(),
            },
            Panel {
                points: &run.points,
                config,
            },
        ],
        "samplers-uniform-vs-poisson.png",
    )?;

    info!(
        "Uniform vs poisson: {} points | {} candidates | {} outside | {} too close.",
        run.points.len(),
        run.candidates_generated,
        run.rejected_outside,
        run.rejected_too_close
    );
    Ok(())
}

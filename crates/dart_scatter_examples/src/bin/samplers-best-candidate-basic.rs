use dart_scatter::prelude::*;
use dart_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let domain = Domain::new(960.0, 500.0);
    let mut rng = StdRng::seed_from_u64(7);

    let points = BestCandidateSampling::new(1000, 50).generate(domain, &mut rng)?;

    let config = RenderConfig::new((960, 500), domain);
    render_points_to_png(&points, &config, "samplers-best-candidate-basic.png")?;
    Ok(())
}

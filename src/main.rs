//! Headless driver: seeds a founding organism and runs the tick loop,
//! logging the population as it goes.
//!
//! Usage: `biosim [PARAMS.json] [GENERATIONS]`

use biosim::error::Result;
use biosim::simulation::ecosystem::{Simulation, Snapshot};
use biosim::simulation::environment::Environment;
use biosim::simulation::organism::OrganismSettings;
use biosim::simulation::params::Params;
use biosim::simulation::runner::{Runner, generation_count};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("biosim=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (params, rest) = match args.split_first() {
        Some((path, rest)) if path.ends_with(".json") => (Params::load_from_file(path)?, rest),
        _ => (Params::default(), args.as_slice()),
    };
    let target = match rest.first() {
        Some(raw) => generation_count(raw.parse::<f64>().unwrap_or(f64::NAN))?,
        None => 200,
    };

    let mut simulation = Simulation::new(params.clone())?;
    let mut snapshot = Snapshot::new(Environment::default());
    simulation.create_organism(&mut snapshot, &OrganismSettings::default());

    let mut runner = Runner::new(&params);
    runner.set_speed(params.max_speed);
    runner.start();

    let mut last_logged = 0;
    while snapshot.generation < u64::from(target) && snapshot.population() > 0 {
        snapshot = runner.drive(&mut simulation, &snapshot, FRAME_DT);
        if snapshot.generation >= last_logged + 10 {
            last_logged = snapshot.generation;
            let stats = simulation.last_stats();
            tracing::info!(
                "generation {}: {} organisms (births {}, deaths {}), deepest lineage {}",
                snapshot.generation,
                snapshot.population(),
                stats.births,
                stats.deaths(),
                snapshot.max_generation()
            );
        }
    }
    runner.stop();

    tracing::info!(
        "finished at generation {} with {} organisms",
        snapshot.generation,
        snapshot.population()
    );
    Ok(())
}

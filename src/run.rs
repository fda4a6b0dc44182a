//! Running a simulation and saving the result.

use crate::{
    config::SimulationConfig,
    io,
    projectile::{self, Simulation},
};
use anyhow::Result;
use std::time::Instant;

/// Runs the projectile simulation with the given configuration and writes
/// the resulting canvas as a PPM image to the configured output path.
pub fn run(config: &SimulationConfig) -> Result<Simulation> {
    let start_time = Instant::now();

    let simulation = projectile::simulate(config)?;

    log::info!(
        "Simulated {} ticks in {:.3} s ({})",
        simulation.tick_count,
        start_time.elapsed().as_secs_f64(),
        if simulation.landed {
            "projectile landed"
        } else {
            "tick limit reached"
        }
    );

    io::write_buffered(&config.output_path, |writer| {
        simulation.canvas.write_ppm(writer)
    })?;

    log::info!("Wrote image to {}", config.output_path.display());

    Ok(simulation)
}

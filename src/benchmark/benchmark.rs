use std::time::Instant;

use tracing::info;

use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{Parameters, UpdateOrder};
use crate::simulation::registry::{BodyRegistry, NewBody, RegistryError};
use crate::simulation::states::{NVec2, Rgb};
use crate::simulation::step::advance;

const FRAME_DT: f64 = 1.0 / 60.0;

/// Helper to build a registry of size `n` on deterministic positions
fn make_registry(n: usize) -> Result<BodyRegistry, RegistryError> {
    let bodies = (0..n).map(|i| {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        NewBody {
            name: format!("body{i}"),
            radius: 2.0,
            color: Rgb::new(255, 255, 255),
            x: NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0),
            m: 1.0e10,
            v: NVec2::zeros(),
        }
    });

    BodyRegistry::from_bodies(bodies)
}

fn make_params(update: UpdateOrder) -> Parameters {
    Parameters {
        eps2: 1.0,
        update,
        ..Parameters::default()
    }
}

fn make_forces(params: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: params.G,
        eps2: params.eps2,
    })
}

/// Average seconds per `advance` call over `steps` frames
fn time_advance(n: usize, update: UpdateOrder, steps: usize) -> Result<f64, RegistryError> {
    let mut registry = make_registry(n)?;
    let params = make_params(update);
    let forces = make_forces(&params);

    // Warm-up
    advance(&mut registry, &forces, &params, FRAME_DT);

    let t0 = Instant::now();
    for _ in 0..steps {
        advance(&mut registry, &forces, &params, FRAME_DT);
    }
    Ok(t0.elapsed().as_secs_f64() / steps as f64)
}

/// Compare both update orders for a handful of sizes
pub fn bench_advance() -> Result<(), RegistryError> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 5;

    for n in ns {
        let sequential = time_advance(n, UpdateOrder::Sequential, steps)?;
        let synchronized = time_advance(n, UpdateOrder::Synchronized, steps)?;
        info!(n, sequential_s = sequential, synchronized_s = synchronized, "advance");
    }
    Ok(())
}

/// Benchmark `advance` for a range of n
/// Paste output directly into excel to graph
pub fn bench_advance_curve() -> Result<(), RegistryError> {
    println!("N,sequential_ms,synchronized_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let ms_seq = time_advance(n, UpdateOrder::Sequential, steps)? * 1000.0;
        let ms_sync = time_advance(n, UpdateOrder::Synchronized, steps)? * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_sync);
    }
    Ok(())
}

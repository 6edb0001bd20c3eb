//! One physics pass over the registry
//!
//! For every body: evaluate the acceleration terms against the whole
//! registry, then integrate. The registry length is fixed for the whole
//! pass; queued commands are applied by the caller before or after it.

use super::forces::AccelSet;
use super::integrator::sanitize_dt;
use super::params::{Parameters, UpdateOrder};
use super::registry::BodyRegistry;
use super::states::NVec2;

/// Advance every body in `registry` by `dt` seconds
///
/// `UpdateOrder::Sequential` computes and applies motion body by body, so a
/// body later in the registry sees the bodies before it already moved.
/// `UpdateOrder::Synchronized` evaluates every acceleration from the
/// pre-step state first. Returns the step actually taken.
pub fn advance(registry: &mut BodyRegistry, forces: &AccelSet, params: &Parameters, dt: f64) -> f64 {
    let dt = sanitize_dt(dt);
    let bodies = registry.bodies_mut();
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return dt;
    }

    match params.update {
        UpdateOrder::Sequential => {
            for i in 0..n {
                let a = forces.accumulate(&bodies[i], &*bodies);
                let b = &mut bodies[i];
                b.set_acceleration(a);
                b.apply_motion(dt, params.velocity_update);
            }
        }
        UpdateOrder::Synchronized => {
            // a_n for every body from x_n
            let mut accels = vec![NVec2::zeros(); n];
            for (a, b) in accels.iter_mut().zip(bodies.iter()) {
                *a = forces.accumulate(b, &*bodies);
            }

            for (b, a) in bodies.iter_mut().zip(accels) {
                b.set_acceleration(a);
                b.apply_motion(dt, params.velocity_update);
            }
        }
    }

    dt
}

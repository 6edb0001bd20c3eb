//! Fixed-step explicit integrator for the gravity system
//!
//! Semi-implicit Euler: position moves with the current velocity, then the
//! velocity takes the acceleration. With [`VelocityUpdate::Unscaled`] the
//! acceleration is added as-is, so the dynamics depend on the frame rate.

use super::params::VelocityUpdate;
use super::states::NVec2;

/// Advance one (position, velocity) pair by `dt`
/// Returns the new position and velocity
pub fn euler_step(x: NVec2, v: NVec2, a: NVec2, dt: f64, mode: VelocityUpdate) -> (NVec2, NVec2) {
    // x_n+1 = x_n + dt * v_n
    let x_next = x + v * dt;

    // v_n+1 = v_n + a_n   (or v_n + dt * a_n)
    let v_next = match mode {
        VelocityUpdate::Unscaled => v + a,
        VelocityUpdate::Scaled => v + a * dt,
    };

    (x_next, v_next)
}

/// Clamp a frame time to a usable step: negative or non-finite becomes 0
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

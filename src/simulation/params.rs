//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and softening (`G`, `eps2`),
//! - the order in which bodies are updated within one frame,
//! - how acceleration is folded into velocity

use serde::Deserialize;

/// Gravitational constant in SI units
pub const GRAV_CONST: f64 = 6.6743e-11;

/// Order of force evaluation and motion within one frame
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Compute and apply per body; later bodies see earlier bodies already moved
    #[default]
    #[serde(rename = "sequential")]
    Sequential,

    /// Compute every acceleration from the pre-step state, then move all bodies
    #[serde(rename = "synchronized")]
    Synchronized,
}

/// How the acceleration enters the velocity update
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VelocityUpdate {
    /// v += a, independent of the frame time
    #[default]
    #[serde(rename = "unscaled")]
    Unscaled,

    /// v += a * dt
    #[serde(rename = "scaled")]
    Scaled,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 keeps the unsoftened inverse-square law
    pub update: UpdateOrder,
    pub velocity_update: VelocityUpdate,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAV_CONST,
            eps2: 0.0,
            update: UpdateOrder::default(),
            velocity_update: VelocityUpdate::default(),
        }
    }
}

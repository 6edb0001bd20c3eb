//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and integration options
//! - [`ViewConfig`]       – window and camera settings
//! - [`BodyConfig`]       – initial state and appearance of each object
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in two object scenario written out in full:
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11               # gravitational constant
//!   eps2: 0.0                   # softening, 0 = plain inverse-square
//!   update: "sequential"        # or "synchronized"
//!   velocity_update: "unscaled" # or "scaled"
//!
//! view:
//!   width: 1000.0
//!   height: 800.0
//!   move_speed: 60.0            # camera pan per key press
//!
//! bodies:
//!   - name: obj1
//!     radius: 15.0
//!     color: [50, 100, 255]
//!     x: [500.0, 500.0]
//!     v: [0.0, 25.0]
//!     m: 1.0e13
//!   - name: obj2
//!     radius: 15.0
//!     color: [255, 0, 255]
//!     x: [800.0, 600.0]
//!     v: [0.0, -25.0]
//!     m: 1.0e13
//! ```
//!
//! Every section except `bodies` may be omitted and falls back to the values above.

use serde::Deserialize;

use crate::simulation::params::{Parameters, UpdateOrder, VelocityUpdate, GRAV_CONST};
use crate::simulation::registry::NewBody;
use crate::simulation::states::{NVec2, Rgb};

pub const MOVE_SPEED_MIN: f32 = 10.0;
pub const MOVE_SPEED_MAX: f32 = 100.0;

/// Global physical parameters and integration options
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,       // gravitational constant
    pub eps2: f64,    // softening - prevent singular forces at very small separations
    pub update: UpdateOrder, // per-body sequential or synchronized update
    pub velocity_update: VelocityUpdate, // whether dt scales the velocity kick
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAV_CONST,
            eps2: 0.0,
            update: UpdateOrder::default(),
            velocity_update: VelocityUpdate::default(),
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Self {
            G: cfg.G,
            eps2: cfg.eps2.max(0.0),
            update: cfg.update,
            velocity_update: cfg.velocity_update,
        }
    }
}

/// Window and camera settings, consumed only by the visualization
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32,      // initial window width in pixels
    pub height: f32,     // initial window height in pixels
    pub move_speed: f32, // camera pan per key press, [10, 100]
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            move_speed: 60.0,
        }
    }
}

impl ViewConfig {
    /// Copy with `move_speed` clamped to the slider range
    pub fn clamped(mut self) -> Self {
        self.move_speed = self.move_speed.clamp(MOVE_SPEED_MIN, MOVE_SPEED_MAX);
        self
    }
}

/// Configuration for a single object's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,       // unique display name
    pub radius: f64,        // display radius, clamped to [1, 50]
    pub color: [i64; 3],    // RGB, each channel clamped to [0, 255]
    pub x: [f64; 2],        // initial position
    #[serde(default)]
    pub v: [f64; 2],        // initial velocity
    pub m: f64,             // mass, clamped to [10, 1e14]
}

impl From<BodyConfig> for NewBody {
    fn from(bc: BodyConfig) -> Self {
        Self {
            name: bc.name,
            radius: bc.radius,
            color: Rgb::from_channels(bc.color[0], bc.color[1], bc.color[2]),
            x: NVec2::new(bc.x[0], bc.x[1]),
            m: bc.m,
            v: NVec2::new(bc.v[0], bc.v[1]),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants and integration options
    #[serde(default)]
    pub view: ViewConfig, // window and camera
    pub bodies: Vec<BodyConfig>, // objects present at start, in drawing order
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

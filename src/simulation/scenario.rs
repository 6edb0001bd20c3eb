//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the object registry seeded at t = 0 (`BodyRegistry`)
//! - active force set (`AccelSet`)
//! - view settings for the window (`ViewConfig`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven once per
//! frame through [`Scenario::frame`]

use bevy::prelude::Resource;

use crate::configuration::config::{ScenarioConfig, ViewConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::registry::{BodyRegistry, CommandReport, NewBody, RegistryError};
use crate::simulation::states::{NVec2, Rgb};
use crate::simulation::step::advance;

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub registry: BodyRegistry,
    pub forces: AccelSet,
    pub view: ViewConfig,
    pub t: f64, // accumulated simulation time
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, RegistryError> {
        // Bodies: map `BodyConfig` -> `NewBody`, validated by the registry
        let registry = BodyRegistry::from_bodies(cfg.bodies.into_iter().map(NewBody::from))?;
        let parameters = Parameters::from(cfg.parameters);
        Ok(Self::with_registry(registry, parameters, cfg.view.clamped()))
    }

    /// The two orbiting objects the simulator starts with when no file is given
    pub fn default_scenario() -> Result<Self, RegistryError> {
        let mass = 1.0e13;
        let speed = 25.0;
        let radius = 15.0;

        let registry = BodyRegistry::from_bodies([
            NewBody {
                name: "obj1".to_string(),
                radius,
                color: Rgb::new(50, 100, 255),
                x: NVec2::new(500.0, 500.0),
                m: mass,
                v: NVec2::new(0.0, speed),
            },
            NewBody {
                name: "obj2".to_string(),
                radius,
                color: Rgb::new(255, 0, 255),
                x: NVec2::new(800.0, 600.0),
                m: mass,
                v: NVec2::new(0.0, -speed),
            },
        ])?;

        Ok(Self::with_registry(registry, Parameters::default(), ViewConfig::default()))
    }

    pub fn with_registry(registry: BodyRegistry, parameters: Parameters, view: ViewConfig) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            registry,
            forces,
            view,
            t: 0.0,
        }
    }

    /// Run one frame: apply queued commands, then one physics pass
    /// Returns the outcome of every command applied this frame
    pub fn frame(&mut self, dt: f64) -> Vec<CommandReport> {
        let reports = self.registry.apply_pending();
        self.t += advance(&mut self.registry, &self.forces, &self.parameters, dt);
        reports
    }
}

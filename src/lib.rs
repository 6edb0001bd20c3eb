pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, ColorChannel, NVec2, Rgb};
pub use simulation::params::{Parameters, UpdateOrder, VelocityUpdate, GRAV_CONST};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::registry::{BodyCommand, BodyEdit, BodyRegistry, CommandApplied, CommandFeedback, CommandReport, NewBody, RegistryError};
pub use simulation::step::advance;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};

pub use visualization::gravsim_vis2d::{camera_transform, draw_order, run_2d};

pub use benchmark::benchmark::{bench_advance, bench_advance_curve};

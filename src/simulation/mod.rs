pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod registry;
pub mod step;
pub mod scenario;

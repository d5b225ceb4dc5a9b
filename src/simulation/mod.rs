pub mod states;
pub mod presets;
pub mod registry;
pub mod integrator;
pub mod selection;

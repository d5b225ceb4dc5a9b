pub mod error;
pub mod simulation;
pub mod configuration;

pub use error::{ConfigError, SelectionError, SelectionResult};

pub use simulation::states::{BodyState, NVec2};
pub use simulation::registry::{ConfigurationIdentity, ConfigurationKind, ConfigurationRegistry, SeedStorage, SlotId, SystemConfiguration};
pub use simulation::integrator::Integrator;
pub use simulation::selection::SelectionController;

pub use configuration::config::{BodyConfig, SessionConfig};

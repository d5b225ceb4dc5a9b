//! Session configuration loaded from YAML.
//!
//! This module defines a thin, `serde`-deserializable description of how a
//! session starts:
//!
//! - [`SessionConfig`] – which system is selected first, and optionally the
//!   template the four orbital systems start from
//! - [`BodyConfig`]    – initial state for one body of that template
//!
//! # YAML format
//!
//! ```yaml
//! initial: trinary-stars      # any catalog name, defaults to sun-planet
//!
//! orbital_template:           # optional, replaces the built-in template
//!   - mass: 200.0
//!     position: [ 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.0 ]
//!   - mass: 10.0
//!     position: [ 150.0, 0.0 ]
//!     velocity: [ 0.0, 120.0 ]
//!     active: true            # optional, defaults to true
//! ```
//!
//! Everything is checked when the controller is built, so a stale name or a
//! negative mass surfaces as an error instead of a silently patched default.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, SelectionResult};
use crate::simulation::registry::{ConfigurationIdentity, ConfigurationRegistry};
use crate::simulation::selection::SelectionController;
use crate::simulation::states::{BodyState, NVec2};

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub mass: f64, // non-negative mass in simulation units
    pub position: [f64; 2], // initial position in simulation length units
    pub velocity: [f64; 2], // initial velocity in simulation velocity units
    #[serde(default = "default_active")]
    pub active: bool, // whether the body starts in the simulation
}

fn default_active() -> bool {
    true
}

impl BodyConfig {
    pub fn to_body_state(&self) -> SelectionResult<BodyState> {
        let body = BodyState::try_new(
            self.mass,
            NVec2::new(self.position[0], self.position[1]),
            NVec2::new(self.velocity[0], self.velocity[1]),
        )?;
        Ok(body.with_active(self.active))
    }
}

/// Top-level session configuration
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub initial: Option<String>, // catalog name selected at startup
    #[serde(default)]
    pub orbital_template: Option<Vec<BodyConfig>>, // shared seeds of the orbital systems
}

impl SessionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let cfg: SessionConfig = serde_yaml::from_reader(reader)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded session config");
        Ok(cfg)
    }

    pub fn initial_identity(&self) -> SelectionResult<ConfigurationIdentity> {
        match &self.initial {
            Some(name) => name.parse(),
            None => Ok(ConfigurationIdentity::default()),
        }
    }

    /// Registry with the configured orbital template (or the built-in one)
    pub fn build_registry(&self) -> SelectionResult<ConfigurationRegistry> {
        match &self.orbital_template {
            Some(bodies) => {
                let template = bodies
                    .iter()
                    .map(BodyConfig::to_body_state)
                    .collect::<SelectionResult<Vec<_>>>()?;
                Ok(ConfigurationRegistry::with_orbital_template(template))
            }
            None => Ok(ConfigurationRegistry::new()),
        }
    }

    pub fn build_controller(&self) -> SelectionResult<SelectionController> {
        let initial = self.initial_identity()?;
        let registry = self.build_registry()?;
        Ok(SelectionController::with_initial(registry, initial))
    }
}

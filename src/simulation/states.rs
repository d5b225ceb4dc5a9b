//! Core state type for the n-body seeds.
//!
//! Defines `BodyState`, the value snapshot of one body:
//! - `active` flag (inactive bodies stay in the list but skip physics/rendering)
//! - `mass`, `position`, `velocity` using `NVec2` (2d)
//!
//! A `BodyState` is never edited in place once it is part of a stored
//! configuration. The `with_*` helpers return a replacement instead.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{SelectionError, SelectionResult};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub active: bool, // participates in physics and rendering
    pub mass: f64, // non-negative, may be ~0 for test bodies
    pub position: NVec2, // simulation length units
    pub velocity: NVec2, // simulation velocity units
}

impl BodyState {
    /// Active body with the given mass, position and velocity
    ///
    /// Fails with [`SelectionError::InvalidMass`] for a negative, NaN or
    /// infinite mass. Use this for anything coming from outside the crate.
    pub fn try_new(mass: f64, position: NVec2, velocity: NVec2) -> SelectionResult<Self> {
        validate_mass(mass)?;
        Ok(Self {
            active: true,
            mass,
            position,
            velocity,
        })
    }

    /// Active body built from plain arrays, for the preset tables
    ///
    /// The preset masses are compile-time constants, so no validation here.
    pub(crate) fn seed(mass: f64, position: [f64; 2], velocity: [f64; 2]) -> Self {
        Self {
            active: true,
            mass,
            position: NVec2::new(position[0], position[1]),
            velocity: NVec2::new(velocity[0], velocity[1]),
        }
    }

    /// Copy with a new mass; fails on an invalid mass
    pub fn with_mass(self, mass: f64) -> SelectionResult<Self> {
        validate_mass(mass)?;
        Ok(Self { mass, ..self })
    }

    /// Copy with a new position
    pub fn with_position(self, position: NVec2) -> Self {
        Self { position, ..self }
    }

    /// Copy with a new velocity
    pub fn with_velocity(self, velocity: NVec2) -> Self {
        Self { velocity, ..self }
    }

    /// Copy flagged in or out of the simulation
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Euclidean distance between the two positions
    pub fn distance_to(&self, other: &BodyState) -> f64 {
        (self.position - other.position).norm()
    }
}

/// Masses must be finite and >= 0 (zero is allowed for a massless tracer)
pub fn validate_mass(mass: f64) -> SelectionResult<()> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(())
    } else {
        Err(SelectionError::InvalidMass(mass))
    }
}

/// Every body in `bodies` must carry a valid mass; the first bad one is reported
pub fn validate_bodies(bodies: &[BodyState]) -> SelectionResult<()> {
    bodies.iter().try_for_each(|b| validate_mass(b.mass))
}

//! Which system is selected, and the live bodies seeded from it
//!
//! `SelectionController` is the runtime bundle the rest of the simulation
//! reads from: the current identity, the live bodies the integrator advances,
//! and the registry those bodies were seeded from.
//!
//! Transitions:
//! - `select(id)`: switch identity and reseed the live bodies
//! - `reset()`: reseed from the current identity (no-op on `Custom`)
//! - `edit(bodies)`: replace the live bodies; anything but `Custom` diverges
//!   into `Custom` and the custom seeds mirror the live bodies from then on
//! - `set_body_info(id, bodies)`: external write; on `Custom` it also becomes
//!   the live state, so custom seeds and live bodies never drift apart
//!
//! Every transition swaps the live list in one assignment, so a reader
//! between two calls never sees a partially applied change.

use crate::error::{SelectionError, SelectionResult};
use crate::simulation::integrator::Integrator;
use crate::simulation::registry::{ConfigurationIdentity, ConfigurationRegistry};
use crate::simulation::states::{validate_bodies, validate_mass, BodyState, NVec2};

/// Current selection plus the live body list
///
/// Owns the registry it was given. Hosts that touch it from several threads
/// wrap the whole controller in one `Mutex`, which also serializes external
/// writes to the shared orbital-system seeds.
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct SelectionController {
    registry: ConfigurationRegistry,
    current: ConfigurationIdentity,
    live: Vec<BodyState>,
}

impl SelectionController {
    /// Controller on the default preset (sun and planet)
    pub fn new(registry: ConfigurationRegistry) -> Self {
        Self::with_initial(registry, ConfigurationIdentity::default())
    }

    /// Controller on `initial`, live bodies seeded from it
    pub fn with_initial(registry: ConfigurationRegistry, initial: ConfigurationIdentity) -> Self {
        let live = registry.seeds_for(initial).to_vec();
        Self {
            registry,
            current: initial,
            live,
        }
    }

    pub fn current_identity(&self) -> ConfigurationIdentity {
        self.current
    }

    pub fn live_bodies(&self) -> &[BodyState] {
        &self.live
    }

    pub fn registry(&self) -> &ConfigurationRegistry {
        &self.registry
    }

    /// External write of a configuration's seeds
    ///
    /// Goes through [`ConfigurationRegistry::set_body_info`], so fixed presets
    /// and invalid masses are rejected with nothing changed. When `Custom` is
    /// selected and the write lands in its storage, the live bodies follow.
    /// Any other selection picks the new seeds up on its next select/reset.
    pub fn set_body_info(
        &mut self,
        identity: ConfigurationIdentity,
        bodies: Vec<BodyState>,
    ) -> SelectionResult<()> {
        let follows_live =
            self.current.is_custom() && self.registry.shares_seeds(self.current, identity);
        let live = follows_live.then(|| bodies.clone());

        self.registry.set_body_info(identity, bodies)?;
        if let Some(live) = live {
            tracing::debug!(bodies = live.len(), "external write replaced live custom bodies");
            self.live = live;
        }
        Ok(())
    }

    pub fn select(&mut self, identity: ConfigurationIdentity) {
        let live = self.registry.seeds_for(identity).to_vec();
        tracing::debug!(from = %self.current, to = %identity, bodies = live.len(), "select");
        self.current = identity;
        self.live = live;
    }

    /// Select by name; unknown names fail with `InvalidIdentity`
    pub fn select_by_name(&mut self, name: &str) -> SelectionResult<()> {
        let identity: ConfigurationIdentity = name.parse()?;
        self.select(identity);
        Ok(())
    }

    /// Reload the current configuration's seeds
    ///
    /// On `Custom` the live bodies already are the custom state, so nothing
    /// changes.
    pub fn reset(&mut self) {
        if self.current.is_custom() {
            tracing::debug!("reset on custom is a no-op");
            return;
        }
        self.select(self.current);
    }

    /// Replace the live bodies after a structural change
    ///
    /// A list carrying an invalid mass is rejected before the selection
    /// diverges, leaving identity, live bodies and custom seeds as they were.
    pub fn edit(&mut self, bodies: Vec<BodyState>) -> SelectionResult<()> {
        // validates every mass before anything is written
        self.registry.set_custom_seeds(bodies.clone())?;
        if !self.current.is_custom() {
            tracing::info!(from = %self.current, bodies = bodies.len(), "diverged into custom");
            self.current = ConfigurationIdentity::Custom;
        }
        self.live = bodies;
        Ok(())
    }

    pub fn set_mass(&mut self, index: usize, mass: f64) -> SelectionResult<()> {
        self.replace_at(index, |body| body.with_mass(mass))
    }

    pub fn reposition(&mut self, index: usize, position: NVec2) -> SelectionResult<()> {
        self.replace_at(index, |body| Ok(body.with_position(position)))
    }

    pub fn set_velocity(&mut self, index: usize, velocity: NVec2) -> SelectionResult<()> {
        self.replace_at(index, |body| Ok(body.with_velocity(velocity)))
    }

    /// Flag a body in or out of the simulation; it stays in the list either way
    pub fn set_active(&mut self, index: usize, active: bool) -> SelectionResult<()> {
        self.replace_at(index, |body| Ok(body.with_active(active)))
    }

    pub fn add_body(&mut self, body: BodyState) -> SelectionResult<()> {
        validate_mass(body.mass)?;
        let mut next = self.live.clone();
        next.push(body);
        self.edit(next)
    }

    pub fn remove_body(&mut self, index: usize) -> SelectionResult<BodyState> {
        self.check_index(index)?;
        let mut next = self.live.clone();
        let removed = next.remove(index);
        self.edit(next)?;
        Ok(removed)
    }

    /// Run one integrator step over the live bodies
    ///
    /// Stepping is not an edit: it never diverges and preset or orbital seeds
    /// are left alone. On `Custom` the custom seeds keep mirroring the live
    /// bodies. An empty list is a valid inert state and skips the integrator.
    pub fn advance<I>(&mut self, integrator: &mut I) -> SelectionResult<()>
    where
        I: Integrator + ?Sized,
    {
        if self.live.is_empty() {
            return Ok(());
        }

        let next = integrator.step(&self.live);
        if next.len() != self.live.len() {
            return Err(SelectionError::IntegratorLengthMismatch {
                expected: self.live.len(),
                actual: next.len(),
            });
        }
        validate_bodies(&next)?;
        if self.current.is_custom() {
            self.registry.set_custom_seeds(next.clone())?;
        }
        self.live = next;
        Ok(())
    }

    pub fn active_bodies(&self) -> impl Iterator<Item = &BodyState> + '_ {
        self.live.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_bodies().count()
    }

    pub fn total_mass(&self) -> f64 {
        self.active_bodies().map(|b| b.mass).sum()
    }

    /// Mass-weighted mean position of the active bodies
    ///
    /// `None` when there is no active mass to weigh.
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .active_bodies()
            .fold(NVec2::zeros(), |acc, b| acc + b.position * b.mass);
        Some(weighted / total)
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.active_bodies()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    fn check_index(&self, index: usize) -> SelectionResult<()> {
        if index < self.live.len() {
            Ok(())
        } else {
            Err(SelectionError::BodyIndexOutOfRange {
                index,
                len: self.live.len(),
            })
        }
    }

    // swap one body for its replacement and route the new list through edit
    fn replace_at<F>(&mut self, index: usize, replace: F) -> SelectionResult<()>
    where
        F: FnOnce(BodyState) -> SelectionResult<BodyState>,
    {
        self.check_index(index)?;
        let replacement = replace(self.live[index])?;
        let mut next = self.live.clone();
        next[index] = replacement;
        self.edit(next)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(ConfigurationRegistry::default())
    }
}

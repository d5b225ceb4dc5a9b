//! Catalog of selectable orbital systems
//!
//! Every selectable system is named by a [`ConfigurationIdentity`]. The
//! [`ConfigurationRegistry`] is a flat table indexed by that tag and owns the
//! seed storage behind it:
//! - fixed presets point at an immutable seed table
//! - `Custom` points at its own mutable slot
//! - the four orbital systems all point at ONE shared mutable slot, so a
//!   write through any of them is visible through the other three
//!
//! The registry is built once and handed to the selection controller; it is
//! never extended at runtime.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{SelectionError, SelectionResult};
use crate::simulation::presets;
use crate::simulation::states::{validate_bodies, BodyState};

/// Closed set of selectable systems, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigurationIdentity {
    #[default]
    SunPlanet,
    SunPlanetMoon,
    SunPlanetComet,
    TrinaryStars,
    FourStarBallet,
    DoubleDouble,
    OrbitalSystem1,
    OrbitalSystem2,
    OrbitalSystem3,
    OrbitalSystem4,
    Custom,
}

/// How a configuration's seeds may be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationKind {
    Preset, // fixed at definition time
    OrbitalSystem, // written only through the external channel, shared slot
    Custom, // mirrors the live bodies after divergence
}

impl ConfigurationIdentity {
    pub const ALL: [ConfigurationIdentity; 11] = [
        ConfigurationIdentity::SunPlanet,
        ConfigurationIdentity::SunPlanetMoon,
        ConfigurationIdentity::SunPlanetComet,
        ConfigurationIdentity::TrinaryStars,
        ConfigurationIdentity::FourStarBallet,
        ConfigurationIdentity::DoubleDouble,
        ConfigurationIdentity::OrbitalSystem1,
        ConfigurationIdentity::OrbitalSystem2,
        ConfigurationIdentity::OrbitalSystem3,
        ConfigurationIdentity::OrbitalSystem4,
        ConfigurationIdentity::Custom,
    ];

    /// Stable kebab-case name used by config files and the CLI
    pub fn name(self) -> &'static str {
        match self {
            ConfigurationIdentity::SunPlanet => "sun-planet",
            ConfigurationIdentity::SunPlanetMoon => "sun-planet-moon",
            ConfigurationIdentity::SunPlanetComet => "sun-planet-comet",
            ConfigurationIdentity::TrinaryStars => "trinary-stars",
            ConfigurationIdentity::FourStarBallet => "four-star-ballet",
            ConfigurationIdentity::DoubleDouble => "double-double",
            ConfigurationIdentity::OrbitalSystem1 => "orbital-system-1",
            ConfigurationIdentity::OrbitalSystem2 => "orbital-system-2",
            ConfigurationIdentity::OrbitalSystem3 => "orbital-system-3",
            ConfigurationIdentity::OrbitalSystem4 => "orbital-system-4",
            ConfigurationIdentity::Custom => "custom",
        }
    }

    pub fn kind(self) -> ConfigurationKind {
        match self {
            ConfigurationIdentity::OrbitalSystem1
            | ConfigurationIdentity::OrbitalSystem2
            | ConfigurationIdentity::OrbitalSystem3
            | ConfigurationIdentity::OrbitalSystem4 => ConfigurationKind::OrbitalSystem,
            ConfigurationIdentity::Custom => ConfigurationKind::Custom,
            _ => ConfigurationKind::Preset,
        }
    }

    pub fn is_fixed_preset(self) -> bool {
        self.kind() == ConfigurationKind::Preset
    }

    pub fn is_orbital_system(self) -> bool {
        self.kind() == ConfigurationKind::OrbitalSystem
    }

    pub fn is_custom(self) -> bool {
        self == ConfigurationIdentity::Custom
    }

    // position in ALL and in the registry table
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConfigurationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigurationIdentity {
    type Err = SelectionError;

    /// Accepts the kebab-case name in any case, with `_` or `-` separators
    /// (so `SUN_PLANET` and `sun-planet` both resolve)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ConfigurationIdentity::ALL
            .into_iter()
            .find(|id| id.name() == normalized)
            .ok_or_else(|| SelectionError::InvalidIdentity(s.to_string()))
    }
}

/// Handle into the registry's mutable seed storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

const CUSTOM_SLOT: SlotId = SlotId(0);
const ORBITAL_SLOT: SlotId = SlotId(1);

/// Where a configuration's seeds live
#[derive(Debug, Clone)]
pub enum SeedStorage {
    Fixed(Arc<[BodyState]>),
    Slot(SlotId),
}

/// One selectable system: its identity and where its seeds are stored
#[derive(Debug, Clone)]
pub struct SystemConfiguration {
    identity: ConfigurationIdentity,
    storage: SeedStorage,
}

impl SystemConfiguration {
    pub fn identity(&self) -> ConfigurationIdentity {
        self.identity
    }

    pub fn storage(&self) -> &SeedStorage {
        &self.storage
    }

    /// `false` for fixed presets, `true` for custom and the orbital systems
    pub fn is_mutable(&self) -> bool {
        matches!(self.storage, SeedStorage::Slot(_))
    }
}

/// Fixed lookup table from identity to seeds
#[derive(Debug, Clone)]
pub struct ConfigurationRegistry {
    configurations: Vec<SystemConfiguration>,
    slots: Vec<Vec<BodyState>>,
}

impl ConfigurationRegistry {
    /// Registry with the built-in orbital-system template
    pub fn new() -> Self {
        Self::with_orbital_template(presets::orbital_template())
    }

    /// Registry whose four orbital systems start from `template`
    pub fn with_orbital_template(template: Vec<BodyState>) -> Self {
        // slot order must match CUSTOM_SLOT / ORBITAL_SLOT
        let slots = vec![Vec::new(), template];

        let configurations = ConfigurationIdentity::ALL
            .into_iter()
            .map(|identity| SystemConfiguration {
                identity,
                storage: storage_for(identity),
            })
            .collect();

        Self {
            configurations,
            slots,
        }
    }

    /// All identities in catalog order
    pub fn all_configurations(&self) -> impl Iterator<Item = ConfigurationIdentity> + '_ {
        self.configurations.iter().map(|c| c.identity)
    }

    pub fn configuration(&self, identity: ConfigurationIdentity) -> &SystemConfiguration {
        &self.configurations[identity.index()]
    }

    /// Current seeds of `identity`; total over the closed identity set
    pub fn seeds_for(&self, identity: ConfigurationIdentity) -> &[BodyState] {
        match &self.configuration(identity).storage {
            SeedStorage::Fixed(seeds) => &seeds[..],
            SeedStorage::Slot(slot) => &self.slots[slot.0][..],
        }
    }

    /// Seeds looked up by name, for callers holding a string from outside
    pub fn seeds_for_name(&self, name: &str) -> SelectionResult<&[BodyState]> {
        let identity: ConfigurationIdentity = name.parse()?;
        Ok(self.seeds_for(identity))
    }

    /// Read accessor of a single configuration (same as [`Self::seeds_for`])
    pub fn body_info(&self, identity: ConfigurationIdentity) -> &[BodyState] {
        self.seeds_for(identity)
    }

    /// Overwrite the seeds of a custom or orbital-system configuration
    ///
    /// Writing one orbital system rewrites the shared slot, so all four see
    /// the new seeds. Fixed presets reject the write and keep their seeds, and
    /// a list with an invalid mass is rejected before anything is written.
    pub fn set_body_info(
        &mut self,
        identity: ConfigurationIdentity,
        seeds: Vec<BodyState>,
    ) -> SelectionResult<()> {
        let slot = match &self.configuration(identity).storage {
            SeedStorage::Fixed(_) => {
                tracing::warn!(configuration = %identity, "rejected seed write into fixed preset");
                return Err(SelectionError::ImmutableConfiguration(identity));
            }
            SeedStorage::Slot(slot) => *slot,
        };
        validate_bodies(&seeds)?;

        tracing::debug!(configuration = %identity, bodies = seeds.len(), "seeds replaced");
        self.slots[slot.0] = seeds;
        Ok(())
    }

    /// Replace the custom seeds wholesale
    pub fn set_custom_seeds(&mut self, seeds: Vec<BodyState>) -> SelectionResult<()> {
        validate_bodies(&seeds)?;
        self.slots[CUSTOM_SLOT.0] = seeds;
        Ok(())
    }

    /// Whether two identities read and write the same seed storage
    pub fn shares_seeds(&self, a: ConfigurationIdentity, b: ConfigurationIdentity) -> bool {
        match (&self.configuration(a).storage, &self.configuration(b).storage) {
            (SeedStorage::Slot(x), SeedStorage::Slot(y)) => x == y,
            (SeedStorage::Fixed(x), SeedStorage::Fixed(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl Default for ConfigurationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_for(identity: ConfigurationIdentity) -> SeedStorage {
    let fixed = |seeds: Vec<BodyState>| SeedStorage::Fixed(Arc::from(seeds));

    match identity {
        ConfigurationIdentity::SunPlanet => fixed(presets::sun_planet()),
        ConfigurationIdentity::SunPlanetMoon => fixed(presets::sun_planet_moon()),
        ConfigurationIdentity::SunPlanetComet => fixed(presets::sun_planet_comet()),
        ConfigurationIdentity::TrinaryStars => fixed(presets::trinary_stars()),
        ConfigurationIdentity::FourStarBallet => fixed(presets::four_star_ballet()),
        ConfigurationIdentity::DoubleDouble => fixed(presets::double_double()),
        ConfigurationIdentity::OrbitalSystem1
        | ConfigurationIdentity::OrbitalSystem2
        | ConfigurationIdentity::OrbitalSystem3
        | ConfigurationIdentity::OrbitalSystem4 => SeedStorage::Slot(ORBITAL_SLOT),
        ConfigurationIdentity::Custom => SeedStorage::Slot(CUSTOM_SLOT),
    }
}

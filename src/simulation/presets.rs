//! Seed tables for the curated orbital systems
//!
//! Masses, positions and velocities are tuned so each system gives a stable
//! or illustrative orbit with G = 1 in simulation units. The comet and moon
//! bodies carry a mass of 1e-6 so they feel gravity without noticeably
//! pulling on anything else.

use crate::simulation::states::BodyState;

/// Mass used for bodies that should behave like test particles
pub const NEGLIGIBLE_MASS: f64 = 1.0e-6;

/// Sun and one planet
pub fn sun_planet() -> Vec<BodyState> {
    vec![
        BodyState::seed(250.0, [0.0, 0.0], [0.0, -11.1]),
        BodyState::seed(25.0, [200.0, 0.0], [0.0, 111.0]),
    ]
}

/// Sun, planet and a moon tight around the planet
pub fn sun_planet_moon() -> Vec<BodyState> {
    vec![
        BodyState::seed(200.0, [0.0, 0.0], [0.0, 0.0]),
        BodyState::seed(10.0, [160.0, 0.0], [0.0, 120.0]),
        BodyState::seed(NEGLIGIBLE_MASS, [140.0, 0.0], [0.0, 53.0]),
    ]
}

/// Sun, planet and a comet on an eccentric orbit
pub fn sun_planet_comet() -> Vec<BodyState> {
    vec![
        BodyState::seed(200.0, [0.0, 0.0], [0.0, 0.0]),
        BodyState::seed(1.0, [150.0, 0.0], [0.0, 120.0]),
        BodyState::seed(NEGLIGIBLE_MASS, [-220.0, 130.0], [-20.0, -35.0]),
    ]
}

/// Three stars, one heavy core with two partners in counter motion
pub fn trinary_stars() -> Vec<BodyState> {
    vec![
        BodyState::seed(150.0, [0.0, 0.0], [0.0, -1.0]),
        BodyState::seed(120.0, [100.0, 0.0], [0.0, 150.0]),
        BodyState::seed(120.0, [-100.0, 0.0], [0.0, -150.0]),
    ]
}

/// Four equal stars on the corners of a square, rotating together
pub fn four_star_ballet() -> Vec<BodyState> {
    vec![
        BodyState::seed(120.0, [-100.0, 100.0], [-50.0, -50.0]),
        BodyState::seed(120.0, [100.0, 100.0], [-50.0, 50.0]),
        BodyState::seed(120.0, [100.0, -100.0], [50.0, 50.0]),
        BodyState::seed(120.0, [-100.0, -100.0], [50.0, -50.0]),
    ]
}

/// Two binary pairs orbiting each other
pub fn double_double() -> Vec<BodyState> {
    vec![
        BodyState::seed(60.0, [-115.0, -3.0], [0.0, -154.0]),
        BodyState::seed(70.0, [102.0, 0.0], [1.3, 140.0]),
        BodyState::seed(55.0, [-77.0, -3.0], [-1.0, 42.0]),
        BodyState::seed(62.0, [135.0, 0.0], [-1.4, -49.0]),
    ]
}

/// Template shared by the four orbital systems until the host overwrites it
pub fn orbital_template() -> Vec<BodyState> {
    vec![
        BodyState::seed(200.0, [0.0, 0.0], [0.0, 0.0]),
        BodyState::seed(10.0, [150.0, 0.0], [0.0, 120.0]),
    ]
}

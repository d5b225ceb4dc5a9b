//! Seam between the live body list and whatever advances it in time
//!
//! The stepping scheme itself lives with the host. This module only fixes
//! the contract: an integrator reads the current live bodies and hands back
//! a full replacement list of the same length.

use crate::simulation::states::BodyState;

/// A time stepper for the live bodies
///
/// Implementations must return exactly one body per input body, in the same
/// order, and should leave inactive bodies untouched.
pub trait Integrator {
    fn step(&mut self, bodies: &[BodyState]) -> Vec<BodyState>;
}

impl<F> Integrator for F
where
    F: FnMut(&[BodyState]) -> Vec<BodyState>,
{
    fn step(&mut self, bodies: &[BodyState]) -> Vec<BodyState> {
        self(bodies)
    }
}

//! The [`DiffusionRelaxation`] trait: the seam between diffusion operators
//! and their time integrators.

use silt_core::{SpeciesId, SpeciesStore};

/// Construction-resolved slots of one diffusion binding.
///
/// Species names are resolved to store slots exactly once, when the operator
/// is built; per-particle loops index by slot and never touch names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffusionSlot {
    /// Slot of the diffusive species the flux updates.
    pub species: SpeciesId,
    /// Slot of the gradient-source species driving the flux (may equal
    /// `species`).
    pub gradient: SpeciesId,
}

/// A diffusion operator advancing every diffusive species of one body.
///
/// Implementors own one transient change-rate accumulator per diffusive
/// species. `interaction` fills the accumulators for one particle from a
/// read-only view of the world; `update` commits one particle's explicit
/// Euler step. The provided [`exec`](DiffusionRelaxation::exec) runs all
/// interactions, then all updates — the barrier between the two loops is
/// what makes the per-particle bodies independent: each particle writes only
/// its own accumulator slot and its own store values.
///
/// [`Relation`](DiffusionRelaxation::Relation) names the read-only world
/// shape the operator traverses: the same-body neighbor lists for
/// [`DiffusionInner`](crate::DiffusionInner), the contact bodies and their
/// relations for the contact variants.
pub trait DiffusionRelaxation {
    /// Read-only neighbor topology consumed by `interaction`.
    type Relation<'a>: ?Sized;

    /// Operator name for diagnostics.
    fn name(&self) -> &str;

    /// Resolved diffusive/gradient slots, one per diffusion, in model order.
    fn diffusions(&self) -> &[DiffusionSlot];

    /// Accumulated change rate of diffusion `m` at particle `i`, as left by
    /// the most recent `interaction` pass.
    fn rate(&self, m: usize, i: usize) -> f64;

    /// Accumulate flux for particle `i`: zero its accumulators, then sum
    /// neighbor contributions. Reads the store, never writes it.
    fn interaction(&mut self, store: &SpeciesStore, relation: &Self::Relation<'_>, i: usize, dt: f64);

    /// Commit particle `i`: `value += dt * rate` per diffusive species.
    fn update(&self, store: &mut SpeciesStore, i: usize, dt: f64) {
        for (m, slot) in self.diffusions().iter().enumerate() {
            let rate = self.rate(m, i);
            store.values_mut(slot.species)[i] += dt * rate;
        }
    }

    /// One forward-Euler step over all particles: every `interaction`
    /// completes before any `update` runs.
    fn exec(&mut self, store: &mut SpeciesStore, relation: &Self::Relation<'_>, dt: f64) {
        let particle_count = store.particle_count();
        for i in 0..particle_count {
            self.interaction(store, relation, i, dt);
        }
        for i in 0..particle_count {
            self.update(store, i, dt);
        }
    }
}

//! Same-body diffusive flux exchange.

use std::sync::Arc;

use silt_core::{ConfigError, InnerRelation, SpeciesStore};
use silt_material::DiffusionModel;

use crate::relaxation::{DiffusionRelaxation, DiffusionSlot};

/// Explicit forward-Euler diffusion among particles of one body.
///
/// Per particle `i` and neighbor `j`, each diffusion `m` accumulates
///
/// ```text
/// rate_m[i] += coff_ij * (gradient_m[i] - gradient_m[j]) * area_ij
/// ```
///
/// where `coff_ij` comes from the diffusion model for the pair and `area_ij`
/// is the effective contact area
/// ([`NeighborRecord::surface_area`](silt_core::NeighborRecord::surface_area)).
/// Flux is summed from `i`'s perspective only; with reciprocal neighbor
/// geometry every particle independently accounts for its side of each pair,
/// so no symmetric deposit to `j` is needed and the commit stays
/// write-disjoint per particle.
pub struct DiffusionInner {
    diffusions: Vec<Arc<dyn DiffusionModel>>,
    slots: Vec<DiffusionSlot>,
    rates: Vec<Vec<f64>>,
}

impl std::fmt::Debug for DiffusionInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffusionInner")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl DiffusionInner {
    /// Resolve every diffusive and gradient-source species against the
    /// body's store.
    pub fn new(
        store: &SpeciesStore,
        diffusions: Vec<Arc<dyn DiffusionModel>>,
    ) -> Result<Self, ConfigError> {
        let slots = resolve_slots(store, &diffusions)?;
        let rates = vec![vec![0.0; store.particle_count()]; diffusions.len()];
        Ok(Self {
            diffusions,
            slots,
            rates,
        })
    }
}

/// Resolve each model's species names to store slots, failing on the first
/// name the store does not know.
pub(crate) fn resolve_slots(
    store: &SpeciesStore,
    diffusions: &[Arc<dyn DiffusionModel>],
) -> Result<Vec<DiffusionSlot>, ConfigError> {
    diffusions
        .iter()
        .map(|model| {
            let species = store.id(model.species()).ok_or_else(|| {
                ConfigError::MissingSpecies {
                    species: model.species().to_string(),
                }
            })?;
            let gradient = store.id(model.gradient_species()).ok_or_else(|| {
                ConfigError::MissingSpecies {
                    species: model.gradient_species().to_string(),
                }
            })?;
            Ok(DiffusionSlot { species, gradient })
        })
        .collect()
}

impl DiffusionRelaxation for DiffusionInner {
    type Relation<'a> = InnerRelation;

    fn name(&self) -> &str {
        "diffusion_inner"
    }

    fn diffusions(&self) -> &[DiffusionSlot] {
        &self.slots
    }

    fn rate(&self, m: usize, i: usize) -> f64 {
        self.rates[m][i]
    }

    fn interaction(&mut self, store: &SpeciesStore, relation: &InnerRelation, i: usize, _dt: f64) {
        debug_assert_eq!(relation.particle_count(), store.particle_count());
        for rates in &mut self.rates {
            rates[i] = 0.0;
        }
        for record in relation.neighborhood(i) {
            let area_ij = record.surface_area();
            for (m, (model, slot)) in self.diffusions.iter().zip(&self.slots).enumerate() {
                let coff_ij = model.inter_particle_coff(i, record.index, &record.e_ij);
                let gradient = store.values(slot.gradient);
                let phi_ij = gradient[i] - gradient[record.index];
                self.rates[m][i] += coff_ij * phi_ij * area_ij;
            }
        }
    }
}

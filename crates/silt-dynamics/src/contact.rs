//! Cross-body diffusive coupling: exchanging and Dirichlet variants.

use std::sync::Arc;

use silt_core::{ConfigError, ContactRelation, SpeciesId, SpeciesStore};
use silt_material::DiffusionModel;

use crate::inner::resolve_slots;
use crate::relaxation::{DiffusionRelaxation, DiffusionSlot};

/// One contact body's read-only side of a coupling: its species store and
/// the owning body's neighbor lists toward it.
///
/// The slice passed to `interaction`/`exec` must list contact bodies in the
/// order their stores were given at construction; slot resolution is
/// positional.
pub struct ContactBody<'a> {
    /// The contact body's species store. Never mutated by these operators.
    pub store: &'a SpeciesStore,
    /// Neighbor lists from the owning body's particles into this body.
    pub relation: &'a ContactRelation,
}

/// Per-contact-body resolved slots of each diffusion's gradient-source
/// species, validated at construction.
fn resolve_contact_slots(
    contact_stores: &[&SpeciesStore],
    diffusions: &[Arc<dyn DiffusionModel>],
) -> Result<Vec<Vec<SpeciesId>>, ConfigError> {
    let mut slots = vec![Vec::with_capacity(diffusions.len()); contact_stores.len()];
    for model in diffusions {
        let name = model.gradient_species();
        for (k, contact) in contact_stores.iter().enumerate() {
            let id = contact
                .id(name)
                .ok_or_else(|| ConfigError::MissingContactSpecies {
                    species: name.to_string(),
                    body: k,
                })?;
            slots[k].push(id);
        }
    }
    Ok(slots)
}

/// Exchanging cross-body diffusion.
///
/// Same accumulation as [`DiffusionInner`](crate::DiffusionInner), but the
/// neighbor side of the gradient difference reads the same-named
/// gradient-source field from the contact body's store. Writes go only to
/// the owning body; the reciprocal flux into the contact body is that body's
/// own operator's business.
pub struct DiffusionContact {
    diffusions: Vec<Arc<dyn DiffusionModel>>,
    slots: Vec<DiffusionSlot>,
    contact_slots: Vec<Vec<SpeciesId>>,
    rates: Vec<Vec<f64>>,
}

impl std::fmt::Debug for DiffusionContact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffusionContact")
            .field("slots", &self.slots)
            .field("contact_slots", &self.contact_slots)
            .finish_non_exhaustive()
    }
}

impl DiffusionContact {
    /// Resolve species in the owning body and every contact body.
    ///
    /// Fails with [`ConfigError::MissingContactSpecies`] if any contact body
    /// lacks a gradient-source species — the physical coupling is undefined
    /// without it, and no step may run.
    pub fn new(
        store: &SpeciesStore,
        contact_stores: &[&SpeciesStore],
        diffusions: Vec<Arc<dyn DiffusionModel>>,
    ) -> Result<Self, ConfigError> {
        let slots = resolve_slots(store, &diffusions)?;
        let contact_slots = resolve_contact_slots(contact_stores, &diffusions)?;
        let rates = vec![vec![0.0; store.particle_count()]; diffusions.len()];
        Ok(Self {
            diffusions,
            slots,
            contact_slots,
            rates,
        })
    }
}

impl DiffusionRelaxation for DiffusionContact {
    type Relation<'a> = [ContactBody<'a>];

    fn name(&self) -> &str {
        "diffusion_contact"
    }

    fn diffusions(&self) -> &[DiffusionSlot] {
        &self.slots
    }

    fn rate(&self, m: usize, i: usize) -> f64 {
        self.rates[m][i]
    }

    fn interaction(
        &mut self,
        store: &SpeciesStore,
        contact: &[ContactBody<'_>],
        i: usize,
        _dt: f64,
    ) {
        debug_assert_eq!(contact.len(), self.contact_slots.len());
        for rates in &mut self.rates {
            rates[i] = 0.0;
        }
        for (k, body) in contact.iter().enumerate() {
            debug_assert_eq!(body.relation.particle_count(), store.particle_count());
            for record in body.relation.neighborhood(i) {
                let area_ij = record.surface_area();
                for (m, (model, slot)) in self.diffusions.iter().zip(&self.slots).enumerate() {
                    let coff_ij = model.inter_particle_coff(i, record.index, &record.e_ij);
                    let phi_i = store.value(slot.gradient, i);
                    let phi_j = body.store.values(self.contact_slots[k][m])[record.index];
                    self.rates[m][i] += coff_ij * (phi_i - phi_j) * area_ij;
                }
            }
        }
    }
}

/// Dirichlet cross-body diffusion: the contact body's field is a prescribed
/// boundary value.
///
/// The traversal matches [`DiffusionContact`], but the owner side of the
/// difference is the *diffusive* species value itself, relaxing it toward
/// the prescribed contact value. The coupling is one-directional: the owning
/// body receives flux, the contact body's store is read and never written.
pub struct DiffusionDirichlet {
    diffusions: Vec<Arc<dyn DiffusionModel>>,
    slots: Vec<DiffusionSlot>,
    contact_slots: Vec<Vec<SpeciesId>>,
    rates: Vec<Vec<f64>>,
}

impl std::fmt::Debug for DiffusionDirichlet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffusionDirichlet")
            .field("slots", &self.slots)
            .field("contact_slots", &self.contact_slots)
            .finish_non_exhaustive()
    }
}

impl DiffusionDirichlet {
    /// Resolve species in the owning body and every contact body; same
    /// validation and failure mode as [`DiffusionContact::new`].
    pub fn new(
        store: &SpeciesStore,
        contact_stores: &[&SpeciesStore],
        diffusions: Vec<Arc<dyn DiffusionModel>>,
    ) -> Result<Self, ConfigError> {
        let slots = resolve_slots(store, &diffusions)?;
        let contact_slots = resolve_contact_slots(contact_stores, &diffusions)?;
        let rates = vec![vec![0.0; store.particle_count()]; diffusions.len()];
        Ok(Self {
            diffusions,
            slots,
            contact_slots,
            rates,
        })
    }
}

impl DiffusionRelaxation for DiffusionDirichlet {
    type Relation<'a> = [ContactBody<'a>];

    fn name(&self) -> &str {
        "diffusion_dirichlet"
    }

    fn diffusions(&self) -> &[DiffusionSlot] {
        &self.slots
    }

    fn rate(&self, m: usize, i: usize) -> f64 {
        self.rates[m][i]
    }

    fn interaction(
        &mut self,
        store: &SpeciesStore,
        contact: &[ContactBody<'_>],
        i: usize,
        _dt: f64,
    ) {
        debug_assert_eq!(contact.len(), self.contact_slots.len());
        for rates in &mut self.rates {
            rates[i] = 0.0;
        }
        for (k, body) in contact.iter().enumerate() {
            debug_assert_eq!(body.relation.particle_count(), store.particle_count());
            for record in body.relation.neighborhood(i) {
                let area_ij = record.surface_area();
                for (m, (model, slot)) in self.diffusions.iter().zip(&self.slots).enumerate() {
                    let coff_ij = model.inter_particle_coff(i, record.index, &record.e_ij);
                    let phi_i = store.value(slot.species, i);
                    let phi_j = body.store.values(self.contact_slots[k][m])[record.index];
                    self.rates[m][i] += coff_ij * (phi_i - phi_j) * area_ij;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_material::IsotropicDiffusion;
    use silt_test_utils::{one_to_one_contact, uniform_store};

    fn phi_model(coff: f64) -> Vec<Arc<dyn DiffusionModel>> {
        vec![Arc::new(IsotropicDiffusion::new("phi", coff))]
    }

    #[test]
    fn missing_contact_species_fails_before_any_step() {
        let owner = uniform_store(3, &[("phi", 0.0)]);
        let contact = uniform_store(3, &[("psi", 0.0)]);
        let err =
            DiffusionContact::new(&owner, &[&contact], phi_model(0.1)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingContactSpecies {
                species: "phi".into(),
                body: 0
            }
        );

        let err =
            DiffusionDirichlet::new(&owner, &[&contact], phi_model(0.1)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingContactSpecies { .. }));
    }

    #[test]
    fn second_contact_body_is_validated_too() {
        let owner = uniform_store(2, &[("phi", 0.0)]);
        let good = uniform_store(2, &[("phi", 1.0)]);
        let bad = uniform_store(2, &[("psi", 1.0)]);
        let err = DiffusionContact::new(&owner, &[&good, &bad], phi_model(0.1)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingContactSpecies {
                species: "phi".into(),
                body: 1
            }
        );
    }

    #[test]
    #[should_panic]
    fn undersized_contact_relation_is_caught() {
        let mut owner = uniform_store(3, &[("phi", 0.0)]);
        let contact_store = uniform_store(3, &[("phi", 1.0)]);
        let short = one_to_one_contact(2, 1.0, -1.0);
        let mut op = DiffusionContact::new(&owner, &[&contact_store], phi_model(0.1)).unwrap();
        let contact = [ContactBody {
            store: &contact_store,
            relation: &short,
        }];
        op.exec(&mut owner, &contact, 0.1);
    }

    #[test]
    fn exchange_pulls_owner_toward_contact_field() {
        let mut owner = uniform_store(2, &[("phi", 0.0)]);
        let contact_store = uniform_store(2, &[("phi", 1.0)]);
        let relation = one_to_one_contact(2, 1.0, -1.0);

        let mut op = DiffusionContact::new(&owner, &[&contact_store], phi_model(0.1)).unwrap();
        let contact = [ContactBody {
            store: &contact_store,
            relation: &relation,
        }];
        op.exec(&mut owner, &contact, 0.1);

        let phi = owner.id("phi").unwrap();
        for &v in owner.values(phi) {
            // area = 2 * (-1) / 1; rate = 0.1 * (0 - 1) * (-2) = 0.2
            assert!((v - 0.02).abs() < 1e-12, "owner value: {v}");
        }
    }

    #[test]
    fn dirichlet_never_mutates_the_contact_store() {
        let mut owner = uniform_store(3, &[("phi", 0.0)]);
        let contact_store = uniform_store(3, &[("phi", 2.0)]);
        let pristine = contact_store.clone();
        let relation = one_to_one_contact(3, 1.0, -1.0);

        let mut op =
            DiffusionDirichlet::new(&owner, &[&contact_store], phi_model(0.25)).unwrap();
        let contact = [ContactBody {
            store: &contact_store,
            relation: &relation,
        }];
        op.exec(&mut owner, &contact, 0.1);

        assert_eq!(contact_store, pristine);
        let phi = owner.id("phi").unwrap();
        for &v in owner.values(phi) {
            assert!(v > 0.0, "owner should relax toward the boundary value");
        }
    }

    #[test]
    fn dirichlet_difference_uses_the_diffusive_species() {
        // Owner's diffusive field equals the prescribed value, so the
        // Dirichlet flux vanishes even though the owner's gradient-source
        // field differs. The exchanging variant sees the gradient field
        // and produces flux in the same setup.
        let mut owner = uniform_store(1, &[("phi_d", 2.0), ("phi", 5.0)]);
        let contact_store = uniform_store(1, &[("phi", 2.0)]);
        let relation = one_to_one_contact(1, 1.0, -1.0);
        let models: Vec<Arc<dyn DiffusionModel>> = vec![Arc::new(
            IsotropicDiffusion::new("phi_d", 0.1).with_gradient_species("phi"),
        )];

        let contact = [ContactBody {
            store: &contact_store,
            relation: &relation,
        }];

        let mut dirichlet =
            DiffusionDirichlet::new(&owner, &[&contact_store], models.clone()).unwrap();
        dirichlet.interaction(&owner, &contact, 0, 0.1);
        assert_eq!(dirichlet.rate(0, 0), 0.0);

        let mut exchange = DiffusionContact::new(&owner, &[&contact_store], models).unwrap();
        exchange.interaction(&owner, &contact, 0, 0.1);
        // phi_i - phi_j = 5 - 2, area = -2: rate = 0.1 * 3 * -2
        assert!((exchange.rate(0, 0) - (-0.6)).abs() < 1e-12);

        let phi_d = owner.id("phi_d").unwrap();
        exchange.update(&mut owner, 0, 0.1);
        assert!((owner.value(phi_d, 0) - (2.0 - 0.06)).abs() < 1e-12);
    }
}

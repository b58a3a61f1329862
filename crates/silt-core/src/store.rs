//! The per-body species store: named per-particle scalar fields.

use indexmap::IndexMap;

use crate::error::ConfigError;

/// Identifies a species within a [`SpeciesStore`].
///
/// Species are registered at body setup and assigned sequential slots.
/// `SpeciesId(n)` is the n-th registered species; the id is only meaningful
/// for the store that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub usize);

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SpeciesId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// An ordered collection of named per-particle scalar fields.
///
/// One store per body, shared by reference across all operators acting on
/// that body. Invariants: every field has exactly `particle_count` values,
/// and species names are unique. Iteration order is registration order
/// (`IndexMap`-backed), so slot indices are stable for the lifetime of the
/// store.
///
/// The store itself is untyped: whether a species is diffusive,
/// gradient-source, or reactive is declared by the material bindings in
/// `silt-material`, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesStore {
    particle_count: usize,
    species: IndexMap<String, Vec<f64>>,
}

impl SpeciesStore {
    /// Create an empty store for a body of `particle_count` particles.
    pub fn new(particle_count: usize) -> Self {
        Self {
            particle_count,
            species: IndexMap::new(),
        }
    }

    /// Number of particles in the body. Every field has this length.
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Number of registered species.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Register a species initialized to zero.
    pub fn register(&mut self, name: &str) -> Result<SpeciesId, ConfigError> {
        self.register_with(name, 0.0)
    }

    /// Register a species with every particle initialized to `value`.
    pub fn register_with(&mut self, name: &str, value: f64) -> Result<SpeciesId, ConfigError> {
        if self.species.contains_key(name) {
            return Err(ConfigError::DuplicateSpecies {
                species: name.to_string(),
            });
        }
        let slot = self.species.len();
        self.species
            .insert(name.to_string(), vec![value; self.particle_count]);
        Ok(SpeciesId(slot))
    }

    /// Look up a species id by name.
    pub fn id(&self, name: &str) -> Option<SpeciesId> {
        self.species.get_index_of(name).map(SpeciesId)
    }

    /// Whether a species with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.species.contains_key(name)
    }

    /// Iterate over species names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    /// The per-particle values of a species.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    pub fn values(&self, id: SpeciesId) -> &[f64] {
        self.species
            .get_index(id.0)
            .map(|(_, v)| v.as_slice())
            .unwrap_or_else(|| panic!("species id {id} out of range"))
    }

    /// Mutable per-particle values of a species.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    pub fn values_mut(&mut self, id: SpeciesId) -> &mut [f64] {
        self.species
            .get_index_mut(id.0)
            .map(|(_, v)| v.as_mut_slice())
            .unwrap_or_else(|| panic!("species id {id} out of range"))
    }

    /// The value of a species at one particle.
    pub fn value(&self, id: SpeciesId, i: usize) -> f64 {
        self.values(id)[i]
    }

    /// Set the value of a species at one particle.
    pub fn set(&mut self, id: SpeciesId, i: usize, value: f64) {
        self.values_mut(id)[i] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn register_assigns_sequential_slots() {
        let mut store = SpeciesStore::new(4);
        let a = store.register("phi").unwrap();
        let b = store.register("psi").unwrap();
        assert_eq!(a, SpeciesId(0));
        assert_eq!(b, SpeciesId(1));
        assert_eq!(store.id("psi"), Some(b));
        assert_eq!(store.id("chi"), None);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut store = SpeciesStore::new(4);
        store.register("phi").unwrap();
        let err = store.register("phi").unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateSpecies {
                species: "phi".into()
            }
        );
    }

    #[test]
    fn register_with_fills_every_particle() {
        let mut store = SpeciesStore::new(3);
        let id = store.register_with("phi", 7.5).unwrap();
        assert_eq!(store.values(id), &[7.5, 7.5, 7.5]);
    }

    #[test]
    fn names_iterate_in_registration_order() {
        let mut store = SpeciesStore::new(1);
        store.register("c").unwrap();
        store.register("a").unwrap();
        store.register("b").unwrap();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    proptest! {
        #[test]
        fn every_field_matches_particle_count(
            n in 0usize..64,
            names in prop::collection::hash_set("[a-z]{1,8}", 0..16),
        ) {
            let mut store = SpeciesStore::new(n);
            for name in &names {
                store.register(name).unwrap();
            }
            prop_assert_eq!(store.species_count(), names.len());
            for name in &names {
                let id = store.id(name).unwrap();
                prop_assert_eq!(store.values(id).len(), n);
            }
        }

        #[test]
        fn id_roundtrips_through_name(
            names in prop::collection::hash_set("[a-z]{1,8}", 1..16),
        ) {
            let mut store = SpeciesStore::new(2);
            let mut ids = Vec::new();
            for name in &names {
                ids.push((name.clone(), store.register(name).unwrap()));
            }
            for (name, id) in ids {
                prop_assert_eq!(store.id(&name), Some(id));
            }
        }
    }
}

//! Benchmark profiles for the Silt solver.
//!
//! Pre-built bodies and neighbor topologies shared by the benchmarks under
//! `benches/`:
//!
//! - [`reference_profile`]: 10K-particle closed ring, one diffusive species
//!   seeded with a smooth wave
//! - [`stress_profile`]: 100K-particle ring, same setup at 10x the size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_core::{InnerRelation, NeighborRecord, Neighborhood, SpeciesStore};

/// Particle count of the reference profile.
pub const REFERENCE_PARTICLES: usize = 10_000;

/// Particle count of the stress profile.
pub const STRESS_PARTICLES: usize = 100_000;

/// Build the reference profile: 10K-particle ring carrying `phi`.
pub fn reference_profile() -> (SpeciesStore, InnerRelation) {
    ring_profile(REFERENCE_PARTICLES)
}

/// Build the stress profile: 100K-particle ring carrying `phi`.
pub fn stress_profile() -> (SpeciesStore, InnerRelation) {
    ring_profile(STRESS_PARTICLES)
}

/// A closed ring of `n` particles at unit spacing with a `phi` species
/// initialized to a smooth sine wave, so the diffusion stencil has
/// non-trivial gradients everywhere.
pub fn ring_profile(n: usize) -> (SpeciesStore, InnerRelation) {
    let mut store = SpeciesStore::new(n);
    let phi = store.register("phi").unwrap();
    for (i, v) in store.values_mut(phi).iter_mut().enumerate() {
        *v = (i as f64 * 0.01).sin();
    }

    let mut neighborhoods = vec![Neighborhood::new(); n];
    for (i, hood) in neighborhoods.iter_mut().enumerate() {
        let left = (i + n - 1) % n;
        let right = (i + 1) % n;
        hood.push(NeighborRecord {
            index: left,
            r_ij: 1.0,
            e_ij: [1.0, 0.0, 0.0],
            dw_ij_v_j: -1.0,
        });
        hood.push(NeighborRecord {
            index: right,
            r_ij: 1.0,
            e_ij: [-1.0, 0.0, 0.0],
            dw_ij_v_j: -1.0,
        });
    }
    (store, InnerRelation::from_neighborhoods(neighborhoods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_is_well_formed() {
        let (store, relation) = reference_profile();
        assert_eq!(store.particle_count(), REFERENCE_PARTICLES);
        assert_eq!(relation.particle_count(), REFERENCE_PARTICLES);
        let phi = store.id("phi").unwrap();
        assert!(store.values(phi).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn ring_profile_is_regular() {
        let (_, relation) = ring_profile(7);
        for i in 0..7 {
            assert_eq!(relation.neighborhood(i).len(), 2);
        }
    }
}

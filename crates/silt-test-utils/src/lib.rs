//! Test fixtures for Silt development.
//!
//! Deterministic builders for species stores and neighbor geometry:
//! one-dimensional chains and rings with kernel-like symmetric weights, a
//! seeded random topology generator (ChaCha8, reproducible across runs and
//! platforms), and a one-to-one contact pairing.
//!
//! All fixtures produce *reciprocal* neighbor geometry: if `j` appears in
//! `i`'s list then `i` appears in `j`'s with the same distance and weight
//! and the opposite direction, matching what a real neighbor search
//! produces.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use silt_core::{
    ContactRelation, InnerRelation, NeighborRecord, Neighborhood, SpeciesStore, Vecd,
};

/// A store with each species uniformly initialized.
pub fn uniform_store(particle_count: usize, species: &[(&str, f64)]) -> SpeciesStore {
    let mut store = SpeciesStore::new(particle_count);
    for (name, value) in species {
        store
            .register_with(name, *value)
            .expect("fixture species names are unique");
    }
    store
}

fn record(index: usize, r_ij: f64, e_ij: Vecd, dw_ij_v_j: f64) -> NeighborRecord {
    NeighborRecord {
        index,
        r_ij,
        e_ij,
        dw_ij_v_j,
    }
}

/// A 1-D chain of `n` particles at `spacing` along x, nearest neighbors
/// only, all pairs sharing the kernel weight `dw_ij_v_j`.
pub fn chain_relation(n: usize, spacing: f64, dw_ij_v_j: f64) -> InnerRelation {
    let mut neighborhoods = vec![Neighborhood::new(); n];
    for i in 0..n {
        if i > 0 {
            // e_ij points from the neighbor toward i: +x for the left one.
            neighborhoods[i].push(record(i - 1, spacing, [1.0, 0.0, 0.0], dw_ij_v_j));
        }
        if i + 1 < n {
            neighborhoods[i].push(record(i + 1, spacing, [-1.0, 0.0, 0.0], dw_ij_v_j));
        }
    }
    InnerRelation::from_neighborhoods(neighborhoods)
}

/// A closed 1-D ring: like [`chain_relation`] but with the ends joined, so
/// every particle has exactly two neighbors.
pub fn ring_relation(n: usize, spacing: f64, dw_ij_v_j: f64) -> InnerRelation {
    let mut neighborhoods = vec![Neighborhood::new(); n];
    if n < 3 {
        return chain_relation(n, spacing, dw_ij_v_j);
    }
    for i in 0..n {
        let left = (i + n - 1) % n;
        let right = (i + 1) % n;
        neighborhoods[i].push(record(left, spacing, [1.0, 0.0, 0.0], dw_ij_v_j));
        neighborhoods[i].push(record(right, spacing, [-1.0, 0.0, 0.0], dw_ij_v_j));
    }
    InnerRelation::from_neighborhoods(neighborhoods)
}

/// A seeded random reciprocal topology: up to `pairs` distinct particle
/// pairs with random separations, directions, and (negative) kernel
/// weights. Self-pairs are skipped, so sparse or empty neighborhoods occur.
pub fn random_relation(seed: u64, n: usize, pairs: usize) -> InnerRelation {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut neighborhoods = vec![Neighborhood::new(); n];
    if n < 2 {
        return InnerRelation::from_neighborhoods(neighborhoods);
    }
    let mut seen = std::collections::HashSet::new();
    for _ in 0..pairs {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i == j || !seen.insert((i.min(j), i.max(j))) {
            continue;
        }
        let r_ij = rng.random_range(0.5..1.5);
        let e_ij = random_unit(&mut rng);
        let dw_ij_v_j = -rng.random_range(0.5..1.5);
        neighborhoods[i].push(record(j, r_ij, e_ij, dw_ij_v_j));
        let e_ji = [-e_ij[0], -e_ij[1], -e_ij[2]];
        neighborhoods[j].push(record(i, r_ij, e_ji, dw_ij_v_j));
    }
    InnerRelation::from_neighborhoods(neighborhoods)
}

fn random_unit(rng: &mut ChaCha8Rng) -> Vecd {
    loop {
        let v: Vecd = [
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ];
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if norm > 1e-3 {
            return [v[0] / norm, v[1] / norm, v[2] / norm];
        }
    }
}

/// A contact relation pairing owning-body particle `i` with contact-body
/// particle `i`, one record each, separated along x.
pub fn one_to_one_contact(n: usize, r_ij: f64, dw_ij_v_j: f64) -> ContactRelation {
    let neighborhoods = (0..n)
        .map(|i| {
            let mut hood = Neighborhood::new();
            hood.push(record(i, r_ij, [1.0, 0.0, 0.0], dw_ij_v_j));
            hood
        })
        .collect();
    ContactRelation::from_neighborhoods(neighborhoods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ends_have_one_neighbor() {
        let relation = chain_relation(4, 1.0, -1.0);
        assert_eq!(relation.neighborhood(0).len(), 1);
        assert_eq!(relation.neighborhood(1).len(), 2);
        assert_eq!(relation.neighborhood(3).len(), 1);
    }

    #[test]
    fn ring_is_regular() {
        let relation = ring_relation(5, 1.0, -1.0);
        for i in 0..5 {
            assert_eq!(relation.neighborhood(i).len(), 2);
        }
    }

    #[test]
    fn random_relation_is_reciprocal() {
        let relation = random_relation(7, 10, 30);
        for i in 0..10 {
            for rec in relation.neighborhood(i) {
                let back = relation
                    .neighborhood(rec.index)
                    .iter()
                    .find(|r| r.index == i)
                    .expect("missing reciprocal record");
                assert_eq!(back.r_ij, rec.r_ij);
                assert_eq!(back.dw_ij_v_j, rec.dw_ij_v_j);
                assert_eq!(back.e_ij, [-rec.e_ij[0], -rec.e_ij[1], -rec.e_ij[2]]);
            }
        }
    }

    #[test]
    fn random_relation_is_deterministic() {
        let a = format!("{:?}", random_relation(42, 8, 20));
        let b = format!("{:?}", random_relation(42, 8, 20));
        assert_eq!(a, b);
    }
}

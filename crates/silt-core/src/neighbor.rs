//! Read-only neighbor geometry supplied by the external neighbor search.
//!
//! The neighbor-search collaborator produces, per particle, an ordered list
//! of [`NeighborRecord`]s with precomputed kernel weights and separation
//! vectors. This crate never builds or refreshes these lists; it only
//! consumes them. Zero separation distance is a precondition violation on
//! the producer's side and is not checked here.

use smallvec::SmallVec;

use crate::vecd::{dot, scale, Vecd};

/// One entry in a particle's neighbor list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborRecord {
    /// Index of the neighbor particle (into its own body).
    pub index: usize,
    /// Separation distance `r_ij`, strictly positive by precondition.
    pub r_ij: f64,
    /// Unit separation direction `e_ij`, pointing from j toward i.
    pub e_ij: Vecd,
    /// Kernel-gradient magnitude premultiplied by the neighbor volume,
    /// `dW_ij * V_j`. Negative for the usual monotone smoothing kernels.
    pub dw_ij_v_j: f64,
}

impl NeighborRecord {
    /// The kernel gradient vector `dW_ij V_j * e_ij`.
    pub fn kernel_gradient(&self) -> Vecd {
        scale(&self.e_ij, self.dw_ij_v_j)
    }

    /// Effective contact area of the pair: the kernel gradient projected
    /// onto the separation direction, divided by the separation distance,
    /// scaled by two. This is the `area_ij` weight of the meshless
    /// diffusion stencil.
    pub fn surface_area(&self) -> f64 {
        2.0 * dot(&self.kernel_gradient(), &self.e_ij) / self.r_ij
    }
}

/// The ordered neighbor list of one particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Neighborhood {
    records: SmallVec<[NeighborRecord; 4]>,
}

impl Neighborhood {
    /// An empty neighborhood.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a neighbor record.
    pub fn push(&mut self, record: NeighborRecord) {
        self.records.push(record);
    }

    /// Number of neighbors.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the particle has no neighbors.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, NeighborRecord> {
        self.records.iter()
    }
}

impl FromIterator<NeighborRecord> for Neighborhood {
    fn from_iter<I: IntoIterator<Item = NeighborRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a NeighborRecord;
    type IntoIter = std::slice::Iter<'a, NeighborRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Neighbor lists among particles of the same body, one per particle.
#[derive(Clone, Debug, Default)]
pub struct InnerRelation {
    neighborhoods: Vec<Neighborhood>,
}

impl InnerRelation {
    /// Build from per-particle neighborhoods, index-aligned with the body.
    pub fn from_neighborhoods(neighborhoods: Vec<Neighborhood>) -> Self {
        Self { neighborhoods }
    }

    /// Number of particles covered by this relation.
    pub fn particle_count(&self) -> usize {
        self.neighborhoods.len()
    }

    /// The neighborhood of particle `i`.
    pub fn neighborhood(&self, i: usize) -> &Neighborhood {
        &self.neighborhoods[i]
    }
}

/// Neighbor lists from one body's particles toward one contact body.
///
/// Record indices refer into the contact body, not the owning body. A body
/// coupled to several contact bodies carries one `ContactRelation` per
/// contact body, in a fixed order.
#[derive(Clone, Debug, Default)]
pub struct ContactRelation {
    neighborhoods: Vec<Neighborhood>,
}

impl ContactRelation {
    /// Build from per-particle neighborhoods, index-aligned with the owner.
    pub fn from_neighborhoods(neighborhoods: Vec<Neighborhood>) -> Self {
        Self { neighborhoods }
    }

    /// Number of owning-body particles covered by this relation.
    pub fn particle_count(&self) -> usize {
        self.neighborhoods.len()
    }

    /// The contact neighborhood of owning-body particle `i`.
    pub fn neighborhood(&self, i: usize) -> &Neighborhood {
        &self.neighborhoods[i]
    }
}

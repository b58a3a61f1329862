//! Silt: meshless diffusion-reaction particle dynamics.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Silt sub-crates. For most users, adding `silt` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//! use std::sync::Arc;
//!
//! // A body of 5 particles carrying one species on a unit chain.
//! let mut store = SpeciesStore::new(5);
//! let phi = store.register("phi").unwrap();
//! store.set(phi, 2, 1.0);
//!
//! // Neighbor lists come from an external neighbor search; a chain here.
//! let neighborhoods = (0..5)
//!     .map(|i| {
//!         let mut hood = Neighborhood::new();
//!         if i > 0 {
//!             hood.push(NeighborRecord {
//!                 index: i - 1,
//!                 r_ij: 1.0,
//!                 e_ij: [1.0, 0.0, 0.0],
//!                 dw_ij_v_j: -1.0,
//!             });
//!         }
//!         if i + 1 < 5 {
//!             hood.push(NeighborRecord {
//!                 index: i + 1,
//!                 r_ij: 1.0,
//!                 e_ij: [-1.0, 0.0, 0.0],
//!                 dw_ij_v_j: -1.0,
//!             });
//!         }
//!         hood
//!     })
//!     .collect();
//! let relation = InnerRelation::from_neighborhoods(neighborhoods);
//!
//! // Second-order diffusion step.
//! let models: Vec<Arc<dyn DiffusionModel>> =
//!     vec![Arc::new(IsotropicDiffusion::new("phi", 0.1))];
//! let dt = diffusion_time_step(&models, 1.0);
//! let op = DiffusionInner::new(&store, models).unwrap();
//! let mut rk2 = RungeKutta2::new(op, &store);
//! rk2.exec(&mut store, &relation, dt);
//! assert!(store.value(phi, 2) < 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | species store, neighbor records, errors |
//! | [`material`] | `silt-material` | diffusion coefficients, reaction rate tables |
//! | [`dynamics`] | `silt-dynamics` | diffusion/reaction operators, RK2 wrapper |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Species store, neighbor geometry, and error types (`silt-core`).
pub use silt_core as types;

/// Diffusion-coefficient and reaction-rate models (`silt-material`).
pub use silt_material as material;

/// The operators advancing species fields (`silt-dynamics`).
pub use silt_dynamics as dynamics;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use silt_core::{
        ConfigError, ContactRelation, InnerRelation, NeighborRecord, Neighborhood, SpeciesId,
        SpeciesStore, Vecd,
    };

    // Material models
    pub use silt_material::{
        diffusion_time_step, DiffusionModel, DirectionalDiffusion, IsotropicDiffusion,
        LocalSpecies, ReactionModel,
    };

    // Operators
    pub use silt_dynamics::{
        ContactBody, DiffusionContact, DiffusionDirichlet, DiffusionInner, DiffusionRelaxation,
        ExponentialRelaxation, ReactionRelaxation, ReactionScheme, RungeKutta2,
    };
}

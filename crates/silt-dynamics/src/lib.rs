//! Operators advancing species fields for the Silt meshless solver.
//!
//! Each simulation step the outer driver runs the diffusion operator
//! (optionally wrapped in [`RungeKutta2`]) over all particles to update
//! spatially-coupled species, and independently runs the reaction operator
//! to advance locally-coupled species. Both read from and write into the
//! same [`SpeciesStore`](silt_core::SpeciesStore); they never call each
//! other.
//!
//! # Phase structure (each diffusion step)
//!
//! 1. `interaction(i, dt)` — accumulate flux into operator-owned change-rate
//!    buffers; the store is read-only.
//! 2. barrier — every particle's accumulation completes before any commit.
//! 3. `update(i, dt)` — commit `value += dt * rate` into the store.
//!
//! [`DiffusionRelaxation::exec`] sequences the two loops; the borrow shapes
//! (`&SpeciesStore` during interaction, `&mut SpeciesStore` during update)
//! enforce the barrier.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod contact;
pub mod inner;
pub mod reaction;
pub mod relaxation;
pub mod rk2;

pub use contact::{ContactBody, DiffusionContact, DiffusionDirichlet};
pub use inner::DiffusionInner;
pub use reaction::{ExponentialRelaxation, ReactionRelaxation, ReactionScheme};
pub use relaxation::{DiffusionRelaxation, DiffusionSlot};
pub use rk2::RungeKutta2;

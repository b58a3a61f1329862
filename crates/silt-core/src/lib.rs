//! Core types for the Silt meshless diffusion-reaction solver.
//!
//! A *body* is a cloud of discretization particles, each carrying a set of
//! named scalar fields ("species"). This crate provides the [`SpeciesStore`]
//! holding those fields, the read-only neighbor geometry produced by an
//! external neighbor search ([`NeighborRecord`], [`InnerRelation`],
//! [`ContactRelation`]), and the construction-time [`ConfigError`] taxonomy.
//!
//! The operators that advance species values live in `silt-dynamics`;
//! material models (diffusion coefficients, reaction rate tables) live in
//! `silt-material`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod neighbor;
pub mod store;
pub mod vecd;

pub use error::ConfigError;
pub use neighbor::{ContactRelation, InnerRelation, NeighborRecord, Neighborhood};
pub use store::{SpeciesId, SpeciesStore};
pub use vecd::{dot, scale, Vecd, DIMENSIONS};

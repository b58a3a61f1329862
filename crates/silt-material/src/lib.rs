//! Material models for the Silt meshless diffusion-reaction solver.
//!
//! Two concerns live here, both consumed read-only by the operators in
//! `silt-dynamics`:
//!
//! - [`DiffusionModel`] implementations map a particle pair and its
//!   separation direction to an inter-particle diffusion coefficient, and
//!   declare which species the coefficient transports and which species'
//!   spatial difference drives the flux.
//! - [`ReactionModel`] holds the ordered table of pure production/loss rate
//!   functions for the local kinetics system, with the species-to-index
//!   binding made explicit and validated at build time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod diffusion;
pub mod reaction;

pub use diffusion::{
    diffusion_time_step, DiffusionModel, DirectionalDiffusion, IsotropicDiffusion,
};
pub use reaction::{LocalSpecies, RateFunction, ReactionModel, ReactionModelBuilder};

//! Configuration errors detected when operators are constructed.
//!
//! The solver has no runtime-recoverable errors: every per-step operation is
//! a deterministic numerical transform over already-validated data. What can
//! go wrong is wiring — a species name that resolves to nothing, a contact
//! body that never registered the field a coupling needs. All of that is
//! caught once, before any step runs, and surfaced as a [`ConfigError`] so
//! embedding callers (tests, composed pipelines) can recover.

use std::error::Error;
use std::fmt;

/// A fatal wiring error detected at operator or model construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A species name was registered twice in the same store.
    DuplicateSpecies {
        /// The offending species name.
        species: String,
    },
    /// A species name required by an operator is absent from its own store.
    MissingSpecies {
        /// The unresolved species name.
        species: String,
    },
    /// A gradient-source species required for cross-body coupling is absent
    /// from a contact body's store. The physical coupling is undefined
    /// without it.
    MissingContactSpecies {
        /// The unresolved species name.
        species: String,
        /// Position of the contact body in the construction ordering.
        body: usize,
    },
    /// A reaction model was built with a different number of species than
    /// its local-vector size.
    SpeciesCountMismatch {
        /// Expected number of reactive species.
        expected: usize,
        /// Number actually supplied.
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSpecies { species } => {
                write!(f, "species '{species}' is already registered")
            }
            Self::MissingSpecies { species } => {
                write!(f, "species '{species}' is not registered in the store")
            }
            Self::MissingContactSpecies { species, body } => {
                write!(f, "species '{species}' is not found in contact body {body}")
            }
            Self::SpeciesCountMismatch { expected, found } => {
                write!(f, "reaction model expects {expected} species, got {found}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_species() {
        let err = ConfigError::MissingContactSpecies {
            species: "phi".into(),
            body: 2,
        };
        assert_eq!(err.to_string(), "species 'phi' is not found in contact body 2");
    }
}

//! The local reaction kinetics model: ordered production/loss rate tables.

use silt_core::ConfigError;

/// Snapshot of all reactive species' values at one particle.
pub type LocalSpecies<const N: usize> = [f64; N];

/// A pure rate function of the full local species vector.
///
/// Evaluated per particle per sweep step; must be side-effect free. Outputs
/// are trusted: the solver does not clamp or validate them beyond what the
/// single-species update scheme enforces.
pub type RateFunction<const N: usize> = Box<dyn Fn(&LocalSpecies<N>) -> f64 + Send + Sync>;

/// An ordered set of production and loss rate functions, one pair per
/// reactive species.
///
/// The order of species in the model defines the index layout of the
/// [`LocalSpecies`] vector and the sweep order of the reaction operator.
/// The binding between names, rate functions, and indices is established
/// through the builder and validated at [`build`](ReactionModelBuilder::build)
/// rather than left as a positional convention.
///
/// Stateless; shared read-only across particles.
pub struct ReactionModel<const N: usize> {
    species: [String; N],
    production: [RateFunction<N>; N],
    loss: [RateFunction<N>; N],
}

impl<const N: usize> std::fmt::Debug for ReactionModel<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionModel")
            .field("species", &self.species)
            .finish_non_exhaustive()
    }
}

impl<const N: usize> ReactionModel<N> {
    /// Start building a model for `N` reactive species.
    pub fn builder() -> ReactionModelBuilder<N> {
        ReactionModelBuilder {
            entries: Vec::new(),
        }
    }

    /// Species names in local-vector index order.
    pub fn species(&self) -> &[String; N] {
        &self.species
    }

    /// Production rate of species `k` for the local vector.
    pub fn production_rate(&self, k: usize, local: &LocalSpecies<N>) -> f64 {
        (self.production[k])(local)
    }

    /// Loss rate of species `k` for the local vector.
    pub fn loss_rate(&self, k: usize, local: &LocalSpecies<N>) -> f64 {
        (self.loss[k])(local)
    }
}

/// Builder binding species names to their rate-function pair, in order.
pub struct ReactionModelBuilder<const N: usize> {
    entries: Vec<(String, RateFunction<N>, RateFunction<N>)>,
}

impl<const N: usize> ReactionModelBuilder<N> {
    /// Append a species with its production and loss rate functions.
    ///
    /// The call order defines the species' index in the local vector.
    pub fn species(
        mut self,
        name: &str,
        production: impl Fn(&LocalSpecies<N>) -> f64 + Send + Sync + 'static,
        loss: impl Fn(&LocalSpecies<N>) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.entries
            .push((name.to_string(), Box::new(production), Box::new(loss)));
        self
    }

    /// Validate the binding and produce the model.
    ///
    /// Fails if the number of species differs from `N` or a name repeats.
    pub fn build(self) -> Result<ReactionModel<N>, ConfigError> {
        if self.entries.len() != N {
            return Err(ConfigError::SpeciesCountMismatch {
                expected: N,
                found: self.entries.len(),
            });
        }
        for (k, (name, _, _)) in self.entries.iter().enumerate() {
            if self.entries[..k].iter().any(|(other, _, _)| other == name) {
                return Err(ConfigError::DuplicateSpecies {
                    species: name.clone(),
                });
            }
        }

        let mut species = Vec::with_capacity(N);
        let mut production = Vec::with_capacity(N);
        let mut loss = Vec::with_capacity(N);
        for (name, p, l) in self.entries {
            species.push(name);
            production.push(p);
            loss.push(l);
        }
        // Lengths were checked above; the conversions cannot fail.
        let fallback = || ConfigError::SpeciesCountMismatch {
            expected: N,
            found: N,
        };
        Ok(ReactionModel {
            species: species.try_into().map_err(|_| fallback())?,
            production: production.try_into().map_err(|_| fallback())?,
            loss: loss.try_into().map_err(|_| fallback())?,
        })
    }
}

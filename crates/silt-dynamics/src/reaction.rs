//! Local reaction kinetics: directional Gauss-Seidel sweeps per particle.

use silt_core::{ConfigError, SpeciesId, SpeciesStore};
use silt_material::{LocalSpecies, ReactionModel};

/// The single-species update step combining old value, production rate,
/// loss rate, and `dt` into a new concentration.
///
/// A tunable component: the sweeps fix evaluation order, the scheme fixes
/// the per-species formula. Implementations must keep concentration-like
/// quantities physically admissible (non-negative for non-negative inputs).
pub trait ReactionScheme: Send + Sync {
    /// Advance one species over `dt` with frozen production and loss rates.
    fn advance(&self, value: f64, production: f64, loss: f64, dt: f64) -> f64;
}

/// Exponential time differencing for stiff first-order kinetics.
///
/// Treats the ODE `dv/dt = p - l * v` with rates frozen over the step:
///
/// ```text
/// v' = v * exp(-l * dt) + p * (1 - exp(-l * dt)) / l
/// ```
///
/// Exact for constant rates, positivity-preserving, and implicit in the loss
/// term, so arbitrarily stiff losses stay stable. Falls back to the
/// first-order series when `l * dt` underflows the formula.
pub struct ExponentialRelaxation;

impl ReactionScheme for ExponentialRelaxation {
    fn advance(&self, value: f64, production: f64, loss: f64, dt: f64) -> f64 {
        let decay = loss * dt;
        if decay.abs() < 1e-12 {
            return value + (production - loss * value) * dt;
        }
        let survival = (-decay).exp();
        value * survival + production * (1.0 - survival) / loss
    }
}

/// Advances the reactive species of one body, particle by particle, with no
/// neighbor access.
///
/// Each call materializes a [`LocalSpecies`] snapshot of the particle's
/// reactive values, sweeps it in index order, and writes it back. Within a
/// sweep, species `k`'s rates are evaluated against the partially-updated
/// vector — species visited earlier in the same sweep contribute their new
/// values (Gauss-Seidel coupling). Pairing a [`forward`] half-step with a
/// [`backward`] half-step symmetrizes the splitting error; the alternation
/// pattern belongs to the orchestrating driver.
///
/// [`forward`]: ReactionRelaxation::forward
/// [`backward`]: ReactionRelaxation::backward
pub struct ReactionRelaxation<const N: usize, S: ReactionScheme = ExponentialRelaxation> {
    slots: [SpeciesId; N],
    model: ReactionModel<N>,
    scheme: S,
}

impl<const N: usize, S: ReactionScheme> std::fmt::Debug for ReactionRelaxation<N, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionRelaxation")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl<const N: usize> ReactionRelaxation<N, ExponentialRelaxation> {
    /// Bind the model's species to the store with the default
    /// [`ExponentialRelaxation`] scheme.
    pub fn new(store: &SpeciesStore, model: ReactionModel<N>) -> Result<Self, ConfigError> {
        Self::with_scheme(store, model, ExponentialRelaxation)
    }
}

impl<const N: usize, S: ReactionScheme> ReactionRelaxation<N, S> {
    /// Bind the model's species to the store, resolving each reactive
    /// species name to its slot once.
    pub fn with_scheme(
        store: &SpeciesStore,
        model: ReactionModel<N>,
        scheme: S,
    ) -> Result<Self, ConfigError> {
        let mut slots = [SpeciesId(0); N];
        for (k, name) in model.species().iter().enumerate() {
            slots[k] = store.id(name).ok_or_else(|| ConfigError::MissingSpecies {
                species: name.clone(),
            })?;
        }
        Ok(Self {
            slots,
            model,
            scheme,
        })
    }

    fn load(&self, store: &SpeciesStore, i: usize) -> LocalSpecies<N> {
        std::array::from_fn(|k| store.value(self.slots[k], i))
    }

    fn apply(&self, store: &mut SpeciesStore, i: usize, local: &LocalSpecies<N>) {
        for (k, slot) in self.slots.iter().enumerate() {
            store.set(*slot, i, local[k]);
        }
    }

    fn advance_species(&self, local: &mut LocalSpecies<N>, k: usize, dt: f64) {
        let production = self.model.production_rate(k, local);
        let loss = self.model.loss_rate(k, local);
        local[k] = self.scheme.advance(local[k], production, loss, dt);
    }

    /// Sweep particle `i`'s reactive species in ascending index order.
    pub fn forward(&self, store: &mut SpeciesStore, i: usize, dt: f64) {
        let mut local = self.load(store, i);
        for k in 0..N {
            self.advance_species(&mut local, k, dt);
        }
        self.apply(store, i, &local);
    }

    /// Sweep particle `i`'s reactive species in descending index order.
    pub fn backward(&self, store: &mut SpeciesStore, i: usize, dt: f64) {
        let mut local = self.load(store, i);
        for k in (0..N).rev() {
            self.advance_species(&mut local, k, dt);
        }
        self.apply(store, i, &local);
    }

    /// Forward sweep over every particle.
    pub fn exec_forward(&self, store: &mut SpeciesStore, dt: f64) {
        for i in 0..store.particle_count() {
            self.forward(store, i, dt);
        }
    }

    /// Backward sweep over every particle.
    pub fn exec_backward(&self, store: &mut SpeciesStore, dt: f64) {
        for i in 0..store.particle_count() {
            self.backward(store, i, dt);
        }
    }
}

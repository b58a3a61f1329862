//! Inter-particle diffusion coefficient models.

use std::sync::Arc;

use silt_core::vecd::{dot, Vecd, DIMENSIONS};

/// A diffusion coefficient model bound to one diffusive species.
///
/// The model names the species whose value the flux transports
/// ([`species`](DiffusionModel::species)) and the species whose spatial
/// difference drives the flux
/// ([`gradient_species`](DiffusionModel::gradient_species)). The two may be
/// the same field or distinct fields, e.g. a damaged/intact composite
/// transport case where flux in the intact fraction is driven by the total
/// concentration.
///
/// Models are stateless and shared read-only across particles; operators
/// hold them as `Arc<dyn DiffusionModel>`.
pub trait DiffusionModel: Send + Sync {
    /// Name of the diffusive species this model transports.
    fn species(&self) -> &str;

    /// Name of the gradient-source species driving the flux.
    fn gradient_species(&self) -> &str;

    /// Inter-particle diffusion coefficient for the pair `(i, j)` separated
    /// along the unit direction `e_ij`.
    fn inter_particle_coff(&self, i: usize, j: usize, e_ij: &Vecd) -> f64;

    /// Reference coefficient magnitude used for the stability estimate.
    fn reference_coff(&self) -> f64;
}

/// Direction-independent constant diffusion coefficient.
pub struct IsotropicDiffusion {
    species: String,
    gradient_species: String,
    coff: f64,
}

impl IsotropicDiffusion {
    /// A constant coefficient `coff` for `species`, driven by its own
    /// spatial difference.
    pub fn new(species: &str, coff: f64) -> Self {
        Self {
            species: species.to_string(),
            gradient_species: species.to_string(),
            coff,
        }
    }

    /// Drive the flux with a different gradient-source species.
    pub fn with_gradient_species(mut self, gradient_species: &str) -> Self {
        self.gradient_species = gradient_species.to_string();
        self
    }
}

impl DiffusionModel for IsotropicDiffusion {
    fn species(&self) -> &str {
        &self.species
    }

    fn gradient_species(&self) -> &str {
        &self.gradient_species
    }

    fn inter_particle_coff(&self, _i: usize, _j: usize, _e_ij: &Vecd) -> f64 {
        self.coff
    }

    fn reference_coff(&self) -> f64 {
        self.coff
    }
}

/// Diffusion coefficient biased along a reference axis.
///
/// The pair coefficient is `coff + bias * (e_ij . axis)^2`: isotropic
/// baseline plus an anisotropic contribution for pairs aligned with the
/// axis (e.g. fiber-aligned conduction).
pub struct DirectionalDiffusion {
    species: String,
    gradient_species: String,
    coff: f64,
    bias: f64,
    axis: Vecd,
}

impl DirectionalDiffusion {
    /// Baseline coefficient `coff` plus `bias` along the (unit) `axis`.
    pub fn new(species: &str, coff: f64, bias: f64, axis: Vecd) -> Self {
        Self {
            species: species.to_string(),
            gradient_species: species.to_string(),
            coff,
            bias,
            axis,
        }
    }

    /// Drive the flux with a different gradient-source species.
    pub fn with_gradient_species(mut self, gradient_species: &str) -> Self {
        self.gradient_species = gradient_species.to_string();
        self
    }
}

impl DiffusionModel for DirectionalDiffusion {
    fn species(&self) -> &str {
        &self.species
    }

    fn gradient_species(&self) -> &str {
        &self.gradient_species
    }

    fn inter_particle_coff(&self, _i: usize, _j: usize, e_ij: &Vecd) -> f64 {
        let aligned = dot(e_ij, &self.axis);
        self.coff + self.bias * aligned * aligned
    }

    fn reference_coff(&self) -> f64 {
        self.coff + self.bias.abs()
    }
}

/// Explicit-step stability estimate for a set of diffusions.
///
/// `0.5 * h^2 / (dim * max reference coefficient)` for the reference
/// smoothing length `h`. Returns `f64::INFINITY` when no model imposes a
/// constraint (empty set or all-zero coefficients).
pub fn diffusion_time_step(models: &[Arc<dyn DiffusionModel>], smoothing_length: f64) -> f64 {
    let max_coff = models
        .iter()
        .map(|m| m.reference_coff())
        .fold(0.0f64, f64::max);
    if max_coff <= 0.0 {
        return f64::INFINITY;
    }
    0.5 * smoothing_length * smoothing_length / (DIMENSIONS as f64 * max_coff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn isotropic_ignores_direction() {
        let model = IsotropicDiffusion::new("phi", 0.3);
        assert_eq!(model.inter_particle_coff(0, 1, &[1.0, 0.0, 0.0]), 0.3);
        assert_eq!(model.inter_particle_coff(5, 9, &[0.0, -1.0, 0.0]), 0.3);
        assert_eq!(model.species(), "phi");
        assert_eq!(model.gradient_species(), "phi");
    }

    #[test]
    fn gradient_species_can_differ() {
        let model = IsotropicDiffusion::new("phi_damaged", 0.1).with_gradient_species("phi");
        assert_eq!(model.species(), "phi_damaged");
        assert_eq!(model.gradient_species(), "phi");
    }

    #[test]
    fn directional_peaks_along_axis() {
        let model = DirectionalDiffusion::new("phi", 0.1, 0.4, [1.0, 0.0, 0.0]);
        let along = model.inter_particle_coff(0, 1, &[1.0, 0.0, 0.0]);
        let across = model.inter_particle_coff(0, 1, &[0.0, 1.0, 0.0]);
        assert!((along - 0.5).abs() < 1e-12);
        assert!((across - 0.1).abs() < 1e-12);
    }

    #[test]
    fn time_step_scales_with_smoothing_length() {
        let models: Vec<Arc<dyn DiffusionModel>> = vec![
            Arc::new(IsotropicDiffusion::new("phi", 0.5)),
            Arc::new(IsotropicDiffusion::new("psi", 2.0)),
        ];
        let dt = diffusion_time_step(&models, 0.1);
        // 0.5 * 0.01 / (3 * 2.0)
        assert!((dt - 0.005 / 6.0).abs() < 1e-15);
        assert!(diffusion_time_step(&models, 0.2) > dt);
    }

    #[test]
    fn time_step_unconstrained_without_models() {
        assert_eq!(diffusion_time_step(&[], 0.1), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn time_step_is_monotone(
            coff in 1e-3f64..1e3,
            factor in 1.5f64..8.0,
            h in 1e-2f64..10.0,
        ) {
            let base: Vec<Arc<dyn DiffusionModel>> =
                vec![Arc::new(IsotropicDiffusion::new("phi", coff))];
            let stronger: Vec<Arc<dyn DiffusionModel>> =
                vec![Arc::new(IsotropicDiffusion::new("phi", coff * factor))];
            // Stronger diffusion tightens the estimate, a longer smoothing
            // length loosens it.
            prop_assert!(diffusion_time_step(&stronger, h) < diffusion_time_step(&base, h));
            prop_assert!(diffusion_time_step(&base, factor * h) > diffusion_time_step(&base, h));
        }

        #[test]
        fn time_step_is_set_by_the_strongest_model(
            coffs in prop::collection::vec(1e-3f64..1e3, 1..6),
            h in 1e-2f64..10.0,
        ) {
            let models: Vec<Arc<dyn DiffusionModel>> = coffs
                .iter()
                .map(|&c| Arc::new(IsotropicDiffusion::new("phi", c)) as Arc<dyn DiffusionModel>)
                .collect();
            let max = coffs.iter().fold(0.0f64, |a, &b| a.max(b));
            let expected = 0.5 * h * h / (DIMENSIONS as f64 * max);
            prop_assert!((diffusion_time_step(&models, h) - expected).abs() <= 1e-12 * expected);
        }
    }
}

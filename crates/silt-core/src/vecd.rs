//! Fixed-dimension vector helpers.
//!
//! The solver only needs dot products and scaling of separation directions
//! and kernel gradients, so vectors are plain `[f64; 3]` arrays. Lower
//! dimensional setups embed by zeroing the unused components.

/// Spatial dimension of the solver.
pub const DIMENSIONS: usize = 3;

/// A spatial vector (separation direction, kernel gradient).
pub type Vecd = [f64; 3];

/// Dot product of two vectors.
pub fn dot(a: &Vecd, b: &Vecd) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Scale a vector by a scalar.
pub fn scale(v: &Vecd, s: f64) -> Vecd {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_unit_axes() {
        let x: Vecd = [1.0, 0.0, 0.0];
        let y: Vecd = [0.0, 1.0, 0.0];
        assert_eq!(dot(&x, &x), 1.0);
        assert_eq!(dot(&x, &y), 0.0);
    }

    #[test]
    fn scale_is_componentwise() {
        let v: Vecd = [1.0, -2.0, 0.5];
        assert_eq!(scale(&v, 2.0), [2.0, -4.0, 1.0]);
    }
}

//! RE3-5-4: vehicle crashworthiness design

use crate::bounds::{BoundRegistry, VariableBound};
use crate::problem::{Problem, map_rows};
use ndarray::{Array2, ArrayView2};

/// Vehicle crashworthiness design problem (RE3-5-4), 5 variables, 3 objectives.
///
/// f1 is the vehicle mass, f2 the acceleration characteristic and f3 the
/// toe-board intrusion. x1..x5 are the thicknesses of the five reinforced
/// members around the frontal structure, each in [1, 3].
#[derive(Debug, Clone)]
pub struct VehicleCrashworthiness {
    bounds: BoundRegistry,
}

impl VehicleCrashworthiness {
    /// Create the problem with its fixed bounds
    pub fn new() -> Self {
        Self {
            bounds: BoundRegistry::from_static(
                (1..=5)
                    .map(|i| VariableBound::new(format!("x{}", i), 1.0, 3.0))
                    .collect(),
            ),
        }
    }
}

impl Default for VehicleCrashworthiness {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for VehicleCrashworthiness {
    fn name(&self) -> &str {
        "RE3_5_4"
    }

    fn bounds(&self) -> &BoundRegistry {
        &self.bounds
    }

    fn n_obj(&self) -> usize {
        3
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        map_rows(x, |row| {
            let (x1, x2, x3, x4, x5) = (row[0], row[1], row[2], row[3], row[4]);

            let f1 = 1640.2823
                + 2.3573285 * x1
                + 2.3220035 * x2
                + 4.5688768 * x3
                + 7.7213633 * x4
                + 4.4559504 * x5;

            let f2 = 6.5856 + 1.15 * x1 - 1.0427 * x2 + 0.9738 * x3 + 0.8364 * x4
                - 0.3695 * x1 * x4
                + 0.0961 * x1 * x5
                + 0.3628 * x2 * x4
                - 0.1106 * x1.powi(2)
                - 0.3437 * x3.powi(2)
                + 0.1764 * x4.powi(2);

            let f3 = -0.0551 + 0.0181 * x1 + 0.1024 * x2 + 0.0421 * x3
                - 0.0073 * x1 * x2
                + 0.024 * x2 * x3
                - 0.0118 * x2 * x4
                - 0.0204 * x3 * x4
                - 0.008 * x3 * x5
                - 0.0241 * x2.powi(2)
                + 0.0109 * x4.powi(2);

            [f1, f2, f3]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_crashworthiness_at_unit_thickness() {
        let p = VehicleCrashworthiness::new();
        let f = p.evaluate(&Array2::ones((1, 5))).unwrap().f;

        let f1 = 1640.2823 + 2.3573285 + 2.3220035 + 4.5688768 + 7.7213633 + 4.4559504;
        let f2 = 6.5856 + 1.15 - 1.0427 + 0.9738 + 0.8364 - 0.3695 + 0.0961 + 0.3628 - 0.1106
            - 0.3437
            + 0.1764;
        let f3 = -0.0551 + 0.0181 + 0.1024 + 0.0421 - 0.0073 + 0.024 - 0.0118 - 0.0204 - 0.008
            - 0.0241
            + 0.0109;
        assert_relative_eq!(f[[0, 0]], f1, max_relative = 1e-12);
        assert_relative_eq!(f[[0, 1]], f2, max_relative = 1e-12);
        assert_relative_eq!(f[[0, 2]], f3, max_relative = 1e-10);
    }

    #[test]
    fn test_mass_increases_with_thickness() {
        let p = VehicleCrashworthiness::new();
        let f = p
            .evaluate(&ndarray::array![[1.0, 1.0, 1.0, 1.0, 1.0], [3.0, 3.0, 3.0, 3.0, 3.0]])
            .unwrap()
            .f;
        assert!(f[[1, 0]] > f[[0, 0]]);
    }
}

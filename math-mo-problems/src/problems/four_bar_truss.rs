//! RE2-4-1: four bar truss design

use crate::bounds::{BoundRegistry, VariableBound};
use crate::problem::{Problem, stack_columns};
use ndarray::{Array1, Array2, ArrayView2, Zip};

/// Four bar truss design problem (RE2-4-1), 4 variables, 2 objectives.
///
/// f1 is the structural volume and f2 the joint displacement of the truss;
/// x1..x4 are the cross-sectional areas of the four bars.
///
/// Bounds: x1, x4 in [a, 3a]; x2, x3 in [sqrt(2a), 3a] with a = F / sigma.
#[derive(Debug, Clone)]
pub struct FourBarTruss {
    bounds: BoundRegistry,
}

impl FourBarTruss {
    /// Load in kN
    pub const F: f64 = 10.0;
    /// Young modulus in kN/cm^2
    pub const E: f64 = 2e5;
    /// Bar length in cm
    pub const L: f64 = 200.0;
    /// Allowable stress in kN/cm^2
    pub const SIGMA: f64 = 10.0;
    /// Area scale a = F / sigma
    pub const A: f64 = Self::F / Self::SIGMA;

    /// Create the problem with its fixed bounds
    pub fn new() -> Self {
        let a = Self::A;
        let bounds = vec![
            VariableBound::new("x1", a, 3.0 * a),
            VariableBound::new("x2", (2.0 * a).sqrt(), 3.0 * a),
            VariableBound::new("x3", (2.0 * a).sqrt(), 3.0 * a),
            VariableBound::new("x4", a, 3.0 * a),
        ];
        Self {
            bounds: BoundRegistry::from_static(bounds),
        }
    }
}

impl Default for FourBarTruss {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for FourBarTruss {
    fn name(&self) -> &str {
        "RE2_4_1"
    }

    fn bounds(&self) -> &BoundRegistry {
        &self.bounds
    }

    fn n_obj(&self) -> usize {
        2
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        let sqrt2 = std::f64::consts::SQRT_2;
        let displacement = Self::F * Self::L / Self::E;

        let mut f1 = Array1::zeros(x.nrows());
        let mut f2 = Array1::zeros(x.nrows());
        Zip::from(&mut f1)
            .and(&mut f2)
            .and(x.rows())
            .for_each(|f1, f2, row| {
                let (x1, x2, x3, x4) = (row[0], row[1], row[2], row[3]);
                *f1 = Self::L * (2.0 * x1 + (2.0 * x2).sqrt() + x3.sqrt() + x4);
                *f2 = displacement
                    * ((2.0 / x1) + (2.0 * sqrt2 / x2) - (2.0 * sqrt2 / x3) + (2.0 / x4));
            });

        stack_columns(x.nrows(), &[f1, f2])
    }
}

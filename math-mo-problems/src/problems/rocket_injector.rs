//! RE3-4-7: rocket injector design

use crate::bounds::{BoundRegistry, VariableBound};
use crate::problem::{Problem, map_rows};
use ndarray::{Array2, ArrayView2};

/// Rocket injector design problem (RE3-4-7), 4 variables, 3 objectives.
///
/// Response surfaces for the maximum injector face temperature (f1), the
/// distance from the inlet (f2) and the maximum post tip temperature (f3).
/// Variables, all in [0, 1]: hydrogen flow angle, hydrogen area, oxygen
/// area and oxidiser post tip thickness.
#[derive(Debug, Clone)]
pub struct RocketInjector {
    bounds: BoundRegistry,
}

impl RocketInjector {
    /// Create the problem with its fixed bounds
    pub fn new() -> Self {
        Self {
            bounds: BoundRegistry::from_static(
                (1..=4)
                    .map(|i| VariableBound::new(format!("x{}", i), 0.0, 1.0))
                    .collect(),
            ),
        }
    }
}

impl Default for RocketInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for RocketInjector {
    fn name(&self) -> &str {
        "RE3_4_7"
    }

    fn bounds(&self) -> &BoundRegistry {
        &self.bounds
    }

    fn n_obj(&self) -> usize {
        3
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        map_rows(x, |row| {
            let (x1, x2, x3, x4) = (row[0], row[1], row[2], row[3]);

            let f1 = 0.692 + 0.477 * x1 - 0.687 * x2 - 0.08 * x3 - 0.065 * x4
                - 0.167 * x1.powi(2)
                - 0.0129 * x2 * x1
                + 0.0796 * x2.powi(2)
                - 0.0634 * x3 * x1
                - 0.0257 * x3 * x2
                + 0.0877 * x3.powi(2)
                - 0.0521 * x4 * x1
                + 0.00156 * x4 * x2
                + 0.00198 * x4 * x3
                + 0.0184 * x4.powi(2);

            let f2 = 0.153 + 0.322 * x1 - 0.396 * x2 - 0.424 * x3 - 0.0226 * x4
                - 0.175 * x1.powi(2)
                - 0.0185 * x2 * x1
                + 0.0701 * x2.powi(2)
                - 0.251 * x3 * x1
                - 0.179 * x3 * x2
                + 0.0150 * x3.powi(2)
                - 0.0134 * x4 * x1
                + 0.0296 * x4 * x2
                + 0.0752 * x4 * x3
                + 0.0192 * x4.powi(2);

            let f3 = 0.370 - 0.205 * x1 + 0.307 * x2 + 0.108 * x3 + 1.019 * x4
                - 0.135 * x1.powi(2)
                + 0.0141 * x2 * x1
                + 0.0998 * x2.powi(2)
                + 0.208 * x3 * x1
                - 0.0301 * x3 * x2
                - 0.226 * x3.powi(2)
                + 0.353 * x4 * x1
                - 0.0497 * x4 * x3
                - 0.423 * x4.powi(2)
                + 0.202 * x2 * x1.powi(2)
                - 0.281 * x3 * x1.powi(2)
                - 0.342 * x2.powi(2) * x1
                - 0.245 * x2.powi(2) * x3
                + 0.281 * x3.powi(2) * x2
                - 0.184 * x4.powi(2) * x1
                - 0.281 * x2 * x1 * x3;

            [f1, f2, f3]
        })
    }
}

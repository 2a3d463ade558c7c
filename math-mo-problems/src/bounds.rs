//! Variable bounds and the per-problem bound registry.

use crate::error::{ProblemError, Result};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// A named box constraint `lower <= x <= upper` on one decision variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBound {
    /// Variable name (`x1`, `x2`, ...)
    pub name: String,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl VariableBound {
    /// Create a bound without validation; [`BoundRegistry::new`] validates.
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
        }
    }

    /// Interval width `upper - lower`
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Interval midpoint
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Whether `x` lies inside the closed interval
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }
}

/// Ordered, immutable set of variable bounds for one problem.
///
/// The order of the bounds is the column order expected in every sample batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundRegistry {
    variables: Vec<VariableBound>,
}

impl BoundRegistry {
    /// Build a registry, rejecting inverted or non-finite bounds and repeated names.
    pub fn new(variables: Vec<VariableBound>) -> Result<Self> {
        for (i, var) in variables.iter().enumerate() {
            if !var.is_valid() {
                return Err(ProblemError::InvalidBounds {
                    name: var.name.clone(),
                    lower: var.lower,
                    upper: var.upper,
                });
            }
            if variables[..i].iter().any(|other| other.name == var.name) {
                return Err(ProblemError::DuplicateVariable {
                    name: var.name.clone(),
                });
            }
        }
        Ok(Self { variables })
    }

    /// Build from bounds known to be valid at compile time.
    pub(crate) fn from_static(variables: Vec<VariableBound>) -> Self {
        debug_assert!(variables.iter().all(VariableBound::is_valid));
        Self { variables }
    }

    /// `n` variables named `x1..xn`, all sharing the same interval.
    pub fn uniform(n: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(
            (1..=n)
                .map(|i| VariableBound::new(format!("x{}", i), lower, upper))
                .collect(),
        )
    }

    /// Number of decision variables
    pub fn n_var(&self) -> usize {
        self.variables.len()
    }

    /// Bounds in column order
    pub fn variables(&self) -> &[VariableBound] {
        &self.variables
    }

    /// Look up a bound by variable name
    pub fn get(&self, name: &str) -> Option<&VariableBound> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Lower bounds as a length-M vector
    pub fn lower(&self) -> Array1<f64> {
        self.variables.iter().map(|v| v.lower).collect()
    }

    /// Upper bounds as a length-M vector
    pub fn upper(&self) -> Array1<f64> {
        self.variables.iter().map(|v| v.upper).collect()
    }

    /// `(lower, upper)` vectors in variable order, as consumed by optimizers
    pub fn bound_arrays(&self) -> (Array1<f64>, Array1<f64>) {
        (self.lower(), self.upper())
    }

    /// Bounds matrix for optimization (2 x n matrix)
    /// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
    pub fn as_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((2, self.n_var()), |(i, j)| {
            if i == 0 {
                self.variables[j].lower
            } else {
                self.variables[j].upper
            }
        })
    }

    /// Midpoint of every interval, as a single-sample batch row
    pub fn midpoints(&self) -> Array1<f64> {
        self.variables.iter().map(|v| v.midpoint()).collect()
    }

    /// Fail with [`ProblemError::InvalidShape`] unless `x` has one column per variable.
    pub fn check_columns(&self, x: &ArrayView2<f64>) -> Result<()> {
        if x.ncols() != self.n_var() {
            return Err(ProblemError::InvalidShape {
                expected: self.n_var(),
                got: x.ncols(),
            });
        }
        Ok(())
    }

    /// Rescale every column to `[-1, 1]`: `2 (x - lower) / (upper - lower) - 1`.
    ///
    /// A degenerate interval (`lower == upper`) maps to 0.
    pub fn normalize(&self, x: &ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_columns(x)?;
        let mut scaled = x.to_owned();
        for (mut column, var) in scaled.axis_iter_mut(Axis(1)).zip(&self.variables) {
            let width = var.width();
            if width > 0.0 {
                column.mapv_inplace(|xi| 2.0 * (xi - var.lower) / width - 1.0);
            } else {
                column.fill(0.0);
            }
        }
        Ok(scaled)
    }

    /// Inverse of [`normalize`](Self::normalize).
    pub fn denormalize(&self, x_scaled: &ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_columns(x_scaled)?;
        let mut x = x_scaled.to_owned();
        for (mut column, var) in x.axis_iter_mut(Axis(1)).zip(&self.variables) {
            let (lower, width) = (var.lower, var.width());
            column.mapv_inplace(|s| lower + 0.5 * (s + 1.0) * width);
        }
        Ok(x)
    }

    /// Whether every entry of `x` lies inside its column's interval.
    pub fn contains_all(&self, x: &ArrayView2<f64>) -> bool {
        x.ncols() == self.n_var()
            && x.axis_iter(Axis(0)).all(|row| {
                row.iter()
                    .zip(&self.variables)
                    .all(|(&xi, var)| var.contains(xi))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn truss_like() -> BoundRegistry {
        BoundRegistry::new(vec![
            VariableBound::new("x1", 1.0, 3.0),
            VariableBound::new("x2", 2.0_f64.sqrt(), 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_registry_rejects_inverted_bounds() {
        let err = BoundRegistry::new(vec![VariableBound::new("x1", 2.0, 1.0)]).unwrap_err();
        assert!(err.is_definition_error());
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let err = BoundRegistry::new(vec![
            VariableBound::new("x1", 0.0, 1.0),
            VariableBound::new("x1", 0.0, 2.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ProblemError::DuplicateVariable {
                name: "x1".to_string()
            }
        );
    }

    #[test]
    fn test_bound_arrays_follow_declaration_order() {
        let reg = truss_like();
        let (lower, upper) = reg.bound_arrays();
        assert_eq!(lower, array![1.0, 2.0_f64.sqrt()]);
        assert_eq!(upper, array![3.0, 3.0]);
        assert_eq!(reg.as_matrix().row(0), lower);
        assert_eq!(reg.as_matrix().row(1), upper);
        assert_eq!(reg.get("x2").map(|v| v.upper), Some(3.0));
    }

    #[test]
    fn test_normalize_maps_bounds_to_unit_interval() {
        let reg = truss_like();
        let (lower, upper) = reg.bound_arrays();
        let mut x = Array2::zeros((3, 2));
        x.row_mut(0).assign(&lower);
        x.row_mut(1).assign(&upper);
        x.row_mut(2).assign(&reg.midpoints());

        let s = reg.normalize(&x.view()).unwrap();
        assert_eq!(s.row(0), array![-1.0, -1.0]);
        assert_eq!(s.row(1), array![1.0, 1.0]);
        assert_abs_diff_eq!(s[[2, 0]], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s[[2, 1]], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_normalize_stays_in_range() {
        let reg = BoundRegistry::uniform(3, -5.0, 10.0).unwrap();
        let x = Array2::from_shape_fn((50, 3), |(i, j)| {
            -5.0 + 15.0 * ((i * 7 + j * 3) % 50) as f64 / 49.0
        });
        let s = reg.normalize(&x.view()).unwrap();
        assert!(s.iter().all(|&v| (-1.0..=1.0).contains(&v)));

        let back = reg.denormalize(&s.view()).unwrap();
        for (a, b) in back.iter().zip(x.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_interval_normalizes_to_zero() {
        let reg = BoundRegistry::new(vec![VariableBound::new("x1", 2.0, 2.0)]).unwrap();
        let s = reg.normalize(&array![[2.0], [2.0]].view()).unwrap();
        assert_eq!(s, array![[0.0], [0.0]]);
    }

    #[test]
    fn test_normalize_rejects_wrong_column_count() {
        let reg = truss_like();
        let err = reg.normalize(&Array2::zeros((1, 3)).view()).unwrap_err();
        assert_eq!(err, ProblemError::InvalidShape { expected: 2, got: 3 });
    }

    #[test]
    fn test_contains_all() {
        let reg = truss_like();
        assert!(reg.contains_all(&array![[1.0, 2.0], [3.0, 3.0]].view()));
        assert!(!reg.contains_all(&array![[0.5, 2.0]].view()));
    }
}

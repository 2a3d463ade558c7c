//! DTLZ2 and inverted DTLZ2 scalable test problems
//!
//! Each sample row is split into a position part (the first `n_obj - 1`
//! variables) and a shape part (the last `k` variables). The shape part feeds
//! the multi-modal distance term `g`, the position part the direction
//! scalars `s_i` that place the point on the unit hyper-quadrant.

use crate::bounds::BoundRegistry;
use crate::error::{ProblemError, Result};
use crate::problem::Problem;
use ndarray::{Array1, Array2, ArrayView2, Axis, s};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Parameters of a DTLZ instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtlzConfig {
    /// Number of objectives
    pub n_obj: usize,
    /// Number of shape (distance) variables
    pub k: usize,
    /// Exponent applied to each direction scalar
    pub beta: f64,
}

impl Default for DtlzConfig {
    fn default() -> Self {
        Self {
            n_obj: 3,
            k: 5,
            beta: 1.0,
        }
    }
}

impl DtlzConfig {
    /// Total variable count `n_obj + k - 1`
    pub fn n_var(&self) -> usize {
        self.n_obj + self.k - 1
    }

    fn validate(&self) -> Result<()> {
        if self.n_obj == 0 {
            return Err(ProblemError::InvalidParameter {
                name: "n_obj",
                value: self.n_obj.to_string(),
                reason: "at least one objective is required",
            });
        }
        if self.k == 0 {
            return Err(ProblemError::InvalidParameter {
                name: "k",
                value: self.k.to_string(),
                reason: "at least one shape variable is required",
            });
        }
        if !self.beta.is_finite() {
            return Err(ProblemError::InvalidParameter {
                name: "beta",
                value: self.beta.to_string(),
                reason: "exponent must be finite",
            });
        }
        Ok(())
    }
}

/// Shape-distortion term per row:
/// `g = k + sum((x_i - 0.5)^2 - cos(20 pi (x_i - 0.5)))`.
pub fn dtlz_g(shape: &ArrayView2<f64>) -> Array1<f64> {
    let k = shape.ncols() as f64;
    shape
        .mapv(|xi| {
            let d = xi - 0.5;
            d * d - (20.0 * PI * d).cos()
        })
        .sum_axis(Axis(1))
        + k
}

/// Direction scalars per row, one column per objective.
///
/// The objective count is `position.ncols() + 1`. Column 0 is the product of
/// all position cosines; column `j > 0` is the product of the first
/// `n_obj - 1 - j` cosines times the sine of the next position variable.
/// Every entry is raised to `beta`. An empty position part gives the single
/// scalar 1.
pub fn dtlz_s(position: &ArrayView2<f64>, beta: f64) -> Array2<f64> {
    let (n, n_obj) = (position.nrows(), position.ncols() + 1);
    let cos = position.mapv(|xi| (xi * FRAC_PI_2).cos());
    let sin = position.mapv(|xi| (xi * FRAC_PI_2).sin());

    let mut out = Array2::zeros((n, n_obj));
    for j in 0..n_obj {
        let mut column = out.column_mut(j);
        if j == 0 {
            let prod = cos.map_axis(Axis(1), |r| r.product());
            column.assign(&prod.mapv(|v| v.powf(beta)));
        } else {
            let i = n_obj - 1 - j;
            let prod = cos
                .slice(s![.., ..i])
                .map_axis(Axis(1), |r| r.product());
            column.assign(&(prod * &sin.column(i)).mapv(|v| v.powf(beta)));
        }
    }
    out
}

#[derive(Debug, Clone)]
struct DtlzCore {
    config: DtlzConfig,
    bounds: BoundRegistry,
}

impl DtlzCore {
    fn new(config: DtlzConfig) -> Result<Self> {
        config.validate()?;
        let bounds = BoundRegistry::uniform(config.n_var(), 0.0, 1.0)?;
        Ok(Self { config, bounds })
    }

    /// `(1 + g)` as an N x 1 column and the N x O direction scalars
    fn terms(&self, x: &ArrayView2<f64>) -> (Array2<f64>, Array2<f64>) {
        let split = self.config.n_obj - 1;
        let g = dtlz_g(&x.slice(s![.., split..]));
        let s = dtlz_s(&x.slice(s![.., ..split]), self.config.beta);
        ((g + 1.0).insert_axis(Axis(1)), s)
    }
}

/// DTLZ2: `f_i = (1 + g) s_i`, a concave spherical front.
#[derive(Debug, Clone)]
pub struct Dtlz2 {
    core: DtlzCore,
}

impl Dtlz2 {
    /// Create an instance; fails on `n_obj == 0`, `k == 0` or non-finite `beta`.
    pub fn new(config: DtlzConfig) -> Result<Self> {
        Ok(Self {
            core: DtlzCore::new(config)?,
        })
    }

    /// Instance parameters
    pub fn config(&self) -> &DtlzConfig {
        &self.core.config
    }
}

impl Problem for Dtlz2 {
    fn name(&self) -> &str {
        "DTLZ2"
    }

    fn bounds(&self) -> &BoundRegistry {
        &self.core.bounds
    }

    fn n_obj(&self) -> usize {
        self.core.config.n_obj
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        let (scale, s) = self.core.terms(x);
        &scale * &s
    }
}

/// Inverted DTLZ2: `f_i = (1 + g)(1 - s_i)`, a convex front.
#[derive(Debug, Clone)]
pub struct InvertedDtlz2 {
    core: DtlzCore,
}

impl InvertedDtlz2 {
    /// Create an instance; fails on `n_obj == 0`, `k == 0` or non-finite `beta`.
    pub fn new(config: DtlzConfig) -> Result<Self> {
        Ok(Self {
            core: DtlzCore::new(config)?,
        })
    }

    /// Instance parameters
    pub fn config(&self) -> &DtlzConfig {
        &self.core.config
    }
}

impl Problem for InvertedDtlz2 {
    fn name(&self) -> &str {
        "InvertedDTLZ2"
    }

    fn bounds(&self) -> &BoundRegistry {
        &self.core.bounds
    }

    fn n_obj(&self) -> usize {
        self.core.config.n_obj
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        let (scale, s) = self.core.terms(x);
        &scale * &s.mapv(|si| 1.0 - si)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_g_vanishes_at_half() {
        let g = dtlz_g(&Array2::from_elem((3, 5), 0.5).view());
        for gi in g.iter() {
            assert_abs_diff_eq!(*gi, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dtlz2_at_midpoint_reduces_to_direction_scalars() {
        let p = Dtlz2::new(DtlzConfig::default()).unwrap();
        assert_eq!(p.n_var(), 7);
        let f = p.evaluate(&Array2::from_elem((1, 7), 0.5)).unwrap().f;
        assert_abs_diff_eq!(f[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(f[[0, 1]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(f[[0, 2]], FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_dtlz2_front_is_spherical_when_g_is_zero() {
        let p = Dtlz2::new(DtlzConfig::default()).unwrap();
        let x = array![
            [0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5],
            [0.3, 0.9, 0.5, 0.5, 0.5, 0.5, 0.5],
            [1.0, 0.2, 0.5, 0.5, 0.5, 0.5, 0.5],
        ];
        let f = p.evaluate(&x).unwrap().f;
        for row in f.rows() {
            let norm_sq: f64 = row.iter().map(|v| v * v).sum();
            assert_abs_diff_eq!(norm_sq, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_objective_direction_is_one() {
        let config = DtlzConfig {
            n_obj: 1,
            k: 3,
            beta: 2.0,
        };
        let p = Dtlz2::new(config).unwrap();
        assert_eq!(p.n_var(), 3);
        let x = array![[0.5, 0.5, 0.5], [0.0, 1.0, 0.25]];
        let f = p.evaluate(&x).unwrap().f;
        let g = dtlz_g(&x.view());
        assert_eq!(f.ncols(), 1);
        assert_abs_diff_eq!(f[[0, 0]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f[[1, 0]], 1.0 + g[1], epsilon = 1e-12);
    }

    #[test]
    fn test_beta_raises_each_scalar() {
        let pos = array![[0.5, 0.5]];
        let s1 = dtlz_s(&pos.view(), 1.0);
        let s3 = dtlz_s(&pos.view(), 3.0);
        for (a, b) in s1.iter().zip(s3.iter()) {
            assert_abs_diff_eq!(a.powi(3), *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_direction_count_follows_position_width() {
        let s = dtlz_s(&Array2::from_elem((2, 0), 0.5).view(), 1.0);
        assert_eq!(s, array![[1.0], [1.0]]);

        // one position variable at 0.5: [cos(pi/4), sin(pi/4)]
        let s = dtlz_s(&array![[0.5]].view(), 1.0);
        assert_eq!(s.dim(), (1, 2));
        assert_abs_diff_eq!(s[[0, 0]], FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(s[[0, 1]], FRAC_1_SQRT_2, epsilon = 1e-12);

        assert_eq!(dtlz_s(&Array2::from_elem((1, 4), 0.5).view(), 1.0).ncols(), 5);
    }

    #[test]
    fn test_inverted_complements_original() {
        let config = DtlzConfig::default();
        let p = Dtlz2::new(config).unwrap();
        let q = InvertedDtlz2::new(config).unwrap();
        let x = Array2::from_shape_fn((6, 7), |(i, j)| ((i * 7 + j * 13) % 17) as f64 / 16.0);

        let f = p.evaluate(&x).unwrap().f;
        let f_inv = q.evaluate(&x).unwrap().f;
        let g = dtlz_g(&x.slice(s![.., 2..]));
        for i in 0..x.nrows() {
            for j in 0..3 {
                assert_abs_diff_eq!(f_inv[[i, j]], (1.0 + g[i]) - f[[i, j]], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let zero_obj = DtlzConfig {
            n_obj: 0,
            ..DtlzConfig::default()
        };
        let zero_k = DtlzConfig {
            k: 0,
            ..DtlzConfig::default()
        };
        let bad_beta = DtlzConfig {
            beta: f64::NAN,
            ..DtlzConfig::default()
        };
        assert!(Dtlz2::new(zero_obj).unwrap_err().is_definition_error());
        assert!(Dtlz2::new(zero_k).is_err());
        assert!(InvertedDtlz2::new(bad_beta).is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: DtlzConfig = serde_json::from_str(r#"{"n_obj": 4}"#).unwrap();
        assert_eq!(config.n_obj, 4);
        assert_eq!(config.k, 5);
        assert_eq!(config.n_var(), 8);
    }
}

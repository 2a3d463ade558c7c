//! Generic error functions modelling the noise of low-fidelity simulations.
//!
//! A test function `f(x)` becomes its low-fidelity counterpart
//! `f'(x, phi) = f(x) + e(x, phi)`, where `phi` in `[0, 10000]` is the
//! fidelity parameter (10000 is full fidelity) and `e` is one of the error
//! functions below. Inputs are expected in the normalized space `[-1, 1]`.
//!
//! Three families are provided:
//!
//! - **resolution** (`e_r1`..`e_r4`): deterministic oscillatory noise
//!   `sum_j a cos(w x_j + b + pi)` with `a = theta`, `w = 10 pi theta`,
//!   `b = 0.5 pi theta`;
//! - **stochastic** (`e_s1`..`e_s4`): uniform noise `r sigma + mu`;
//! - **instability** (`e_ins1`, `e_ins2`): a penalty `10 d` returned with
//!   probability `p`, 0 otherwise.
//!
//! Stochastic and instability variants draw exactly one uniform number per
//! row, in row order; resolution variants draw none.

use crate::error::{FidelityError, Result};
use ndarray::{Array1, ArrayView1, ArrayView2, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Mechanism by which an error function degrades an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Deterministic, oscillatory error (coarse meshes, truncated series)
    Resolution,
    /// Random error with bounded magnitude (convergence noise)
    Stochastic,
    /// Rare large failures (solver divergence)
    Instability,
}

impl fmt::Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorFamily::Resolution => "resolution",
            ErrorFamily::Stochastic => "stochastic",
            ErrorFamily::Instability => "instability",
        };
        f.write_str(name)
    }
}

/// The error functions, one variant per noise mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorFunction {
    /// `e_r1`: linear decay `theta = 1 - 1e-4 phi`
    #[default]
    #[serde(rename = "e_r1")]
    ResolutionLinear,
    /// `e_r2`: exponential decay `theta = exp(-2.5e-4 phi)`
    #[serde(rename = "e_r2")]
    ResolutionExponential,
    /// `e_r3`: ten-segment staircase decay
    #[serde(rename = "e_r3")]
    ResolutionStepped,
    /// `e_r4`: linear decay, amplitude scaled by `1 - |x - x_b|` around a baseline
    #[serde(rename = "e_r4")]
    ResolutionAnchored,
    /// `e_s1`: `sigma = 0.1 (1 - 1e-4 phi)`, zero mean
    #[serde(rename = "e_s1")]
    StochasticLinear,
    /// `e_s2`: `sigma = 0.1 exp(-5e-4 phi)`, zero mean
    #[serde(rename = "e_s2")]
    StochasticExponential,
    /// `e_s3`: linear sigma, mean grows toward the centre of the space
    #[serde(rename = "e_s3")]
    StochasticBiasedLinear,
    /// `e_s4`: exponential sigma, mean grows toward the centre of the space
    #[serde(rename = "e_s4")]
    StochasticBiasedExponential,
    /// `e_ins1`: failure probability `0.1 (1 - 1e-4 phi)`
    #[serde(rename = "e_ins1")]
    InstabilityLinear,
    /// `e_ins2`: failure probability `exp(-1e-3 phi - 0.1)`
    #[serde(rename = "e_ins2")]
    InstabilityExponential,
}

impl ErrorFunction {
    /// Every error function, in canonical order
    pub const ALL: [ErrorFunction; 10] = [
        ErrorFunction::ResolutionLinear,
        ErrorFunction::ResolutionExponential,
        ErrorFunction::ResolutionStepped,
        ErrorFunction::ResolutionAnchored,
        ErrorFunction::StochasticLinear,
        ErrorFunction::StochasticExponential,
        ErrorFunction::StochasticBiasedLinear,
        ErrorFunction::StochasticBiasedExponential,
        ErrorFunction::InstabilityLinear,
        ErrorFunction::InstabilityExponential,
    ];

    /// Canonical short name (`e_r1`, `e_s3`, `e_ins2`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            ErrorFunction::ResolutionLinear => "e_r1",
            ErrorFunction::ResolutionExponential => "e_r2",
            ErrorFunction::ResolutionStepped => "e_r3",
            ErrorFunction::ResolutionAnchored => "e_r4",
            ErrorFunction::StochasticLinear => "e_s1",
            ErrorFunction::StochasticExponential => "e_s2",
            ErrorFunction::StochasticBiasedLinear => "e_s3",
            ErrorFunction::StochasticBiasedExponential => "e_s4",
            ErrorFunction::InstabilityLinear => "e_ins1",
            ErrorFunction::InstabilityExponential => "e_ins2",
        }
    }

    /// Family this function belongs to
    pub fn family(&self) -> ErrorFamily {
        use ErrorFunction::*;
        match self {
            ResolutionLinear | ResolutionExponential | ResolutionStepped | ResolutionAnchored => {
                ErrorFamily::Resolution
            }
            StochasticLinear
            | StochasticExponential
            | StochasticBiasedLinear
            | StochasticBiasedExponential => ErrorFamily::Stochastic,
            InstabilityLinear | InstabilityExponential => ErrorFamily::Instability,
        }
    }

    /// Resolution errors are reproducible; the other families consume randomness.
    pub fn is_deterministic(&self) -> bool {
        self.family() == ErrorFamily::Resolution
    }

    /// Whether [`evaluate`](Self::evaluate) needs a baseline vector
    pub fn requires_baseline(&self) -> bool {
        *self == ErrorFunction::ResolutionAnchored
    }

    /// Largest absolute noise value this function can produce for `phi` in `d` dimensions,
    /// assuming inputs (and baseline) in `[-1, 1]`.
    pub fn noise_bound(&self, phi: f64, d: usize) -> f64 {
        let d = d as f64;
        match self {
            ErrorFunction::ResolutionLinear | ErrorFunction::ResolutionAnchored => {
                d * theta_linear(phi).abs()
            }
            ErrorFunction::ResolutionExponential => d * theta_exponential(phi).abs(),
            ErrorFunction::ResolutionStepped => d * theta_stepped(phi).abs(),
            ErrorFunction::StochasticLinear => sigma_linear(phi).abs(),
            ErrorFunction::StochasticExponential => sigma_exponential(phi).abs(),
            // gamma / d <= 1, so mu <= sigma
            ErrorFunction::StochasticBiasedLinear => 2.0 * sigma_linear(phi).abs(),
            ErrorFunction::StochasticBiasedExponential => 2.0 * sigma_exponential(phi).abs(),
            ErrorFunction::InstabilityLinear | ErrorFunction::InstabilityExponential => 10.0 * d,
        }
    }

    /// Noise for every row of the normalized batch `x` at fidelity parameter `phi`.
    ///
    /// `baseline` is only read by `e_r4` and must then have one entry per column.
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        x: &ArrayView2<f64>,
        phi: f64,
        baseline: Option<&ArrayView1<f64>>,
        rng: &mut R,
    ) -> Result<Array1<f64>> {
        let e = match self {
            ErrorFunction::ResolutionLinear => resolution_error(x, theta_linear(phi), None),
            ErrorFunction::ResolutionExponential => {
                resolution_error(x, theta_exponential(phi), None)
            }
            ErrorFunction::ResolutionStepped => resolution_error(x, theta_stepped(phi), None),
            ErrorFunction::ResolutionAnchored => {
                let x_b = baseline.ok_or(FidelityError::MissingBaseline(*self))?;
                if x_b.len() != x.ncols() {
                    return Err(FidelityError::BaselineDimension {
                        expected: x.ncols(),
                        got: x_b.len(),
                    });
                }
                resolution_error(x, theta_linear(phi), Some(x_b))
            }
            ErrorFunction::StochasticLinear => stochastic_error(x, sigma_linear(phi), false, rng),
            ErrorFunction::StochasticExponential => {
                stochastic_error(x, sigma_exponential(phi), false, rng)
            }
            ErrorFunction::StochasticBiasedLinear => {
                stochastic_error(x, sigma_linear(phi), true, rng)
            }
            ErrorFunction::StochasticBiasedExponential => {
                stochastic_error(x, sigma_exponential(phi), true, rng)
            }
            ErrorFunction::InstabilityLinear => {
                instability_error(x, spike_probability_linear(phi), rng)
            }
            ErrorFunction::InstabilityExponential => {
                instability_error(x, spike_probability_exponential(phi), rng)
            }
        };
        Ok(e)
    }
}

impl fmt::Display for ErrorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorFunction {
    type Err = FidelityError;

    /// Accepts canonical names (`e_r1`, `E_S3`, `er1`) and the benchmark
    /// aliases `MFB1`..`MFB13`, several of which share one error function.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let t = s.trim().to_lowercase().replace(['_', '-'], "");
        match t.as_str() {
            "er1" | "mfb1" | "mfb4" | "mfb6" => Ok(ErrorFunction::ResolutionLinear),
            "er2" | "mfb2" | "mfb5" => Ok(ErrorFunction::ResolutionExponential),
            "er3" | "mfb3" => Ok(ErrorFunction::ResolutionStepped),
            "er4" | "mfb7" => Ok(ErrorFunction::ResolutionAnchored),
            "es1" | "mfb8" => Ok(ErrorFunction::StochasticLinear),
            "es2" | "mfb9" => Ok(ErrorFunction::StochasticExponential),
            "es3" | "mfb10" => Ok(ErrorFunction::StochasticBiasedLinear),
            "es4" | "mfb11" => Ok(ErrorFunction::StochasticBiasedExponential),
            "eins1" | "mfb12" => Ok(ErrorFunction::InstabilityLinear),
            "eins2" | "mfb13" => Ok(ErrorFunction::InstabilityExponential),
            _ => Err(FidelityError::UnknownErrorFunction(s.to_string())),
        }
    }
}

/// Linear decay `1 - 1e-4 phi`
pub fn theta_linear(phi: f64) -> f64 {
    1.0 - 0.0001 * phi
}

/// Exponential decay `exp(-2.5e-4 phi)`
pub fn theta_exponential(phi: f64) -> f64 {
    (-0.00025 * phi).exp()
}

/// Staircase decay: alternating linear ramps (slope -2e-4) and flat steps,
/// each 1000 wide, reaching 0 from `phi = 9000`.
pub fn theta_stepped(phi: f64) -> f64 {
    if phi < 1000.0 {
        1.0 - 0.0002 * phi
    } else if phi < 2000.0 {
        0.8
    } else if phi < 3000.0 {
        1.2 - 0.0002 * phi
    } else if phi < 4000.0 {
        0.6
    } else if phi < 5000.0 {
        1.4 - 0.0002 * phi
    } else if phi < 6000.0 {
        0.4
    } else if phi < 7000.0 {
        1.6 - 0.0002 * phi
    } else if phi < 8000.0 {
        0.2
    } else if phi < 9000.0 {
        1.8 - 0.0002 * phi
    } else {
        0.0
    }
}

/// Stochastic spread, linear decay: `0.1 (1 - 1e-4 phi)`
pub fn sigma_linear(phi: f64) -> f64 {
    0.1 * (1.0 - 0.0001 * phi)
}

/// Stochastic spread, exponential decay: `0.1 exp(-5e-4 phi)`
pub fn sigma_exponential(phi: f64) -> f64 {
    0.1 * (-0.0005 * phi).exp()
}

/// Failure probability, linear decay: `0.1 (1 - 1e-4 phi)`
pub fn spike_probability_linear(phi: f64) -> f64 {
    0.1 * (1.0 - 0.0001 * phi)
}

/// Failure probability, exponential decay: `exp(-1e-3 phi - 0.1)`
pub fn spike_probability_exponential(phi: f64) -> f64 {
    (-0.001 * phi - 0.1).exp()
}

/// Resolution error `sum_j a_j cos(w x_j + b + pi)` per row.
///
/// With an anchor `x_b`, `a_j = theta (1 - |x_j - x_b_j|)`, otherwise `a_j = theta`.
pub fn resolution_error(
    x: &ArrayView2<f64>,
    theta: f64,
    anchor: Option<&ArrayView1<f64>>,
) -> Array1<f64> {
    let w = 10.0 * PI * theta;
    let b = 0.5 * PI * theta;

    let mut e = Array1::zeros(x.nrows());
    Zip::from(&mut e).and(x.rows()).for_each(|e, row| {
        *e = row
            .iter()
            .enumerate()
            .map(|(j, &xj)| {
                let a = match anchor {
                    Some(x_b) => theta * (1.0 - (xj - x_b[j]).abs()),
                    None => theta,
                };
                a * (w * xj + b + PI).cos()
            })
            .sum();
    });
    e
}

/// Stochastic error `r sigma + mu` with `r ~ U[0, 1)` drawn once per row.
///
/// When `biased`, `mu = (sigma / d) gamma` with `gamma = sum_j (1 - |x_j|)`,
/// largest at the centre of the normalized space; otherwise `mu = 0`.
pub fn stochastic_error<R: Rng + ?Sized>(
    x: &ArrayView2<f64>,
    sigma: f64,
    biased: bool,
    rng: &mut R,
) -> Array1<f64> {
    let d = x.ncols() as f64;
    x.rows()
        .into_iter()
        .map(|row| {
            let r: f64 = rng.random::<f64>();
            let mu = if biased && d > 0.0 {
                let gamma: f64 = row.iter().map(|xj| 1.0 - xj.abs()).sum();
                (sigma / d) * gamma
            } else {
                0.0
            };
            r * sigma + mu
        })
        .collect()
}

/// Instability error: `10 d` with probability `p` (one draw per row), else 0.
pub fn instability_error<R: Rng + ?Sized>(x: &ArrayView2<f64>, p: f64, rng: &mut R) -> Array1<f64> {
    let spike = 10.0 * x.ncols() as f64;
    (0..x.nrows())
        .map(|_| {
            let r: f64 = rng.random::<f64>();
            if r > p { 0.0 } else { spike }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, array};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(n: usize, d: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, d), |(i, j)| -1.0 + 2.0 * ((i * 3 + j * 5) % 11) as f64 / 10.0)
    }

    #[test]
    fn test_names_round_trip() {
        for f in ErrorFunction::ALL {
            assert_eq!(f.name().parse::<ErrorFunction>().unwrap(), f);
            assert_eq!(f.to_string(), f.name());
        }
        assert_eq!(
            "MFB6".parse::<ErrorFunction>().unwrap(),
            ErrorFunction::ResolutionLinear
        );
        assert_eq!(
            "mfb13".parse::<ErrorFunction>().unwrap(),
            ErrorFunction::InstabilityExponential
        );
        assert!(matches!(
            "e_r9".parse::<ErrorFunction>(),
            Err(FidelityError::UnknownErrorFunction(_))
        ));
    }

    #[test]
    fn test_families() {
        let resolution = ErrorFunction::ALL
            .iter()
            .filter(|f| f.family() == ErrorFamily::Resolution)
            .count();
        let stochastic = ErrorFunction::ALL
            .iter()
            .filter(|f| f.family() == ErrorFamily::Stochastic)
            .count();
        assert_eq!(resolution, 4);
        assert_eq!(stochastic, 4);
        assert!(ErrorFunction::ResolutionStepped.is_deterministic());
        assert!(!ErrorFunction::InstabilityLinear.is_deterministic());
    }

    #[test]
    fn test_stepped_theta_segments() {
        assert_abs_diff_eq!(theta_stepped(0.0), 1.0);
        assert_abs_diff_eq!(theta_stepped(500.0), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(theta_stepped(1500.0), 0.8);
        assert_abs_diff_eq!(theta_stepped(2500.0), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(theta_stepped(3999.0), 0.6);
        assert_abs_diff_eq!(theta_stepped(5500.0), 0.4);
        assert_abs_diff_eq!(theta_stepped(7500.0), 0.2);
        assert_abs_diff_eq!(theta_stepped(8500.0), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(theta_stepped(9000.0), 0.0);
        assert_abs_diff_eq!(theta_stepped(10000.0), 0.0);
    }

    #[test]
    fn test_schedules_at_known_points() {
        assert_abs_diff_eq!(theta_linear(2500.0), 0.75, epsilon = 1e-15);
        assert_abs_diff_eq!(theta_exponential(6000.0), 0.22313016014842982, epsilon = 1e-15);
        assert_abs_diff_eq!(sigma_linear(2000.0), 0.08, epsilon = 1e-15);
        assert_abs_diff_eq!(sigma_exponential(2000.0), 0.036787944117144235, epsilon = 1e-15);
        assert_abs_diff_eq!(spike_probability_linear(5000.0), 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(
            spike_probability_exponential(900.0),
            0.36787944117144233,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_anchored_resolution_off_baseline() {
        // theta = 0.5, psi = [0.5, -0.2]
        let x = array![[0.3, -0.8]];
        let x_b = array![-0.2, 0.4];
        let mut rng = StdRng::seed_from_u64(4);
        let e = ErrorFunction::ResolutionAnchored
            .evaluate(&x.view(), 5000.0, Some(&x_b.view()), &mut rng)
            .unwrap();
        assert_abs_diff_eq!(e[0], -0.10606601717798193, epsilon = 1e-12);
    }

    #[test]
    fn test_biased_mean_inside_the_space() {
        // gamma = 1 for d = 2, so mu = sigma / 2
        let x = array![[0.5, -0.5]];
        for (f, sigma) in [
            (ErrorFunction::StochasticBiasedLinear, 0.08),
            (ErrorFunction::StochasticBiasedExponential, 0.036787944117144235),
        ] {
            let mut rng = StdRng::seed_from_u64(21);
            let mut reference = StdRng::seed_from_u64(21);
            let e = f.evaluate(&x.view(), 2000.0, None, &mut rng).unwrap();
            let r: f64 = reference.random();
            assert_abs_diff_eq!(e[0], r * sigma + 0.5 * sigma, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_unbiased_noise_spans_sigma() {
        // sigma = 0.1 (1 - 0.7) = 0.03
        let x = grid(200, 3);
        let mut rng = StdRng::seed_from_u64(8);
        let e = ErrorFunction::StochasticLinear
            .evaluate(&x.view(), 7000.0, None, &mut rng)
            .unwrap();
        let max = e.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max < 0.03 && max > 0.027, "{}", max);
    }

    #[test]
    fn test_full_fidelity_resolution_error_vanishes() {
        let x = grid(8, 4);
        let mut rng = StdRng::seed_from_u64(0);
        let e = ErrorFunction::ResolutionLinear
            .evaluate(&x.view(), 10000.0, None, &mut rng)
            .unwrap();
        assert!(e.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_resolution_error_at_zero_phi() {
        // theta = 1: a = 1, w = 10 pi, b = pi / 2
        let x = array![[0.0, 0.5]];
        let e = resolution_error(&x.view(), 1.0, None);
        let expected = (0.5 * PI + PI).cos() + (5.0 * PI + 0.5 * PI + PI).cos();
        assert_abs_diff_eq!(e[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_resolution_error_is_reproducible() {
        let x = grid(20, 5);
        let mut rng = StdRng::seed_from_u64(1);
        for f in [
            ErrorFunction::ResolutionLinear,
            ErrorFunction::ResolutionExponential,
            ErrorFunction::ResolutionStepped,
        ] {
            let a = f.evaluate(&x.view(), 6583.0, None, &mut rng).unwrap();
            let b = f.evaluate(&x.view(), 6583.0, None, &mut rng).unwrap();
            assert_eq!(a, b, "{}", f);
            assert!(a.iter().all(|v| v.abs() <= f.noise_bound(6583.0, 5)));
        }
    }

    #[test]
    fn test_anchored_resolution_requires_baseline() {
        let x = grid(3, 2);
        let mut rng = StdRng::seed_from_u64(2);
        let f = ErrorFunction::ResolutionAnchored;
        assert!(f.requires_baseline());
        assert_eq!(
            f.evaluate(&x.view(), 5000.0, None, &mut rng),
            Err(FidelityError::MissingBaseline(f))
        );

        let short = array![0.0];
        assert_eq!(
            f.evaluate(&x.view(), 5000.0, Some(&short.view()), &mut rng),
            Err(FidelityError::BaselineDimension {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_anchored_resolution_matches_plain_at_baseline() {
        // x == x_b gives psi = 1, i.e. e_r1
        let x = grid(6, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let plain = resolution_error(&x.view(), theta_linear(2500.0), None);
        let rows: Vec<_> = x.rows().into_iter().collect();
        for (i, row) in rows.iter().enumerate() {
            let single = x.slice(ndarray::s![i..i + 1, ..]);
            let e = ErrorFunction::ResolutionAnchored
                .evaluate(&single, 2500.0, Some(row), &mut rng)
                .unwrap();
            assert_abs_diff_eq!(e[0], plain[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_stochastic_error_within_bounds() {
        let x = grid(200, 4);
        let mut rng = StdRng::seed_from_u64(42);
        for f in [
            ErrorFunction::StochasticLinear,
            ErrorFunction::StochasticExponential,
            ErrorFunction::StochasticBiasedLinear,
            ErrorFunction::StochasticBiasedExponential,
        ] {
            let e = f.evaluate(&x.view(), 7000.0, None, &mut rng).unwrap();
            let bound = f.noise_bound(7000.0, 4);
            assert!(e.iter().all(|&v| (0.0..=bound).contains(&v)), "{}", f);
        }
    }

    #[test]
    fn test_biased_mean_is_zero_at_corners() {
        // gamma = 0 when every |x_j| = 1, so e_s3 reduces to r sigma
        let x = array![[1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]];
        let sigma = sigma_linear(1000.0);
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let biased = stochastic_error(&x.view(), sigma, true, &mut a);
        let plain = stochastic_error(&x.view(), sigma, false, &mut b);
        assert_eq!(biased, plain);
    }

    #[test]
    fn test_one_draw_per_row() {
        let x = grid(7, 3);
        for f in [
            ErrorFunction::StochasticBiasedExponential,
            ErrorFunction::InstabilityExponential,
        ] {
            let mut rng = StdRng::seed_from_u64(5);
            f.evaluate(&x.view(), 5000.0, None, &mut rng).unwrap();
            let next: f64 = rng.random();

            let mut reference = StdRng::seed_from_u64(5);
            for _ in 0..7 {
                let _: f64 = reference.random();
            }
            assert_eq!(next, reference.random::<f64>(), "{}", f);
        }
    }

    #[test]
    fn test_instability_is_zero_or_spike() {
        let x = grid(500, 6);
        let mut rng = StdRng::seed_from_u64(11);
        for f in [
            ErrorFunction::InstabilityLinear,
            ErrorFunction::InstabilityExponential,
        ] {
            let e = f.evaluate(&x.view(), 0.0, None, &mut rng).unwrap();
            assert!(e.iter().all(|&v| v == 0.0 || v == 60.0), "{}", f);
            // p >= 0.1 at phi = 0, so some spikes are expected in 500 rows
            assert!(e.iter().any(|&v| v == 60.0), "{}", f);
        }
    }

    #[test]
    fn test_instability_never_fires_at_zero_probability() {
        let x = grid(100, 2);
        let mut rng = StdRng::seed_from_u64(12);
        let e = ErrorFunction::InstabilityLinear
            .evaluate(&x.view(), 10000.0, None, &mut rng)
            .unwrap();
        assert!(e.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ErrorFunction::StochasticBiasedLinear).unwrap();
        assert_eq!(json, "\"e_s3\"");
        let back: ErrorFunction = serde_json::from_str("\"e_ins1\"").unwrap();
        assert_eq!(back, ErrorFunction::InstabilityLinear);
    }
}

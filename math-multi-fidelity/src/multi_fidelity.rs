//! Multi-fidelity wrapper around a closed-form problem
//!
//! A [`MultiFidelityProblem`] pairs a [`Problem`] with the calibration table
//! of its MOMF variant and an active [`ErrorFunction`]. High-fidelity
//! evaluation passes straight through to the problem. Low-fidelity evaluation
//! normalizes the batch to `[-1, 1]`, draws the error function once per
//! perturbed objective and adds the scaled noise to that objective column:
//!
//! ```text
//! F[:, f] += scale[f] * e(x_s, phi[level])
//! ```
//!
//! Level 0 leaves the column untouched and objectives missing from the
//! request come back as NaN.

use crate::calibration::{Calibration, CalibrationTable};
use crate::error::{FidelityError, Result};
use crate::error_functions::ErrorFunction;
use crate::request::FidelityRequest;
use math_mo_problems::{DynProblem, Evaluation, Problem};
use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serializable settings of a [`MultiFidelityProblem`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiFidelityConfig {
    /// Active error function, by canonical name in JSON (`"e_s2"`)
    pub error_function: ErrorFunction,
    /// Baseline for `e_r4`, in normalized `[-1, 1]` coordinates
    pub baseline: Option<Vec<f64>>,
}

impl MultiFidelityConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FidelityError::InvalidConfig(e.to_string()))
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FidelityError::InvalidConfig(e.to_string()))
    }
}

/// What happens to one objective column during a low-fidelity evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Treatment {
    Omit,
    Exact,
    Perturb { phi: f64, scale: f64 },
}

/// A problem evaluable at calibrated fidelity levels per objective.
///
/// The instance is immutable during evaluation, so it can be shared across
/// threads whenever `P` is `Send + Sync` (always the case for [`DynProblem`]).
pub struct MultiFidelityProblem<P: Problem = DynProblem> {
    problem: P,
    calibration: &'static CalibrationTable,
    error_function: ErrorFunction,
    baseline: Option<Array1<f64>>,
}

impl<P: Problem> MultiFidelityProblem<P> {
    /// Wrap `problem` with the default error function `e_r1`.
    ///
    /// Fails when a table entry does not hold exactly one scale per objective.
    pub fn new(problem: P, calibration: &'static CalibrationTable) -> Result<Self> {
        if let Some(entry) = calibration
            .entries
            .iter()
            .find(|c| c.scale.len() != problem.n_obj())
        {
            return Err(FidelityError::CalibrationMismatch {
                table: calibration.problem.to_string(),
                problem: problem.name().to_string(),
                expected: entry.scale.len(),
                got: problem.n_obj(),
            });
        }
        Ok(Self {
            problem,
            calibration,
            error_function: ErrorFunction::default(),
            baseline: None,
        })
    }

    /// Builder form of [`set_error_function`](Self::set_error_function)
    pub fn with_error_function(mut self, error_function: ErrorFunction) -> Self {
        self.set_error_function(error_function);
        self
    }

    /// Attach the `e_r4` baseline, one normalized coordinate per variable.
    pub fn with_baseline(mut self, baseline: Array1<f64>) -> Result<Self> {
        if baseline.len() != self.problem.n_var() {
            return Err(FidelityError::BaselineDimension {
                expected: self.problem.n_var(),
                got: baseline.len(),
            });
        }
        self.baseline = Some(baseline);
        Ok(self)
    }

    /// Build from a problem, its table and a parsed configuration.
    pub fn from_config(
        problem: P,
        calibration: &'static CalibrationTable,
        config: &MultiFidelityConfig,
    ) -> Result<Self> {
        let mf = Self::new(problem, calibration)?.with_error_function(config.error_function);
        match &config.baseline {
            Some(b) => mf.with_baseline(Array1::from(b.clone())),
            None => Ok(mf),
        }
    }

    /// Current settings as a configuration document
    pub fn config(&self) -> MultiFidelityConfig {
        MultiFidelityConfig {
            error_function: self.error_function,
            baseline: self.baseline.as_ref().map(|b| b.to_vec()),
        }
    }

    /// Change the active error function for all later evaluations.
    pub fn set_error_function(&mut self, error_function: ErrorFunction) {
        if !self.calibration.is_calibrated(error_function) {
            log::warn!(
                "{}: error function {} is not calibrated, only level 0 can be requested",
                self.calibration.problem,
                error_function
            );
        }
        self.error_function = error_function;
    }

    /// Like [`set_error_function`](Self::set_error_function), accepting
    /// `e_r1`-style names and `MFBn` aliases.
    pub fn set_error_function_by_name(&mut self, name: &str) -> Result<()> {
        self.set_error_function(name.parse()?);
        Ok(())
    }

    /// Active error function
    pub fn error_function(&self) -> ErrorFunction {
        self.error_function
    }

    /// The wrapped high-fidelity problem
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Calibration table of this MOMF variant
    pub fn calibration(&self) -> &'static CalibrationTable {
        self.calibration
    }

    /// MOMF name of this instance, e.g. `MOMF2_4_1a`
    pub fn name(&self) -> &'static str {
        self.calibration.problem
    }

    /// Number of decision variables
    pub fn n_var(&self) -> usize {
        self.problem.n_var()
    }

    /// Number of objectives
    pub fn n_obj(&self) -> usize {
        self.problem.n_obj()
    }

    /// Lower and upper bound vectors in variable order
    pub fn bound_arrays(&self) -> (Array1<f64>, Array1<f64>) {
        self.problem.bound_arrays()
    }

    /// High-fidelity evaluation of an N x M batch.
    pub fn evaluate(&self, x: &Array2<f64>) -> Result<Evaluation> {
        Ok(self.problem.evaluate(x)?)
    }

    /// Low-fidelity evaluation using the thread-local generator.
    pub fn evaluate_mf(&self, x: &Array2<f64>, request: &FidelityRequest) -> Result<Evaluation> {
        self.evaluate_mf_with_rng(x, request, &mut rand::rng())
    }

    /// Low-fidelity evaluation drawing noise from `rng`.
    ///
    /// The whole request is validated before the problem is evaluated, so a
    /// failing call consumes no randomness. Stochastic error functions draw
    /// one value per sample for each perturbed objective, in ascending
    /// objective order.
    pub fn evaluate_mf_with_rng<R: Rng + ?Sized>(
        &self,
        x: &Array2<f64>,
        request: &FidelityRequest,
        rng: &mut R,
    ) -> Result<Evaluation> {
        let view = x.view();
        self.problem.bounds().check_columns(&view)?;
        let plan = self.plan(request)?;

        let mut eval = self.problem.evaluate(x)?;
        if plan.iter().all(|t| *t == Treatment::Exact) {
            return Ok(eval);
        }

        let x_s = self.problem.bounds().normalize(&view)?;
        let baseline = self.baseline.as_ref().map(Array1::view);
        for (f, treatment) in plan.into_iter().enumerate() {
            let mut column = eval.f.column_mut(f);
            match treatment {
                Treatment::Omit => column.fill(f64::NAN),
                Treatment::Exact => {}
                Treatment::Perturb { phi, scale } => {
                    let noise =
                        self.error_function
                            .evaluate(&x_s.view(), phi, baseline.as_ref(), rng)?;
                    column.scaled_add(scale, &noise);
                }
            }
        }
        Ok(eval)
    }

    fn plan(&self, request: &FidelityRequest) -> Result<Vec<Treatment>> {
        let n_obj = self.n_obj();
        let mut plan = vec![Treatment::Omit; n_obj];
        for (f, level) in request.iter() {
            if f >= n_obj {
                return Err(FidelityError::ObjectiveOutOfRange { objective: f, n_obj });
            }
            plan[f] = if level == 0 {
                Treatment::Exact
            } else {
                let entry = self.active_calibration()?;
                let phi = entry
                    .phi_for(level)
                    .ok_or(FidelityError::UnknownFidelityLevel {
                        objective: f,
                        level,
                        error_function: self.error_function,
                        max_level: entry.max_level(),
                    })?;
                let scale = entry
                    .scale_for(f)
                    .ok_or(FidelityError::ObjectiveOutOfRange { objective: f, n_obj })?;
                log::debug!(
                    "{}: f{} at level {} ({} phi = {}, scale = {})",
                    self.name(),
                    f + 1,
                    level,
                    self.error_function,
                    phi,
                    scale
                );
                Treatment::Perturb { phi, scale }
            };
        }

        let perturbs = plan.iter().any(|t| matches!(t, Treatment::Perturb { .. }));
        if perturbs && self.error_function.requires_baseline() && self.baseline.is_none() {
            return Err(FidelityError::MissingBaseline(self.error_function));
        }
        Ok(plan)
    }

    fn active_calibration(&self) -> Result<&'static Calibration> {
        self.calibration
            .get(self.error_function)
            .ok_or_else(|| FidelityError::Uncalibrated {
                error_function: self.error_function,
                problem: self.calibration.problem.to_string(),
            })
    }
}

impl<P: Problem> fmt::Debug for MultiFidelityProblem<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiFidelityProblem")
            .field("name", &self.calibration.problem)
            .field("problem", &self.problem.name())
            .field("error_function", &self.error_function)
            .field("baseline", &self.baseline)
            .finish()
    }
}

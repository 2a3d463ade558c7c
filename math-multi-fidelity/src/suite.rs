//! The MOMF problem suite
//!
//! | problem | base problem | correlation target |
//! |---|---|---|
//! | MOMF2-4-1a | RE2-4-1 | f1, f2 in [0.7, 1] |
//! | MOMF2-4-1b | RE2-4-1 | f1 in [0.9, 1], f2 in [0.7, 1] |
//! | MOMF2-4-1c | RE2-4-1 | f1 in [0.7, 1], f2 in [0.9, 1] |
//! | MOMF2-4-1d | RE2-4-1 | f1, f2 in [0.9, 1] |
//! | MOMF3-4-1 | RE3-4-7 | all in [0.7, 1] |
//! | MOMF3-5-1 | RE3-5-4 | all in [0.7, 1] |
//! | MOMF3-7-1 | DTLZ2 | all in [0.7, 1] |
//! | MOMF3-7-2 | inverted DTLZ2 | all in [0.7, 1] |

use crate::calibration::{self, CalibrationTable};
use crate::error::{FidelityError, Result};
use crate::multi_fidelity::MultiFidelityProblem;
use math_mo_problems::{
    Dtlz2, DtlzConfig, DynProblem, FourBarTruss, InvertedDtlz2, RocketInjector,
    VehicleCrashworthiness,
};

/// Canonical names of every suite problem
pub const MOMF_PROBLEMS: [&str; 8] = [
    "MOMF2_4_1a",
    "MOMF2_4_1b",
    "MOMF2_4_1c",
    "MOMF2_4_1d",
    "MOMF3_4_1",
    "MOMF3_5_1",
    "MOMF3_7_1",
    "MOMF3_7_2",
];

fn wrap(problem: DynProblem, table: &'static CalibrationTable) -> Result<MultiFidelityProblem> {
    MultiFidelityProblem::new(problem, table)
}

/// Four bar truss, calibration a
pub fn momf2_4_1a() -> Result<MultiFidelityProblem> {
    wrap(Box::new(FourBarTruss::new()), &calibration::MOMF2_4_1A)
}

/// Four bar truss, calibration b
pub fn momf2_4_1b() -> Result<MultiFidelityProblem> {
    wrap(Box::new(FourBarTruss::new()), &calibration::MOMF2_4_1B)
}

/// Four bar truss, calibration c
pub fn momf2_4_1c() -> Result<MultiFidelityProblem> {
    wrap(Box::new(FourBarTruss::new()), &calibration::MOMF2_4_1C)
}

/// Four bar truss, calibration d
pub fn momf2_4_1d() -> Result<MultiFidelityProblem> {
    wrap(Box::new(FourBarTruss::new()), &calibration::MOMF2_4_1D)
}

/// Rocket injector design with three objectives
pub fn momf3_4_1() -> Result<MultiFidelityProblem> {
    wrap(Box::new(RocketInjector::new()), &calibration::MOMF3_4_1)
}

/// Vehicle crashworthiness design with three objectives
pub fn momf3_5_1() -> Result<MultiFidelityProblem> {
    wrap(Box::new(VehicleCrashworthiness::new()), &calibration::MOMF3_5_1)
}

/// DTLZ2 with three objectives and five shape variables
pub fn momf3_7_1() -> Result<MultiFidelityProblem> {
    momf3_7_1_with(DtlzConfig::default())
}

/// DTLZ2 with custom `k` or `beta`.
///
/// The calibration holds three objective scales, so `config.n_obj` other than
/// 3 fails with [`FidelityError::CalibrationMismatch`].
pub fn momf3_7_1_with(config: DtlzConfig) -> Result<MultiFidelityProblem> {
    wrap(Box::new(Dtlz2::new(config)?), &calibration::MOMF3_7_1)
}

/// Inverted DTLZ2 with three objectives and five shape variables
pub fn momf3_7_2() -> Result<MultiFidelityProblem> {
    momf3_7_2_with(DtlzConfig::default())
}

/// Inverted DTLZ2 with custom `k` or `beta`; see [`momf3_7_1_with`].
pub fn momf3_7_2_with(config: DtlzConfig) -> Result<MultiFidelityProblem> {
    wrap(Box::new(InvertedDtlz2::new(config)?), &calibration::MOMF3_7_2)
}

/// Build a suite problem by name.
///
/// Matching ignores case and treats `-` as `_`, so `MOMF2-4-1a` and
/// `momf2_4_1a` name the same problem.
pub fn create_momf_problem(name: &str) -> Result<MultiFidelityProblem> {
    let key = name.trim().to_lowercase().replace('-', "_");
    match key.as_str() {
        "momf2_4_1a" => momf2_4_1a(),
        "momf2_4_1b" => momf2_4_1b(),
        "momf2_4_1c" => momf2_4_1c(),
        "momf2_4_1d" => momf2_4_1d(),
        "momf3_4_1" => momf3_4_1(),
        "momf3_5_1" => momf3_5_1(),
        "momf3_7_1" => momf3_7_1(),
        "momf3_7_2" => momf3_7_2(),
        _ => Err(FidelityError::UnknownProblem(name.to_string())),
    }
}

//! Fidelity-level calibration tables
//!
//! Each MOMF problem ships one table per calibrated error function. A table
//! maps the user-facing fidelity level (1, 2, 3, ...) to the internal
//! parameter `phi` in `[0, 10000]`, and holds one amplitude scale per
//! objective. Level 0 is always the unperturbed high-fidelity evaluation and
//! never appears in a table.
//!
//! The values were tuned so that the correlation between low- and
//! high-fidelity objectives over random samples lands in the ranges quoted on
//! each table.

use crate::error_functions::ErrorFunction;
use serde::Serialize;

/// Level parameters and objective scales for one error function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calibration {
    /// Error function the entry applies to
    pub error_function: ErrorFunction,
    /// `phi[level - 1]` for `level >= 1`
    pub phi: &'static [f64],
    /// Amplitude scale per objective
    pub scale: &'static [f64],
}

impl Calibration {
    /// Entry for `error_function` with levels `phi` and objective scales `scale`
    pub const fn new(
        error_function: ErrorFunction,
        phi: &'static [f64],
        scale: &'static [f64],
    ) -> Self {
        Self {
            error_function,
            phi,
            scale,
        }
    }

    /// Internal parameter for a positive level, `None` for 0 or an unknown level.
    pub fn phi_for(&self, level: u32) -> Option<f64> {
        let idx = (level as usize).checked_sub(1)?;
        self.phi.get(idx).copied()
    }

    /// Amplitude scale for a zero-based objective index
    pub fn scale_for(&self, objective: usize) -> Option<f64> {
        self.scale.get(objective).copied()
    }

    /// Highest calibrated level
    pub fn max_level(&self) -> u32 {
        self.phi.len() as u32
    }

    /// Calibrated positive levels, lowest first
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        1..=self.max_level()
    }
}

/// All calibrations of one MOMF problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationTable {
    /// MOMF problem name
    pub problem: &'static str,
    /// One entry per calibrated error function
    pub entries: &'static [Calibration],
}

impl CalibrationTable {
    /// Entry for `error_function`, if calibrated
    pub fn get(&self, error_function: ErrorFunction) -> Option<&Calibration> {
        self.entries
            .iter()
            .find(|c| c.error_function == error_function)
    }

    /// Highest calibrated level, 0 when `error_function` has no entry
    pub fn max_level(&self, error_function: ErrorFunction) -> u32 {
        self.get(error_function).map_or(0, Calibration::max_level)
    }

    /// Whether positive levels can be requested with `error_function`
    pub fn is_calibrated(&self, error_function: ErrorFunction) -> bool {
        self.get(error_function).is_some()
    }

    /// Error functions with an entry, in table order
    pub fn calibrated_functions(&self) -> impl Iterator<Item = ErrorFunction> + '_ {
        self.entries.iter().map(|c| c.error_function)
    }
}

/// MOMF2-4-1a calibration (RE2-4-1).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1 and f2.
pub const MOMF2_4_1A: CalibrationTable = CalibrationTable {
    problem: "MOMF2_4_1a",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8436.0, 7064.0, 5000.0],
            &[1.0962e+02, 1.6447e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9178.0, 6893.0, 5000.0],
            &[2.0085e+02, 3.0882e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8266.0, 6583.0, 5000.0],
            &[1.3117e+02, 2.1674e-01],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8697.0, 6853.0, 5000.0],
            &[5.3856e+03, 7.2515e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7715.0, 5891.0, 5000.0],
            &[3.2636e+04, 4.4158e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8697.0, 7014.0, 5000.0],
            &[6.9287e+03, 5.6141e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7605.0, 6102.0, 5000.0],
            &[4.2286e+04, 3.4426e+01],
        ),
    ],
};

/// MOMF2-4-1b calibration (RE2-4-1).
///
/// Fidelity levels such that correlation is in [0.9, 1.0] for f1 and [0.7, 1.0] for f2.
pub const MOMF2_4_1B: CalibrationTable = CalibrationTable {
    problem: "MOMF2_4_1b",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8426.0, 7054.0, 5000.0],
            &[3.5062e+01, 1.6365e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9879.0, 6913.0, 5000.0],
            &[6.3384e+01, 3.1181e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8476.0, 6993.0, 5000.0],
            &[4.3033e+01, 2.1740e-01],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8757.0, 7224.0, 5000.0],
            &[1.7374e+03, 7.4510e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7725.0, 6122.0, 5000.0],
            &[1.0267e+04, 4.4144e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8577.0, 6983.0, 5000.0],
            &[1.7665e+03, 5.5864e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7525.0, 6022.0, 5000.0],
            &[1.0822e+04, 3.4230e+01],
        ),
    ],
};

/// MOMF2-4-1c calibration (RE2-4-1).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1 and [0.9, 1.0] for f2.
pub const MOMF2_4_1C: CalibrationTable = CalibrationTable {
    problem: "MOMF2_4_1c",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8436.0, 6663.0, 5000.0],
            &[1.0975e+02, 3.9109e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9028.0, 7304.0, 5000.0],
            &[2.0177e+02, 7.1956e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8266.0, 6673.0, 5000.0],
            &[1.3148e+02, 5.0945e-02],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8416.0, 6773.0, 5000.0],
            &[5.3518e+03, 1.8673e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7304.0, 5881.0, 5000.0],
            &[3.2626e+04, 1.1420e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8717.0, 7134.0, 5000.0],
            &[6.9229e+03, 1.5959e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7715.0, 6112.0, 5000.0],
            &[4.2171e+04, 9.7040e+00],
        ),
    ],
};

/// MOMF2-4-1d calibration (RE2-4-1).
///
/// Fidelity levels such that correlation is approximately in [0.9, 1.0] for f1 and f2.
pub const MOMF2_4_1D: CalibrationTable = CalibrationTable {
    problem: "MOMF2_4_1d",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8286.0, 6653.0, 5000.0],
            &[3.5214e+01, 3.9022e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9028.0, 6673.0, 5000.0],
            &[6.3633e+01, 7.1366e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8256.0, 6683.0, 5000.0],
            &[4.3210e+01, 5.0684e-02],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8396.0, 6683.0, 5000.0],
            &[1.6908e+03, 1.8579e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7254.0, 5851.0, 5000.0],
            &[1.0274e+04, 1.1334e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8376.0, 6723.0, 5000.0],
            &[1.7751e+03, 1.5857e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7254.0, 5851.0, 5000.0],
            &[1.0810e+04, 9.6065e+00],
        ),
    ],
};

/// MOMF3-4-1 calibration (RE3-4-7).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1, f2 and f3.
pub const MOMF3_4_1: CalibrationTable = CalibrationTable {
    problem: "MOMF3_4_1",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8286.0, 6823.0, 5000.0],
            &[1.4381e-01, 1.4975e-01, 1.6675e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9368.0, 6643.0, 5000.0],
            &[2.5430e-01, 2.6420e-01, 2.9649e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8386.0, 6733.0, 5000.0],
            &[1.8696e-01, 1.9949e-01, 2.0545e-01],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8436.0, 6803.0, 5000.0],
            &[7.0386e+00, 7.4024e+00, 7.9370e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7324.0, 5891.0, 5000.0],
            &[4.2954e+01, 4.5103e+01, 4.8392e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8426.0, 6793.0, 5000.0],
            &[6.4054e+00, 6.5529e+00, 7.2184e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7314.0, 5891.0, 5000.0],
            &[3.8890e+01, 4.0045e+01, 4.3946e+01],
        ),
    ],
};

/// MOMF3-5-1 calibration (RE3-5-4).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1, f2 and f3.
pub const MOMF3_5_1: CalibrationTable = CalibrationTable {
    problem: "MOMF3_5_1",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[8436.0, 6583.0, 5000.0],
            &[2.0252e+00, 3.3006e-01, 1.7791e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[7995.0, 6012.0, 5000.0],
            &[3.5352e+00, 5.8414e-01, 3.0836e-02],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8246.0, 6633.0, 5000.0],
            &[2.3078e+00, 3.8555e-01, 2.0860e-02],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[8426.0, 6783.0, 5000.0],
            &[1.0696e+02, 1.7364e+01, 9.4979e-01],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[7304.0, 5881.0, 5000.0],
            &[6.4917e+02, 1.0549e+02, 5.7512e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[8567.0, 6943.0, 5000.0],
            &[1.3058e+02, 1.7865e+01, 1.0273e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[7525.0, 5991.0, 5000.0],
            &[8.0143e+02, 1.0862e+02, 6.2927e+00],
        ),
    ],
};

/// MOMF3-7-1 calibration (DTLZ2).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1, f2 and f3.
pub const MOMF3_7_1: CalibrationTable = CalibrationTable {
    problem: "MOMF3_7_1",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[9168.0, 8356.0, 6993.0, 5000.0],
            &[9.7701e-01, 1.0300e+00, 1.3075e+00],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9989.0, 9659.0, 6593.0, 5000.0],
            &[1.7128e+00, 1.8116e+00, 2.3048e+00],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8647.0, 8476.0, 6733.0, 5000.0],
            &[1.3973e+00, 1.3325e+00, 1.5736e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[9318.0, 8567.0, 6903.0, 5000.0],
            &[6.5451e+01, 6.5640e+01, 8.0547e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[8967.0, 7505.0, 5961.0, 5000.0],
            &[3.9860e+02, 3.9942e+02, 4.9223e+02],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[9599.0, 9148.0, 8116.0, 5000.0],
            &[1.0640e+02, 1.0675e+02, 1.2502e+02],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[9058.0, 7565.0, 5981.0, 5000.0],
            &[3.9885e+02, 3.9813e+02, 4.6518e+02],
        ),
    ],
};

/// MOMF3-7-2 calibration (InvertedDTLZ2).
///
/// Fidelity levels such that correlation is in [0.7, 1.0] for f1, f2 and f3.
pub const MOMF3_7_2: CalibrationTable = CalibrationTable {
    problem: "MOMF3_7_2",
    entries: &[
        Calibration::new(
            ErrorFunction::ResolutionLinear,
            &[9138.0, 8376.0, 6843.0, 5000.0],
            &[1.2392e+00, 1.2111e+00, 9.7384e-01],
        ),
        Calibration::new(
            ErrorFunction::ResolutionExponential,
            &[9989.0, 9458.0, 6703.0, 5000.0],
            &[2.1770e+00, 2.1221e+00, 1.7357e+00],
        ),
        Calibration::new(
            ErrorFunction::ResolutionStepped,
            &[8607.0, 8376.0, 6713.0, 5000.0],
            &[1.4768e+00, 1.5112e+00, 1.3054e+00],
        ),
        Calibration::new(
            ErrorFunction::StochasticLinear,
            &[9228.0, 8446.0, 6803.0, 5000.0],
            &[7.6424e+01, 7.6271e+01, 6.3957e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticExponential,
            &[8737.0, 7334.0, 5891.0, 5000.0],
            &[4.6585e+02, 4.6339e+02, 3.8838e+02],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedLinear,
            &[9488.0, 8977.0, 7915.0, 5000.0],
            &[1.0944e+02, 1.0884e+02, 9.8565e+01],
        ),
        Calibration::new(
            ErrorFunction::StochasticBiasedExponential,
            &[8707.0, 7294.0, 5871.0, 5000.0],
            &[4.3017e+02, 4.2837e+02, 3.8594e+02],
        ),
    ],
};

/// Every embedded table
pub const ALL_TABLES: [&CalibrationTable; 8] = [
    &MOMF2_4_1A,
    &MOMF2_4_1B,
    &MOMF2_4_1C,
    &MOMF2_4_1D,
    &MOMF3_4_1,
    &MOMF3_5_1,
    &MOMF3_7_1,
    &MOMF3_7_2,
];

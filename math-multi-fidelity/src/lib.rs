#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

pub mod calibration;
pub mod error;
pub mod error_functions;
pub mod multi_fidelity;
pub mod request;
pub mod suite;

pub use calibration::{Calibration, CalibrationTable};
pub use error::{FidelityError, Result};
pub use error_functions::{ErrorFamily, ErrorFunction};
pub use multi_fidelity::{MultiFidelityConfig, MultiFidelityProblem};
pub use request::FidelityRequest;
pub use suite::*;

pub use math_mo_problems::{DtlzConfig, Evaluation, Problem};

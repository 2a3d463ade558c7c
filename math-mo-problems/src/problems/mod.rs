//! Closed-form problem definitions

pub mod dtlz;
pub mod four_bar_truss;
pub mod rocket_injector;
pub mod vehicle_crashworthiness;

pub use dtlz::{Dtlz2, DtlzConfig, InvertedDtlz2, dtlz_g, dtlz_s};
pub use four_bar_truss::FourBarTruss;
pub use rocket_injector::RocketInjector;
pub use vehicle_crashworthiness::VehicleCrashworthiness;

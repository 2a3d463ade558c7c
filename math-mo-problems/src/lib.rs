#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

use std::collections::HashMap;

pub mod bounds;
pub mod error;
pub mod problem;
pub mod problems;

pub use bounds::{BoundRegistry, VariableBound};
pub use error::{ProblemError, Result};
pub use problem::{DynProblem, Evaluation, Problem};
pub use problems::*;

/// Metadata for a test problem including size, origin and a short description
#[derive(Debug, Clone)]
pub struct ProblemMetadata {
    /// Problem name
    pub name: String,
    /// Number of decision variables (default instance for scalable problems)
    pub n_var: usize,
    /// Number of objectives (default instance for scalable problems)
    pub n_obj: usize,
    /// Whether `n_obj` and the variable count can be changed
    pub scalable: bool,
    /// Description of the problem
    pub description: String,
    /// Literature reference
    pub reference: String,
}

/// Get metadata for all available problems (explicit definitions)
pub fn get_problem_metadata() -> HashMap<String, ProblemMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "RE2_4_1".to_string(),
        ProblemMetadata {
            name: "RE2_4_1".to_string(),
            n_var: 4,
            n_obj: 2,
            scalable: false,
            description: "Four bar truss design: structural volume and joint displacement"
                .to_string(),
            reference: "Tanabe & Ishibuchi (2020), RE21".to_string(),
        },
    );

    metadata.insert(
        "RE3_4_7".to_string(),
        ProblemMetadata {
            name: "RE3_4_7".to_string(),
            n_var: 4,
            n_obj: 3,
            scalable: false,
            description: "Rocket injector design: face temperature, inlet distance and post tip temperature"
                .to_string(),
            reference: "Tanabe & Ishibuchi (2020), RE37".to_string(),
        },
    );

    metadata.insert(
        "RE3_5_4".to_string(),
        ProblemMetadata {
            name: "RE3_5_4".to_string(),
            n_var: 5,
            n_obj: 3,
            scalable: false,
            description: "Vehicle crashworthiness design: mass, acceleration and toe-board intrusion"
                .to_string(),
            reference: "Tanabe & Ishibuchi (2020), RE34".to_string(),
        },
    );

    metadata.insert(
        "DTLZ2".to_string(),
        ProblemMetadata {
            name: "DTLZ2".to_string(),
            n_var: 7,
            n_obj: 3,
            scalable: true,
            description: "Scalable problem with a concave spherical Pareto front".to_string(),
            reference: "Deb et al. (2005)".to_string(),
        },
    );

    metadata.insert(
        "InvertedDTLZ2".to_string(),
        ProblemMetadata {
            name: "InvertedDTLZ2".to_string(),
            n_var: 7,
            n_obj: 3,
            scalable: true,
            description: "DTLZ2 with inverted direction scalars, convex Pareto front".to_string(),
            reference: "Ishibuchi et al. (2017)".to_string(),
        },
    );

    log::debug!("loaded metadata for {} problems", metadata.len());
    metadata
}

/// Build a problem by name with default parameters.
///
/// Names are matched case-insensitively and `-` is accepted for `_`.
pub fn create_problem(name: &str) -> Result<DynProblem> {
    let key = name.to_uppercase().replace('-', "_");
    let problem: DynProblem = match key.as_str() {
        "RE2_4_1" => Box::new(FourBarTruss::new()),
        "RE3_4_7" => Box::new(RocketInjector::new()),
        "RE3_5_4" => Box::new(VehicleCrashworthiness::new()),
        "DTLZ2" => Box::new(Dtlz2::new(DtlzConfig::default())?),
        "INVERTEDDTLZ2" | "INVERTED_DTLZ2" => Box::new(InvertedDtlz2::new(DtlzConfig::default())?),
        _ => return Err(ProblemError::UnknownProblem(name.to_string())),
    };
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_metadata_matches_instances() {
        for (name, meta) in get_problem_metadata() {
            let problem = create_problem(&name).unwrap();
            assert_eq!(problem.name(), meta.name);
            assert_eq!(problem.n_var(), meta.n_var, "{} n_var", name);
            assert_eq!(problem.n_obj(), meta.n_obj, "{} n_obj", name);
            assert!(!meta.description.is_empty());
        }
    }

    #[test]
    fn test_create_problem_accepts_aliases() {
        assert_eq!(create_problem("re2-4-1").unwrap().name(), "RE2_4_1");
        assert_eq!(
            create_problem("inverted_dtlz2").unwrap().name(),
            "InvertedDTLZ2"
        );
        assert_eq!(
            create_problem("RE9_9_9").err(),
            Some(ProblemError::UnknownProblem("RE9_9_9".to_string()))
        );
    }

    #[test]
    fn test_every_problem_returns_declared_shape() {
        for name in get_problem_metadata().keys() {
            let problem = create_problem(name).unwrap();
            for n in [1, 4, 17] {
                let x = Array2::from_shape_fn((n, problem.n_var()), |(i, j)| {
                    let var = &problem.bounds().variables()[j];
                    var.lower + var.width() * ((i + j) % 5) as f64 / 4.0
                });
                let eval = problem.evaluate(&x).unwrap();
                assert_eq!(eval.f.dim(), (n, problem.n_obj()), "{}", name);
                assert!(eval.f.iter().all(|v| v.is_finite()), "{}", name);
            }
        }
    }

    #[test]
    fn test_wrong_column_count_fails_fast() {
        let problem = create_problem("RE3_5_4").unwrap();
        let err = problem.evaluate(&Array2::ones((2, 4))).unwrap_err();
        assert!(err.is_shape_error());
    }
}

//! Per-objective fidelity requests.

use crate::error::{FidelityError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sparse map from zero-based objective index to fidelity level.
///
/// Level 0 is the unperturbed high-fidelity value. Objectives left out of the
/// request are not computed and come back as NaN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FidelityRequest {
    levels: BTreeMap<usize, u32>,
}

impl FidelityRequest {
    /// Empty request; every objective comes back NaN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, objective: usize, level: u32) -> Self {
        self.set(objective, level);
        self
    }

    /// Request `level` for the zero-based `objective`, replacing any earlier entry.
    pub fn set(&mut self, objective: usize, level: u32) -> &mut Self {
        self.levels.insert(objective, level);
        self
    }

    /// Same level for objectives `0..n_obj`
    pub fn uniform(n_obj: usize, level: u32) -> Self {
        Self {
            levels: (0..n_obj).map(|f| (f, level)).collect(),
        }
    }

    /// Level 0 for every objective
    pub fn high_fidelity(n_obj: usize) -> Self {
        Self::uniform(n_obj, 0)
    }

    /// Add an entry by label: `f1`, `F2` or `Phi_f3` name objectives 0, 1 and 2.
    pub fn with_label(self, label: &str, level: u32) -> Result<Self> {
        let objective = parse_label(label)?;
        Ok(self.with(objective, level))
    }

    /// Requested level for the zero-based `objective`
    pub fn level(&self, objective: usize) -> Option<u32> {
        self.levels.get(&objective).copied()
    }

    /// Requested objectives in ascending order
    pub fn objectives(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.keys().copied()
    }

    /// `(objective, level)` pairs in ascending objective order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.levels.iter().map(|(&f, &l)| (f, l))
    }

    /// Number of requested objectives
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no objective is requested
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

fn parse_label(label: &str) -> Result<usize> {
    let invalid = || FidelityError::InvalidRequest(label.to_string());
    let t = label.trim();
    let t = t
        .strip_prefix("Phi_")
        .or_else(|| t.strip_prefix("phi_"))
        .unwrap_or(t);
    let digits = t
        .strip_prefix('f')
        .or_else(|| t.strip_prefix('F'))
        .ok_or_else(invalid)?;
    match digits.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(invalid()),
    }
}

impl FromIterator<(usize, u32)> for FidelityRequest {
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FidelityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (objective, level)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "f{}={}", objective + 1, level)?;
        }
        Ok(())
    }
}

impl FromStr for FidelityRequest {
    type Err = FidelityError;

    /// Parses comma-separated `label=level` pairs such as `"f1=3, f3=0"`.
    /// The empty string is the empty request.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut request = FidelityRequest::new();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (label, level) = pair
                .split_once('=')
                .ok_or_else(|| FidelityError::InvalidRequest(pair.to_string()))?;
            let level: u32 = level
                .trim()
                .parse()
                .map_err(|_| FidelityError::InvalidRequest(pair.to_string()))?;
            let objective = parse_label(label)?;
            request.set(objective, level);
        }
        Ok(request)
    }
}

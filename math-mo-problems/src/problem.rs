//! The `Problem` trait shared by every closed-form evaluator.

use crate::bounds::BoundRegistry;
use crate::error::Result;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Result of an evaluation: an N x O objective matrix under the key `f`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One row per sample, one column per objective
    pub f: Array2<f64>,
}

impl Evaluation {
    /// Number of evaluated samples
    pub fn n_samples(&self) -> usize {
        self.f.nrows()
    }

    /// Number of objectives
    pub fn n_obj(&self) -> usize {
        self.f.ncols()
    }
}

/// A bound-constrained multi-objective problem with a closed-form evaluator.
///
/// Implementors provide the bounds, the objective count and the raw formula;
/// shape validation and the `{F}` wrapper come from the provided methods.
pub trait Problem {
    /// Short identifier such as `RE2_4_1`
    fn name(&self) -> &str;

    /// Variable bounds in column order
    fn bounds(&self) -> &BoundRegistry;

    /// Number of objectives O
    fn n_obj(&self) -> usize;

    /// Closed-form objectives for a batch whose column count is already checked.
    ///
    /// Must return exactly `n_obj()` columns and one row per input row.
    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64>;

    /// Number of decision variables M
    fn n_var(&self) -> usize {
        self.bounds().n_var()
    }

    /// Lower and upper bound vectors in variable order
    fn bound_arrays(&self) -> (Array1<f64>, Array1<f64>) {
        self.bounds().bound_arrays()
    }

    /// Evaluate an N x M batch in high fidelity.
    fn evaluate(&self, x: &Array2<f64>) -> Result<Evaluation> {
        let view = x.view();
        self.bounds().check_columns(&view)?;
        let f = self.evaluate_unchecked(&view);
        debug_assert_eq!(f.dim(), (x.nrows(), self.n_obj()));
        log::trace!("{}: evaluated {} samples", self.name(), x.nrows());
        Ok(Evaluation { f })
    }
}

/// Boxed problem for heterogeneous collections and name-based construction.
pub type DynProblem = Box<dyn Problem + Send + Sync>;

impl<P: Problem + ?Sized> Problem for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn bounds(&self) -> &BoundRegistry {
        (**self).bounds()
    }

    fn n_obj(&self) -> usize {
        (**self).n_obj()
    }

    fn evaluate_unchecked(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        (**self).evaluate_unchecked(x)
    }
}

/// Assemble objective columns computed separately into an N x O matrix.
pub(crate) fn stack_columns(n: usize, columns: &[Array1<f64>]) -> Array2<f64> {
    let mut f = Array2::zeros((n, columns.len()));
    for (mut dst, src) in f.columns_mut().into_iter().zip(columns) {
        dst.assign(src);
    }
    f
}

/// Apply a per-sample formula returning `O` objectives to every row of `x`.
pub(crate) fn map_rows<const O: usize>(
    x: &ArrayView2<f64>,
    formula: impl Fn(ArrayView1<f64>) -> [f64; O],
) -> Array2<f64> {
    let mut f = Array2::zeros((x.nrows(), O));
    for (mut out, row) in f.rows_mut().into_iter().zip(x.rows()) {
        for (dst, value) in out.iter_mut().zip(formula(row)) {
            *dst = value;
        }
    }
    f
}

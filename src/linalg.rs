//! Dense complex helpers used to compare and verify unitaries.

use ndarray::{Array, Array2, Dimension};
use num_complex::Complex64;

/// Default absolute tolerance for numerical equivalence checks.
pub const DEFAULT_ATOL: f64 = 1e-9;

pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::eye(dim)
}

/// Compute the conjugate transpose (adjoint) of a matrix.
pub fn conjugate_transpose(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|c| c.conj())
}

/// Largest elementwise modulus of `a - b`; infinite when the shapes differ.
pub fn max_abs_diff<D: Dimension>(a: &Array<Complex64, D>, b: &Array<Complex64, D>) -> f64 {
    if a.shape() != b.shape() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Check `U† U = I` within `atol`.
pub fn is_unitary(m: &Array2<Complex64>, atol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    let product = conjugate_transpose(m).dot(m);
    max_abs_diff(&product, &identity(m.nrows())) < atol
}

/// Unit-modulus factor `φ` such that `a ≈ φ·b`, read off the largest entry of `b`.
///
/// Returns `None` for mismatched shapes or when `b` is zero.
pub fn global_phase<D: Dimension>(
    a: &Array<Complex64, D>,
    b: &Array<Complex64, D>,
) -> Option<Complex64> {
    if a.shape() != b.shape() {
        return None;
    }
    let (x, y) = a
        .iter()
        .zip(b.iter())
        .max_by(|(_, p), (_, q)| p.norm_sqr().total_cmp(&q.norm_sqr()))?;
    if y.norm() == 0.0 || x.norm() == 0.0 {
        return None;
    }
    let ratio = x / y;
    Some(ratio / ratio.norm())
}

/// `a` and `b` agree up to a global phase within `atol`.
pub fn equal_up_to_global_phase<D: Dimension>(
    a: &Array<Complex64, D>,
    b: &Array<Complex64, D>,
    atol: f64,
) -> bool {
    match global_phase(a, b) {
        Some(phase) => max_abs_diff(a, &b.mapv(|c| c * phase)) < atol,
        None => max_abs_diff(a, b) < atol,
    }
}

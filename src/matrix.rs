//! Dense QFT matrices built from the closed-form definition.
//!
//! Element `(j, k)` of the `N × N` transform (`N = 2^n`) is
//! `ω^(j·k) / √N` with `ω = e^(2πi/N)`. This is the reference realization
//! the gate decomposition is checked against.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use crate::error::Result;
use crate::index::{dim_for_qubits, reverse_bits};
use crate::linalg::conjugate_transpose;
use crate::state::State;

/// `ω^(j·k) / √N`, reducing the exponent modulo `N` before taking the phase.
fn element(j: usize, k: usize, dim: usize) -> Complex64 {
    // j, k < dim ≤ 2^(BITS/2 - 1), so the product cannot overflow
    let exponent = (j * k) % dim;
    let theta = 2.0 * PI * exponent as f64 / dim as f64;
    Complex64::from_polar(1.0 / (dim as f64).sqrt(), theta)
}

#[cfg(not(feature = "parallel"))]
fn build(dim: usize) -> Array2<Complex64> {
    Array2::from_shape_fn((dim, dim), |(j, k)| element(j, k, dim))
}

#[cfg(feature = "parallel")]
fn build(dim: usize) -> Array2<Complex64> {
    use ndarray::Zip;

    let mut m = Array2::zeros((dim, dim));
    Zip::indexed(&mut m).par_for_each(|(j, k), x| *x = element(j, k, dim));
    m
}

/// The `2^n × 2^n` QFT unitary. `n_qubits = 0` yields the 1×1 identity.
///
/// # Example
/// ```
/// use qft_rs::matrix::matrix;
/// let m = matrix(1).unwrap();
/// // one qubit: the Hadamard matrix
/// assert!((m[[1, 1]].re + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
pub fn matrix(n_qubits: usize) -> Result<Array2<Complex64>> {
    let dim = dim_for_qubits(n_qubits)?;
    debug!(n_qubits, dim, "building QFT matrix");
    Ok(build(dim))
}

/// Conjugate transpose of [`matrix`].
pub fn inverse_matrix(n_qubits: usize) -> Result<Array2<Complex64>> {
    Ok(conjugate_transpose(&matrix(n_qubits)?))
}

/// Permutation `P` with `P[rev(k), k] = 1`, reversing the qubit order.
pub fn bit_reversal_matrix(n_qubits: usize) -> Result<Array2<Complex64>> {
    let dim = dim_for_qubits(n_qubits)?;
    let mut p = Array2::zeros((dim, dim));
    for k in 0..dim {
        p[[reverse_bits(k, n_qubits), k]] = Complex64::new(1.0, 0.0);
    }
    Ok(p)
}

/// Apply the QFT to a state vector.
///
/// # Errors
/// `InvalidInput` if the state length is not a power of 2.
pub fn apply(state: &State) -> Result<State> {
    let n_qubits = state.num_qubits()?;
    Ok(State::new(matrix(n_qubits)?.dot(&state.data)))
}

/// Apply the inverse QFT to a state vector.
pub fn apply_inverse(state: &State) -> Result<State> {
    let n_qubits = state.num_qubits()?;
    Ok(State::new(inverse_matrix(n_qubits)?.dot(&state.data)))
}

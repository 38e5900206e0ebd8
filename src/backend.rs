//! Execution collaborators that run a [`GateSequence`].
//!
//! The decomposition only produces gate data; anything implementing
//! [`Backend`] can evolve a state through it or compose its unitary. Two
//! independent implementations are provided so each can be checked against
//! the other and against the closed-form matrix.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, trace};

use crate::error::{QftError, Result};
use crate::gate::GateOp;
use crate::index::{bit_mask, dim_for_qubits};
use crate::instruct::instruct_gate;
use crate::sequence::GateSequence;
use crate::state::State;

/// Qubit count of `state`, checked against the register size of `sequence`.
///
/// The state length is validated first, so a malformed state is reported as
/// `InvalidInput` even when the sizes also disagree.
fn check_state(sequence: &GateSequence, state: &State) -> Result<usize> {
    let n_qubits = state.num_qubits()?;
    check_register(sequence, n_qubits)?;
    Ok(n_qubits)
}

fn check_register(sequence: &GateSequence, n_qubits: usize) -> Result<()> {
    if sequence.num_qubits() != n_qubits {
        return Err(QftError::dimension_mismatch(sequence.num_qubits(), n_qubits));
    }
    Ok(())
}

/// A simulation backend able to execute a gate sequence.
pub trait Backend {
    fn name(&self) -> &'static str;

    /// Evolve `state` through every operation of `sequence` in order.
    fn evolve(&self, sequence: &GateSequence, state: &State) -> Result<State>;

    /// Composite `2^n × 2^n` unitary of `sequence`.
    ///
    /// The default implementation evolves each computational basis state and
    /// stores the result as the matching column.
    fn unitary(&self, sequence: &GateSequence, n_qubits: usize) -> Result<Array2<Complex64>> {
        check_register(sequence, n_qubits)?;
        let dim = dim_for_qubits(n_qubits)?;
        let mut u = Array2::zeros((dim, dim));
        for k in 0..dim {
            let column = self.evolve(sequence, &State::basis_state(n_qubits, k)?)?;
            u.column_mut(k).assign(&column.data);
        }
        Ok(u)
    }
}

/// In-place amplitude updates, `O(2^n)` work per gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateVectorBackend;

impl Backend for StateVectorBackend {
    fn name(&self) -> &'static str {
        "statevector"
    }

    fn evolve(&self, sequence: &GateSequence, state: &State) -> Result<State> {
        let n_qubits = check_state(sequence, state)?;
        let mut amplitudes = state.data.to_vec();
        for op in sequence {
            trace!(backend = self.name(), %op, "applying gate");
            instruct_gate(&mut amplitudes, n_qubits, op);
        }
        Ok(State::from(amplitudes))
    }
}

/// Lifts every gate to a full `2^n × 2^n` matrix and multiplies.
///
/// Quadratic in the Hilbert space dimension; meant as a second, structurally
/// different execution path for cross-checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseBackend;

/// Local index formed from the bits of `index` selected by `masks`, first mask most significant.
fn gather(index: usize, masks: &[usize]) -> usize {
    masks
        .iter()
        .fold(0, |acc, &m| (acc << 1) | usize::from(index & m != 0))
}

/// Inverse of [`gather`]: place the bits of `local` at the positions in `masks`.
fn scatter(local: usize, masks: &[usize]) -> usize {
    let k = masks.len();
    masks
        .iter()
        .enumerate()
        .filter(|&(p, _)| (local >> (k - 1 - p)) & 1 == 1)
        .fold(0, |acc, (_, &m)| acc | m)
}

/// Embed the local matrix of `op` into the full `n`-qubit Hilbert space.
pub fn lift(op: &GateOp, n_qubits: usize) -> Array2<Complex64> {
    let dim = 1usize << n_qubits;
    let local = op.local_matrix();
    let masks: Vec<usize> = op.qubits().iter().map(|&l| bit_mask(l, n_qubits)).collect();
    let involved = masks.iter().fold(0, |acc, m| acc | m);

    let mut full = Array2::zeros((dim, dim));
    for col in 0..dim {
        let local_col = gather(col, &masks);
        let rest = col & !involved;
        for local_row in 0..local.nrows() {
            full[[rest | scatter(local_row, &masks), col]] = local[[local_row, local_col]];
        }
    }
    full
}

impl Backend for DenseBackend {
    fn name(&self) -> &'static str {
        "dense"
    }

    fn evolve(&self, sequence: &GateSequence, state: &State) -> Result<State> {
        let n_qubits = check_state(sequence, state)?;
        let mut data = state.data.clone();
        for op in sequence {
            trace!(backend = self.name(), %op, "applying gate");
            data = lift(op, n_qubits).dot(&data);
        }
        Ok(State::new(data))
    }

    fn unitary(&self, sequence: &GateSequence, n_qubits: usize) -> Result<Array2<Complex64>> {
        check_register(sequence, n_qubits)?;
        let dim = dim_for_qubits(n_qubits)?;
        debug!(n_qubits, num_ops = sequence.len(), "composing dense unitary");
        let mut u: Array2<Complex64> = Array2::eye(dim);
        for op in sequence {
            u = lift(op, n_qubits).dot(&u);
        }
        Ok(u)
    }
}

/// Composite unitary of `sequence` on `n_qubits` qubits.
///
/// # Errors
/// `DimensionMismatch` if the sequence acts on a different number of qubits.
pub fn to_unitary(sequence: &GateSequence, n_qubits: usize) -> Result<Array2<Complex64>> {
    StateVectorBackend.unitary(sequence, n_qubits)
}

/// Evolve `state` through `sequence`.
///
/// # Errors
/// `InvalidInput` if the state length is not a power of 2, then
/// `DimensionMismatch` if it does not match the sequence's register.
pub fn apply_to_statevector(sequence: &GateSequence, state: &State) -> Result<State> {
    StateVectorBackend.evolve(sequence, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_scatter_roundtrip() {
        let masks = [0b001, 0b100];
        for local in 0..4 {
            assert_eq!(gather(scatter(local, &masks), &masks), local);
        }
        // first mask is the most significant local bit
        assert_eq!(gather(0b001, &masks), 0b10);
    }

    #[test]
    fn test_lift_swap_is_permutation() {
        let m = lift(&GateOp::Swap { a: 0, b: 1 }, 2);
        assert_eq!(m[[2, 1]], Complex64::new(1.0, 0.0));
        assert_eq!(m[[1, 2]], Complex64::new(1.0, 0.0));
        assert_eq!(m[[0, 0]], Complex64::new(1.0, 0.0));
        assert_eq!(m[[3, 3]], Complex64::new(1.0, 0.0));
        assert_eq!(m[[1, 1]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_lift_hadamard_on_lsb() {
        let m = lift(&GateOp::Hadamard { qubit: 1 }, 2);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        // block diagonal: H acts within |00>,|01> and within |10>,|11>
        assert!((m[[0, 1]].re - s).abs() < 1e-12);
        assert!((m[[3, 3]].re + s).abs() < 1e-12);
        assert_eq!(m[[0, 2]], Complex64::new(0.0, 0.0));
    }
}

//! Primitive amplitude operations for state vector simulation.
//!
//! These functions update a flat amplitude slice in place. The slice length
//! must be `2^n_qubits`; callers validate this before dispatching.

use ndarray::Array2;
use num_complex::Complex64;

use crate::gate::GateOp;
use crate::index::{bit_mask, iter_basis_fixed};

/// Apply a 2x2 unitary gate to a pair of amplitudes at indices i and j.
///
/// The gate matrix is [[a, b], [c, d]] and transforms:
/// - new_i = a * state[i] + b * state[j]
/// - new_j = c * state[i] + d * state[j]
///
/// # Example
/// ```
/// use ndarray::array;
/// use num_complex::Complex64;
/// use qft_rs::instruct::u1rows;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let mut state = vec![one, zero];
/// u1rows(&mut state, 0, 1, &array![[zero, one], [one, zero]]);
/// assert!((state[1] - one).norm() < 1e-12);
/// ```
pub fn u1rows(state: &mut [Complex64], i: usize, j: usize, gate: &Array2<Complex64>) {
    debug_assert_eq!(gate.dim(), (2, 2));

    let old_i = state[i];
    let old_j = state[j];

    state[i] = gate[[0, 0]] * old_i + gate[[0, 1]] * old_j;
    state[j] = gate[[1, 0]] * old_i + gate[[1, 1]] * old_j;
}

/// Multiply an amplitude at index i by a scalar factor.
pub fn mulrow(state: &mut [Complex64], i: usize, factor: Complex64) {
    state[i] *= factor;
}

/// Apply a single-qubit gate at register position `loc`.
///
/// Pairs every index with bit `loc` clear with its partner that has it set.
pub fn instruct_single(
    state: &mut [Complex64],
    n_qubits: usize,
    gate: &Array2<Complex64>,
    loc: usize,
) {
    debug_assert_eq!(state.len(), 1 << n_qubits);
    let mask = bit_mask(loc, n_qubits);
    for i in iter_basis_fixed(n_qubits, &[loc], &[false]) {
        u1rows(state, i, i | mask, gate);
    }
}

/// Multiply by `e^(iθ)` every amplitude whose `control` and `target` bits are both 1.
pub fn instruct_controlled_phase(
    state: &mut [Complex64],
    n_qubits: usize,
    control: usize,
    target: usize,
    angle: f64,
) {
    debug_assert_eq!(state.len(), 1 << n_qubits);
    let phase = Complex64::from_polar(1.0, angle);
    for i in iter_basis_fixed(n_qubits, &[control, target], &[true, true]) {
        mulrow(state, i, phase);
    }
}

/// Exchange the bits at positions `a` and `b` of every basis index.
pub fn instruct_swap(state: &mut [Complex64], n_qubits: usize, a: usize, b: usize) {
    debug_assert_eq!(state.len(), 1 << n_qubits);
    let flip = bit_mask(a, n_qubits) | bit_mask(b, n_qubits);
    // |..1..0..> <-> |..0..1..>; visiting only a=1, b=0 touches each pair once
    for i in iter_basis_fixed(n_qubits, &[a, b], &[true, false]) {
        state.swap(i, i ^ flip);
    }
}

/// Dispatch a [`GateOp`] to its kernel.
pub fn instruct_gate(state: &mut [Complex64], n_qubits: usize, op: &GateOp) {
    match *op {
        GateOp::Hadamard { qubit } => {
            instruct_single(state, n_qubits, &op.local_matrix(), qubit);
        }
        GateOp::ControlledPhase {
            control,
            target,
            angle,
        } => instruct_controlled_phase(state, n_qubits, control, target, angle),
        GateOp::Swap { a, b } => instruct_swap(state, n_qubits, a, b),
    }
}

//! A common interface over the two QFT realizations.
//!
//! [`MatrixTransform`] multiplies by the closed-form matrix;
//! [`CircuitTransform`] builds the gate decomposition and hands it to a
//! [`Backend`]. They are deliberately separate code paths so that tests can
//! compare one against the other.

use ndarray::Array2;
use num_complex::Complex64;

use crate::backend::{Backend, StateVectorBackend};
use crate::decompose::{build_gate_sequence, build_gate_sequence_on};
use crate::error::{QftError, Result};
use crate::matrix;
use crate::register::Register;
use crate::sequence::GateSequence;
use crate::state::State;

/// Forward and inverse QFT on states of any valid size.
pub trait FourierTransform {
    fn apply(&self, state: &State) -> Result<State>;

    fn apply_inverse(&self, state: &State) -> Result<State>;

    fn unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>>;

    fn inverse_unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>>;
}

/// Closed-form dense matrix realization.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixTransform;

impl FourierTransform for MatrixTransform {
    fn apply(&self, state: &State) -> Result<State> {
        matrix::apply(state)
    }

    fn apply_inverse(&self, state: &State) -> Result<State> {
        matrix::apply_inverse(state)
    }

    fn unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>> {
        matrix::matrix(n_qubits)
    }

    fn inverse_unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>> {
        matrix::inverse_matrix(n_qubits)
    }
}

/// Gate-decomposition realization executed by a [`Backend`].
///
/// With `without_reverse` set, the final SWAP layer is omitted and outputs
/// come out in bit-reversed qubit order.
#[derive(Debug, Clone)]
pub struct CircuitTransform<B = StateVectorBackend> {
    backend: B,
    without_reverse: bool,
    register: Option<Register>,
}

impl Default for CircuitTransform<StateVectorBackend> {
    fn default() -> Self {
        Self::new(StateVectorBackend)
    }
}

impl<B: Backend> CircuitTransform<B> {
    pub fn new(backend: B) -> Self {
        CircuitTransform {
            backend,
            without_reverse: false,
            register: None,
        }
    }

    pub fn without_reverse(mut self, without_reverse: bool) -> Self {
        self.without_reverse = without_reverse;
        self
    }

    /// Pin the register; states of any other size are then rejected with
    /// `DimensionMismatch`.
    pub fn on_register(mut self, register: Register) -> Self {
        self.register = Some(register);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Forward gate sequence for `n_qubits` qubits.
    pub fn sequence(&self, n_qubits: usize) -> Result<GateSequence> {
        match &self.register {
            Some(register) if register.len() == n_qubits => {
                Ok(build_gate_sequence_on(register, self.without_reverse))
            }
            Some(register) => Err(QftError::dimension_mismatch(register.len(), n_qubits)),
            None => build_gate_sequence(n_qubits, self.without_reverse),
        }
    }

    pub fn inverse_sequence(&self, n_qubits: usize) -> Result<GateSequence> {
        Ok(self.sequence(n_qubits)?.inverse())
    }
}

impl<B: Backend> FourierTransform for CircuitTransform<B> {
    fn apply(&self, state: &State) -> Result<State> {
        let sequence = self.sequence(state.num_qubits()?)?;
        self.backend.evolve(&sequence, state)
    }

    fn apply_inverse(&self, state: &State) -> Result<State> {
        let sequence = self.inverse_sequence(state.num_qubits()?)?;
        self.backend.evolve(&sequence, state)
    }

    fn unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>> {
        self.backend.unitary(&self.sequence(n_qubits)?, n_qubits)
    }

    fn inverse_unitary(&self, n_qubits: usize) -> Result<Array2<Complex64>> {
        self.backend
            .unitary(&self.inverse_sequence(n_qubits)?, n_qubits)
    }
}

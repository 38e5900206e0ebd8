//! Quantum Fourier Transform, realized twice: as the dense closed-form
//! matrix and as a Hadamard / controlled-phase / SWAP gate sequence that any
//! [`Backend`] can execute.

pub mod error;
pub mod index;
pub mod state;
pub mod register;
pub mod gate;
pub mod sequence;
pub mod linalg;
pub mod matrix;
pub mod decompose;
pub mod instruct;
pub mod backend;
pub mod transform;
pub mod json;

pub use error::{QftError, Result};
pub use state::State;
pub use register::{Qubit, Register};
pub use gate::GateOp;
pub use sequence::GateSequence;
pub use matrix::{apply, apply_inverse, bit_reversal_matrix, inverse_matrix, matrix};
pub use decompose::{
    build_gate_sequence, build_gate_sequence_on, build_inverse_gate_sequence,
    inverse_gate_sequence,
};
pub use backend::{apply_to_statevector, to_unitary, Backend, DenseBackend, StateVectorBackend};
pub use transform::{CircuitTransform, FourierTransform, MatrixTransform};
pub use linalg::DEFAULT_ATOL;
pub use json::{sequence_from_json, sequence_to_json};

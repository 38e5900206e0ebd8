//! Ordered qubit registers.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QftError, Result};

/// Opaque qubit identifier. Only used for labelling; gates address qubits by
/// their position in a [`Register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Qubit(pub usize);

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A non-empty ordered list of distinct qubits.
///
/// Position `i` in the register is bit `n - 1 - i` of a basis index, i.e.
/// position 0 is the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Qubit>", into = "Vec<Qubit>")]
pub struct Register {
    qubits: Vec<Qubit>,
}

impl Register {
    /// Qubits `q0, q1, ..., q{n-1}` in order.
    pub fn line(n_qubits: usize) -> Result<Self> {
        Self::from_qubits((0..n_qubits).map(Qubit).collect())
    }

    pub fn from_qubits(qubits: Vec<Qubit>) -> Result<Self> {
        if qubits.is_empty() {
            return Err(QftError::invalid_input(
                "register must contain at least one qubit",
            ));
        }
        let mut seen = HashSet::with_capacity(qubits.len());
        for q in &qubits {
            if !seen.insert(*q) {
                return Err(QftError::invalid_input(format!(
                    "duplicate qubit {} in register",
                    q
                )));
            }
        }
        Ok(Register { qubits })
    }

    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Registers are never empty; provided alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Qubit at register position `loc`.
    pub fn get(&self, loc: usize) -> Option<Qubit> {
        self.qubits.get(loc).copied()
    }
}

impl TryFrom<Vec<Qubit>> for Register {
    type Error = QftError;

    fn try_from(qubits: Vec<Qubit>) -> Result<Self> {
        Register::from_qubits(qubits)
    }
}

impl From<Register> for Vec<Qubit> {
    fn from(register: Register) -> Self {
        register.qubits
    }
}

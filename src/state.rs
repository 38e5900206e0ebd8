use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{QftError, Result};
use crate::index::{dim_for_qubits, num_qubits_for_dim};

/// Amplitudes over the computational basis of a qubit register.
///
/// Construction does not validate the length or normalization; operations
/// that need a qubit count call [`State::num_qubits`], which does.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub data: Array1<Complex64>,
}

impl State {
    pub fn new(data: Array1<Complex64>) -> Self {
        State { data }
    }

    /// Creates |0,0,...,0> state (first basis element = 1, rest = 0)
    pub fn zero_state(n_qubits: usize) -> Result<Self> {
        Self::basis_state(n_qubits, 0)
    }

    /// Creates the computational basis state |k> on `n_qubits` qubits.
    ///
    /// Position 0 of the register is the most significant bit of `k`.
    pub fn basis_state(n_qubits: usize, k: usize) -> Result<Self> {
        let total = dim_for_qubits(n_qubits)?;
        if k >= total {
            return Err(QftError::invalid_input(format!(
                "basis index {} is out of range for {} qubits",
                k, n_qubits
            )));
        }
        let mut data = Array1::zeros(total);
        data[k] = Complex64::new(1.0, 0.0);
        Ok(State { data })
    }

    /// Number of qubits, or `InvalidInput` if the length is not a power of 2.
    pub fn num_qubits(&self) -> Result<usize> {
        num_qubits_for_dim(self.data.len())
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// L2 norm of `self - other`.
    pub fn distance(&self, other: &State) -> Result<f64> {
        if self.data.len() != other.data.len() {
            return Err(QftError::dimension_mismatch(self.data.len(), other.data.len()));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).norm_sqr())
            .sum::<f64>()
            .sqrt())
    }
}

impl From<Vec<Complex64>> for State {
    fn from(data: Vec<Complex64>) -> Self {
        State::new(Array1::from(data))
    }
}

impl From<Array1<Complex64>> for State {
    fn from(data: Array1<Complex64>) -> Self {
        State::new(data)
    }
}

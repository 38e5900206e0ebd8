//! Shared test utilities for qft-rs integration tests.

use ndarray::Array1;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::Rng;

use qft_rs::State;

pub const ATOL: f64 = 1e-9;

#[allow(dead_code)]
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Assert two states agree elementwise within `ATOL`.
#[allow(dead_code)]
pub fn assert_state_approx(result: &State, expected: &[Complex64]) {
    assert_eq!(result.data.len(), expected.len());
    for (i, (r, e)) in result.data.iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "State mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}

/// Unnormalized state with amplitudes drawn from the unit square.
#[allow(dead_code)]
pub fn random_state(rng: &mut StdRng, n_qubits: usize) -> State {
    let data: Array1<Complex64> = (0..1usize << n_qubits)
        .map(|_| c(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    State::new(data)
}

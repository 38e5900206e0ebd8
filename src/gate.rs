use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use ndarray::{array, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Elementary operation of a QFT circuit, addressed by register position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate")]
pub enum GateOp {
    /// Hadamard on a single qubit.
    #[serde(rename = "H")]
    Hadamard { qubit: usize },
    /// diag(1, 1, 1, e^(iθ)) on (control, target).
    ///
    /// Equivalent to `CZ^(θ/π)`; symmetric in its two operands.
    #[serde(rename = "CPhase")]
    ControlledPhase {
        control: usize,
        target: usize,
        angle: f64,
    },
    #[serde(rename = "SWAP")]
    Swap { a: usize, b: usize },
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOp::Hadamard { qubit } => write!(f, "H @ q[{}]", qubit),
            GateOp::ControlledPhase {
                control,
                target,
                angle,
            } => write!(f, "C(q[{}]) Phase({:.4}) @ q[{}]", control, angle, target),
            GateOp::Swap { a, b } => write!(f, "SWAP @ q[{}, {}]", a, b),
        }
    }
}

impl GateOp {
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Hadamard { .. } => "H",
            GateOp::ControlledPhase { .. } => "CPhase",
            GateOp::Swap { .. } => "SWAP",
        }
    }

    /// Register positions the operation acts on (control first).
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            GateOp::Hadamard { qubit } => vec![qubit],
            GateOp::ControlledPhase {
                control, target, ..
            } => vec![control, target],
            GateOp::Swap { a, b } => vec![a, b],
        }
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(self, GateOp::ControlledPhase { .. })
    }

    /// Return the adjoint (conjugate transpose) of this operation.
    ///
    /// Hadamard and SWAP are Hermitian; a controlled phase negates its angle.
    pub fn dagger(&self) -> Self {
        match *self {
            GateOp::Hadamard { .. } | GateOp::Swap { .. } => *self,
            GateOp::ControlledPhase {
                control,
                target,
                angle,
            } => GateOp::ControlledPhase {
                control,
                target,
                angle: -angle,
            },
        }
    }

    /// Matrix on the operands returned by [`GateOp::qubits`], row-major with
    /// the first operand as the most significant bit.
    pub fn local_matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);

        match *self {
            GateOp::Hadamard { .. } => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[s, s], [s, -s]]
            }
            GateOp::ControlledPhase { angle, .. } => {
                let phase = Complex64::from_polar(1.0, angle);
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one;
                m[[1, 1]] = one;
                m[[2, 2]] = one;
                m[[3, 3]] = phase;
                m
            }
            GateOp::Swap { .. } => {
                // |00>->|00>, |01>->|10>, |10>->|01>, |11>->|11>
                array![
                    [one, zero, zero, zero],
                    [zero, zero, one, zero],
                    [zero, one, zero, zero],
                    [zero, zero, zero, one]
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_dagger_negates_phase_only() {
        let cp = GateOp::ControlledPhase {
            control: 1,
            target: 0,
            angle: PI / 4.0,
        };
        assert_eq!(
            cp.dagger(),
            GateOp::ControlledPhase {
                control: 1,
                target: 0,
                angle: -PI / 4.0
            }
        );
        let h = GateOp::Hadamard { qubit: 2 };
        assert_eq!(h.dagger(), h);
        let sw = GateOp::Swap { a: 0, b: 3 };
        assert_eq!(sw.dagger(), sw);
    }

    #[test]
    fn test_local_matrix_dagger_is_conjugate_transpose() {
        let cp = GateOp::ControlledPhase {
            control: 0,
            target: 1,
            angle: 0.7,
        };
        let m = cp.local_matrix();
        let md = cp.dagger().local_matrix();
        for i in 0..4 {
            for j in 0..4 {
                assert!((md[[i, j]] - m[[j, i]].conj()).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn test_qubits_and_names() {
        let cp = GateOp::ControlledPhase {
            control: 2,
            target: 0,
            angle: PI / 4.0,
        };
        assert_eq!(cp.qubits(), vec![2, 0]);
        assert_eq!(cp.name(), "CPhase");
        assert!(cp.is_diagonal());
        assert!(!GateOp::Hadamard { qubit: 0 }.is_diagonal());
    }

    #[test]
    fn test_display() {
        assert_eq!(GateOp::Hadamard { qubit: 1 }.to_string(), "H @ q[1]");
        assert_eq!(GateOp::Swap { a: 0, b: 2 }.to_string(), "SWAP @ q[0, 2]");
        let cp = GateOp::ControlledPhase {
            control: 1,
            target: 0,
            angle: PI / 2.0,
        };
        assert_eq!(cp.to_string(), "C(q[1]) Phase(1.5708) @ q[0]");
    }
}

//! Textbook decomposition of the QFT into Hadamard, controlled-phase and
//! SWAP gates.
//!
//! For an `n`-qubit register the forward sequence is
//!
//! ```text
//! for i in 0..n:
//!     H(q[i])
//!     for j in i+1..n:
//!         CPhase(control = q[j], target = q[i], angle = π / 2^(j-i))
//! for k in 0..n/2:                      (skipped when without_reverse)
//!     SWAP(q[k], q[n-1-k])
//! ```
//!
//! With position 0 as the most significant bit this reproduces
//! [`crate::matrix::matrix`] exactly.

use std::f64::consts::PI;

use tracing::debug;

use crate::error::Result;
use crate::gate::GateOp;
use crate::register::Register;
use crate::sequence::GateSequence;

/// Rotation angle `π / 2^distance` coupling two qubits `distance` positions apart.
///
/// # Example
/// ```
/// use qft_rs::decompose::phase_angle;
/// use std::f64::consts::PI;
/// assert_eq!(phase_angle(1), PI / 2.0);
/// assert_eq!(phase_angle(3), PI / 8.0);
/// ```
pub fn phase_angle(distance: usize) -> f64 {
    // powi keeps very distant pairs at a tiny positive angle instead of overflowing
    PI / 2f64.powi(distance.min(i32::MAX as usize) as i32)
}

/// Swaps that reverse the order of an `n`-qubit register.
fn bit_reversal_ops(n: usize) -> impl Iterator<Item = GateOp> {
    (0..n / 2).map(move |k| GateOp::Swap { a: k, b: n - 1 - k })
}

/// Build the QFT gate sequence on a caller-supplied register.
pub fn build_gate_sequence_on(register: &Register, without_reverse: bool) -> GateSequence {
    let n = register.len();
    let mut ops = Vec::with_capacity(n * (n + 1) / 2 + n / 2);

    for i in 0..n {
        ops.push(GateOp::Hadamard { qubit: i });
        for j in (i + 1)..n {
            ops.push(GateOp::ControlledPhase {
                control: j,
                target: i,
                angle: phase_angle(j - i),
            });
        }
    }

    if !without_reverse {
        ops.extend(bit_reversal_ops(n));
    }

    debug!(n_qubits = n, without_reverse, num_ops = ops.len(), "built QFT gate sequence");
    GateSequence::new_unchecked(register.clone(), ops)
}

/// Build the QFT gate sequence on the line register `q0..q{n-1}`.
///
/// # Errors
/// `InvalidInput` when `n_qubits` is 0.
///
/// # Example
/// ```
/// use qft_rs::decompose::build_gate_sequence;
/// let seq = build_gate_sequence(3, false).unwrap();
/// // 3 H + 3 CPhase + 1 SWAP
/// assert_eq!(seq.len(), 7);
/// ```
pub fn build_gate_sequence(n_qubits: usize, without_reverse: bool) -> Result<GateSequence> {
    let register = Register::line(n_qubits)?;
    Ok(build_gate_sequence_on(&register, without_reverse))
}

/// Inverse of any gate sequence: reversed order, every operation replaced by
/// its adjoint.
pub fn inverse_gate_sequence(sequence: &GateSequence) -> GateSequence {
    sequence.inverse()
}

/// Inverse QFT gate sequence on the line register `q0..q{n-1}`.
pub fn build_inverse_gate_sequence(
    n_qubits: usize,
    without_reverse: bool,
) -> Result<GateSequence> {
    Ok(inverse_gate_sequence(&build_gate_sequence(
        n_qubits,
        without_reverse,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QftError;
    use crate::register::Qubit;

    #[test]
    fn test_two_qubit_sequence() {
        let seq = build_gate_sequence(2, false).unwrap();
        assert_eq!(
            seq.ops(),
            &[
                GateOp::Hadamard { qubit: 0 },
                GateOp::ControlledPhase {
                    control: 1,
                    target: 0,
                    angle: PI / 2.0
                },
                GateOp::Hadamard { qubit: 1 },
                GateOp::Swap { a: 0, b: 1 },
            ]
        );
    }

    #[test]
    fn test_without_reverse_drops_swaps_only() {
        for n in 1..7 {
            let with = build_gate_sequence(n, false).unwrap();
            let without = build_gate_sequence(n, true).unwrap();
            assert_eq!(with.len() - without.len(), n / 2);
            assert_eq!(&with.ops()[..without.len()], without.ops());
            assert!(without.iter().all(|op| !matches!(op, GateOp::Swap { .. })));
        }
    }

    #[test]
    fn test_gate_counts_follow_triangle() {
        let seq = build_gate_sequence(5, false).unwrap();
        let counts = seq.gate_counts();
        assert_eq!(counts["H"], 5);
        assert_eq!(counts["CPhase"], 10);
        assert_eq!(counts["SWAP"], 2);
    }

    #[test]
    fn test_angles_halve_with_distance() {
        let seq = build_gate_sequence(4, true).unwrap();
        for op in seq.iter() {
            if let GateOp::ControlledPhase {
                control,
                target,
                angle,
            } = *op
            {
                assert!(control > target);
                assert_eq!(angle, PI / (1u32 << (control - target)) as f64);
            }
        }
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            build_gate_sequence(0, false),
            Err(QftError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_custom_register_is_kept() {
        let reg = Register::from_qubits(vec![Qubit(10), Qubit(3), Qubit(7)]).unwrap();
        let seq = build_gate_sequence_on(&reg, false);
        assert_eq!(seq.register(), &reg);
        assert_eq!(seq.ops().last(), Some(&GateOp::Swap { a: 0, b: 2 }));
    }

    #[test]
    fn test_inverse_sequence_negates_angles() {
        let inv = build_inverse_gate_sequence(3, false).unwrap();
        assert_eq!(inv.ops()[0], GateOp::Swap { a: 0, b: 2 });
        assert_eq!(inv.ops().last(), Some(&GateOp::Hadamard { qubit: 0 }));
        for op in inv.iter() {
            if let GateOp::ControlledPhase { angle, .. } = op {
                assert!(*angle < 0.0);
            }
        }
    }

    #[test]
    fn test_phase_angle_far_apart_stays_positive() {
        assert!(phase_angle(2000) >= 0.0);
        assert!(phase_angle(2000).is_finite());
    }
}

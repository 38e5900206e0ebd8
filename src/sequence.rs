use std::collections::BTreeMap;
use std::fmt;

use crate::error::{QftError, Result};
use crate::gate::GateOp;
use crate::register::Register;

/// An immutable, validated, ordered list of gate operations on a register.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSequence {
    register: Register,
    ops: Vec<GateOp>,
}

impl GateSequence {
    /// Creates a new GateSequence with validation.
    ///
    /// # Errors
    /// Returns `InvalidInput` if an operand is outside the register or a
    /// two-qubit operation names the same position twice.
    pub fn new(register: Register, ops: Vec<GateOp>) -> Result<Self> {
        let num_qubits = register.len();

        for op in &ops {
            let locs = op.qubits();
            for &loc in &locs {
                if loc >= num_qubits {
                    return Err(QftError::invalid_input(format!(
                        "{} acts on location {} but the register has {} qubits",
                        op.name(),
                        loc,
                        num_qubits
                    )));
                }
            }
            if locs.len() == 2 && locs[0] == locs[1] {
                return Err(QftError::invalid_input(format!(
                    "{} acts twice on location {}",
                    op.name(),
                    locs[0]
                )));
            }
            if let GateOp::ControlledPhase { angle, .. } = op {
                if !angle.is_finite() {
                    return Err(QftError::invalid_input(format!(
                        "controlled phase angle {} is not finite",
                        angle
                    )));
                }
            }
        }

        Ok(GateSequence { register, ops })
    }

    /// For builders whose operands are in range by construction.
    pub(crate) fn new_unchecked(register: Register, ops: Vec<GateOp>) -> Self {
        GateSequence { register, ops }
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    pub fn num_qubits(&self) -> usize {
        self.register.len()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GateOp> {
        self.ops.iter()
    }

    /// Number of operations of each kind, keyed by gate name.
    pub fn gate_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for op in &self.ops {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Return the adjoint sequence U†.
    ///
    /// Operations are reversed and each is replaced with its adjoint, so
    /// `self.then(&self.inverse())` is the identity.
    pub fn inverse(&self) -> Self {
        GateSequence {
            register: self.register.clone(),
            ops: self.ops.iter().rev().map(GateOp::dagger).collect(),
        }
    }

    /// `self` followed by `other` on the same register size.
    pub fn then(&self, other: &GateSequence) -> Result<Self> {
        if other.num_qubits() != self.num_qubits() {
            return Err(QftError::dimension_mismatch(
                self.num_qubits(),
                other.num_qubits(),
            ));
        }
        let mut ops = self.ops.clone();
        ops.extend_from_slice(&other.ops);
        Ok(GateSequence {
            register: self.register.clone(),
            ops,
        })
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a GateOp;
    type IntoIter = std::slice::Iter<'a, GateOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits = self
            .register
            .qubits()
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "nqubits: {} [{}]", self.num_qubits(), qubits)?;
        for op in &self.ops {
            writeln!(f, "  {}", op)?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gate::GateOp;
use crate::register::Register;
use crate::sequence::GateSequence;

#[derive(Serialize, Deserialize)]
struct SequenceJson {
    qubits: Register,
    ops: Vec<GateOp>,
}

/// Serialize a GateSequence to a pretty-printed JSON string.
///
/// ```text
/// {
///   "qubits": [0, 1],
///   "ops": [
///     { "gate": "H", "qubit": 0 },
///     { "gate": "CPhase", "control": 1, "target": 0, "angle": 1.5707963267948966 },
///     ...
///   ]
/// }
/// ```
pub fn sequence_to_json(sequence: &GateSequence) -> Result<String> {
    let json = SequenceJson {
        qubits: sequence.register().clone(),
        ops: sequence.ops().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Deserialize a GateSequence from a JSON string.
///
/// The register and operands are validated exactly as in [`GateSequence::new`].
pub fn sequence_from_json(json: &str) -> Result<GateSequence> {
    let parsed: SequenceJson = serde_json::from_str(json)?;
    GateSequence::new(parsed.qubits, parsed.ops)
}

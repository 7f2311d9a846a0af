//! Bell state preparation.

use qgen_ir::{Circuit, CircuitBuilder, QubitId};
use serde_json::json;

use crate::algorithm::Algorithm;
use crate::error::GenResult;

/// Generate the Bell state circuit: `H` on qubit 0, `CX` 0→1, measure both.
///
/// The width is always 2, whatever the sizing policy would say.
pub fn bell_circuit() -> GenResult<Circuit> {
    let mut circuit = CircuitBuilder::new(Algorithm::Bell.canonical_name(), 2)?;

    circuit
        .h(QubitId(0))?
        .cx(QubitId(0), QubitId(1))?
        .measure([QubitId(0), QubitId(1)])?;

    circuit
        .meta("type", "entanglement")
        .meta("description", Algorithm::Bell.summary())
        .meta("expected_states", json!(["00", "11"]))
        .meta("fidelity", 0.99);

    Ok(circuit.finish())
}

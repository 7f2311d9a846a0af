//! VQE hardware-efficient ansatz.

use std::f64::consts::TAU;

use qgen_ir::{Angle, Circuit, CircuitBuilder, QubitId};
use rand::Rng;

use crate::algorithm::Algorithm;
use crate::config::GeneratorConfig;
use crate::error::GenResult;

/// Generate a hardware-efficient VQE ansatz.
///
/// Each layer applies `ry(theta)` to every qubit, a linear CNOT chain
/// `i → i+1`, then `rz(phi)` to every qubit. Every angle is drawn uniformly
/// from `[0, 2π)` using `rng`.
pub fn vqe_circuit<R: Rng>(
    num_qubits: u32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenResult<Circuit> {
    let mut circuit = CircuitBuilder::new(Algorithm::Vqe.canonical_name(), num_qubits)?;
    let n = num_qubits;

    for _layer in 0..config.vqe_layers {
        // Rotation layer
        for i in 0..n {
            circuit.ry(Angle::Theta(rng.gen_range(0.0..TAU)), QubitId(i))?;
        }

        // Entangling layer
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }

        // Additional rotations
        for i in 0..n {
            circuit.rz(Angle::Phi(rng.gen_range(0.0..TAU)), QubitId(i))?;
        }
    }

    circuit.measure_all()?;

    circuit
        .meta("type", "variational")
        .meta("description", Algorithm::Vqe.summary())
        .meta("layers", config.vqe_layers)
        .meta("parameters", u64::from(config.vqe_layers) * u64::from(n) * 2)
        .meta("classical_optimizer", "COBYLA");

    Ok(circuit.finish())
}

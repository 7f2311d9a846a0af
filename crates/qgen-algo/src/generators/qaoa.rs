//! QAOA circuits.
//!
//! QAOA alternates a cost layer built from the problem graph with a mixer
//! layer of X rotations. Angles are drawn once per layer.

use std::f64::consts::TAU;

use qgen_ir::{Angle, Circuit, CircuitBuilder, QubitId};
use rand::Rng;
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::input::Edge;

/// Resolve the problem graph for a `num_qubits`-vertex circuit.
///
/// Without explicit edges this is the ring `(i, (i+1) mod n)`. Every edge must
/// join two distinct vertices inside the register.
pub fn problem_edges(num_qubits: u32, edges: Option<&[Edge]>) -> GenResult<Vec<(u32, u32)>> {
    let resolved: Vec<(u32, u32)> = match edges {
        Some(edges) => edges.iter().map(|e| e.endpoints(num_qubits)).collect(),
        None => (0..num_qubits)
            .map(|i| Edge::Vertex(i).endpoints(num_qubits))
            .collect(),
    };

    for &(i, j) in &resolved {
        if i >= num_qubits || j >= num_qubits {
            return Err(GenError::InvalidInput(format!(
                "edge ({i}, {j}) references a qubit outside [0, {num_qubits})"
            )));
        }
        if i == j {
            return Err(GenError::InvalidInput(format!(
                "edge ({i}, {j}) is a self-loop"
            )));
        }
    }

    Ok(resolved)
}

/// Generate a QAOA circuit.
///
/// # Arguments
/// * `num_qubits` - Number of qubits, one per graph vertex
/// * `edges` - Problem graph; the ring topology when `None`
/// * `config` - Number of layers
/// * `rng` - Source for the per-layer `gamma` and `beta` angles
pub fn qaoa_circuit<R: Rng>(
    num_qubits: u32,
    edges: Option<&[Edge]>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenResult<Circuit> {
    let mut circuit = CircuitBuilder::new(Algorithm::Qaoa.canonical_name(), num_qubits)?;
    let edges = problem_edges(num_qubits, edges)?;
    debug!(num_qubits, edges = edges.len(), "qaoa problem graph");

    // Initial state: |+⟩^n
    for i in 0..num_qubits {
        circuit.h(QubitId(i))?;
    }

    for _layer in 0..config.qaoa_layers {
        // Cost layer: ZZ interaction per edge
        let gamma: f64 = rng.gen_range(0.0..TAU);
        for &(i, j) in &edges {
            circuit
                .cx(QubitId(i), QubitId(j))?
                .rz(Angle::Phi(2.0 * gamma), QubitId(j))?
                .cx(QubitId(i), QubitId(j))?;
        }

        // Mixer layer
        let beta: f64 = rng.gen_range(0.0..TAU);
        for i in 0..num_qubits {
            circuit.rx(Angle::Theta(2.0 * beta), QubitId(i))?;
        }
    }

    circuit.measure_all()?;

    circuit
        .meta("type", "optimization")
        .meta("description", Algorithm::Qaoa.summary())
        .meta("layers", config.qaoa_layers)
        .meta("edges", edges.len())
        .meta("classical_optimizer", "Nelder-Mead");

    Ok(circuit.finish())
}

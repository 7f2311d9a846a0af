//! Grover's search circuit template.
//!
//! The oracle and the diffusion operator are structural sketches: the
//! multi-controlled phase flip is laid out as a fan of CNOTs from every other
//! qubit into the last one.

use std::f64::consts::FRAC_PI_4;

use qgen_ir::{Circuit, CircuitBuilder, QubitId};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::config::GeneratorConfig;
use crate::error::GenResult;

/// Optimal Grover iteration count `floor(π/4 · sqrt(2^n))`, before any cap.
pub fn optimal_iterations(num_qubits: u32) -> u64 {
    let search_space = 2f64.powf(f64::from(num_qubits));
    // Saturating float-to-int conversion.
    (FRAC_PI_4 * search_space.sqrt()).floor() as u64
}

/// Iteration count actually emitted for a given width.
pub fn applied_iterations(num_qubits: u32, config: &GeneratorConfig) -> u64 {
    optimal_iterations(num_qubits).min(u64::from(config.grover_max_iterations))
}

/// Generate a Grover search circuit over `num_qubits` qubits.
///
/// Gate count is `n + 6·n·k + 1` for `k` applied iterations.
pub fn grover_circuit(num_qubits: u32, config: &GeneratorConfig) -> GenResult<Circuit> {
    let mut circuit = CircuitBuilder::new(Algorithm::Grover.canonical_name(), num_qubits)?;
    let n = num_qubits;

    // Uniform superposition
    for i in 0..n {
        circuit.h(QubitId(i))?;
    }

    let optimal = optimal_iterations(n);
    let iterations = applied_iterations(n, config);
    debug!(num_qubits = n, optimal, iterations, "grover iteration count");

    for _ in 0..iterations {
        apply_oracle(&mut circuit, n)?;
        apply_diffusion(&mut circuit, n)?;
    }

    circuit.measure_all()?;

    circuit
        .meta("type", "search")
        .meta("description", Algorithm::Grover.summary())
        .meta("search_space", 1u64.checked_shl(n).unwrap_or(u64::MAX))
        .meta("iterations", iterations)
        .meta("optimal_iterations", optimal)
        .meta("speedup", "O(√N)");

    Ok(circuit.finish())
}

/// Oracle sketch: X on the last qubit around a CNOT fan into it.
fn apply_oracle(circuit: &mut CircuitBuilder, n: u32) -> GenResult<()> {
    let last = QubitId(n - 1);
    circuit.x(last)?;
    apply_cx_fan(circuit, n)?;
    circuit.x(last)?;
    Ok(())
}

/// Diffusion sketch: (H, X) on every qubit, the CNOT fan, then (X, H) on
/// every qubit.
fn apply_diffusion(circuit: &mut CircuitBuilder, n: u32) -> GenResult<()> {
    for i in 0..n {
        circuit.h(QubitId(i))?.x(QubitId(i))?;
    }
    apply_cx_fan(circuit, n)?;
    for i in 0..n {
        circuit.x(QubitId(i))?.h(QubitId(i))?;
    }
    Ok(())
}

fn apply_cx_fan(circuit: &mut CircuitBuilder, n: u32) -> GenResult<()> {
    let last = QubitId(n - 1);
    for i in 0..n - 1 {
        circuit.cx(QubitId(i), last)?;
    }
    Ok(())
}

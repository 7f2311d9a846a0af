//! Shor period-finding circuit template.
//!
//! This lays out the register split, a placeholder controlled layer in place
//! of modular exponentiation, and an inverse-QFT sketch. It is a structural
//! template, not an arithmetic-correct factoring circuit.

use std::f64::consts::PI;

use qgen_ir::{Circuit, CircuitBuilder, QubitId};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::config::GeneratorConfig;
use crate::error::GenResult;

/// Generate a Shor period-finding circuit.
///
/// The width is `max(num_qubits, config.shor_min_qubits)`. The first
/// `width / 2` qubits form the control register, the rest the target
/// register. Only the control register is measured.
pub fn shor_circuit(num_qubits: u32, config: &GeneratorConfig) -> GenResult<Circuit> {
    let width = num_qubits.max(config.shor_min_qubits);
    let control_qubits = width / 2;
    let target_qubits = width - control_qubits;
    debug!(width, control_qubits, target_qubits, "shor register split");

    let mut circuit = CircuitBuilder::new(Algorithm::Shor.canonical_name(), width)?;

    // Control register in superposition
    for i in 0..control_qubits {
        circuit.h(QubitId(i))?;
    }

    // Placeholder for modular exponentiation
    for i in 0..control_qubits {
        for j in 0..target_qubits {
            circuit.cx(QubitId(i), QubitId(control_qubits + j))?;
        }
    }

    apply_inverse_qft(&mut circuit, control_qubits)?;

    circuit.measure((0..control_qubits).map(QubitId))?;

    circuit
        .meta("type", "factorization")
        .meta("description", Algorithm::Shor.summary())
        .meta("control_qubits", control_qubits)
        .meta("target_qubits", target_qubits)
        .meta("classical_postprocessing", true);

    Ok(circuit.finish())
}

/// Inverse-QFT sketch over qubits `0..n`: a reversing swap pass, then for
/// each qubit `i` a Hadamard followed by `cp(-π / 2^(i-j))` from every
/// earlier qubit `j`.
fn apply_inverse_qft(circuit: &mut CircuitBuilder, n: u32) -> GenResult<()> {
    for i in 0..n / 2 {
        circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
    }

    for i in 0..n {
        circuit.h(QubitId(i))?;
        for j in 0..i {
            circuit.cp(inverse_qft_angle(i, j), QubitId(j), QubitId(i))?;
        }
    }
    Ok(())
}

/// Phase of the controlled rotation between qubits `i` and an earlier `j`.
fn inverse_qft_angle(i: u32, j: u32) -> f64 {
    -PI / 2f64.powf(f64::from(i - j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgen_ir::{Gate, GateKind};

    #[test]
    fn test_minimum_width() {
        let config = GeneratorConfig::default();
        assert_eq!(shor_circuit(4, &config).unwrap().num_qubits(), 16);
        assert_eq!(shor_circuit(16, &config).unwrap().num_qubits(), 16);
        assert_eq!(shor_circuit(21, &config).unwrap().num_qubits(), 21);
    }

    #[test]
    fn test_gate_count_default_width() {
        let circuit = shor_circuit(16, &GeneratorConfig::default()).unwrap();
        // 8 H + 64 CX + 4 SWAP + 8 H + 28 CP + 1 measure
        assert_eq!(circuit.num_gates(), 113);

        let ops = circuit.count_ops();
        assert_eq!(ops.get("h"), Some(&16));
        assert_eq!(ops.get("cx"), Some(&64));
        assert_eq!(ops.get("swap"), Some(&4));
        assert_eq!(ops.get("cp"), Some(&28));
        assert_eq!(ops.get("measure"), Some(&1));
    }

    #[test]
    fn test_odd_width_split() {
        let circuit = shor_circuit(17, &GeneratorConfig::default()).unwrap();
        assert_eq!(circuit.metadata()["control_qubits"], 8);
        assert_eq!(circuit.metadata()["target_qubits"], 9);
    }

    #[test]
    fn test_inverse_qft_layout() {
        let circuit = shor_circuit(16, &GeneratorConfig::default()).unwrap();
        let gates = circuit.gates();

        let swaps: Vec<_> = gates
            .iter()
            .filter(|g| g.kind() == Some(GateKind::Swap))
            .collect();
        assert_eq!(swaps[0], &Gate::swap(QubitId(0), QubitId(7)));
        assert_eq!(swaps[3], &Gate::swap(QubitId(3), QubitId(4)));

        let first_cp = gates
            .iter()
            .find(|g| g.kind() == Some(GateKind::CP))
            .unwrap();
        assert_eq!(first_cp, &Gate::cp(-PI / 2.0, QubitId(0), QubitId(1)));
    }

    #[test]
    fn test_measures_only_control_register() {
        let circuit = shor_circuit(16, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            circuit.gates().last().map(Gate::targets),
            Some((0..8).map(QubitId).collect::<Vec<_>>())
        );
    }

    #[test]
    fn test_inverse_qft_angle() {
        assert_eq!(inverse_qft_angle(1, 0), -PI / 2.0);
        assert_eq!(inverse_qft_angle(3, 1), -PI / 4.0);
        assert_eq!(inverse_qft_angle(7, 0), -PI / 128.0);
    }
}

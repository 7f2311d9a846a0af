//! Circuit container and its builder.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{InvalidGateReason, IrError, IrResult};
use crate::gate::{Angle, Gate, OpaqueGate, RotationAxis};
use crate::qubit::QubitId;

/// Free-form descriptive fields attached to a circuit, in insertion order.
pub type Metadata = serde_json::Map<String, Value>;

/// A finished quantum circuit.
///
/// Produced by [`CircuitBuilder::finish`] and read-only afterwards. Gate order
/// is execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    algorithm: String,
    num_qubits: u32,
    gates: Vec<Gate>,
    metadata: Metadata,
}

impl Circuit {
    /// Canonical name of the algorithm that produced the circuit.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Width of the quantum (and classical) register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in execution order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Descriptive metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Count gates by name.
    pub fn count_ops(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct qubits touched by any gate, in ascending order.
    pub fn qubits_used(&self) -> Vec<QubitId> {
        self.gates
            .iter()
            .flat_map(Gate::qubits)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Calculate the circuit depth.
    ///
    /// Broadcast gates (single-qubit gates and measurements over several
    /// targets) occupy one layer on each target independently.
    pub fn depth(&self) -> usize {
        let mut wire_depth: FxHashMap<QubitId, usize> =
            FxHashMap::with_capacity_and_hasher(self.num_qubits as usize, Default::default());

        for gate in &self.gates {
            if gate.is_broadcast() {
                for q in gate.targets() {
                    *wire_depth.entry(q).or_insert(0) += 1;
                }
            } else {
                let qubits = gate.qubits();
                let layer = qubits
                    .iter()
                    .map(|q| wire_depth.get(q).copied().unwrap_or(0))
                    .max()
                    .unwrap_or(0)
                    + 1;
                for q in qubits {
                    wire_depth.insert(q, layer);
                }
            }
        }

        wire_depth.values().copied().max().unwrap_or(0)
    }
}

/// Incremental constructor for a [`Circuit`].
///
/// Every appended gate is validated and range-checked against the register
/// width, so a finished circuit always satisfies the IR invariants.
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    algorithm: String,
    num_qubits: u32,
    gates: Vec<Gate>,
    metadata: Metadata,
}

impl CircuitBuilder {
    /// Start a circuit of the given width.
    pub fn new(algorithm: impl Into<String>, num_qubits: u32) -> IrResult<Self> {
        let algorithm = algorithm.into();
        if num_qubits == 0 {
            return Err(IrError::ZeroQubits(algorithm));
        }
        Ok(Self {
            algorithm,
            num_qubits,
            gates: vec![],
            metadata: Metadata::new(),
        })
    }

    /// Width of the circuit under construction.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of gates appended so far.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Append a gate after validating it.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        gate.validate()?;
        if let Some(qubit) = gate.qubits().into_iter().find(|q| q.0 >= self.num_qubits) {
            return Err(IrError::InvalidGate {
                gate: gate.name().to_string(),
                reason: InvalidGateReason::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                },
            });
        }
        self.gates.push(gate);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::h(qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::x(qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::y(qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::z(qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, angle: Angle, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::rotation(RotationAxis::X, angle, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, angle: Angle, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::rotation(RotationAxis::Y, angle, qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, angle: Angle, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::rotation(RotationAxis::Z, angle, qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::cx(control, target))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::cp(theta, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, a: QubitId, b: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::swap(a, b))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply a user-defined gate.
    pub fn opaque(&mut self, gate: OpaqueGate) -> IrResult<&mut Self> {
        self.push(Gate::Opaque(gate))
    }

    /// Measure the given qubits into the classical bits of the same index.
    pub fn measure(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Gate::measure(qubits))
    }

    /// Measure every qubit of the register.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let n = self.num_qubits;
        self.measure((0..n).map(QubitId))
    }

    /// Record a metadata entry, replacing any earlier value under the same key.
    pub fn meta(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Freeze the circuit.
    pub fn finish(self) -> Circuit {
        Circuit {
            algorithm: self.algorithm,
            num_qubits: self.num_qubits,
            gates: self.gates,
            metadata: self.metadata,
        }
    }
}

//! QASM 2.0 emitter for serializing circuits.

use qgen_ir::{Circuit, Gate, QubitId};

use crate::error::{EmitError, EmitResult};

/// Emit a circuit as QASM 2.0 source code.
///
/// Register declarations are `qreg q[n];` / `creg c[n];`, both sized to the
/// circuit width, and measurements map each qubit to the classical bit of the
/// same index.
pub fn emit_qasm2(circuit: &Circuit) -> EmitResult<String> {
    let mut emitter = Qasm2Emitter::new();
    emitter.emit_circuit(circuit)
}

/// Format an angle in radians as a QASM real literal.
///
/// Uses the shortest decimal that round-trips to the same `f64`, always with
/// a decimal point.
pub fn format_angle(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

/// QASM 2.0 emitter.
struct Qasm2Emitter {
    output: String,
}

impl Qasm2Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> EmitResult<String> {
        // First pass: refuse anything without an emission rule before writing.
        for (position, gate) in circuit.gates().iter().enumerate() {
            if let Gate::Opaque(opaque) = gate {
                return Err(EmitError::UnsupportedGate {
                    gate: opaque.name.clone(),
                    position,
                });
            }
        }

        // Header
        self.writeln("OPENQASM 2.0;");
        self.writeln("include \"qelib1.inc\";");
        self.writeln("");

        // Register declarations
        let num_qubits = circuit.num_qubits();
        self.writeln(&format!("qreg q[{num_qubits}];"));
        self.writeln(&format!("creg c[{num_qubits}];"));
        self.writeln("");

        // Instructions
        for (position, gate) in circuit.gates().iter().enumerate() {
            self.emit_gate(gate, position)?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    fn emit_gate(&mut self, gate: &Gate, position: usize) -> EmitResult<()> {
        match gate {
            Gate::Measure { targets } => {
                for q in targets {
                    self.writeln(&format!("measure q[{0}] -> c[{0}];", q.0));
                }
            }

            Gate::Single { targets, .. } => {
                let name = gate.name();
                for q in targets {
                    self.writeln(&format!("{name} {};", qubit(*q)));
                }
            }

            Gate::CX { control, target } => {
                self.writeln(&format!("cx {},{};", qubit(*control), qubit(*target)));
            }

            Gate::Swap { a, b } => {
                self.writeln(&format!("swap {},{};", qubit(*a), qubit(*b)));
            }

            Gate::Rotation { angle, targets, .. } => {
                let name = gate.name();
                let angle = format_angle(angle.value());
                for q in targets {
                    self.writeln(&format!("{name}({angle}) {};", qubit(*q)));
                }
            }

            Gate::CP {
                theta,
                control,
                target,
            } => {
                self.writeln(&format!(
                    "cp({}) {},{};",
                    format_angle(*theta),
                    qubit(*control),
                    qubit(*target)
                ));
            }

            Gate::Opaque(opaque) => {
                return Err(EmitError::UnsupportedGate {
                    gate: opaque.name.clone(),
                    position,
                });
            }
        }

        Ok(())
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn qubit(q: QubitId) -> String {
    format!("q[{}]", q.0)
}

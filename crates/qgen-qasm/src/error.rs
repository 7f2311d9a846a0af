//! Error types for the QASM emitter.

use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// The circuit holds a gate with no OpenQASM 2.0 emission rule.
    #[error("Unsupported gate '{gate}' at position {position}: no OpenQASM 2.0 emission rule")]
    UnsupportedGate {
        /// Name of the gate.
        gate: String,
        /// Index of the gate in the circuit.
        position: usize,
    },
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;

//! Error types for the IR crate.

use std::fmt;

use thiserror::Error;

use crate::qubit::QubitId;

/// Errors that can occur while constructing gates and circuits.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate violates one of the construction rules.
    #[error("Invalid gate '{gate}': {reason}")]
    InvalidGate {
        /// Name of the offending gate.
        gate: String,
        /// The rule that was violated.
        reason: InvalidGateReason,
    },

    /// A circuit must have at least one qubit.
    #[error("Circuit '{0}' must have at least one qubit")]
    ZeroQubits(String),
}

impl IrError {
    pub(crate) fn invalid_gate(gate: impl Into<String>, reason: InvalidGateReason) -> Self {
        IrError::InvalidGate {
            gate: gate.into(),
            reason,
        }
    }
}

/// The construction rule a rejected gate violated.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InvalidGateReason {
    /// The gate names no target qubit.
    EmptyTargets,
    /// The gate needs a different number of targets.
    TargetCount {
        /// Number of targets the gate kind takes.
        expected: usize,
        /// Number of targets supplied.
        got: usize,
    },
    /// A rotation or controlled-phase gate was given no angle.
    MissingParams,
    /// A fixed gate was given an angle.
    UnexpectedParams,
    /// The angle was given under a name the gate kind does not accept.
    UnknownParam(String),
    /// A controlled gate was given no control qubit.
    MissingControl,
    /// An uncontrolled gate was given a control qubit.
    UnexpectedControl,
    /// The control qubit is also a target.
    ControlIsTarget(QubitId),
    /// An angle is NaN or infinite.
    NonFiniteAngle(f64),
    /// The same qubit appears twice among the targets of a two-qubit gate.
    DuplicateTarget(QubitId),
    /// A referenced qubit lies outside the circuit's register.
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },
}

impl fmt::Display for InvalidGateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTargets => write!(f, "targets must be non-empty"),
            Self::TargetCount { expected, got } => {
                write!(f, "expected {expected} target(s), got {got}")
            }
            Self::MissingParams => write!(f, "an angle parameter is required"),
            Self::UnexpectedParams => write!(f, "gate takes no parameters"),
            Self::UnknownParam(name) => {
                write!(f, "unknown parameter '{name}' (expected 'theta' or 'phi')")
            }
            Self::MissingControl => write!(f, "a control qubit is required"),
            Self::UnexpectedControl => write!(f, "gate takes no control qubit"),
            Self::ControlIsTarget(q) => write!(f, "control {q} is also a target"),
            Self::NonFiniteAngle(v) => write!(f, "angle {v} is not finite"),
            Self::DuplicateTarget(q) => write!(f, "target {q} appears more than once"),
            Self::QubitOutOfRange { qubit, num_qubits } => {
                write!(f, "{qubit} is outside the register [0, {num_qubits})")
            }
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

//! Error types for circuit generation.

use qgen_ir::IrError;
use thiserror::Error;

/// Errors that can occur while sizing or generating a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GenError {
    /// The auxiliary input is malformed or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm identifier names no known generator.
    #[error("Unknown algorithm '{0}' (expected one of: bell, grover, shor, vqe, qaoa)")]
    UnknownAlgorithm(String),

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),
}

/// Result type for generation.
pub type GenResult<T> = Result<T, GenError>;

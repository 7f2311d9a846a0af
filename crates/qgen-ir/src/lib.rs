//! qgen Circuit Intermediate Representation
//!
//! This crate provides the typed gate and circuit values that the algorithm
//! generators produce and the QASM emitter consumes.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit of the circuit's single register
//! - **Gates**: [`Gate`], one variant per gate shape, so an angle or a control
//!   qubit is present exactly when the gate kind needs it
//! - **Circuits**: [`CircuitBuilder`] validates every appended gate;
//!   [`Circuit`] is the frozen, read-only result
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qgen_ir::{CircuitBuilder, QubitId};
//!
//! let mut builder = CircuitBuilder::new("Bell", 2).unwrap();
//! builder
//!     .h(QubitId(0))
//!     .unwrap()
//!     .cx(QubitId(0), QubitId(1))
//!     .unwrap()
//!     .measure_all()
//!     .unwrap();
//!
//! let circuit = builder.finish();
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_gates(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Operands | Parameters |
//! |------|----------|------------|
//! | `h`, `x`, `y`, `z` | one or more targets | none |
//! | `rx`, `ry`, `rz` | one or more targets | `theta` or `phi` |
//! | `cx` | control, target | none |
//! | `cp` | control, target | `theta` |
//! | `swap` | two targets | none |
//! | `measure` | one or more targets | none |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, CircuitBuilder, Metadata};
pub use error::{InvalidGateReason, IrError, IrResult};
pub use gate::{Angle, Gate, GateKind, OpaqueGate, RotationAxis, SingleQubitGate};
pub use qubit::QubitId;

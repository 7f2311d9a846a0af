//! `OpenQASM` 2.0 emitter for qgen
//!
//! Lowers a [`qgen_ir::Circuit`] into `OpenQASM` 2.0 source text. Emission is
//! pure and deterministic: the same circuit always yields the same document,
//! and a circuit holding a gate without an emission rule yields an error and
//! no text at all.
//!
//! # Example
//!
//! ```rust
//! use qgen_ir::{CircuitBuilder, QubitId};
//! use qgen_qasm::emit_qasm2;
//!
//! let mut builder = CircuitBuilder::new("Bell", 2).unwrap();
//! builder.h(QubitId(0)).unwrap();
//! builder.cx(QubitId(0), QubitId(1)).unwrap();
//! builder.measure_all().unwrap();
//!
//! let qasm = emit_qasm2(&builder.finish()).unwrap();
//! assert!(qasm.starts_with("OPENQASM 2.0;\n"));
//! assert!(qasm.contains("cx q[0],q[1];"));
//! assert!(qasm.contains("measure q[1] -> c[1];"));
//! ```
//!
//! # Emission Rules
//!
//! | Gate | Statement |
//! |------|-----------|
//! | `h`, `x`, `y`, `z` | `h q[i];` per target |
//! | `rx`, `ry`, `rz` | `rx(angle) q[i];` per target |
//! | `cx` | `cx q[c],q[t];` |
//! | `cp` | `cp(theta) q[c],q[t];` |
//! | `swap` | `swap q[a],q[b];` |
//! | `measure` | `measure q[i] -> c[i];` per target |

mod emitter;
mod error;

pub use emitter::{emit_qasm2, format_angle};
pub use error::{EmitError, EmitResult};

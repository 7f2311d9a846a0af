//! Algorithm-family circuit generators for qgen
//!
//! Builds [`qgen_ir::Circuit`] values from an algorithm identifier and a small
//! set of numeric inputs.
//!
//! # Pipeline
//!
//! 1. [`determine_qubits`] picks the circuit width from the identifier and
//!    the optional item count in [`AuxData`].
//! 2. The matching generator lays out the gate sequence and descriptive
//!    metadata.
//!
//! | Algorithm | Default width | Structure |
//! |-----------|---------------|-----------|
//! | Bell | 2 (fixed) | `h`, `cx`, measure |
//! | Grover | 8 | superposition, up to 3 oracle + diffusion rounds |
//! | Shor | 16 (minimum) | control/target split, controlled layer, inverse QFT |
//! | VQE | 12 | 3 layers of `ry`, CNOT chain, `rz` |
//! | QAOA | 10 | 2 cost + mixer layers over the problem graph |
//!
//! VQE and QAOA draw their angles from the [`rand::Rng`] the caller passes, so
//! a seeded generator reproduces the same circuit.
//!
//! # Example
//!
//! ```rust
//! use qgen_algo::{AuxData, generate, rng_from_seed};
//!
//! let aux = AuxData::from_json(r#"{"num_items": 10}"#).unwrap();
//! let mut rng = rng_from_seed(Some(7));
//!
//! let circuit = generate("grover", &aux, &mut rng).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.metadata()["iterations"], 3);
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod generators;
pub mod input;
pub mod sizing;

pub use algorithm::Algorithm;
pub use config::{GeneratorConfig, MAX_LAYERS, MAX_SHOR_QUBITS};
pub use error::{GenError, GenResult};
pub use generators::{generate, generate_with_config, rng_from_seed};
pub use input::{AuxData, Edge};
pub use sizing::{FALLBACK_QUBITS, MIN_QUBITS, determine_qubits, qubits_for_items};

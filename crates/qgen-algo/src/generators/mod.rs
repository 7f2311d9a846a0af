//! Algorithm generators and name-based dispatch.

pub mod bell;
pub mod grover;
pub mod qaoa;
pub mod shor;
pub mod vqe;

pub use bell::bell_circuit;
pub use grover::{applied_iterations, grover_circuit, optimal_iterations};
pub use qaoa::{problem_edges, qaoa_circuit};
pub use shor::shor_circuit;
pub use vqe::vqe_circuit;

use qgen_ir::Circuit;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::config::GeneratorConfig;
use crate::error::GenResult;
use crate::input::AuxData;

/// Generate the circuit for an algorithm identifier with the default
/// configuration.
pub fn generate<R: Rng>(algorithm: &str, aux: &AuxData, rng: &mut R) -> GenResult<Circuit> {
    generate_with_config(algorithm, aux, &GeneratorConfig::default(), rng)
}

/// Generate the circuit for an algorithm identifier.
///
/// Fails with [`GenError::UnknownAlgorithm`](crate::GenError::UnknownAlgorithm)
/// for an unrecognized identifier.
pub fn generate_with_config<R: Rng>(
    algorithm: &str,
    aux: &AuxData,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenResult<Circuit> {
    algorithm.parse::<Algorithm>()?.generate(aux, config, rng)
}

impl Algorithm {
    /// Size and build this algorithm's circuit.
    pub fn generate<R: Rng>(
        self,
        aux: &AuxData,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> GenResult<Circuit> {
        config.validate()?;
        let num_qubits = self.qubits_for(aux)?;
        debug!(algorithm = %self, num_qubits, "generating circuit");

        match self {
            Algorithm::Bell => bell_circuit(),
            Algorithm::Grover => grover_circuit(num_qubits, config),
            Algorithm::Shor => shor_circuit(num_qubits, config),
            Algorithm::Vqe => vqe_circuit(num_qubits, config, rng),
            Algorithm::Qaoa => qaoa_circuit(num_qubits, aux.edges.as_deref(), config, rng),
        }
    }
}

/// Random source for the variational generators: seeded when `seed` is
/// given, otherwise fresh from the operating system.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

//! Qubit sizing policy.

use crate::algorithm::Algorithm;
use crate::input::AuxData;
use crate::error::{GenError, GenResult};

/// Smallest width the policy ever returns for an item count.
pub const MIN_QUBITS: u32 = 2;

/// Width used for identifiers that name no known algorithm.
pub const FALLBACK_QUBITS: u32 = 4;

/// Decide the circuit width for an algorithm identifier and its input.
///
/// With an item count `n` the width is `max(2, ceil(log2(n)))`; otherwise the
/// algorithm's default width, or [`FALLBACK_QUBITS`] for an unrecognized
/// identifier.
pub fn determine_qubits(algorithm: &str, aux: &AuxData) -> GenResult<u32> {
    match aux.num_items {
        Some(n) => qubits_for_items(n),
        None => Ok(algorithm
            .parse::<Algorithm>()
            .map_or(FALLBACK_QUBITS, Algorithm::default_qubits)),
    }
}

/// Width able to index `num_items` distinct basis states, floored at
/// [`MIN_QUBITS`].
pub fn qubits_for_items(num_items: i64) -> GenResult<u32> {
    let n = u64::try_from(num_items)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            GenError::InvalidInput(format!("num_items must be positive, got {num_items}"))
        })?;

    // ceil(log2(n)) for n >= 1, exact in integer arithmetic.
    let bits = u64::BITS - (n - 1).leading_zeros();
    Ok(bits.max(MIN_QUBITS))
}

impl Algorithm {
    /// Width of this algorithm's circuit for the given input, before any
    /// generator-specific adjustment.
    pub fn qubits_for(self, aux: &AuxData) -> GenResult<u32> {
        match aux.num_items {
            Some(n) => qubits_for_items(n),
            None => Ok(self.default_qubits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let none = AuxData::default();
        assert_eq!(determine_qubits("bell", &none), Ok(2));
        assert_eq!(determine_qubits("grover", &none), Ok(8));
        assert_eq!(determine_qubits("shor", &none), Ok(16));
        assert_eq!(determine_qubits("VQE", &none), Ok(12));
        assert_eq!(determine_qubits("qaoa", &none), Ok(10));
        assert_eq!(determine_qubits("teleport", &none), Ok(4));
    }

    #[test]
    fn test_item_count() {
        let aux = AuxData::default().with_num_items(10);
        assert_eq!(determine_qubits("grover", &aux), Ok(4));
        // An item count overrides the default even for unknown identifiers.
        assert_eq!(determine_qubits("teleport", &aux), Ok(4));
    }

    #[test]
    fn test_item_count_boundaries() {
        assert_eq!(qubits_for_items(1), Ok(2));
        assert_eq!(qubits_for_items(2), Ok(2));
        assert_eq!(qubits_for_items(4), Ok(2));
        assert_eq!(qubits_for_items(5), Ok(3));
        assert_eq!(qubits_for_items(8), Ok(3));
        assert_eq!(qubits_for_items(9), Ok(4));
        assert_eq!(qubits_for_items(1 << 20), Ok(20));
        assert_eq!(qubits_for_items((1 << 20) + 1), Ok(21));
        assert_eq!(qubits_for_items(i64::MAX), Ok(63));
    }

    #[test]
    fn test_non_positive_item_count_is_rejected() {
        for n in [0, -1, i64::MIN] {
            let err = qubits_for_items(n).unwrap_err();
            assert!(matches!(err, GenError::InvalidInput(ref m) if m.contains(&n.to_string())));
        }
    }

    #[test]
    fn test_algorithm_qubits_for() {
        assert_eq!(Algorithm::Qaoa.qubits_for(&AuxData::default()), Ok(10));
        assert_eq!(
            Algorithm::Qaoa.qubits_for(&AuxData::default().with_num_items(100)),
            Ok(7)
        );
    }
}

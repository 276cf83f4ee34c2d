//! Two-pointer search over a non-decreasing sequence.
//!
//! The scan starts with one index at each end. A sum below the target moves the
//! left index inward, a sum above it moves the right index inward. Because the
//! sequence is sorted, neither move can skip a valid pair, so at most `len - 1`
//! sums are compared and only the two indices are kept as state.
//!
//! When more than one pair reaches the target, the first pair met while moving
//! inward from both ends is returned.

use crate::domain::model::{Operand, PairPositions, SearchStats, Solution};
use crate::utils::error::{PairSumError, Result};
use crate::utils::validation::{
    validate_finite_elements, validate_finite_target, validate_min_len, validate_non_decreasing,
};
use std::cmp::Ordering;

/// Finds two elements of `sequence` summing to `target` and returns their 1-based positions.
///
/// The sequence must hold at least two finite values in non-decreasing order and
/// the target must be finite; otherwise [`PairSumError::InvalidInput`] is
/// returned. [`PairSumError::NotFound`] means no pair reaches the target.
pub fn find_pair<T: Operand>(sequence: &[T], target: T) -> Result<PairPositions> {
    find_pair_with_stats(sequence, target).0
}

/// Same as [`find_pair`], also reporting how many sums the scan compared.
pub fn find_pair_with_stats<T: Operand>(
    sequence: &[T],
    target: T,
) -> (Result<PairPositions>, SearchStats) {
    let mut stats = SearchStats::default();

    if let Err(e) = validate_input(sequence, target) {
        tracing::debug!("Rejected input of length {}: {}", sequence.len(), e);
        return (Err(e), stats);
    }

    tracing::debug!("Scanning {} elements for target {}", sequence.len(), target);

    let mut left = 0;
    let mut right = sequence.len() - 1;

    while left < right {
        stats.probes += 1;
        match sequence[left].cmp_sum(sequence[right], target) {
            Ordering::Equal => {
                let positions = PairPositions::from_indices(left, right);
                tracing::debug!(
                    "Found pair at positions {:?} after {} probes",
                    positions.as_array(),
                    stats.probes
                );
                return (Ok(positions), stats);
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    tracing::debug!("No pair sums to {} after {} probes", target, stats.probes);
    (
        Err(PairSumError::NotFound {
            target: target.to_string(),
        }),
        stats,
    )
}

/// Runs [`find_pair`] and collects the two values it points at.
pub fn find_solution<T: Operand>(sequence: &[T], target: T) -> Result<Solution<T>> {
    let positions = find_pair(sequence, target)?;
    Ok(Solution {
        positions,
        values: [
            sequence[positions.first - 1],
            sequence[positions.second - 1],
        ],
        target,
    })
}

fn validate_input<T: Operand>(sequence: &[T], target: T) -> Result<()> {
    validate_min_len(sequence, 2)?;
    validate_finite_target(target)?;
    validate_finite_elements(sequence)?;
    validate_non_decreasing(sequence)
}

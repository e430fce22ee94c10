//! Cross-checking of distance vectors produced by different engines.

use crate::{Error, Result};

/// Checks that two distance vectors are identical
///
/// Reports a length difference first, then the first vertex whose distances
/// disagree.
pub fn verify_distances(left: &[u64], right: &[u64]) -> Result<()> {
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    match left.iter().zip(right).position(|(a, b)| a != b) {
        Some(vertex) => Err(Error::DistanceMismatch {
            vertex,
            left: left[vertex],
            right: right[vertex],
        }),
        None => Ok(()),
    }
}

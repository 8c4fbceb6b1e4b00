use crate::error::Error;
use crate::types::Distance;

/// Sentinel stored in distance cells with no known path.
pub const INFINITY: Distance = Distance::MAX;

pub fn is_finite(d: Distance) -> bool {
    d != INFINITY
}

/// Infinity-aware addition used by the relaxation step.
///
/// Returns `Ok(None)` when either operand is infinite, so the sentinel is
/// never summed.
///
/// # Errors
/// Returns `Error::WeightOverflow` when both operands are finite but the sum
/// does not fit below the sentinel.
pub fn add_distances(a: Distance, b: Distance) -> Result<Option<Distance>, Error> {
    if !is_finite(a) || !is_finite(b) {
        return Ok(None);
    }

    match a.checked_add(b) {
        // A finite sum must never collide with the sentinel itself.
        Some(sum) if sum != INFINITY => Ok(Some(sum)),
        _ => Err(Error::WeightOverflow),
    }
}

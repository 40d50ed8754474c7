use crate::model::structure::Chain;

/// Squared upper bound on the distance between consecutive alpha carbons
/// (4.0 Å). Anything longer is treated as a chain break.
pub const MAX_CA_CA_DISTANCE_SQ: f64 = 16.0;

/// Checks that `[start, end)` of `chain` contains no chain break.
///
/// Every position `p` in the range is compared with its successor `p + 1`,
/// so the last residue of the range is also checked against the residue
/// that follows it. A position whose successor is missing makes the range
/// non-intact. An empty range is intact.
pub fn is_intact(chain: &Chain, start: usize, end: usize) -> bool {
    let residues = &chain.residues;
    (start..end).all(|p| match (residues.get(p), residues.get(p + 1)) {
        (Some(a), Some(b)) => a.distance_squared(b) <= MAX_CA_CA_DISTANCE_SQ,
        _ => false,
    })
}

/// Allowed loop lengths, counted as residues strictly between the anchors.
///
/// A bound of `0` leaves that side open, so the default range accepts every
/// separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// `true` once `separation` is past a configured maximum.
    #[inline]
    pub fn exceeds_max(&self, separation: usize) -> bool {
        self.max != 0 && separation > self.max
    }

    #[inline]
    pub fn reaches_min(&self, separation: usize) -> bool {
        separation >= self.min
    }
}

/// Settings for a scan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Loop-length window applied to every candidate.
    pub lengths: LengthRange,
}

impl ScanConfig {
    pub fn with_lengths(min: usize, max: usize) -> Self {
        Self {
            lengths: LengthRange::new(min, max),
        }
    }
}

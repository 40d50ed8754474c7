use super::error::Error;
use super::stats::ReferenceStats;
use crate::model::matrix::Matrix3;

/// An inclusive distance interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Per-cell acceptance bands for the N-anchor × C-anchor distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    min: Matrix3,
    max: Matrix3,
}

impl ThresholdTable {
    /// Builds a table from explicit minimum and maximum matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedBand`] for the first cell (row-major) whose
    /// minimum exceeds its maximum.
    pub fn new(min: Matrix3, max: Matrix3) -> Result<Self, Error> {
        let table = Self { min, max };
        if let Some((row, col)) = table.inverted_cells().next() {
            return Err(Error::InvertedBand {
                row,
                col,
                min: min[(row, col)],
                max: max[(row, col)],
            });
        }
        Ok(table)
    }

    /// `mean ± sd_mult·sd` for every cell.
    pub fn from_stats(stats: &ReferenceStats) -> Self {
        let k = stats.sd_mult;
        Self {
            min: Matrix3::from_fn(|i, j| stats.means[(i, j)] - k * stats.sds[(i, j)]),
            max: Matrix3::from_fn(|i, j| stats.means[(i, j)] + k * stats.sds[(i, j)]),
        }
    }

    /// Overwrites cells in row-major order with the given bands.
    ///
    /// Cells beyond the last supplied band keep their current values; bands
    /// past the ninth are ignored. No validation is performed here, callers
    /// decide how to treat inverted bands via [`inverted_cells`](Self::inverted_cells).
    pub fn with_overrides(mut self, bands: impl IntoIterator<Item = Band>) -> Self {
        for ((row, col), band) in Matrix3::positions().zip(bands) {
            self.min = self.min.with(row, col, band.min);
            self.max = self.max.with(row, col, band.max);
        }
        self
    }

    #[inline]
    pub fn band(&self, row: usize, col: usize) -> Band {
        Band::new(self.min[(row, col)], self.max[(row, col)])
    }

    #[inline]
    pub fn accepts(&self, row: usize, col: usize, distance: f64) -> bool {
        self.band(row, col).contains(distance)
    }

    /// All nine bands in row-major order.
    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        Matrix3::positions().map(|(row, col)| self.band(row, col))
    }

    pub fn inverted_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        Matrix3::positions().filter(|&(row, col)| self.band(row, col).is_inverted())
    }

    #[inline]
    pub fn min(&self) -> &Matrix3 {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Matrix3 {
        &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn stats() -> ReferenceStats {
        ReferenceStats::new(
            Matrix3::from_fn(|i, j| 5.0 + (i * 3 + j) as f64),
            Matrix3::from_fn(|_, _| 0.5),
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn from_stats_applies_multiplier() {
        let table = ThresholdTable::from_stats(&stats());
        let band = table.band(1, 2);
        assert!(approx_eq(band.min, 10.0 - 1.0, 1e-12));
        assert!(approx_eq(band.max, 10.0 + 1.0, 1e-12));
        assert_eq!(table.inverted_cells().count(), 0);
    }

    #[test]
    fn zero_multiplier_collapses_bands_to_means() {
        let stats = stats().with_sd_mult(0.0).unwrap();
        let table = ThresholdTable::from_stats(&stats);
        for (band, mean) in table.bands().zip(stats.means.iter()) {
            assert_eq!(band.min, mean);
            assert_eq!(band.max, mean);
            assert!(band.contains(mean));
        }
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let band = Band::new(4.0, 6.0);
        assert!(band.contains(4.0));
        assert!(band.contains(6.0));
        assert!(!band.contains(3.999));
        assert!(!band.contains(6.001));
    }

    #[test]
    fn partial_overrides_keep_trailing_cells() {
        let base = ThresholdTable::from_stats(&stats());
        let table = base
            .clone()
            .with_overrides([Band::new(1.0, 2.0), Band::new(3.0, 4.0)]);

        assert_eq!(table.band(0, 0), Band::new(1.0, 2.0));
        assert_eq!(table.band(0, 1), Band::new(3.0, 4.0));
        for (row, col) in Matrix3::positions().skip(2) {
            assert_eq!(table.band(row, col), base.band(row, col));
        }
    }

    #[test]
    fn overrides_beyond_nine_are_ignored() {
        let bands: Vec<Band> = (0..12).map(|n| Band::new(n as f64, n as f64 + 0.5)).collect();
        let table = ThresholdTable::from_stats(&stats()).with_overrides(bands);
        assert_eq!(table.band(2, 2), Band::new(8.0, 8.5));
    }

    #[test]
    fn new_rejects_inverted_band() {
        let min = Matrix3::from_fn(|_, _| 1.0).with(2, 1, 9.0);
        let max = Matrix3::from_fn(|_, _| 5.0);
        let err = ThresholdTable::new(min, max).unwrap_err();
        assert!(matches!(err, Error::InvertedBand { row: 2, col: 1, .. }));
    }

    #[test]
    fn inverted_cells_reports_every_offender() {
        let table = ThresholdTable::from_stats(&stats())
            .with_overrides([Band::new(2.0, 1.0), Band::new(0.0, 1.0), Band::new(7.0, 3.0)]);
        let cells: Vec<_> = table.inverted_cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 2)]);
    }
}

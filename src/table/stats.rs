use super::error::Error;
use crate::model::matrix::Matrix3;
use serde::Deserialize;

const DEFAULT_DISTANCES_TOML: &str = include_str!("../../resources/default.distances.toml");

/// Mean and standard deviation of each takeoff distance, plus the multiplier
/// that turns them into acceptance bands.
///
/// The built-in values describe the CDR-H3 takeoff region (H92–H94 against
/// H103–H105). They are constructed on demand with [`ReferenceStats::builtin`]
/// and handed to [`ThresholdTable::from_stats`](super::ThresholdTable::from_stats)
/// explicitly; nothing is cached globally.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStats {
    pub means: Matrix3,
    pub sds: Matrix3,
    pub sd_mult: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StatsFile {
    means: [[f64; 3]; 3],
    sds: [[f64; 3]; 3],
    #[serde(default = "default_sd_mult")]
    sd_mult: f64,
}

fn default_sd_mult() -> f64 {
    2.0
}

impl ReferenceStats {
    /// Creates statistics after checking that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatistic`] for a non-finite mean or a negative
    /// or non-finite standard deviation, and [`Error::InvalidMultiplier`] for a
    /// bad multiplier.
    pub fn new(means: Matrix3, sds: Matrix3, sd_mult: f64) -> Result<Self, Error> {
        for (row, col) in Matrix3::positions() {
            let mean = means[(row, col)];
            if !mean.is_finite() {
                return Err(Error::InvalidStatistic {
                    field: "means",
                    row,
                    col,
                    value: mean,
                });
            }
            let sd = sds[(row, col)];
            if !sd.is_finite() || sd < 0.0 {
                return Err(Error::InvalidStatistic {
                    field: "sds",
                    row,
                    col,
                    value: sd,
                });
            }
        }
        check_multiplier(sd_mult)?;

        Ok(Self {
            means,
            sds,
            sd_mult,
        })
    }

    /// The embedded CDR-H3 takeoff statistics.
    pub fn builtin() -> Result<Self, Error> {
        Self::from_toml_str(DEFAULT_DISTANCES_TOML)
    }

    /// Parses statistics from TOML with `means`, `sds` (3×3 arrays) and an
    /// optional `sd_mult` (default 2.0).
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let file: StatsFile = toml::from_str(toml)?;
        Self::new(file.means.into(), file.sds.into(), file.sd_mult)
    }

    /// Replaces the multiplier, keeping means and deviations.
    pub fn with_sd_mult(self, sd_mult: f64) -> Result<Self, Error> {
        check_multiplier(sd_mult)?;
        Ok(Self { sd_mult, ..self })
    }
}

fn check_multiplier(sd_mult: f64) -> Result<(), Error> {
    if sd_mult.is_finite() && sd_mult >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMultiplier(sd_mult))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_statistics_parse() {
        let stats = ReferenceStats::builtin().expect("embedded statistics are valid");
        assert_eq!(stats.sd_mult, 2.0);
        assert!(stats.means.iter().all(|m| m > 0.0));
        assert!(stats.sds.iter().all(|s| s > 0.0));
    }

    #[test]
    fn sd_mult_defaults_when_omitted() {
        let toml = r#"
            means = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
            sds = [[0.1, 0.1, 0.1], [0.2, 0.2, 0.2], [0.3, 0.3, 0.3]]
        "#;
        let stats = ReferenceStats::from_toml_str(toml).unwrap();
        assert_eq!(stats.sd_mult, 2.0);
        assert_eq!(stats.means[(1, 2)], 6.0);
        assert_eq!(stats.sds[(2, 0)], 0.3);
    }

    #[test]
    fn rejects_negative_standard_deviation() {
        let toml = r#"
            means = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
            sds = [[0.1, 0.1, 0.1], [0.2, -0.2, 0.2], [0.3, 0.3, 0.3]]
        "#;
        let err = ReferenceStats::from_toml_str(toml).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidStatistic {
                field: "sds",
                row: 1,
                col: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_short_matrix() {
        let toml = r#"
            means = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]
            sds = [[0.1, 0.1, 0.1], [0.2, 0.2, 0.2], [0.3, 0.3, 0.3]]
        "#;
        assert!(matches!(
            ReferenceStats::from_toml_str(toml),
            Err(Error::StatsParse(_))
        ));
    }

    #[test]
    fn with_sd_mult_validates() {
        let stats = ReferenceStats::builtin().unwrap();
        let wider = stats.clone().with_sd_mult(3.5).unwrap();
        assert_eq!(wider.sd_mult, 3.5);
        assert_eq!(wider.means, stats.means);

        assert!(matches!(
            stats.clone().with_sd_mult(-1.0),
            Err(Error::InvalidMultiplier(_))
        ));
        assert!(matches!(
            stats.with_sd_mult(f64::NAN),
            Err(Error::InvalidMultiplier(_))
        ));
    }
}

//! Acceptance bands for the 3×3 takeoff distance matrix.
//!
//! A [`ThresholdTable`] holds one inclusive `[min, max]` band per cell. It is
//! normally derived from [`ReferenceStats`] (mean ± k·sd per cell) and may
//! then be overridden, cell by cell, from a distance table file (see
//! [`crate::io::read_table`]). Once built it is only ever read.

mod error;
mod stats;
mod threshold;

pub use error::Error;
pub use stats::ReferenceStats;
pub use threshold::{Band, ThresholdTable};

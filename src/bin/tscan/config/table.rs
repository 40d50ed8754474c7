use std::fs;

use anyhow::{Context, Result};

use takeoff_scan::io::{ParseMode, load_table};
use takeoff_scan::{ReferenceStats, ThresholdTable};

use crate::cli::TableOptions;

fn parse_mode(opts: &TableOptions) -> ParseMode {
    if opts.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

/// Reference statistics, then the multiplier override, then the distance
/// table file, in that order.
pub fn build_threshold_table(opts: &TableOptions) -> Result<ThresholdTable> {
    let mut stats = match &opts.stats {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read statistics file: {}", path.display()))?;
            ReferenceStats::from_toml_str(&text)
                .with_context(|| format!("Invalid statistics file: {}", path.display()))?
        }
        None => ReferenceStats::builtin().context("Built-in reference statistics are invalid")?,
    };

    if let Some(k) = opts.sd_mult {
        stats = stats
            .with_sd_mult(k)
            .context("Invalid standard deviation multiplier")?;
    }

    let table = ThresholdTable::from_stats(&stats);

    match &opts.table {
        Some(path) => load_table(path, table, parse_mode(opts))
            .with_context(|| format!("Failed to load distance table: {}", path.display())),
        None => Ok(table),
    }
}

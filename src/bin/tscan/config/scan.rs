use takeoff_scan::ScanConfig;

use crate::cli::LengthOptions;

pub fn build_scan_config(opts: &LengthOptions) -> ScanConfig {
    if opts.max != 0 && opts.min > opts.max {
        log::warn!(
            "minimum loop length {} exceeds maximum {}; no windows can match",
            opts.min,
            opts.max
        );
    }
    ScanConfig::with_lengths(opts.min, opts.max)
}

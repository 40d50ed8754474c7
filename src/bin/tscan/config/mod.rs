mod scan;
mod table;

pub use scan::build_scan_config;
pub use table::build_threshold_table;

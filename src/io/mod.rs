//! File I/O around the scanning core.
//!
//! - [`StructureReader`] turns PDB text into per-chain residue lists (one
//!   representative atom per residue).
//! - [`read_table`], [`load_table`] and [`write_table`] handle the plain-text
//!   distance table used to override the default acceptance bands.
//! - [`DbWriter`] writes the loop database: an optional header followed by
//!   one line per accepted window.

use std::fmt;
use std::path::Path;

pub mod error;

mod db;
mod pdb;
mod table;

pub use db::writer::DbWriter;
pub use error::Error;
pub use pdb::reader::StructureReader;
pub use table::reader::{load_table, read_table};
pub use table::writer::write_table;

/// How strictly a distance table file is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed numbers read as `0.0`, a missing file keeps the defaults,
    /// and problems are only logged.
    #[default]
    Lenient,
    /// Any malformed, missing or inconsistent input is an error.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DistanceTable,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::DistanceTable => write!(f, "distance table"),
        }
    }
}

/// Derives a structure identifier from a file name.
///
/// Directory and extension are dropped and the result is lower-cased. The
/// `pdb` prefix used by wwPDB mirror files is removed when a PDB code remains
/// (four alphanumerics, the first a digit), so `pdb1abc.ent` and `1ABC.pdb`
/// both become `1abc`.
pub fn structure_id_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match stem.strip_prefix("pdb") {
        Some(code) if is_pdb_code(code) => code.to_string(),
        _ => stem,
    }
}

fn is_pdb_code(code: &str) -> bool {
    code.len() == 4
        && code.starts_with(|c: char| c.is_ascii_digit())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_mirror_file_name() {
        assert_eq!(structure_id_from_path(Path::new("/data/pdb/pdb1abc.ent")), "1abc");
    }

    #[test]
    fn id_from_plain_file_name() {
        assert_eq!(structure_id_from_path(Path::new("7XYZ.pdb")), "7xyz");
        assert_eq!(structure_id_from_path(Path::new("dir/model_12")), "model_12");
    }

    #[test]
    fn pdb_prefix_kept_when_not_a_code() {
        assert_eq!(structure_id_from_path(Path::new("pdbfile.txt")), "pdbfile");
        assert_eq!(structure_id_from_path(Path::new("pdb12.pdb")), "pdb12");
        assert_eq!(structure_id_from_path(Path::new("pdb_1ab.pdb")), "pdb_1ab");
        assert_eq!(structure_id_from_path(Path::new("pdbfile.ent")), "pdbfile");
    }

    #[test]
    fn pdb_code_shape() {
        assert!(is_pdb_code("1abc"));
        assert!(is_pdb_code("9zz9"));
        assert!(!is_pdb_code("file"));
        assert!(!is_pdb_code("1ab"));
        assert!(!is_pdb_code("1a-c"));
    }

    #[test]
    fn format_display_name() {
        assert_eq!(Format::DistanceTable.to_string(), "distance table");
    }
}

//! A pure Rust library for building loop databases from protein structures.
//! It scans every chain for pairs of three-residue anchors whose CA–CA
//! distances match the geometry of a reference takeoff region, such as the
//! base of an antibody CDR-H3 loop, and reports each match with its nine
//! distances.
//!
//! # Features
//!
//! - **Window enumeration**: Every N-anchor/C-anchor pair within a
//!   configurable loop-length range, in chain order
//! - **Chain-break detection**: Windows spanning a CA–CA gap over 4 Å are
//!   never reported
//! - **Threshold tables**: Acceptance bands from reference means and
//!   standard deviations, optionally overridden from a plain-text file
//! - **Streaming I/O**: PDB input, loop-database output and distance-table
//!   read/write
//!
//! # Quick Start
//!
//! Build a [`ThresholdTable`], wrap it in a [`Scanner`] together with a
//! [`ScanConfig`], and iterate the matches of a [`Structure`]:
//!
//! ```
//! use takeoff_scan::{
//!     Chain, Matrix3, Residue, ResidueId, ScanConfig, Scanner, Structure, ThresholdTable,
//! };
//!
//! // Eight CA atoms on a straight line, 3.8 Å apart.
//! let residues = (0..8)
//!     .map(|i| Residue::new(ResidueId::new("H", 90 + i, None), [3.8 * i as f64, 0.0, 0.0]))
//!     .collect();
//! let structure = Structure {
//!     id: "line".to_string(),
//!     chains: vec![Chain::new("H", residues)],
//! };
//!
//! // Accept any distance between 5 and 25 Å.
//! let table = ThresholdTable::new(
//!     Matrix3::from_fn(|_, _| 5.0),
//!     Matrix3::from_fn(|_, _| 25.0),
//! )?;
//! let config = ScanConfig::default();
//! let scanner = Scanner::new(&table, &config);
//!
//! let matches: Vec<_> = scanner.scan_structure(&structure).collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].start.to_string(), "H90");
//! assert_eq!(matches[0].end.to_string(), "H96");
//! assert_eq!(matches[0].separation, 1);
//! assert!(table.band(0, 0).contains(matches[0].distances[(0, 0)]));
//! # Ok::<(), takeoff_scan::TableError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: Window enumeration, integrity check and distance evaluation
//! - [`table`]: Reference statistics and acceptance bands
//! - [`io`]: PDB reader, loop-database writer, distance-table read/write
//!
//! # Data Types
//!
//! - [`Structure`]: Chains of one structure, in file order
//! - [`Chain`]: Residues of one chain, N- to C-terminus
//! - [`Residue`]: Residue identifier plus representative atom position
//! - [`ResidueId`]: Chain label, sequence number and insertion code
//! - [`Matrix3`]: 3×3 distance or bound matrix, row-major
//! - [`MatchRecord`]: One accepted window

mod model;

pub mod io;
pub mod scan;
pub mod table;

pub use model::matrix::Matrix3;
pub use model::residue::{Residue, ResidueId};
pub use model::structure::{Chain, Structure};

pub use scan::{LengthRange, MatchRecord, ScanConfig, Scanner};
pub use table::{Band, ReferenceStats, ThresholdTable};

pub use io::Error as IoError;
pub use table::Error as TableError;

//! Core data structures for backbone scanning.
//!
//! - [`residue`] – Residue identifiers and single-atom residues.
//! - [`structure`] – Chains of residues and whole structures.
//! - [`matrix`] – The fixed-size 3×3 matrix used for distances and bands.
//!
//! Every residue carries exactly one representative position (normally its
//! alpha carbon). Chains own their residues in provider order; the scanner
//! only ever walks them by index.

pub mod matrix;
pub mod residue;
pub mod structure;

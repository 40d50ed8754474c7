//! The takeoff-region scanning engine.
//!
//! Scanning a chain runs three stages per candidate:
//!
//! 1. [`Windows`] enumerates every N-anchor/C-anchor pair within the
//!    configured loop-length range.
//! 2. [`is_intact`] drops pairs whose span crosses a chain break.
//! 3. [`evaluate`] computes the 3×3 CA distance matrix and accepts it only if
//!    every cell falls inside its [`ThresholdTable`] band.
//!
//! Accepted windows come out as [`MatchRecord`]s, lazily and in chain order.
//! Nothing is buffered between candidates, so a caller can stream records
//! straight to an output sink.

mod config;
mod evaluate;
mod integrity;
mod window;

pub use config::{LengthRange, ScanConfig};
pub use evaluate::{distance_matrix, evaluate};
pub use integrity::{MAX_CA_CA_DISTANCE_SQ, is_intact};
pub use window::{ANCHOR_LEN, Window, Windows};

use crate::model::matrix::Matrix3;
use crate::model::residue::ResidueId;
use crate::model::structure::{Chain, Structure};
use crate::table::ThresholdTable;

/// One accepted takeoff window.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord<'a> {
    pub structure_id: &'a str,
    /// First residue of the N-terminal anchor.
    pub start: &'a ResidueId,
    /// Last residue of the C-terminal anchor.
    pub end: &'a ResidueId,
    /// Residues strictly between the two anchors.
    pub separation: usize,
    pub distances: Matrix3,
}

/// Runs the scan for a fixed threshold table and configuration.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    table: &'a ThresholdTable,
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(table: &'a ThresholdTable, config: &'a ScanConfig) -> Self {
        Self { table, config }
    }

    /// Matches within a single chain.
    pub fn scan_chain<'s>(
        &'s self,
        structure_id: &'s str,
        chain: &'s Chain,
    ) -> impl Iterator<Item = MatchRecord<'s>> + 's {
        let table = self.table;
        Windows::new(chain, self.config.lengths).filter_map(move |window| {
            let n_anchor = window.n_anchor(chain)?;
            let c_anchor = window.c_anchor(chain)?;
            let distances = evaluate(n_anchor, c_anchor, table)?;
            Some(MatchRecord {
                structure_id,
                start: &n_anchor[0].id,
                end: &c_anchor[ANCHOR_LEN - 1].id,
                separation: window.separation(),
                distances,
            })
        })
    }

    /// Matches across every chain of a structure, chain by chain.
    pub fn scan_structure<'s>(
        &'s self,
        structure: &'s Structure,
    ) -> impl Iterator<Item = MatchRecord<'s>> + 's {
        structure
            .chains
            .iter()
            .flat_map(move |chain| self.scan_chain(&structure.id, chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::residue::Residue;
    use crate::table::Band;

    const SPACING: f64 = 3.8;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn straight_chain(id: &str, n: usize) -> Chain {
        let residues = (0..n)
            .map(|i| {
                Residue::new(
                    ResidueId::new(id, i as i32 + 1, None),
                    [i as f64 * SPACING, 0.0, 0.0],
                )
            })
            .collect();
        Chain::new(id, residues)
    }

    /// Distances of a separation-`s` window on a straight line, with a
    /// ±0.1 Å band around each.
    fn line_table(s: usize) -> ThresholdTable {
        let gap = (s + 1) as f64;
        let bands = Matrix3::positions().map(|(i, j)| {
            let d = (gap + (2 - i) as f64 + j as f64) * SPACING;
            Band::new(d - 0.1, d + 0.1)
        });
        ThresholdTable::new(Matrix3::default(), Matrix3::from_fn(|_, _| 1e9))
            .unwrap()
            .with_overrides(bands)
    }

    fn open_table() -> ThresholdTable {
        ThresholdTable::new(Matrix3::default(), Matrix3::from_fn(|_, _| 1e9)).unwrap()
    }

    #[test]
    fn eight_residue_line_gives_one_match() {
        let structure = Structure {
            id: "line".into(),
            chains: vec![straight_chain("A", 8)],
        };
        let table = line_table(1);
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);

        let records: Vec<_> = scanner.scan_structure(&structure).collect();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.structure_id, "line");
        assert_eq!(record.start.to_string(), "A1");
        assert_eq!(record.end.to_string(), "A7");
        assert_eq!(record.separation, 1);

        let expected = [
            [4.0, 5.0, 6.0],
            [3.0, 4.0, 5.0],
            [2.0, 3.0, 4.0],
        ];
        for (i, j) in Matrix3::positions() {
            let want = expected[i][j] * SPACING;
            assert!(
                approx_eq(record.distances[(i, j)], want, 5e-4),
                "cell ({i},{j}): {} vs {want}",
                record.distances[(i, j)]
            );
        }
    }

    #[test]
    fn nine_residue_line_gives_two_shortest_loops() {
        let chain = straight_chain("A", 9);
        let table = line_table(1);
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);

        let spans: Vec<(String, String, usize)> = scanner
            .scan_chain("line", &chain)
            .map(|r| (r.start.to_string(), r.end.to_string(), r.separation))
            .collect();
        assert_eq!(
            spans,
            vec![
                ("A1".to_string(), "A7".to_string(), 1),
                ("A2".to_string(), "A8".to_string(), 1),
            ]
        );
    }

    #[test]
    fn every_accepted_distance_lies_in_its_band() {
        let chain = straight_chain("A", 25);
        let table = line_table(3);
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);

        let records: Vec<_> = scanner.scan_chain("x", &chain).collect();
        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.separation, 3);
            for (i, j) in Matrix3::positions() {
                assert!(table.band(i, j).contains(record.distances[(i, j)]));
            }
        }
    }

    #[test]
    fn separation_bound_controls_reporting() {
        let chain = straight_chain("A", 20);
        let table = line_table(4);

        let count = |max: usize| {
            let config = ScanConfig::with_lengths(0, max);
            Scanner::new(&table, &config).scan_chain("x", &chain).count()
        };

        assert_eq!(count(3), 0);
        assert!(count(4) > 0);
        assert_eq!(count(4), count(0));
    }

    #[test]
    fn gap_removes_spanning_windows_only() {
        let mut chain = straight_chain("A", 20);
        for residue in &mut chain.residues[5..] {
            residue.position[0] += 10.0;
        }
        let table = open_table();
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);

        let records: Vec<_> = scanner.scan_chain("gap", &chain).collect();
        assert!(!records.is_empty());
        for record in &records {
            // Residues 1..=5 sit before the gap; nothing fits on that side,
            // so every match must lie wholly after it.
            assert!(record.start.seq_num >= 6, "match {:?} spans the gap", record);
        }

        let unbroken = straight_chain("A", 15);
        let after_gap = scanner.scan_chain("gap", &unbroken).count();
        assert_eq!(records.len(), after_gap);
    }

    #[test]
    fn chains_are_scanned_independently() {
        // Two 4-residue chains laid end to end would make one 8-residue
        // window if the boundary were ignored.
        let first = straight_chain("H", 4);
        let mut second = straight_chain("L", 4);
        for (k, residue) in second.residues.iter_mut().enumerate() {
            residue.position[0] = (k + 4) as f64 * SPACING;
        }
        let structure = Structure {
            id: "two".into(),
            chains: vec![first, second],
        };

        let table = open_table();
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);
        assert_eq!(scanner.scan_structure(&structure).count(), 0);
    }

    #[test]
    fn records_follow_chain_order() {
        let structure = Structure {
            id: "multi".into(),
            chains: vec![straight_chain("H", 8), straight_chain("L", 8)],
        };
        let table = line_table(1);
        let config = ScanConfig::default();
        let scanner = Scanner::new(&table, &config);

        let starts: Vec<String> = scanner
            .scan_structure(&structure)
            .map(|r| r.start.to_string())
            .collect();
        assert_eq!(starts, vec!["H1", "L1"]);
    }
}

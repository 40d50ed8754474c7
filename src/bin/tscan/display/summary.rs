use std::io::{self, Write};

use takeoff_scan::{Matrix3, ThresholdTable};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// Counters collected over one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub structures: usize,
    pub skipped: usize,
    pub chains: usize,
    pub residues: usize,
    pub matches: usize,
}

pub fn print_summary(summary: &RunSummary) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Structures", summary.structures.to_string()),
        ("Chains", summary.chains.to_string()),
        ("Residues", summary.residues.to_string()),
        ("Matches", summary.matches.to_string()),
    ];
    if summary.skipped > 0 {
        rows.insert(1, ("Skipped", summary.skipped.to_string()));
    }

    print_kv_table(&mut out, "Scan Summary", &rows);
}

pub fn print_table_summary(table: &ThresholdTable) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows: Vec<(String, String)> = Matrix3::positions()
        .map(|(row, col)| {
            let band = table.band(row, col);
            (
                format!("n{row} – c{col}"),
                format!("{:.3} – {:.3} Å", band.min, band.max),
            )
        })
        .collect();

    print_kv_table(&mut out, "Distance Bands", &rows);

    let inverted = table.inverted_cells().count();
    if inverted > 0 {
        let _ = writeln!(
            out,
            "{INDENT}\x1b[33m!\x1b[0m {inverted} inverted band(s) will reject every window"
        );
    }
}

fn print_kv_table<K: AsRef<str>>(out: &mut impl Write, title: &str, rows: &[(K, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key.as_ref(), key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

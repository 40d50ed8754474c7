mod dir;
mod file;
mod table;

use dir::run_dir;
use file::run_file;
use table::run_table;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use takeoff_scan::io::{DbWriter, StructureReader};
use takeoff_scan::{Scanner, Structure};

use crate::cli::Command;
use crate::display::{Context as DisplayContext, RunSummary};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Dir(args) => run_dir(args, ctx),
        Command::File(args) => run_file(args, ctx),
        Command::Table(args) => run_table(args, ctx),
    }
}

fn read_structure<R: BufRead>(reader: R, id: String, source: &Path) -> Result<Structure> {
    let structure = StructureReader::new(reader)
        .id(id)
        .read()
        .with_context(|| format!("Failed to read structure: {}", source.display()))?;

    if structure.is_empty() {
        log::warn!("{}: no CA atoms found", source.display());
    }
    Ok(structure)
}

/// Streams every match of `structure` to `db` and updates `summary`.
fn scan_structure<W: Write>(
    scanner: &Scanner<'_>,
    structure: &Structure,
    db: &mut DbWriter<W>,
    summary: &mut RunSummary,
) -> Result<()> {
    let written = db.records();
    for record in scanner.scan_structure(structure) {
        db.write_record(&record)
            .context("Failed to write loop database record")?;
    }
    let matches = db.records() - written;

    log::debug!(
        "{}: {} chain(s), {} residue(s), {} match(es)",
        structure.id,
        structure.chain_count(),
        structure.residue_count(),
        matches
    );

    summary.structures += 1;
    summary.chains += structure.chain_count();
    summary.residues += structure.residue_count();
    summary.matches += matches;
    Ok(())
}

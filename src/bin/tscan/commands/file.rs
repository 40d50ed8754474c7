use std::path::Path;

use anyhow::{Context, Result, bail};

use takeoff_scan::Scanner;
use takeoff_scan::io::{DbWriter, structure_id_from_path};

use super::{read_structure, scan_structure};
use crate::cli::FileArgs;
use crate::config::{build_scan_config, build_threshold_table};
use crate::display::{Context as DisplayContext, RunSummary, print_summary};
use crate::io::{create_output, open_input, stdin_is_tty};

pub fn run_file(args: FileArgs, ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: tscan file <INPUT> or pipe PDB data via stdin."
        );
    }

    let table = build_threshold_table(&args.table)?;
    let config = build_scan_config(&args.lengths);
    let scanner = Scanner::new(&table, &config);

    let id = match (&args.id, &args.input) {
        (Some(id), _) => id.clone(),
        (None, Some(path)) => structure_id_from_path(path),
        (None, None) => String::new(),
    };
    let source = args.input.as_deref().unwrap_or(Path::new("<stdin>"));

    let reader = open_input(args.input.as_deref())?;
    let structure = read_structure(reader, id, source)?;

    let mut db = DbWriter::new(create_output(args.output.output.as_deref())?);
    let mut summary = RunSummary::default();
    scan_structure(&scanner, &structure, &mut db, &mut summary)?;
    db.flush().context("Failed to flush loop database")?;

    if ctx.interactive {
        print_summary(&summary);
    }

    Ok(())
}

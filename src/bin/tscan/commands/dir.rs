use anyhow::{Context, Result};
use chrono::Local;

use takeoff_scan::Scanner;
use takeoff_scan::io::{DbWriter, structure_id_from_path};

use super::{read_structure, scan_structure};
use crate::cli::DirArgs;
use crate::config::{build_scan_config, build_threshold_table};
use crate::display::{Context as DisplayContext, Progress, RunSummary, print_summary};
use crate::io::{create_output, list_structure_files, open_input};

const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn run_dir(args: DirArgs, ctx: DisplayContext) -> Result<()> {
    let table = build_threshold_table(&args.table)?;
    let config = build_scan_config(&args.lengths);
    let scanner = Scanner::new(&table, &config);

    let files = list_structure_files(&args.dir)?;
    if files.is_empty() {
        log::warn!("no structure files in {}", args.dir.display());
    }

    let mut db = DbWriter::new(create_output(args.output.output.as_deref())?);
    db.write_header(args.dir.display(), Local::now().format(DATE_FORMAT))
        .context("Failed to write loop database header")?;

    let progress = Progress::new(ctx.interactive, files.len());
    let mut summary = RunSummary::default();

    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.start_item(&name);

        let structure = open_input(Some(path.as_path()))
            .and_then(|reader| read_structure(reader, structure_id_from_path(path), path));

        match structure {
            Ok(structure) => scan_structure(&scanner, &structure, &mut db, &mut summary)?,
            Err(e) => {
                summary.skipped += 1;
                progress.skipped(&name, &format!("{e:#}"));
            }
        }

        progress.finish_item();
    }

    db.flush().context("Failed to flush loop database")?;
    progress.finish();

    if ctx.interactive {
        print_summary(&summary);
    }

    Ok(())
}

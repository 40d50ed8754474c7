use anyhow::{Context, Result};

use takeoff_scan::io::write_table;

use crate::cli::TableArgs;
use crate::config::build_threshold_table;
use crate::display::{Context as DisplayContext, print_table_summary};
use crate::io::create_output;

pub fn run_table(args: TableArgs, ctx: DisplayContext) -> Result<()> {
    let table = build_threshold_table(&args.table)?;

    let output = create_output(args.output.output.as_deref())?;
    write_table(output, &table).context("Failed to write distance table")?;

    if ctx.interactive {
        print_table_summary(&table);
    }

    Ok(())
}

use crate::io::error::Error;
use crate::model::matrix::Matrix3;
use crate::table::ThresholdTable;
use std::io::Write;

const ANCHOR_LABELS: [&str; 3] = ["n0", "n1", "n2"];
const C_ANCHOR_LABELS: [&str; 3] = ["c0", "c1", "c2"];

/// Writes `table` in the format read by [`read_table`](crate::io::read_table).
///
/// One `min max` line per cell in row-major order, each annotated with the
/// residue pair it constrains.
pub fn write_table<W: Write>(mut writer: W, table: &ThresholdTable) -> Result<(), Error> {
    writeln!(writer, "# Takeoff distance ranges (Angstroms)")?;
    writeln!(writer, "# min max, one line per N-anchor/C-anchor pair")?;
    for (row, col) in Matrix3::positions() {
        let band = table.band(row, col);
        writeln!(
            writer,
            "{} {}  # {}-{}",
            band.min, band.max, ANCHOR_LABELS[row], C_ANCHOR_LABELS[col]
        )?;
    }
    writer.flush()?;
    Ok(())
}

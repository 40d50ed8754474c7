use crate::io::error::Error;
use crate::scan::MatchRecord;
use std::fmt::Display;
use std::io::Write;

/// Streams the loop database.
///
/// A record is one line:
///
/// ```text
/// <id> <start> <end> <separation> d00 d01 d02 d10 d11 d12 d20 d21 d22
/// ```
///
/// with distances in row-major order to three decimals. Directory scans
/// start the file with a `#PDBDIR:`/`#DATE:` header and a blank line.
pub struct DbWriter<W: Write> {
    writer: W,
    records: usize,
}

impl<W: Write> DbWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: 0,
        }
    }

    pub fn write_header(&mut self, dir: impl Display, date: impl Display) -> Result<(), Error> {
        writeln!(self.writer, "#PDBDIR: {dir}")?;
        writeln!(self.writer, "#DATE:   {date}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn write_record(&mut self, record: &MatchRecord<'_>) -> Result<(), Error> {
        write!(
            self.writer,
            "{} {} {} {}",
            record.structure_id, record.start, record.end, record.separation
        )?;
        for d in record.distances.iter() {
            write!(self.writer, " {d:.3}")?;
        }
        writeln!(self.writer)?;
        self.records += 1;
        Ok(())
    }

    /// Records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

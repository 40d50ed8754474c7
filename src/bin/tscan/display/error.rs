use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_table_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use takeoff_scan::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Parser encountered an issue near line {} in {} format",
                    line, format
                ));
                self.add("Inspect the file around that line for malformed entries");
                self.add_format_specific_parse_hints(*format);
            }

            IoError::TableOpen { source, .. } => {
                self.add("The distance table given with -t could not be opened");
                self.add("Drop --strict to fall back to the default bands");
                self.collect_std_io_hints(source);
            }

            IoError::IncompleteTable { found } => {
                self.add(format!(
                    "Only {} of the 9 `min max` lines were found",
                    found
                ));
                self.add("Run `tscan table` to print a complete table to start from");
                self.add("Or drop --strict to keep defaults for the missing cells");
            }

            IoError::BioForgeIo(msg) => {
                self.add("Reading the PDB file via bio-forge failed");
                self.collect_pdb_read_hints(msg);
            }

            IoError::Table(table_err) => self.add_table_error_hints(table_err),
        }
    }

    fn collect_pdb_read_hints(&mut self, msg: &str) {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("coord") || msg_lower.contains("float") {
            self.add("PDB: Coordinates belong in columns 31-54 as three numbers");
        } else if msg_lower.contains("residue") || msg_lower.contains("serial") {
            self.add("PDB: Residue number in columns 23-26, insertion code in 27");
        } else {
            self.add("PDB: Check ATOM record formatting (columns 1-54)");
        }
        self.add("In `dir` mode the file is skipped and the run continues");
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or non-UTF-8 data");
                self.add("Verify the file is not compressed or corrupted");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn add_format_specific_parse_hints(&mut self, format: takeoff_scan::io::Format) {
        use takeoff_scan::io::Format;

        match format {
            Format::DistanceTable => {
                self.add("Each line must hold two numbers: `min max`");
                self.add("Text after `#` is a comment");
                self.add("Drop --strict to read malformed fields as 0.0");
            }
        }
    }

    fn collect_table_hints(&mut self, err: &Error) {
        use takeoff_scan::TableError;

        let Some(table_err) = err.downcast_ref::<TableError>() else {
            return;
        };

        self.mark_typed();
        self.add_table_error_hints(table_err);
    }

    fn add_table_error_hints(&mut self, err: &takeoff_scan::TableError) {
        use takeoff_scan::TableError;

        match err {
            TableError::StatsParse(_) => {
                self.add("Statistics file has invalid TOML or the wrong shape");
                self.add("Expected `means` and `sds` as 3×3 arrays, optional `sd_mult`");
            }

            TableError::InvalidStatistic { field, row, col, .. } => {
                self.add(format!("Check `{}` at row {}, column {}", field, row, col));
                self.add("Means must be finite; standard deviations finite and ≥ 0");
            }

            TableError::InvalidMultiplier(k) => {
                self.add(format!("Multiplier {} is not usable", k));
                self.add("--sd-mult must be a finite, non-negative number");
            }

            TableError::InvertedBand { row, col, min, max } => {
                self.add(format!(
                    "Band n{}-c{} has min {} above max {}",
                    row, col, min, max
                ));
                self.add("Swap the two values on that line of the distance table");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Input appears to be from a terminal");
            self.add("Provide a PDB file or pipe data to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

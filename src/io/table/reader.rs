use crate::io::{Format, ParseMode, error::Error};
use crate::model::matrix::Matrix3;
use crate::table::{Band, ThresholdTable};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const CELL_COUNT: usize = Matrix3::SIZE * Matrix3::SIZE;

/// Overrides `base` with the bands read from a distance table.
///
/// Each significant line (after stripping `#` comments and surrounding
/// whitespace) holds `min max` for the next cell in row-major order. Lines
/// past the ninth are ignored; cells without a line keep their value from
/// `base`.
///
/// In [`ParseMode::Lenient`] a field with trailing junk reads as its leading
/// number (`4.0abc` is `4.0`), a field with no leading number reads as `0.0`,
/// and inverted bands are kept, with a warning for each. [`ParseMode::Strict`]
/// turns either into an error and also requires all nine lines.
pub fn read_table<R: BufRead>(
    reader: R,
    base: ThresholdTable,
    mode: ParseMode,
) -> Result<ThresholdTable, Error> {
    let mut bands = Vec::with_capacity(CELL_COUNT);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let content = strip_comment(&line).trim();
        if content.is_empty() {
            continue;
        }
        if bands.len() == CELL_COUNT {
            log::debug!("distance table line {line_no} ignored: all nine cells already read");
            continue;
        }

        let mut fields = content.split_whitespace();
        let min = parse_field(fields.next(), "min", line_no, mode)?;
        let max = parse_field(fields.next(), "max", line_no, mode)?;
        bands.push(Band::new(min, max));
    }

    if bands.len() < CELL_COUNT {
        if mode == ParseMode::Strict {
            return Err(Error::IncompleteTable { found: bands.len() });
        }
        log::warn!(
            "distance table has {} of 9 entries; remaining cells keep their defaults",
            bands.len()
        );
    }

    let table = base.with_overrides(bands);

    if let Some((row, col)) = table.inverted_cells().next() {
        let band = table.band(row, col);
        if mode == ParseMode::Strict {
            return Err(crate::table::Error::InvertedBand {
                row,
                col,
                min: band.min,
                max: band.max,
            }
            .into());
        }
        for (row, col) in table.inverted_cells() {
            let band = table.band(row, col);
            log::warn!(
                "distance band ({row},{col}) is inverted (min {} > max {}); it will reject every window",
                band.min,
                band.max
            );
        }
    }

    Ok(table)
}

/// Reads a distance table from `path` on top of `base`.
///
/// A file that cannot be opened leaves `base` in force in lenient mode and
/// is an error in strict mode.
pub fn load_table(
    path: &Path,
    base: ThresholdTable,
    mode: ParseMode,
) -> Result<ThresholdTable, Error> {
    match File::open(path) {
        Ok(file) => read_table(BufReader::new(file), base, mode),
        Err(source) if mode == ParseMode::Lenient => {
            log::warn!(
                "cannot open distance table '{}' ({source}); using default distance ranges",
                path.display()
            );
            Ok(base)
        }
        Err(source) => Err(Error::TableOpen {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_field(
    field: Option<&str>,
    name: &str,
    line_no: usize,
    mode: ParseMode,
) -> Result<f64, Error> {
    let parsed = field.and_then(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()));
    match (parsed, mode) {
        (Some(value), _) => Ok(value),
        (None, ParseMode::Lenient) => {
            if let Some(value) = field.and_then(leading_number) {
                log::warn!(
                    "distance table line {line_no}: trailing text in {name} {:?}; using {value}",
                    field.unwrap_or("")
                );
                return Ok(value);
            }
            log::warn!(
                "distance table line {line_no}: cannot read {name} from {:?}; using 0.0",
                field.unwrap_or("")
            );
            Ok(0.0)
        }
        (None, ParseMode::Strict) => Err(Error::parse(
            Format::DistanceTable,
            line_no,
            format!("expected a number for {name}, found {:?}", field.unwrap_or("")),
        )),
    }
}

/// The longest prefix of `s` that reads as a decimal number, if any.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

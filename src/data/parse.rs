use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::Table;
use crate::error::{ConvertError, ParseError};

/// Stand-in for delimiters the csv reader can't split on directly.
const UNIT_SEPARATOR: char = '\u{1f}';

/// Read a whole file and parse it into a Table.
pub fn load_file(path: &Path, delimiter: &str) -> Result<Table, ConvertError> {
    let parse_err = |source: ParseError| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let input = fs::read_to_string(path).map_err(|err| parse_err(err.into()))?;
    parse_str(&input, delimiter).map_err(parse_err)
}

/// Parse delimited text into a Table (testable core).
///
/// The first non-blank line names the columns. Fields may be quoted with
/// `"` to carry the delimiter, doubled quotes or line breaks.
pub fn parse_str(input: &str, delimiter: &str) -> Result<Table, ParseError> {
    let delimiter = single_char(delimiter)?;
    let (input, byte) = substitute_delimiter(input, delimiter)?;
    let restore = |field: &str| -> String {
        if byte as char == delimiter {
            field.to_string()
        } else {
            field.replace(UNIT_SEPARATOR, delimiter.encode_utf8(&mut [0; 4]))
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(byte)
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(restore).collect();
    if headers.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != headers.len() {
            return Err(ParseError::RaggedRow {
                line: record
                    .position()
                    .map_or(0, |pos| source_line(&input, pos.byte())),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(restore).collect());
    }

    Ok(Table { headers, rows })
}

/// 1-based line a record starts on. The reader's offset may sit before the
/// blank lines it skipped, so those are stepped over first.
fn source_line(input: &str, byte: u64) -> u64 {
    let bytes = input.as_bytes();
    let mut start = (byte as usize).min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\r' | b'\n') {
        start += 1;
    }
    1 + bytes[..start].iter().filter(|&&b| b == b'\n').count() as u64
}

fn single_char(delimiter: &str) -> Result<char, ParseError> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !matches!(c, '"' | '\r' | '\n') => Ok(c),
        _ => Err(ParseError::InvalidDelimiter(delimiter.to_string())),
    }
}

fn substitute_delimiter(input: &str, delimiter: char) -> Result<(Cow<'_, str>, u8), ParseError> {
    if delimiter.is_ascii() {
        return Ok((Cow::Borrowed(input), delimiter as u8));
    }
    if input.contains(UNIT_SEPARATOR) {
        return Err(ParseError::DelimiterCollision(delimiter));
    }

    debug!("Splitting on {:?} via the ASCII unit separator", delimiter);
    let replaced = input.replace(delimiter, UNIT_SEPARATOR.encode_utf8(&mut [0; 4]));
    Ok((Cow::Owned(replaced), UNIT_SEPARATOR as u8))
}

use std::fs::File;
use std::io;
use std::path::Path;

use super::Table;
use crate::error::ConvertError;

/// Write the table to `path` as comma separated values, every field quoted.
pub fn write_file(table: &Table, path: &Path) -> Result<(), ConvertError> {
    let write_err = |source: csv::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|err| write_err(err.into()))?;
    write_to(table, file).map_err(write_err)
}

/// Header line first, then one line per row. No index column is added.
pub fn write_to<W: io::Write>(table: &Table, sink: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    // Flush here so a late I/O error isn't swallowed by Drop.
    wtr.flush()?;
    Ok(())
}

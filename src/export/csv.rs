use std::path::Path;

use csv::Writer;

use crate::errors::AppResult;
use crate::export::model::{HistoryExport, get_headers, row_to_cells};

/// Write history rows as delimited text. Values containing the delimiter,
/// quotes or newlines come out quoted with embedded quotes doubled.
pub fn write_csv(path: &Path, rows: &[HistoryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(row_to_cells(row))?;
    }

    wtr.flush()?;
    Ok(())
}

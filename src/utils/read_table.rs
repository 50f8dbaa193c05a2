use crate::models::{Error, Table};
use crate::types::TableRow;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Reads CSV with a header row into a `Table`, lowercasing the column names.
///
/// A row with more cells than the header is malformed. A shorter row is padded with
/// empty cells. Empty input yields a table with no columns and no rows.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Table, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let mut rows: Vec<TableRow> = Vec::new();
    let mut padded_rows = 0;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        if record.len() > headers.len() {
            let line = record.position().map_or(0, |position| position.line());
            return Err(Error::ParserError(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            )));
        }

        let mut row: TableRow = record.iter().map(|cell| cell.to_string()).collect();
        if row.len() < headers.len() {
            padded_rows += 1;
            row.resize(headers.len(), String::new());
        }

        rows.push(row);
    }

    if padded_rows > 0 {
        warn!("Padded {} short rows with empty cells", padded_rows);
    }

    debug!("Parsed {} columns and {} rows", headers.len(), rows.len());

    Ok(Table::new(headers, rows))
}

pub fn read_table_from_bytes(bytes: &[u8]) -> Result<Table, Error> {
    read_table_from_reader(Cursor::new(bytes))
}

pub fn read_table_from_string(csv: &str) -> Result<Table, Error> {
    read_table_from_bytes(csv.as_bytes())
}

/// Reads a CSV export saved to disk. Files ending in `.gz` are decompressed first.
pub fn read_table_from_file(path: &Path) -> Result<Table, Error> {
    let file = BufReader::new(File::open(path)?);

    let is_gzip = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

    if is_gzip {
        debug!("Reading gzip-compressed CSV from {:?}", path);
        read_table_from_reader(GzDecoder::new(file))
    } else {
        debug!("Reading CSV from {:?}", path);
        read_table_from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_lowercased_in_order() {
        let table = read_table_from_string("Symbol,DATE,Close,Volume\nNABIL,2024-01-01,100,10\n")
            .unwrap();
        assert_eq!(table.columns(), ["symbol", "date", "close", "volume"]);
        assert_eq!(table.rows()[0], ["NABIL", "2024-01-01", "100", "10"]);
    }

    #[test]
    fn test_empty_and_header_only_inputs() {
        let empty = read_table_from_string("").unwrap();
        assert!(empty.columns().is_empty());
        assert!(empty.is_empty());

        let header_only = read_table_from_string("date,symbol,close\n").unwrap();
        assert_eq!(header_only.columns().len(), 3);
        assert_eq!(header_only.len(), 0);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = read_table_from_string("date,symbol,close\n2024-01-01,NABIL\n").unwrap();
        assert_eq!(table.rows()[0], ["2024-01-01", "NABIL", ""]);
    }

    #[test]
    fn test_long_rows_are_malformed() {
        let result = read_table_from_string("date,symbol,close\n2024-01-01,NABIL,100,extra\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_invalid_utf8_is_parser_error() {
        let result = read_table_from_bytes(b"date,symbol,close\n2024-01-01,\xff\xfe,100\n");
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_values_keep_surrounding_whitespace() {
        let table = read_table_from_string("symbol\n NICA \n").unwrap();
        assert_eq!(table.rows()[0], [" NICA "]);
    }
}

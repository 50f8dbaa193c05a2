use crate::constants::{
    CLOSE_COLUMN, DATE_COLUMN, HIGH_COLUMN, LOW_COLUMN, OPEN_COLUMN, REQUIRED_COLUMNS,
    SYMBOL_COLUMN, VOLUME_COLUMN,
};
use crate::models::{Error, OhlcvRecord};
use crate::types::{ColumnName, TableRow, TickerSymbol};
use crate::utils::{parse_optional_date, parse_optional_number};
use chrono::{DateTime, Utc};
use log::warn;

/// A CSV tab held in memory with lowercased column names.
///
/// Rows keep the order delivered by the source and are never re-sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<TableRow>,
    /// When the HTTP fetch completed; `None` for tables not read over the network.
    fetched_at: Option<DateTime<Utc>>,
}

impl Table {
    /// Creates a table, lowercasing every column name.
    ///
    /// Missing trailing cells of a short row read as empty.
    pub fn new(columns: Vec<String>, rows: Vec<TableRow>) -> Self {
        Self {
            columns: crate::utils::normalize_column_names(columns),
            rows,
            fetched_at: None,
        }
    }

    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(fetched_at);
        self
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given (lowercase) name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// All values of a column, in row order.
    pub fn column_values(&self, column: &str) -> Option<Vec<&str>> {
        let index = self.column_index(column)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map_or("", String::as_str))
                .collect(),
        )
    }

    /// Fails with `Error::SchemaError` naming every column in `required` which is absent.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), Error> {
        let missing: Vec<ColumnName> = required
            .iter()
            .filter(|column| self.column_index(column).is_none())
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::SchemaError(missing))
        }
    }

    /// Converts every row into a typed record after checking the required columns.
    ///
    /// Unparseable dates and numbers become `None`; no row is dropped.
    pub fn to_ohlcv_records(&self) -> Result<Vec<OhlcvRecord>, Error> {
        self.require_columns(REQUIRED_COLUMNS)?;

        // Required columns were checked above
        let date_index = self.column_index(DATE_COLUMN);
        let symbol_index = self.column_index(SYMBOL_COLUMN);
        let close_index = self.column_index(CLOSE_COLUMN);
        let open_index = self.column_index(OPEN_COLUMN);
        let high_index = self.column_index(HIGH_COLUMN);
        let low_index = self.column_index(LOW_COLUMN);
        let volume_index = self.column_index(VOLUME_COLUMN);

        let cell = |row: &TableRow, index: Option<usize>| -> Option<String> {
            index.and_then(|i| row.get(i)).cloned()
        };

        let mut unparsed_dates = 0;

        let records: Vec<OhlcvRecord> = self
            .rows
            .iter()
            .map(|row| {
                let date = cell(row, date_index).and_then(|value| parse_optional_date(&value));
                if date.is_none() {
                    unparsed_dates += 1;
                }

                let number = |index: Option<usize>| {
                    cell(row, index).and_then(|value| parse_optional_number(&value))
                };

                OhlcvRecord {
                    date,
                    symbol: cell(row, symbol_index).unwrap_or_default(),
                    open: number(open_index),
                    high: number(high_index),
                    low: number(low_index),
                    close: number(close_index),
                    volume: number(volume_index),
                }
            })
            .collect();

        if unparsed_dates > 0 {
            warn!(
                "{} of {} rows have a missing or unparseable date",
                unparsed_dates,
                records.len()
            );
        }

        Ok(records)
    }

    /// Distinct values of the `symbol` column in first-seen order.
    pub fn distinct_symbols(&self) -> Vec<TickerSymbol> {
        let mut symbols: Vec<TickerSymbol> = Vec::new();

        if let Some(values) = self.column_values(SYMBOL_COLUMN) {
            for value in values {
                if !symbols.iter().any(|s| s == value) {
                    symbols.push(value.to_string());
                }
            }
        }

        symbols
    }
}

mod config;
pub use config::DEFAULT_SHEET_LOADER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    filter_records_by_symbol, ChartSeries, ChartView, CsvFetcher, DashboardSession, Error,
    HttpCsvFetcher, OhlcvRecord, SectorDirectory, SheetLoader, SheetLoaderConfig, SheetSource,
    SymbolSelection, Table,
};
pub mod types;
mod utils;
pub use types::{SectorName, SheetId, TabId, TickerSymbol};
pub use utils::{
    normalize_column_names, parse_optional_date, parse_optional_number, read_table_from_reader,
    read_table_from_string,
};

use std::path::Path;

/// Fetches one tab of a published spreadsheet and returns it with lowercased column names.
///
/// A single GET is issued against the CSV export endpoint; failures are returned as-is
/// and never retried.
pub fn load_sheet(sheet_id: &str, tab_id: TabId) -> Result<Table, Error> {
    load_sheet_with_custom_config(DEFAULT_SHEET_LOADER_CONFIG.clone(), sheet_id, tab_id)
}

pub fn load_sheet_with_custom_config(
    sheet_loader_config: SheetLoaderConfig,
    sheet_id: &str,
    tab_id: TabId,
) -> Result<Table, Error> {
    let sheet_loader = SheetLoader::new(sheet_loader_config)?;

    sheet_loader.load(sheet_id, tab_id)
}

/// Reads a previously saved CSV export (optionally `.gz` compressed) from disk.
pub fn load_csv_file(path: &Path) -> Result<Table, Error> {
    utils::read_table_from_file(path)
}

/// Builds a dashboard session from a freshly loaded table.
pub fn start_session(table: &Table) -> Result<DashboardSession, Error> {
    DashboardSession::new(table)
}

// Types listed here are either shared across multiple files and/or exposed via the library.

/// The identifier of a spreadsheet document, as it appears in the sheet's URL.
pub type SheetId = String;

/// The identifier (GID) of a single tab within a multi-tab spreadsheet document.
pub type TabId = u64;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
///
/// Symbols are kept exactly as delivered by the source; no case or whitespace
/// normalization is applied to values read from a sheet.
pub type TickerSymbol = String;

/// Represents a borrowed view of a ticker symbol.
pub type TickerSymbolRef = str;

/// Represents the name of a market sector (e.g. "Hydropower").
pub type SectorName = String;

/// A normalized (lowercased) column name.
pub type ColumnName = String;

/// A single raw CSV row, one owned string per column.
pub type TableRow = Vec<String>;

/// An ordered sector directory, where each entry includes:
/// - `SectorName`: The display name of the sector.
/// - `Vec<TickerSymbol>`: The companies listed under that sector, in display order.
pub type SectorCompanyList = Vec<(SectorName, Vec<TickerSymbol>)>;

/// A single chart point: the x (`date`) and y (`close`) values of one record.
pub type ChartPoint = (Option<chrono::NaiveDate>, Option<f64>);

pub mod error;
pub use error::Error;

pub mod sheet_loader_config;
pub use sheet_loader_config::SheetLoaderConfig;

pub mod sheet_source;
pub use sheet_source::SheetSource;

pub mod sheet_loader;
pub use sheet_loader::{CsvFetcher, HttpCsvFetcher, SheetLoader};

pub mod table;
pub use table::Table;

pub mod ohlcv_record;
pub use ohlcv_record::{filter_records_by_symbol, OhlcvRecord};

pub mod symbol_selection;
pub use symbol_selection::SymbolSelection;

pub mod chart_view;
pub use chart_view::{ChartSeries, ChartView};

pub mod dashboard_session;
pub use dashboard_session::DashboardSession;

pub mod sector_directory;
pub use sector_directory::SectorDirectory;

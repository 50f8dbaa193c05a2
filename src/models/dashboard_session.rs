use crate::models::{
    filter_records_by_symbol, ChartSeries, ChartView, Error, OhlcvRecord, SymbolSelection, Table,
};
use crate::types::TickerSymbol;
use chrono::{DateTime, Utc};
use log::debug;

/// The state carried from a completed load to every render of that load.
///
/// A session is built from one table and never refreshed; a new load produces a new
/// session.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    records: Vec<OhlcvRecord>,
    symbols: Vec<TickerSymbol>,
    fetched_at: Option<DateTime<Utc>>,
}

impl DashboardSession {
    /// Checks the required columns and types every row.
    ///
    /// Fails with `Error::SchemaError` before any chart logic runs. The fetch time is taken
    /// from the table, so sessions over local files have none.
    pub fn new(table: &Table) -> Result<Self, Error> {
        let records = table.to_ohlcv_records()?;
        let symbols = table.distinct_symbols();

        debug!(
            "Session holds {} records across {} symbols",
            records.len(),
            symbols.len()
        );

        Ok(Self {
            records,
            symbols,
            fetched_at: table.fetched_at(),
        })
    }

    pub fn records(&self) -> &[OhlcvRecord] {
        &self.records
    }

    /// Distinct symbols in first-seen order, for populating a dropdown.
    pub fn symbols(&self) -> &[TickerSymbol] {
        &self.symbols
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn chart_view(&self, selection: &SymbolSelection) -> ChartView {
        match selection.resolve() {
            None => ChartView::AwaitingSelection,
            Some(symbol) => self.chart_view_for_symbol(symbol),
        }
    }

    pub fn chart_view_for_symbol(&self, symbol: TickerSymbol) -> ChartView {
        let records = filter_records_by_symbol(&self.records, &symbol);

        if records.is_empty() {
            debug!("No rows for symbol {:?}", symbol);
            return ChartView::NoDataForSymbol(symbol);
        }

        ChartView::Series(ChartSeries {
            symbol,
            records,
            fetched_at: self.fetched_at,
        })
    }
}

use crate::models::OhlcvRecord;
use crate::types::{ChartPoint, TickerSymbol};
use chrono::{DateTime, NaiveDate, Utc};

/// What the presentation layer should show for one interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// No symbol has been chosen yet; show a neutral prompt.
    AwaitingSelection,
    /// A symbol was resolved but no row matches it.
    NoDataForSymbol(TickerSymbol),
    Series(ChartSeries),
}

impl ChartView {
    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            ChartView::Series(series) => Some(series),
            _ => None,
        }
    }
}

/// Rows of a single symbol, in source order, ready to be drawn as `date` vs `close`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub symbol: TickerSymbol,
    pub records: Vec<OhlcvRecord>,
    /// When the underlying table was fetched; `None` for local files.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ChartSeries {
    pub fn points(&self) -> Vec<ChartPoint> {
        self.records.iter().map(OhlcvRecord::chart_point).collect()
    }

    pub fn closes(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|record| record.close).collect()
    }

    /// The most recent parseable date in the series.
    pub fn latest_data_point(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(|record| record.date).max()
    }
}

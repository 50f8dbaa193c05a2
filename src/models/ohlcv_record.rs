use crate::types::{ChartPoint, TickerSymbol, TickerSymbolRef};
use chrono::NaiveDate;

/// One typed row of a normalized table.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvRecord {
    /// `None` when the source value could not be parsed as a date.
    pub date: Option<NaiveDate>,
    pub symbol: TickerSymbol,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl OhlcvRecord {
    pub fn chart_point(&self) -> ChartPoint {
        (self.date, self.close)
    }
}

/// Returns the records whose symbol is exactly `symbol`, in their original order.
///
/// Note: The match is case- and whitespace-sensitive.
pub fn filter_records_by_symbol(
    records: &[OhlcvRecord],
    symbol: &TickerSymbolRef,
) -> Vec<OhlcvRecord> {
    records
        .iter()
        .filter(|record| record.symbol == symbol)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, close: f64) -> OhlcvRecord {
        OhlcvRecord {
            date: None,
            symbol: symbol.to_string(),
            open: None,
            high: None,
            low: None,
            close: Some(close),
            volume: None,
        }
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let records = vec![record("NABIL", 100.0), record("nabil", 101.0)];
        let filtered = filter_records_by_symbol(&records, "NABIL");
        assert_eq!(filtered, vec![record("NABIL", 100.0)]);
    }

    #[test]
    fn test_filter_does_not_trim_source_values() {
        let records = vec![record(" NICA", 1.0)];
        assert!(filter_records_by_symbol(&records, "NICA").is_empty());
    }
}

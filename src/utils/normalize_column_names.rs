use crate::types::ColumnName;

/// Lowercases every column name, keeping the original order.
///
/// No trimming, renaming, or deduplication is applied; `" Close"` stays `" close"`.
///
/// ### Example:
/// ```rust
/// use ohlcv_sheet::normalize_column_names;
///
/// let columns = vec!["Date".to_string(), "SYMBOL".to_string(), "Close".to_string()];
/// assert_eq!(normalize_column_names(columns), vec!["date", "symbol", "close"]);
/// ```
pub fn normalize_column_names<I, S>(columns: I) -> Vec<ColumnName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .map(|column| column.as_ref().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_whitespace_and_order() {
        assert_eq!(
            normalize_column_names(["Volume", " Close", "OPEN"]),
            vec!["volume", " close", "open"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(normalize_column_names(Vec::<String>::new()).is_empty());
    }
}

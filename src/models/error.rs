use crate::types::ColumnName;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Transport failure, timeout, or a non-success HTTP status.
    FetchError(String),
    /// The body could not be read as CSV.
    ParserError(String),
    /// Required columns are missing after normalization.
    SchemaError(Vec<ColumnName>),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FetchError(msg) => write!(f, "Fetch Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::SchemaError(missing) => {
                write!(f, "Schema Error: missing required columns: {}", missing.join(", "))
            }
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::FetchError(format!("Request timed out: {}", err))
        } else {
            Error::FetchError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_missing_columns() {
        let err = Error::SchemaError(vec!["date".to_string(), "close".to_string()]);
        assert_eq!(
            err.to_string(),
            "Schema Error: missing required columns: date, close"
        );
    }

    #[test]
    fn test_csv_error_maps_to_parser_error() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"a,b\n1,2,3\n"[..]);
        let err = reader
            .records()
            .find_map(|record| record.err())
            .expect("expected an unequal lengths error");

        assert!(matches!(Error::from(err), Error::ParserError(_)));
    }
}

use crate::models::{Error, SheetLoaderConfig, SheetSource, Table};
use crate::types::TabId;
use crate::utils::read_table_from_bytes;
use chrono::Utc;
use log::{debug, info};

/// Retrieves the raw CSV body behind an export URL.
pub trait CsvFetcher {
    fn fetch_csv(&self, url: &str) -> Result<Vec<u8>, Error>;
}

/// Fetches over HTTP(S) with a blocking client; one GET per call, no retry.
pub struct HttpCsvFetcher {
    client: reqwest::blocking::Client,
}

impl HttpCsvFetcher {
    pub fn new(config: &SheetLoaderConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(&*config.user_agent)
            .build()
            .map_err(|e| Error::FetchError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl CsvFetcher for HttpCsvFetcher {
    fn fetch_csv(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "Unexpected HTTP status {} for {}",
                status, url
            )));
        }

        let body = response.bytes()?;

        Ok(body.to_vec())
    }
}

/// Loads published spreadsheet tabs as normalized tables.
pub struct SheetLoader<F: CsvFetcher = HttpCsvFetcher> {
    config: SheetLoaderConfig,
    fetcher: F,
}

impl SheetLoader<HttpCsvFetcher> {
    pub fn new(config: SheetLoaderConfig) -> Result<Self, Error> {
        let fetcher = HttpCsvFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: CsvFetcher> SheetLoader<F> {
    pub fn with_fetcher(config: SheetLoaderConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &SheetLoaderConfig {
        &self.config
    }

    /// Fetches one tab and returns it with lowercased column names.
    ///
    /// The table is stamped with the time the GET completed. An empty or header-only export yields a table with zero rows.
    pub fn load(&self, sheet_id: &str, tab_id: TabId) -> Result<Table, Error> {
        self.load_source(&SheetSource::new(sheet_id, tab_id))
    }

    pub fn load_source(&self, source: &SheetSource) -> Result<Table, Error> {
        let url = source.export_url(&self.config.base_url);
        debug!("Fetching CSV export from {}", url);

        let body = self.fetcher.fetch_csv(&url)?;
        let fetched_at = Utc::now();
        let table = read_table_from_bytes(&body)?.with_fetched_at(fetched_at);

        info!(
            "Loaded {} rows with columns {:?} from sheet {} (gid {})",
            table.len(),
            table.columns(),
            source.sheet_id,
            source.tab_id
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubFetcher {
        body: &'static str,
        requested_urls: RefCell<Vec<String>>,
    }

    impl CsvFetcher for StubFetcher {
        fn fetch_csv(&self, url: &str) -> Result<Vec<u8>, Error> {
            self.requested_urls.borrow_mut().push(url.to_string());
            Ok(self.body.as_bytes().to_vec())
        }
    }

    struct FailingFetcher;

    impl CsvFetcher for FailingFetcher {
        fn fetch_csv(&self, _url: &str) -> Result<Vec<u8>, Error> {
            Err(Error::FetchError("connection refused".to_string()))
        }
    }

    #[test]
    fn test_load_builds_export_url_and_normalizes() {
        let fetcher = StubFetcher {
            body: "Date,Symbol,Close\n2024-01-01,NABIL,100\n",
            requested_urls: RefCell::new(vec![]),
        };
        let loader = SheetLoader::with_fetcher(SheetLoaderConfig::default(), fetcher);

        let before = Utc::now();
        let table = loader.load("abc123", 7).unwrap();

        assert_eq!(table.columns(), ["date", "symbol", "close"]);
        assert_eq!(table.len(), 1);
        assert!(table.fetched_at().map_or(false, |fetched_at| fetched_at >= before));
        assert_eq!(
            loader.fetcher.requested_urls.borrow().as_slice(),
            ["https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=7"]
        );
    }

    #[test]
    fn test_fetch_error_is_not_retried() {
        let loader = SheetLoader::with_fetcher(SheetLoaderConfig::default(), FailingFetcher);
        assert!(matches!(loader.load("abc123", 0), Err(Error::FetchError(_))));
    }
}

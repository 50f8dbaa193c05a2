use crate::types::TabId;

/// Base URL of the spreadsheet service whose CSV export endpoint is used.
pub const DEFAULT_SPREADSHEET_BASE_URL: &str = "https://docs.google.com";

/// The first tab of a spreadsheet document.
pub const DEFAULT_TAB_ID: TabId = 0;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("ohlcv-sheet/", env!("CARGO_PKG_VERSION"));

pub const DATE_COLUMN: &str = "date";
pub const SYMBOL_COLUMN: &str = "symbol";
pub const OPEN_COLUMN: &str = "open";
pub const HIGH_COLUMN: &str = "high";
pub const LOW_COLUMN: &str = "low";
pub const CLOSE_COLUMN: &str = "close";
pub const VOLUME_COLUMN: &str = "volume";

/// Columns which must be present (after lowercasing) before any chart logic runs.
pub const REQUIRED_COLUMNS: &[&str] = &[DATE_COLUMN, SYMBOL_COLUMN, CLOSE_COLUMN];

/// Text formats accepted for the `date` column, tried in order.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// Date-time formats accepted for the `date` column; only the date part is kept.
pub const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Sector directory used to populate the secondary company list.
///
/// Listed symbols are not required to exist in any loaded sheet.
pub const DEFAULT_SECTOR_DIRECTORY: &[(&str, &[&str])] = &[
    (
        "Commercial Banks",
        &[
            "NABIL", "NICA", "SCB", "HBL", "EBL", "GBIME", "KBL", "NMB", "PRVU", "SANIMA",
        ],
    ),
    (
        "Development Banks",
        &["GBBL", "JBBL", "KSBBL", "MNBBL", "LBBL"],
    ),
    (
        "Hydropower",
        &["HDHPC", "AKPL", "API", "BPCL", "CHCL", "NHPC", "UPPER"],
    ),
    ("Life Insurance", &["NLIC", "LICN", "ALICL"]),
    ("Non Life Insurance", &["NICL", "SICL", "PRIN"]),
    ("Microfinance", &["CBBL", "SKBBL", "NUBL"]),
];

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SPREADSHEET_BASE_URL, DEFAULT_USER_AGENT};
use crate::models::SheetLoaderConfig;
use std::borrow::Cow;

pub const DEFAULT_SHEET_LOADER_CONFIG: &SheetLoaderConfig = &SheetLoaderConfig {
    base_url: Cow::Borrowed(DEFAULT_SPREADSHEET_BASE_URL),
    timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
    user_agent: Cow::Borrowed(DEFAULT_USER_AGENT),
};

pub const TEST_OHLCV_CSV_PATH: &str = "tests/test_data_files/test_ohlcv.csv";

pub const TEST_MISSING_CLOSE_CSV_PATH: &str = "tests/test_data_files/test_missing_close.csv";

pub const TEST_SECTORS_CSV_PATH: &str = "tests/test_data_files/test_sectors.csv";

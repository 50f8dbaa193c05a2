use log::info;
use ohlcv_sheet::{load_csv_file, start_session, SectorDirectory, SymbolSelection};
use std::path::Path;
use test_utils::constants::{TEST_OHLCV_CSV_PATH, TEST_SECTORS_CSV_PATH};
use test_utils::read_fixture;

// Walks every sector company of the fixture directory against the fixture sheet.
// Run from the workspace root: `RUST_LOG=debug cargo run -p dev`
fn main() -> Result<(), ohlcv_sheet::Error> {
    env_logger::init();

    let table = load_csv_file(Path::new(TEST_OHLCV_CSV_PATH))?;
    let session = start_session(&table)?;
    let directory = SectorDirectory::from_csv_str(&read_fixture(TEST_SECTORS_CSV_PATH))?;

    for sector in directory.sectors() {
        for company in directory.companies(sector).unwrap_or_default() {
            let view = session.chart_view(&SymbolSelection::from_dropdown(company));
            info!("{} / {}: {:?}", sector, company, view);
        }
    }

    Ok(())
}

use crate::models::Error;
use crate::types::SectorCompanyList;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Reads `sector,symbol` rows into an ordered sector list.
///
/// Header names are matched case-insensitively. Sectors appear in first-seen order and
/// each sector keeps its companies in row order.
pub fn read_sector_company_list_from_string(csv: &str) -> Result<SectorCompanyList, Error> {
    let mut sector_company_list = SectorCompanyList::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let position_of = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::SchemaError(vec![name.to_string()]))
    };

    let sector_index = position_of("sector")?;
    let symbol_index = position_of("symbol")?;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let sector = record
            .get(sector_index)
            .ok_or_else(|| Error::ParserError("Missing 'sector' field".to_string()))?;
        let symbol = record
            .get(symbol_index)
            .ok_or_else(|| Error::ParserError("Missing 'symbol' field".to_string()))?;

        match sector_company_list
            .iter()
            .position(|(name, _)| name == sector)
        {
            Some(index) => sector_company_list[index].1.push(symbol.to_string()),
            None => sector_company_list.push((sector.to_string(), vec![symbol.to_string()])),
        }
    }

    Ok(sector_company_list)
}

use crate::constants::DEFAULT_SECTOR_DIRECTORY;
use crate::models::Error;
use crate::types::{SectorCompanyList, SectorName, TickerSymbol};
use crate::utils::read_sector_company_list_from_string;

/// Static mapping of sector names to the companies listed under them.
///
/// Sectors and companies keep their configured order. Listed symbols are not checked
/// against any loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorDirectory {
    sector_company_list: SectorCompanyList,
}

impl SectorDirectory {
    pub fn new(sector_company_list: SectorCompanyList) -> Self {
        Self {
            sector_company_list,
        }
    }

    /// Reads a `sector,symbol` CSV, one company per row.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        Ok(Self::new(read_sector_company_list_from_string(csv)?))
    }

    pub fn sectors(&self) -> Vec<&SectorName> {
        self.sector_company_list
            .iter()
            .map(|(sector, _)| sector)
            .collect()
    }

    /// Companies of the given sector, or `None` if the sector is not listed.
    pub fn companies(&self, sector: &str) -> Option<&[TickerSymbol]> {
        self.sector_company_list
            .iter()
            .find(|(name, _)| name == sector)
            .map(|(_, companies)| companies.as_slice())
    }

    pub fn len(&self) -> usize {
        self.sector_company_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sector_company_list.is_empty()
    }
}

impl Default for SectorDirectory {
    fn default() -> Self {
        Self::new(
            DEFAULT_SECTOR_DIRECTORY
                .iter()
                .map(|(sector, companies)| {
                    (
                        sector.to_string(),
                        companies.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

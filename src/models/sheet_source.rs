use crate::constants::DEFAULT_TAB_ID;
use crate::types::{SheetId, TabId};

/// Identifies one tab of a published spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub sheet_id: SheetId,
    pub tab_id: TabId,
}

impl SheetSource {
    pub fn new(sheet_id: &str, tab_id: TabId) -> Self {
        Self {
            sheet_id: sheet_id.to_string(),
            tab_id,
        }
    }

    /// The first tab of the given sheet.
    pub fn first_tab(sheet_id: &str) -> Self {
        Self::new(sheet_id, DEFAULT_TAB_ID)
    }

    /// Builds the CSV export URL for this tab.
    ///
    /// Note: This is plain interpolation; the sheet ID is neither validated nor escaped.
    pub fn export_url(&self, base_url: &str) -> String {
        format!(
            "{}/spreadsheets/d/{}/export?format=csv&gid={}",
            base_url, self.sheet_id, self.tab_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url_for_first_tab() {
        let source = SheetSource::first_tab("1Q_En7VGGfifDmn5xuiF-t_02doPpwl4PLzxb4TBCW0Q");
        assert_eq!(
            source.export_url("https://docs.google.com"),
            "https://docs.google.com/spreadsheets/d/1Q_En7VGGfifDmn5xuiF-t_02doPpwl4PLzxb4TBCW0Q/export?format=csv&gid=0"
        );
    }

    #[test]
    fn test_export_url_does_not_validate_sheet_id() {
        let source = SheetSource::new("not a real id", 1234567);
        assert_eq!(
            source.export_url("http://localhost"),
            "http://localhost/spreadsheets/d/not a real id/export?format=csv&gid=1234567"
        );
    }
}

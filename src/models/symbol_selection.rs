use crate::types::TickerSymbol;

/// The symbol inputs of one user interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSelection {
    /// Free text typed into the search box.
    pub search_text: Option<String>,
    /// Whether the search action (e.g. a "search" button) was triggered.
    pub search_submitted: bool,
    /// Value chosen from the symbol dropdown.
    pub dropdown_choice: Option<String>,
}

impl SymbolSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_search(search_text: &str) -> Self {
        Self {
            search_text: Some(search_text.to_string()),
            search_submitted: true,
            dropdown_choice: None,
        }
    }

    pub fn from_dropdown(choice: &str) -> Self {
        Self {
            search_text: None,
            search_submitted: false,
            dropdown_choice: Some(choice.to_string()),
        }
    }

    pub fn with_dropdown_choice(mut self, choice: Option<&str>) -> Self {
        self.dropdown_choice = choice.map(|c| c.to_string());
        self
    }

    /// Resolves the inputs to a single symbol.
    ///
    /// A submitted, non-blank search wins and is trimmed and uppercased. Otherwise the
    /// dropdown value is used verbatim. `None` means nothing was selected.
    pub fn resolve(&self) -> Option<TickerSymbol> {
        if self.search_submitted {
            if let Some(search_text) = &self.search_text {
                let trimmed = search_text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_uppercase());
                }
            }
        }

        self.dropdown_choice
            .as_ref()
            .filter(|choice| !choice.is_empty())
            .cloned()
    }
}

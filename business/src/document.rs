//! The page the enhancements attach to.
//!
//! A storefront page arrives as a JSON document describing what is already on
//! it: the catalog table, any pagination controls the page author placed, and
//! the optional loading indicator and scroll-to-top button. Missing pieces are
//! not errors; the feature that needs them simply stays off.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed page document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub title: Option<String>,
    /// Static content above the table.
    #[serde(default)]
    pub sections: Vec<TextSection>,
    #[serde(default)]
    pub table: Option<TableMarkup>,
    #[serde(default)]
    pub pagination: Option<PaginationMarkup>,
    #[serde(default)]
    pub loading_indicator: bool,
    #[serde(default)]
    pub scroll_to_top: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableMarkup {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextSection {
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// Pagination controls already present in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationMarkup {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    /// Whether the container for numbered buttons exists.
    #[serde(default)]
    pub numbers: bool,
}

impl PageDocument {
    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(source)?)
    }
}

impl TableMarkup {
    /// Widest row or header, whichever is larger.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.columns.len()))
            .max()
            .unwrap_or(0)
    }
}

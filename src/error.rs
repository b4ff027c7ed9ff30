use thiserror::Error;

/// Everything that can go wrong between fetching a page and handing back records.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The source document could not be retrieved, or answered with a non-success status.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The document could not be turned into rows.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A row lacked a column or a cell did not hold the expected type.
    #[error("Mapping error in row {row}: {reason}")]
    Mapping { row: usize, reason: String },
}

impl ScrapeError {
    pub fn mapping(row: usize, reason: impl Into<String>) -> ScrapeError {
        ScrapeError::Mapping { row, reason: reason.into() }
    }
}

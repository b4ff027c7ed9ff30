use std::fmt::Display;
use std::str::FromStr;

use crate::error::ScrapeError;

/// Typed access to the cells of one extracted row, failing with [`ScrapeError::Mapping`].
pub struct Cells<'a> {
    row: usize,
    cells: &'a [String],
}

impl<'a> Cells<'a> {
    pub fn new(row: usize, cells: &'a [String]) -> Cells<'a> {
        Cells { row, cells }
    }

    pub fn text(&self, col: usize) -> Result<&'a str, ScrapeError> {
        self.cells.get(col)
            .map(|e| e.as_str())
            .ok_or_else(|| ScrapeError::mapping(self.row, format!("no column {col}, row has {} cells", self.cells.len())))
    }

    pub fn string(&self, col: usize) -> Result<String, ScrapeError> {
        self.text(col).map(|e| e.to_string())
    }

    pub fn parse<T>(&self, col: usize) -> Result<T, ScrapeError>
    where T: FromStr, T::Err: Display {
        let text = self.text(col)?;
        self.parse_text(col, text)
    }

    /// Percentages are printed without the leading zero (`.452`), so one is put back before parsing.
    pub fn percentage(&self, col: usize) -> Result<f64, ScrapeError> {
        let text = format!("0{}", self.text(col)?);
        self.parse_text(col, &text)
    }

    /// Empty cell text is `None`, anything else has to parse.
    pub fn optional<T>(&self, col: Option<usize>) -> Result<Option<T>, ScrapeError>
    where T: FromStr, T::Err: Display {
        match col {
            Some(col) => {
                let text = self.text(col)?;
                if text.is_empty() {
                    Ok(None)
                } else {
                    self.parse_text(col, text).map(Some)
                }
            },
            None => Ok(None),
        }
    }

    fn parse_text<T>(&self, col: usize, text: &str) -> Result<T, ScrapeError>
    where T: FromStr, T::Err: Display {
        text.parse::<T>()
            .map_err(|e| ScrapeError::mapping(self.row, format!("column {col} '{text}': {e}")))
    }
}

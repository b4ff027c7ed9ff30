use std::time::Instant;

use scraper::{Html, Selector};
use tracing::log;

use crate::error::ScrapeError;

/// One table row, as the text of each of its data cells.
pub type Row = Vec<String>;

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid selector '{selector}': {e}")))
}

/// Every `tr` in the document, in document order, reduced to the text of its `td` cells.
/// Rows without any `td` (header rows) are skipped. Cell text is not trimmed.
/// Bytes that are not utf-8 are replaced rather than rejected.
pub fn extract_rows(document: &[u8]) -> Result<Vec<Row>, ScrapeError> {
    let text = String::from_utf8_lossy(document);
    let html = Html::parse_document(&text);

    let row_selector = parse_selector("tr")?;
    let cell_selector = parse_selector("td")?;

    let rows = html.select(&row_selector)
        .map(|tr| tr.select(&cell_selector)
            .map(|td| td.text().collect::<String>())
            .collect::<Row>())
        .filter(|cells| !cells.is_empty())
        .collect();
    Ok(rows)
}

pub async fn fetch_rows(url: &str) -> Result<Vec<Row>, ScrapeError> {
    let before = Instant::now();
    let rsp = reqwest::get(url).await?.error_for_status()?;
    let body = rsp.text().await?;
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());

    let rows = extract_rows(body.as_bytes())?;
    log::info!("[SCRAPE] Extracted {} rows from {url}", rows.len());
    Ok(rows)
}

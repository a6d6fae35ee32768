use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;
use yahoo_finance_api::YahooError;

use crate::data::provider::MarketDataProvider;
use crate::domain::PriceRow;

/// Daily price history from the Yahoo Finance chart API.
pub struct YahooProvider;

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn signature(&self) -> &'static str {
        "Yahoo Finance API"
    }

    async fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRow>> {
        let connector =
            yahoo::YahooConnector::new().context("failed to build Yahoo Finance connector")?;

        let start_odt = day_start(start)?;
        let end_odt = day_end(end)?;

        let response = match connector.get_quote_history(symbol, start_odt, end_odt).await {
            Ok(response) => response,
            Err(e) if means_no_data(&e) => return Ok(Vec::new()),
            Err(e) => return Err(anyhow!("Yahoo Finance request for {symbol} failed: {e}")),
        };

        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(e) if means_no_data(&e) => return Ok(Vec::new()),
            Err(e) => return Err(anyhow!("Yahoo Finance response for {symbol} is unusable: {e}")),
        };

        let rows = quotes
            .iter()
            .filter_map(|q| {
                let date = DateTime::from_timestamp(q.timestamp as i64, 0)?.date_naive();
                Some(PriceRow {
                    date,
                    open: q.open,
                    high: q.high,
                    low: q.low,
                    close: q.close,
                    volume: q.volume,
                })
            })
            .collect();
        Ok(rows)
    }
}

/// Yahoo reports "nothing for this symbol/range" as an error; the fetcher
/// contract wants an empty table for that case.
fn means_no_data(error: &YahooError) -> bool {
    match error {
        YahooError::NoResult | YahooError::NoQuotes => true,
        YahooError::FetchFailed(body) => body.contains("Not Found") || body.contains("404"),
        _ => false,
    }
}

fn day_start(date: NaiveDate) -> Result<OffsetDateTime> {
    let ts = date
        .and_hms_opt(0, 0, 0)
        .context("invalid start-of-day time")?
        .and_utc()
        .timestamp();
    OffsetDateTime::from_unix_timestamp(ts).map_err(|e| anyhow!("invalid start timestamp: {e}"))
}

// End of day so the chosen end date's own bar is included in the range.
fn day_end(date: NaiveDate) -> Result<OffsetDateTime> {
    let ts = date
        .and_hms_opt(23, 59, 59)
        .context("invalid end-of-day time")?
        .and_utc()
        .timestamp();
    OffsetDateTime::from_unix_timestamp(ts).map_err(|e| anyhow!("invalid end timestamp: {e}"))
}

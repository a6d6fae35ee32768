use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::PriceRow;

/// A source of daily price history.
///
/// Implementations return the raw table for the symbol and date range; the
/// pipeline normalizes it afterwards. A symbol or range for which the source
/// simply has nothing must yield an EMPTY table, not an error — errors are
/// reserved for transport and protocol failures.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Short human-readable name for status lines and logs.
    fn signature(&self) -> &'static str;

    async fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<PriceRow>>;
}

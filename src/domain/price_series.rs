use std::collections::BTreeMap;

use chrono::NaiveDate;
use itertools::izip;

/// One daily bar as returned by a market data provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

// ============================================================================
// PriceSeries: normalized daily price history for one symbol
// ============================================================================

/// Daily OHLCV history stored as parallel vectors, ascending by date,
/// one row per trading day. Immutable once built; discarded after the run.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
    pub volumes: Vec<u64>,
}

impl PriceSeries {
    /// Normalize a raw provider table into a series: ascending by date, one
    /// row per calendar date (a later row for the same session supersedes an
    /// earlier one), rows without a finite close dropped.
    pub fn from_rows(symbol: &str, rows: Vec<PriceRow>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, PriceRow> = BTreeMap::new();
        for row in rows {
            if !row.close.is_finite() {
                continue;
            }
            by_date.insert(row.date, row);
        }

        let mut series = PriceSeries {
            symbol: symbol.to_string(),
            ..Default::default()
        };
        for (date, row) in by_date {
            series.dates.push(date);
            series.opens.push(row.open);
            series.highs.push(row.high);
            series.lows.push(row.low);
            series.closes.push(row.close);
            series.volumes.push(row.volume);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn row(&self, idx: usize) -> PriceRow {
        PriceRow {
            date: self.dates[idx],
            open: self.opens[idx],
            high: self.highs[idx],
            low: self.lows[idx],
            close: self.closes[idx],
            volume: self.volumes[idx],
        }
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> impl Iterator<Item = PriceRow> + '_ {
        izip!(
            &self.dates,
            &self.opens,
            &self.highs,
            &self.lows,
            &self.closes,
            &self.volumes
        )
        .map(|(date, open, high, low, close, volume)| PriceRow {
            date: *date,
            open: *open,
            high: *high,
            low: *low,
            close: *close,
            volume: *volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(y: i32, m: u32, d: u32, close: f64) -> PriceRow {
        PriceRow {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn rows_are_sorted_and_deduplicated() {
        let rows = vec![
            row(2024, 3, 6, 12.0),
            row(2024, 3, 4, 10.0),
            row(2024, 3, 5, 11.0),
            row(2024, 3, 4, 10.5), // later row for the same session wins
        ];
        let series = PriceSeries::from_rows("TEST", rows);

        assert_eq!(series.len(), 3);
        assert_eq!(
            series.dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            ]
        );
        assert_eq!(series.closes, vec![10.5, 11.0, 12.0]);
    }

    #[test]
    fn non_finite_closes_are_dropped() {
        let mut bad = row(2024, 3, 7, 13.0);
        bad.close = f64::NAN;
        let series = PriceSeries::from_rows("TEST", vec![row(2024, 3, 6, 12.0), bad]);

        assert_eq!(series.len(), 1);
        assert_eq!(series.closes, vec![12.0]);
    }

    #[test]
    fn empty_rows_build_an_empty_series() {
        let series = PriceSeries::from_rows("TEST", Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.last_date(), None);
    }
}

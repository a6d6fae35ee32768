use std::fmt;

use chrono::NaiveDate;

use crate::analysis::{ForecastResult, StationarityVerdict, check_stationarity, forecast_closes};
use crate::config::FORECAST;
use crate::data::provider::MarketDataProvider;
use crate::domain::PriceSeries;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for pipeline stages
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// The provider request itself failed
    Fetch(String),
    /// The provider returned no rows for the symbol/range
    EmptyData,
    /// The stationarity test could not be computed
    StationarityTest(String),
    /// The forecasting model failed to fit or forecast
    ModelFit(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Fetch(msg) => write!(f, "Download failed: {}", msg),
            PipelineError::EmptyData => write!(f, "⚠️ No data found. Check ticker symbol."),
            PipelineError::StationarityTest(msg) => {
                write!(f, "Stationarity test failed: {}", msg)
            }
            PipelineError::ModelFit(msg) => write!(f, "Model error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Everything one trigger press produces.
///
/// Stationarity and forecast failures are carried per-stage so the raw table
/// (and any earlier verdict) stays on screen when a later stage fails.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub symbol: String,
    pub series: PriceSeries,
    pub stationarity: Result<StationarityVerdict, PipelineError>,
    pub forecast: Result<ForecastResult, PipelineError>,
}

/// One full dashboard run as a pure function of its inputs.
///
/// Sequencing is strict and short-circuiting: fetch, branch on emptiness,
/// then stationarity and forecast. An empty fetch ends the run with
/// [`PipelineError::EmptyData`] and nothing else is computed.
pub async fn run(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RunOutput, PipelineError> {
    let symbol = symbol.trim();

    #[cfg(debug_assertions)]
    let run_start = std::time::Instant::now();

    let rows = provider
        .fetch(symbol, start, end)
        .await
        .map_err(|e| PipelineError::Fetch(format!("{e:#}")))?;

    let series = PriceSeries::from_rows(symbol, rows);
    if series.is_empty() {
        log::warn!("⚠️  No rows for {} between {} and {}", symbol, start, end);
        return Err(PipelineError::EmptyData);
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_fetch_events {
        log::info!(
            "Fetched {} rows for {} ({} → {}) via {}",
            series.len(),
            symbol,
            start,
            end,
            provider.signature()
        );
    }

    let stationarity = check_stationarity(series.closes())
        .map_err(|e| PipelineError::StationarityTest(format!("{e:#}")));

    let forecast = forecast_closes(&series, FORECAST.ar.lags, FORECAST.ar.steps)
        .map_err(|e| PipelineError::ModelFit(format!("{e:#}")));

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_pipeline_timings {
        log::info!("Run for {} completed in {:?}", symbol, run_start.elapsed());
    }

    Ok(RunOutput {
        symbol: symbol.to_string(),
        series,
        stationarity,
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRow;
    use crate::domain::business_days::is_weekend;
    use anyhow::Result;
    use async_trait::async_trait;

    struct MockProvider {
        rows: Vec<PriceRow>,
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn signature(&self) -> &'static str {
            "Mock"
        }

        async fn fetch(
            &self,
            _symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<PriceRow>> {
            Ok(self.rows.clone())
        }
    }

    fn business_day_rows(count: usize, close_of: impl Fn(usize) -> f64) -> Vec<PriceRow> {
        let mut rows = Vec::with_capacity(count);
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(); // a Tuesday
        while rows.len() < count {
            if !is_weekend(day) {
                let close = close_of(rows.len());
                rows.push(PriceRow {
                    date: day,
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 100,
                });
            }
            day = day.succ_opt().unwrap();
        }
        rows
    }

    fn window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn empty_fetch_short_circuits() {
        let provider = MockProvider { rows: Vec::new() };
        let (start, end) = window();

        let err = run(&provider, "ZZZZINVALID", start, end).await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyData));
        assert_eq!(err.to_string(), "⚠️ No data found. Check ticker symbol.");
    }

    #[tokio::test]
    async fn rising_series_forecasts_and_fails_stationarity() {
        let provider = MockProvider {
            rows: business_day_rows(60, |i| 100.0 + i as f64),
        };
        let (start, end) = window();

        let output = run(&provider, "TEST", start, end).await.unwrap();
        assert_eq!(output.series.len(), 60);

        let verdict = output.stationarity.unwrap();
        assert!(!verdict.stationary);

        let forecast = output.forecast.unwrap();
        assert_eq!(forecast.len(), 10);
        let last = output.series.last_date().unwrap();
        assert!(forecast.dates.iter().all(|d| *d > last));
        for pair in forecast.values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[tokio::test]
    async fn constant_series_never_crashes_the_run() {
        let provider = MockProvider {
            rows: business_day_rows(60, |_| 100.0),
        };
        let (start, end) = window();

        let output = run(&provider, "FLAT", start, end).await.unwrap();
        // The test itself is undefined on a constant series; the verdict
        // section shows the failure while the raw table stays visible.
        let stationarity = output.stationarity.unwrap_err();
        assert!(matches!(stationarity, PipelineError::StationarityTest(_)));

        match output.forecast {
            Ok(forecast) => assert_eq!(forecast.len(), 10),
            Err(e) => assert!(matches!(e, PipelineError::ModelFit(_))),
        }
    }

    #[tokio::test]
    async fn two_day_range_reports_a_stationarity_error() {
        let provider = MockProvider {
            rows: business_day_rows(2, |i| 100.0 + i as f64),
        };
        let (start, end) = window();

        let output = run(&provider, "TEST", start, end).await.unwrap();
        let err = output.stationarity.unwrap_err();
        assert!(err.to_string().starts_with("Stationarity test failed"));

        let model_err = output.forecast.unwrap_err();
        assert!(model_err.to_string().starts_with("Model error"));
    }

    #[tokio::test]
    async fn raw_rows_are_normalized_before_use() {
        let mut rows = business_day_rows(20, |i| 100.0 + i as f64);
        rows.reverse(); // providers owe no ordering guarantees
        rows.push(rows[3].clone()); // duplicate session
        let provider = MockProvider { rows };
        let (start, end) = window();

        let output = run(&provider, " TEST ", start, end).await.unwrap();
        assert_eq!(output.symbol, "TEST");
        assert_eq!(output.series.len(), 20);
        for pair in output.series.dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_not_propagated() {
        struct FailingProvider;

        #[async_trait]
        impl MarketDataProvider for FailingProvider {
            fn signature(&self) -> &'static str {
                "Failing"
            }

            async fn fetch(
                &self,
                _symbol: &str,
                _start: NaiveDate,
                _end: NaiveDate,
            ) -> Result<Vec<PriceRow>> {
                anyhow::bail!("connection reset by peer")
            }
        }

        let (start, end) = window();
        let err = run(&FailingProvider, "TEST", start, end).await.unwrap_err();
        match err {
            PipelineError::Fetch(msg) => assert!(msg.contains("connection reset")),
            other => panic!("expected a fetch error, got {other}"),
        }
    }
}

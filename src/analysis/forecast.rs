use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::config::FORECAST;
use crate::domain::{PriceSeries, next_business_days};
use crate::utils::maths_utils::lstsq;

/// Point forecast: one predicted close per upcoming business day.
#[derive(Debug, Clone)]
pub struct ForecastResult {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// ArModel: fixed-order autoregression on closing prices
// ============================================================================

/// AR(p) model fit by conditional least squares: each close regressed on an
/// intercept and its previous `lags` closes. No differencing, no moving-
/// average terms.
#[derive(Debug, Clone)]
pub struct ArModel {
    lags: usize,
    intercept: f64,
    /// phi_1..phi_p, newest lag first.
    coeffs: Vec<f64>,
}

impl ArModel {
    pub fn fit(closes: &[f64], lags: usize) -> Result<ArModel> {
        if lags == 0 {
            bail!("autoregressive order must be at least 1");
        }
        if closes.iter().any(|v| !v.is_finite()) {
            bail!("close series contains non-finite values");
        }
        let n = closes.len();
        let rows = n.saturating_sub(lags);
        if rows < FORECAST.ar.min_fit_rows {
            bail!(
                "{} closes is too short to fit {} autoregressive lags (need at least {})",
                n,
                lags,
                lags + FORECAST.ar.min_fit_rows
            );
        }

        let y: Vec<f64> = closes[lags..].to_vec();
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(lags + 1);
        columns.push(vec![1.0; rows]);
        for j in 1..=lags {
            columns.push(closes[lags - j..n - j].to_vec());
        }

        let fit = lstsq(&columns, &y).context("autoregressive fit failed")?;
        Ok(ArModel {
            lags,
            intercept: fit.coeffs[0],
            coeffs: fit.coeffs[1..].to_vec(),
        })
    }

    /// Iterative point forecast continuing from the end of `history`.
    pub fn forecast(&self, history: &[f64], steps: usize) -> Vec<f64> {
        debug_assert!(history.len() >= self.lags);
        let mut window: Vec<f64> = history[history.len() - self.lags..].to_vec();
        let mut out = Vec::with_capacity(steps);
        for _ in 0..steps {
            let mut next = self.intercept;
            for (j, phi) in self.coeffs.iter().enumerate() {
                next += phi * window[window.len() - 1 - j];
            }
            out.push(next);
            window.push(next);
        }
        out
    }
}

/// Fit the configured AR model to a price series and forecast the next
/// `steps` business days after its last historical date.
pub fn forecast_closes(series: &PriceSeries, lags: usize, steps: usize) -> Result<ForecastResult> {
    let model = ArModel::fit(series.closes(), lags)?;
    let values = model.forecast(series.closes(), steps);
    if values.iter().any(|v| !v.is_finite()) {
        bail!("model produced non-finite forecasts; the series is too degenerate to extrapolate");
    }
    let last = series.last_date().context("price series has no dates")?;
    let dates = next_business_days(last, steps);
    Ok(ForecastResult { dates, values })
}

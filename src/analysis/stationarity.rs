use anyhow::{Result, bail};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::FORECAST;
use crate::utils::maths_utils::{lstsq, polyval, variance};

// Fixed verdict strings, matched to the dashboard's display
const STATIONARY_MSG: &str = "✅ The series is stationary";
const NON_STATIONARY_MSG: &str = "❌ The series is not stationary";

// MacKinnon approximate p-value surface for the constant-only ADF regression.
// Outside [TAU_MIN, TAU_MAX] the p-value saturates at 0 / 1.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

// Residual-to-total variation ratio below which the test regression counts
// as a perfect fit and the verdict falls back to the sign of the unit-root
// coefficient.
const PERFECT_FIT_TOL: f64 = 1e-10;
const GAMMA_TOL: f64 = 1e-8;

/// Outcome of an Augmented Dickey-Fuller test run.
#[derive(Debug, Clone)]
pub struct AdfReport {
    /// t-statistic on the unit-root coefficient.
    pub statistic: f64,
    pub p_value: f64,
    /// Regression rows actually used.
    pub n_obs: usize,
    /// Lagged difference terms actually included.
    pub lags: usize,
}

#[derive(Debug, Clone)]
pub struct StationarityVerdict {
    pub p_value: f64,
    pub stationary: bool,
}

impl StationarityVerdict {
    pub fn message(&self) -> &'static str {
        if self.stationary {
            STATIONARY_MSG
        } else {
            NON_STATIONARY_MSG
        }
    }
}

/// Run the ADF test at the configured lag order and reduce the p-value to a
/// verdict against the fixed 0.05 significance threshold.
///
/// Missing (non-finite) entries are removed first. A series that cannot be
/// tested — too short, constant, or all-missing — comes back as `Err`, to be
/// shown as a message rather than crashing the run.
pub fn check_stationarity(series: &[f64]) -> Result<StationarityVerdict> {
    let report = adf_test(series, FORECAST.adf.lagged_diffs)?;
    Ok(StationarityVerdict {
        p_value: report.p_value,
        // NaN compares false, which correctly reads as "no evidence"
        stationary: report.p_value < FORECAST.adf.significance,
    })
}

/// Augmented Dickey-Fuller unit-root test with a constant term.
///
/// Regresses Δy on [const, Δy_{t-1}..Δy_{t-lags}, y_{t-1}] and returns the
/// t-statistic on the y_{t-1} coefficient with its MacKinnon approximate
/// p-value. The unit-root regressor is ordered last so its standard error
/// falls straight out of the orthogonalized fit.
pub fn adf_test(series: &[f64], lagged_diffs: usize) -> Result<AdfReport> {
    let clean: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    let n = clean.len();
    if n < FORECAST.adf.min_observations {
        bail!(
            "stationarity test needs at least {} observations, got {}",
            FORECAST.adf.min_observations,
            n
        );
    }
    if variance(&clean) == 0.0 {
        bail!("stationarity test is undefined for a constant series");
    }

    let diffs: Vec<f64> = clean.windows(2).map(|w| w[1] - w[0]).collect();
    // Shrink the lag order if the series is too short to afford it
    let lags = lagged_diffs.min(diffs.len().saturating_sub(3));
    let rows = diffs.len() - lags;

    let y: Vec<f64> = diffs[lags..].to_vec();
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(lags + 2);
    columns.push(vec![1.0; rows]);
    for j in 1..=lags {
        columns.push(diffs[lags - j..diffs.len() - j].to_vec());
    }
    // Unit-root regressor y_{t-1}, deliberately last (see above)
    columns.push(clean[lags..n - 1].to_vec());

    let fit = lstsq(&columns, &y)?;
    let gamma_idx = columns.len() - 1;
    if !fit.kept[gamma_idx] {
        bail!("unit-root regressor is collinear with the intercept");
    }
    let gamma = fit.coeffs[gamma_idx];

    let tss: f64 = variance(&y) * y.len() as f64;
    let (statistic, p_value) = if fit.ssr <= tss * PERFECT_FIT_TOL + f64::MIN_POSITIVE {
        // The regression reproduces the series exactly; no noise to test
        // against. The sign of the unit-root coefficient decides: negative
        // means full mean reversion, otherwise the unit root stands.
        if gamma < -GAMMA_TOL {
            (f64::NEG_INFINITY, 0.0)
        } else {
            (0.0, 1.0)
        }
    } else {
        if fit.dof == 0 {
            bail!("stationarity test has no residual degrees of freedom");
        }
        let sigma2 = fit.ssr / fit.dof as f64;
        let se = (sigma2 / fit.basis_norm2[gamma_idx]).sqrt();
        let t = gamma / se;
        (t, mackinnon_p(t))
    };

    Ok(AdfReport {
        statistic,
        p_value,
        n_obs: rows,
        lags,
    })
}

fn mackinnon_p(statistic: f64) -> f64 {
    if statistic.is_nan() {
        return f64::NAN;
    }
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let arg = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    let normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    normal.cdf(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trending_series_is_not_stationary() {
        // 60 closes rising linearly 100..=159: a pure drift, i.e. a unit root
        let series: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let verdict = check_stationarity(&series).unwrap();
        assert!(!verdict.stationary);
        assert_eq!(verdict.message(), "❌ The series is not stationary");
    }

    #[test]
    fn oscillating_series_is_stationary() {
        let series: Vec<f64> = (0..80).map(|i| 100.0 + 5.0 * (0.5 * i as f64).sin()).collect();
        let verdict = check_stationarity(&series).unwrap();
        assert!(verdict.stationary);
        assert_eq!(verdict.message(), "✅ The series is stationary");
    }

    #[test]
    fn verdict_is_deterministic() {
        let series: Vec<f64> = (0..70)
            .map(|i| 50.0 + (1.3 * i as f64).sin() + 0.5 * (2.9 * i as f64).cos())
            .collect();
        let first = check_stationarity(&series).unwrap();
        let second = check_stationarity(&series).unwrap();
        assert_eq!(first.p_value.to_bits(), second.p_value.to_bits());
        assert_eq!(first.stationary, second.stationary);
    }

    #[test]
    fn constant_series_errors_gracefully() {
        let series = vec![100.0; 60];
        assert!(check_stationarity(&series).is_err());
    }

    #[test]
    fn two_observations_error_gracefully() {
        assert!(check_stationarity(&[101.0, 102.0]).is_err());
    }

    #[test]
    fn missing_values_are_removed_before_testing() {
        let mut series: Vec<f64> = (0..80).map(|i| 100.0 + 5.0 * (0.5 * i as f64).sin()).collect();
        series.insert(10, f64::NAN);
        series.insert(40, f64::NAN);
        let verdict = check_stationarity(&series).unwrap();
        assert!(verdict.stationary);
    }

    #[test]
    fn all_missing_errors_gracefully() {
        assert!(check_stationarity(&[f64::NAN; 30]).is_err());
    }

    #[test]
    fn mackinnon_p_matches_the_five_percent_critical_value() {
        // τ = -2.86 is the textbook 5% critical value for the constant case
        let p = mackinnon_p(-2.86);
        assert!((p - 0.05).abs() < 0.005, "p was {p}");
    }

    #[test]
    fn mackinnon_p_saturates_outside_the_table() {
        assert_eq!(mackinnon_p(-25.0), 0.0);
        assert_eq!(mackinnon_p(3.0), 1.0);
    }
}

//! Statistical model configuration

/// Settings for the ADF stationarity test
pub struct AdfSettings {
    // Number of lagged difference terms in the test regression
    pub lagged_diffs: usize,
    // p-value threshold below which the series counts as stationary
    pub significance: f64,
    // Minimum non-missing observations for the test to be computable
    pub min_observations: usize,
}

/// Settings for the autoregressive forecaster
pub struct ArSettings {
    // Autoregressive order: closes regressed on this many lags
    pub lags: usize,
    // Number of business-day steps to forecast past the last close
    pub steps: usize,
    // Minimum regression rows (observations beyond the lag window)
    pub min_fit_rows: usize,
}

/// The master forecasting configuration
pub struct ForecastConfig {
    pub adf: AdfSettings,
    pub ar: ArSettings,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    adf: AdfSettings {
        lagged_diffs: 1,
        significance: 0.05,
        min_observations: 3,
    },
    ar: ArSettings {
        lags: 5,
        steps: 10,
        // Two more rows than the widest parameter set the fit can keep
        min_fit_rows: 7,
    },
};

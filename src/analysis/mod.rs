// Statistical analysis: stationarity testing and autoregressive forecasting
pub mod forecast;
pub mod stationarity;

pub use forecast::{ArModel, ForecastResult, forecast_closes};
pub use stationarity::{AdfReport, StationarityVerdict, adf_test, check_stationarity};

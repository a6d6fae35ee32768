// Core domain types shared by the data, analysis, and UI layers
pub mod business_days;
pub mod price_series;

pub use business_days::next_business_days;
pub use price_series::{PriceRow, PriceSeries};

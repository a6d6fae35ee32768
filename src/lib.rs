// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ForecastResult, StationarityVerdict};
pub use data::{MarketDataProvider, YahooProvider};
pub use domain::{PriceRow, PriceSeries};
pub use engine::{PipelineError, RunOutput, run};
pub use ui::TrendScopeApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preset the ticker symbol input (overrides the persisted one)
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    let app = ui::TrendScopeApp::new(cc, cli.symbol.clone());
    Box::new(app)
}

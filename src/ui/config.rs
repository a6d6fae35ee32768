use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error: Color32,
    pub verdict_ok: Color32,
    pub verdict_warn: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(22, 26, 32),
        side_panel: Color32::from_rgb(25, 25, 25),
        error: Color32::from_rgb(220, 120, 120),
        verdict_ok: Color32::from_rgb(130, 200, 140),
        verdict_warn: Color32::from_rgb(200, 200, 160),
    },
};

/// All user-facing strings in one place
pub struct UiText {
    pub window_title: &'static str,
    pub app_title: &'static str,
    pub ticker_hint: &'static str,
    pub inputs_heading: &'static str,
    pub symbol_label: &'static str,
    pub start_date_label: &'static str,
    pub end_date_label: &'static str,
    pub generate_button: &'static str,
    pub downloading: &'static str,
    pub idle_status: &'static str,
    pub waiting_for_first_run: &'static str,
    pub raw_data_heading: &'static str,
    pub adf_heading: &'static str,
    pub forecast_heading: &'static str,
    pub chart_title_prefix: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub actual_series_label: &'static str,
    pub predicted_series_label: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Trend Scope - Fetch. Test. Forecast.",
    app_title: "📈 Stock Price Forecasting Dashboard",
    ticker_hint: "Enter a stock ticker (e.g., 1299.HK, 0005.HK, AAPL, TSLA)",
    inputs_heading: "Forecast Inputs",
    symbol_label: "Stock Symbol",
    start_date_label: "Start Date",
    end_date_label: "End Date",
    generate_button: "Generate Forecast",
    downloading: "Downloading data...",
    idle_status: "Idle.",
    waiting_for_first_run: "Set a ticker and date range, then press Generate Forecast.",
    raw_data_heading: "Raw Data",
    adf_heading: "ADF Stationarity Test",
    forecast_heading: "ARIMA Forecasting",
    chart_title_prefix: "Actual vs Predicted Prices",
    plot_x_axis: "Date",
    plot_y_axis: "Close Price",
    actual_series_label: "Actual Prices",
    predicted_series_label: "Predicted Prices",
};

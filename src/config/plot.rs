//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub actual_line_color: Color32,
    pub predicted_line_color: Color32,
    /// Width of the historical close-price line
    pub actual_line_width: f32,
    /// Width of the dashed forecast line
    pub predicted_line_width: f32,
    /// Fixed height of the forecast chart in points
    pub chart_height: f32,
    /// Maximum height of the raw-data table before it scrolls
    pub max_table_height: f32,
    /// Row height inside the raw-data table
    pub table_row_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    actual_line_color: Color32::from_rgb(100, 150, 250), // Soft blue
    predicted_line_color: Color32::from_rgb(230, 70, 70), // Red, per the dashed forecast line
    actual_line_width: 1.5,
    predicted_line_width: 1.5,
    chart_height: 320.0,
    max_table_height: 240.0,
    table_row_height: 18.0,
};

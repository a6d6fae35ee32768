use chrono::{Datelike, NaiveDate};
use eframe::egui::Ui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::analysis::ForecastResult;
use crate::config::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::ui::config::UI_TEXT;

/// Renders the actual-vs-predicted chart for one completed run.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_forecast_plot(
        &self,
        ui: &mut Ui,
        series: &PriceSeries,
        forecast: &ForecastResult,
    ) {
        let actual_points: Vec<[f64; 2]> = series
            .dates
            .iter()
            .zip(series.closes().iter())
            .map(|(date, close)| [day_value(*date), *close])
            .collect();

        let predicted_points: Vec<[f64; 2]> = forecast
            .dates
            .iter()
            .zip(forecast.values.iter())
            .map(|(date, value)| [day_value(*date), *value])
            .collect();

        let legend = Legend::default().position(Corner::LeftTop);

        Plot::new("forecast_plot")
            .legend(legend)
            .height(PLOT_CONFIG.chart_height)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.actual_series_label, PlotPoints::new(actual_points))
                        .color(PLOT_CONFIG.actual_line_color)
                        .width(PLOT_CONFIG.actual_line_width),
                );
                plot_ui.line(
                    Line::new(
                        UI_TEXT.predicted_series_label,
                        PlotPoints::new(predicted_points),
                    )
                    .color(PLOT_CONFIG.predicted_line_color)
                    .width(PLOT_CONFIG.predicted_line_width)
                    .style(LineStyle::dashed_loose()),
                );
            });
    }
}

// Calendar dates live on the x axis as whole days since the common era, so
// grid marks round-trip back to a date for the tick labels.
fn day_value(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn format_day(value: f64) -> String {
    match NaiveDate::from_num_days_from_ce_opt(value.round() as i32) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |grid_mark, _range| format_day(grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_values_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        assert_eq!(format_day(day_value(date)), "2024-05-17");
    }

    #[test]
    fn day_values_are_strictly_increasing() {
        let a = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert!(day_value(a) < day_value(b));
    }
}

use eframe::egui::{
    CentralPanel, Context, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{InputEventChanged, InputPanel, Panel};
use crate::ui::ui_table::show_price_table;
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::TrendScopeApp;

impl TrendScopeApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(190.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut panel = InputPanel::new(
                    self.symbol.clone(),
                    self.start_date,
                    self.end_date,
                    self.is_fetching(),
                );
                let events = panel.render(ui);

                for event in events {
                    match event {
                        InputEventChanged::Symbol(symbol) => {
                            self.symbol = symbol;
                        }
                        InputEventChanged::StartDate(date) => {
                            self.start_date = date;
                        }
                        InputEventChanged::EndDate(date) => {
                            self.end_date = date;
                        }
                        InputEventChanged::GeneratePressed => {
                            self.start_pipeline_run();
                        }
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("results").show(ui, |ui| {
                    ui.add_space(10.0);
                    ui.heading(UI_TEXT.app_title);
                    ui.label(
                        RichText::new(UI_TEXT.ticker_hint)
                            .small()
                            .color(UI_CONFIG.colors.label),
                    );
                    spaced_separator(ui);

                    if let Some(error) = &self.last_error {
                        ui.colored_label(UI_CONFIG.colors.error, error.to_string());
                        return;
                    }

                    if self.last_output.is_some() {
                        self.render_run_sections(ui);
                    } else if !self.is_fetching() {
                        ui.label(
                            RichText::new(UI_TEXT.waiting_for_first_run)
                                .color(UI_CONFIG.colors.label),
                        );
                    }
                });
            });
    }

    /// The three result sections, in pipeline order: raw table, verdict,
    /// forecast chart. A failed stage renders its message in place while the
    /// earlier sections stay visible.
    fn render_run_sections(&self, ui: &mut eframe::egui::Ui) {
        let Some(output) = &self.last_output else {
            return;
        };

        section_heading(ui, UI_TEXT.raw_data_heading);
        show_price_table(ui, &output.series);
        spaced_separator(ui);

        section_heading(ui, UI_TEXT.adf_heading);
        match &output.stationarity {
            Ok(verdict) => {
                let color = if verdict.stationary {
                    UI_CONFIG.colors.verdict_ok
                } else {
                    UI_CONFIG.colors.verdict_warn
                };
                ui.colored_label(color, verdict.message());
            }
            Err(error) => {
                ui.colored_label(UI_CONFIG.colors.error, error.to_string());
            }
        }
        spaced_separator(ui);

        section_heading(ui, UI_TEXT.forecast_heading);
        match &output.forecast {
            Ok(forecast) => {
                ui.label(format!(
                    "{} ({})",
                    UI_TEXT.chart_title_prefix, output.symbol
                ));
                ui.add_space(5.0);
                self.plot_view
                    .show_forecast_plot(ui, &output.series, forecast);
            }
            Err(error) => {
                ui.colored_label(UI_CONFIG.colors.error, error.to_string());
            }
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_fetching() {
                    ui.spinner();
                    ui.label(UI_TEXT.downloading);
                } else {
                    ui.label(
                        RichText::new(UI_TEXT.idle_status).color(UI_CONFIG.colors.label),
                    );
                }
            });
        });
    }
}

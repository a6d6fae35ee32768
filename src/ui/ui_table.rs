use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::ui::utils::format_price;

/// Columns of the raw-data view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PriceColumn {
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
}

/// Scrollable table over the fetched rows, exactly as the provider returned
/// them (after normalization).
pub fn show_price_table(ui: &mut Ui, series: &PriceSeries) {
    ui.push_id("raw_data_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .columns(Column::remainder().at_least(70.0), PriceColumn::iter().count())
            .max_scroll_height(PLOT_CONFIG.max_table_height)
            .header(PLOT_CONFIG.table_row_height + 2.0, |mut header| {
                for column in PriceColumn::iter() {
                    header.col(|ui| {
                        ui.strong(column.to_string());
                    });
                }
            })
            .body(|body| {
                body.rows(PLOT_CONFIG.table_row_height, series.len(), |mut row| {
                    let bar = series.row(row.index());
                    row.col(|ui| {
                        ui.label(bar.date.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_price(bar.open));
                    });
                    row.col(|ui| {
                        ui.label(format_price(bar.high));
                    });
                    row.col(|ui| {
                        ui.label(format_price(bar.low));
                    });
                    row.col(|ui| {
                        ui.label(format_price(bar.close));
                    });
                    row.col(|ui| {
                        ui.label(bar.volume.to_string());
                    });
                });
            });
    });
}

use chrono::NaiveDate;
use eframe::egui::{Button, Color32, RichText, TextEdit, Ui};
use egui_extras::DatePickerButton;

use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel for the three run inputs and the trigger button
pub struct InputPanel {
    symbol: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    busy: bool,
}

#[derive(Debug, Clone)]
pub enum InputEventChanged {
    Symbol(String),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    GeneratePressed,
}

impl InputPanel {
    pub fn new(symbol: String, start_date: NaiveDate, end_date: NaiveDate, busy: bool) -> Self {
        Self {
            symbol,
            start_date,
            end_date,
            busy,
        }
    }

    fn render_symbol_input(&mut self, ui: &mut Ui) -> Option<String> {
        ui.label(colored_subsection_heading(UI_TEXT.symbol_label));
        let response = ui.add(
            TextEdit::singleline(&mut self.symbol)
                .hint_text("1299.HK")
                .desired_width(f32::INFINITY),
        );
        ui.label(
            RichText::new(UI_TEXT.ticker_hint)
                .small()
                .color(Color32::GRAY),
        );

        if response.changed() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Ticker input changed to {:?}", self.symbol);
            }
            Some(self.symbol.clone())
        } else {
            None
        }
    }

    fn render_date_inputs(&mut self, ui: &mut Ui) -> Vec<InputEventChanged> {
        let mut events = Vec::new();

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.start_date_label));
        let start_response = ui.add(
            DatePickerButton::new(&mut self.start_date)
                .id_salt("start_date")
                .show_icon(true),
        );
        if start_response.changed() {
            events.push(InputEventChanged::StartDate(self.start_date));
        }

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.end_date_label));
        let end_response = ui.add(
            DatePickerButton::new(&mut self.end_date)
                .id_salt("end_date")
                .show_icon(true),
        );
        if end_response.changed() {
            events.push(InputEventChanged::EndDate(self.end_date));
        }

        events
    }

    fn render_generate_button(&mut self, ui: &mut Ui) -> bool {
        ui.add_space(10.0);
        let button = Button::new(UI_TEXT.generate_button);
        let pressed = ui.add_enabled(!self.busy, button).clicked();

        #[cfg(debug_assertions)]
        if pressed && DEBUG_FLAGS.print_ui_interactions {
            log::info!("🚀 Generate Forecast pressed for {:?}", self.symbol);
        }
        pressed
    }
}

impl Panel for InputPanel {
    type Event = InputEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.inputs_heading);

        if let Some(symbol) = self.render_symbol_input(ui) {
            events.push(InputEventChanged::Symbol(symbol));
        }

        events.extend(self.render_date_inputs(ui));

        if self.render_generate_button(ui) {
            events.push(InputEventChanged::GeneratePressed);
        }

        ui.add_space(20.0);
        events
    }
}

use chrono::NaiveDate;
use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::engine::{PipelineError, RunOutput};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Deserialize, Serialize)]
pub struct TrendScopeApp {
    // Input state - persisted so the dashboard reopens where it left off
    #[serde(default = "default_symbol")]
    pub(super) symbol: String,
    #[serde(default = "default_start_date")]
    pub(super) start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub(super) end_date: NaiveDate,

    // Run state - never persisted; every run starts from a fresh fetch
    #[serde(skip)]
    pub(super) run_promise: Option<Promise<Result<RunOutput, PipelineError>>>,
    #[serde(skip)]
    pub(super) last_output: Option<RunOutput>,
    #[serde(skip)]
    pub(super) last_error: Option<PipelineError>,
    #[serde(skip)]
    pub(super) plot_view: PlotView,
}

/// Default ticker - used by serde and initialization
fn default_symbol() -> String {
    "1299.HK".to_string()
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default start date")
}

fn default_end_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl TrendScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, preset_symbol: Option<String>) -> Self {
        let mut app: TrendScopeApp;

        // Attempt to load the persisted input state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted input state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Creating anew.");
                }
                app = TrendScopeApp::new_with_initial_state();
            }
        } else {
            app = TrendScopeApp::new_with_initial_state();
        }

        // CLI preset wins over whatever was persisted
        if let Some(symbol) = preset_symbol {
            app.symbol = symbol;
        }

        // Explicitly reinitialize the skip-serialized runtime state
        app.run_promise = None;
        app.last_output = None;
        app.last_error = None;
        app.plot_view = PlotView::new();

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            symbol: default_symbol(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            run_promise: None,
            last_output: None,
            last_error: None,
            plot_view: PlotView::new(),
        }
    }
}

impl eframe::App for TrendScopeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight run so its sender does not outlive the app
        if let Some(promise) = self.run_promise.take() {
            drop(promise);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll the in-flight pipeline run, if any
        self.poll_pipeline_run(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
    }
}

use eframe::egui;
use poll_promise::Promise;

use crate::data::YahooProvider;
use crate::engine::{self, PipelineError};
use crate::ui::app::TrendScopeApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl TrendScopeApp {
    /// Kick off one full pipeline run on a worker thread. A second trigger
    /// press while a run is in flight is ignored.
    pub(super) fn start_pipeline_run(&mut self) {
        if self.run_promise.is_some() {
            return;
        }

        self.last_error = None;

        let symbol = self.symbol.clone();
        let start = self.start_date;
        let end = self.end_date;

        let promise = Promise::spawn_thread("pipeline_run", move || {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| PipelineError::Fetch(format!("failed to start async runtime: {e}")))?;
            let provider = YahooProvider;
            rt.block_on(engine::run(&provider, &symbol, start, end))
        });

        self.run_promise = Some(promise);
    }

    pub(super) fn poll_pipeline_run(&mut self, ctx: &egui::Context) {
        let outcome = self
            .run_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(result) = outcome {
            self.run_promise = None;

            match result {
                Ok(output) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_fetch_events {
                        log::info!(
                            "✅ Run for {} complete: {} rows",
                            output.symbol,
                            output.series.len()
                        );
                    }
                    self.last_output = Some(output);
                    self.last_error = None;
                }
                Err(error) => {
                    log::error!("❌ Run failed: {}", error);
                    self.last_output = None;
                    self.last_error = Some(error);
                }
            }
        } else if self.run_promise.is_some() {
            // Keep repainting so the spinner animates while the fetch runs
            ctx.request_repaint();
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.run_promise.is_some()
    }
}

//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so debug
//! builds stay readable.

pub struct DebugFlags {
    /// Emit UI interaction logs (input edits, trigger presses).
    pub print_ui_interactions: bool,
    /// Emit per-run fetch summaries (row counts, date spans, provider).
    pub print_fetch_events: bool,
    /// Emit stage timings for the fetch/test/forecast pipeline.
    pub print_pipeline_timings: bool,
    /// Emit app-state load/save diagnostics.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_events: true,
    print_pipeline_timings: false,
    print_state_serde: false,
};

pub mod demo;
pub mod extract;
pub mod repl;
pub mod ruleset;

use std::path::Path;

use orderly_core::config::AppConfig;
use orderly_core::{OrderSession, RulesetOrigin, SummaryRenderer, ORDER_MARKER};

/// Outcome of one command: text for stdout plus the process exit code.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(output: impl Into<String>, exit_code: u8) -> Self {
        Self { exit_code, output: output.into() }
    }
}

pub(crate) fn build_renderer(config: &AppConfig, override_path: Option<&Path>) -> SummaryRenderer {
    let path = override_path.unwrap_or(&config.ruleset.path);
    let renderer = SummaryRenderer::from_file(path);

    if let RulesetOrigin::Fallback { path, reason } = renderer.origin() {
        tracing::warn!(
            event_name = "engine.ruleset.fallback",
            path = %path.display(),
            reason = %reason,
            "ruleset failed to load; rendering through the built-in fallback"
        );
    }
    renderer
}

// The demo tab: a bulgogi burger set and a cola, fed through the same
// sentinel pipeline a captured reply would take.
pub(crate) fn seed_demo(session: &mut OrderSession) -> usize {
    let reply = format!(
        "Here is your order!\n\
         {ORDER_MARKER}\nTYPE: set\nSET_TYPE: burger_set\nBURGER: 2\n\
         {ORDER_MARKER}\nTYPE: single\nDRINK: 15"
    );
    session.extract_and_append(&reply)
}

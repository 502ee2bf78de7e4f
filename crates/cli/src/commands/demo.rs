use std::path::PathBuf;

use orderly_core::config::AppConfig;
use orderly_core::OrderSession;

use super::{build_renderer, seed_demo, CommandResult};

pub fn run(config: &AppConfig, ruleset: Option<PathBuf>) -> CommandResult {
    let mut session = OrderSession::new(build_renderer(config, ruleset.as_deref()));
    let added = seed_demo(&mut session);

    let mut output = format!("demo: extracted {added} order(s) from the built-in replies\n\n");
    output.push_str(&session.render_summary());
    CommandResult::success(output)
}

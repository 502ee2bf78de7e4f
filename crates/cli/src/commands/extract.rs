use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use orderly_core::config::AppConfig;
use orderly_core::OrderSession;

use super::{build_renderer, CommandResult};

pub fn run(
    config: &AppConfig,
    input: Option<PathBuf>,
    json: bool,
    quiet: bool,
    ruleset: Option<PathBuf>,
) -> CommandResult {
    let reply = match read_reply(input) {
        Ok(reply) => reply,
        Err(error) => return CommandResult::failure(format!("extract failed: {error:#}"), 2),
    };

    let mut session = OrderSession::new(build_renderer(config, ruleset.as_deref()));
    let processed = session.process_reply(&reply);

    tracing::info!(
        event_name = "cli.extract.completed",
        appended = processed.report.appended,
        skipped = processed.report.skipped.len(),
        "reply scanned"
    );

    if json {
        return CommandResult::success(session.export_json());
    }

    let mut output = String::new();
    if !quiet {
        if !processed.visible.is_empty() {
            output.push_str(&processed.visible);
            output.push_str("\n\n");
        }
        for reason in &processed.report.skipped {
            output.push_str(&format!("(section skipped: {reason})\n"));
        }
        if !processed.report.skipped.is_empty() {
            output.push('\n');
        }
    }
    output.push_str(&session.render_summary());

    CommandResult::success(output)
}

fn read_reply(input: Option<PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("could not read reply from `{}`", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read reply from stdin")?;
            Ok(buffer)
        }
    }
}

use std::io::{self, BufRead};
use std::path::PathBuf;

use orderly_core::config::AppConfig;
use orderly_core::OrderSession;

use super::{build_renderer, seed_demo, CommandResult};

pub fn run(config: &AppConfig, ruleset: Option<PathBuf>) -> CommandResult {
    let mut session = OrderSession::new(build_renderer(config, ruleset.as_deref()));
    let mut buffer = String::new();

    println!("orderly repl: paste a reply and finish it with an empty line.");
    println!("commands: orders  json  clear  demo  exit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => return CommandResult::failure(format!("stdin read failed: {error}"), 2),
        };

        match line.trim().to_ascii_lowercase().as_str() {
            "exit" | "quit" => break,
            "orders" => {
                flush(&mut session, &mut buffer);
                println!("{}", session.render_summary());
            }
            "json" => {
                flush(&mut session, &mut buffer);
                println!("{}", session.export_json());
            }
            "clear" => {
                buffer.clear();
                session.clear();
                println!("tab cleared");
            }
            "demo" => {
                flush(&mut session, &mut buffer);
                let added = seed_demo(&mut session);
                println!("added {added} demo order(s)");
            }
            "" => flush(&mut session, &mut buffer),
            _ => {
                buffer.push_str(&line);
                buffer.push('\n');
            }
        }
    }
    flush(&mut session, &mut buffer);

    CommandResult::success(format!(
        "session ended with {} order(s) on the tab",
        session.orders().len()
    ))
}

// A pending paste is processed when an empty line (or a command) ends it.
fn flush(session: &mut OrderSession, buffer: &mut String) {
    if buffer.trim().is_empty() {
        buffer.clear();
        return;
    }

    let processed = session.process_reply(buffer);
    buffer.clear();

    if !processed.visible.is_empty() {
        println!("{}", processed.visible);
    }
    for reason in &processed.report.skipped {
        println!("(section skipped: {reason})");
    }
    if processed.report.appended > 0 {
        println!(
            "[{} order(s) added; {} on the tab]",
            processed.report.appended,
            session.orders().len()
        );
    }
}

pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use orderly_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "orderly",
    about = "Orderly operator CLI",
    long_about = "Extract structured orders from captured assistant replies, render order summaries, and validate formatting rulesets.",
    after_help = "Examples:\n  orderly extract --input reply.txt\n  orderly extract --json < reply.txt\n  orderly ruleset\n  orderly repl"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Extract orders from one captured reply and print the running summary")]
    Extract {
        #[arg(long, help = "Read the reply from this file instead of stdin")]
        input: Option<PathBuf>,
        #[arg(long, help = "Emit the machine-readable order export instead of the summary")]
        json: bool,
        #[arg(long, help = "Print only the summary, without the visible reply or skip notes")]
        quiet: bool,
        #[arg(long, help = "Formatting ruleset path (overrides the configured one)")]
        ruleset: Option<PathBuf>,
    },
    #[command(about = "Interactive session: paste replies, inspect and clear the running tab")]
    Repl {
        #[arg(long, help = "Formatting ruleset path (overrides the configured one)")]
        ruleset: Option<PathBuf>,
    },
    #[command(about = "Validate a formatting ruleset and report which order shapes it covers")]
    Ruleset {
        #[arg(long, help = "Ruleset path to validate (defaults to the configured one)")]
        path: Option<PathBuf>,
    },
    #[command(about = "Run the built-in demo replies through the engine and print the summary")]
    Demo {
        #[arg(long, help = "Formatting ruleset path (overrides the configured one)")]
        ruleset: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Extract { input, json, quiet, ruleset } => {
            commands::extract::run(&config, input, json, quiet, ruleset)
        }
        Command::Repl { ruleset } => commands::repl::run(&config, ruleset),
        Command::Ruleset { path } => commands::ruleset::run(&config, path),
        Command::Demo { ruleset } => commands::demo::run(&config, ruleset),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(config: &AppConfig) {
    use orderly_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

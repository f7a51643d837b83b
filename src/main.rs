use anyhow::Context;
use clap::Parser;
use std::io::Read;
use tracing::info;

use cipherscope::analysis;
use cipherscope::cipher;
use cipherscope::cli::{Cli, Command};
use cipherscope::config::Config;
use cipherscope::logging;
use cipherscope::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            logging::init_file_tracing();
            let config = Config::load().context("failed to load configuration")?;
            info!("starting terminal UI");
            ui::run(config).context("terminal UI failed")?;
        }
        Some(command) => {
            logging::init_stderr_tracing();
            run_command(command)?;
        }
    }

    Ok(())
}

fn run_command(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Encrypt { shift, text } => {
            let text = resolve_text(text)?;
            println!("{}", cipher::encrypt(&text, shift));
        }
        Command::Decrypt { shift, text } => {
            let text = resolve_text(text)?;
            println!("{}", cipher::decrypt(&text, shift));
        }
        Command::Crack { all, text } => {
            let text = resolve_text(text)?;
            anyhow::ensure!(
                analysis::has_letters(&text),
                "input must contain at least one letter"
            );
            let report = analysis::crack(&text);
            print_report(&report, all);
        }
    }
    Ok(())
}

/// Text from the positional argument, or from stdin when it was omitted.
/// A single trailing newline from piped input is stripped.
fn resolve_text(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            if buffer.ends_with('\n') {
                buffer.pop();
                if buffer.ends_with('\r') {
                    buffer.pop();
                }
            }
            Ok(buffer)
        }
    }
}

fn print_report(report: &analysis::CrackReport, all: bool) {
    if !report.is_confident() {
        println!("No candidate passed the word check; highest-confidence guess:");
    }

    let candidates: &[analysis::ShiftCandidate] = if all {
        &report.candidates
    } else {
        std::slice::from_ref(report.best())
    };

    for candidate in candidates {
        let marker = if candidate.dictionary_hit { "*" } else { " " };
        println!(
            "shift {:>2}  score {:>5.1} {} {}",
            candidate.shift, candidate.score, marker, candidate.plaintext
        );
    }
}

//! Sextant CLI - project metrics from playground state documents.

use clap::Parser;
use sextant::cli::{Cli, Commands};
use sextant::{commands, guard};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let human = cli.human_readable;

    let result = match cli.command {
        None => run_report(cli.root, human),
        Some(Commands::Report { root }) => run_report(root, human),
        Some(Commands::Guard { root }) => run_guard(root),
    };

    if let Err(e) = result {
        if human {
            eprintln!("Error: {e}");
        } else {
            eprintln!(r#"{{"error": "{e}"}}"#);
        }
        process::exit(1);
    }
}

/// Produce the metrics report on stdout. Succeeds even when every source
/// document is absent; only an unreadable document is fatal.
fn run_report(root: Option<PathBuf>, human: bool) -> sextant::Result<()> {
    let root = root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let report = commands::report(&root)?;
    if human {
        print!("{}", commands::render_human(&report));
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Hook mode: decide on a pending write and exit 1 to block it.
///
/// A missing or unparsable target means the pending operation is not a
/// file write, so it is allowed without an audit line.
fn run_guard(root: Option<PathBuf>) -> sextant::Result<()> {
    let root = root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let Some(target) = guard::resolve_target(&mut std::io::stdin()) else {
        return Ok(());
    };

    if guard::check_and_log(&root, &target) == guard::Decision::Block {
        eprintln!("{}", guard::block_message(&target));
        process::exit(1);
    }
    Ok(())
}

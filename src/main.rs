use std::path::Path;

use clap::Parser;
use tally::cli::commands::Cli;
use tally::cli::handlers;
use tally::io::store;

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Debug logging goes to a file so it never fights the terminal UI.
    if let Ok(log_path) = std::env::var("TALLY_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let dir = store::data_dir(cli.dir.as_deref().map(Path::new));
            if let Err(e) = tally::tui::run(&dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

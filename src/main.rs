use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomatui::cli::args::{Cli, Commands};
use tomatui::cli::commands;
use tomatui::config::Config;
use tomatui::error::TomatuiError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomatuiError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let config = Config::load()?;
            tomatui::tui::run(&config)?;
            String::new()
        }
        Commands::Add { text } => commands::add(&text, format)?,
        Commands::List { filter } => commands::list(filter, format)?,
        Commands::Toggle { id } => commands::toggle(id, format)?,
        Commands::Delete { id } => commands::delete(id, format)?,
        Commands::ClearCompleted => commands::clear_completed(format)?,
        Commands::Config {
            work,
            break_minutes,
            notifications,
        } => commands::config(work, break_minutes, notifications, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

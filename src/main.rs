use anyhow::{Context, Result};
use api_client::ApiClient;
use args::{Args, Command};
use clap::Parser;
use colored::Colorize;
use dialoguer::Password;
use runner::{ListOutcome, Runner};
use std::io;

mod api_client;
mod args;
mod config;
mod error;
mod logging;
mod runner;
mod ticket;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match &args.command {
        Command::Setup { token } => setup(&args, token.clone()),
        Command::List => list(&args),
        Command::Other(words) => {
            let name = words.first().map(String::as_str).unwrap_or_default();
            println!("Command '{name}' is not implemented yet.");
            Ok(())
        }
    }
}

fn setup(args: &Args, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Token")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read token")?,
    };

    config::save(&args.config, &token)
        .with_context(|| format!("Failed to write {}", args.config.display()))?;
    println!("{} Setup complete!", "✅".green());
    Ok(())
}

fn list(args: &Args) -> Result<()> {
    let stored = config::load(&args.config)?;
    let client = ApiClient::new(&args.base_url, &stored.token)?;

    match Runner::new(client, io::stdout().lock()).list_tickets()? {
        ListOutcome::Listed { count } => log::info!("Listed {count} tickets"),
        ListOutcome::Fallback => log::info!("Listed tickets from the alternative path"),
    }
    Ok(())
}

use crate::{api_client::DEFAULT_BASE_URL, config::DEFAULT_CONFIG_FILE};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ticketforge", version, about = "List your TicketForge tickets")]
pub struct Args {
    /// Token file written by `setup`.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[arg(short, long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Repeat for more detailed logs.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Store the Basic Auth token, prompting for it when omitted.
    Setup { token: Option<String> },
    /// Fetch and print your tickets.
    List,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_setup_with_token() {
        let args = Args::try_parse_from(["ticketforge", "setup", "Basic XYZ "]).unwrap();
        assert_eq!(
            args.command,
            Command::Setup {
                token: Some("Basic XYZ ".to_string())
            }
        );
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn parses_setup_without_token() {
        let args = Args::try_parse_from(["ticketforge", "setup"]).unwrap();
        assert_eq!(args.command, Command::Setup { token: None });
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args =
            Args::try_parse_from(["ticketforge", "list", "-vv", "--config", "/tmp/t.json"]).unwrap();
        assert_eq!(args.command, Command::List);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, PathBuf::from("/tmp/t.json"));
    }

    #[test]
    fn unknown_commands_are_captured() {
        let args = Args::try_parse_from(["ticketforge", "create", "--title", "x"]).unwrap();
        assert_eq!(
            args.command,
            Command::Other(vec!["create".into(), "--title".into(), "x".into()])
        );
    }
}

//! CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::variants::version;

/// Command-line client for a blockchain node
#[derive(Parser, Debug)]
#[command(name = "chaincli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (repeat for more detail)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Version information
    Version {
        #[command(subcommand)]
        command: VersionCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// Retrieve version information of the client
    #[command(long_about = version::USAGE)]
    Client(RequestArgs),
}

/// Request flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Supply the request directly as raw JSON text
    #[arg(short = 'j', long = "json", value_name = "JSON")]
    pub json: Option<String>,

    /// Dump the full response tree instead of formatted output
    #[arg(long)]
    pub raw: bool,

    /// Print a self-contained usage example and exit
    #[arg(long)]
    pub example: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_request_flags_parse() {
        let cli = Cli::try_parse_from([
            "chaincli", "version", "client", "-j", "{}", "--raw",
        ])
        .unwrap();
        let Some(Commands::Version {
            command: VersionCommands::Client(args),
        }) = cli.command
        else {
            panic!("expected version client");
        };
        assert_eq!(args.json.as_deref(), Some("{}"));
        assert!(args.raw);
        assert!(!args.example);
    }

    #[test]
    fn test_help_short_circuits_parsing() {
        let err = Cli::try_parse_from(["chaincli", "version", "client", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        // The rendered help carries the variant's usage text verbatim.
        assert!(err.to_string().contains("Usage: chaincli version client"));
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err =
            Cli::try_parse_from(["chaincli", "version", "client", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}

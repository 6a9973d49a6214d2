//! Maps parsed CLI subcommands onto registry variants and runs them.

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, RequestArgs, VersionCommands};
use crate::cli::output;
use crate::config::ClientConfig;
use crate::errors::{CommandError, CommandResult};
use crate::registry::{invoke, ParsedOptions, Registry};
use crate::variants::version;

impl From<&RequestArgs> for ParsedOptions {
    fn from(args: &RequestArgs) -> Self {
        Self {
            json: args.json.clone(),
            raw: args.raw,
        }
    }
}

pub fn execute_command(cli: &Cli, registry: &Registry, config: &ClientConfig) -> CommandResult<()> {
    match &cli.command {
        Some(Commands::Version {
            command: VersionCommands::Client(args),
        }) => run_variant(version::NAME, args, registry, config),
        None => Ok(()),
    }
}

#[instrument(skip(registry, config))]
fn run_variant(
    name: &str,
    args: &RequestArgs,
    registry: &Registry,
    config: &ClientConfig,
) -> CommandResult<()> {
    let variant = registry
        .get(name)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

    if args.example {
        output::info(&variant.example_text()?);
        return Ok(());
    }

    let opts = ParsedOptions::from(args);
    debug!(?opts, "invoking");
    match invoke(variant, &opts, config) {
        Ok(text) => {
            output::info(&text);
            Ok(())
        }
        Err(e) => {
            // A request that cannot be built gets the friendly usage text;
            // execution failures propagate as raw errors.
            if matches!(e, CommandError::RequestBuild(_)) {
                output::info(variant.usage);
            }
            Err(e)
        }
    }
}

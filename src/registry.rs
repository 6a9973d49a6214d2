//! Command variant records and the name-based dispatch registry.
//!
//! Each subcommand is a [`CommandVariant`]: a record of pure handlers plus
//! static usage text and canned example data. The registry maps operation
//! names (`"version client"`) to their variants and is built once at
//! startup; dispatch is a plain lookup, no virtual hierarchy.

use std::collections::HashMap;

use tracing::debug;

use crate::command::Command;
use crate::config::ClientConfig;
use crate::errors::CommandResult;
use crate::tree::{Request, Response};

/// Parsed per-request CLI flags handed to `build_request`.
///
/// `json` carries the `-j` blob, which supplies the request directly and
/// bypasses flag-specific construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOptions {
    pub json: Option<String>,
    pub raw: bool,
}

/// Build a request from parsed flags. Must be a pure function of its input:
/// the same options always yield the identical request.
pub type BuildRequestFn = fn(&ParsedOptions) -> CommandResult<Request>;

/// Perform the operation's work synchronously; the returned response is
/// complete, never partial.
pub type ExecuteFn = fn(&ClientConfig, &Request) -> CommandResult<Response>;

/// Render the human-readable line(s) for a response. Must only read keys
/// the variant's own `execute` populates.
pub type RenderFn = fn(&Command) -> CommandResult<String>;

/// One subcommand: name, self-documentation, and its three handlers.
pub struct CommandVariant {
    pub name: &'static str,
    pub usage: &'static str,
    pub build_request: BuildRequestFn,
    pub execute: ExecuteFn,
    pub render: RenderFn,
    pub example: Example,
}

/// Canned, self-contained example data for a variant.
///
/// The example pins its own illustrative config so the expected outputs are
/// static data; tests verify them byte-for-byte against the real pipeline.
/// Never used for functional execution.
pub struct Example {
    /// The literal invocation line shown to the user.
    pub invocation: &'static str,
    pub product: &'static str,
    pub major: u32,
    pub minor: u32,
    /// Canned request blob, as a `-j` value.
    pub request_json: &'static str,
    /// Expected formatted output for the canned config and request.
    pub formatted: &'static str,
    /// Expected raw response dump for the canned config and request.
    pub raw: &'static str,
}

impl Example {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.product, self.major, self.minor)
    }
}

impl CommandVariant {
    /// Render the variant's example: the invocation line, then the formatted
    /// and raw output produced by running the real build→execute→render
    /// pipeline against the canned input.
    pub fn example_text(&self) -> CommandResult<String> {
        let config = self.example.config();
        let opts = ParsedOptions {
            json: Some(self.example.request_json.to_string()),
            raw: false,
        };
        let request = (self.build_request)(&opts)?;
        let command = Command::run(self, &config, request, false)?;
        let formatted = (self.render)(&command)?;
        let raw = command.raw_text();
        Ok(format!(
            "$ {}\n{}\n{}",
            self.example.invocation, formatted, raw
        ))
    }
}

/// Name → variant lookup table, built once at process start.
pub struct Registry {
    variants: HashMap<&'static str, CommandVariant>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// All shipped command variants.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(crate::variants::version::variant());
        registry
    }

    pub fn register(&mut self, variant: CommandVariant) {
        debug!(command = variant.name, "registering");
        self.variants.insert(variant.name, variant);
    }

    pub fn get(&self, name: &str) -> Option<&CommandVariant> {
        self.variants.get(name)
    }

    /// Registered operation names, sorted for stable listings.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.variants.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Run one invocation against a variant: build the request, execute the
/// command, then either dump the raw response or render it.
///
/// A request-build failure returns before any command is constructed; the
/// caller shows the variant's usage text and exits 1.
pub fn invoke(
    variant: &CommandVariant,
    opts: &ParsedOptions,
    config: &ClientConfig,
) -> CommandResult<String> {
    let request = (variant.build_request)(opts)?;
    let command = Command::run(variant, config, request, opts.raw)?;
    if command.is_raw() {
        Ok(command.raw_text())
    } else {
        (variant.render)(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_resolves_version_client() {
        let registry = Registry::builtin();
        assert!(registry.get("version client").is_some());
        assert_eq!(registry.names(), vec!["version client"]);
    }

    #[test]
    fn test_unknown_name_is_not_resolved() {
        let registry = Registry::builtin();
        assert!(registry.get("version daemon").is_none());
    }
}

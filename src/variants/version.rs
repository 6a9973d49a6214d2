//! `version client`: report the client's own version.
//!
//! The trivial, always-succeeding case of the command contract: no I/O, the
//! request is validated but otherwise ignored, and the response carries a
//! single `version` key.

use crate::config::ClientConfig;
use crate::errors::CommandResult;
use crate::registry::{CommandVariant, Example, ParsedOptions};
use crate::tree::{Request, Response};
use crate::Command;

pub const NAME: &str = "version client";

pub const USAGE: &str = "\
Retrieve version information of the client
Usage: chaincli version client [OPTIONS]
Usage: chaincli version client [-j '{}'] [OPTIONS]
";

pub fn variant() -> CommandVariant {
    CommandVariant {
        name: NAME,
        usage: USAGE,
        build_request,
        execute,
        render,
        example: Example {
            invocation: "chaincli version client -j '{}'",
            product: "chaincli",
            major: 0,
            minor: 1,
            request_json: "{}",
            formatted: "Version chaincli 0.1",
            raw: r#"{"version":"chaincli 0.1"}"#,
        },
    }
}

/// A supplied `-j` blob is parsed for validity but its content is ignored;
/// without one the request is empty.
fn build_request(opts: &ParsedOptions) -> CommandResult<Request> {
    match &opts.json {
        Some(text) => Request::from_json_text(text),
        None => Ok(Request::new()),
    }
}

fn execute(config: &ClientConfig, _request: &Request) -> CommandResult<Response> {
    let mut response = Response::new();
    response.put("version", config.version_label());
    Ok(response)
}

fn render(command: &Command) -> CommandResult<String> {
    Ok(format!("Version {}", command.str_field("version")?))
}

//! chaincli: a command-line client harness for a blockchain node.
//!
//! The interesting machinery is the harness, not any one subcommand: every
//! operation is a [`registry::CommandVariant`] record of pure handlers
//! (`build_request`, `execute`, `render`) plus static usage text and canned
//! example data. An invocation builds an ordered [`tree::Request`], runs a
//! [`command::Command`] synchronously, and prints either the raw response
//! dump or the variant's formatted rendering.

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod registry;
pub mod tree;
pub mod util;
pub mod variants;

pub use command::Command;
pub use config::ClientConfig;
pub use errors::{CommandError, CommandResult};
pub use registry::{invoke, CommandVariant, Example, ParsedOptions, Registry};
pub use tree::{Request, Response, Tree};

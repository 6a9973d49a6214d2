//! A command binds one operation name to one request, executes exactly once,
//! and holds the resulting response.

use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::CommandResult;
use crate::registry::CommandVariant;
use crate::tree::{Request, Response};

/// One bound, already-executed invocation of a command variant.
///
/// Execution happens synchronously inside [`Command::run`]: on success the
/// response is fully populated before the value exists, so no partial
/// response is ever observable. The request and response are immutable
/// afterwards.
#[derive(Debug)]
pub struct Command {
    name: &'static str,
    request: Request,
    response: Response,
    raw: bool,
}

impl Command {
    /// Execute `variant` against `request` and bind the result.
    ///
    /// An execution failure propagates uncaught; the harness never retries.
    pub fn run(
        variant: &CommandVariant,
        config: &ClientConfig,
        request: Request,
        raw: bool,
    ) -> CommandResult<Self> {
        debug!(command = variant.name, raw, "executing");
        let response = (variant.execute)(config, &request)?;
        Ok(Self {
            name: variant.name,
            request,
            response,
            raw,
        })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// String field of the response, `MissingField` if the variant never
    /// populated it.
    pub fn str_field(&self, key: &str) -> CommandResult<&str> {
        self.response.get_str(key)
    }

    /// Verbatim compact dump of the whole response tree; identical in shape
    /// for every variant. This is the raw output path.
    pub fn raw_text(&self) -> String {
        self.response.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CommandError;
    use crate::registry::ParsedOptions;
    use crate::variants;

    fn canned_config() -> ClientConfig {
        ClientConfig::new("chaincli", 0, 1)
    }

    #[test]
    fn test_run_populates_response_before_returning() {
        let variant = variants::version::variant();
        let opts = ParsedOptions::default();
        let request = (variant.build_request)(&opts).unwrap();
        let command = Command::run(&variant, &canned_config(), request, false).unwrap();
        assert_eq!(command.name(), "version client");
        assert!(command.request().is_empty());
        assert_eq!(command.response().len(), 1);
        assert_eq!(command.str_field("version").unwrap(), "chaincli 0.1");
    }

    #[test]
    fn test_str_field_unpopulated_key_fails_loudly() {
        let variant = variants::version::variant();
        let request = (variant.build_request)(&ParsedOptions::default()).unwrap();
        let command = Command::run(&variant, &canned_config(), request, false).unwrap();
        let err = command.str_field("head_block_num").unwrap_err();
        assert!(matches!(err, CommandError::MissingField(_)));
    }

    #[test]
    fn test_raw_text_dumps_whole_response() {
        let variant = variants::version::variant();
        let request = (variant.build_request)(&ParsedOptions::default()).unwrap();
        let command = Command::run(&variant, &canned_config(), request, true).unwrap();
        assert!(command.is_raw());
        assert_eq!(command.raw_text(), r#"{"version":"chaincli 0.1"}"#);
    }
}

//! Client version configuration.
//!
//! Built once at process start and passed into command execution; commands
//! never read version information from ambient global state.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    pub product: String,
    pub major: u32,
    pub minor: u32,
}

impl ClientConfig {
    pub fn new(product: impl Into<String>, major: u32, minor: u32) -> Self {
        Self {
            product: product.into(),
            major,
            minor,
        }
    }

    /// Configuration baked from the crate's own package metadata.
    pub fn from_build() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
        )
    }

    /// `<product> <major>.<minor>`, the value reported by the version command.
    pub fn version_label(&self) -> String {
        format!("{} {}.{}", self.product, self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label_format() {
        let config = ClientConfig::new("chaincli", 1, 4);
        assert_eq!(config.version_label(), "chaincli 1.4");
    }

    #[test]
    fn test_from_build_uses_package_metadata() {
        let config = ClientConfig::from_build();
        assert_eq!(config.product, "chaincli");
        assert_eq!(
            config.version_label(),
            format!("chaincli {}.{}", config.major, config.minor)
        );
    }
}

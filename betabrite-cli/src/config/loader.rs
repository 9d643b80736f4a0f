//! Configuration file loading
//!
//! An explicit `--config` path must exist. Without one, `betabrite.toml` in
//! the working directory is used if present, and the embedded defaults
//! otherwise.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use super::{Config, ConfigError};

/// File looked for when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "betabrite.toml";

/// Default configuration compiled into the binary
const EMBEDDED_CONFIG: &str = include_str!("../../betabrite.toml");

/// Parse TOML text into a [`Config`]
pub fn parse_config(input: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(input)?)
}

/// Load the configuration for this run
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    match fs::read_to_string(path) {
        Ok(content) => {
            info!("loaded configuration from {}", path.display());
            parse_config(&content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!("{} not found, using embedded defaults", path.display());
            parse_config(EMBEDDED_CONFIG)
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Charset, LinkKind};

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(parse_config(EMBEDDED_CONFIG).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config("[sign]\ncharset = \"extended\"\n").unwrap();
        assert_eq!(config.sign.charset, Charset::Extended);
        assert_eq!(config.sign.address, "00");
        assert_eq!(config.link.kind, LinkKind::Usb);
    }

    #[test]
    fn test_serial_link() {
        let config = parse_config(
            "[link]\nkind = \"serial\"\npath = \"/dev/ttyS0\"\ninter_byte_delay_us = 500\n",
        )
        .unwrap();
        assert_eq!(config.link.kind, LinkKind::Serial);
        assert_eq!(config.link.path.as_deref(), Some(Path::new("/dev/ttyS0")));
        assert_eq!(config.link.inter_byte_delay_us, 500);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(
            parse_config("[sign]\ncolour = \"red\"\n"),
            Err(ConfigError::TomlParse(_))
        ));
        assert!(parse_config("[link]\nkind = \"bluetooth\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/betabrite.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

//! Configuration loading and resolution
//!
//! Settings come from `betabrite.toml` (or the embedded defaults) and are
//! then overridden by command line options. Everything is validated here,
//! before any command is encoded.

pub mod loader;

use std::path::PathBuf;

use betabrite_hal::LinkConfig;
use betabrite_hal_usb::{DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID};
use betabrite_protocol::{Address, EncodeError, SignType};
use serde::Deserialize;
use thiserror::Error;

pub use loader::load_config;

/// Default gap between bytes, matching `DEFAULT_INTER_BYTE_DELAY`
pub const DEFAULT_INTER_BYTE_DELAY_US: u64 = 1000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid sign address: {0}")]
    Address(EncodeError),

    #[error("invalid sign type: {0}")]
    SignType(EncodeError),

    #[error("link kind \"serial\" needs a path")]
    MissingSerialPath,
}

/// Text transcoding applied to message literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    #[default]
    Utf8,
    Extended,
}

/// Physical link type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[default]
    Usb,
    Serial,
    Stdout,
}

/// `[sign]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignSection {
    pub address: String,
    pub sign_type: String,
    pub charset: Charset,
}

impl Default for SignSection {
    fn default() -> Self {
        Self {
            address: "00".into(),
            sign_type: "all".into(),
            charset: Charset::Utf8,
        }
    }
}

/// `[link]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkSection {
    pub kind: LinkKind,
    pub vendor_id: u16,
    pub product_id: u16,
    pub path: Option<PathBuf>,
    pub inter_byte_delay_us: u64,
}

impl Default for LinkSection {
    fn default() -> Self {
        Self {
            kind: LinkKind::Usb,
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            path: None,
            inter_byte_delay_us: DEFAULT_INTER_BYTE_DELAY_US,
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sign: SignSection,
    pub link: LinkSection,
}

/// Command line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub sign_type: Option<String>,
    pub delay_us: Option<u64>,
}

/// Where frames go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Usb { vendor_id: u16, product_id: u16 },
    Serial(PathBuf),
    Stdout,
}

/// Validated settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub address: Address,
    pub sign_type: SignType,
    pub charset: Charset,
    pub target: LinkTarget,
    pub pacing: LinkConfig,
}

impl Config {
    /// Apply overrides and validate
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings, ConfigError> {
        let address = overrides.address.as_deref().unwrap_or(&self.sign.address);
        let address = Address::parse(address).map_err(ConfigError::Address)?;

        let sign_type = overrides
            .sign_type
            .as_deref()
            .unwrap_or(&self.sign.sign_type);
        let sign_type = SignType::parse(sign_type).map_err(ConfigError::SignType)?;

        let target = match self.link.kind {
            LinkKind::Usb => LinkTarget::Usb {
                vendor_id: self.link.vendor_id,
                product_id: self.link.product_id,
            },
            LinkKind::Serial => LinkTarget::Serial(
                self.link
                    .path
                    .clone()
                    .ok_or(ConfigError::MissingSerialPath)?,
            ),
            LinkKind::Stdout => LinkTarget::Stdout,
        };

        let delay_us = overrides.delay_us.unwrap_or(self.link.inter_byte_delay_us);

        Ok(Settings {
            address,
            sign_type,
            charset: self.sign.charset,
            target,
            pacing: LinkConfig::with_delay_us(delay_us),
        })
    }
}

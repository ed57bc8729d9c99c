//! Static configuration surface for the hub.
//!
//! A list of (name, fan_id, variant) declarations supplied before startup.
//! Parsing a config file is the host's job; this module only defines the
//! shape, the validation rules, and a JSON helper for hosts that already
//! hold the document as a string.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::protocol::frame::FAN_ID_BITS;

/// One declared fan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanDecl {
    /// Unique entity name; also the send-path lookup key.
    pub name: String,
    /// Device address: exactly 5 characters of '0'/'1'. Anything else
    /// cannot round-trip through the decode heuristic's fixed-width
    /// rendering.
    pub fan_id: String,
    /// Framing variant. Defaults to the 7-bit scheme.
    #[serde(default)]
    pub is_24_bit: bool,
}

/// The hub's static configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    pub fans: Vec<FanDecl>,
}

/// A config field failed validation. The message names the rule broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError(pub &'static str);

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "validation failed: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl HubConfig {
    /// Reject declarations that could never round-trip on the air.
    /// Invalid values are errors, not silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for fan in &self.fans {
            if fan.name.is_empty() {
                return Err(ConfigError("fan name must not be empty"));
            }
            if fan.fan_id.len() != FAN_ID_BITS
                || !fan.fan_id.chars().all(|c| c == '0' || c == '1')
            {
                return Err(ConfigError("fan_id must be exactly 5 characters of '0'/'1'"));
            }
        }
        for (i, fan) in self.fans.iter().enumerate() {
            if self.fans[i + 1..].iter().any(|other| other.name == fan.name) {
                return Err(ConfigError("fan names must be unique"));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> anyhow::Result<HubConfig> {
        let config: HubConfig =
            serde_json::from_str(json).context("parsing hub configuration")?;
        config.validate().context("validating hub configuration")?;
        Ok(config)
    }
}

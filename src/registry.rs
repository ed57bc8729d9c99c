//! Static fan configuration and the derived reverse id index.
//!
//! Registrations happen once, during configuration load. The reverse
//! index (fan_id → name) is built exactly once afterwards, before any
//! receive callback can fire — that ordering is the registry's only
//! concurrency contract.

use std::collections::HashMap;

use log::{info, warn};

/// One configured fan: unique human-chosen name, 5-bit device address,
/// and framing variant. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanConfig {
    pub name: String,
    pub fan_id: String,
    pub is_24_bit: bool,
}

/// The configured fan list plus the derived fan_id → name lookup.
#[derive(Debug, Default)]
pub struct FanRegistry {
    configs: Vec<FanConfig>,
    id_to_name: HashMap<String, String>,
}

impl FanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fan. Configuration time only; the reverse index does not
    /// see the entry until [`build_reverse_index`](Self::build_reverse_index).
    pub fn register(&mut self, name: &str, fan_id: &str, is_24_bit: bool) {
        self.configs.push(FanConfig {
            name: name.to_owned(),
            fan_id: fan_id.to_owned(),
            is_24_bit,
        });
    }

    /// Rebuild the fan_id → name index from the config list.
    ///
    /// Full rebuild, never a merge, so calling it again is idempotent.
    /// When two fans share a fan_id the later registration wins; that is
    /// a configuration mistake in practice, so it gets a warning.
    pub fn build_reverse_index(&mut self) {
        self.id_to_name.clear();
        for config in &self.configs {
            if let Some(prev) = self
                .id_to_name
                .insert(config.fan_id.clone(), config.name.clone())
            {
                warn!(
                    "fan id {} reused: '{}' replaces '{}' in the reverse index",
                    config.fan_id, config.name, prev
                );
            }
        }
        info!("fan id lookup built with {} entries", self.id_to_name.len());
    }

    /// Linear scan — the list is small and static.
    pub fn find_by_name(&self, name: &str) -> Option<&FanConfig> {
        self.configs.iter().find(|c| c.name == name)
    }

    pub fn find_name_by_id(&self, fan_id: &str) -> Option<&str> {
        self.id_to_name.get(fan_id).map(String::as_str)
    }

    pub fn configs(&self) -> &[FanConfig] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

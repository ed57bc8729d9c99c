//! Dispatch core — the hub that owns the fan registry, the transmitter
//! binding, and the managed entities.
//!
//! Send path: name → table lookup → frame → pulse synthesis → transmitter,
//! bracketed by the two transmit events. Receive path: protocol gate →
//! decode heuristic → reverse id lookup → entity lookup → variant
//! cross-check → reverse command lookup → entity state change + publish.
//!
//! Both paths run synchronously in the caller's context; every failure is
//! logged, typed, and aborts only that one operation.

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use crate::config::HubConfig;
use crate::error::{ReceiveDiscard, SendError};
use crate::protocol::command::FanCommand;
use crate::protocol::frame::{self, EXPECTED_PROTOCOL};
use crate::protocol::pulse::{self, REPEAT_COUNT};
use crate::protocol::tables::CommandTable;
use crate::registry::FanRegistry;

use super::events::HubEvent;
use super::ports::{EventSink, FanEntity, TransmitterPort};

// ───────────────────────────────────────────────────────────────
// FanHub
// ───────────────────────────────────────────────────────────────

/// The hub orchestrating all configured fans.
///
/// `T` is the bound transmitter, `E` the managed entity type. Both are
/// owned by the hub, which resolves the original design's raw-pointer
/// lifetime questions: validity is guaranteed by construction, and the
/// startup ordering contract (register everything, then [`setup`], then
/// wire receive callbacks) is all that remains.
///
/// [`setup`]: FanHub::setup
pub struct FanHub<T, E> {
    transmitter: Option<T>,
    registry: FanRegistry,
    entities: HashMap<String, E>,
}

impl<T, E> Default for FanHub<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> FanHub<T, E> {
    pub fn new() -> Self {
        Self {
            transmitter: None,
            registry: FanRegistry::new(),
            entities: HashMap::new(),
        }
    }

    /// Register every fan a validated [`HubConfig`] declares.
    pub fn from_config(config: &HubConfig) -> Self {
        let mut hub = Self::new();
        for fan in &config.fans {
            hub.add_fan_config(&fan.name, &fan.fan_id, fan.is_24_bit);
        }
        hub
    }

    pub fn set_transmitter(&mut self, transmitter: T) {
        self.transmitter = Some(transmitter);
    }

    /// Store config data for later use on the send path.
    /// Configuration time only — never call after [`setup`](Self::setup).
    pub fn add_fan_config(&mut self, name: &str, fan_id: &str, is_24_bit: bool) {
        self.registry.register(name, fan_id, is_24_bit);
    }

    /// Attach the managed entity the receive path mutates for `name`.
    pub fn add_managed_fan(&mut self, name: &str, entity: E) {
        debug!("hub is now managing fan entity '{name}'");
        self.entities.insert(name.to_owned(), entity);
    }

    /// One-shot startup: build the reverse id index.
    ///
    /// Must run after all registrations complete and before the receiver
    /// callback is wired up.
    pub fn setup(&mut self) {
        info!("setting up fan hub");
        self.registry.build_reverse_index();
    }

    /// Log a summary of the hub's configuration.
    pub fn dump_config(&self) {
        info!("fan hub:");
        info!("  transmitter bound: {}", self.transmitter.is_some());
        info!("  configured fans ({}):", self.registry.len());
        for config in self.registry.configs() {
            info!(
                "    - name: {}, id: {}, 24-bit: {}",
                config.name, config.fan_id, config.is_24_bit
            );
        }
        info!("  managed fan entities ({}):", self.entities.len());
        for name in self.entities.keys() {
            info!("    - '{name}'");
        }
    }

    pub fn registry(&self) -> &FanRegistry {
        &self.registry
    }

    /// The bound transmitter, if any. Mainly for host introspection and
    /// tests that assert on recorded transmissions.
    pub fn transmitter(&self) -> Option<&T> {
        self.transmitter.as_ref()
    }

    /// Managed entity by name, for hosts that need to hand out references.
    pub fn entity(&self, name: &str) -> Option<&E> {
        self.entities.get(name)
    }
}

impl<T: TransmitterPort, E: FanEntity> FanHub<T, E> {
    // ── Send path ─────────────────────────────────────────────

    /// String-keyed send surface, as used by buttons and host configs
    /// (a direction button calls `send_command(fan, "flip")`).
    pub fn send_command(
        &mut self,
        fan_name: &str,
        command_key: &str,
        sink: &mut impl EventSink,
    ) -> Result<(), SendError> {
        let Some(command) = FanCommand::from_key(command_key) else {
            warn!("unknown command key '{command_key}' requested for fan '{fan_name}'");
            return Err(SendError::UnknownCommand);
        };
        self.send(fan_name, command, sink)
    }

    /// Encode `command` for `fan_name` and transmit it.
    ///
    /// Rejections happen before any pulse is synthesised; a send either
    /// completes in full or leaves the transmitter untouched.
    pub fn send(
        &mut self,
        fan_name: &str,
        command: FanCommand,
        sink: &mut impl EventSink,
    ) -> Result<(), SendError> {
        if self.transmitter.is_none() {
            warn!("transmitter not bound, cannot send '{command}' for fan '{fan_name}'");
            return Err(SendError::TransmitterUnbound);
        }
        let Some(config) = self.registry.find_by_name(fan_name) else {
            warn!("cannot send '{command}': fan '{fan_name}' not found in configuration");
            return Err(SendError::UnknownFan);
        };

        let table = CommandTable::for_variant(config.is_24_bit);
        let frame = frame::full_frame(&config.fan_id, table.bits(command));
        debug!("sending '{command}' to '{fan_name}': bits {frame}");

        let pulses = pulse::encode(&frame);
        let tx = self
            .transmitter
            .as_mut()
            .ok_or(SendError::TransmitterUnbound)?;

        sink.emit(&HubEvent::TransmitBegin);
        tx.transmit(&pulses, REPEAT_COUNT);
        sink.emit(&HubEvent::TransmitEnd);

        debug!("transmission complete for fan '{fan_name}'");
        Ok(())
    }

    // ── Receive path ──────────────────────────────────────────

    /// Entry point for the receiver callback.
    ///
    /// Walks classify → extract → resolve and applies the result to the
    /// managed entity. Every discard is typed; none is fatal.
    pub fn process_rc_switch_code(
        &mut self,
        code: u64,
        protocol: u8,
    ) -> Result<(), ReceiveDiscard> {
        if protocol != EXPECTED_PROTOCOL {
            trace!("ignoring rc-switch code with protocol {protocol} (expected {EXPECTED_PROTOCOL})");
            return Err(ReceiveDiscard::ProtocolMismatch);
        }
        trace!("received rc-switch protocol {protocol}, code {code}");

        let decoded = frame::decode(code);
        debug!(
            "decoded {}-bit frame: fan id {}, command code {}",
            if decoded.is_24_bit { 24 } else { 7 },
            decoded.fan_id,
            decoded.command_code
        );

        let Some(fan_name) = self.registry.find_name_by_id(&decoded.fan_id) else {
            warn!("received command for unknown fan id {}", decoded.fan_id);
            return Err(ReceiveDiscard::UnknownFanId);
        };
        let fan_name = fan_name.to_owned();

        if !self.entities.contains_key(&fan_name) {
            warn!("received command for known fan '{fan_name}', but no entity is managed for it");
            return Err(ReceiveDiscard::UnmanagedFan);
        }

        // A coincidentally-matching code of the wrong width would decode
        // to garbage against the other table; reject it here.
        let variant_matches = self
            .registry
            .find_by_name(&fan_name)
            .is_some_and(|c| c.is_24_bit == decoded.is_24_bit);
        if !variant_matches {
            warn!(
                "received {}-bit code mismatches configured variant for fan '{fan_name}', ignoring",
                if decoded.is_24_bit { 24 } else { 7 }
            );
            return Err(ReceiveDiscard::VariantMismatch);
        }

        let table = CommandTable::for_variant(decoded.is_24_bit);
        let Some(command) = table.reverse_lookup(&decoded.command_code) else {
            warn!(
                "unknown command code {} received for fan '{fan_name}'",
                decoded.command_code
            );
            return Err(ReceiveDiscard::UnknownCommandCode);
        };

        self.apply_received(&fan_name, command)
    }

    /// Translate a received command into entity port calls.
    fn apply_received(&mut self, fan_name: &str, command: FanCommand) -> Result<(), ReceiveDiscard> {
        let Some(entity) = self.entities.get_mut(fan_name) else {
            return Err(ReceiveDiscard::UnmanagedFan);
        };

        let (state, speed) = match command {
            FanCommand::Off => (Some(false), None),
            FanCommand::Flip => {
                // A received flip is an echo of a stateless physical
                // action; only a button press causes one. No state
                // change, no publish.
                debug!("received 'flip' for fan '{fan_name}', no state change");
                return Ok(());
            }
            speed_cmd => (Some(true), speed_cmd.speed()),
        };

        debug!("applying '{command}' to fan '{fan_name}' from received code");
        if let Err(err) = entity.apply(state, speed) {
            warn!("fan '{fan_name}' rejected state change: {err}");
            return Err(ReceiveDiscard::EntityRejected);
        }
        if let Err(err) = entity.publish() {
            warn!("fan '{fan_name}' failed to publish state: {err}");
            return Err(ReceiveDiscard::EntityRejected);
        }
        Ok(())
    }
}

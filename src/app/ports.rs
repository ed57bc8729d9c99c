//! Port traits — the boundary between the dispatch core and the outside
//! world.
//!
//! ```text
//!   Receiver callback ──▶ FanHub ──▶ TransmitterPort
//!                           │  ╰───▶ EventSink
//!                           ╰──────▶ FanEntity
//! ```
//!
//! Radio drivers and entity frameworks implement these traits; the
//! [`FanHub`](super::service::FanHub) consumes them via generics, so the
//! core never touches hardware directly.

use super::events::HubEvent;

// ───────────────────────────────────────────────────────────────
// Transmitter port (driven adapter: domain → radio)
// ───────────────────────────────────────────────────────────────

/// Blocking OOK transmitter.
pub trait TransmitterPort {
    /// Transmit `pulses` (signed mark/space durations in microseconds),
    /// replaying the full sequence `repeats` times. Blocks until the
    /// whole signal has been emitted — callers tolerate the latency, and
    /// the single-threaded host guarantees no concurrent send.
    fn transmit(&mut self, pulses: &[i32], repeats: usize);
}

// ───────────────────────────────────────────────────────────────
// Fan entity port (driven adapter: domain → entity framework)
// ───────────────────────────────────────────────────────────────

/// Capability interface over a managed fan entity.
///
/// Replaces a virtual entity hierarchy: the hub only ever needs to stage
/// an on/off + speed change and ask the entity to publish it. The entity
/// keeps its own prior state; the hub never reads it back.
pub trait FanEntity {
    /// Stage a state change. `None` leaves that dimension untouched.
    /// Speed is a level in `1..=6`.
    fn apply(&mut self, state: Option<bool>, speed: Option<u8>) -> Result<(), EntityError>;

    /// Commit and republish the staged state to the host framework.
    fn publish(&mut self) -> Result<(), EntityError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → side-effect wiring)
// ───────────────────────────────────────────────────────────────

/// The hub emits [`HubEvent`]s through this port. Adapters decide what
/// they trigger — typically RF front-end power sequencing around each
/// transmission.
pub trait EventSink {
    fn emit(&mut self, event: &HubEvent);
}

/// A no-op sink for hosts with nothing wired to the transmit hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &HubEvent) {}
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`FanEntity`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityError {
    /// The entity refused the change; the message names the rule.
    Rejected(&'static str),
    /// The backing framework object is gone or not ready.
    Unavailable,
}

impl core::fmt::Display for EntityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rejected(msg) => write!(f, "rejected: {}", msg),
            Self::Unavailable => write!(f, "entity unavailable"),
        }
    }
}

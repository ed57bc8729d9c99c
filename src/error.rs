//! Error taxonomy for the send and receive paths.
//!
//! Nothing in here is fatal: every variant aborts exactly one operation,
//! gets logged at the call site, and returns control to the caller with
//! zero partial state mutation. All variants are `Copy` so they pass
//! through the dispatch core without allocation.

use core::fmt;

/// Why a send was rejected before any pulse left the transmitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// No transmitter was bound before the send was attempted.
    TransmitterUnbound,
    /// The fan name is not present in the static configuration.
    UnknownFan,
    /// The command key does not name anything in the vocabulary.
    UnknownCommand,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransmitterUnbound => write!(f, "transmitter not bound"),
            Self::UnknownFan => write!(f, "fan not in configuration"),
            Self::UnknownCommand => write!(f, "unknown command key"),
        }
    }
}

/// Why a received code was discarded without touching any fan state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveDiscard {
    /// The rc-switch protocol tag belongs to a different remote family
    /// sharing the receiver. Routine, not logged above trace level.
    ProtocolMismatch,
    /// The decoded fan id is not in the reverse index.
    UnknownFanId,
    /// The fan is configured but no entity was ever registered for it.
    UnmanagedFan,
    /// The width heuristic's classification disagrees with the fan's
    /// configured variant — likely a coincidentally-matching code.
    VariantMismatch,
    /// The command bit pattern matches no table entry.
    UnknownCommandCode,
    /// The entity refused the state change or the publish.
    EntityRejected,
}

impl fmt::Display for ReceiveDiscard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProtocolMismatch => write!(f, "protocol tag mismatch"),
            Self::UnknownFanId => write!(f, "unknown fan id"),
            Self::UnmanagedFan => write!(f, "no managed entity for fan"),
            Self::VariantMismatch => write!(f, "variant mismatch"),
            Self::UnknownCommandCode => write!(f, "unknown command code"),
            Self::EntityRejected => write!(f, "entity rejected state change"),
        }
    }
}

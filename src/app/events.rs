//! Outbound hub events.
//!
//! Emitted through the [`EventSink`](super::ports::EventSink) port around
//! each transmission. They carry no payload by design — they exist for
//! external side-effect wiring such as toggling an auxiliary radio-enable
//! line before and after the blocking transmit.

/// Notification hooks fired by the dispatch core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEvent {
    /// Fired immediately before the blocking transmit call.
    TransmitBegin,
    /// Fired after the transmit call returns.
    TransmitEnd,
}

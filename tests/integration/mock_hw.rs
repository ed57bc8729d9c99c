//! Mock transmitter, fan entity, and event sink for integration tests.
//!
//! Every port call is recorded so tests can assert on the full history
//! without touching real radio or entity frameworks.

use swingfans::app::events::HubEvent;
use swingfans::app::ports::{EntityError, EventSink, FanEntity, TransmitterPort};

// ── MockTransmitter ───────────────────────────────────────────

#[derive(Default)]
pub struct MockTransmitter {
    /// One entry per transmit call: (pulse sequence, repeat count).
    pub sends: Vec<(Vec<i32>, usize)>,
}

impl MockTransmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransmitterPort for MockTransmitter {
    fn transmit(&mut self, pulses: &[i32], repeats: usize) {
        self.sends.push((pulses.to_vec(), repeats));
    }
}

// ── MockFan ───────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockFan {
    pub state: bool,
    pub speed: u8,
    pub applies: usize,
    pub publishes: usize,
    /// When set, `apply` refuses every change.
    pub reject: bool,
}

impl MockFan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FanEntity for MockFan {
    fn apply(&mut self, state: Option<bool>, speed: Option<u8>) -> Result<(), EntityError> {
        if self.reject {
            return Err(EntityError::Rejected("mock refuses all changes"));
        }
        self.applies += 1;
        if let Some(s) = state {
            self.state = s;
        }
        if let Some(level) = speed {
            self.speed = level;
        }
        Ok(())
    }

    fn publish(&mut self) -> Result<(), EntityError> {
        self.publishes += 1;
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<HubEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &HubEvent) {
        self.events.push(*event);
    }
}

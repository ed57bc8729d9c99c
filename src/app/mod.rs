//! Application core — dispatch logic, zero I/O.
//!
//! The [`service::FanHub`] orchestrates the send path (name → code →
//! pulses → transmitter) and the receive path (code → fan id → entity
//! state). All interaction with radios and fan entities happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without hardware.

pub mod events;
pub mod ports;
pub mod service;

//! RF protocol codec — pure logic, zero I/O.
//!
//! Everything needed to turn a command intent into the pulse train a
//! 433MHz OOK transmitter replays, and to turn a receiver-captured
//! numeric code back into fan-id and command fields:
//!
//! - [`command`] — the closed command vocabulary shared by both variants.
//! - [`tables`] — per-variant command-to-bit-string tables.
//! - [`pulse`] — mark/space pulse synthesis from a bit string.
//! - [`frame`] — width heuristic, bitwise inversion, field extraction.
//!
//! The two framing variants share a 5-bit fan-id prefix and differ only
//! in command-field width (7 vs 19 bits).

pub mod command;
pub mod frame;
pub mod pulse;
pub mod tables;

pub use command::FanCommand;
pub use frame::DecodedFrame;
pub use pulse::PulseSequence;
pub use tables::CommandTable;

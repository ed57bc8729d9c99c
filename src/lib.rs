//! Swing-fan RF hub library.
//!
//! Drives RF-remote-controlled ceiling fans over a 433MHz OOK link:
//! command intents become pulse-timed bit streams on the way out, and
//! receiver-captured codes are decoded, matched against the configured
//! fan identities, and applied to managed fan entities on the way in.
//!
//! Radio drivers and entity frameworks live outside this crate and plug
//! in through the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;

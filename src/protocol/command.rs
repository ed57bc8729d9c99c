//! The command vocabulary a swing-fan remote can express.
//!
//! Eight commands, identical across both framing variants; only the bit
//! encodings differ (see [`tables`](super::tables)). The string keys are
//! the external surface — they are what configurations and buttons use.

use core::fmt;

/// A single remote-control command.
///
/// The discriminant doubles as the row index into a
/// [`CommandTable`](super::tables::CommandTable), so the variant order
/// here must match the table entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FanCommand {
    Off,
    Speed1,
    Speed2,
    Speed3,
    Speed4,
    Speed5,
    Speed6,
    /// Direction reversal. Stateless on the fan side — the motor toggles,
    /// no speed or on/off state is involved.
    Flip,
}

impl FanCommand {
    /// Every command, in table order.
    pub const ALL: [FanCommand; 8] = [
        FanCommand::Off,
        FanCommand::Speed1,
        FanCommand::Speed2,
        FanCommand::Speed3,
        FanCommand::Speed4,
        FanCommand::Speed5,
        FanCommand::Speed6,
        FanCommand::Flip,
    ];

    /// The configuration/log key for this command.
    pub const fn key(self) -> &'static str {
        match self {
            FanCommand::Off => "off",
            FanCommand::Speed1 => "speed_1",
            FanCommand::Speed2 => "speed_2",
            FanCommand::Speed3 => "speed_3",
            FanCommand::Speed4 => "speed_4",
            FanCommand::Speed5 => "speed_5",
            FanCommand::Speed6 => "speed_6",
            FanCommand::Flip => "flip",
        }
    }

    /// Parse a configuration key. `None` for anything outside the vocabulary.
    pub fn from_key(key: &str) -> Option<FanCommand> {
        FanCommand::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Target speed level for the speed commands, `None` for off/flip.
    pub const fn speed(self) -> Option<u8> {
        match self {
            FanCommand::Speed1 => Some(1),
            FanCommand::Speed2 => Some(2),
            FanCommand::Speed3 => Some(3),
            FanCommand::Speed4 => Some(4),
            FanCommand::Speed5 => Some(5),
            FanCommand::Speed6 => Some(6),
            FanCommand::Off | FanCommand::Flip => None,
        }
    }

    /// Speed command for a level in `1..=6`.
    pub const fn for_speed(level: u8) -> Option<FanCommand> {
        match level {
            1 => Some(FanCommand::Speed1),
            2 => Some(FanCommand::Speed2),
            3 => Some(FanCommand::Speed3),
            4 => Some(FanCommand::Speed4),
            5 => Some(FanCommand::Speed5),
            6 => Some(FanCommand::Speed6),
            _ => None,
        }
    }
}

impl fmt::Display for FanCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

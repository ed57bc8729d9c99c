//! Static command tables for the two framing variants.
//!
//! Each table maps the eight commands to a fixed-width bit string: 7 bits
//! for the short variant, 19 bits for the long one (the 19-bit field sits
//! after the 5-bit fan-id prefix inside the full 24-bit frame). The bit
//! strings were captured from the original remotes and must not be edited
//! — they are what the physical receivers match on.

use super::command::FanCommand;

/// One variant's immutable command-to-bits mapping.
///
/// Entries are stored in [`FanCommand::ALL`] order, which makes the
/// forward lookup total: every command has exactly one row. The reverse
/// lookup is a linear scan — eight entries, called once per received code.
pub struct CommandTable {
    entries: [(FanCommand, &'static str); 8],
    /// Command-field width in bits (7 or 19).
    pub width: usize,
}

/// 7-bit variant.
pub const COMMANDS_7BIT: CommandTable = CommandTable {
    width: 7,
    entries: [
        (FanCommand::Off, "0000010"),
        (FanCommand::Speed1, "0001000"),
        (FanCommand::Speed2, "0001010"),
        (FanCommand::Speed3, "0010000"),
        (FanCommand::Speed4, "0011000"),
        (FanCommand::Speed5, "0100010"),
        (FanCommand::Speed6, "0100000"),
        (FanCommand::Flip, "0000100"),
    ],
};

/// 24-bit variant (19-bit command field).
pub const COMMANDS_24BIT: CommandTable = CommandTable {
    width: 19,
    entries: [
        (FanCommand::Off, "0111010000111011111"),
        (FanCommand::Speed1, "0111010000100111111"),
        (FanCommand::Speed2, "0111010000101100111"),
        (FanCommand::Speed3, "0111010000110111111"),
        (FanCommand::Speed4, "0111010000110101111"),
        (FanCommand::Speed5, "0111010000101101011"),
        (FanCommand::Speed6, "0111010000101111111"),
        (FanCommand::Flip, "0111010000100101111"),
    ],
};

impl CommandTable {
    /// The table matching a fan's configured variant.
    pub const fn for_variant(is_24_bit: bool) -> &'static CommandTable {
        if is_24_bit { &COMMANDS_24BIT } else { &COMMANDS_7BIT }
    }

    /// Bit string for `command`. Total over the vocabulary.
    pub fn bits(&self, command: FanCommand) -> &'static str {
        self.entries[command as usize].1
    }

    /// Command whose bit string is exactly `bits`, if any.
    pub fn reverse_lookup(&self, bits: &str) -> Option<FanCommand> {
        self.entries
            .iter()
            .find(|(_, b)| *b == bits)
            .map(|(c, _)| *c)
    }
}

//! Wire-code framing: width heuristic, bit inversion, field extraction.
//!
//! The remotes transmit both fields complemented, so decode re-complements
//! them. There is no explicit length field on the wire — the variant is
//! inferred from the magnitude of the captured code, which is an inherent
//! protocol ambiguity, not something to fix: changing the threshold or the
//! mask arithmetic changes which physical remote codes are recognised.

/// RC-switch protocol family these remotes use. Codes tagged with any
/// other protocol belong to a different remote sharing the receiver.
pub const EXPECTED_PROTOCOL: u8 = 6;

/// Fan-id prefix width, identical in both variants.
pub const FAN_ID_BITS: usize = 5;

const FAN_ID_MASK: u64 = 0x1F;
const COMMAND_MASK_7: u64 = 0x7F;
const COMMAND_MASK_24: u64 = 0x7FFFF;

/// Fields recovered from a single captured code. Transient — built,
/// resolved against the registry, and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    /// 5-character '0'/'1' string, zero-padded.
    pub fan_id: String,
    /// 7- or 19-character '0'/'1' string, zero-padded.
    pub command_code: String,
    pub is_24_bit: bool,
}

/// Classify a captured code's framing variant.
///
/// Any code wider than 12 bits is taken as the 24-bit variant. A
/// legitimately small 24-bit code can therefore misclassify as 7-bit;
/// accepted limitation of a protocol with no length field (the
/// dispatch core's variant cross-check catches the fallout).
pub fn classify_is_24_bit(code: u64) -> bool {
    (code >> 12) != 0
}

/// Undo the wire inversion and split a code into fan-id and command fields.
pub fn decode(code: u64) -> DecodedFrame {
    let is_24_bit = classify_is_24_bit(code);
    let (fan_id, command_code) = if is_24_bit {
        (
            format!("{:05b}", !(code >> 19) & FAN_ID_MASK),
            format!("{:019b}", !code & COMMAND_MASK_24),
        )
    } else {
        (
            format!("{:05b}", !(code >> 7) & FAN_ID_MASK),
            format!("{:07b}", !code & COMMAND_MASK_7),
        )
    };
    DecodedFrame {
        fan_id,
        command_code,
        is_24_bit,
    }
}

/// The transmit frame: 5-bit fan id followed by the command field.
pub fn full_frame(fan_id: &str, command_bits: &str) -> String {
    format!("{fan_id}{command_bits}")
}

//! OOK pulse synthesis.
//!
//! A frame bit string becomes a flat sequence of signed durations in
//! microseconds: positive = mark (carrier on), negative = space (carrier
//! off). The transmitter replays the whole sequence [`REPEAT_COUNT`]
//! times per send.

use log::warn;

/// Preamble emitted once at the start of every frame.
pub const SYNC_PULSES: [i32; 2] = [-8900, 336];
/// Pulse pair for a '0' bit.
pub const ZERO_PULSES: [i32; 2] = [-658, 336];
/// Pulse pair for a '1' bit.
pub const ONE_PULSES: [i32; 2] = [-321, 689];

/// How many times the transmitter replays the full sequence per send.
pub const REPEAT_COUNT: usize = 15;

/// Longest frame is 24 bits (5-bit id + 19-bit command): one sync pair
/// plus one pair per bit = 50 pulses. Capacity rounded up.
pub type PulseSequence = heapless::Vec<i32, 64>;

/// Synthesise the pulse train for a frame bit string.
///
/// Characters outside `{'0','1'}` are logged and skipped; synthesis
/// continues with the remaining bits rather than aborting the frame.
pub fn encode(bits: &str) -> PulseSequence {
    let mut pulses = PulseSequence::new();
    push_pair(&mut pulses, &SYNC_PULSES);

    for bit in bits.chars() {
        match bit {
            '0' => push_pair(&mut pulses, &ZERO_PULSES),
            '1' => push_pair(&mut pulses, &ONE_PULSES),
            other => {
                warn!("invalid character {other:?} in bit string {bits:?}, skipping");
            }
        }
    }
    pulses
}

fn push_pair(pulses: &mut PulseSequence, pair: &[i32; 2]) {
    if pulses.extend_from_slice(pair).is_err() {
        // Only reachable if a caller hands us a frame longer than any
        // variant defines; drop the tail rather than panic.
        warn!("pulse buffer full, truncating frame");
    }
}

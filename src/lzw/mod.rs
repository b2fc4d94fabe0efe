//! The coupled LZW encoder/decoder pair (components C5–C7) plus the
//! dictionary representations they share (components C3, C4).
//!
//! Encoder and decoder must stay in lockstep: after processing each code
//! their dictionaries have the same `max` and their current widths are
//! equal (see the round-trip and reset tests under `tests/`). Codes
//! `0..256` are pre-populated as the single bytes they represent; the first
//! assignable multi-byte code is `256`.

mod decoder;
mod dictionary;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

/// A dictionary code. Codes `0..256` denote single bytes.
pub type Code = usize;

/// Starting code width: enough to distinguish the first new code, `256`.
pub const MIN_WIDTH: u32 = 9;

/// The first code available for a multi-byte string.
pub const FIRST_CODE: Code = 256;

const fn dict_size(max_width: usize) -> Code {
    1usize << max_width
}

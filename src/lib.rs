//! # lzwstream
//!
//! A streaming LZW encoder/decoder producing a raw, header-less code stream
//! with dynamic code width and whole-dictionary reset on overflow.
//!
//! * `lzw` is the coupled encoder/decoder state machine pair plus the
//!   dictionary and bit-packing substrate shared between them.
//! * `tools` holds the small pieces those state machines are built from:
//!   the MSB-first bit buffer and the fixed-size stream adapter.
//!
//! `Encoder`/`Decoder` are generic over the maximum code width as a `const`
//! generic parameter, so a build picks its width by instantiating the type;
//! mixing widths between an encoder and a decoder is a type error rather
//! than a runtime desync.
//!
//! ## Buffer Example
//!
//! ```rs
//! use lzwstream::Lzw20;
//! use std::io::{Read,Write};
//!
//! let test_data = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
//! let mut compressed = Vec::new();
//! let mut enc = Lzw20::encoder(&mut compressed);
//! enc.write_all(test_data).expect("encode failed");
//! enc.finish().expect("finish failed");
//!
//! let mut dec = Lzw20::decoder(compressed.as_slice());
//! let mut expanded = Vec::new();
//! dec.read_to_end(&mut expanded).expect("decode failed");
//! assert_eq!(expanded, test_data);
//! ```

mod error;
mod tools;
pub mod lzw;

pub use error::Error;
pub use lzw::{Decoder, Encoder};

/// Reference code-width configuration (`MAX_WIDTH = 20`, `DICT_SIZE = 2^20`).
///
/// This is the width used by the CLI and by integration tests that don't
/// need to exercise a different width; see [`lzw::MIN_WIDTH`] for the
/// starting width common to every configuration.
pub struct Lzw20;

impl Lzw20 {
    pub fn encoder<W: std::io::Write>(writer: W) -> Encoder<W, 20> {
        Encoder::new(writer)
    }
    pub fn decoder<R: std::io::Read>(reader: R) -> Decoder<R, 20> {
        Decoder::new(reader)
    }
}

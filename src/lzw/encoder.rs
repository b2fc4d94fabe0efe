//! Encoder state machine (component C5).

use std::io::{self, Write};

use super::dictionary::EncoderDict;
use super::{dict_size, Code, MIN_WIDTH};
use crate::error::Error;
use crate::tools::bit_buffer::BitWriter;

/// Compresses bytes written to it into a raw, header-less LZW code stream
/// written to the wrapped `W`.
///
/// `MAX_WIDTH` is the compile-time ceiling on code width (12–24); the
/// dictionary holds `2^MAX_WIDTH` codes before a reset is forced.
pub struct Encoder<W: Write, const MAX_WIDTH: usize> {
    writer: BitWriter<W>,
    dict: EncoderDict,
    /// The encoder's current prefix, `None` only before the first byte.
    omega: Option<Code>,
    width: u32,
}

impl<W: Write, const MAX_WIDTH: usize> Encoder<W, MAX_WIDTH> {
    pub fn new(writer: W) -> Self {
        assert!(
            (12..=24).contains(&MAX_WIDTH),
            "MAX_WIDTH must be between 12 and 24, got {MAX_WIDTH}"
        );
        Self {
            writer: BitWriter::new(writer),
            dict: EncoderDict::new(dict_size(MAX_WIDTH)),
            omega: None,
            width: MIN_WIDTH,
        }
    }

    fn push_byte(&mut self, c: u8) -> Result<(), Error> {
        let parent = match self.omega {
            None => {
                self.omega = Some(c as Code);
                return Ok(());
            }
            Some(parent) => parent,
        };
        if let Some(next) = self.dict.find_child(parent, c) {
            self.omega = Some(next);
            return Ok(());
        }
        log::trace!("emit {} at width {}", parent, self.width);
        self.writer.write_bits(parent, self.width)?;
        match self.dict.add_child(parent, c) {
            Some(new_code) => {
                if self.width < MAX_WIDTH as u32 && new_code + 1 == (1usize << self.width) {
                    self.width += 1;
                    log::debug!("widen to {} bits", self.width);
                }
            }
            None => {
                log::debug!("dictionary full, resetting");
                self.dict.reset();
                self.width = MIN_WIDTH;
            }
        }
        self.omega = Some(c as Code);
        Ok(())
    }

    /// Emit the final prefix, pad to a byte boundary, flush, and return the
    /// wrapped writer. Must be called exactly once to produce a valid stream.
    pub fn finish(mut self) -> Result<W, Error> {
        if let Some(omega) = self.omega {
            self.writer.write_bits(omega, self.width)?;
        }
        self.writer.flush_bits()?;
        Ok(self.writer.into_inner()?)
    }
}

impl<W: Write, const MAX_WIDTH: usize> Write for Encoder<W, MAX_WIDTH> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            self.push_byte(b).map_err(to_io_error)?;
        }
        Ok(buf.len())
    }

    /// Flushes bytes already packed to the wrapped writer. Does not pad or
    /// emit the current prefix: that would desynchronize the bit stream.
    /// Call [`Encoder::finish`] to end the stream.
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush_bytes()
    }
}

fn to_io_error(e: Error) -> io::Error {
    match e {
        Error::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

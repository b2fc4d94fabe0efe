//! Decoder state machine (component C6).

use std::io::{self, Read};

use super::dictionary::DecoderDict;
use super::{dict_size, Code, MIN_WIDTH};
use crate::error::Error;
use crate::tools::bit_buffer::BitReader;

/// Expands a raw, header-less LZW code stream read from the wrapped `R`
/// back into the original bytes.
pub struct Decoder<R: Read, const MAX_WIDTH: usize> {
    reader: BitReader<R>,
    dict: DecoderDict,
    dict_size: Code,
    /// The previously read code, `None` only before the first code (or
    /// immediately after a reset).
    prev: Option<Code>,
    /// First byte of the most recently emitted string; the `K` in the
    /// classical K-ω-K case.
    first_byte: u8,
    width: u32,
    pending: Vec<u8>,
    pending_pos: usize,
    finished: bool,
}

impl<R: Read, const MAX_WIDTH: usize> Decoder<R, MAX_WIDTH> {
    pub fn new(reader: R) -> Self {
        assert!(
            (12..=24).contains(&MAX_WIDTH),
            "MAX_WIDTH must be between 12 and 24, got {MAX_WIDTH}"
        );
        let size = dict_size(MAX_WIDTH);
        Self {
            reader: BitReader::new(reader),
            dict: DecoderDict::new(size),
            dict_size: size,
            prev: None,
            first_byte: 0,
            width: MIN_WIDTH,
            pending: Vec::new(),
            pending_pos: 0,
            finished: false,
        }
    }

    /// Run one step of the state machine: read a code, emit its string into
    /// `pending`, update the dictionary and width, possibly reset. Leaves
    /// `pending` empty and sets `finished` on clean end-of-stream.
    fn decode_step(&mut self) -> Result<(), Error> {
        let nc = match self.reader.read_bits(self.width)? {
            Some(c) => c,
            None => {
                self.finished = true;
                return Ok(());
            }
        };
        let max = self.dict.max();
        if nc > max + 1 {
            log::error!("invalid code {nc} (max valid is {})", max + 1);
            return Err(Error::InvalidCode { code: nc, max });
        }

        if nc == max + 1 {
            // K-ω-K: the code refers to a string not yet in the dictionary,
            // which must be string_of(prev) followed by prev's own first byte.
            let prev = self.prev.ok_or(Error::InvalidCode { code: nc, max })?;
            let new_code = self
                .dict
                .add(prev, self.first_byte)
                .expect("should never panic: reset keeps the dictionary below capacity");
            debug_assert_eq!(new_code, nc);
        }

        // nc is now guaranteed present: either it already was, or K-ω-K just
        // created it above.
        let (s, first) = self.dict.string_of(nc);
        self.pending.clear();
        self.pending.extend_from_slice(s);
        self.pending_pos = 0;

        if nc <= max {
            // Ordinary known code: extend the dictionary with prev . first(nc).
            if let Some(prev) = self.prev {
                self.dict
                    .add(prev, first)
                    .expect("should never panic: reset keeps the dictionary below capacity");
            }
        }
        self.first_byte = first;

        let new_max = self.dict.max();
        if self.width < MAX_WIDTH as u32 && new_max + 1 == (1usize << self.width) {
            self.width += 1;
            log::debug!("widen to {} bits", self.width);
        }
        if new_max + 1 >= self.dict_size {
            log::debug!("dictionary full, resetting");
            self.dict.reset();
            self.width = MIN_WIDTH;
            self.prev = None;
        } else {
            self.prev = Some(nc);
        }
        Ok(())
    }
}

impl<R: Read, const MAX_WIDTH: usize> Read for Decoder<R, MAX_WIDTH> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut written = 0;
        while written < buf.len() {
            if self.pending_pos == self.pending.len() {
                if self.finished {
                    break;
                }
                self.decode_step().map_err(to_io_error)?;
                continue;
            }
            let n = (buf.len() - written).min(self.pending.len() - self.pending_pos);
            buf[written..written + n].copy_from_slice(&self.pending[self.pending_pos..self.pending_pos + n]);
            self.pending_pos += n;
            written += n;
        }
        Ok(written)
    }
}

fn to_io_error(e: Error) -> io::Error {
    match e {
        Error::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lzw::Encoder;
    use std::io::Write;

    fn round_trip<const W: usize>(data: &[u8]) -> Vec<u8> {
        let mut compressed = Vec::new();
        {
            let mut enc: Encoder<_, W> = Encoder::new(&mut compressed);
            enc.write_all(data).unwrap();
            enc.finish().unwrap();
        }
        let mut dec: Decoder<_, W> = Decoder::new(compressed.as_slice());
        let mut out = Vec::new();
        dec.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn empty_round_trips() {
        assert_eq!(round_trip::<20>(b""), b"");
    }

    #[test]
    fn single_byte_round_trips() {
        assert_eq!(round_trip::<20>(b"A"), b"A");
    }

    #[test]
    fn k_omega_k_round_trips() {
        // "AAAAAA" forces the decoder's K-ω-K branch at least once.
        assert_eq!(round_trip::<20>(b"AAAAAA"), b"AAAAAA");
    }

    #[test]
    fn repeated_pair_round_trips() {
        assert_eq!(round_trip::<20>(b"ABABABABAB"), b"ABABABABAB");
    }

    #[test]
    fn invalid_code_is_rejected() {
        // Two bytes hand-packed as a single out-of-range 9-bit code (511,
        // i.e. greater than max+1 == 256 for a fresh dictionary).
        let mut compressed = Vec::new();
        {
            let mut w = crate::tools::bit_buffer::BitWriter::new(&mut compressed);
            w.write_bits(511, 9).unwrap();
            w.flush_bits().unwrap();
        }
        let mut dec: Decoder<_, 20> = Decoder::new(compressed.as_slice());
        let mut out = Vec::new();
        match dec.read_to_end(&mut out) {
            Err(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            Ok(_) => panic!("expected an error for an out-of-range code"),
        }
    }

    #[test]
    fn truncated_stream_is_rejected() {
        // A single byte can fill the accumulator to 8 bits, which is a
        // whole pad byte's worth but still short of a 9-bit code: this can
        // only mean the stream was cut mid-code, not normal zero padding.
        let compressed = vec![0xFFu8];
        let mut dec: Decoder<_, 20> = Decoder::new(compressed.as_slice());
        let mut out = Vec::new();
        match dec.read_to_end(&mut out) {
            Err(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            Ok(_) => panic!("expected an error for a truncated trailing code"),
        }
    }
}

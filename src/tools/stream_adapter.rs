//! Stream adapter (component C2).
//!
//! Batches bytes into and out of a caller-supplied [`Read`]/[`Write`] via a
//! small, fixed-size internal buffer, so the bit buffer above never calls
//! the caller's I/O one byte at a time.

use std::io::{self, Read, Write};

/// Reference size from the spec: large enough that the encoder/decoder loop
/// rarely round-trips through the underlying writer/reader.
const ADAPTER_BUF_SIZE: usize = 256;

/// Buffers whole bytes before handing them to the wrapped writer.
pub struct ByteSink<W: Write> {
    inner: W,
    buf: [u8; ADAPTER_BUF_SIZE],
    len: usize,
}

impl<W: Write> ByteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, buf: [0; ADAPTER_BUF_SIZE], len: 0 }
    }

    pub fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.buf[self.len] = b;
        self.len += 1;
        if self.len == ADAPTER_BUF_SIZE {
            self.drain()?;
        }
        Ok(())
    }

    fn drain(&mut self) -> io::Result<()> {
        if self.len > 0 {
            self.inner.write_all(&self.buf[..self.len])?;
            self.len = 0;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }

    /// Flush whatever is buffered and hand back the wrapped writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.drain()?;
        Ok(self.inner)
    }
}

/// Refills from the wrapped reader one chunk at a time and hands out bytes
/// one at a time; signals EOF once the underlying reader returns `0`.
pub struct ByteSource<R: Read> {
    inner: R,
    buf: [u8; ADAPTER_BUF_SIZE],
    pos: usize,
    len: usize,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: [0; ADAPTER_BUF_SIZE], pos: 0, len: 0 }
    }

    /// `Ok(None)` signals EOF on the wrapped reader.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.len {
            self.len = self.inner.read(&mut self.buf)?;
            self.pos = 0;
            if self.len == 0 {
                return Ok(None);
            }
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }
}

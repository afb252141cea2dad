//! Bounded cursor for assembling text frames in a fixed buffer.

use std::fmt;

/// Write cursor over a fixed byte slice.
///
/// Writes never pass `limit`. A write that does not fit copies what it can,
/// marks the writer as truncated and fails with `fmt::Error`, which lets the
/// `?` operator unwind the render loop.
///
/// A terminated writer keeps the last byte of the slice free so that
/// [`BoundedWriter::finish`] can always store a NUL.
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    limit: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Writer that may fill the whole slice. A NUL is added on finish only
    /// if there is room left.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let limit = buf.len();
        Self {
            buf,
            pos: 0,
            limit,
            truncated: false,
        }
    }

    /// Writer that reserves the final byte for a NUL terminator.
    pub fn terminated(buf: &'a mut [u8]) -> Self {
        let limit = buf.len().saturating_sub(1);
        Self {
            buf,
            pos: 0,
            limit,
            truncated: false,
        }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes that can still be written.
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append raw bytes.
    pub fn put(&mut self, bytes: &[u8]) -> fmt::Result {
        let n = bytes.len().min(self.remaining());
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        debug_assert!(self.pos <= self.limit);
        if n < bytes.len() {
            self.truncated = true;
            return Err(fmt::Error);
        }
        Ok(())
    }

    /// Append one byte.
    pub fn put_byte(&mut self, byte: u8) -> fmt::Result {
        self.put(&[byte])
    }

    /// Append the decimal form of `value` without going through `fmt`.
    pub fn put_decimal(&mut self, value: u8) -> fmt::Result {
        let digits = [b'0' + value / 100, b'0' + value / 10 % 10, b'0' + value % 10];
        let skip = if value >= 100 {
            0
        } else if value >= 10 {
            1
        } else {
            2
        };
        self.put(&digits[skip..])
    }

    /// Store the NUL terminator if there is a byte left for it and return
    /// the logical text length. Terminated writers always have that byte.
    pub fn finish(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s.as_bytes())
    }
}

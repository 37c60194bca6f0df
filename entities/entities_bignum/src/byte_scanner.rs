//! Byte-Level Input
//!
//! The decoder consumes its input one byte at a time with a single byte of
//! push-back, which is all the sign look-ahead and digit terminator need.

use crate::error::Result;

/// A byte source with one byte of push-back
pub trait ByteScanner {
    /// Read the next byte, or `Ok(None)` at end of input
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Push back the byte returned by the last successful `read_byte`
    ///
    /// Only one byte of push-back is guaranteed; calling this twice in a row,
    /// or after end of input, is a no-op.
    fn unread_byte(&mut self);
}

impl<R: ByteScanner + ?Sized> ByteScanner for &mut R {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    fn unread_byte(&mut self) {
        (**self).unread_byte()
    }
}

/// Scanner over an in-memory byte slice
#[derive(Debug, Clone)]
pub struct SliceScanner<'a> {
    data: &'a [u8],
    pos: usize,
    can_unread: bool,
}

impl<'a> SliceScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            can_unread: false,
        }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl<'a> From<&'a str> for SliceScanner<'a> {
    fn from(s: &'a str) -> Self {
        SliceScanner::new(s.as_bytes())
    }
}

impl ByteScanner for SliceScanner<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                self.can_unread = true;
                Ok(Some(b))
            }
            None => {
                self.can_unread = false;
                Ok(None)
            }
        }
    }

    fn unread_byte(&mut self) {
        if self.can_unread {
            self.pos -= 1;
            self.can_unread = false;
        }
    }
}

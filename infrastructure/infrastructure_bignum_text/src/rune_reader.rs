//! Rune Input Adapter
//!
//! Character-oriented readers hand out whole code points. The decoder works
//! on bytes, so `ByteReader` narrows a `RuneScanner` to a `ByteScanner`,
//! failing on any code point that is not exactly one byte wide instead of
//! truncating it.

use entities_bignum::{ByteScanner, Malformed, ParseError, Result};

/// A code point source with one rune of push-back
pub trait RuneScanner {
    /// Next code point and the number of input bytes it occupied, or
    /// `Ok(None)` at end of input
    fn read_rune(&mut self) -> Result<Option<(char, usize)>>;

    /// Push back the rune returned by the last successful `read_rune`
    fn unread_rune(&mut self);

    /// Consume leading whitespace
    fn skip_space(&mut self) -> Result<()> {
        while let Some((ch, _)) = self.read_rune()? {
            if !ch.is_whitespace() {
                self.unread_rune();
                break;
            }
        }
        Ok(())
    }
}

impl<R: RuneScanner + ?Sized> RuneScanner for &mut R {
    fn read_rune(&mut self) -> Result<Option<(char, usize)>> {
        (**self).read_rune()
    }

    fn unread_rune(&mut self) {
        (**self).unread_rune()
    }

    fn skip_space(&mut self) -> Result<()> {
        (**self).skip_space()
    }
}

/// Rune scanner over a string slice
#[derive(Debug, Clone)]
pub struct StrScanner<'a> {
    input: &'a str,
    pos: usize,
    last_len: Option<usize>,
}

impl<'a> StrScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last_len: None,
        }
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

impl RuneScanner for StrScanner<'_> {
    fn read_rune(&mut self) -> Result<Option<(char, usize)>> {
        match self.remaining().chars().next() {
            Some(ch) => {
                let len = ch.len_utf8();
                self.pos += len;
                self.last_len = Some(len);
                Ok(Some((ch, len)))
            }
            None => {
                self.last_len = None;
                Ok(None)
            }
        }
    }

    fn unread_rune(&mut self) {
        if let Some(len) = self.last_len.take() {
            self.pos -= len;
        }
    }
}

/// Byte view of a `RuneScanner`
pub struct ByteReader<'r, R: ?Sized> {
    inner: &'r mut R,
}

impl<'r, R: RuneScanner + ?Sized> ByteReader<'r, R> {
    pub fn new(inner: &'r mut R) -> Self {
        Self { inner }
    }
}

impl<R: RuneScanner + ?Sized> ByteScanner for ByteReader<'_, R> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        match self.inner.read_rune()? {
            None => Ok(None),
            Some((ch, 1)) => match u8::try_from(ch as u32) {
                Ok(b) => Ok(Some(b)),
                Err(_) => Err(ParseError::MalformedInput(Malformed::MultiByteRune(ch))),
            },
            Some((ch, _)) => Err(ParseError::MalformedInput(Malformed::MultiByteRune(ch))),
        }
    }

    fn unread_byte(&mut self) {
        self.inner.unread_rune()
    }
}

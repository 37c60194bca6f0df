//! Magnitude <-> Digit Conversion
//!
//! Converts unsigned magnitudes to digit strings and back, for any base in
//! `2..=62`. Both directions work a machine word at a time: the magnitude is
//! split by the largest power of the base that fits in a `u64`, and scanned
//! digits are accumulated in a `u64` before being folded into the `Natural`.

use malachite::Natural;

use crate::base::{raw_digit_value, Base, ScanBase};
use crate::byte_scanner::ByteScanner;
use crate::error::{Malformed, ParseError, Result};

/// Digits of `magnitude` in `base`, most significant first
///
/// No sign and no prefix. Zero renders as the single digit `0`; no other
/// value has leading zeros.
pub fn digits_of(magnitude: &Natural, base: Base) -> Vec<u8> {
    if *magnitude == 0u32 {
        return vec![b'0'];
    }

    let (word_base, word_len) = base.word_power();
    let divisor = Natural::from(word_base);
    let b = base.get() as u64;

    // Built least significant digit first, reversed at the end
    let mut out = Vec::new();
    let mut n = magnitude.clone();
    while n != 0u32 {
        let rem = &n % &divisor;
        n = n / &divisor;
        // rem < word_base, so it always fits
        let mut word = u64::try_from(&rem).unwrap_or(0);
        let last = n == 0u32;
        for _ in 0..word_len {
            if last && word == 0 {
                break;
            }
            out.push(base.digit((word % b) as u32));
            word /= b;
        }
    }
    out.reverse();
    out
}

/// Scan an unsigned magnitude from `r`
///
/// With `ScanBase::Fixed` the digits are read in that base and no prefix is
/// recognized. With `ScanBase::Infer` the prefix selects the base: `0b`/`0B`
/// for 2, `0`, `0o` or `0O` for 8, `0x`/`0X` for 16, otherwise 10; `_` may
/// then separate digits. A lone `0` is zero in base 10.
///
/// Scanning stops at the first byte that is not alphanumeric (or `_` when
/// inferring); that byte is pushed back. An alphanumeric byte whose value
/// is not below the active base is an error.
///
/// # Arguments
///
/// * `r` - Byte source, left positioned at the terminator
/// * `base` - Fixed base, or `ScanBase::Infer` to read a prefix
///
/// # Returns
///
/// * `Ok((magnitude, base))` - The value and the base actually used
/// * `Err(ParseError)` - No digits, a bad separator or an invalid digit
pub fn scan_magnitude<R: ByteScanner + ?Sized>(
    r: &mut R,
    base: ScanBase,
) -> Result<(Natural, Base)> {
    let infer = base == ScanBase::Infer;
    let mut b = match base {
        ScanBase::Fixed(b) => b,
        ScanBase::Infer => Base::DECIMAL,
    };

    // prev is b'0' after a digit, b'_' after a separator, b'.' at the start
    let mut prev = b'.';
    let mut invalid_sep = false;
    let mut count = 0usize;
    let mut prefix = None;

    let mut ch = r.read_byte()?;
    if infer && ch == Some(b'0') {
        prev = b'0';
        count = 1;
        ch = r.read_byte()?;
        if let Some(c) = ch {
            let (selected, p) = match c {
                b'b' | b'B' => (Base::BINARY, b'b'),
                b'o' | b'O' => (Base::OCTAL, b'o'),
                b'x' | b'X' => (Base::HEX, b'x'),
                _ => (Base::OCTAL, b'0'),
            };
            b = selected;
            prefix = Some(p);
            count = 0;
            if p != b'0' {
                ch = r.read_byte()?;
            }
        }
    }

    let radix = b.get();
    let (word_base, word_len) = b.word_power();
    let mut z = Natural::from(0u32);
    let mut word = 0u64;
    let mut word_digits = 0usize;

    while let Some(c) = ch {
        if c == b'_' && infer {
            if prev != b'0' {
                invalid_sep = true;
            }
            prev = b'_';
        } else {
            let d = match raw_digit_value(c, radix) {
                Some(d) if d < radix => d,
                Some(_) => return Err(ParseError::InvalidDigitForBase { digit: c, base: radix }),
                None => {
                    r.unread_byte();
                    break;
                }
            };
            prev = b'0';
            count += 1;

            word = word * radix as u64 + d as u64;
            word_digits += 1;
            if word_digits == word_len {
                z = z * Natural::from(word_base) + Natural::from(word);
                word = 0;
                word_digits = 0;
            }
        }
        ch = r.read_byte()?;
    }

    if count == 0 {
        if prefix == Some(b'0') {
            return Ok((Natural::from(0u32), Base::DECIMAL));
        }
        return Err(ParseError::MalformedInput(Malformed::NoDigits));
    }

    if word_digits > 0 {
        let scale = (radix as u64).pow(word_digits as u32);
        z = z * Natural::from(scale) + Natural::from(word);
    }

    if invalid_sep || prev == b'_' {
        return Err(ParseError::MalformedInput(Malformed::InvalidSeparator));
    }

    Ok((z, b))
}

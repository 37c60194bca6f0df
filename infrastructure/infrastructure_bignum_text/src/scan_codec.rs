//! Scan Codec Module
//!
//! Parses signed integers from text. The decoder reads an optional sign,
//! hands the rest to the magnitude scanner (which performs prefix-driven base
//! inference), and clears the sign of a zero result.
//!
//! On error the parse is abandoned; no partial value is returned.

use entities_bignum::{
    scan_magnitude, Base, ByteScanner, Malformed, ParseError, Result, ScanBase, SignedMagnitude,
    SliceScanner,
};

use crate::format_codec::Verb;
use crate::rune_reader::{ByteReader, RuneScanner};

/// Decode a signed integer from `r`
///
/// # Arguments
///
/// * `r` - Byte source; the byte after the number stays unread
/// * `base` - Fixed base, or `ScanBase::Infer` to read a prefix
///
/// # Returns
///
/// * `Ok((value, base))` - The value and the base actually used, which
///   differs from the request only under `ScanBase::Infer`
/// * `Err(ParseError)` - Empty input or any magnitude error
pub fn decode<R: ByteScanner + ?Sized>(
    r: &mut R,
    base: ScanBase,
) -> Result<(SignedMagnitude, Base)> {
    let result = scan_sign(r).and_then(|neg| {
        let (abs, used) = scan_magnitude(r, base)?;
        // 0 has no sign
        Ok((SignedMagnitude::new(neg, abs), used))
    });

    match &result {
        Ok((_, used)) => tracing::trace!(requested = ?base, used = used.get(), "decoded bigint"),
        Err(e) => tracing::debug!(error = %e, requested = ?base, "bigint decode failed"),
    }
    result
}

fn scan_sign<R: ByteScanner + ?Sized>(r: &mut R) -> Result<bool> {
    match r.read_byte()? {
        None => Err(ParseError::MalformedInput(Malformed::EmptyInput)),
        Some(b'-') => Ok(true),
        Some(b'+') => Ok(false),
        Some(_) => {
            r.unread_byte();
            Ok(false)
        }
    }
}

/// Base a scan verb selects
///
/// `b`, `o`, `d`, `x` and `X` force their base; `s` and `v` let the prefix
/// decide. Every other verb, including `O`, is rejected.
pub fn scan_base(verb: Verb) -> Result<ScanBase> {
    match verb {
        Verb::Binary => Ok(ScanBase::Fixed(Base::BINARY)),
        Verb::Octal => Ok(ScanBase::Fixed(Base::OCTAL)),
        Verb::Decimal => Ok(ScanBase::Fixed(Base::DECIMAL)),
        Verb::LowerHex | Verb::UpperHex => Ok(ScanBase::Fixed(Base::HEX)),
        Verb::Generic(_) => Ok(ScanBase::Infer),
        Verb::OctalO | Verb::Unknown(_) => Err(ParseError::InvalidVerb(verb.as_char())),
    }
}

/// Verb-directed scan from a rune source
///
/// The verb is validated before any input is read. Leading whitespace is
/// skipped, then the value is decoded through a byte view of `r`.
pub fn scan<R: RuneScanner + ?Sized>(r: &mut R, verb: Verb) -> Result<SignedMagnitude> {
    let base = scan_base(verb)?;
    r.skip_space()?;
    let (value, _) = decode(&mut ByteReader::new(r), base)?;
    Ok(value)
}

/// Parse all of `s`; any unconsumed input is an error
pub fn set_string(s: &str, base: ScanBase) -> Result<(SignedMagnitude, Base)> {
    let mut scanner = SliceScanner::from(s);
    let decoded = decode(&mut scanner, base)?;
    if !scanner.is_exhausted() {
        return Err(ParseError::MalformedInput(Malformed::TrailingInput));
    }
    Ok(decoded)
}

//! Format Codec Module
//!
//! Renders signed magnitudes under a printf-style contract: a verb selects
//! the base, flags select the sign character and base prefix, and width and
//! precision control padding.
//!
//! Output is always laid out as
//!
//! ```text
//! [left pad][sign][prefix][zero pad][digits][right pad]
//! ```
//!
//! Encoding never fails. An unrecognized verb degrades to a placeholder
//! such as `%!q(big.Int=5)` so that surrounding output stays intact.

use std::convert::Infallible;

use entities_bignum::{digits_of, Base, SignedMagnitude};

/// Rendering of an absent value
pub const NIL: &str = "<nil>";

/// Conversion verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `b`
    Binary,
    /// `o`, alternate prefix "0"
    Octal,
    /// `O`, always prefixed with "0o"
    OctalO,
    /// `d`
    Decimal,
    /// `x`
    LowerHex,
    /// `X`, letter digits upper-cased
    UpperHex,
    /// `s` or `v`, rendered as decimal
    Generic(char),
    /// Anything else
    Unknown(char),
}

impl Verb {
    pub fn from_char(ch: char) -> Self {
        match ch {
            'b' => Verb::Binary,
            'o' => Verb::Octal,
            'O' => Verb::OctalO,
            'd' => Verb::Decimal,
            'x' => Verb::LowerHex,
            'X' => Verb::UpperHex,
            's' | 'v' => Verb::Generic(ch),
            _ => Verb::Unknown(ch),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Verb::Binary => 'b',
            Verb::Octal => 'o',
            Verb::OctalO => 'O',
            Verb::Decimal => 'd',
            Verb::LowerHex => 'x',
            Verb::UpperHex => 'X',
            Verb::Generic(ch) | Verb::Unknown(ch) => ch,
        }
    }

    /// Output base, or `None` for an unrecognized verb
    pub fn base(self) -> Option<Base> {
        match self {
            Verb::Binary => Some(Base::BINARY),
            Verb::Octal | Verb::OctalO => Some(Base::OCTAL),
            Verb::Decimal | Verb::Generic(_) => Some(Base::DECIMAL),
            Verb::LowerHex | Verb::UpperHex => Some(Base::HEX),
            Verb::Unknown(_) => None,
        }
    }

    /// Base prefix written for this verb
    fn prefix(self, alternate: bool) -> &'static [u8] {
        match self {
            Verb::OctalO => b"0o",
            Verb::Binary if alternate => b"0b",
            Verb::Octal if alternate => b"0",
            Verb::LowerHex if alternate => b"0x",
            Verb::UpperHex if alternate => b"0X",
            _ => b"",
        }
    }
}

impl From<char> for Verb {
    fn from(ch: char) -> Self {
        Verb::from_char(ch)
    }
}

/// Everything that controls one rendering
///
/// Built per call and consumed once:
///
/// ```
/// use infrastructure_bignum_text::{encode, FormatRequest, Verb};
/// use entities_bignum::SignedMagnitude;
///
/// let request = FormatRequest::new(Verb::LowerHex).with_alternate();
/// assert_eq!(encode(&SignedMagnitude::from_i64(255), &request), b"0xff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRequest {
    pub verb: Verb,
    /// `+`: always write a sign
    pub show_sign: bool,
    /// ` `: write a space where a positive sign would go
    pub show_space: bool,
    /// `#`: write the base prefix
    pub alternate: bool,
    /// Minimum total length
    pub width: Option<usize>,
    /// Minimum digit count
    pub precision: Option<usize>,
    /// `-`: pad on the right
    pub left_justify: bool,
    /// `0`: pad with zeros after the sign and prefix
    pub zero_pad: bool,
}

impl FormatRequest {
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            show_sign: false,
            show_space: false,
            alternate: false,
            width: None,
            precision: None,
            left_justify: false,
            zero_pad: false,
        }
    }

    pub fn with_sign(mut self) -> Self {
        self.show_sign = true;
        self
    }

    pub fn with_space(mut self) -> Self {
        self.show_space = true;
        self
    }

    pub fn with_alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn left_justified(mut self) -> Self {
        self.left_justify = true;
        self
    }

    pub fn zero_padded(mut self) -> Self {
        self.zero_pad = true;
        self
    }
}

impl Default for FormatRequest {
    fn default() -> Self {
        FormatRequest::new(Verb::Decimal)
    }
}

/// Destination for encoded bytes
pub trait ByteSink {
    type Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Sink over any `std::io::Write`
#[derive(Debug)]
pub struct IoSink<W>(pub W);

impl<W: std::io::Write> ByteSink for IoSink<W> {
    type Error = std::io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }
}

/// Sink over any `std::fmt::Write`, including `fmt::Formatter`
pub struct FmtSink<'a, W: ?Sized>(pub &'a mut W);

impl<W: std::fmt::Write + ?Sized> ByteSink for FmtSink<'_, W> {
    type Error = std::fmt::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        // Encoded output is ASCII
        let text = std::str::from_utf8(bytes).map_err(|_| std::fmt::Error)?;
        self.0.write_str(text)
    }
}

/// Character counts for the three padding classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Padding {
    /// spaces before the sign ("%8d")
    left: usize,
    /// zeros between prefix and digits ("%.8d", "%08d")
    zeros: usize,
    /// spaces after the digits ("%-8d")
    right: usize,
}

/// Compute padding, or `None` when nothing at all must be written
fn layout(request: &FormatRequest, fixed_len: usize, digits: &[u8]) -> Option<Padding> {
    let mut pad = Padding::default();

    if let Some(precision) = request.precision {
        if digits.len() < precision {
            pad.zeros = precision - digits.len();
        } else if precision == 0 && digits == b"0" {
            // "%.0d" of zero prints nothing
            return None;
        }
    }

    let length = fixed_len.saturating_add(pad.zeros).saturating_add(digits.len());
    if let Some(width) = request.width {
        if length < width {
            let d = width - length;
            if request.left_justify {
                pad.right = d;
            } else if request.zero_pad && request.precision.is_none() {
                pad.zeros = d;
            } else {
                pad.left = d;
            }
        }
    }

    Some(pad)
}

fn write_multiple<S: ByteSink + ?Sized>(
    sink: &mut S,
    text: &[u8],
    count: usize,
) -> Result<(), S::Error> {
    if !text.is_empty() {
        for _ in 0..count {
            sink.write_bytes(text)?;
        }
    }
    Ok(())
}

/// Write `value` (or `<nil>` for `None`) to `sink` as described by `request`
///
/// # Arguments
///
/// * `value` - The value to render, `None` for an absent one
/// * `request` - Verb, flags, width and precision
/// * `sink` - Destination for the rendered bytes
///
/// # Returns
///
/// * `Ok(())` - Rendering finished; an unknown verb still succeeds
/// * `Err(S::Error)` - The sink refused a write
pub fn format_into<S: ByteSink + ?Sized>(
    value: Option<&SignedMagnitude>,
    request: &FormatRequest,
    sink: &mut S,
) -> Result<(), S::Error> {
    let verb = request.verb;
    let Some(base) = verb.base() else {
        let shown = match value {
            Some(v) => v.to_text(Base::DECIMAL),
            None => NIL.to_owned(),
        };
        tracing::debug!(verb = %verb.as_char(), "unknown format verb for bigint");
        let placeholder = format!("%!{}(big.Int={})", verb.as_char(), shown);
        return sink.write_bytes(placeholder.as_bytes());
    };

    let Some(value) = value else {
        return sink.write_bytes(NIL.as_bytes());
    };

    let sign: &[u8] = if value.is_negative() {
        b"-"
    } else if request.show_sign {
        b"+"
    } else if request.show_space {
        b" "
    } else {
        b""
    };

    let prefix = verb.prefix(request.alternate);

    let mut digits = digits_of(value.magnitude(), base);
    if verb == Verb::UpperHex {
        digits.make_ascii_uppercase();
    }

    let Some(pad) = layout(request, sign.len() + prefix.len(), &digits) else {
        return Ok(());
    };

    write_multiple(sink, b" ", pad.left)?;
    sink.write_bytes(sign)?;
    sink.write_bytes(prefix)?;
    write_multiple(sink, b"0", pad.zeros)?;
    sink.write_bytes(&digits)?;
    write_multiple(sink, b" ", pad.right)
}

/// Write `value` to `sink` as described by `request`
///
/// # Arguments
///
/// * `value` - The value to render
/// * `request` - Verb, flags, width and precision
/// * `sink` - Destination for the rendered bytes
///
/// # Returns
///
/// * `Ok(())` - All bytes were written
/// * `Err(S::Error)` - The sink refused a write
pub fn encode_into<S: ByteSink + ?Sized>(
    value: &SignedMagnitude,
    request: &FormatRequest,
    sink: &mut S,
) -> Result<(), S::Error> {
    format_into(Some(value), request, sink)
}

/// Render `value` as described by `request`
pub fn encode(value: &SignedMagnitude, request: &FormatRequest) -> Vec<u8> {
    let mut buf = Vec::new();
    match encode_into(value, request, &mut buf) {
        Ok(()) => buf,
        Err(never) => match never {},
    }
}

/// Text of `value` in `base`: no prefix, lowercase letters for 10-35,
/// uppercase for 36-61, `<nil>` when absent
pub fn text(value: Option<&SignedMagnitude>, base: Base) -> String {
    match value {
        Some(v) => v.to_text(base),
        None => NIL.to_owned(),
    }
}

/// Append `text(value, base)` to `buf`
pub fn append_text(buf: &mut Vec<u8>, value: Option<&SignedMagnitude>, base: Base) {
    match value {
        Some(v) => v.append_text(buf, base),
        None => buf.extend_from_slice(NIL.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: i64, request: FormatRequest) -> String {
        String::from_utf8(encode(&SignedMagnitude::from_i64(value), &request)).unwrap()
    }

    #[test]
    fn test_verb_bases() {
        assert_eq!(render(10, FormatRequest::new(Verb::Binary)), "1010");
        assert_eq!(render(10, FormatRequest::new(Verb::Octal)), "12");
        assert_eq!(render(10, FormatRequest::new(Verb::Decimal)), "10");
        assert_eq!(render(10, FormatRequest::new(Verb::Generic('v'))), "10");
        assert_eq!(render(10, FormatRequest::new(Verb::LowerHex)), "a");
        assert_eq!(render(10, FormatRequest::new(Verb::UpperHex)), "A");
    }

    #[test]
    fn test_verb_char_mapping() {
        for ch in ['b', 'o', 'O', 'd', 'x', 'X', 's', 'v', 'q'] {
            assert_eq!(Verb::from_char(ch).as_char(), ch);
        }
        assert_eq!(Verb::from('q'), Verb::Unknown('q'));
        assert_eq!(Verb::Unknown('q').base(), None);
    }

    #[test]
    fn test_alternate_prefixes() {
        assert_eq!(render(255, FormatRequest::new(Verb::LowerHex).with_alternate()), "0xff");
        assert_eq!(render(255, FormatRequest::new(Verb::UpperHex).with_alternate()), "0XFF");
        assert_eq!(render(5, FormatRequest::new(Verb::Binary).with_alternate()), "0b101");
        assert_eq!(render(8, FormatRequest::new(Verb::Octal).with_alternate()), "010");
        assert_eq!(render(10, FormatRequest::new(Verb::Decimal).with_alternate()), "10");
    }

    #[test]
    fn test_octal_o_always_prefixed() {
        assert_eq!(render(8, FormatRequest::new(Verb::OctalO)), "0o10");
        assert_eq!(render(-8, FormatRequest::new(Verb::OctalO).with_alternate()), "-0o10");
    }

    #[test]
    fn test_sign_policy() {
        assert_eq!(render(5, FormatRequest::default().with_sign()), "+5");
        assert_eq!(render(5, FormatRequest::default().with_space()), " 5");
        assert_eq!(render(5, FormatRequest::default().with_sign().with_space()), "+5");
        assert_eq!(render(-5, FormatRequest::default().with_sign()), "-5");
        assert_eq!(render(0, FormatRequest::default().with_sign()), "+0");
    }

    #[test]
    fn test_precision() {
        assert_eq!(render(5, FormatRequest::default().with_precision(3)), "005");
        assert_eq!(render(-5, FormatRequest::default().with_precision(3)), "-005");
        assert_eq!(render(12345, FormatRequest::default().with_precision(3)), "12345");
        let request = FormatRequest::new(Verb::LowerHex).with_alternate().with_precision(4);
        assert_eq!(render(255, request), "0x00ff");
    }

    #[test]
    fn test_zero_with_zero_precision_is_empty() {
        let request = FormatRequest::new(Verb::LowerHex)
            .with_precision(0)
            .with_width(6)
            .with_sign()
            .with_alternate();
        assert_eq!(render(0, request), "");
        assert_eq!(render(1, FormatRequest::default().with_precision(0)), "1");
    }

    #[test]
    fn test_width_padding() {
        assert_eq!(render(5, FormatRequest::default().with_width(5)), "    5");
        assert_eq!(render(5, FormatRequest::default().with_width(5).zero_padded()), "00005");
        assert_eq!(render(5, FormatRequest::default().with_width(5).left_justified()), "5    ");
        assert_eq!(render(5, FormatRequest::default().with_width(5).with_precision(2)), "   05");
        assert_eq!(render(12345, FormatRequest::default().with_width(3)), "12345");
    }

    #[test]
    fn test_left_justify_beats_zero_pad() {
        let request = FormatRequest::default().with_width(4).zero_padded().left_justified();
        assert_eq!(render(7, request), "7   ");
    }

    #[test]
    fn test_zero_pad_goes_after_sign_and_prefix() {
        let request = FormatRequest::new(Verb::LowerHex)
            .with_alternate()
            .with_width(8)
            .zero_padded();
        assert_eq!(render(-255, request), "-0x000ff");
    }

    #[test]
    fn test_unknown_verb_placeholder() {
        assert_eq!(render(5, FormatRequest::new(Verb::Unknown('q'))), "%!q(big.Int=5)");
        let mut buf = Vec::new();
        let request = FormatRequest::new(Verb::Unknown('z')).with_width(10);
        format_into(None, &request, &mut buf).unwrap();
        assert_eq!(buf, b"%!z(big.Int=<nil>)");
    }

    #[test]
    fn test_nil_value() {
        let mut buf = Vec::new();
        format_into(None, &FormatRequest::new(Verb::LowerHex).with_width(10), &mut buf).unwrap();
        assert_eq!(buf, NIL.as_bytes());
        assert_eq!(text(None, Base::HEX), "<nil>");
    }

    #[test]
    fn test_text_helpers() {
        let value = SignedMagnitude::from_i64(-3843);
        assert_eq!(text(Some(&value), Base::new(62).unwrap()), "-ZZ");
        let mut buf = b"v=".to_vec();
        append_text(&mut buf, Some(&value), Base::HEX);
        append_text(&mut buf, None, Base::HEX);
        assert_eq!(buf, b"v=-f03<nil>");
    }

    #[test]
    fn test_layout_saturates_on_huge_counts() {
        let request = FormatRequest::default()
            .with_precision(usize::MAX)
            .with_width(usize::MAX);
        let pad = layout(&request, 1, b"5").unwrap();
        assert_eq!(pad.zeros, usize::MAX - 1);
        assert_eq!(pad.left, 0);
        assert_eq!(pad.right, 0);

        let request = FormatRequest::default().with_width(usize::MAX).left_justified();
        let pad = layout(&request, usize::MAX, b"5").unwrap();
        assert_eq!(pad, Padding::default());
    }

    #[test]
    fn test_io_and_fmt_sinks() {
        let value = SignedMagnitude::from_i64(42);
        let request = FormatRequest::new(Verb::Binary).with_alternate();

        let mut io = IoSink(Vec::new());
        encode_into(&value, &request, &mut io).unwrap();
        assert_eq!(io.0, b"0b101010");

        let mut s = String::new();
        encode_into(&value, &request, &mut FmtSink(&mut s)).unwrap();
        assert_eq!(s, "0b101010");
    }
}

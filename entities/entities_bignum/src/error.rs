//! Parse errors
//!
//! Error taxonomy shared by the magnitude scanner and the signed decoder.
//! Any error aborts the whole parse; callers must discard partial results.

/// Reasons an input stream is structurally unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The stream ended before a sign or digit was read
    EmptyInput,
    /// No digits followed the sign or base prefix
    NoDigits,
    /// A `_` separator that does not sit between two digits
    InvalidSeparator,
    /// A code point that does not fit in a single byte
    MultiByteRune(char),
    /// Bytes remained after a whole-string parse
    TrailingInput,
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Malformed::EmptyInput => write!(f, "empty input"),
            Malformed::NoDigits => write!(f, "number has no digits"),
            Malformed::InvalidSeparator => write!(f, "'_' must separate successive digits"),
            Malformed::MultiByteRune(ch) => {
                write!(f, "invalid rune {:?} (U+{:04X})", ch, *ch as u32)
            }
            Malformed::TrailingInput => write!(f, "unexpected trailing input"),
        }
    }
}

/// Decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unrecognized scan verb
    #[error("invalid verb '{0}'")]
    InvalidVerb(char),

    /// Empty stream, missing digits, bad separator or multi-byte input
    #[error("malformed input: {0}")]
    MalformedInput(Malformed),

    /// A digit byte outside the alphabet of the active base
    #[error("invalid digit '{}' for base {}", .digit.escape_ascii(), .base)]
    InvalidDigitForBase { digit: u8, base: u32 },
}

pub type Result<T> = std::result::Result<T, ParseError>;

impl From<Malformed> for ParseError {
    fn from(reason: Malformed) -> Self {
        ParseError::MalformedInput(reason)
    }
}

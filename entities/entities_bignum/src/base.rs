//! Radix Handling
//!
//! Bases 2 through 62 are supported. Digit values 0-9 render as '0'-'9',
//! 10-35 as 'a'-'z' and 36-61 as 'A'-'Z'.

/// The digit alphabet, indexed by digit value
pub const DIGITS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest base whose letter digits are case-insensitive when scanning
pub const MAX_BASE_SMALL: u32 = 36;

/// A conversion base in `2..=62`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 62;

    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);

    /// Returns `None` when `radix` is outside `2..=62`
    pub const fn new(radix: u32) -> Option<Self> {
        if radix >= Self::MIN && radix <= Self::MAX {
            Some(Base(radix))
        } else {
            None
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Digit byte for `value`, which must be below the base
    pub fn digit(self, value: u32) -> u8 {
        debug_assert!(value < self.0);
        DIGITS[value as usize]
    }

    /// Value of digit byte `ch` in this base's alphabet
    ///
    /// Letters are case-insensitive up to base 36; above that uppercase
    /// letters carry the values 36 to 61. Returns `None` for non-alphanumeric
    /// bytes and for digits whose value is not below the base.
    pub fn digit_value(self, ch: u8) -> Option<u32> {
        let value = raw_digit_value(ch, self.0)?;
        (value < self.0).then_some(value)
    }

    /// Largest power of the base that fits in a `u64`, with its exponent
    ///
    /// Used to move digits between a `Natural` and machine words in chunks.
    pub fn word_power(self) -> (u64, usize) {
        let b = self.0 as u64;
        let mut power = b;
        let mut count = 1;
        while let Some(next) = power.checked_mul(b) {
            power = next;
            count += 1;
        }
        (power, count)
    }
}

impl TryFrom<u32> for Base {
    type Error = u32;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Base::new(radix).ok_or(radix)
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base requested from the magnitude scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanBase {
    /// Select the base from the literal's prefix
    #[default]
    Infer,
    /// Use exactly this base; no prefix is recognized
    Fixed(Base),
}

impl From<Base> for ScanBase {
    fn from(base: Base) -> Self {
        ScanBase::Fixed(base)
    }
}

/// Digit value of an alphanumeric byte under the letter mapping for `radix`,
/// without checking the value against the radix.
pub(crate) fn raw_digit_value(ch: u8, radix: u32) -> Option<u32> {
    match ch {
        b'0'..=b'9' => Some((ch - b'0') as u32),
        b'a'..=b'z' => Some((ch - b'a') as u32 + 10),
        b'A'..=b'Z' if radix <= MAX_BASE_SMALL => Some((ch - b'A') as u32 + 10),
        b'A'..=b'Z' => Some((ch - b'A') as u32 + MAX_BASE_SMALL),
        _ => None,
    }
}

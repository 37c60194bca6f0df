//! Signed Magnitudes
//!
//! Arbitrary precision integers stored as a sign flag plus an unsigned
//! magnitude, the shape the text codec works in. The magnitude is a
//! malachite `Natural`; conversion to and from malachite's `Integer` is
//! provided for callers doing arithmetic.
//!
//! Zero never carries a sign: every constructor clears the sign flag when
//! the magnitude is zero.

use malachite::{Integer, Natural};

use crate::base::Base;
use crate::natconv::digits_of;

/// Sign + magnitude big integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedMagnitude {
    neg: bool,
    abs: Natural,
}

impl SignedMagnitude {
    /// Build from a sign flag (`true` = negative) and a magnitude
    pub fn new(negative: bool, magnitude: Natural) -> Self {
        let neg = negative && magnitude != 0u32;
        Self { neg, abs: magnitude }
    }

    pub fn zero() -> Self {
        Self::new(false, Natural::from(0u32))
    }

    pub fn from_i64(value: i64) -> Self {
        Self::new(value < 0, Natural::from(value.unsigned_abs()))
    }

    pub fn from_u64(value: u64) -> Self {
        Self::new(false, Natural::from(value))
    }

    pub fn from_integer(value: &Integer) -> Self {
        let neg = *value < 0;
        let abs = if neg {
            Natural::try_from(-value.clone())
        } else {
            Natural::try_from(value.clone())
        };
        // Both branches are non-negative
        Self::new(neg, abs.unwrap_or_else(|_| Natural::from(0u32)))
    }

    pub fn to_integer(&self) -> Integer {
        let abs = Integer::from(self.abs.clone());
        if self.neg {
            -abs
        } else {
            abs
        }
    }

    /// Convert to i64, or `None` when out of range
    pub fn to_i64(&self) -> Option<i64> {
        let abs = u64::try_from(&self.abs).ok()?;
        if self.neg {
            0i64.checked_sub_unsigned(abs)
        } else {
            i64::try_from(abs).ok()
        }
    }

    pub fn is_negative(&self) -> bool {
        self.neg
    }

    pub fn is_zero(&self) -> bool {
        self.abs == 0u32
    }

    pub fn magnitude(&self) -> &Natural {
        &self.abs
    }

    pub fn into_parts(self) -> (bool, Natural) {
        (self.neg, self.abs)
    }

    /// Render in `base` with a leading '-' for negative values, no prefix
    pub fn to_text(&self, base: Base) -> String {
        let mut buf = Vec::new();
        self.append_text(&mut buf, base);
        // The alphabet and sign are ASCII
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Append the `to_text` rendering to `buf`
    pub fn append_text(&self, buf: &mut Vec<u8>, base: Base) {
        if self.neg {
            buf.push(b'-');
        }
        buf.extend_from_slice(&digits_of(&self.abs, base));
    }
}

impl Default for SignedMagnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Neg for SignedMagnitude {
    type Output = SignedMagnitude;

    fn neg(self) -> Self::Output {
        SignedMagnitude::new(!self.neg, self.abs)
    }
}

impl From<i64> for SignedMagnitude {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for SignedMagnitude {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for SignedMagnitude {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u32> for SignedMagnitude {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<Natural> for SignedMagnitude {
    fn from(value: Natural) -> Self {
        Self::new(false, value)
    }
}

impl From<&Integer> for SignedMagnitude {
    fn from(value: &Integer) -> Self {
        Self::from_integer(value)
    }
}

/// Decimal rendering; honors width, `+` and `0` through `pad_integral`
impl std::fmt::Display for SignedMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let digits = digits_of(&self.abs, Base::DECIMAL);
        let digits = std::str::from_utf8(&digits).map_err(|_| std::fmt::Error)?;
        f.pad_integral(!self.neg, "", digits)
    }
}

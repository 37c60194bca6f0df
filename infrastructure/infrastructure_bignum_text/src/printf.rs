//! `core::fmt` Binding
//!
//! Lets a signed magnitude take part in `format!` with printf semantics.
//! Formatter state maps onto a `FormatRequest`:
//!
//! | formatter          | request        |
//! |--------------------|----------------|
//! | `+`                | `show_sign`    |
//! | `#`                | `alternate`    |
//! | `0`                | `zero_pad`     |
//! | `<`                | `left_justify` |
//! | width, precision   | same           |
//!
//! `core::fmt` has no space flag, so `show_space` is never set here.

use std::fmt;

use entities_bignum::SignedMagnitude;

use crate::format_codec::{format_into, FmtSink, FormatRequest, Verb};

impl FormatRequest {
    /// Request for `verb` carrying the flags, width and precision of `f`
    pub fn from_formatter(verb: Verb, f: &fmt::Formatter) -> Self {
        FormatRequest {
            verb,
            show_sign: f.sign_plus(),
            show_space: false,
            alternate: f.alternate(),
            width: f.width(),
            precision: f.precision(),
            left_justify: matches!(f.align(), Some(fmt::Alignment::Left)),
            zero_pad: f.sign_aware_zero_pad(),
        }
    }
}

/// Display adapter rendering a value with a fixed verb
///
/// ```
/// use infrastructure_bignum_text::{Printf, Verb};
/// use entities_bignum::SignedMagnitude;
///
/// let v = SignedMagnitude::from_i64(-255);
/// assert_eq!(format!("{:#10}", Printf::new(&v, Verb::UpperHex)), "     -0XFF");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Printf<'a> {
    value: Option<&'a SignedMagnitude>,
    verb: Verb,
}

impl<'a> Printf<'a> {
    pub fn new(value: &'a SignedMagnitude, verb: Verb) -> Self {
        Self {
            value: Some(value),
            verb,
        }
    }

    /// Adapter for an absent value
    pub fn nil(verb: Verb) -> Self {
        Self { value: None, verb }
    }
}

impl fmt::Display for Printf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let request = FormatRequest::from_formatter(self.verb, f);
        format_into(self.value, &request, &mut FmtSink(f))
    }
}

/// `value.printf(verb)` shorthand for `Printf::new`
pub trait PrintfExt {
    fn printf(&self, verb: Verb) -> Printf<'_>;
}

impl PrintfExt for SignedMagnitude {
    fn printf(&self, verb: Verb) -> Printf<'_> {
        Printf::new(self, verb)
    }
}

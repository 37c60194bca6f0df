//! Printf Directive Parsing
//!
//! Builds a `FormatRequest` from a single printf-style directive:
//!
//! ```text
//! %[flags][width][.precision]verb      flags: + - # 0 space
//! ```
//!
//! Width and precision are capped at `MAX_COUNT`. A `.` without digits sets
//! the precision to zero. The verb is taken as-is, so an unknown verb still
//! yields a request (which renders a placeholder).

use std::str::FromStr;

use crate::format_codec::{FormatRequest, Verb};

/// Directive syntax errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    #[error("directive must start with '%'")]
    MissingPercent,

    #[error("directive has no verb")]
    MissingVerb,

    #[error("unexpected characters {0:?} after verb")]
    TrailingCharacters(String),

    #[error("width or precision exceeds {}", MAX_COUNT)]
    Overflow,
}

/// Largest width or precision a directive may carry
pub const MAX_COUNT: usize = 1_000_000;

/// Parse a run of decimal digits, `None` if there are none
fn parse_number(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<Option<usize>, DirectiveError> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let acc = value.unwrap_or(0) * 10 + d as usize;
        if acc > MAX_COUNT {
            return Err(DirectiveError::Overflow);
        }
        value = Some(acc);
    }
    Ok(value)
}

impl FormatRequest {
    /// Parse a directive such as `"%+#08.3x"`
    pub fn from_directive(directive: &str) -> Result<Self, DirectiveError> {
        let body = directive
            .strip_prefix('%')
            .ok_or(DirectiveError::MissingPercent)?;
        let mut chars = body.chars().peekable();
        let mut request = FormatRequest::new(Verb::Decimal);

        while let Some(&c) = chars.peek() {
            match c {
                '+' => request.show_sign = true,
                '-' => request.left_justify = true,
                '#' => request.alternate = true,
                '0' => request.zero_pad = true,
                ' ' => request.show_space = true,
                _ => break,
            }
            chars.next();
        }

        request.width = parse_number(&mut chars)?;

        if chars.peek() == Some(&'.') {
            chars.next();
            request.precision = Some(parse_number(&mut chars)?.unwrap_or(0));
        }

        let verb = chars.next().ok_or(DirectiveError::MissingVerb)?;
        request.verb = Verb::from_char(verb);

        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(DirectiveError::TrailingCharacters(rest));
        }

        Ok(request)
    }
}

impl FromStr for FormatRequest {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatRequest::from_directive(s)
    }
}

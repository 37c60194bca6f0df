//! Infrastructure Layer: Bignum Text
//!
//! Converts arbitrary precision signed integers to and from text in bases
//! 2 through 62, under a printf-style formatting contract and a verb-driven
//! scanning contract.
//!
//! ## Overview
//!
//! - **[`format_codec`]**: the encoder. A [`FormatRequest`] (verb, sign and
//!   prefix flags, width, precision, justification) is applied to a
//!   [`SignedMagnitude`] and written to a [`ByteSink`].
//! - **[`scan_codec`]**: the decoder. Reads an optional sign and a magnitude
//!   from a byte scanner, inferring the base from the prefix on request.
//! - **[`rune_reader`]**: adapts character-oriented readers to the byte
//!   scanner the decoder consumes.
//! - **[`directive`]**: parses `%+#08.3x`-style directives into requests.
//! - **[`printf`]**: `core::fmt` binding, for use inside `format!`.
//!
//! ## Architecture
//!
//! The magnitude engine and the data model live in the Entities layer
//! ([`entities_bignum`]); this crate only decides what to emit around the
//! digits and how to read a sign in front of them.

pub mod directive;
pub mod format_codec;
pub mod printf;
pub mod rune_reader;
pub mod scan_codec;

pub use directive::{DirectiveError, MAX_COUNT};
pub use format_codec::{
    append_text, encode, encode_into, format_into, text, ByteSink, FmtSink, FormatRequest, IoSink,
    Verb, NIL,
};
pub use printf::{Printf, PrintfExt};
pub use rune_reader::{ByteReader, RuneScanner, StrScanner};
pub use scan_codec::{decode, scan, scan_base, set_string};

// Re-export the data model for convenience
pub use entities_bignum::{Base, Malformed, ParseError, ScanBase, SignedMagnitude};

//! Entities Layer: Bignum
//!
//! Provides the data model shared by the bignum text codec:
//! - Signed magnitudes (sign + unbounded magnitude)
//! - Radix handling and the 62-symbol digit alphabet
//! - Magnitude <-> digit conversion
//! - Byte-level input scanning
//!
//! Arithmetic is delegated to the `malachite` crate.

pub mod base;
pub mod big;
pub mod byte_scanner;
pub mod error;
pub mod natconv;

pub use base::{Base, ScanBase};
pub use big::SignedMagnitude;
pub use byte_scanner::{ByteScanner, SliceScanner};
pub use error::{Malformed, ParseError, Result};
pub use natconv::{digits_of, scan_magnitude};

pub use malachite::{Integer, Natural};

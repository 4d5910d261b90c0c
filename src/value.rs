//! # Numeric Value Types
//!
//! Fixed-width two's-complement values used throughout the simulator:
//!
//! - [`Byte`]: 8 bits, viewed either as `i8` or `u8`
//! - [`Word`]: 16 bits, composed little-endian from two [`Byte`]s
//!
//! Both types parse the three literal forms the assembler accepts:
//! `$`-prefixed hexadecimal, `%`-prefixed binary and plain decimal. A
//! literal may carry a sign (`$-5`, `%-101`, `-5`) and is truncated to the
//! target width with two's-complement wrapping, so `#-23` assembles to `$E9`
//! and `#300` to `$2C`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number base of a textual literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// No prefix
    Decimal,
    /// `$` prefix
    Hexadecimal,
    /// `%` prefix
    Binary,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
            Radix::Binary => 2,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Decimal => write!(f, "decimal"),
            Radix::Hexadecimal => write!(f, "hexadecimal"),
            Radix::Binary => write!(f, "binary"),
        }
    }
}

/// A literal could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {radix} literal \"{literal}\"")]
pub struct ParseLiteralError {
    /// The offending text, including any prefix
    pub literal: String,

    /// The base selected by the prefix
    pub radix: Radix,
}

/// Splits a literal into its radix and the digits following the prefix.
pub(crate) fn split_radix(text: &str) -> (Radix, &str) {
    if let Some(digits) = text.strip_prefix('$') {
        (Radix::Hexadecimal, digits)
    } else if let Some(digits) = text.strip_prefix('%') {
        (Radix::Binary, digits)
    } else {
        (Radix::Decimal, text)
    }
}

/// Parses `$hex`, `%binary` or decimal text into a 32-bit signed integer.
///
/// An explicit sign is accepted after the prefix: `-5`, `+5`, `$-5`, `%+101`.
/// The value is not range-checked against 8 or 16 bits; callers truncate.
pub fn parse_literal(text: &str) -> Result<i32, ParseLiteralError> {
    let (radix, digits) = split_radix(text);

    i32::from_str_radix(digits, radix.base()).map_err(|_| ParseLiteralError {
        literal: text.to_string(),
        radix,
    })
}

/// An 8-bit two's-complement value.
///
/// The signed and unsigned views always agree modulo 256.
///
/// # Examples
///
/// ```
/// use sim6502::Byte;
///
/// let b = Byte::from_literal("$E9").unwrap();
/// assert_eq!(b.unsigned(), 0xE9);
/// assert_eq!(b.signed(), -23);
/// assert!(b.bit(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Byte(u8);

impl Byte {
    /// The value zero
    pub const ZERO: Byte = Byte(0);

    /// Creates a byte from its unsigned representation.
    pub const fn new(value: u8) -> Self {
        Byte(value)
    }

    /// Creates a byte from any integer, keeping only the low 8 bits.
    pub const fn wrapping_from(value: i32) -> Self {
        Byte(value as u8)
    }

    /// Parses a `$`, `%` or decimal literal, truncating to 8 bits.
    pub fn from_literal(text: &str) -> Result<Self, ParseLiteralError> {
        parse_literal(text).map(Byte::wrapping_from)
    }

    /// Two's-complement view (-128..=127).
    pub const fn signed(self) -> i8 {
        self.0 as i8
    }

    /// Unsigned view (0..=255).
    pub const fn unsigned(self) -> u8 {
        self.0
    }

    /// Returns bit `position` (0 = least significant).
    pub const fn bit(self, position: u8) -> bool {
        (self.0 >> position) & 1 == 1
    }

    /// Sets or clears bit `position`.
    pub fn set_bit(&mut self, position: u8, state: bool) {
        if state {
            self.0 |= 1 << position;
        } else {
            self.0 &= !(1 << position);
        }
    }

    /// Copy of this byte with bit `position` replaced.
    pub fn with_bit(mut self, position: u8, state: bool) -> Self {
        self.set_bit(position, state);
        self
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True when bit 7 is set.
    pub const fn is_negative(self) -> bool {
        self.bit(7)
    }
}

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Byte(value)
    }
}

impl From<i8> for Byte {
    fn from(value: i8) -> Self {
        Byte(value as u8)
    }
}

impl From<Byte> for u8 {
    fn from(value: Byte) -> Self {
        value.0
    }
}

impl FromStr for Byte {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Byte::from_literal(s)
    }
}

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.signed(), f)
    }
}

impl fmt::UpperHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// A 16-bit two's-complement value, stored little-endian in memory.
///
/// # Examples
///
/// ```
/// use sim6502::{Byte, Word};
///
/// let w = Word::from_bytes(Byte::new(0x6C), Byte::new(0xD7));
/// assert_eq!(w.unsigned(), 0xD76C);
/// assert_eq!(w.low(), Byte::new(0x6C));
/// assert_eq!(w.high(), Byte::new(0xD7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word(u16);

impl Word {
    pub const ZERO: Word = Word(0);

    pub const fn new(value: u16) -> Self {
        Word(value)
    }

    /// Creates a word from any integer, keeping only the low 16 bits.
    pub const fn wrapping_from(value: i32) -> Self {
        Word(value as u16)
    }

    /// Composes a word from its low (bits 0-7) and high (bits 8-15) bytes.
    pub const fn from_bytes(low: Byte, high: Byte) -> Self {
        Word(u16::from_le_bytes([low.unsigned(), high.unsigned()]))
    }

    /// Parses a `$`, `%` or decimal literal, truncating to 16 bits.
    pub fn from_literal(text: &str) -> Result<Self, ParseLiteralError> {
        parse_literal(text).map(Word::wrapping_from)
    }

    pub const fn signed(self) -> i16 {
        self.0 as i16
    }

    pub const fn unsigned(self) -> u16 {
        self.0
    }

    /// Bits 0-7.
    pub const fn low(self) -> Byte {
        Byte(self.0 as u8)
    }

    /// Bits 8-15.
    pub const fn high(self) -> Byte {
        Byte((self.0 >> 8) as u8)
    }

    pub const fn bit(self, position: u8) -> bool {
        (self.0 >> position) & 1 == 1
    }

    pub fn set_bit(&mut self, position: u8, state: bool) {
        if state {
            self.0 |= 1 << position;
        } else {
            self.0 &= !(1 << position);
        }
    }

    /// Adds a signed displacement, wrapping modulo 65536.
    pub const fn wrapping_offset(self, offset: i32) -> Self {
        Word((self.0 as i32).wrapping_add(offset) as u16)
    }
}

impl From<u16> for Word {
    fn from(value: u16) -> Self {
        Word(value)
    }
}

impl From<Word> for u16 {
    fn from(value: Word) -> Self {
        value.0
    }
}

impl FromStr for Word {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::from_literal(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.signed(), f)
    }
}

impl fmt::UpperHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

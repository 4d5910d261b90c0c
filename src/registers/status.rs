//! # Processor Status Register
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: expansion bit, always set after PLP
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use std::fmt;

use crate::value::Byte;

/// One bit of the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    Break,
    Expansion,
    Overflow,
    Negative,
}

impl Flag {
    /// Bit position within the status byte.
    pub const fn bit(self) -> u8 {
        match self {
            Flag::Carry => 0,
            Flag::Zero => 1,
            Flag::InterruptDisable => 2,
            Flag::Decimal => 3,
            Flag::Break => 4,
            Flag::Expansion => 5,
            Flag::Overflow => 6,
            Flag::Negative => 7,
        }
    }
}

/// The P register.
///
/// # Examples
///
/// ```
/// use sim6502::{Flag, StatusRegister};
///
/// let mut status = StatusRegister::new();
/// assert_eq!(status.value().unsigned(), 0x22);
///
/// status.set_carry(true);
/// assert!(status.flag(Flag::Carry));
/// assert_eq!(status.value().unsigned(), 0x23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusRegister(Byte);

impl StatusRegister {
    /// Power-on value: expansion and zero set.
    pub const RESET_VALUE: u8 = 0x22;

    pub const fn new() -> Self {
        StatusRegister(Byte::new(Self::RESET_VALUE))
    }

    pub const fn from_byte(value: Byte) -> Self {
        StatusRegister(value)
    }

    /// The packed status byte.
    pub const fn value(&self) -> Byte {
        self.0
    }

    pub fn set_value(&mut self, value: Byte) {
        self.0 = value;
    }

    pub const fn flag(&self, flag: Flag) -> bool {
        self.0.bit(flag.bit())
    }

    pub fn set_flag(&mut self, flag: Flag, state: bool) {
        self.0.set_bit(flag.bit(), state);
    }

    /// Sets Z when `value` is zero and N from bit 7 of `value`.
    pub fn update_zero_negative(&mut self, value: Byte) {
        self.set_zero(value.is_zero());
        self.set_negative(value.is_negative());
    }

    // ========== Per-Flag Accessors ==========

    pub const fn carry(&self) -> bool {
        self.flag(Flag::Carry)
    }

    pub fn set_carry(&mut self, state: bool) {
        self.set_flag(Flag::Carry, state);
    }

    pub const fn zero(&self) -> bool {
        self.flag(Flag::Zero)
    }

    pub fn set_zero(&mut self, state: bool) {
        self.set_flag(Flag::Zero, state);
    }

    pub const fn interrupt_disable(&self) -> bool {
        self.flag(Flag::InterruptDisable)
    }

    pub fn set_interrupt_disable(&mut self, state: bool) {
        self.set_flag(Flag::InterruptDisable, state);
    }

    pub const fn decimal(&self) -> bool {
        self.flag(Flag::Decimal)
    }

    pub fn set_decimal(&mut self, state: bool) {
        self.set_flag(Flag::Decimal, state);
    }

    pub const fn break_flag(&self) -> bool {
        self.flag(Flag::Break)
    }

    pub fn set_break_flag(&mut self, state: bool) {
        self.set_flag(Flag::Break, state);
    }

    pub const fn expansion(&self) -> bool {
        self.flag(Flag::Expansion)
    }

    pub fn set_expansion(&mut self, state: bool) {
        self.set_flag(Flag::Expansion, state);
    }

    pub const fn overflow(&self) -> bool {
        self.flag(Flag::Overflow)
    }

    pub fn set_overflow(&mut self, state: bool) {
        self.set_flag(Flag::Overflow, state);
    }

    pub const fn negative(&self) -> bool {
        self.flag(Flag::Negative)
    }

    pub fn set_negative(&mut self, state: bool) {
        self.set_flag(Flag::Negative, state);
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatusRegister {
    /// Renders as `NV-BDIZC` with clear flags shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [char; 8] = ['C', 'Z', 'I', 'D', 'B', '-', 'V', 'N'];
        for bit in (0..8u8).rev() {
            let letter = if self.0.bit(bit) { LETTERS[bit as usize] } else { '.' };
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_value() {
        let status = StatusRegister::new();
        assert!(status.expansion());
        assert!(status.zero());
        assert!(!status.carry());
        assert!(!status.negative());
    }

    #[test]
    fn test_flag_round_trip_each_bit() {
        let mut status = StatusRegister::from_byte(Byte::ZERO);
        status.set_negative(true);
        status.set_decimal(true);
        assert_eq!(status.value().unsigned(), 0b1000_1000);

        status.set_negative(false);
        assert_eq!(status.value().unsigned(), 0b0000_1000);
    }

    #[test]
    fn test_update_zero_negative() {
        let mut status = StatusRegister::new();
        status.update_zero_negative(Byte::new(0x80));
        assert!(!status.zero());
        assert!(status.negative());

        status.update_zero_negative(Byte::ZERO);
        assert!(status.zero());
        assert!(!status.negative());
    }

    #[test]
    fn test_display() {
        let status = StatusRegister::from_byte(Byte::new(0b1010_0011));
        assert_eq!(status.to_string(), "N.-...ZC");
    }
}

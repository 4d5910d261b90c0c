//! # 8-bit Arithmetic and Logic
//!
//! Flag-updating operations shared by the accumulator and memory cells. Each
//! takes the current value and the status register and returns the result,
//! so `ASL A` and `ASL $10` run the same code.
//!
//! ## Decimal Mode
//!
//! With D set, ADC and SBC treat both operands as packed BCD: each nibble is
//! one decimal digit, so `$45` means 45. Nibbles above 9 are not rejected;
//! they are weighted like digits (`$1F` counts as 25).
//!
//! Overflow (V) is always computed from the signed *binary* result of the
//! operation, in both modes.

use crate::registers::StatusRegister;
use crate::value::Byte;

/// Value of a packed BCD byte.
fn bcd_value(value: Byte) -> i32 {
    let value = value.unsigned() as i32;
    ((value >> 4) & 0x0F) * 10 + (value & 0x0F)
}

/// Packs a decimal tens/ones pair back into a byte.
fn bcd_pack(tens: i32, ones: i32) -> Byte {
    Byte::wrapping_from((tens << 4) | ones)
}

/// Passes `value` through, updating Z and N.
pub fn load(value: Byte, status: &mut StatusRegister) -> Byte {
    status.update_zero_negative(value);
    value
}

pub fn and(a: Byte, operand: Byte, status: &mut StatusRegister) -> Byte {
    load(Byte::new(a.unsigned() & operand.unsigned()), status)
}

pub fn or(a: Byte, operand: Byte, status: &mut StatusRegister) -> Byte {
    load(Byte::new(a.unsigned() | operand.unsigned()), status)
}

pub fn xor(a: Byte, operand: Byte, status: &mut StatusRegister) -> Byte {
    load(Byte::new(a.unsigned() ^ operand.unsigned()), status)
}

/// ADC: `a + operand + C`.
pub fn add_with_carry(a: Byte, operand: Byte, status: &mut StatusRegister) -> Byte {
    let carry = status.carry() as i32;
    let signed = a.signed() as i32 + operand.signed() as i32 + carry;

    let result = if status.decimal() {
        let sum = bcd_value(a) + bcd_value(operand) + carry;
        let mut tens = sum / 10;
        if sum > 99 {
            tens %= 10;
        }
        status.set_carry(sum > 99);
        bcd_pack(tens, sum % 10)
    } else {
        let unsigned = a.unsigned() as i32 + operand.unsigned() as i32 + carry;
        status.set_carry(unsigned > 0xFF);
        Byte::wrapping_from(signed)
    };

    status.set_overflow(!(-128..=127).contains(&signed));
    load(result, status)
}

/// SBC: `a - operand - (1 - C)`.
pub fn subtract_with_carry(a: Byte, operand: Byte, status: &mut StatusRegister) -> Byte {
    let borrow = !status.carry() as i32;
    let signed = a.signed() as i32 - operand.signed() as i32 - borrow;

    let result = if status.decimal() {
        let minuend = bcd_value(a);
        let subtrahend = bcd_value(operand);
        let mut difference = minuend - subtrahend - borrow;
        if difference < 0 {
            difference += 100;
        }
        status.set_carry(minuend >= subtrahend);
        bcd_pack(difference / 10, difference % 10)
    } else {
        let unsigned = a.unsigned() as i32 - operand.unsigned() as i32 - borrow;
        status.set_carry(unsigned >= 0);
        Byte::wrapping_from(signed)
    };

    status.set_overflow(!(-128..=127).contains(&signed));
    load(result, status)
}

/// CMP/CPX/CPY: flags from `register - operand`, result discarded.
pub fn compare(register: Byte, operand: Byte, status: &mut StatusRegister) {
    let signed = register.signed() as i32 - operand.signed() as i32;
    status.set_carry(register.unsigned() >= operand.unsigned());
    status.set_zero(signed == 0);
    status.set_negative(signed < 0);
}

/// BIT: N and V from the operand, Z from `a & operand`.
pub fn bit_test(a: Byte, operand: Byte, status: &mut StatusRegister) {
    status.set_negative(operand.bit(7));
    status.set_overflow(operand.bit(6));
    status.set_zero(a.unsigned() & operand.unsigned() == 0);
}

pub fn increment(value: Byte, status: &mut StatusRegister) -> Byte {
    load(Byte::new(value.unsigned().wrapping_add(1)), status)
}

pub fn decrement(value: Byte, status: &mut StatusRegister) -> Byte {
    load(Byte::new(value.unsigned().wrapping_sub(1)), status)
}

/// ASL: bit 7 into C, zero into bit 0.
pub fn arithmetic_shift_left(value: Byte, status: &mut StatusRegister) -> Byte {
    status.set_carry(value.bit(7));
    load(Byte::new(value.unsigned() << 1), status)
}

/// LSR: bit 0 into C, zero into bit 7.
pub fn logical_shift_right(value: Byte, status: &mut StatusRegister) -> Byte {
    status.set_carry(value.bit(0));
    load(Byte::new(value.unsigned() >> 1), status)
}

/// ROL: bit 7 into C, old C into bit 0.
pub fn rotate_left(value: Byte, status: &mut StatusRegister) -> Byte {
    let carry_in = status.carry() as u8;
    status.set_carry(value.bit(7));
    load(Byte::new((value.unsigned() << 1) | carry_in), status)
}

/// ROR: bit 0 into C, old C into bit 7.
pub fn rotate_right(value: Byte, status: &mut StatusRegister) -> Byte {
    let carry_in = (status.carry() as u8) << 7;
    status.set_carry(value.bit(0));
    load(Byte::new((value.unsigned() >> 1) | carry_in), status)
}

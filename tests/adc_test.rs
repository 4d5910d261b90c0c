//! Comprehensive tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (C, Z, V, N)
//! - Carry-in
//! - Decimal (BCD) mode, including its binary-derived overflow

use sim6502::{Memory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` loaded at 0x0600
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut memory = Memory::new();
    memory.load(0x0600, program);
    CPU::new(memory, 0x0600)
}

/// Runs `ADC #operand` with the given accumulator, carry and decimal flag.
fn adc_immediate(a: u8, operand: u8, carry: bool, decimal: bool) -> CPU<Memory> {
    let mut cpu = setup_cpu(&[0x69, operand]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.set_flag_d(decimal);
    cpu.step().unwrap();
    cpu
}

// ========== Binary Mode ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc_immediate(0x10, 0x05, false, false);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc_immediate(0x10, 0x05, true, false);
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_carry_out_and_zero() {
    let cpu = adc_immediate(0x01, 0xFF, false, false);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_positive_overflow() {
    // 80 + 80 = 160, out of signed range
    let cpu = adc_immediate(0x50, 0x50, false, false);

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_negative_overflow() {
    // -48 + -112 = -160
    let cpu = adc_immediate(0xD0, 0x90, false, false);

    assert_eq!(cpu.a(), 0x60);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_negative_without_overflow() {
    // -1 + -1 = -2
    let cpu = adc_immediate(0xFF, 0xFF, false, false);

    assert_eq!(cpu.a(), 0xFE);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_digit_carry() {
    let cpu = adc_immediate(0x09, 0x01, false, true);

    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_hundred_carry() {
    // 58 + 46 + 1 = 105
    let cpu = adc_immediate(0x58, 0x46, true, true);

    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_overflow_from_binary_sum() {
    // Binary view: 88 + 70 + 1 = 159, out of signed range
    let cpu = adc_immediate(0x58, 0x46, true, true);
    assert!(cpu.flag_v());

    // Binary view: 18 + 18 = 36, in range
    let cpu = adc_immediate(0x12, 0x12, false, true);
    assert_eq!(cpu.a(), 0x24);
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_decimal_wraps_to_zero() {
    let cpu = adc_immediate(0x99, 0x01, false, true);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_memory_modes() {
    let mut cpu = setup_cpu(&[
        0x65, 0x10, // ADC $10
        0x75, 0x10, // ADC $10,X
        0x6D, 0x00, 0x07, // ADC $0700
        0x7D, 0x00, 0x07, // ADC $0700,X
        0x79, 0x00, 0x07, // ADC $0700,Y
        0x61, 0x20, // ADC ($20,X)
        0x71, 0x30, // ADC ($30),Y
    ]);
    cpu.set_x(0x01);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.memory_mut().write(0x0011, 0x02);
    cpu.memory_mut().write(0x0700, 0x03);
    cpu.memory_mut().write(0x0701, 0x04);
    cpu.memory_mut().write(0x0702, 0x05);
    cpu.memory_mut().write(0x0021, 0x00);
    cpu.memory_mut().write(0x0022, 0x08);
    cpu.memory_mut().write(0x0800, 0x06);
    cpu.memory_mut().write(0x0030, 0x00);
    cpu.memory_mut().write(0x0031, 0x09);
    cpu.memory_mut().write(0x0902, 0x07);

    let mut expected = 0;
    for add in 1..=7 {
        cpu.step().unwrap();
        expected += add;
        assert_eq!(cpu.a(), expected);
    }
    assert_eq!(cpu.pc(), 0x0611);
}

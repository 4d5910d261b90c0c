//! Tests for the shift and rotate instructions ASL, LSR, ROL and ROR.
//!
//! Tests cover:
//! - Accumulator forms
//! - Memory forms (zero page, zero page X, absolute, absolute X)
//! - Carry in and out

use sim6502::{Memory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` loaded at 0x0600
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut memory = Memory::new();
    memory.load(0x0600, program);
    CPU::new(memory, 0x0600)
}

// ========== Accumulator ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0601);
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_rol_accumulator_carry_in() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_accumulator_carry_in() {
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_rotate_nine_bits() {
    // Nine ROLs return to the start: 8 data bits plus carry
    let mut cpu = setup_cpu(&[0x2A; 9]);
    cpu.set_a(0xA5);

    for _ in 0..9 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0xA5);
    assert!(!cpu.flag_c());
}

// ========== Memory ==========

#[test]
fn test_asl_memory_modes() {
    let mut cpu = setup_cpu(&[
        0x06, 0x10, // ASL $10
        0x16, 0x10, // ASL $10,X
        0x0E, 0x00, 0x07, // ASL $0700
        0x1E, 0x00, 0x07, // ASL $0700,X
    ]);
    cpu.set_x(0x01);
    for addr in [0x0010, 0x0011, 0x0700, 0x0701] {
        cpu.memory_mut().write(addr, 0xC1);
    }

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    for addr in [0x0010, 0x0011, 0x0700, 0x0701] {
        assert_eq!(cpu.memory().read(addr), 0x82);
    }
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_lsr_memory_modes() {
    let mut cpu = setup_cpu(&[
        0x46, 0x10, // LSR $10
        0x56, 0x10, // LSR $10,X
        0x4E, 0x00, 0x07, // LSR $0700
        0x5E, 0x00, 0x07, // LSR $0700,X
    ]);
    cpu.set_x(0x01);
    for addr in [0x0010, 0x0011, 0x0700, 0x0701] {
        cpu.memory_mut().write(addr, 0x83);
    }

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    for addr in [0x0010, 0x0011, 0x0700, 0x0701] {
        assert_eq!(cpu.memory().read(addr), 0x41);
    }
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_rol_memory_modes() {
    let mut cpu = setup_cpu(&[
        0x26, 0x10, // ROL $10
        0x36, 0x10, // ROL $10,X
        0x2E, 0x00, 0x07, // ROL $0700
        0x3E, 0x00, 0x07, // ROL $0700,X
    ]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0010, 0x80);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());

    // Carry from the previous rotate shifts into bit 0
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0011), 0x01);
    assert!(!cpu.flag_c());

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0700), 0x00);
    assert_eq!(cpu.memory().read(0x0701), 0x00);
}

#[test]
fn test_ror_zero_page_opcodes() {
    // $66 and $76 are ROR
    let mut cpu = setup_cpu(&[
        0x66, 0x10, // ROR $10
        0x76, 0x10, // ROR $10,X
        0x6E, 0x00, 0x07, // ROR $0700
        0x7E, 0x00, 0x07, // ROR $0700,X
    ]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.memory_mut().write(0x0700, 0x02);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0011), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0700), 0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x0701), 0x00);
    assert_eq!(cpu.a(), 0x00);
}

//! Tests for the load and store instructions (LDA, LDX, LDY, STA, STX, STY).
//!
//! Tests cover:
//! - Every addressing mode of each instruction
//! - Zero and Negative flag updates on loads
//! - Stores leaving flags untouched
//! - Zero page and page-boundary wraparound

use sim6502::{Memory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` loaded at 0x0600
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut memory = Memory::new();
    memory.load(0x0600, program);
    CPU::new(memory, 0x0600)
}

// ========== LDA ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu(&[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu(&[0xA9, 0x00]);
    cpu.set_a(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_flag() {
    let mut cpu = setup_cpu(&[0xA9, 0xE9]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xE9);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu(&[0xA5, 0x10]);
    cpu.memory_mut().write(0x0010, 0x37);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    // LDA $F0,X with X=$20 reads $0010, not $0110
    let mut cpu = setup_cpu(&[0xB5, 0xF0]);
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x11);
    cpu.memory_mut().write(0x0110, 0x22);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu(&[0xAD, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x99);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.pc(), 0x0603);
}

#[test]
fn test_lda_absolute_x_crosses_page() {
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0x12]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x1300, 0x55);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_lda_absolute_y_wraps_address_space() {
    let mut cpu = setup_cpu(&[0xB9, 0xFF, 0xFF]);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0001, 0x66);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_indexed_indirect() {
    // LDA ($20,X), X=4: pointer at $24/$25
    let mut cpu = setup_cpu(&[0xA1, 0x20]);
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x07);
    cpu.memory_mut().write(0x0700, 0x5A);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_indirect_indexed() {
    // LDA ($20),Y, Y=5: pointer $0700 + 5
    let mut cpu = setup_cpu(&[0xB1, 0x20]);
    cpu.set_y(0x05);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x07);
    cpu.memory_mut().write(0x0705, 0xA5);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xA5);
}

#[test]
fn test_lda_indirect_indexed_pointer_wraps_in_page() {
    // Pointer at $FF takes its high byte from $00
    let mut cpu = setup_cpu(&[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x08);
    cpu.memory_mut().write(0x0100, 0x09);
    cpu.memory_mut().write(0x0800, 0x42);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_modes() {
    let mut cpu = setup_cpu(&[
        0xA2, 0x01, // LDX #$01
        0xA6, 0x10, // LDX $10
        0xB6, 0x10, // LDX $10,Y
        0xAE, 0x00, 0x07, // LDX $0700
        0xBE, 0x00, 0x07, // LDX $0700,Y
    ]);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0010, 0x02);
    cpu.memory_mut().write(0x0012, 0x03);
    cpu.memory_mut().write(0x0700, 0x04);
    cpu.memory_mut().write(0x0702, 0x85);

    for expected in [0x01, 0x02, 0x03, 0x04, 0x85] {
        cpu.step().unwrap();
        assert_eq!(cpu.x(), expected);
    }
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x060C);
}

#[test]
fn test_ldy_modes() {
    let mut cpu = setup_cpu(&[
        0xA0, 0x00, // LDY #$00
        0xA4, 0x10, // LDY $10
        0xB4, 0x10, // LDY $10,X
        0xAC, 0x00, 0x07, // LDY $0700
        0xBC, 0x00, 0x07, // LDY $0700,X
    ]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0010, 0x02);
    cpu.memory_mut().write(0x0011, 0x03);
    cpu.memory_mut().write(0x0700, 0x04);
    cpu.memory_mut().write(0x0701, 0x05);

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());

    for expected in [0x02, 0x03, 0x04, 0x05] {
        cpu.step().unwrap();
        assert_eq!(cpu.y(), expected);
    }
    assert!(!cpu.flag_z());
}

// ========== Stores ==========

#[test]
fn test_sta_modes() {
    let mut cpu = setup_cpu(&[
        0x85, 0x10, // STA $10
        0x95, 0x10, // STA $10,X
        0x8D, 0x00, 0x07, // STA $0700
        0x9D, 0x00, 0x07, // STA $0700,X
        0x99, 0x00, 0x07, // STA $0700,Y
        0x81, 0x20, // STA ($20,X)
        0x91, 0x30, // STA ($30),Y
    ]);
    cpu.set_a(0x42);
    cpu.set_x(0x01);
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0021, 0x00);
    cpu.memory_mut().write(0x0022, 0x08);
    cpu.memory_mut().write(0x0030, 0x00);
    cpu.memory_mut().write(0x0031, 0x09);

    for _ in 0..7 {
        cpu.step().unwrap();
    }

    for addr in [0x0010, 0x0011, 0x0700, 0x0701, 0x0702, 0x0800, 0x0902] {
        assert_eq!(cpu.memory().read(addr), 0x42, "address {:04X}", addr);
    }
}

#[test]
fn test_store_leaves_flags() {
    let mut cpu = setup_cpu(&[0x85, 0x10]);
    cpu.set_a(0x00);
    cpu.set_status(0xA1);

    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0xA1);
}

#[test]
fn test_stx_sty_modes() {
    let mut cpu = setup_cpu(&[
        0x86, 0x10, // STX $10
        0x96, 0x10, // STX $10,Y
        0x8E, 0x00, 0x07, // STX $0700
        0x84, 0x20, // STY $20
        0x94, 0x20, // STY $20,X
        0x8C, 0x10, 0x07, // STY $0710
    ]);
    cpu.set_x(0x03);
    cpu.set_y(0x04);

    for _ in 0..6 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.memory().read(0x0010), 0x03);
    assert_eq!(cpu.memory().read(0x0014), 0x03);
    assert_eq!(cpu.memory().read(0x0700), 0x03);
    assert_eq!(cpu.memory().read(0x0020), 0x04);
    assert_eq!(cpu.memory().read(0x0023), 0x04);
    assert_eq!(cpu.memory().read(0x0710), 0x04);
}

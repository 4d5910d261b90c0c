//! Tests for the eight conditional branch instructions.
//!
//! Branch offsets are relative to the address after the 2-byte branch.

use sim6502::{Memory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` loaded at 0x0600
fn setup_cpu(program: &[u8]) -> CPU<Memory> {
    let mut memory = Memory::new();
    memory.load(0x0600, program);
    CPU::new(memory, 0x0600)
}

/// Executes `opcode` with offset +5 under `status` and returns the new PC.
fn branch_target(opcode: u8, status: u8) -> u16 {
    let mut cpu = setup_cpu(&[opcode, 0x05]);
    cpu.set_status(status);
    cpu.step().unwrap();
    assert_eq!(cpu.status(), status, "branches leave flags alone");
    cpu.pc()
}

const TAKEN: u16 = 0x0607;
const NOT_TAKEN: u16 = 0x0602;

#[test]
fn test_bpl_bmi() {
    assert_eq!(branch_target(0x10, 0x20), TAKEN);
    assert_eq!(branch_target(0x10, 0xA0), NOT_TAKEN);
    assert_eq!(branch_target(0x30, 0xA0), TAKEN);
    assert_eq!(branch_target(0x30, 0x20), NOT_TAKEN);
}

#[test]
fn test_bvc_bvs() {
    assert_eq!(branch_target(0x50, 0x20), TAKEN);
    assert_eq!(branch_target(0x50, 0x60), NOT_TAKEN);
    assert_eq!(branch_target(0x70, 0x60), TAKEN);
    assert_eq!(branch_target(0x70, 0x20), NOT_TAKEN);
}

#[test]
fn test_bcc_bcs() {
    assert_eq!(branch_target(0x90, 0x20), TAKEN);
    assert_eq!(branch_target(0x90, 0x21), NOT_TAKEN);
    assert_eq!(branch_target(0xB0, 0x21), TAKEN);
    assert_eq!(branch_target(0xB0, 0x20), NOT_TAKEN);
}

#[test]
fn test_bne_beq() {
    assert_eq!(branch_target(0xD0, 0x20), TAKEN);
    assert_eq!(branch_target(0xD0, 0x22), NOT_TAKEN);
    assert_eq!(branch_target(0xF0, 0x22), TAKEN);
    assert_eq!(branch_target(0xF0, 0x20), NOT_TAKEN);
}

#[test]
fn test_branch_backward() {
    // BNE -4 from $0600 lands on $05FE
    let mut cpu = setup_cpu(&[0xD0, 0xFC]);
    cpu.set_status(0x20);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x05FE);
}

#[test]
fn test_branch_extremes() {
    let mut cpu = setup_cpu(&[0xD0, 0x7F]);
    cpu.set_status(0x20);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0602 + 127);

    let mut cpu = setup_cpu(&[0xD0, 0x80]);
    cpu.set_status(0x20);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0602 - 128);
}

#[test]
fn test_count_down_loop() {
    // LDX #3 ; loop: DEX ; BNE loop ; BRK
    let mut cpu = setup_cpu(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x00]);

    let (steps, _) = cpu.run(100).unwrap();

    assert_eq!(cpu.x(), 0);
    assert_eq!(steps, 1 + 3 * 2 + 1);
    assert_eq!(cpu.memory().read(cpu.pc() - 1), 0x00);
}

//! Tests for the JavaScript-facing Emulator6502 wrapper, driven natively.
//!
//! Run with `cargo test --features wasm`.

#![cfg(feature = "wasm")]

use sim6502::wasm::Emulator6502;

/// Helper function to create an emulator with `source` assembled
fn setup_emulator(source: &str) -> Emulator6502 {
    let mut emulator = Emulator6502::new();
    let result = emulator.assemble(source.to_string());
    assert!(result.success(), "{:?}", result.error_message());
    emulator
}

#[test]
fn test_assemble_success() {
    let mut emulator = Emulator6502::new();
    let result = emulator.assemble("lda #5\nsec\nsbc #3\nsta $0700".to_string());

    assert!(result.success());
    assert_eq!(result.byte_count(), 8);
    assert_eq!(result.start_addr(), 0x0600);
    assert_eq!(result.end_addr(), 0x0608);
    assert_eq!(result.error_message(), None);
    assert_eq!(result.error_line(), None);
    assert_eq!(emulator.read_memory(0x0600), 0xA9);
}

#[test]
fn test_assemble_failure_reports_line() {
    let mut emulator = Emulator6502::new();
    let result = emulator.assemble("nop\nfoo #1".to_string());

    assert!(!result.success());
    assert_eq!(result.byte_count(), 0);
    assert_eq!(result.error_line(), Some(2));
    assert_eq!(
        result.error_message().as_deref(),
        Some("syntax error in line 2: **foo #1** (operator \"foo\" does not exist)")
    );
    assert_eq!(emulator.current_line(), None);
}

#[test]
fn test_step_reports_outcome() {
    let mut emulator = setup_emulator("ldx #1\nbrk\ninx");

    assert!(emulator.step().unwrap());
    assert_eq!(emulator.x(), 1);

    // BRK pauses
    assert!(!emulator.step().unwrap());
    assert_eq!(emulator.pc(), 0x0603);

    // Stepping resumes after the BRK
    assert!(emulator.step().unwrap());
    assert_eq!(emulator.x(), 2);
}

#[test]
fn test_step_unknown_opcode_is_error() {
    let mut emulator = setup_emulator("nop");
    emulator.write_memory(0x0601, 0x02);

    emulator.step().unwrap();
    let error = emulator.step().unwrap_err();
    assert_eq!(error.message(), "unknown opcode $02 at $0601");
}

#[test]
fn test_run_counts_steps() {
    let mut emulator = setup_emulator("loop: inx\njmp loop");
    assert_eq!(emulator.run(5).unwrap(), 5);
    assert_eq!(emulator.x(), 3);

    let mut emulator = setup_emulator("inx\nbrk");
    assert_eq!(emulator.run(100).unwrap(), 2);
}

#[test]
fn test_current_line_follows_pc() {
    let mut emulator = setup_emulator("; setup\nlda #1\n\nsta $10\nbrk");
    assert_eq!(emulator.current_line(), Some(2));

    emulator.step().unwrap();
    assert_eq!(emulator.current_line(), Some(4));

    emulator.step().unwrap();
    assert_eq!(emulator.current_line(), Some(5));

    emulator.reset();
    assert_eq!(emulator.current_line(), None);
}

#[test]
fn test_undo_and_flags() {
    let mut emulator = setup_emulator("sed\nsec\nlda #$80");
    assert!(!emulator.can_undo());
    assert!(emulator.flag_z());

    emulator.run(3).unwrap();
    assert!(emulator.flag_d());
    assert!(emulator.flag_c());
    assert!(emulator.flag_n());
    assert!(!emulator.flag_z());
    assert_eq!(emulator.status(), 0xA9);

    emulator.undo().unwrap();
    assert_eq!(emulator.a(), 0);
    assert!(emulator.flag_z());
    assert!(emulator.can_undo());
}

#[test]
fn test_undo_reverts_memory_writes() {
    let mut emulator = setup_emulator("nop\nnop");
    emulator.step().unwrap();
    emulator.write_memory(0x0300, 0x42);

    emulator.undo().unwrap();
    assert_eq!(emulator.read_memory(0x0300), 0x00);
    assert_eq!(emulator.pc(), 0x0600);

    assert_eq!(emulator.undo().unwrap_err().message(), "undo stack is empty");
}

#[test]
fn test_resets() {
    let mut emulator = setup_emulator("lda #7\npha");
    emulator.run(2).unwrap();
    assert_eq!(emulator.sp(), 0xFE);

    emulator.reset_registers();
    assert_eq!(emulator.a(), 0);
    assert_eq!(emulator.y(), 0);
    assert_eq!(emulator.sp(), 0xFF);
    assert_eq!(emulator.pc(), 0x0600);
    assert!(!emulator.can_undo());
    assert_eq!(emulator.read_memory(0x0600), 0xA9);

    emulator.reset_memory();
    assert_eq!(emulator.read_memory(0x0600), 0x00);
    assert_eq!(emulator.read_memory(0x01FF), 0x00);
}

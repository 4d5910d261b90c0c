//! # Control Flow Instructions
//!
//! This module implements instructions that change the flow of execution:
//! - JMP: Jump (absolute and indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Break
//!
//! The indirect JMP target is resolved during decoding, including the
//! same-page wrap of the pointer's high byte.

use crate::cpu::{BreakReason, Operand, StepOutcome};
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let Operand::Address(target) = operand else {
        unreachable!("JMP is only encoded with an address operand")
    };
    cpu.pc.jump(target);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (high byte first), so
/// SP decreases by 2, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let Operand::Address(target) = operand else {
        unreachable!("JSR is only encoded with an address operand")
    };
    cpu.pc.jump_to_subroutine(target, &mut cpu.sp, &mut cpu.memory);
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc.return_from_subroutine(&mut cpu.sp, &cpu.memory);
}

/// Executes the BRK (Force Break) instruction.
///
/// There is no interrupt vector: BRK simply halts with PC one byte past it.
pub(crate) fn execute_brk() -> StepOutcome {
    StepOutcome::Halted(BreakReason::Break)
}

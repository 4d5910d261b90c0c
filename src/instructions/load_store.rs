//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, updating Z and N
//! - STA, STX, STY: store a register to memory, no flags affected

use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

fn store_target(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        _ => unreachable!("stores are only encoded with an address operand"),
    }
}

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.a.load(value, &mut cpu.status);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.x.load(value, &mut cpu.status);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.y.load(value, &mut cpu.status);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a.store(&mut cpu.memory, store_target(operand));
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x.store(&mut cpu.memory, store_target(operand));
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y.store(&mut cpu.memory, store_target(operand));
}

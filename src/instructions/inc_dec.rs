//! # Increment and Decrement Instructions
//!
//! - INC, DEC: modify a memory cell
//! - INX, INY, DEX, DEY: modify an index register
//!
//! All wrap modulo 256 and update Z and N.

use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

fn target(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        _ => unreachable!("INC/DEC are only encoded with an address operand"),
    }
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.increment(target(operand), &mut cpu.status);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.memory.decrement(target(operand), &mut cpu.status);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x.increment(&mut cpu.status);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y.increment(&mut cpu.status);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x.decrement(&mut cpu.status);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y.decrement(&mut cpu.status);
}

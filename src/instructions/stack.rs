//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp.push_register(&mut cpu.memory, &cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed exactly as it is.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp.push_status(&mut cpu.memory, &cpu.status);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp.pull_register(&cpu.memory, &mut cpu.a, &mut cpu.status);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Bit 5 is always set after the pull.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp.pull_status(&cpu.memory, &mut cpu.status);
}

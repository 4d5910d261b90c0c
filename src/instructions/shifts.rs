//! # Shift and Rotate Instructions
//!
//! This module implements ASL, LSR, ROL and ROR on either the accumulator or
//! a memory cell. Both targets share the same algorithm from
//! [`crate::arithmetic`].
//!
//! Flags affected: C (bit shifted out), Z, N

use crate::arithmetic;
use crate::cpu::Operand;
use crate::registers::StatusRegister;
use crate::value::Byte;
use crate::{MemoryBus, CPU};

fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    operation: fn(Byte, &mut StatusRegister) -> Byte,
) {
    match operand {
        Operand::Accumulator => {
            let result = operation(cpu.a.value(), &mut cpu.status);
            cpu.a.set(result);
        }
        Operand::Address(addr) => cpu.memory.modify(addr, &mut cpu.status, operation),
        _ => unreachable!("shifts take the accumulator or an address, not {:?}", operand),
    }
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, arithmetic::arithmetic_shift_left);
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, arithmetic::logical_shift_right);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, arithmetic::rotate_left);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift(cpu, operand, arithmetic::rotate_right);
}

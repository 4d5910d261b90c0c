//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: compare a register with memory
//! - BIT: test bits against the accumulator
//!
//! ADC and SBC honor the Decimal flag; see [`crate::arithmetic`] for the BCD rules.

use crate::arithmetic;
use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = arithmetic::add_with_carry(cpu.a.value(), value, &mut cpu.status);
    cpu.a.set(result);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry clear means a borrow is pending.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = arithmetic::subtract_with_carry(cpu.a.value(), value, &mut cpu.status);
    cpu.a.set(result);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = arithmetic::and(cpu.a.value(), value, &mut cpu.status);
    cpu.a.set(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = arithmetic::or(cpu.a.value(), value, &mut cpu.status);
    cpu.a.set(result);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = arithmetic::xor(cpu.a.value(), value, &mut cpu.status);
    cpu.a.set(result);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected: C, Z, N
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.a.compare(value, &mut cpu.status);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.x.compare(value, &mut cpu.status);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.y.compare(value, &mut cpu.status);
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is unchanged.
///
/// Flags affected:
/// - N: bit 7 of memory
/// - V: bit 6 of memory
/// - Z: set if A & memory == 0
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    arithmetic::bit_test(cpu.a.value(), value, &mut cpu.status);
}

//! # Branch Instructions
//!
//! This module implements the conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! added to the address following the operand. No flags are affected.

use crate::cpu::Operand;
use crate::{MemoryBus, Mnemonic, CPU};

/// Executes any of the eight conditional branches.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, operand: Operand) {
    let Operand::Relative(offset) = operand else {
        unreachable!("{} is only encoded with a relative operand", mnemonic)
    };

    let status = &cpu.status;
    let condition = match mnemonic {
        Mnemonic::Bcc => !status.carry(),
        Mnemonic::Bcs => status.carry(),
        Mnemonic::Beq => status.zero(),
        Mnemonic::Bne => !status.zero(),
        Mnemonic::Bmi => status.negative(),
        Mnemonic::Bpl => !status.negative(),
        Mnemonic::Bvc => !status.overflow(),
        Mnemonic::Bvs => status.overflow(),
        _ => unreachable!("{} is not a branch", mnemonic),
    };

    cpu.pc.branch(condition, offset);
}

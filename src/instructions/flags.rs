//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode

use crate::registers::Flag;
use crate::{MemoryBus, Mnemonic, CPU};

/// Executes one of the seven flag instructions.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic) {
    let (flag, state) = match mnemonic {
        Mnemonic::Clc => (Flag::Carry, false),
        Mnemonic::Sec => (Flag::Carry, true),
        Mnemonic::Cli => (Flag::InterruptDisable, false),
        Mnemonic::Sei => (Flag::InterruptDisable, true),
        Mnemonic::Clv => (Flag::Overflow, false),
        Mnemonic::Cld => (Flag::Decimal, false),
        Mnemonic::Sed => (Flag::Decimal, true),
        _ => unreachable!("{} does not set a flag", mnemonic),
    };

    cpu.status.set_flag(flag, state);
}

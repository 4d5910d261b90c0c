//! # CPU Registers
//!
//! Register types with the operations each register supports:
//!
//! - [`Register8`]: A, X and Y. Loads, stores, transfers, increments and
//!   comparisons, with the flag updates the 6502 performs
//! - [`StackPointer`]: offset into the stack page 0x0100-0x01FF
//! - [`ProgramCounter`]: jumps, branches and subroutine linkage
//! - [`StatusRegister`]: the packed NV-BDIZC flags

mod program_counter;
mod stack_pointer;
mod status;

pub use program_counter::ProgramCounter;
pub use stack_pointer::StackPointer;
pub use status::{Flag, StatusRegister};

use crate::addressing::IndexOffset;
use crate::arithmetic;
use crate::memory::MemoryBus;
use crate::value::Byte;

/// An 8-bit general-purpose register (A, X or Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Register8(Byte);

impl Register8 {
    pub const fn new(value: Byte) -> Self {
        Register8(value)
    }

    pub const fn value(&self) -> Byte {
        self.0
    }

    /// Sets the register without touching any flag.
    pub fn set(&mut self, value: Byte) {
        self.0 = value;
    }

    /// LDA/LDX/LDY: sets the register and updates Z and N.
    pub fn load(&mut self, value: Byte, status: &mut StatusRegister) {
        self.0 = arithmetic::load(value, status);
    }

    /// STA/STX/STY: writes the register to `addr`. No flags change.
    pub fn store(&self, memory: &mut impl MemoryBus, addr: u16) {
        memory.write(addr, self.0.unsigned());
    }

    /// TAX/TAY/TXA/TYA: copies this register into `target`, updating Z and N.
    pub fn transfer_to(&self, target: &mut Register8, status: &mut StatusRegister) {
        target.load(self.0, status);
    }

    /// INX/INY.
    pub fn increment(&mut self, status: &mut StatusRegister) {
        self.0 = arithmetic::increment(self.0, status);
    }

    /// DEX/DEY.
    pub fn decrement(&mut self, status: &mut StatusRegister) {
        self.0 = arithmetic::decrement(self.0, status);
    }

    /// CMP/CPX/CPY against `operand`. The register is unchanged.
    pub fn compare(&self, operand: Byte, status: &mut StatusRegister) {
        arithmetic::compare(self.0, operand, status);
    }
}

impl IndexOffset for Register8 {
    fn offset(&self) -> u8 {
        self.0.unsigned()
    }
}

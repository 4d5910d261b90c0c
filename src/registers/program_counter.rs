//! # Program Counter

use log::trace;

use super::StackPointer;
use crate::memory::MemoryBus;
use crate::value::{Byte, Word};

/// The 16-bit PC register.
///
/// During execution PC always points past the bytes already fetched, so
/// branch offsets and JSR return addresses are computed from the address
/// after the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgramCounter(Word);

impl ProgramCounter {
    pub const fn new(addr: u16) -> Self {
        ProgramCounter(Word::new(addr))
    }

    pub const fn value(&self) -> u16 {
        self.0.unsigned()
    }

    /// Advances by one byte, wrapping at 0xFFFF.
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_offset(1);
    }

    /// JMP.
    pub fn jump(&mut self, addr: u16) {
        self.0 = Word::new(addr);
    }

    /// Adds a signed offset when `condition` holds.
    pub fn branch(&mut self, condition: bool, offset: Byte) {
        if condition {
            self.0 = self.0.wrapping_offset(offset.signed() as i32);
            trace!("branch taken to {:04X}", self.value());
        }
    }

    /// JSR: pushes the address of the last operand byte (high byte first)
    /// and jumps to `addr`.
    pub fn jump_to_subroutine(
        &mut self,
        addr: u16,
        stack: &mut StackPointer,
        memory: &mut impl MemoryBus,
    ) {
        let return_addr = self.0.wrapping_offset(-1);
        stack.push(memory, return_addr.high());
        stack.push(memory, return_addr.low());
        self.jump(addr);
    }

    /// RTS: pulls the return address (low byte first) and resumes after it.
    pub fn return_from_subroutine(&mut self, stack: &mut StackPointer, memory: &impl MemoryBus) {
        let low = stack.pull(memory);
        let high = stack.pull(memory);
        self.0 = Word::from_bytes(low, high).wrapping_offset(1);
    }
}

//! # Stack Pointer
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. Pushing writes
//! at the current slot and then decrements; pulling increments and then reads.
//! The pointer wraps within the page in both directions.

use log::trace;

use super::{Register8, StatusRegister};
use crate::memory::MemoryBus;
use crate::value::Byte;

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// The S register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackPointer(Byte);

impl StackPointer {
    /// Value after reset: the top of the stack page.
    pub const RESET_VALUE: u8 = 0xFF;

    pub const fn new() -> Self {
        StackPointer(Byte::new(Self::RESET_VALUE))
    }

    pub const fn value(&self) -> Byte {
        self.0
    }

    pub fn set(&mut self, value: Byte) {
        self.0 = value;
    }

    /// Full address of the next free slot.
    pub const fn address(&self) -> u16 {
        STACK_PAGE + self.0.unsigned() as u16
    }

    pub fn push(&mut self, memory: &mut impl MemoryBus, value: Byte) {
        trace!("push {:02X} at {:04X}", value, self.address());
        memory.write(self.address(), value.unsigned());
        self.0 = Byte::new(self.0.unsigned().wrapping_sub(1));
    }

    pub fn pull(&mut self, memory: &impl MemoryBus) -> Byte {
        self.0 = Byte::new(self.0.unsigned().wrapping_add(1));
        Byte::new(memory.read(self.address()))
    }

    /// PHA.
    pub fn push_register(&mut self, memory: &mut impl MemoryBus, register: &Register8) {
        self.push(memory, register.value());
    }

    /// PLA: pulls into `register`, updating Z and N.
    pub fn pull_register(
        &mut self,
        memory: &impl MemoryBus,
        register: &mut Register8,
        status: &mut StatusRegister,
    ) {
        let value = self.pull(memory);
        register.load(value, status);
    }

    /// PHP: pushes the status byte unchanged.
    pub fn push_status(&mut self, memory: &mut impl MemoryBus, status: &StatusRegister) {
        self.push(memory, status.value());
    }

    /// PLP: pulls the status byte and forces the expansion bit on.
    pub fn pull_status(&mut self, memory: &impl MemoryBus, status: &mut StatusRegister) {
        let value = self.pull(memory);
        status.set_value(value);
        status.set_expansion(true);
    }

    /// TSX: copies S into `target`, updating Z and N.
    pub fn transfer_to(&self, target: &mut Register8, status: &mut StatusRegister) {
        target.load(self.0, status);
    }

    /// TXS: copies `source` into S. No flags change.
    pub fn load_from(&mut self, source: &Register8) {
        self.0 = source.value();
    }
}

impl Default for StackPointer {
    fn default() -> Self {
        Self::new()
    }
}

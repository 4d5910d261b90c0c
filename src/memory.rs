//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory implementation, and [`Memory`], the flat 64KB store the simulator
//! runs on.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors: reads and writes always succeed
//! - Addresses are 16 bits, so every address is in range
//! - Read-modify-write operations (INC, ASL, ...) are provided methods built on
//!   `read` and `write`, so every implementation gets them for free

use log::trace;

use crate::arithmetic;
use crate::registers::StatusRegister;
use crate::value::Byte;

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use sim6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
///
/// // Write a value
/// mem.write(0x1234, 0x42);
///
/// // Read it back
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use sim6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads the 16-bit address stored little-endian at `addr` and `addr + 1`.
    ///
    /// When `addr` is the last byte of a page, the high byte is fetched from
    /// the first byte of the same page rather than the next page. `JMP ($10FF)`
    /// therefore reads its target from `$10FF` and `$1000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{Memory, MemoryBus};
    ///
    /// let mut mem = Memory::new();
    /// mem.write(0x00FF, 0x34);
    /// mem.write(0x0000, 0x12);
    /// mem.write(0x0100, 0x99);
    /// assert_eq!(mem.little_endian_address(0x00FF), 0x1234);
    /// ```
    fn little_endian_address(&self, addr: u16) -> u16 {
        let high_addr = if addr & 0x00FF == 0x00FF {
            addr.wrapping_sub(0x00FF)
        } else {
            addr.wrapping_add(1)
        };

        u16::from_le_bytes([self.read(addr), self.read(high_addr)])
    }

    /// Applies `operation` to the byte at `addr` and writes the result back.
    fn modify(
        &mut self,
        addr: u16,
        status: &mut StatusRegister,
        operation: fn(Byte, &mut StatusRegister) -> Byte,
    ) {
        let value = operation(Byte::new(self.read(addr)), status);
        self.write(addr, value.unsigned());
    }

    /// INC: adds one to the byte at `addr`, updating Z and N.
    fn increment(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::increment);
    }

    /// DEC: subtracts one from the byte at `addr`, updating Z and N.
    fn decrement(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::decrement);
    }

    /// ASL on a memory cell.
    fn arithmetic_shift_left(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::arithmetic_shift_left);
    }

    /// LSR on a memory cell.
    fn logical_shift_right(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::logical_shift_right);
    }

    /// ROL on a memory cell.
    fn rotate_left(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::rotate_left);
    }

    /// ROR on a memory cell.
    fn rotate_right(&mut self, addr: u16, status: &mut StatusRegister) {
        self.modify(addr, status, arithmetic::rotate_right);
    }
}

/// The simulator's 64KB flat memory.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// While a write journal is open, every write records the address and the
/// byte it overwrote. The processor keeps a journal open around each
/// instruction and the edits after it, so both can be rolled back.
#[derive(Debug, Clone)]
pub struct Memory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,

    /// Overwritten cells since the journal was opened
    journal: Option<Vec<(u16, u8)>>,
}

impl Memory {
    /// Creates a new Memory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
            journal: None,
        }
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.write(start.wrapping_add(offset as u16), byte);
        }
    }

    /// Read-only view of all 65536 cells.
    pub fn cells(&self) -> &[u8; MEMORY_SIZE] {
        &self.data
    }

    /// Copies `len` bytes starting at `start`, wrapping past 0xFFFF.
    pub fn dump(&self, start: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(start.wrapping_add(offset as u16)))
            .collect()
    }

    /// Starts recording overwritten cells, discarding any open journal.
    pub(crate) fn open_journal(&mut self) {
        self.journal = Some(Vec::new());
    }

    /// Stops recording and returns the overwritten cells in write order.
    pub(crate) fn close_journal(&mut self) -> Vec<(u16, u8)> {
        self.journal.take().unwrap_or_default()
    }

    /// Puts back the bytes recorded in a journal, newest first.
    pub(crate) fn roll_back(&mut self, journal: &[(u16, u8)]) {
        trace!("rolling back {} memory writes", journal.len());
        for &(addr, previous) in journal.iter().rev() {
            self.data[addr as usize] = previous;
        }
    }

    /// Copy of the full memory image.
    pub(crate) fn image(&self) -> Box<[u8; MEMORY_SIZE]> {
        self.data.clone()
    }

    /// Replaces the full memory image.
    pub(crate) fn restore_image(&mut self, image: Box<[u8; MEMORY_SIZE]>) {
        self.data = image;
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        let cell = &mut self.data[addr as usize];
        if let Some(journal) = self.journal.as_mut() {
            journal.push((addr, *cell));
        }
        *cell = value;
    }
}

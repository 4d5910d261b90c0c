//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed NV-BDIZC flags
//!
//! ## Execution Model
//!
//! `step()` executes one instruction:
//! 1. Read the opcode at PC and advance PC
//! 2. Decode it through [`OPCODE_TABLE`](crate::OPCODE_TABLE)
//! 3. Fetch the operand bytes the addressing mode calls for, advancing PC past them
//! 4. Resolve the operand (immediate value or effective address)
//! 5. Dispatch to the instruction handler
//!
//! BRK stops execution with [`StepOutcome::Halted`]. An opcode with no table
//! entry fails with [`ExecutionError::UnknownOpcode`], leaving PC one byte past it.

use std::fmt;

use log::{trace, warn};

use crate::addressing::{indexed, zero_page_indexed, AddressingMode};
use crate::instructions;
use crate::registers::{ProgramCounter, Register8, StackPointer, StatusRegister};
use crate::value::{Byte, Word};
use crate::{lookup_opcode, ExecutionError, MemoryBus};

/// Why execution paused without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    /// A BRK instruction was executed.
    Break,
}

impl fmt::Display for BreakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakReason::Break => write!(f, "program was interrupted"),
        }
    }
}

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed; execution may continue.
    Continue,

    /// Execution paused. Stepping again resumes after the BRK.
    Halted(BreakReason),
}

/// A decoded operand, ready for the instruction handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Implied,
    Accumulator,
    Immediate(Byte),
    Relative(Byte),
    Address(u16),
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use sim6502::{Memory, MemoryBus, StepOutcome, CPU};
///
/// let mut memory = Memory::new();
/// memory.load(0x0600, &[0xA9, 0x05, 0x00]); // LDA #$05 ; BRK
///
/// let mut cpu = CPU::new(memory, 0x0600);
/// assert_eq!(cpu.step().unwrap(), StepOutcome::Continue);
/// assert_eq!(cpu.a(), 0x05);
/// assert!(matches!(cpu.step().unwrap(), StepOutcome::Halted(_)));
/// assert_eq!(cpu.pc(), 0x0603);
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: Register8,

    /// X index register
    pub(crate) x: Register8,

    /// Y index register
    pub(crate) y: Register8,

    /// Program counter (address of next instruction)
    pub(crate) pc: ProgramCounter,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: StackPointer,

    /// Processor status flags
    pub(crate) status: StatusRegister,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in the reset state with PC at `start_address`.
    ///
    /// A, X and Y are zero, SP is 0xFF and the status register is 0x22.
    pub fn new(memory: M, start_address: u16) -> Self {
        Self {
            a: Register8::default(),
            x: Register8::default(),
            y: Register8::default(),
            pc: ProgramCounter::new(start_address),
            sp: StackPointer::new(),
            status: StatusRegister::new(),
            memory,
        }
    }

    /// Restores every register to its reset value. Memory is untouched.
    pub fn reset_registers(&mut self, start_address: u16) {
        self.a = Register8::default();
        self.x = Register8::default();
        self.y = Register8::default();
        self.pc = ProgramCounter::new(start_address);
        self.sp = StackPointer::new();
        self.status = StatusRegister::new();
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Continue)` after a normal instruction
    /// - `Ok(StepOutcome::Halted(BreakReason::Break))` after BRK
    /// - `Err(ExecutionError::UnknownOpcode { .. })` if the opcode is unmapped
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        let address = self.pc.value();
        let opcode = self.fetch_byte().unsigned();

        let Some(metadata) = lookup_opcode(opcode) else {
            warn!("unknown opcode ${:02X} at ${:04X}", opcode, address);
            return Err(ExecutionError::UnknownOpcode { address, opcode });
        };

        let operand = self.decode_operand(metadata.addressing_mode);
        trace!(
            "{:04X}  {:02X}  {} {:?}  A={:02X} X={:02X} Y={:02X} SP={:02X} P={}",
            address,
            opcode,
            metadata.mnemonic,
            operand,
            self.a.value(),
            self.x.value(),
            self.y.value(),
            self.sp.value(),
            self.status
        );

        Ok(instructions::execute(self, metadata.mnemonic, operand))
    }

    /// Steps until BRK, an error, or `step_limit` instructions have run.
    ///
    /// Returns the number of instructions executed and the final outcome.
    pub fn run(&mut self, step_limit: usize) -> Result<(usize, StepOutcome), ExecutionError> {
        let mut steps = 0;
        let mut outcome = StepOutcome::Continue;

        while steps < step_limit {
            outcome = self.step()?;
            steps += 1;
            if outcome != StepOutcome::Continue {
                break;
            }
        }

        Ok((steps, outcome))
    }

    fn fetch_byte(&mut self) -> Byte {
        let value = Byte::new(self.memory.read(self.pc.value()));
        self.pc.increment();
        value
    }

    fn fetch_word(&mut self) -> Word {
        let low = self.fetch_byte();
        let high = self.fetch_byte();
        Word::from_bytes(low, high)
    }

    /// Fetches the operand bytes for `mode` and resolves the effective address.
    fn decode_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Relative(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte().unsigned() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte().unsigned();
                Operand::Address(zero_page_indexed(base, &self.x))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte().unsigned();
                Operand::Address(zero_page_indexed(base, &self.y))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word().unsigned()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word().unsigned();
                Operand::Address(indexed(base, &self.x))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word().unsigned();
                Operand::Address(indexed(base, &self.y))
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word().unsigned();
                Operand::Address(self.memory.little_endian_address(pointer))
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_byte().unsigned();
                let pointer = zero_page_indexed(base, &self.x);
                Operand::Address(self.memory.little_endian_address(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte().unsigned() as u16;
                let base = self.memory.little_endian_address(pointer);
                Operand::Address(indexed(base, &self.y))
            }
        }
    }

    /// Value an instruction reads: the immediate byte or the byte at the
    /// effective address.
    pub(crate) fn read_operand(&self, operand: Operand) -> Byte {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => Byte::new(self.memory.read(addr)),
            Operand::Accumulator => self.a.value(),
            Operand::Implied | Operand::Relative(_) => {
                unreachable!("no value operand for {:?}", operand)
            }
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a.value().unsigned()
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x.value().unsigned()
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y.value().unsigned()
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc.value()
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp.value().unsigned()
    }

    /// Returns the packed status byte.
    pub fn status(&self) -> u8 {
        self.status.value().unsigned()
    }

    pub fn status_register(&self) -> &StatusRegister {
        &self.status
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a.set(Byte::new(value));
    }

    pub fn set_x(&mut self, value: u8) {
        self.x.set(Byte::new(value));
    }

    pub fn set_y(&mut self, value: u8) {
        self.y.set(Byte::new(value));
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc.jump(value);
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp.set(Byte::new(value));
    }

    pub fn set_status(&mut self, value: u8) {
        self.status.set_value(Byte::new(value));
    }

    pub fn status_register_mut(&mut self) -> &mut StatusRegister {
        &mut self.status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow()
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.break_flag()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry()
    }

    pub fn set_flag_c(&mut self, state: bool) {
        self.status.set_carry(state);
    }

    pub fn set_flag_d(&mut self, state: bool) {
        self.status.set_decimal(state);
    }

    pub fn set_flag_v(&mut self, state: bool) {
        self.status.set_overflow(state);
    }
}

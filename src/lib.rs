//! # 6502 Simulator Core
//!
//! A stepping MOS 6502 simulator with a two-pass assembler and
//! instruction-level undo, designed for clarity and WebAssembly portability.
//!
//! This crate assembles mnemonic source into a 64KB address space, executes
//! it one instruction at a time with bit-exact register, memory and flag
//! semantics (including BCD arithmetic), and can step backward through every
//! executed instruction.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{Processor, StepOutcome};
//!
//! let mut processor = Processor::new();
//! let output = processor.assemble("lda #5\nsec\nsbc #3\nsta $0700").unwrap();
//! assert_eq!(output.byte_count, 8);
//!
//! for _ in 0..4 {
//!     assert_eq!(processor.execute_next().unwrap(), StepOutcome::Continue);
//! }
//! assert_eq!(processor.a(), 2);
//!
//! // Step back over the store
//! processor.undo().unwrap();
//! assert_eq!(processor.pc(), 0x0605);
//! ```
//!
//! ## Architecture
//!
//! - **Single opcode table**: [`OPCODE_TABLE`] is consulted by both the
//!   assembler and the CPU, so encoding and execution cannot disagree
//! - **Value types**: [`Byte`] and [`Word`] keep signed and unsigned views of
//!   8- and 16-bit values consistent
//! - **Trait-based memory**: the CPU is generic over [`MemoryBus`]
//! - **Undo**: every attempted instruction is recorded, see [`undo`]
//!
//! ## Modules
//!
//! - `value` - Byte/Word values and literal parsing
//! - `registers` - Register bank, stack pointer, program counter, status flags
//! - `arithmetic` - ALU operations and flag computation
//! - `memory` - MemoryBus trait and the 64KB memory
//! - `opcodes` - Mnemonics and the opcode metadata table
//! - `addressing` - Addressing modes
//! - `cpu` - Fetch-decode-execute
//! - `assembler` - Two-pass assembler
//! - `undo` - Per-instruction snapshots
//! - `processor` - The aggregate a front end drives

pub mod addressing;
pub mod arithmetic;
pub mod assembler;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod processor;
pub mod registers;
pub mod undo;
pub mod value;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

use thiserror::Error;

// Re-export public API
pub use addressing::AddressingMode;
pub use assembler::{Assembler, AssemblerError, AssemblerOutput, ErrorType, OperandProblem};
pub use cpu::{BreakReason, StepOutcome, CPU};
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{find_opcode, lookup_opcode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use processor::{Processor, ProcessorOptions, ProcessorState, RunSummary};
pub use registers::{Flag, StatusRegister};
pub use undo::{UndoError, UndoStrategy};
pub use value::{Byte, ParseLiteralError, Radix, Word};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The byte at `address` is not a mapped opcode.
    ///
    /// PC is left one byte past it.
    #[error("unknown opcode ${opcode:02X} at ${address:04X}")]
    UnknownOpcode { address: u16, opcode: u8 },
}

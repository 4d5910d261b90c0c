//! 6502 Assembler Module
//!
//! Converts assembly language source code into machine code written straight
//! into memory.
//!
//! Assembly runs in two passes:
//!
//! 1. **Filter**: every line is parsed, labels are bound to the running
//!    emission address, and each operator is resolved to an opcode so the
//!    address can advance by the instruction's size. Label and operator
//!    errors surface here, before anything is written.
//! 2. **Emit**: for each instruction the opcode byte is written, then the
//!    operand is parsed as a literal or resolved as a label and written after
//!    it. Assembly is not transactional: bytes written for lines before a
//!    failing line stay in memory.
//!
//! # Examples
//!
//! ```
//! use sim6502::assembler::Assembler;
//! use sim6502::Memory;
//!
//! let mut memory = Memory::new();
//! let output = Assembler::new(0x0600)
//!     .assemble("lda #5\nsec\nsbc #3\nsta $0700", &mut memory)
//!     .unwrap();
//!
//! assert_eq!(output.byte_count, 8);
//! assert_eq!(memory.dump(0x0600, 8), [0xA9, 0x05, 0x38, 0xE9, 0x03, 0x8D, 0x00, 0x07]);
//! ```

pub mod encoder;
pub mod parser;
pub mod source_map;
pub mod symbol_table;

use log::{debug, info, warn};
use thiserror::Error;

use crate::memory::MemoryBus;
use crate::opcodes::Mnemonic;
use crate::value::{Byte, Word};
use encoder::{clean_operand, select_opcode, Encoding};
use parser::parse_line;
use source_map::SourceMap;
use symbol_table::SymbolTable;

/// Complete output from assembling source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerOutput {
    /// Number of bytes written to memory
    pub byte_count: usize,

    /// Every label defined, in definition order
    pub symbols: Vec<Symbol>,

    /// Instruction address to source line mapping
    pub source_map: SourceMap,
}

/// A symbol table entry mapping a label to an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Label name, case-sensitive
    pub name: String,

    /// Resolved memory address for this label
    pub address: u16,

    /// Source line where label was defined (1-indexed)
    pub defined_at: usize,
}

/// An error encountered during assembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error in line {line}: **{source_line}** ({error_type})")]
pub struct AssemblerError {
    /// Error type classification
    pub error_type: ErrorType,

    /// Line number where error occurred (1-indexed)
    pub line: usize,

    /// The offending line exactly as written
    pub source_line: String,
}

/// Classification of assembly errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorType {
    /// The operator names no known instruction
    #[error("operator \"{0}\" does not exist")]
    UnknownOperator(String),

    /// The operand is missing or cannot be encoded
    #[error("{0}")]
    InvalidOperand(OperandProblem),

    /// The label text itself contains a `:`
    #[error("label name \"{0}\" invalid")]
    InvalidLabelName(String),

    /// The label was already defined earlier in the source
    #[error("label \"{0}\" already exists")]
    MultipleLabelUses(String),
}

/// What was wrong with an operand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandProblem {
    #[error("no operand supplied")]
    Missing,

    #[error("operand \"{0}\" is invalid")]
    Unrecognized(String),
}

/// One instruction resolved by the first pass.
#[derive(Debug)]
struct PendingInstruction<'a> {
    line: usize,
    source_line: &'a str,
    address: u16,
    mnemonic: Mnemonic,
    operand: &'a str,
    encoding: Encoding,
}

impl PendingInstruction<'_> {
    fn error(&self, error_type: ErrorType) -> AssemblerError {
        AssemblerError {
            error_type,
            line: self.line,
            source_line: self.source_line.to_string(),
        }
    }

    fn invalid_operand(&self) -> AssemblerError {
        let problem = if self.operand.is_empty() {
            OperandProblem::Missing
        } else {
            OperandProblem::Unrecognized(self.operand.to_string())
        };
        self.error(ErrorType::InvalidOperand(problem))
    }
}

/// Two-pass assembler emitting code from a fixed start address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assembler {
    start_address: u16,
}

impl Assembler {
    pub fn new(start_address: u16) -> Self {
        Self { start_address }
    }

    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    /// Assembles `source` into `memory` starting at the start address.
    ///
    /// # Errors
    ///
    /// Returns the first error found. Pass 1 errors (labels, unknown
    /// operators) leave memory untouched; pass 2 errors leave the bytes of
    /// earlier lines, and the failing line's opcode byte, in memory.
    pub fn assemble<M: MemoryBus>(
        &self,
        source: &str,
        memory: &mut M,
    ) -> Result<AssemblerOutput, AssemblerError> {
        let result = self.assemble_passes(source, memory);
        match &result {
            Ok(output) => info!(
                "assembled {} bytes at ${:04X}, {} labels",
                output.byte_count,
                self.start_address,
                output.symbols.len()
            ),
            Err(error) => warn!("assembly failed: {}", error),
        }
        result
    }

    fn assemble_passes<M: MemoryBus>(
        &self,
        source: &str,
        memory: &mut M,
    ) -> Result<AssemblerOutput, AssemblerError> {
        let (symbols, instructions) = self.first_pass(source)?;

        let mut source_map = SourceMap::new();
        let mut byte_count = 0;

        for instruction in &instructions {
            emit(instruction, &symbols, memory)?;

            let size = instruction.encoding.size_bytes();
            source_map.add_mapping(instruction.address, size, instruction.line);
            byte_count += size as usize;
        }

        source_map.finalize();

        Ok(AssemblerOutput {
            byte_count,
            symbols: symbols.into_symbols(),
            source_map,
        })
    }

    /// Binds labels and sizes every instruction.
    fn first_pass<'a>(
        &self,
        source: &'a str,
    ) -> Result<(SymbolTable, Vec<PendingInstruction<'a>>), AssemblerError> {
        let mut symbols = SymbolTable::new();
        let mut instructions = Vec::new();
        let mut address = self.start_address;

        for (index, source_line) in source.lines().enumerate() {
            let line = index + 1;
            let error = |error_type| AssemblerError {
                error_type,
                line,
                source_line: source_line.to_string(),
            };

            let parsed = parse_line(source_line).map_err(error)?;

            if let Some(label) = parsed.label {
                symbols
                    .add_symbol(label.to_string(), address, line)
                    .map_err(|existing| error(ErrorType::MultipleLabelUses(existing.name)))?;
                debug!("label {} = ${:04X} (line {})", label, address, line);
            }

            let Some(operator) = parsed.operator else {
                continue;
            };

            let mnemonic: Mnemonic = operator
                .parse()
                .map_err(|_| error(ErrorType::UnknownOperator(operator.to_string())))?;

            let encoding = select_opcode(mnemonic, parsed.operand);
            instructions.push(PendingInstruction {
                line,
                source_line,
                address,
                mnemonic,
                operand: parsed.operand,
                encoding,
            });

            address = address.wrapping_add(encoding.size_bytes() as u16);
        }

        Ok((symbols, instructions))
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(crate::processor::DEFAULT_START_ADDRESS)
    }
}

/// Writes one instruction: opcode byte first, then its operand bytes.
///
/// The operand is resolved before anything is written, so a failing line
/// leaves its own bytes untouched. Lines before it stay written.
fn emit<M: MemoryBus>(
    instruction: &PendingInstruction<'_>,
    symbols: &SymbolTable,
    memory: &mut M,
) -> Result<(), AssemblerError> {
    let Some(opcode) = instruction.encoding.opcode else {
        return Err(instruction.invalid_operand());
    };

    let address = instruction.address;
    let operand = clean_operand(instruction.encoding.mode, instruction.operand);
    let label = || symbols.lookup_symbol(operand).map(|symbol| symbol.address);

    let operand_bytes = match opcode.size_bytes {
        1 if operand.is_empty() => Vec::new(),
        2 => {
            let value = match Byte::from_literal(operand) {
                Ok(value) => value,
                Err(_) if instruction.mnemonic.is_branch() => {
                    let target = label().ok_or_else(|| instruction.invalid_operand())?;
                    let next = address.wrapping_add(2);
                    Byte::wrapping_from(target.wrapping_sub(next) as i32)
                }
                Err(_) => return Err(instruction.invalid_operand()),
            };
            vec![value.unsigned()]
        }
        3 => {
            let value = match Word::from_literal(operand) {
                Ok(value) => value,
                Err(_) if matches!(instruction.mnemonic, Mnemonic::Jmp | Mnemonic::Jsr) => {
                    let target = label().ok_or_else(|| instruction.invalid_operand())?;
                    Word::new(target)
                }
                Err(_) => return Err(instruction.invalid_operand()),
            };
            vec![value.low().unsigned(), value.high().unsigned()]
        }
        _ => return Err(instruction.invalid_operand()),
    };

    memory.write(address, opcode.opcode);
    for (offset, byte) in (1..).zip(operand_bytes) {
        memory.write(address.wrapping_add(offset), byte);
    }
    Ok(())
}

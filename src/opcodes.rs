//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction encoding. The CPU decodes through it and the
//! assembler encodes through it, so the two can never disagree.
//!
//! The table covers the documented NMOS 6502 instruction set except RTI:
//! - **150 mapped opcodes** with mnemonic, addressing mode and size
//! - **106 unmapped opcodes** (`None`), which fault when executed
//!
//! ## Examples
//!
//! ```
//! use sim6502::{find_opcode, lookup_opcode, AddressingMode, Mnemonic};
//!
//! let lda = lookup_opcode(0xA9).unwrap();
//! assert_eq!(lda.mnemonic, Mnemonic::Lda);
//! assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
//! assert_eq!(lda.size_bytes, 2);
//!
//! assert_eq!(find_opcode(Mnemonic::Sta, AddressingMode::Absolute).unwrap().opcode, 0x8D);
//! assert!(lookup_opcode(0x40).is_none()); // RTI is not mapped
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::addressing::AddressingMode;

/// The 55 instruction mnemonics understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Every mnemonic, in alphabetical order.
    pub const ALL: [Mnemonic; 55] = {
        use Mnemonic::*;
        [
            Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli, Clv,
            Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop,
            Ora, Pha, Php, Pla, Plp, Rol, Ror, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
            Tsx, Txa, Txs, Tya,
        ]
    };

    /// Upper-case three-letter name.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }

    /// True when the mnemonic has an encoding for `mode`.
    pub fn supports(self, mode: AddressingMode) -> bool {
        find_opcode(self, mode).is_some()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text is not one of the known mnemonics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic \"{0}\"")]
pub struct UnknownMnemonic(pub String);

impl FromStr for Mnemonic {
    type Err = UnknownMnemonic;

    /// Case-insensitive: `lda`, `LDA` and `Lda` all name the same instruction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}

/// Metadata for a single mapped opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The opcode byte itself.
    pub opcode: u8,

    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// How the instruction interprets operand bytes.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: Implicit, Accumulator modes
    /// - 2 bytes: Immediate, Zero Page, Relative, Indexed Indirect modes
    /// - 3 bytes: Absolute, Indirect modes
    pub size_bytes: u8,
}

const fn op(opcode: u8, mnemonic: Mnemonic, addressing_mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode,
        size_bytes: addressing_mode.size_bytes(),
    }
}

/// Every mapped opcode, grouped by mnemonic.
const MAPPED_OPCODES: [OpcodeMetadata; 150] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        op(0x69, Adc, Immediate),
        op(0x65, Adc, ZeroPage),
        op(0x75, Adc, ZeroPageX),
        op(0x6D, Adc, Absolute),
        op(0x7D, Adc, AbsoluteX),
        op(0x79, Adc, AbsoluteY),
        op(0x61, Adc, IndirectX),
        op(0x71, Adc, IndirectY),
        op(0x29, And, Immediate),
        op(0x25, And, ZeroPage),
        op(0x35, And, ZeroPageX),
        op(0x2D, And, Absolute),
        op(0x3D, And, AbsoluteX),
        op(0x39, And, AbsoluteY),
        op(0x21, And, IndirectX),
        op(0x31, And, IndirectY),
        op(0x0A, Asl, Accumulator),
        op(0x06, Asl, ZeroPage),
        op(0x16, Asl, ZeroPageX),
        op(0x0E, Asl, Absolute),
        op(0x1E, Asl, AbsoluteX),
        op(0x90, Bcc, Relative),
        op(0xB0, Bcs, Relative),
        op(0xF0, Beq, Relative),
        op(0x24, Bit, ZeroPage),
        op(0x2C, Bit, Absolute),
        op(0x30, Bmi, Relative),
        op(0xD0, Bne, Relative),
        op(0x10, Bpl, Relative),
        op(0x00, Brk, Implicit),
        op(0x50, Bvc, Relative),
        op(0x70, Bvs, Relative),
        op(0x18, Clc, Implicit),
        op(0xD8, Cld, Implicit),
        op(0x58, Cli, Implicit),
        op(0xB8, Clv, Implicit),
        op(0xC9, Cmp, Immediate),
        op(0xC5, Cmp, ZeroPage),
        op(0xD5, Cmp, ZeroPageX),
        op(0xCD, Cmp, Absolute),
        op(0xDD, Cmp, AbsoluteX),
        op(0xD9, Cmp, AbsoluteY),
        op(0xC1, Cmp, IndirectX),
        op(0xD1, Cmp, IndirectY),
        op(0xE0, Cpx, Immediate),
        op(0xE4, Cpx, ZeroPage),
        op(0xEC, Cpx, Absolute),
        op(0xC0, Cpy, Immediate),
        op(0xC4, Cpy, ZeroPage),
        op(0xCC, Cpy, Absolute),
        op(0xC6, Dec, ZeroPage),
        op(0xD6, Dec, ZeroPageX),
        op(0xCE, Dec, Absolute),
        op(0xDE, Dec, AbsoluteX),
        op(0xCA, Dex, Implicit),
        op(0x88, Dey, Implicit),
        op(0x49, Eor, Immediate),
        op(0x45, Eor, ZeroPage),
        op(0x55, Eor, ZeroPageX),
        op(0x4D, Eor, Absolute),
        op(0x5D, Eor, AbsoluteX),
        op(0x59, Eor, AbsoluteY),
        op(0x41, Eor, IndirectX),
        op(0x51, Eor, IndirectY),
        op(0xE6, Inc, ZeroPage),
        op(0xF6, Inc, ZeroPageX),
        op(0xEE, Inc, Absolute),
        op(0xFE, Inc, AbsoluteX),
        op(0xE8, Inx, Implicit),
        op(0xC8, Iny, Implicit),
        op(0x4C, Jmp, Absolute),
        op(0x6C, Jmp, Indirect),
        op(0x20, Jsr, Absolute),
        op(0xA9, Lda, Immediate),
        op(0xA5, Lda, ZeroPage),
        op(0xB5, Lda, ZeroPageX),
        op(0xAD, Lda, Absolute),
        op(0xBD, Lda, AbsoluteX),
        op(0xB9, Lda, AbsoluteY),
        op(0xA1, Lda, IndirectX),
        op(0xB1, Lda, IndirectY),
        op(0xA2, Ldx, Immediate),
        op(0xA6, Ldx, ZeroPage),
        op(0xB6, Ldx, ZeroPageY),
        op(0xAE, Ldx, Absolute),
        op(0xBE, Ldx, AbsoluteY),
        op(0xA0, Ldy, Immediate),
        op(0xA4, Ldy, ZeroPage),
        op(0xB4, Ldy, ZeroPageX),
        op(0xAC, Ldy, Absolute),
        op(0xBC, Ldy, AbsoluteX),
        op(0x4A, Lsr, Accumulator),
        op(0x46, Lsr, ZeroPage),
        op(0x56, Lsr, ZeroPageX),
        op(0x4E, Lsr, Absolute),
        op(0x5E, Lsr, AbsoluteX),
        op(0xEA, Nop, Implicit),
        op(0x09, Ora, Immediate),
        op(0x05, Ora, ZeroPage),
        op(0x15, Ora, ZeroPageX),
        op(0x0D, Ora, Absolute),
        op(0x1D, Ora, AbsoluteX),
        op(0x19, Ora, AbsoluteY),
        op(0x01, Ora, IndirectX),
        op(0x11, Ora, IndirectY),
        op(0x48, Pha, Implicit),
        op(0x08, Php, Implicit),
        op(0x68, Pla, Implicit),
        op(0x28, Plp, Implicit),
        op(0x2A, Rol, Accumulator),
        op(0x26, Rol, ZeroPage),
        op(0x36, Rol, ZeroPageX),
        op(0x2E, Rol, Absolute),
        op(0x3E, Rol, AbsoluteX),
        op(0x6A, Ror, Accumulator),
        op(0x66, Ror, ZeroPage),
        op(0x76, Ror, ZeroPageX),
        op(0x6E, Ror, Absolute),
        op(0x7E, Ror, AbsoluteX),
        op(0x60, Rts, Implicit),
        op(0xE9, Sbc, Immediate),
        op(0xE5, Sbc, ZeroPage),
        op(0xF5, Sbc, ZeroPageX),
        op(0xED, Sbc, Absolute),
        op(0xFD, Sbc, AbsoluteX),
        op(0xF9, Sbc, AbsoluteY),
        op(0xE1, Sbc, IndirectX),
        op(0xF1, Sbc, IndirectY),
        op(0x38, Sec, Implicit),
        op(0xF8, Sed, Implicit),
        op(0x78, Sei, Implicit),
        op(0x85, Sta, ZeroPage),
        op(0x95, Sta, ZeroPageX),
        op(0x8D, Sta, Absolute),
        op(0x9D, Sta, AbsoluteX),
        op(0x99, Sta, AbsoluteY),
        op(0x81, Sta, IndirectX),
        op(0x91, Sta, IndirectY),
        op(0x86, Stx, ZeroPage),
        op(0x96, Stx, ZeroPageY),
        op(0x8E, Stx, Absolute),
        op(0x84, Sty, ZeroPage),
        op(0x94, Sty, ZeroPageX),
        op(0x8C, Sty, Absolute),
        op(0xAA, Tax, Implicit),
        op(0xA8, Tay, Implicit),
        op(0xBA, Tsx, Implicit),
        op(0x8A, Txa, Implicit),
        op(0x9A, Txs, Implicit),
        op(0x98, Tya, Implicit),
    ]
};

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < MAPPED_OPCODES.len() {
        let entry = MAPPED_OPCODES[i];
        table[entry.opcode as usize] = Some(entry);
        i += 1;
    }
    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Unmapped bytes (illegal opcodes and RTI) are `None`.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Decodes an opcode byte.
pub fn lookup_opcode(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Encodes a mnemonic/addressing mode pair, if the pair exists.
pub fn find_opcode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE
        .iter()
        .flatten()
        .find(|entry| entry.mnemonic == mnemonic && entry.addressing_mode == mode)
}

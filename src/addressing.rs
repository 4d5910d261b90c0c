//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 processor and the
//! address arithmetic they share. Each mode determines how many operand bytes
//! follow an opcode and how the effective address is formed from them.
//!
//! ## Wrapping Rules
//!
//! - Zero page indexed addresses wrap within the zero page:
//!   `($FF,X)` with X = 2 reads from `$0001`
//! - Absolute indexed addresses wrap modulo 65536:
//!   `$FFFF,Y` with Y = 1 reads from `$0000`
//! - Index registers are always treated as unsigned (0..=255)

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the address after the operand)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_size(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(self) -> u8 {
        1 + self.operand_size()
    }

    /// The 16-bit counterpart of a zero page mode.
    ///
    /// Used by the assembler when an instruction has no zero page encoding
    /// for an operand that would fit one, e.g. `JMP $10` or `LDA $10,Y`.
    pub const fn widened(self) -> Option<AddressingMode> {
        match self {
            AddressingMode::ZeroPage => Some(AddressingMode::Absolute),
            AddressingMode::ZeroPageX => Some(AddressingMode::AbsoluteX),
            AddressingMode::ZeroPageY => Some(AddressingMode::AbsoluteY),
            _ => None,
        }
    }
}

/// A register whose value can displace an address.
///
/// Implemented by the X and Y index registers. The offset is always unsigned.
pub trait IndexOffset {
    fn offset(&self) -> u8;
}

/// Adds an unsigned index to a 16-bit base, wrapping modulo 65536.
pub fn indexed(base: u16, index: &impl IndexOffset) -> u16 {
    base.wrapping_add(index.offset() as u16)
}

/// Adds an unsigned index to a zero page base, wrapping within the zero page.
pub fn zero_page_indexed(base: u8, index: &impl IndexOffset) -> u16 {
    base.wrapping_add(index.offset()) as u16
}

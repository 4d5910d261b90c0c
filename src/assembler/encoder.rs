//! Instruction encoder for the 6502 assembler
//!
//! Chooses an opcode from an operator and the *shape* of its operand text,
//! then strips the addressing decorations so the bare value can be parsed.
//!
//! | Operand shape   | Mode                               |
//! |-----------------|------------------------------------|
//! | `#v`            | Immediate                          |
//! | `(v,X)`         | Indexed indirect                   |
//! | `(v),Y`         | Indirect indexed                   |
//! | `(v)`           | Indirect (JMP only)                |
//! | `v,X` / `v,Y`   | Zero page or absolute, indexed     |
//! | `v`             | Zero page or absolute              |
//! | empty or `A`    | Accumulator (shifts and rotates)   |
//!
//! Zero page is chosen only when `v` is a numeric literal short enough to fit
//! (see [`fits_zero_page`]). Labels always take the absolute form.

use crate::addressing::AddressingMode;
use crate::opcodes::{find_opcode, Mnemonic, OpcodeMetadata};
use crate::value::{parse_literal, split_radix, Radix};

/// Mode and opcode chosen for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    /// Mode implied by the operand's shape
    pub mode: AddressingMode,

    /// Matching opcode, or `None` if the operator has no such form
    pub opcode: Option<&'static OpcodeMetadata>,
}

impl Encoding {
    /// Bytes the instruction occupies.
    pub fn size_bytes(&self) -> u8 {
        self.opcode
            .map_or(self.mode.size_bytes(), |opcode| opcode.size_bytes)
    }
}

/// Strips a trailing `,X` or `,Y` (any case, any spacing around the comma).
///
/// `register` is the lower-case index letter.
fn strip_index(operand: &str, register: char) -> Option<&str> {
    let last = operand.chars().last()?;
    if last.to_ascii_lowercase() != register {
        return None;
    }
    let base = operand[..operand.len() - last.len_utf8()].trim_end();
    base.strip_suffix(',').map(str::trim_end)
}

/// Inner text of `(v,X)`, i.e. `v`.
fn indexed_indirect(operand: &str) -> Option<&str> {
    let inner = operand.strip_prefix('(')?.strip_suffix(')')?;
    strip_index(inner.trim_end(), 'x').map(str::trim_start)
}

/// Inner text of `(v),Y`, i.e. `v`.
fn indirect_indexed(operand: &str) -> Option<&str> {
    let pointer = strip_index(operand, 'y')?;
    pointer
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

/// Inner text of `(v)`, i.e. `v`.
fn indirect(operand: &str) -> Option<&str> {
    operand
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

fn is_accumulator(operand: &str) -> bool {
    operand.is_empty() || operand.eq_ignore_ascii_case("a")
}

/// Decides from text shape alone whether a literal fits a zero page address.
///
/// - `$` hex: at most 2 digits (3 characters after the `$` with a `-`)
/// - `%` binary: at most 8 digits (9 with a `-`)
/// - decimal: at most 3 digits and within 0..=255, or `-` plus at most 3
///   digits and not below -128
///
/// Text that is not a numeric literal (a label) never fits.
pub fn fits_zero_page(operand: &str) -> bool {
    let Ok(value) = parse_literal(operand) else {
        return false;
    };

    let length = operand.chars().count();
    let (radix, digits) = split_radix(operand);
    let negative = digits.starts_with('-');

    match radix {
        Radix::Hexadecimal => length <= if negative { 4 } else { 3 },
        Radix::Binary => length <= if negative { 10 } else { 9 },
        Radix::Decimal if negative => length <= 4 && value >= -128,
        Radix::Decimal => length <= 3 && value <= 255,
    }
}

/// Infers the addressing mode `operand` asks for.
pub fn infer_mode(mnemonic: Mnemonic, operand: &str) -> AddressingMode {
    use AddressingMode::*;

    if mnemonic.is_branch() {
        return Relative;
    }
    if mnemonic.supports(Accumulator) && is_accumulator(operand) {
        return Accumulator;
    }
    if mnemonic.supports(Implicit) {
        return Implicit;
    }
    if operand.starts_with('#') {
        return Immediate;
    }
    if indexed_indirect(operand).is_some() {
        return IndirectX;
    }
    if indirect_indexed(operand).is_some() {
        return IndirectY;
    }
    if indirect(operand).is_some() {
        return Indirect;
    }
    if let Some(base) = strip_index(operand, 'x') {
        return if fits_zero_page(base) { ZeroPageX } else { AbsoluteX };
    }
    if let Some(base) = strip_index(operand, 'y') {
        return if fits_zero_page(base) { ZeroPageY } else { AbsoluteY };
    }
    if fits_zero_page(operand) {
        ZeroPage
    } else {
        Absolute
    }
}

/// Picks the opcode for `mnemonic` and `operand`.
///
/// A zero page form the operator lacks is widened to its absolute form, so
/// `JMP $10` encodes as `4C 10 00` and `LDA $10,Y` as `B9 10 00`.
pub fn select_opcode(mnemonic: Mnemonic, operand: &str) -> Encoding {
    let mode = infer_mode(mnemonic, operand);
    let opcode = find_opcode(mnemonic, mode).or_else(|| {
        mode.widened()
            .and_then(|wide| find_opcode(mnemonic, wide))
    });

    Encoding { mode, opcode }
}

/// Removes the decorations of `mode` from `operand`, leaving the value text.
pub fn clean_operand(mode: AddressingMode, operand: &str) -> &str {
    let cleaned = match mode {
        AddressingMode::Accumulator if is_accumulator(operand) => Some(""),
        AddressingMode::Immediate => operand.strip_prefix('#').map(str::trim_start),
        AddressingMode::ZeroPageX | AddressingMode::AbsoluteX => strip_index(operand, 'x'),
        AddressingMode::ZeroPageY | AddressingMode::AbsoluteY => strip_index(operand, 'y'),
        AddressingMode::IndirectX => indexed_indirect(operand),
        AddressingMode::IndirectY => indirect_indexed(operand),
        AddressingMode::Indirect => indirect(operand),
        _ => None,
    };

    cleaned.unwrap_or(operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use AddressingMode::*;

    #[test]
    fn test_fits_zero_page() {
        assert!(fits_zero_page("$FF"));
        assert!(fits_zero_page("$-5"));
        assert!(!fits_zero_page("$0700"));
        assert!(fits_zero_page("%11111111"));
        assert!(!fits_zero_page("%111111111"));
        assert!(fits_zero_page("255"));
        assert!(!fits_zero_page("256"));
        assert!(fits_zero_page("-128"));
        assert!(!fits_zero_page("-129"));
        assert!(!fits_zero_page("1000"));
        assert!(!fits_zero_page("loop"));
        assert!(!fits_zero_page(""));
    }

    #[test]
    fn test_infer_mode_by_shape() {
        assert_eq!(infer_mode(Mnemonic::Lda, "#5"), Immediate);
        assert_eq!(infer_mode(Mnemonic::Lda, "$10"), ZeroPage);
        assert_eq!(infer_mode(Mnemonic::Lda, "$1000"), Absolute);
        assert_eq!(infer_mode(Mnemonic::Lda, "$10,X"), ZeroPageX);
        assert_eq!(infer_mode(Mnemonic::Lda, "$1000 , x"), AbsoluteX);
        assert_eq!(infer_mode(Mnemonic::Ldx, "$10,y"), ZeroPageY);
        assert_eq!(infer_mode(Mnemonic::Lda, "($40,X)"), IndirectX);
        assert_eq!(infer_mode(Mnemonic::Lda, "( $40 ) , Y"), IndirectY);
        assert_eq!(infer_mode(Mnemonic::Jmp, "($1234)"), Indirect);
        assert_eq!(infer_mode(Mnemonic::Lda, "data"), Absolute);
    }

    #[test]
    fn test_infer_mode_by_operator() {
        assert_eq!(infer_mode(Mnemonic::Beq, "loop"), Relative);
        assert_eq!(infer_mode(Mnemonic::Asl, ""), Accumulator);
        assert_eq!(infer_mode(Mnemonic::Rol, "a"), Accumulator);
        assert_eq!(infer_mode(Mnemonic::Rol, "$10"), ZeroPage);
        assert_eq!(infer_mode(Mnemonic::Inx, ""), Implicit);
        assert_eq!(infer_mode(Mnemonic::Inx, "5"), Implicit);
    }

    #[test]
    fn test_select_opcode_widens_missing_zero_page_forms() {
        let jmp = select_opcode(Mnemonic::Jmp, "$10");
        assert_eq!(jmp.opcode.unwrap().opcode, 0x4C);
        assert_eq!(jmp.size_bytes(), 3);

        let lda = select_opcode(Mnemonic::Lda, "$10,Y");
        assert_eq!(lda.opcode.unwrap().opcode, 0xB9);
    }

    #[test]
    fn test_select_opcode_missing_form() {
        let sta = select_opcode(Mnemonic::Sta, "#5");
        assert_eq!(sta.mode, Immediate);
        assert!(sta.opcode.is_none());
        assert_eq!(sta.size_bytes(), 2);
    }

    #[test]
    fn test_corrected_zero_page_opcodes() {
        assert_eq!(select_opcode(Mnemonic::Ora, "$10").opcode.unwrap().opcode, 0x05);
        assert_eq!(select_opcode(Mnemonic::Ora, "$10,x").opcode.unwrap().opcode, 0x15);
        assert_eq!(select_opcode(Mnemonic::Ror, "$10").opcode.unwrap().opcode, 0x66);
        assert_eq!(select_opcode(Mnemonic::Ror, "$10,X").opcode.unwrap().opcode, 0x76);
        assert_eq!(select_opcode(Mnemonic::Lsr, "$1000").opcode.unwrap().opcode, 0x4E);
        assert_eq!(select_opcode(Mnemonic::Lsr, "$1000,X").opcode.unwrap().opcode, 0x5E);
    }

    #[test]
    fn test_clean_operand() {
        assert_eq!(clean_operand(Immediate, "# $05"), "$05");
        assert_eq!(clean_operand(ZeroPageX, "$10 , X"), "$10");
        assert_eq!(clean_operand(AbsoluteY, "table,y"), "table");
        assert_eq!(clean_operand(IndirectX, "( $40 , x )"), "$40");
        assert_eq!(clean_operand(IndirectY, "($40),Y"), "$40");
        assert_eq!(clean_operand(Indirect, "( vector )"), "vector");
        assert_eq!(clean_operand(Accumulator, "A"), "");
        assert_eq!(clean_operand(Absolute, "$0700"), "$0700");
    }
}

//! Assembly source line parser
//!
//! Splits one source line into its label, operator and operand:
//!
//! ```text
//! loop:  cpx #-22   ; compare
//! ^^^^   ^^^ ^^^^     ^^^^^^^ comment, discarded
//! label  op  operand
//! ```
//!
//! Everything from the first `;` is a comment. Everything before the *last*
//! `:` is the label, so a label can never itself contain a colon.

use crate::assembler::ErrorType;

/// A parsed line of assembly source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyLine<'a> {
    /// Optional label definition (e.g., "loop" from "loop:")
    pub label: Option<&'a str>,

    /// Optional operator (e.g., "LDA"), as written
    pub operator: Option<&'a str>,

    /// Operand text, trimmed (e.g., "#$42", "$1234,X"); empty when absent
    pub operand: &'a str,
}

/// Parses one line of source.
///
/// Fails with `InvalidLabelName` when the text before the last `:` itself
/// contains a `:`.
pub fn parse_line(line: &str) -> Result<AssemblyLine<'_>, ErrorType> {
    let code = match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    };

    let (label, instruction) = match code.rfind(':') {
        Some(index) => (Some(code[..index].trim()), &code[index + 1..]),
        None => (None, code),
    };

    if let Some(label) = label {
        if label.contains(':') {
            return Err(ErrorType::InvalidLabelName(label.to_string()));
        }
    }

    let instruction = instruction.trim();
    if instruction.is_empty() {
        return Ok(AssemblyLine {
            label,
            operator: None,
            operand: "",
        });
    }

    let (operator, operand) = match instruction.find(char::is_whitespace) {
        Some(index) => (&instruction[..index], instruction[index..].trim()),
        None => (instruction, ""),
    };

    Ok(AssemblyLine {
        label,
        operator: Some(operator),
        operand,
    })
}

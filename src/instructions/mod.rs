//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU and the decoded operand.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::cpu::{Operand, StepOutcome};
use crate::{MemoryBus, Mnemonic, CPU};

/// Runs the handler for `mnemonic`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    operand: Operand,
) -> StepOutcome {
    use Mnemonic::*;

    match mnemonic {
        Adc => alu::execute_adc(cpu, operand),
        Sbc => alu::execute_sbc(cpu, operand),
        And => alu::execute_and(cpu, operand),
        Ora => alu::execute_ora(cpu, operand),
        Eor => alu::execute_eor(cpu, operand),
        Cmp => alu::execute_cmp(cpu, operand),
        Cpx => alu::execute_cpx(cpu, operand),
        Cpy => alu::execute_cpy(cpu, operand),
        Bit => alu::execute_bit(cpu, operand),

        Bcc | Bcs | Beq | Bne | Bmi | Bpl | Bvc | Bvs => {
            branches::execute_branch(cpu, mnemonic, operand)
        }

        Asl => shifts::execute_asl(cpu, operand),
        Lsr => shifts::execute_lsr(cpu, operand),
        Rol => shifts::execute_rol(cpu, operand),
        Ror => shifts::execute_ror(cpu, operand),

        Lda => load_store::execute_lda(cpu, operand),
        Ldx => load_store::execute_ldx(cpu, operand),
        Ldy => load_store::execute_ldy(cpu, operand),
        Sta => load_store::execute_sta(cpu, operand),
        Stx => load_store::execute_stx(cpu, operand),
        Sty => load_store::execute_sty(cpu, operand),

        Inc => inc_dec::execute_inc(cpu, operand),
        Dec => inc_dec::execute_dec(cpu, operand),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Jmp => control::execute_jmp(cpu, operand),
        Jsr => control::execute_jsr(cpu, operand),
        Rts => control::execute_rts(cpu),
        Nop => {}
        Brk => return control::execute_brk(),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc | Sec | Cli | Sei | Cld | Sed | Clv => flags::execute_flag(cpu, mnemonic),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),
    }

    StepOutcome::Continue
}

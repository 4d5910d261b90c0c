//! # Processor
//!
//! [`Processor`] is the aggregate a front end drives: it owns the CPU, its
//! memory, the assembler and the undo log.
//!
//! ## State Machine
//!
//! ```text
//!            execute_next() Ok(Continue)
//!          +-----------------------------+
//!          v                             |
//!       Ready ---- BRK ----> Halted      |
//!         |  \                 |         |
//!         |   unknown opcode   +---------+
//!         |        v
//!         |     Faulted
//!         |
//!  undo() or a reset returns to Ready from any state
//! ```
//!
//! Every call to [`Processor::execute_next`] records a snapshot before the
//! instruction is fetched, so even a BRK or an unknown opcode can be undone.

use log::debug;

use crate::assembler::{Assembler, AssemblerError, AssemblerOutput};
use crate::cpu::{StepOutcome, CPU};
use crate::memory::Memory;
use crate::registers::StatusRegister;
use crate::undo::{Snapshot, UndoError, UndoLog, UndoStrategy};
use crate::ExecutionError;

/// Address programs are assembled to and execution starts from.
pub const DEFAULT_START_ADDRESS: u16 = 0x0600;

/// Configuration options for a [`Processor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Where assembly places code and where PC points after a reset
    pub start_address: u16,

    /// How memory is captured for undo
    pub undo_strategy: UndoStrategy,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            start_address: DEFAULT_START_ADDRESS,
            undo_strategy: UndoStrategy::default(),
        }
    }
}

/// Where the processor stands after its last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessorState {
    /// Ready to execute the instruction at PC
    #[default]
    Ready,

    /// Paused by BRK. Stepping resumes after the BRK opcode.
    Halted,

    /// Hit an unmapped opcode. Undo or reset before stepping again.
    Faulted,
}

/// Result of [`Processor::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, including a final BRK
    pub steps: usize,

    /// Outcome of the last instruction executed
    pub outcome: StepOutcome,
}

/// A 6502 with 64KB of memory, an assembler and instruction-level undo.
///
/// # Examples
///
/// ```
/// use sim6502::{Processor, ProcessorState};
///
/// let mut processor = Processor::new();
/// processor.assemble("lda #$42\nsta $0700\nbrk").unwrap();
///
/// let summary = processor.run(100).unwrap();
/// assert_eq!(summary.steps, 3);
/// assert_eq!(processor.state(), ProcessorState::Halted);
/// assert_eq!(processor.memory().cells()[0x0700], 0x42);
///
/// processor.undo().unwrap();
/// processor.undo().unwrap();
/// assert_eq!(processor.memory().cells()[0x0700], 0x00);
/// assert_eq!(processor.pc(), 0x0602);
/// ```
#[derive(Debug, Clone)]
pub struct Processor {
    cpu: CPU<Memory>,
    assembler: Assembler,
    undo_log: UndoLog,
    options: ProcessorOptions,
    state: ProcessorState,
}

impl Processor {
    pub fn new() -> Self {
        Self::with_options(ProcessorOptions::default())
    }

    pub fn with_options(options: ProcessorOptions) -> Self {
        Self {
            cpu: CPU::new(Memory::new(), options.start_address),
            assembler: Assembler::new(options.start_address),
            undo_log: UndoLog::new(),
            options,
            state: ProcessorState::Ready,
        }
    }

    // ========== Assembly ==========

    /// Assembles `source` into memory at the start address.
    ///
    /// Registers are left alone. The undo log is cleared whether or not
    /// assembly succeeds, since memory may have been partially written.
    pub fn assemble(&mut self, source: &str) -> Result<AssemblerOutput, AssemblerError> {
        self.forget_history();
        self.assembler.assemble(source, self.cpu.memory_mut())
    }

    // ========== Execution ==========

    /// Executes the instruction at PC, recording an undo snapshot first.
    ///
    /// The snapshot is recorded even when the step halts or fails, so the
    /// attempt can always be undone.
    pub fn execute_next(&mut self) -> Result<StepOutcome, ExecutionError> {
        self.undo_log.absorb_edits(self.cpu.memory_mut());
        let pending = Snapshot::begin(&mut self.cpu, self.options.undo_strategy);
        let result = self.cpu.step();
        self.undo_log.push(pending.finish(&mut self.cpu));
        self.undo_log.watch_edits(self.cpu.memory_mut());

        self.state = match result {
            Ok(StepOutcome::Continue) => ProcessorState::Ready,
            Ok(StepOutcome::Halted(_)) => ProcessorState::Halted,
            Err(_) => ProcessorState::Faulted,
        };

        result
    }

    /// Steps until BRK, a fault, or `step_limit` instructions.
    ///
    /// # Errors
    ///
    /// Returns the fault of the failing step. Steps executed before it stay
    /// on the undo log.
    pub fn run(&mut self, step_limit: usize) -> Result<RunSummary, ExecutionError> {
        let mut summary = RunSummary {
            steps: 0,
            outcome: StepOutcome::Continue,
        };

        while summary.steps < step_limit {
            summary.outcome = self.execute_next()?;
            summary.steps += 1;
            if summary.outcome != StepOutcome::Continue {
                break;
            }
        }

        Ok(summary)
    }

    /// Reverses the most recent [`execute_next`](Self::execute_next),
    /// including any memory edits made since it ran.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        self.undo_log.absorb_edits(self.cpu.memory_mut());
        self.undo_log.undo(&mut self.cpu)?;
        self.undo_log.watch_edits(self.cpu.memory_mut());
        self.state = ProcessorState::Ready;
        Ok(())
    }

    // ========== Reset ==========

    /// Zeroes all 64KB of memory and clears the undo log.
    pub fn reset_memory(&mut self) {
        debug!("reset memory");
        self.forget_history();
        self.cpu.memory_mut().clear();
    }

    /// Restores the registers to their reset values and clears the undo log.
    pub fn reset_registers(&mut self) {
        debug!("reset registers, PC=${:04X}", self.options.start_address);
        self.cpu.reset_registers(self.options.start_address);
        self.forget_history();
        self.state = ProcessorState::Ready;
    }

    pub fn reset(&mut self) {
        self.reset_memory();
        self.reset_registers();
    }

    pub fn clear_undo(&mut self) {
        self.forget_history();
    }

    fn forget_history(&mut self) {
        self.cpu.memory_mut().close_journal();
        self.undo_log.clear();
    }

    // ========== Accessors ==========

    pub fn state(&self) -> ProcessorState {
        self.state
    }

    pub fn start_address(&self) -> u16 {
        self.options.start_address
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Number of instructions that can be undone
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    pub fn cpu(&self) -> &CPU<Memory> {
        &self.cpu
    }

    pub fn memory(&self) -> &Memory {
        self.cpu.memory()
    }

    /// Direct memory access for hand-editing between steps.
    ///
    /// Writes made here count as part of the most recent instruction: the
    /// next [`undo`](Self::undo) reverts them along with it. With an empty
    /// undo log they are permanent.
    pub fn memory_mut(&mut self) -> &mut Memory {
        self.cpu.memory_mut()
    }

    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed status byte (NV-BDIZC)
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    pub fn status_register(&self) -> &StatusRegister {
        self.cpu.status_register()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

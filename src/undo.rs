//! # Instruction Undo
//!
//! Every attempted instruction pushes one [`Snapshot`] onto an [`UndoLog`],
//! successful or not. Popping a snapshot restores the registers and memory
//! exactly as they were before that attempt.
//!
//! Two memory strategies are available:
//!
//! - [`UndoStrategy::Journal`] records each `(address, previous byte)` pair the
//!   instruction overwrites. An instruction writes at most two bytes, so a
//!   snapshot stays small.
//! - [`UndoStrategy::FullSnapshot`] copies the whole 64KB image per instruction.
//!
//! Memory edits made between instructions belong to the newest snapshot:
//! undoing it puts memory back exactly as it was before that instruction.
//! With a journal, the log keeps recording after each instruction and folds
//! those writes into the newest entry.

use log::debug;
use thiserror::Error;

use crate::memory::{Memory, MEMORY_SIZE};
use crate::registers::{ProgramCounter, Register8, StackPointer, StatusRegister};
use crate::CPU;

/// Nothing left to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("undo stack is empty")]
    EmptyStack,
}

/// How memory is captured before each instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndoStrategy {
    /// Copy the full 64KB memory image.
    FullSnapshot,

    /// Record only the cells the instruction overwrites.
    #[default]
    Journal,
}

/// Register state before an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pub a: Register8,
    pub x: Register8,
    pub y: Register8,
    pub sp: StackPointer,
    pub pc: ProgramCounter,
    pub status: StatusRegister,
}

impl RegisterSnapshot {
    pub(crate) fn capture(cpu: &CPU<Memory>) -> Self {
        Self {
            a: cpu.a,
            x: cpu.x,
            y: cpu.y,
            sp: cpu.sp,
            pc: cpu.pc,
            status: cpu.status,
        }
    }

    pub(crate) fn restore(&self, cpu: &mut CPU<Memory>) {
        cpu.a = self.a;
        cpu.x = self.x;
        cpu.y = self.y;
        cpu.sp = self.sp;
        cpu.pc = self.pc;
        cpu.status = self.status;
    }
}

#[derive(Debug, Clone)]
enum MemoryUndo {
    Image(Box<[u8; MEMORY_SIZE]>),
    Journal(Vec<(u16, u8)>),
}

/// Everything needed to reverse one instruction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    registers: RegisterSnapshot,
    memory: MemoryUndo,
}

impl Snapshot {
    /// Register values captured before the instruction.
    pub fn registers(&self) -> &RegisterSnapshot {
        &self.registers
    }

    /// Starts capturing: records the registers and either copies memory or
    /// opens a write journal on it.
    pub(crate) fn begin(cpu: &mut CPU<Memory>, strategy: UndoStrategy) -> PendingSnapshot {
        let registers = RegisterSnapshot::capture(cpu);
        let image = match strategy {
            UndoStrategy::FullSnapshot => Some(cpu.memory.image()),
            UndoStrategy::Journal => {
                cpu.memory.open_journal();
                None
            }
        };
        PendingSnapshot { registers, image }
    }

    fn restore(self, cpu: &mut CPU<Memory>) {
        self.registers.restore(cpu);
        match self.memory {
            MemoryUndo::Image(image) => cpu.memory.restore_image(image),
            MemoryUndo::Journal(journal) => cpu.memory.roll_back(&journal),
        }
    }
}

/// A snapshot whose instruction is still executing.
#[derive(Debug)]
pub(crate) struct PendingSnapshot {
    registers: RegisterSnapshot,
    image: Option<Box<[u8; MEMORY_SIZE]>>,
}

impl PendingSnapshot {
    /// Closes the write journal, if one was opened, and seals the snapshot.
    pub(crate) fn finish(self, cpu: &mut CPU<Memory>) -> Snapshot {
        let memory = match self.image {
            Some(image) => MemoryUndo::Image(image),
            None => MemoryUndo::Journal(cpu.memory.close_journal()),
        };
        Snapshot {
            registers: self.registers,
            memory,
        }
    }
}

/// LIFO stack of snapshots, one per attempted instruction.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: Vec<Snapshot>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Pops the newest snapshot and restores it into `cpu`.
    pub(crate) fn undo(&mut self, cpu: &mut CPU<Memory>) -> Result<(), UndoError> {
        let snapshot = self.entries.pop().ok_or(UndoError::EmptyStack)?;
        snapshot.restore(cpu);
        debug!("undo: {} snapshots remain", self.entries.len());
        Ok(())
    }

    /// Moves writes recorded since the last instruction into the newest
    /// journal entry and stops recording.
    pub(crate) fn absorb_edits(&mut self, memory: &mut Memory) {
        let edits = memory.close_journal();
        if let Some(Snapshot {
            memory: MemoryUndo::Journal(journal),
            ..
        }) = self.entries.last_mut()
        {
            journal.extend(edits);
        }
    }

    /// Starts recording writes for the newest entry, if it keeps a journal.
    pub(crate) fn watch_edits(&self, memory: &mut Memory) {
        if let Some(Snapshot {
            memory: MemoryUndo::Journal(_),
            ..
        }) = self.entries.last()
        {
            memory.open_journal();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.last()
    }
}

//! WASM API for the 6502 simulator.
//!
//! Provides JavaScript-callable interfaces for assembly, stepping, undo and
//! state inspection.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::assembler::source_map::SourceMap;
use crate::{MemoryBus, Processor, StepOutcome};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Result of assembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    success: bool,
    byte_count: usize,
    start_addr: u16,
    error_message: Option<String>,
    error_line: Option<usize>,
}

#[wasm_bindgen]
impl AssemblyResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    #[wasm_bindgen(getter)]
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    #[wasm_bindgen(getter)]
    pub fn start_addr(&self) -> u16 {
        self.start_addr
    }

    #[wasm_bindgen(getter)]
    pub fn end_addr(&self) -> u16 {
        self.start_addr.wrapping_add(self.byte_count as u16)
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> Option<String> {
        self.error_message.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_line(&self) -> Option<usize> {
        self.error_line
    }
}

/// Main simulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    processor: Processor,
    source_map: SourceMap,
}

#[wasm_bindgen]
impl Emulator6502 {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            processor: Processor::new(),
            source_map: SourceMap::new(),
        }
    }

    /// Assemble source into memory at the start address
    pub fn assemble(&mut self, source: String) -> AssemblyResult {
        let start_addr = self.processor.start_address();
        match self.processor.assemble(&source) {
            Ok(output) => {
                self.source_map = output.source_map;
                AssemblyResult {
                    success: true,
                    byte_count: output.byte_count,
                    start_addr,
                    error_message: None,
                    error_line: None,
                }
            }
            Err(error) => {
                self.source_map = SourceMap::new();
                AssemblyResult {
                    success: false,
                    byte_count: 0,
                    start_addr,
                    error_message: Some(error.to_string()),
                    error_line: Some(error.line),
                }
            }
        }
    }

    /// Execute a single instruction
    ///
    /// Returns false when a BRK paused execution.
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.processor
            .execute_next()
            .map(|outcome| outcome == StepOutcome::Continue)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `limit` instructions and return how many ran
    pub fn run(&mut self, limit: u32) -> Result<u32, JsError> {
        self.processor
            .run(limit as usize)
            .map(|summary| summary.steps as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Step back one instruction
    pub fn undo(&mut self) -> Result<(), JsError> {
        self.processor
            .undo()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.processor.can_undo()
    }

    pub fn reset(&mut self) {
        self.processor.reset();
        self.source_map = SourceMap::new();
    }

    pub fn reset_registers(&mut self) {
        self.processor.reset_registers();
    }

    pub fn reset_memory(&mut self) {
        self.processor.reset_memory();
        self.source_map = SourceMap::new();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.processor.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.processor.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.processor.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.processor.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.processor.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.processor.status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.processor.cpu().flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.processor.cpu().flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.processor.cpu().flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.processor.cpu().flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.processor.cpu().flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.processor.cpu().flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.processor.cpu().flag_c()
    }

    /// Source line of the instruction at PC, if it came from the last assembly
    #[wasm_bindgen(getter)]
    pub fn current_line(&self) -> Option<usize> {
        self.source_map.line_for_address(self.processor.pc())
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.processor.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.processor.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Uint8Array {
        let start = (page as u16) << 8;
        Uint8Array::from(&self.processor.memory().dump(start, 256)[..])
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

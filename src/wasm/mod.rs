//! WebAssembly bindings for the sim6502 simulator.
//!
//! This module provides JavaScript-callable interfaces to the processor,
//! enabling browser-based assembly, stepping and undo.

pub mod api;

pub use api::Emulator6502;

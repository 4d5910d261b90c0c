//! Fuzz target for the assembler.
//!
//! Feeds arbitrary text to the two-pass assembler. Errors are expected;
//! panics are bugs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sim6502::{Assembler, Memory};

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);
    let mut memory = Memory::new();

    match Assembler::default().assemble(&source, &mut memory) {
        Ok(output) => {
            // Every emitted byte is covered by the source map
            for (range, _) in output.source_map.iter() {
                assert!(range.len >= 1 && range.len <= 3);
            }
        }
        Err(error) => {
            assert!(error.line >= 1);
            assert!(error.line <= source.lines().count());
        }
    }
});

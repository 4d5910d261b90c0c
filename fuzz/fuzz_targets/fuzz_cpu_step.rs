//! Fuzz target for CPU step execution and undo.
//!
//! Builds an arbitrary register file and memory around the program start,
//! executes a few instructions, then undoes them and checks that the
//! processor is back where it started.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{Processor, ProcessorOptions, UndoStrategy};

/// Arbitrary register file, entered through a short setup program
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x0700
    program: [u8; 32],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
    full_snapshot: bool,
    steps: u8,
}

type State = (u8, u8, u8, u8, u16, u8, Vec<u8>);

fn state(processor: &Processor) -> State {
    (
        processor.a(),
        processor.x(),
        processor.y(),
        processor.sp(),
        processor.pc(),
        processor.status(),
        processor.memory().cells().to_vec(),
    )
}

fuzz_target!(|input: FuzzInput| {
    let undo_strategy = if input.full_snapshot {
        UndoStrategy::FullSnapshot
    } else {
        UndoStrategy::Journal
    };
    let mut processor = Processor::with_options(ProcessorOptions {
        undo_strategy,
        ..ProcessorOptions::default()
    });

    let FuzzRegisters { a, x, y, sp, status } = input.registers;
    let memory = processor.memory_mut();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x0700, &input.memory.program);
    // LDX #sp ; TXS ; LDA #status ; PHA ; LDX #x ; LDY #y ; LDA #a ; PLP ; JMP $0700
    memory.load(
        0x0600,
        &[0xA2, sp, 0x9A, 0xA9, status, 0x48, 0xA2, x, 0xA0, y, 0xA9, a, 0x28, 0x4C, 0x00, 0x07],
    );
    if processor.run(9).is_err() {
        return;
    }
    processor.clear_undo();

    let before = state(&processor);
    let mut executed = 0;
    for _ in 0..(input.steps % 16) {
        executed += 1;
        if processor.execute_next().is_err() {
            break;
        }
    }

    for _ in 0..executed {
        assert!(processor.undo().is_ok());
    }
    assert_eq!(state(&processor), before);
});

//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, then executes one
//! instruction. Every opcode, legal or not, must step without panicking.

#![no_main]

use arbitrary::Arbitrary;
use mc6800::{ConditionCodes, Cpu, ExecutionError, FlatMemory, MemoryBus};
use libfuzzer_sys::fuzz_target;

/// Arbitrary register file
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    b: u8,
    ix: u16,
    sp: u16,
    cc: u8,
}

/// Memory regions touched by the first instruction
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Direct page contents
    direct_page: [u8; 256],
    /// Bytes around the index register
    indexed: [u8; 256],
    /// Bytes just above the stack pointer
    stack: [u8; 16],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0x0000, &input.memory.direct_page);
    memory.load(input.cpu_state.ix, &input.memory.indexed);
    memory.load(input.cpu_state.sp.wrapping_add(1), &input.memory.stack);

    // Vectors and the instruction go in last so nothing above overwrites them
    memory.write_u16(0xFFFE, 0x8000);
    memory.write_u16(0xFFFC, 0x9000);
    memory.write_u16(0xFFFA, 0xA000);
    memory.write_u16(0xFFF8, 0xB000);
    memory.load(0x8000, &input.memory.instruction_bytes);

    let mut cpu = Cpu::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_b(input.cpu_state.b);
    cpu.set_ix(input.cpu_state.ix);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_cc(ConditionCodes::from_byte(input.cpu_state.cc));

    match cpu.step() {
        Ok(_) => assert!(cpu.cycles() >= 2),
        Err(ExecutionError::IllegalOpcode { opcode, address }) => {
            assert_eq!(opcode, input.memory.instruction_bytes[0]);
            assert_eq!(address, 0x8000);
            assert_eq!(cpu.pc(), 0x8001);
        }
    }

    // The two unused CC bits always read as ones
    assert_eq!(cpu.cc_byte() & 0xC0, 0xC0);
});

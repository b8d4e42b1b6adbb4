//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the disassembler and checks that the
//! listing covers the input exactly.

#![no_main]

use arbitrary::Arbitrary;
use mc6800::disassembler::formatter::format_instruction;
use mc6800::{disassemble, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
        ..Default::default()
    };

    let instructions = disassemble(&input.bytes, options);

    let mut covered = Vec::with_capacity(input.bytes.len());
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(!format_instruction(instr).is_empty());

        covered.extend(instr.bytes());
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    // Re-assembling the raw bytes of every line gives back the input
    assert_eq!(covered, input.bytes);
});

//! Consistency tests for the 256-entry descriptor table.

use mc6800::{
    decode, AddressingMode, ConditionCodes, Cpu, FlatMemory, MemoryBus, Operand, Operation,
    DESCRIPTOR_TABLE,
};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_u16(0xFFFE, 0x8000);
    let mut cpu = Cpu::new(memory);
    cpu.set_sp(0x01FF);
    cpu
}

fn changes_flow(operation: Operation) -> bool {
    matches!(
        operation,
        Operation::Branch(_)
            | Operation::BranchSubroutine
            | Operation::Jump
            | Operation::JumpSubroutine
            | Operation::ReturnSubroutine
            | Operation::SoftwareInterrupt
            | Operation::ReturnInterrupt
    )
}

#[test]
fn test_legal_and_illegal_counts() {
    let legal = DESCRIPTOR_TABLE.iter().filter(|d| d.is_legal()).count();
    assert_eq!(legal, 197);
    assert_eq!(256 - legal, 59);
}

#[test]
fn test_illegal_descriptors_are_uniform() {
    for (opcode, desc) in DESCRIPTOR_TABLE.iter().enumerate() {
        if !desc.is_legal() {
            assert_eq!(desc.mnemonic, "???", "opcode {:#04X}", opcode);
            assert_eq!(desc.cycles, 2);
            assert_eq!(desc.affects, ConditionCodes::empty());
        }
    }
}

#[test]
fn test_known_illegal_opcodes() {
    for opcode in [0x00, 0x02, 0x03, 0x04, 0x05, 0x12, 0x13, 0x14, 0x15, 0x18, 0x1A, 0x21, 0x38] {
        assert!(!decode(opcode).is_legal(), "opcode {:#04X}", opcode);
    }
    for opcode in [0x41, 0x42, 0x45, 0x4B, 0x4E, 0x87, 0x8F, 0xC7, 0xCD, 0xCF, 0xFC, 0xFD] {
        assert!(!decode(opcode).is_legal(), "opcode {:#04X}", opcode);
    }
}

#[test]
fn test_memory_operand_has_memory_mode() {
    for (opcode, desc) in DESCRIPTOR_TABLE.iter().enumerate() {
        let uses_memory = [desc.src1, desc.src2, desc.dst].contains(&Operand::Memory);
        if uses_memory {
            assert_ne!(desc.mode, AddressingMode::None, "opcode {:#04X}", opcode);
        }
    }
}

#[test]
fn test_column_layout() {
    // The four memory columns share mnemonics across a row
    for low in 0x00..=0x0F_u8 {
        for (a, b) in [(0x80, 0x90), (0x90, 0xA0), (0xA0, 0xB0), (0xC0, 0xD0), (0xD0, 0xE0), (0xE0, 0xF0)] {
            let first = decode(a | low);
            let second = decode(b | low);
            if first.is_legal() && second.is_legal() && !first.is_relative() {
                assert_eq!(first.mnemonic, second.mnemonic, "{:#04X} vs {:#04X}", a | low, b | low);
            }
        }
    }
    assert_eq!(decode(0x96).mode, AddressingMode::Direct);
    assert_eq!(decode(0xA6).mode, AddressingMode::Indexed);
    assert_eq!(decode(0xB6).mode, AddressingMode::Extended);
    assert_eq!(decode(0x86).mode, AddressingMode::Immediate);
}

#[test]
fn test_cycle_counts() {
    let expected: [(u8, u8); 24] = [
        (0x01, 2),  // NOP
        (0x08, 4),  // INX
        (0x20, 4),  // BRA
        (0x36, 4),  // PSHA
        (0x39, 5),  // RTS
        (0x3B, 10), // RTI
        (0x3E, 9),  // WAI
        (0x3F, 12), // SWI
        (0x60, 7),  // NEG idx
        (0x70, 6),  // NEG ext
        (0x6E, 4),  // JMP idx
        (0x7E, 3),  // JMP ext
        (0x86, 2),  // LDAA imm
        (0x96, 3),  // LDAA dir
        (0xA6, 5),  // LDAA idx
        (0xB6, 4),  // LDAA ext
        (0x97, 4),  // STAA dir
        (0xA7, 6),  // STAA idx
        (0xB7, 5),  // STAA ext
        (0x8C, 3),  // CPX imm
        (0x8D, 8),  // BSR
        (0xAD, 8),  // JSR idx
        (0xBD, 9),  // JSR ext
        (0xFF, 6),  // STX ext
    ];
    for (opcode, cycles) in expected {
        assert_eq!(decode(opcode).cycles, cycles, "opcode {:#04X}", opcode);
    }
}

#[test]
fn test_instruction_sizes() {
    assert_eq!(decode(0x01).size_bytes(), 1);
    assert_eq!(decode(0x86).size_bytes(), 2);
    assert_eq!(decode(0x8E).size_bytes(), 3); // LDS #
    assert_eq!(decode(0xCE).size_bytes(), 3); // LDX #
    assert_eq!(decode(0x8C).size_bytes(), 3); // CPX #
    assert_eq!(decode(0x97).size_bytes(), 2);
    assert_eq!(decode(0xA7).size_bytes(), 2);
    assert_eq!(decode(0xB7).size_bytes(), 3);
    assert_eq!(decode(0x27).size_bytes(), 2);
    assert_eq!(decode(0x8D).size_bytes(), 2);
    assert_eq!(decode(0x36).size_bytes(), 1);
}

#[test]
fn test_every_legal_opcode_executes() {
    for opcode in 0..=255u8 {
        let desc = decode(opcode);
        if !desc.is_legal() {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10, 0x20]);
        cpu.set_ix(0x4000);

        cpu.step()
            .unwrap_or_else(|e| panic!("opcode {:#04X}: {}", opcode, e));

        assert_eq!(cpu.cycles(), desc.cycles as u64, "opcode {:#04X}", opcode);
        if !changes_flow(desc.operation) {
            assert_eq!(
                cpu.pc(),
                0x8000 + desc.size_bytes() as u16,
                "opcode {:#04X} ({})",
                opcode,
                desc.mnemonic
            );
        }
    }
}

#[test]
fn test_pack_is_distinct_for_legal_opcodes() {
    let mut packed: Vec<u32> = DESCRIPTOR_TABLE
        .iter()
        .filter(|d| d.is_legal())
        .map(|d| d.pack())
        .collect();
    packed.sort_unstable();
    packed.dedup();

    assert_eq!(packed.len(), 197);
}

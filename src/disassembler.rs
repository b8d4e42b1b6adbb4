//! 6800 Disassembler Module
//!
//! Converts binary machine code into Motorola-syntax assembly mnemonics. The CPU
//! uses it for its per-instruction trace output and the opcode statistics report.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDAA", "STX", "BEQ")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes, big-endian for 16-bit operands)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost
    pub base_cycles: u8,
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and branch targets)
    pub start_address: u16,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Illegal opcodes, and instructions truncated by the end of the slice, become
/// one-byte `.byte` directives.
///
/// # Examples
///
/// ```
/// use mc6800::{disassemble, DisassemblyOptions};
/// use mc6800::disassembler::formatter::format_instruction;
///
/// // LDAA #$10 / STAA $2000 / BRA *-5
/// let code = [0x86, 0x10, 0xB7, 0x20, 0x00, 0x20, 0xF9];
/// let options = DisassemblyOptions { start_address: 0x0100, ..Default::default() };
/// let text: Vec<String> = disassemble(&code, options).iter().map(format_instruction).collect();
///
/// assert_eq!(text, vec!["LDAA #$10", "STAA $2000", "BRA $0100"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        match decoder::decode_instruction(&bytes[pc..], address) {
            Some(instr) => {
                pc += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes as u16);
                instructions.push(instr);
            }
            None => {
                instructions.push(Instruction::data_byte(address, bytes[pc]));
                pc += 1;
                address = address.wrapping_add(1);
            }
        }
    }

    instructions
}

impl Instruction {
    /// A `.byte` directive standing in for an undecodable byte.
    pub fn data_byte(address: u16, value: u8) -> Self {
        Self {
            address,
            opcode: value,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::None,
            operand_bytes: vec![value],
            size_bytes: 1,
            base_cycles: 0,
        }
    }

    /// The raw bytes of the instruction, opcode first.
    pub fn bytes(&self) -> Vec<u8> {
        if self.mnemonic == ".byte" {
            return vec![self.opcode];
        }
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }
}

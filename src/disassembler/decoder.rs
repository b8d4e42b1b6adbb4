//! Instruction decoder for the 6800 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::decode;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) if the opcode is valid and fully present, None otherwise
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let desc = decode(opcode);

    if !desc.is_legal() {
        return None;
    }

    let operand_len = (desc.size_bytes() - 1) as usize;
    if rest.len() < operand_len {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: desc.mnemonic,
        addressing_mode: desc.mode,
        operand_bytes: rest[..operand_len].to_vec(),
        size_bytes: desc.size_bytes(),
        base_cycles: desc.cycles,
    })
}

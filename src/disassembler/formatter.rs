//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::decode;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format an instruction as a listing line: address, raw bytes, then text.
///
/// ```
/// use mc6800::disassembler::decoder::decode_instruction;
/// use mc6800::disassembler::formatter::format_listing_line;
///
/// let instr = decode_instruction(&[0xB7, 0x80, 0x04], 0xE000).unwrap();
/// assert_eq!(format_listing_line(&instr), "E000  B7 80 04  STAA $8004");
/// ```
pub fn format_listing_line(instr: &Instruction) -> String {
    let hex: Vec<String> = instr.bytes().iter().map(|b| format!("{:02X}", b)).collect();
    format!(
        "{:04X}  {:<8}  {}",
        instr.address,
        hex.join(" "),
        format_instruction(instr)
    )
}

/// Format the operand based on addressing mode
pub fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    // Special case for .byte directive (illegal opcodes)
    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    if decode(instr.opcode).is_relative() {
        return match instr.operand_bytes.first() {
            Some(&offset) => {
                let target = instr
                    .address
                    .wrapping_add(2)
                    .wrapping_add(offset as i8 as i16 as u16);
                format!("${:04X}", target)
            }
            Option::None => "$????".to_string(),
        };
    }

    match instr.addressing_mode {
        None | Push | Pull => String::new(),
        Immediate => match instr.operand_bytes.as_slice() {
            [value] => format!("#${:02X}", value),
            [high, low] => format!("#${:04X}", u16::from_be_bytes([*high, *low])),
            _ => "#$??".to_string(),
        },
        Direct => match instr.operand_bytes.first() {
            Some(addr) => format!("${:02X}", addr),
            Option::None => "$??".to_string(),
        },
        Indexed => match instr.operand_bytes.first() {
            Some(offset) => format!("${:02X},X", offset),
            Option::None => "$??,X".to_string(),
        },
        Extended => match instr.operand_bytes.as_slice() {
            [high, low] => format!("${:04X}", u16::from_be_bytes([*high, *low])),
            _ => "$????".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::decoder::decode_instruction;

    fn text(bytes: &[u8], address: u16) -> String {
        format_instruction(&decode_instruction(bytes, address).unwrap())
    }

    #[test]
    fn test_format_immediate() {
        assert_eq!(text(&[0x86, 0x42], 0x0000), "LDAA #$42");
        assert_eq!(text(&[0x8E, 0xA0, 0x42], 0x0000), "LDS #$A042");
    }

    #[test]
    fn test_format_memory_modes() {
        assert_eq!(text(&[0x97, 0x80], 0x0000), "STAA $80");
        assert_eq!(text(&[0xE6, 0x05], 0x0000), "LDAB $05,X");
        assert_eq!(text(&[0xBD, 0xE0, 0xD0], 0x0000), "JSR $E0D0");
    }

    #[test]
    fn test_format_inherent() {
        assert_eq!(text(&[0x01], 0x1000), "NOP");
        assert_eq!(text(&[0x36], 0x1000), "PSHA");
        assert_eq!(text(&[0x4F], 0x1000), "CLRA");
    }

    #[test]
    fn test_format_branch_targets() {
        // Forward and backward from 0x0200
        assert_eq!(text(&[0x27, 0x10], 0x0200), "BEQ $0212");
        assert_eq!(text(&[0x20, 0xFE], 0x0200), "BRA $0200");
        assert_eq!(text(&[0x8D, 0x80], 0x0200), "BSR $0182");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let instr = Instruction::data_byte(0x2000, 0xFC);
        assert_eq!(format_instruction(&instr), ".byte $FC");
    }
}

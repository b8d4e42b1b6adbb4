//! # Decimal Adjust
//!
//! DAA corrects accumulator A after adding two packed BCD bytes, using the
//! half carry and carry left behind by the addition.

use crate::flags::ConditionCodes;
use crate::{Cpu, MemoryBus};

/// Returns the adjusted accumulator and the complete new CC register.
///
/// H, I and C carry over from `cc`. A carry out of the high digit sets both C
/// and V; otherwise V is cleared. N and Z describe the adjusted byte.
pub fn decimal_adjust(a: u8, cc: ConditionCodes) -> (u8, ConditionCodes) {
    let mut value = a as u16;
    let mut new_cc = cc & (ConditionCodes::H | ConditionCodes::I | ConditionCodes::C);

    if (value & 0x0F) > 0x09 || new_cc.contains(ConditionCodes::H) {
        value += 0x06;
    }
    if value > 0x9F || new_cc.contains(ConditionCodes::C) {
        value += 0x60;
        new_cc |= ConditionCodes::C | ConditionCodes::V;
    }

    let result = value as u8;
    new_cc |= ConditionCodes::nz8(result);
    (result, new_cc)
}

/// Executes DAA. The whole CC register is replaced.
pub(crate) fn execute_daa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let (result, cc) = decimal_adjust(cpu.a, cpu.cc);
    cpu.a = result;
    cpu.cc = cc;
}

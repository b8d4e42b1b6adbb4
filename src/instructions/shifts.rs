//! # Shift and Rotate Instructions
//!
//! This module implements shift and rotate operations on accumulators and memory:
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//! - ASL: Arithmetic Shift Left
//! - ASR: Arithmetic Shift Right (bit 7 is kept)
//! - LSR: Logical Shift Right
//!
//! C always receives the bit shifted out, and V is set to N XOR C of the result.

use crate::flags::ConditionCodes;
use crate::opcodes::Descriptor;
use crate::{Cpu, MemoryBus};

/// A shift kernel: `(value, carry_in) -> (result, carry_out)`.
pub type ShiftFn = fn(u8, bool) -> (u8, bool);

pub fn rotate_left(value: u8, carry: bool) -> (u8, bool) {
    ((value << 1) | carry as u8, value & 0x80 != 0)
}

pub fn rotate_right(value: u8, carry: bool) -> (u8, bool) {
    ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
}

pub fn shift_left(value: u8, _carry: bool) -> (u8, bool) {
    (value << 1, value & 0x80 != 0)
}

pub fn shift_right_arithmetic(value: u8, _carry: bool) -> (u8, bool) {
    ((value >> 1) | (value & 0x80), value & 0x01 != 0)
}

pub fn shift_right_logical(value: u8, _carry: bool) -> (u8, bool) {
    (value >> 1, value & 0x01 != 0)
}

/// N, Z, V, C after a shift. LSR always clears N, which makes V equal C.
pub fn shift_flags(result: u8, carry_out: bool) -> ConditionCodes {
    let mut cc = ConditionCodes::nz8(result);
    cc.set(ConditionCodes::C, carry_out);
    let negative = cc.contains(ConditionCodes::N);
    cc.set(ConditionCodes::V, negative != carry_out);
    cc
}

/// Executes a shift or rotate on the descriptor's operand, in place.
pub(crate) fn execute_shift<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor, op: ShiftFn) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let value = cpu.load8(desc.src1, addr);

    let (result, carry_out) = op(value, cpu.cc.contains(ConditionCodes::C));
    cpu.apply_cc(desc, shift_flags(result, carry_out));
    cpu.store8(desc.dst, addr, result);
}

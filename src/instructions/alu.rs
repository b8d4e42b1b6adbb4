//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the 8-bit arithmetic and logical operations:
//! - ADD, ADC, ABA, INC: addition (`Operation::Add`)
//! - SUB, SBC, SBA, CMP, CBA, DEC, TST: subtraction (`Operation::Sub`)
//! - COM, NEG
//! - AND, BIT, EOR, ORA
//!
//! N, V and C for addition and subtraction come from truth tables indexed by
//! bit 7 of each operand and of the result, the way the 6800 data sheet
//! specifies them. The tables are exact for every carry-in.

use crate::flags::ConditionCodes;
use crate::opcodes::Descriptor;
use crate::{Cpu, MemoryBus};

const N: ConditionCodes = ConditionCodes::N;
const V: ConditionCodes = ConditionCodes::V;
const C: ConditionCodes = ConditionCodes::C;
const NONE: ConditionCodes = ConditionCodes::empty();

/// N, V, C after `a + b`, indexed by `a7 << 2 | b7 << 1 | r7`.
const ADD_FLAGS: [ConditionCodes; 8] = [
    NONE,
    N.union(V),
    C,
    N,
    C,
    N,
    V.union(C),
    N.union(C),
];

/// N, V, C after `a - b`, indexed by `a7 << 2 | b7 << 1 | r7`.
const SUB_FLAGS: [ConditionCodes; 8] = [
    NONE,
    N.union(C),
    C,
    N.union(V).union(C),
    V,
    N,
    NONE,
    N.union(C),
];

fn sign_index(a: u8, b: u8, r: u8) -> usize {
    (((a >> 7) << 2) | ((b >> 7) << 1) | (r >> 7)) as usize
}

/// Adds with an optional carry in, returning the sum and H, N, Z, V, C.
pub fn add8(a: u8, b: u8, carry_in: bool) -> (u8, ConditionCodes) {
    let carry = carry_in as u8;
    let result = a.wrapping_add(b).wrapping_add(carry);

    let mut cc = ADD_FLAGS[sign_index(a, b, result)];
    cc.set(ConditionCodes::Z, result == 0);
    cc.set(ConditionCodes::H, (a & 0x0F) + (b & 0x0F) + carry > 0x0F);
    (result, cc)
}

/// Subtracts with an optional borrow in, returning the difference and N, Z, V, C.
///
/// Half carry is never produced by subtraction.
pub fn sub8(a: u8, b: u8, borrow_in: bool) -> (u8, ConditionCodes) {
    let result = a.wrapping_sub(b).wrapping_sub(borrow_in as u8);

    let mut cc = SUB_FLAGS[sign_index(a, b, result)];
    cc.set(ConditionCodes::Z, result == 0);
    (result, cc)
}

/// COM: ones' complement. C is always set and V always cleared.
pub fn complement(value: u8) -> (u8, ConditionCodes) {
    let result = !value;
    (result, ConditionCodes::nz8(result) | C)
}

/// NEG: two's complement.
///
/// V is set only for $80, which has no positive counterpart. C is the borrow
/// out of `0 - value`, so it is set for every operand except zero.
pub fn negate(value: u8) -> (u8, ConditionCodes) {
    let result = 0u8.wrapping_sub(value);
    let mut cc = ConditionCodes::nz8(result);
    cc.set(V, result == 0x80);
    cc.set(C, result != 0);
    (result, cc)
}

/// Whether an `Add`/`Sub` descriptor folds in the current carry.
fn carry_in<M: MemoryBus>(cpu: &Cpu<M>, desc: &Descriptor) -> bool {
    desc.cc_value.contains(C) && cpu.cc.contains(C)
}

/// Executes ADD, ADC, ABA and INC.
pub(crate) fn execute_add<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let a = cpu.load8(desc.src1, addr);
    let b = cpu.load8(desc.src2, addr);

    let (result, cc) = add8(a, b, carry_in(cpu, desc));
    cpu.apply_cc(desc, cc);
    cpu.store8(desc.dst, addr, result);
}

/// Executes SUB, SBC, SBA, CMP, CBA, DEC and TST.
pub(crate) fn execute_sub<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let a = cpu.load8(desc.src1, addr);
    let b = cpu.load8(desc.src2, addr);

    let (result, cc) = sub8(a, b, carry_in(cpu, desc));
    cpu.apply_cc(desc, cc);
    cpu.store8(desc.dst, addr, result);
}

/// Executes a single-operand operation (COM, NEG) in place.
pub(crate) fn execute_unary<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    desc: &Descriptor,
    op: fn(u8) -> (u8, ConditionCodes),
) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let value = cpu.load8(desc.src1, addr);

    let (result, cc) = op(value);
    cpu.apply_cc(desc, cc);
    cpu.store8(desc.dst, addr, result);
}

/// Executes AND, BIT, EOR and ORA. V is always cleared.
pub(crate) fn execute_logical<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    desc: &Descriptor,
    op: fn(u8, u8) -> u8,
) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let a = cpu.load8(desc.src1, addr);
    let b = cpu.load8(desc.src2, addr);

    let result = op(a, b);
    cpu.apply_cc(desc, ConditionCodes::nz8(result));
    cpu.store8(desc.dst, addr, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference N, Z, V, C computed at full width.
    fn reference(a: u8, b: u8, carry: u8, subtract: bool) -> (u8, ConditionCodes) {
        let (wide, signed) = if subtract {
            (
                a as i32 - b as i32 - carry as i32,
                a as i8 as i32 - b as i8 as i32 - carry as i32,
            )
        } else {
            (
                a as i32 + b as i32 + carry as i32,
                a as i8 as i32 + b as i8 as i32 + carry as i32,
            )
        };
        let result = wide as u8;
        let mut cc = ConditionCodes::nz8(result);
        cc.set(C, !(0..=0xFF).contains(&wide));
        cc.set(V, !(-128..=127).contains(&signed));
        (result, cc)
    }

    #[test]
    fn test_add_truth_table_exhaustive() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                for carry in [false, true] {
                    let (result, cc) = add8(a, b, carry);
                    let (expected, expected_cc) = reference(a, b, carry as u8, false);
                    assert_eq!(result, expected);
                    assert_eq!(cc - ConditionCodes::H, expected_cc, "{:02X}+{:02X}+{}", a, b, carry);
                }
            }
        }
    }

    #[test]
    fn test_sub_truth_table_exhaustive() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                for borrow in [false, true] {
                    let (result, cc) = sub8(a, b, borrow);
                    let (expected, expected_cc) = reference(a, b, borrow as u8, true);
                    assert_eq!(result, expected);
                    assert_eq!(cc, expected_cc, "{:02X}-{:02X}-{}", a, b, borrow);
                }
            }
        }
    }

    #[test]
    fn test_half_carry() {
        assert!(add8(0x08, 0x08, false).1.contains(ConditionCodes::H));
        assert!(add8(0x0F, 0x00, true).1.contains(ConditionCodes::H));
        assert!(!add8(0x07, 0x08, false).1.contains(ConditionCodes::H));
        assert!(!sub8(0x10, 0x01, false).1.contains(ConditionCodes::H));
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(0x00), (0x00, ConditionCodes::Z));
        assert_eq!(negate(0x01), (0xFF, N | C));
        assert_eq!(negate(0x80), (0x80, N | V | C));
        assert_eq!(negate(0xFF), (0x01, C));
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(0x00), (0xFF, N | C));
        assert_eq!(complement(0xFF), (0x00, ConditionCodes::Z | C));
    }
}

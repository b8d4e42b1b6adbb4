//! # Branch Instructions
//!
//! All branches take a signed 8-bit offset relative to the address of the next
//! instruction. The condition is a [`BranchTest`] carried by the descriptor, so
//! one routine serves BRA and all fourteen conditional forms.

use crate::opcodes::BranchTest;
use crate::{Cpu, MemoryBus};

fn fetch_offset<M: MemoryBus>(cpu: &mut Cpu<M>) -> u16 {
    cpu.fetch8() as i8 as i16 as u16
}

/// Executes BRA and the conditional branches.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut Cpu<M>, test: BranchTest) {
    let offset = fetch_offset(cpu);
    if test.is_taken(cpu.cc) {
        cpu.pc = cpu.pc.wrapping_add(offset);
    }
}

/// Executes BSR: the offset is read, the return address pushed, then the
/// branch taken.
pub(crate) fn execute_bsr<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let offset = fetch_offset(cpu);
    cpu.push16(cpu.pc);
    cpu.pc = cpu.pc.wrapping_add(offset);
}

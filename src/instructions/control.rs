//! # Control Flow Instructions
//!
//! This module implements control flow instructions:
//! - JMP: Jump (indexed, extended)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - SWI: Software Interrupt
//! - RTI: Return from Interrupt
//!
//! WAI needs no routine here: it only reports `StepOutcome::WaitForInterrupt`
//! and the caller decides how to wait.

use crate::cpu::SWI_VECTOR;
use crate::flags::ConditionCodes;
use crate::opcodes::Descriptor;
use crate::{Cpu, MemoryBus};

/// Executes JMP.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    cpu.pc = cpu.resolve_address(desc.mode, 2);
}

/// Executes JSR: the target is resolved first, so the pushed return address
/// is the instruction after the JSR.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    let target = cpu.resolve_address(desc.mode, 2);
    cpu.push16(cpu.pc);
    cpu.pc = target;
}

/// Executes RTS.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pull16();
}

/// Executes SWI: the full interrupt sequence through 0xFFFA.
///
/// The interrupt entry cycles are already included in SWI's 12-cycle base
/// count, so they are not charged twice.
pub(crate) fn execute_swi<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let cycles = cpu.cycles;
    cpu.enter_interrupt(SWI_VECTOR, "SWI");
    cpu.cycles = cycles;
}

/// Executes RTI: pulls CC, B, A, IX and PC in that order.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.cc = ConditionCodes::from_byte(cpu.pull8());
    cpu.b = cpu.pull8();
    cpu.a = cpu.pull8();
    cpu.ix = cpu.pull16();
    cpu.pc = cpu.pull16();
}

//! # 6800 Instruction Implementations
//!
//! Instructions are not implemented one function per opcode. Each descriptor
//! names an [`Operation`] and the operands it works on, and [`execute`] routes
//! the descriptor to the routine for that operation. The routines read their
//! sources through the CPU's operand resolver, compute a result and a set of
//! condition codes, merge the codes under the descriptor's affected mask and
//! store the result.
//!
//! ## Categories
//!
//! - **alu**: Add, subtract, complement, negate and the logical operations
//! - **shifts**: ROL, ROR, ASL, ASR, LSR
//! - **bcd**: DAA
//! - **wide**: 16-bit load/store/transfer, increment, decrement and compare
//! - **transfer**: 8-bit moves (loads, stores, TAB/TBA/TAP/TPA, push, pull, clear) and CLx/SEx
//! - **branches**: Conditional branches and BSR
//! - **control**: JMP, JSR, RTS, SWI, RTI, WAI

pub mod alu;
pub mod bcd;
pub mod branches;
pub mod control;
pub mod shifts;
pub mod transfer;
pub mod wide;

use crate::cpu::StepOutcome;
use crate::opcodes::{Descriptor, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the instruction described by `desc`. The opcode has been fetched.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    desc: &Descriptor,
) -> Result<StepOutcome, ExecutionError> {
    match desc.operation {
        Operation::Illegal => {
            return Err(ExecutionError::IllegalOpcode {
                opcode: cpu.opcode,
                address: cpu.pc.wrapping_sub(1),
            })
        }
        Operation::Nop => {}
        Operation::Move8 => transfer::execute_move8(cpu, desc),
        Operation::ModifyConditionCodes => transfer::execute_modify_cc(cpu, desc),
        Operation::Add => alu::execute_add(cpu, desc),
        Operation::Sub => alu::execute_sub(cpu, desc),
        Operation::Complement => alu::execute_unary(cpu, desc, alu::complement),
        Operation::Negate => alu::execute_unary(cpu, desc, alu::negate),
        Operation::And => alu::execute_logical(cpu, desc, |a, b| a & b),
        Operation::Eor => alu::execute_logical(cpu, desc, |a, b| a ^ b),
        Operation::Ora => alu::execute_logical(cpu, desc, |a, b| a | b),
        Operation::RotateLeft => shifts::execute_shift(cpu, desc, shifts::rotate_left),
        Operation::RotateRight => shifts::execute_shift(cpu, desc, shifts::rotate_right),
        Operation::ShiftLeft => shifts::execute_shift(cpu, desc, shifts::shift_left),
        Operation::ShiftRightArithmetic => {
            shifts::execute_shift(cpu, desc, shifts::shift_right_arithmetic)
        }
        Operation::ShiftRightLogical => {
            shifts::execute_shift(cpu, desc, shifts::shift_right_logical)
        }
        Operation::DecimalAdjust => bcd::execute_daa(cpu),
        Operation::Move16 => wide::execute_move16(cpu, desc),
        Operation::Add16 => wide::execute_add16(cpu, desc),
        Operation::Sub16 => wide::execute_sub16(cpu, desc),
        Operation::Branch(test) => branches::execute_branch(cpu, test),
        Operation::BranchSubroutine => branches::execute_bsr(cpu),
        Operation::Jump => control::execute_jmp(cpu, desc),
        Operation::JumpSubroutine => control::execute_jsr(cpu, desc),
        Operation::ReturnSubroutine => control::execute_rts(cpu),
        Operation::SoftwareInterrupt => control::execute_swi(cpu),
        Operation::ReturnInterrupt => control::execute_rti(cpu),
        Operation::WaitForInterrupt => return Ok(StepOutcome::WaitForInterrupt),
    }
    Ok(StepOutcome::Continue)
}

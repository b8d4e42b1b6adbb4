//! # 8-bit Moves and Flag Manipulation
//!
//! `Operation::Move8` covers every instruction that copies a byte unchanged:
//! - LDAA, LDAB, STAA, STAB
//! - TAB, TBA, TAP, TPA
//! - PSHA, PSHB, PULA, PULB (Push/Pull addressing)
//! - CLR, CLRA, CLRB (source is the constant zero)
//!
//! `Operation::ModifyConditionCodes` covers CLC, SEC, CLV, SEV, CLI and SEI.

use crate::flags::ConditionCodes;
use crate::opcodes::Descriptor;
use crate::{Cpu, MemoryBus};

/// Executes an 8-bit move.
///
/// Flags are merged before the store, so TAP (which affects no flags) ends
/// with exactly the transferred value in CC.
pub(crate) fn execute_move8<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    let addr = cpu.resolve_address(desc.mode, 1);
    let value = cpu.load8(desc.src1, addr);

    cpu.apply_cc(desc, ConditionCodes::nz8(value));
    cpu.store8(desc.dst, addr, value);
}

/// Executes CLx/SEx: writes `cc_value` under the affected mask.
pub(crate) fn execute_modify_cc<M: MemoryBus>(cpu: &mut Cpu<M>, desc: &Descriptor) {
    cpu.apply_cc(desc, desc.cc_value);
}

//! Register file snapshots.

use crate::flags::ConditionCodes;
use serde::{Deserialize, Serialize};

/// A copy of every programmer-visible register plus the cycle counter.
///
/// Taken with [`crate::Cpu::snapshot`] and written back with
/// [`crate::Cpu::restore`]. Tests use it to set up an exact processor state
/// before running a single instruction.
///
/// # Examples
///
/// ```
/// use mc6800::{ConditionCodes, Cpu, CpuState, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0200, 0x19); // DAA
///
/// let mut cpu = Cpu::new(memory);
/// cpu.restore(&CpuState {
///     pc: 0x0200,
///     a: 0x7B,
///     ..CpuState::default()
/// });
/// cpu.step().unwrap();
///
/// let after = cpu.snapshot();
/// assert_eq!(after.a, 0x81);
/// assert_eq!(after.pc, 0x0201);
/// assert!(after.cc.contains(ConditionCodes::N));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub sp: u16,
    pub ix: u16,
    pub a: u8,
    pub b: u8,
    pub cc: ConditionCodes,
    pub cycles: u64,
}
